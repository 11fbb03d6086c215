//! Fragment → markdown with `<details>` blocks.
use super::fragment::{Annotation, Block, Fragment, Section, Title, yes_no};

pub const DEFAULT_LINK_BASE: &str = "../../element-types";

#[derive(Debug, Clone)]
pub struct MarkdownWriter {
    link_base: String,
}

impl Default for MarkdownWriter {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_BASE)
    }
}

impl MarkdownWriter {
    pub fn new(link_base: impl Into<String>) -> Self {
        let link_base = link_base.into();
        let link_base = link_base.trim_end_matches('/').to_string();
        Self { link_base }
    }

    /// `## root` followed by the root fragment.
    pub fn document_body(&self, root: &Fragment) -> String {
        let mut out = String::from("## root\n\n");
        self.write_fragment(root, &mut out);
        out
    }

    #[cfg(test)]
    pub fn fragment_to_string(&self, frag: &Fragment) -> String {
        let mut out = String::new();
        self.write_fragment(frag, &mut out);
        out
    }

    pub fn write_fragment(&self, frag: &Fragment, out: &mut String) {
        for block in &frag.blocks {
            match block {
                Block::Line(annotation) => self.write_line(annotation, out),
                Block::Section(section) => self.write_section(section, out),
            }
        }
    }

    fn write_line(&self, annotation: &Annotation, out: &mut String) {
        let value = match annotation {
            Annotation::Type(kind) => format!(
                "[{}]({}/{})",
                kind.display_name(),
                self.link_base,
                kind.doc_page()
            ),
            Annotation::MinItems(n) | Annotation::MaxItems(n) => n.to_string(),
            Annotation::RequiredAll(flag) | Annotation::AdditionalProperties(flag) => {
                yes_no(*flag).to_string()
            }
            Annotation::ItemsOrder(text) => text.to_string(),
        };
        out.push_str(&format!("* **{}**: {value}\n", annotation.label()));
    }

    fn write_section(&self, section: &Section, out: &mut String) {
        match &section.title {
            Title::Strong(title) => {
                out.push_str(&format!("<details><summary> <strong>{title}</strong>: </summary>\n\n"));
            }
            Title::Heading(title) => {
                let h = section.heading_weight();
                out.push_str(&format!("<details><summary><h{h}>{title}</h{h}>: </summary>\n\n"));
            }
        }
        self.write_fragment(&section.body, out);
        out.push_str("</details>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_schema;
    use crate::render::render;
    use serde_json::json;

    fn markdown(v: serde_json::Value) -> String {
        let node = parse_schema(&v).unwrap();
        MarkdownWriter::default().document_body(&render(&node, 0))
    }

    #[test]
    fn object_page_matches_published_markup() {
        let got = markdown(json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "name": { "type": "string" },
                "count": { "type": "unsigned_integer" }
            }
        }));
        let want = "## root\n\n\
            * **Type**: [Object](../../element-types/object)\n\
            * **Additional properties**: No\n\
            <details><summary> <strong>Properties</strong>: </summary>\n\n\
            <details><summary><h3>name</h3>: </summary>\n\n\
            * **Type**: [String](../../element-types/string)\n\
            </details>\n\
            <details><summary><h3>count</h3>: </summary>\n\n\
            * **Type**: [Unsigned integer](../../element-types/numeric-types/unsigned-integer)\n\
            </details>\n\
            </details>\n";
        assert_eq!(got, want);
    }

    #[test]
    fn array_page_matches_published_markup() {
        let got = markdown(json!({
            "type": "array",
            "minItems": 1,
            "maxItems": 3,
            "items": { "type": "integer" }
        }));
        let want = "## root\n\n\
            * **Type**: [Array](../../element-types/array)\n\
            * **Minimum items**: 1\n\
            * **Maximum items**: 3\n\
            <details><summary> <strong>Items</strong>: </summary>\n\n\
            * **Type**: [Integer](../../element-types/numeric-types/integer)\n\
            </details>\n";
        assert_eq!(got, want);
    }

    #[test]
    fn ordered_array_lists_order_then_items_again() {
        let got = markdown(json!({
            "type": "array",
            "items": { "type": "float" },
            "requiredAll": true,
            "itemsOrder": "decreasing"
        }));
        let items = "<details><summary> <strong>Items</strong>: </summary>\n\n\
            * **Type**: [Float](../../element-types/numeric-types/float)\n\
            </details>\n";
        let want = format!(
            "## root\n\n* **Type**: [Array](../../element-types/array)\n{items}\
             * **Required all**: Yes\n* **Items order**: Decreasing order\n{items}"
        );
        assert_eq!(got, want);
    }

    #[test]
    fn prefix_items_page_matches_published_markup() {
        let got = markdown(json!({
            "type": "array",
            "prefixItems": [{ "type": "string" }, { "type": "boolean" }],
            "items": { "type": "float" }
        }));
        let want = "## root\n\n\
            * **Type**: [Array](../../element-types/array)\n\
            <details><summary> <strong>Prefix items</strong>: </summary>\n\n\
            <details><summary> <strong>Item 0</strong>: </summary>\n\n\
            * **Type**: [String](../../element-types/string)\n\
            </details>\n\
            <details><summary> <strong>Item 1</strong>: </summary>\n\n\
            * **Type**: [Boolean](../../element-types/boolean)\n\
            </details>\n\
            </details>\n\
            <details><summary> <strong>Items</strong>: </summary>\n\n\
            * **Type**: [Float](../../element-types/numeric-types/float)\n\
            </details>\n";
        assert_eq!(got, want);
    }

    #[test]
    fn open_object_page_says_yes() {
        let got = markdown(json!({
            "type": "object",
            "additionalProperties": true,
            "properties": {}
        }));
        let want = "## root\n\n\
            * **Type**: [Object](../../element-types/object)\n\
            * **Additional properties**: Yes\n\
            <details><summary> <strong>Properties</strong>: </summary>\n\n\
            </details>\n";
        assert_eq!(got, want);
    }

    #[test]
    fn optional_positions_page_says_no() {
        let got = markdown(json!({
            "type": "array",
            "prefixItems": [{ "type": "integer" }],
            "requiredAll": false
        }));
        let want = "## root\n\n\
            * **Type**: [Array](../../element-types/array)\n\
            <details><summary> <strong>Prefix items</strong>: </summary>\n\n\
            <details><summary> <strong>Item 0</strong>: </summary>\n\n\
            * **Type**: [Integer](../../element-types/numeric-types/integer)\n\
            </details>\n\
            </details>\n\
            * **Required all**: No\n";
        assert_eq!(got, want);
        assert_eq!(got.matches("Required all").count(), 1);
    }

    #[test]
    fn nested_property_headings_deepen_and_clamp() {
        let mut schema = json!({ "type": "boolean" });
        for name in ["f", "e", "d", "c", "b", "a"] {
            schema = json!({ "type": "object", "properties": { name: schema } });
        }
        let got = markdown(schema);
        for h in ["<h3>a</h3>", "<h4>b</h4>", "<h5>c</h5>", "<h6>d</h6>", "<h6>e</h6>", "<h6>f</h6>"] {
            assert!(got.contains(h), "missing {h} in:\n{got}");
        }
        assert!(!got.contains("<h7>"));
    }

    #[test]
    fn link_base_is_configurable() {
        let writer = MarkdownWriter::new("/docs/types/");
        let frag = render(&parse_schema(&json!({ "type": "boolean" })).unwrap(), 0);
        assert_eq!(
            writer.fragment_to_string(&frag),
            "* **Type**: [Boolean](/docs/types/boolean)\n"
        );
    }
}
