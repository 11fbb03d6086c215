//! Schema model → documentation fragment.
//!
//! Rendering is pure: the same node and level always give the same fragment.
//! Levels grow by one per descent into a child schema; sibling sections
//! share a level.
pub mod fragment;
pub mod markdown;

use crate::ir::{ArraySchema, ObjectSchema, SchemaNode};

pub use fragment::{Annotation, Block, Fragment, Section, Title};
pub use markdown::MarkdownWriter;

// ------------------------------- Policy ---------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render `items` a second time after an `itemsOrder` annotation, even
    /// when it was rendered already (or is absent). Matches the pages produced
    /// so far; turn off for a single `Items` section.
    pub duplicate_ordered_items: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { duplicate_ordered_items: true }
    }
}

// ------------------------------- Front API -------------------------------- //

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, node: &SchemaNode, level: usize) -> Fragment {
        match node {
            SchemaNode::Boolean
            | SchemaNode::Integer
            | SchemaNode::UnsignedInteger
            | SchemaNode::Float
            | SchemaNode::String => {
                let mut out = Fragment::new();
                out.line(Annotation::Type(node.kind()));
                out
            }
            SchemaNode::Array(arr) => self.render_array(arr, level),
            SchemaNode::Object(obj) => self.render_object(obj, level),
        }
    }

    fn render_array(&self, arr: &ArraySchema, level: usize) -> Fragment {
        let mut out = Fragment::new();
        out.line(Annotation::Type(crate::ir::Kind::Array));

        if let Some(n) = arr.min_items {
            out.line(Annotation::MinItems(n));
        }
        if let Some(n) = arr.max_items {
            out.line(Annotation::MaxItems(n));
        }

        if let Some(prefix) = &arr.prefix_items {
            let mut positions = Fragment::new();
            for (i, el) in prefix.iter().enumerate() {
                positions.section(
                    Title::Strong(format!("Item {i}")),
                    level,
                    self.render(el, level + 1),
                );
            }
            out.section(Title::Strong("Prefix items".into()), level, positions);
        }

        if let Some(items) = &arr.items {
            out.section(Title::Strong("Items".into()), level, self.render(items, level + 1));
        }

        if let Some(flag) = arr.required_all {
            out.line(Annotation::RequiredAll(flag));
        }

        if let Some(order) = &arr.items_order {
            if let Some(text) = order.description() {
                out.line(Annotation::ItemsOrder(text));
            }
            if self.options.duplicate_ordered_items {
                let body = match &arr.items {
                    Some(items) => self.render(items, level + 1),
                    None => Fragment::new(),
                };
                out.section(Title::Strong("Items".into()), level, body);
            }
        }

        out
    }

    fn render_object(&self, obj: &ObjectSchema, level: usize) -> Fragment {
        let mut out = Fragment::new();
        out.line(Annotation::Type(crate::ir::Kind::Object));
        out.line(Annotation::AdditionalProperties(obj.additional_properties));

        let mut props = Fragment::new();
        for (name, child) in &obj.properties {
            props.section(Title::Heading(name.clone()), level, self.render(child, level + 1));
        }
        out.section(Title::Strong("Properties".into()), level, props);

        out
    }
}

/// Render with default options.
pub fn render(node: &SchemaNode, level: usize) -> Fragment {
    Renderer::default().render(node, level)
}

// ------------------------------- Tests ------------------------------------ //
