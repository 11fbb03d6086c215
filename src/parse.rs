//! JSON → `SchemaNode`.
//!
//! The `type` field picks the kind; every other field is read only when
//! present. Absent fields stay `None`, never an error.
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::ir::{ArraySchema, ItemsOrder, Kind, ObjectSchema, SchemaNode};

/// Parse raw document text.
pub fn parse_document(src: &str) -> Result<SchemaNode, ParseError> {
    let value = crate::path_de::from_str_with_path::<Value>(src)?;
    parse_schema(&value)
}

/// Parse an already decoded JSON value.
pub fn parse_schema(value: &Value) -> Result<SchemaNode, ParseError> {
    parse_node(value, "")
}

fn parse_node(value: &Value, pointer: &str) -> Result<SchemaNode, ParseError> {
    let Some(map) = value.as_object() else {
        return Err(ParseError::MissingKind { pointer: display_pointer(pointer) });
    };
    let kind = match map.get("type") {
        Some(Value::String(tag)) => Kind::from_tag(tag).ok_or_else(|| ParseError::UnknownKind {
            pointer: display_pointer(pointer),
            kind: tag.clone(),
        })?,
        Some(other) => {
            return Err(ParseError::UnknownKind {
                pointer: display_pointer(pointer),
                kind: other.to_string(),
            });
        }
        None => return Err(ParseError::MissingKind { pointer: display_pointer(pointer) }),
    };

    let node = match kind {
        Kind::Boolean => SchemaNode::Boolean,
        Kind::Integer => SchemaNode::Integer,
        Kind::UnsignedInteger => SchemaNode::UnsignedInteger,
        Kind::Float => SchemaNode::Float,
        Kind::String => SchemaNode::String,
        Kind::Array => SchemaNode::Array(parse_array(map, pointer)?),
        Kind::Object => SchemaNode::Object(parse_object(map, pointer)?),
    };
    Ok(node)
}

fn parse_array(map: &Map<String, Value>, pointer: &str) -> Result<ArraySchema, ParseError> {
    let fields = Fields { map, pointer };

    let prefix_items = match fields.array("prefixItems")? {
        None => None,
        Some(elems) => {
            let base = child_pointer(pointer, "prefixItems");
            let nodes = elems
                .iter()
                .enumerate()
                .map(|(i, el)| parse_node(el, &child_pointer(&base, &i.to_string())))
                .collect::<Result<Vec<_>, _>>()?;
            Some(nodes)
        }
    };

    let items = match map.get("items") {
        None => None,
        Some(v) => Some(Box::new(parse_node(v, &child_pointer(pointer, "items"))?)),
    };

    Ok(ArraySchema {
        min_items: fields.uint("minItems")?,
        max_items: fields.uint("maxItems")?,
        prefix_items,
        items,
        required_all: fields.boolean("requiredAll")?,
        items_order: fields.string("itemsOrder")?.map(ItemsOrder::from_tag),
    })
}

fn parse_object(map: &Map<String, Value>, pointer: &str) -> Result<ObjectSchema, ParseError> {
    let fields = Fields { map, pointer };
    let additional_properties = fields.boolean("additionalProperties")?.unwrap_or(false);

    let mut properties = indexmap::IndexMap::new();
    if let Some(props) = fields.object("properties")? {
        let base = child_pointer(pointer, "properties");
        // preserve_order keeps declaration order here
        for (name, child) in props {
            let node = parse_node(child, &child_pointer(&base, name))?;
            properties.insert(name.clone(), node);
        }
    }

    Ok(ObjectSchema { additional_properties, properties })
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Typed, optional field access for one node.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    pointer: &'a str,
}

impl<'a> Fields<'a> {
    fn invalid(&self, field: &'static str, expected: &'static str) -> ParseError {
        ParseError::InvalidField { pointer: self.pointer.to_string(), field, expected }
    }

    fn uint(&self, field: &'static str) -> Result<Option<u64>, ParseError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(v) => v.as_u64().map(Some).ok_or_else(|| self.invalid(field, "a non-negative integer")),
        }
    }

    fn boolean(&self, field: &'static str) -> Result<Option<bool>, ParseError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(v) => v.as_bool().map(Some).ok_or_else(|| self.invalid(field, "a boolean")),
        }
    }

    fn string(&self, field: &'static str) -> Result<Option<&'a str>, ParseError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| self.invalid(field, "a string")),
        }
    }

    fn array(&self, field: &'static str) -> Result<Option<&'a Vec<Value>>, ParseError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(v) => v.as_array().map(Some).ok_or_else(|| self.invalid(field, "an array")),
        }
    }

    fn object(&self, field: &'static str) -> Result<Option<&'a Map<String, Value>>, ParseError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(v) => v.as_object().map(Some).ok_or_else(|| self.invalid(field, "an object")),
        }
    }
}

/// RFC 6901 escaping for one reference token.
fn child_pointer(parent: &str, token: &str) -> String {
    format!("{parent}/{}", token.replace('~', "~0").replace('/', "~1"))
}

fn display_pointer(pointer: &str) -> String {
    if pointer.is_empty() { "/".to_string() } else { pointer.to_string() }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
