// Strongly-typed schema model. No serde_json::Value here.

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Boolean,
    Integer,
    UnsignedInteger,
    Float,
    String,
    Array(ArraySchema),
    Object(ObjectSchema),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub prefix_items: Option<Vec<SchemaNode>>, // positional, first N elements
    pub items: Option<Box<SchemaNode>>,        // remaining (or all) elements
    pub required_all: Option<bool>,
    pub items_order: Option<ItemsOrder>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub additional_properties: bool,
    pub properties: IndexMap<String, SchemaNode>, // declaration order = render order
}

/// Ordering asserted over array elements. Documentation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsOrder {
    None,
    Increasing,
    StrictlyIncreasing,
    Decreasing,
    StrictlyDecreasing,
    /// Kept so that presence still counts, even though nothing names it.
    Unrecognized(String),
}

/// The closed set of kinds a `type` discriminator may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    UnsignedInteger,
    Float,
    String,
    Array,
    Object,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SchemaNode {
    pub fn kind(&self) -> Kind {
        match self {
            SchemaNode::Boolean => Kind::Boolean,
            SchemaNode::Integer => Kind::Integer,
            SchemaNode::UnsignedInteger => Kind::UnsignedInteger,
            SchemaNode::Float => Kind::Float,
            SchemaNode::String => Kind::String,
            SchemaNode::Array(_) => Kind::Array,
            SchemaNode::Object(_) => Kind::Object,
        }
    }

    /// Object node with the given properties, in the given order.
    #[cfg(test)]
    pub fn object<I, K>(additional_properties: bool, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        SchemaNode::Object(ObjectSchema {
            additional_properties,
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Boolean,
        Kind::Integer,
        Kind::UnsignedInteger,
        Kind::Float,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ];

    /// Value of the `type` discriminator.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::UnsignedInteger => "unsigned_integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Human name used in rendered pages.
    pub fn display_name(self) -> &'static str {
        match self {
            Kind::Boolean => "Boolean",
            Kind::Integer => "Integer",
            Kind::UnsignedInteger => "Unsigned integer",
            Kind::Float => "Float",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Object => "Object",
        }
    }

    /// Path of the element-type page, relative to the link base.
    pub fn doc_page(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Integer => "numeric-types/integer",
            Kind::UnsignedInteger => "numeric-types/unsigned-integer",
            Kind::Float => "numeric-types/float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl ItemsOrder {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "none" => ItemsOrder::None,
            "increasing" => ItemsOrder::Increasing,
            "strictly_increasing" => ItemsOrder::StrictlyIncreasing,
            "decreasing" => ItemsOrder::Decreasing,
            "strictly_decreasing" => ItemsOrder::StrictlyDecreasing,
            other => ItemsOrder::Unrecognized(other.to_string()),
        }
    }

    /// `None` for orderings that render no line.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            ItemsOrder::Increasing => Some("Increasing order"),
            ItemsOrder::StrictlyIncreasing => Some("Strictly increasing order"),
            ItemsOrder::Decreasing => Some("Decreasing order"),
            ItemsOrder::StrictlyDecreasing => Some("Strictly decreasing order"),
            ItemsOrder::None | ItemsOrder::Unrecognized(_) => None,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
