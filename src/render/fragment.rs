use crate::ir::Kind;

/// Highest heading tag markdown/HTML offers.
pub const MAX_HEADING: usize = 6;
/// Heading tag used for sections at level 0.
pub const HEADING_BASE: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Line(Annotation),
    Section(Section),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: Title,
    pub level: usize,
    pub body: Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Title {
    /// Structural sections: "Properties", "Items", "Item 0", ...
    Strong(String),
    /// Property names, weighted by nesting level.
    Heading(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Type(Kind),
    MinItems(u64),
    MaxItems(u64),
    RequiredAll(bool),
    ItemsOrder(&'static str),
    AdditionalProperties(bool),
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, annotation: Annotation) {
        self.blocks.push(Block::Line(annotation));
    }

    pub fn section(&mut self, title: Title, level: usize, body: Fragment) {
        self.blocks.push(Block::Section(Section { title, level, body }));
    }

    pub fn lines(&self) -> impl Iterator<Item = &Annotation> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Line(a) => Some(a),
            Block::Section(_) => None,
        })
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Section(s) => Some(s),
            Block::Line(_) => None,
        })
    }
}

impl Section {
    /// `<hN>` weight, clamped to h6.
    pub fn heading_weight(&self) -> usize {
        HEADING_BASE.saturating_add(self.level).min(MAX_HEADING)
    }

    pub fn title_text(&self) -> &str {
        match &self.title {
            Title::Strong(s) | Title::Heading(s) => s,
        }
    }
}

impl Annotation {
    pub fn label(&self) -> &'static str {
        match self {
            Annotation::Type(_) => "Type",
            Annotation::MinItems(_) => "Minimum items",
            Annotation::MaxItems(_) => "Maximum items",
            Annotation::RequiredAll(_) => "Required all",
            Annotation::ItemsOrder(_) => "Items order",
            Annotation::AdditionalProperties(_) => "Additional properties",
        }
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
