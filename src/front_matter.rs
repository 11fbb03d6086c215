//! Front matter for the static-site generator.
use chrono::{DateTime, FixedOffset};

pub const DEFAULT_TIMESTAMP: &str = "2022-01-25T14:40:56+01:00";
pub const DEFAULT_MENU_SECTION: &str = "JSON-schema-validator";
pub const DEFAULT_MENU_PARENT: &str = "project-schemas";

#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatterSettings {
    /// Written as both `date` and `lastmod`.
    pub timestamp: DateTime<FixedOffset>,
    pub menu_section: String,
    pub menu_parent: String,
}

impl Default for FrontMatterSettings {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp(),
            menu_section: DEFAULT_MENU_SECTION.to_string(),
            menu_parent: DEFAULT_MENU_PARENT.to_string(),
        }
    }
}

pub fn parse_timestamp(src: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(src)
}

fn default_timestamp() -> DateTime<FixedOffset> {
    // constant input, covered by `default_timestamp_round_trips`
    parse_timestamp(DEFAULT_TIMESTAMP).unwrap_or_default()
}

/// `24{index+1}0`: position in the batch, as a menu weight.
pub fn weight(index: usize) -> String {
    format!("24{}0", index + 1)
}

/// YAML double-quoted scalar body.
fn quote_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl FrontMatterSettings {
    pub fn render(&self, title: &str, index: usize) -> String {
        let ts = self.timestamp.to_rfc3339();
        let title = quote_escape(title);
        let parent = quote_escape(&self.menu_parent);
        format!(
            "---\n\
             title: \"{title}\"\n\
             date: {ts}\n\
             lastmod: {ts}\n\
             draft: false\n\
             images: []\n\
             menu:\n  docs:\n    {section}:\n      parent: \"{parent}\"\n\
             weight: {weight}\n\
             toc: false\n\
             ---",
            section = self.menu_section,
            weight = weight(index),
        )
    }
}

/// Front matter, a blank line, then the body.
pub fn document(settings: &FrontMatterSettings, title: &str, index: usize, body: &str) -> String {
    format!("{}\n\n{body}", settings.render(title, index))
}
