//! Render JSON-schema-like documents into nested markdown documentation.
//!
//! schema text → `ir::SchemaNode` (`parse`) → `render::Fragment` (`render`)
//! → markdown page with front matter (`batch`).
pub mod batch;
pub mod cli;
pub mod error;
pub mod front_matter;
pub mod ir;
pub mod parse;
pub mod path_de;
pub mod render;

pub use batch::{BatchConfig, BatchReport, run_batch};
pub use error::{BatchError, ParseError};
pub use ir::SchemaNode;
pub use parse::{parse_document, parse_schema};
pub use render::{Fragment, RenderOptions, Renderer, render};
