//! Directory of schema documents → directory of markdown pages.
//!
//! One file at a time. A file that cannot be read, parsed or written is
//! recorded and skipped; only an unusable input/output directory stops the run.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{BatchError, FailureReason, FileFailure};
use crate::front_matter::{self, FrontMatterSettings};
use crate::render::{MarkdownWriter, RenderOptions, Renderer};

pub const OUTPUT_SUFFIX: &str = "-schema.md";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Glob over file names, e.g. `*.json`.
    pub include: String,
    /// Sort by file name instead of keeping directory-listing order.
    pub sort: bool,
    pub render: RenderOptions,
    pub link_base: String,
    pub front_matter: FrontMatterSettings,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("../schema"),
            output_dir: PathBuf::from("content/en/docs/JSON-schema-validator/project-schemas"),
            include: "*".to_string(),
            sort: false,
            render: RenderOptions::default(),
            link_base: crate::render::markdown::DEFAULT_LINK_BASE.to_string(),
            front_matter: FrontMatterSettings::default(),
        }
    }
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let pattern = glob::Pattern::new(&config.include).map_err(|source| BatchError::InvalidPattern {
        pattern: config.include.clone(),
        source,
    })?;
    let inputs = list_inputs(&config.input_dir, &pattern, config.sort)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::DirectoryUnavailable {
        path: config.output_dir.clone(),
        source,
    })?;

    let renderer = Renderer::new(config.render.clone());
    let writer = MarkdownWriter::new(config.link_base.as_str());
    let mut report = BatchReport::default();
    // output name → input that wrote it
    let mut claimed: HashMap<String, PathBuf> = HashMap::new();

    for (index, input) in inputs.iter().enumerate() {
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_name = output_file_name(&file_name);

        let result = match claimed.get(&out_name) {
            Some(earlier) => Err(FailureReason::Write(format!(
                "output name {out_name} collides with {}",
                earlier.display()
            ))),
            None => process_file(config, &renderer, &writer, input, &file_name, &out_name, index),
        };

        match result {
            Ok(out_path) => {
                tracing::info!(input = %input.display(), output = %out_path.display(), "rendered schema");
                claimed.insert(out_name, input.clone());
                report.written.push(out_path);
            }
            Err(reason) => {
                tracing::warn!(input = %input.display(), "{reason}");
                report.failures.push(FileFailure { file: input.clone(), reason });
            }
        }
    }

    Ok(report)
}

fn process_file(
    config: &BatchConfig,
    renderer: &Renderer,
    writer: &MarkdownWriter,
    input: &Path,
    file_name: &str,
    out_name: &str,
    index: usize,
) -> Result<PathBuf, FailureReason> {
    let source = fs::read_to_string(input).map_err(|e| FailureReason::Read(e.to_string()))?;
    let schema = crate::parse::parse_document(&source)?;

    let body = writer.document_body(&renderer.render(&schema, 0));
    let doc = front_matter::document(&config.front_matter, file_name, index, &body);

    let out_path = config.output_dir.join(out_name);
    fs::write(&out_path, doc).map_err(|e| FailureReason::Write(e.to_string()))?;
    Ok(out_path)
}

/// Everything before the first `.`, plus the page suffix.
pub fn output_file_name(input_name: &str) -> String {
    let stem = input_name.split('.').next().unwrap_or(input_name);
    format!("{stem}{OUTPUT_SUFFIX}")
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn list_inputs(dir: &Path, pattern: &glob::Pattern, sort: bool) -> Result<Vec<PathBuf>, BatchError> {
    let unavailable = |source| BatchError::DirectoryUnavailable { path: dir.to_path_buf(), source };

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        let path = entry.path();
        if !path.is_file() {
            tracing::debug!(entry = %path.display(), "skipping non-file entry");
            continue;
        }
        let name = entry.file_name();
        if !pattern.matches(&name.to_string_lossy()) {
            tracing::debug!(entry = %path.display(), "skipping entry outside include pattern");
            continue;
        }
        out.push(path);
    }

    if sort {
        out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(input: &Path, output: &Path) -> BatchConfig {
        BatchConfig {
            input_dir: input.to_path_buf(),
            output_dir: output.to_path_buf(),
            sort: true,
            ..BatchConfig::default()
        }
    }

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn output_names_strip_from_the_first_dot() {
        assert_eq!(output_file_name("simulation.json"), "simulation-schema.md");
        assert_eq!(output_file_name("world.config.json"), "world-schema.md");
        assert_eq!(output_file_name("noext"), "noext-schema.md");
    }

    #[test]
    fn malformed_file_does_not_abort_the_batch() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(input.path(), "a.json", r#"{"type": "string"}"#);
        write(input.path(), "b.json", r#"{"type": "string""#);
        write(input.path(), "c.json", r#"{"type": "array", "items": {"type": "integer"}}"#);

        let report = run_batch(&config_for(input.path(), output.path())).unwrap();

        assert_eq!(
            report.written,
            [output.path().join("a-schema.md"), output.path().join("c-schema.md")]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, input.path().join("b.json"));
        assert!(matches!(report.failures[0].reason, FailureReason::Parse(_)));
        assert!(!output.path().join("b-schema.md").exists());
        assert!(!report.is_clean());

        let a = fs::read_to_string(output.path().join("a-schema.md")).unwrap();
        assert!(a.starts_with("---\ntitle: \"a.json\"\n"));
        assert!(a.contains("\nweight: 2410\n"));
        assert!(a.ends_with("---\n\n## root\n\n* **Type**: [String](../../element-types/string)\n"));

        // weight keeps counting past the failed entry
        let c = fs::read_to_string(output.path().join("c-schema.md")).unwrap();
        assert!(c.contains("\nweight: 2430\n"));
        assert!(c.contains("<details><summary> <strong>Items</strong>: </summary>"));
    }

    #[test]
    fn colliding_output_names_are_not_overwritten() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(input.path(), "a.json", r#"{"type": "string"}"#);
        write(input.path(), "a.v2.json", r#"{"type": "integer"}"#);

        let report = run_batch(&config_for(input.path(), output.path())).unwrap();

        assert_eq!(report.written, [output.path().join("a-schema.md")]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, input.path().join("a.v2.json"));
        let FailureReason::Write(message) = &report.failures[0].reason else {
            panic!("expected write failure")
        };
        assert!(message.contains("a-schema.md"), "{message}");
        assert!(message.contains("a.json"), "{message}");

        // the first page survives untouched
        let page = fs::read_to_string(output.path().join("a-schema.md")).unwrap();
        assert!(page.contains("title: \"a.json\""));
        assert!(page.contains("[String]"));
    }

    #[test]
    fn failed_input_does_not_claim_its_output_name() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(input.path(), "a.json", "not json");
        write(input.path(), "a.v2.json", r#"{"type": "integer"}"#);

        let report = run_batch(&config_for(input.path(), output.path())).unwrap();
        assert_eq!(report.written, [output.path().join("a-schema.md")]);
        assert_eq!(report.failures[0].file, input.path().join("a.json"));
    }

    #[test]
    fn unknown_kind_is_reported_per_file() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(input.path(), "odd.json", r#"{"type": "object", "properties": {"x": {"type": "date"}}}"#);
        write(input.path(), "ok.json", r#"{"type": "boolean"}"#);

        let report = run_batch(&config_for(input.path(), output.path())).unwrap();
        assert_eq!(report.written, [output.path().join("ok-schema.md")]);
        let FailureReason::Parse(message) = &report.failures[0].reason else {
            panic!("expected parse failure")
        };
        assert!(message.contains("/properties/x"), "{message}");
        assert!(message.contains("date"), "{message}");
    }

    #[test]
    fn include_pattern_and_directories_filter_entries() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(input.path(), "keep.json", r#"{"type": "float"}"#);
        write(input.path(), "README.txt", "not a schema");
        fs::create_dir(input.path().join("nested.json")).unwrap();

        let config = BatchConfig { include: "*.json".into(), ..config_for(input.path(), output.path()) };
        let report = run_batch(&config).unwrap();
        assert_eq!(report.written, [output.path().join("keep-schema.md")]);
        assert!(report.is_clean());
    }

    #[test]
    fn output_directory_is_created() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let nested = output.path().join("content/en/docs");
        write(input.path(), "a.json", r#"{"type": "integer"}"#);

        let report = run_batch(&config_for(input.path(), &nested)).unwrap();
        assert_eq!(report.written, [nested.join("a-schema.md")]);
    }

    #[test]
    fn missing_input_directory_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let err = run_batch(&config_for(&root.path().join("absent"), root.path())).unwrap_err();
        assert!(matches!(err, BatchError::DirectoryUnavailable { .. }));
    }

    #[test]
    fn bad_include_pattern_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let config = BatchConfig { include: "[".into(), ..config_for(root.path(), root.path()) };
        assert!(matches!(run_batch(&config), Err(BatchError::InvalidPattern { .. })));
    }

    #[test]
    fn report_serializes_failures_with_stage() {
        let report = BatchReport {
            written: vec![PathBuf::from("out/a-schema.md")],
            failures: vec![FileFailure {
                file: PathBuf::from("in/b.json"),
                reason: FailureReason::Read("denied".into()),
            }],
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["failures"][0]["reason"]["stage"], "read");
        assert_eq!(v["failures"][0]["reason"]["message"], "denied");
        assert_eq!(v["written"][0], "out/a-schema.md");
    }
}
