//! Pipeline – ties together parsing, question generation, FAQ matching,
//! rendering, and writing into a single function call.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;
use crate::faq::{match_answers, FallbackMode};
use crate::page::{Page, PageKind};
use crate::parser::parse_record;
use crate::questions::generate_questions;
use crate::render::{render_comparison_page, render_faq_page, render_product_page};
use crate::writer::write_page;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Configuration for the content pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory the three documents are written into (default: `output`).
    pub output_dir: PathBuf,
    /// How unmatched FAQ questions are handled (default: `Compatible`).
    pub fallback: FallbackMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fallback: FallbackMode::Compatible,
        }
    }
}

impl PipelineConfig {
    /// Default config writing into `dir`.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Answer every question instead of dropping unmatched ones.
    pub fn strict(mut self) -> Self {
        self.fallback = FallbackMode::Exhaustive;
        self
    }

    /// Where a page of `kind` is written.
    pub fn path_for(&self, kind: PageKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }
}

/// Page names and the paths they were written to, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedPages {
    entries: Vec<(PageKind, PathBuf)>,
}

impl GeneratedPages {
    pub fn path(&self, kind: PageKind) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
    }

    /// `(page name, path)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Path)> + '_ {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build all pages without touching the filesystem – useful for testing.
///
/// Returns the FAQ, product and comparison pages in that order.
pub fn generate_pages(record: &Value, config: &PipelineConfig) -> Result<Vec<Page>> {
    // 1. Parse record
    let product = parse_record(record)?;

    // 2. Generate questions
    let questions = generate_questions(&product)?;

    // 3. Match answers
    let faq_items = match_answers(&product, &questions, config.fallback);
    log::debug!(
        "Matched {} of {} questions",
        faq_items.len(),
        questions.len()
    );

    // 4. Render pages
    let faq = render_faq_page(&product, &faq_items)?;
    let product_page = render_product_page(&product);
    let comparison = render_comparison_page(&product);

    Ok(vec![faq, product_page, comparison])
}

/// Full pipeline: record → three JSON documents under `config.output_dir`.
///
/// Stops at the first failing stage; documents already written stay on disk.
pub fn run(record: &Value, config: &PipelineConfig) -> Result<GeneratedPages> {
    let pages = generate_pages(record, config)?;

    let mut generated = GeneratedPages::default();
    for page in &pages {
        let kind = page.kind();
        let path = write_page(page, config.path_for(kind))?;
        generated.entries.push((kind, path));
    }
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn pipeline_basic() {
        let pages = generate_pages(&sample::glowboost_record(), &PipelineConfig::default()).unwrap();
        let kinds: Vec<PageKind> = pages.iter().map(Page::kind).collect();
        assert_eq!(kinds, PageKind::ALL.to_vec());
    }

    #[test]
    fn default_paths_are_fixed() {
        let config = PipelineConfig::default();
        assert_eq!(config.path_for(PageKind::Faq), Path::new("output/faq.json"));
        assert_eq!(
            config.path_for(PageKind::ComparisonPage),
            Path::new("output/comparison_page.json")
        );
    }

    #[test]
    fn strict_switches_fallback_mode() {
        let config = PipelineConfig::with_output_dir("out").strict();
        assert_eq!(config.fallback, FallbackMode::Exhaustive);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn missing_field_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::with_output_dir(dir.path().join("out"));
        assert!(run(&sample::incomplete_record(), &config).is_err());
        assert!(!config.output_dir.exists());
    }
}
