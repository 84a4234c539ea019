//! Markdown to styled `.docx` conversion for the AVATAR OnE feature specification.
//!
//! The pipeline is `parse_markdown` -> `convert` -> `write_docx`. The
//! document gets a fixed cover page followed by a content section with a
//! page-number footer.

pub mod cover;
pub mod inline;
pub mod markdown;
pub mod model;
pub mod ooxml;
pub mod package;
pub mod render;
pub mod sections;
pub mod theme;

mod args;
mod error;

pub use args::{Args, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use error::ConvertError;
pub use markdown::{parse_markdown, Block};
pub use model::Document;
pub use package::write_docx;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{error, info};

use sections::{SectionMap, WorkflowSteps};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl Report {
    pub fn size_kb(&self) -> String {
        format!("{:.1}", self.size_bytes as f64 / 1024.0)
    }
}

/// Parses markdown and lays out the whole document in memory.
pub fn convert(md: &str) -> Document {
    let blocks = parse_markdown(md);
    info!(blocks = blocks.len(); "Parsed markdown");

    let steps = WorkflowSteps::extract(&blocks);
    info!(steps = steps.len(); "Extracted workflow steps");

    let sections = SectionMap::new(&steps);
    let doc = Document {
        cover: cover::cover_page(),
        body: render::render_body(&blocks, &sections),
    };
    info!(elements = doc.body.len(); "Built document");
    doc
}

/// Converts `args.input` and writes `args.output`.
///
/// # Errors
///
/// Fails with [`ConvertError::InputNotFound`] before anything is written when
/// the input does not exist, and with [`ConvertError::OutputMissing`] when the
/// package is absent after saving. Read and zip failures carry file context.
pub fn run(args: &Args) -> Result<Report> {
    if !args.input.exists() {
        return Err(ConvertError::InputNotFound(args.input.clone()).into());
    }

    let md = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    info!(input:? = args.input, bytes = md.len(); "Read input");

    let doc = convert(&md);
    write_docx(&args.output, &doc).with_context(|| format!("write {}", args.output.display()))?;

    if !args.output.exists() {
        return Err(ConvertError::OutputMissing(args.output.clone()).into());
    }
    let size_bytes = std::fs::metadata(&args.output)
        .with_context(|| format!("stat {}", args.output.display()))?
        .len();
    info!(output:? = args.output, size_bytes; "Package written");

    Ok(Report {
        path: args.output.clone(),
        size_bytes,
    })
}

/// Runs the conversion, prints the report and returns the process exit code.
pub fn execute(args: &Args) -> i32 {
    match run(args) {
        Ok(report) => {
            println!("Created: {}", report.path.display());
            println!("Size: {} KB", report.size_kb());
            0
        }
        Err(err) => {
            error!("{err:#}");
            1
        }
    }
}
