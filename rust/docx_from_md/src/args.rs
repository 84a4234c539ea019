//! Command-line arguments.
//!
//! Every flag has a default, so running the binary bare converts the feature
//! specification at its usual location under `docs/`.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT: &str = "docs/AVATAR_OnE_플랫폼_기능명세서_v1_5.md";
pub const DEFAULT_OUTPUT: &str = "docs/AVATAR_OnE_플랫폼_기능명세서_v1_5.docx";

/// Render the AVATAR OnE feature specification markdown into a styled .docx
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Markdown source file.
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output .docx path.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_uses_fixed_paths() {
        let args = Args::try_parse_from(["docx_from_md"]).expect("no flags required");
        assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "docx_from_md",
            "--input",
            "a.md",
            "--output",
            "b.docx",
            "--log-level",
            "debug",
        ])
        .expect("valid flags");
        assert_eq!(args.input, PathBuf::from("a.md"));
        assert_eq!(args.output, PathBuf::from("b.docx"));
        assert_eq!(args.log_level, "debug");
    }
}
