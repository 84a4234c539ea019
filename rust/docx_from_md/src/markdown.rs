//! Line-oriented markdown scanner.
//!
//! Only the subset used by the feature specification is recognized: headings
//! 1-4, pipe tables, fenced code, `- ` list items, `---` rules and paragraphs.
//! Lines are classified in the order fence, table, heading, rule, list, and
//! anything left over is paragraph text.

use lazy_static::lazy_static;
use regex::Regex;

const FENCE: &str = "```";

lazy_static! {
    static ref SEPARATOR_ROW: Regex =
        Regex::new(r"^\|[\s\-:|]+\|$").expect("separator row pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Table(Vec<Vec<String>>),
    Code { lang: String, text: String },
    ListItem(String),
    Rule,
}

impl Block {
    pub fn is_heading(&self, wanted: u8) -> bool {
        matches!(self, Block::Heading { level, .. } if *level == wanted)
    }
}

fn heading(stripped: &str) -> Option<(u8, &str)> {
    let markers = [(4u8, "#### "), (3, "### "), (2, "## "), (1, "# ")];
    for (level, marker) in markers {
        if let Some(rest) = stripped.strip_prefix(marker) {
            return Some((level, rest.trim()));
        }
    }
    None
}

fn starts_table(stripped: &str) -> bool {
    stripped.starts_with('|') && stripped[1..].contains('|')
}

// `|---|`, `| --- | --- |` and `| :-- | --: |` alike.
fn is_separator_row(stripped: &str) -> bool {
    stripped.starts_with("|---") || (stripped.contains('-') && SEPARATOR_ROW.is_match(stripped))
}

// Paragraph continuation stops at anything that could open another block.
fn ends_paragraph(stripped: &str) -> bool {
    stripped.is_empty()
        || stripped.starts_with('#')
        || stripped.starts_with('|')
        || stripped.starts_with(FENCE)
        || stripped.starts_with("- ")
        || stripped == "---"
}

/// Splits pipe-table lines into trimmed cell rows, dropping separator rows.
///
/// The pieces before the first and after the last `|` are discarded, so a
/// row without a closing pipe loses its final cell.
pub fn parse_table_rows(lines: &[&str]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || is_separator_row(line) {
            continue;
        }
        let pieces: Vec<&str> = line.split('|').collect();
        let cells = if pieces.len() < 2 {
            Vec::new()
        } else {
            pieces[1..pieces.len() - 1]
                .iter()
                .map(|c| c.trim().to_string())
                .collect()
        };
        rows.push(cells);
    }
    rows
}

pub fn parse_markdown(md: &str) -> Vec<Block> {
    let md = md.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = md.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let stripped = lines[i].trim();

        if let Some(rest) = stripped.strip_prefix(FENCE) {
            let lang = rest.trim().to_string();
            let mut code: Vec<&str> = Vec::new();
            i += 1;
            // An unterminated fence swallows the rest of the input.
            while i < lines.len() && !lines[i].trim().starts_with(FENCE) {
                code.push(lines[i]);
                i += 1;
            }
            blocks.push(Block::Code {
                lang,
                text: code.join("\n"),
            });
            i += 1;
            continue;
        }

        if starts_table(stripped) {
            let start = i;
            while i < lines.len() && lines[i].trim().starts_with('|') {
                i += 1;
            }
            blocks.push(Block::Table(parse_table_rows(&lines[start..i])));
            continue;
        }

        if let Some((level, text)) = heading(stripped) {
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if stripped == "---" {
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        if let Some(item) = stripped.strip_prefix("- ") {
            blocks.push(Block::ListItem(item.to_string()));
            i += 1;
            continue;
        }

        if !stripped.is_empty() {
            let mut parts = vec![stripped];
            i += 1;
            while i < lines.len() {
                let next = lines[i].trim();
                if ends_paragraph(next) {
                    break;
                }
                parts.push(next);
                i += 1;
            }
            blocks.push(Block::Paragraph(parts.join(" ")));
            continue;
        }

        i += 1;
    }

    blocks
}
