//! `**bold**` emphasis, the only inline markup the documents use.

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::Run;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*.*?\*\*").expect("bold marker pattern is valid");
}

/// Splits `text` into `(piece, bold)` spans. Empty pieces are dropped.
pub fn split_bold(text: &str) -> Vec<(&str, bool)> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in BOLD.find_iter(text) {
        pieces.push(&text[last..m.start()]);
        pieces.push(m.as_str());
        last = m.end();
    }
    pieces.push(&text[last..]);

    pieces
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with("**") && p.ends_with("**") {
                let inner = if p.len() >= 4 { &p[2..p.len() - 2] } else { "" };
                (inner, true)
            } else {
                (p, false)
            }
        })
        .collect()
}

pub fn rich_runs(text: &str, size_pt: u32, color: &'static str) -> Vec<Run> {
    split_bold(text)
        .into_iter()
        .map(|(piece, bold)| Run::text(piece, size_pt).bold(bold).color(color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_and_bold() {
        assert_eq!(
            split_bold("승인 **필수** 단계와 **선택** 단계"),
            vec![
                ("승인 ", false),
                ("필수", true),
                (" 단계와 ", false),
                ("선택", true),
                (" 단계", false),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_plain() {
        assert_eq!(split_bold("a ** b"), vec![("a ** b", false)]);
    }

    #[test]
    fn no_italics_or_nesting() {
        assert_eq!(split_bold("*x* and __y__"), vec![("*x* and __y__", false)]);
        assert_eq!(split_bold("**a *b* c**"), vec![("a *b* c", true)]);
    }

    #[test]
    fn whole_text_bold() {
        let runs = rich_runs("**전체**", 9, crate::theme::RED);
        assert_eq!(runs.len(), 1);
        assert!(runs[0].bold);
        assert_eq!(runs[0].as_text(), Some("전체"));
        assert_eq!(runs[0].color, crate::theme::RED);
    }

    #[test]
    fn empty_text_has_no_runs() {
        assert!(rich_runs("", 9, crate::theme::DARK_BLUEGRAY).is_empty());
    }
}
