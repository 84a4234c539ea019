//! In-memory WordprocessingML document model.
//!
//! The renderer builds these values and `ooxml` serializes them. Sizes are in
//! points for fonts and twips for everything else.

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Inherit,
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    Heading1,
    Heading2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub before: Option<u32>,
    pub after: Option<u32>,
}

impl Spacing {
    pub fn new(before: u32, after: u32) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    pub fn before(before: u32) -> Self {
        Self {
            before: Some(before),
            after: None,
        }
    }

    pub fn after(after: u32) -> Self {
        Self {
            before: None,
            after: Some(after),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunKind {
    /// Literal text; `\n` is written as a line break.
    Text(String),
    /// Current page number field.
    PageField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    pub font: &'static str,
    pub size_pt: u32,
    pub bold: bool,
    pub color: &'static str,
}

impl Run {
    pub fn text(text: impl Into<String>, size_pt: u32) -> Self {
        Self {
            kind: RunKind::Text(text.into()),
            font: theme::FONT_MAIN,
            size_pt,
            bold: false,
            color: theme::DARK_BLUEGRAY,
        }
    }

    pub fn page_field(size_pt: u32) -> Self {
        Self {
            kind: RunKind::PageField,
            ..Self::text("", size_pt)
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn font(mut self, font: &'static str) -> Self {
        self.font = font;
        self
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            RunKind::Text(t) => Some(t),
            RunKind::PageField => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub align: Align,
    pub spacing: Spacing,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self {
            style: ParagraphStyle::Normal,
            align: Align::Inherit,
            spacing: Spacing::default(),
            runs: Vec::new(),
        }
    }

    pub fn spacer(spacing: Spacing) -> Self {
        Self::new().spacing(spacing)
    }

    pub fn styled(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn runs(mut self, runs: impl IntoIterator<Item = Run>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Concatenated text of all text runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().filter_map(Run::as_text).collect()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margins {
    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub width: Option<u32>,
    pub fill: Option<&'static str>,
    pub v_center: bool,
    pub margins: Option<Margins>,
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn new(width: Option<u32>) -> Self {
        Self {
            width,
            fill: None,
            v_center: false,
            margins: None,
            paragraphs: Vec::new(),
        }
    }

    pub fn fill(mut self, color: &'static str) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn centered(mut self) -> Self {
        self.v_center = true;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn paragraph(mut self, p: Paragraph) -> Self {
        self.paragraphs.push(p);
        self
    }

    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub width: u32,
    pub grid: Vec<u32>,
    pub centered: bool,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// A table with the standard single black border and the given column grid.
    pub fn new(grid: Vec<u32>) -> Self {
        let width = grid.iter().sum();
        Self {
            width,
            grid,
            centered: false,
            rows: Vec::new(),
        }
    }

    /// A one-column box spanning the whole text width.
    pub fn boxed() -> Self {
        Self::new(vec![theme::CONTENT_WIDTH])
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn row(mut self, cells: Vec<TableCell>) -> Self {
        self.rows.push(TableRow { cells });
        self
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// First section: fixed cover page, no footer.
    pub cover: Vec<Element>,
    /// Second section: rendered content with page-number footer.
    pub body: Vec<Element>,
}
