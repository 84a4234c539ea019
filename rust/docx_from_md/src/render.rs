//! Maps parsed blocks onto the design system's formatting recipes.
//!
//! Rendering is a single forward pass. Most blocks produce one element; the
//! callout headings also consume the paragraphs and list items after them.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::inline::rich_runs;
use crate::markdown::Block;
use crate::model::{
    Align, Element, Margins, Paragraph, ParagraphStyle, Run, Spacing, Table, TableCell,
};
use crate::sections::SectionMap;
use crate::theme;

lazy_static! {
    static ref NUMBERED_SECTION: Regex =
        Regex::new(r"^([0-9]+)\.\s*(.*)").expect("numbered section pattern is valid");
}

const BOX_MARGINS: Margins = Margins::new(80, 80, 120, 120);
const CARD_TEXT_MARGINS: Margins = Margins::new(60, 60, 120, 80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub title: &'static str,
    pub fill: &'static str,
}

const SUBSECTION_CALLOUTS: [Callout; 3] = [
    Callout {
        title: "핵심 개념",
        fill: theme::LIGHT_YELLOW,
    },
    Callout {
        title: "운영 범위",
        fill: theme::LIGHT_BLUE,
    },
    Callout {
        title: "RL 학습 파라미터",
        fill: theme::LIGHT_YELLOW,
    },
];

const PROCESS_OVERVIEW: Callout = Callout {
    title: "테스트 및 승인 프로세스 개요",
    fill: theme::LIGHT_YELLOW,
};

/// Callout recipe for a heading, if it has one.
pub fn callout_for(level: u8, text: &str) -> Option<Callout> {
    match level {
        3 => SUBSECTION_CALLOUTS.iter().find(|c| c.title == text).copied(),
        4 if text.contains("프로세스 개요") => Some(PROCESS_OVERVIEW),
        _ => None,
    }
}

/// Parses `"N. title"` into the section number and the remaining title.
pub fn numbered_section(text: &str) -> Option<(u64, &str)> {
    let caps = NUMBERED_SECTION.captures(text)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    let title = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((number, title))
}

/// Five or more columns headed by an ID column and a feature-name column.
pub fn is_feature_table(header: &[String]) -> bool {
    header.len() >= 5 && header[0].contains("ID") && header[1].contains("기능")
}

/// Explicit read position over the block list.
struct Cursor<'a> {
    blocks: &'a [Block],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(blocks: &'a [Block]) -> Self {
        Self { blocks, pos: 0 }
    }

    fn advance(&mut self) -> Option<&'a Block> {
        let block = self.blocks.get(self.pos)?;
        self.pos += 1;
        Some(block)
    }

    /// Consumes the run of paragraphs and list items at the cursor.
    fn take_callout_body(&mut self) -> Vec<String> {
        let mut parts = Vec::new();
        while let Some(block) = self.blocks.get(self.pos) {
            match block {
                Block::Paragraph(text) => parts.push(text.clone()),
                Block::ListItem(text) => parts.push(format!("- {text}")),
                _ => break,
            }
            self.pos += 1;
        }
        parts
    }
}

struct Renderer<'a> {
    sections: &'a SectionMap,
    /// Number of the last section card, 0 until the first one.
    section: u64,
    out: Vec<Element>,
}

impl<'a> Renderer<'a> {
    fn new(sections: &'a SectionMap) -> Self {
        Self {
            sections,
            section: 0,
            out: Vec::new(),
        }
    }

    fn paragraph_el(&mut self, p: Paragraph) {
        self.out.push(Element::Paragraph(p));
    }

    fn table_el(&mut self, t: Table) {
        self.out.push(Element::Table(t));
    }

    fn spacer(&mut self, before: u32, after: u32) {
        self.paragraph_el(Paragraph::spacer(Spacing::new(before, after)));
    }

    fn level_two(&mut self, text: &str) {
        match numbered_section(text) {
            Some((number, title)) => {
                let (canonical, description) = self.sections.resolve(number, title);
                debug!(section = number, title = canonical; "Rendering section card");
                let description = description.to_string();
                self.section_card(number, &format!("{number}. {title}"), &description);
                self.section = number;
            }
            None => self.sub_heading(text),
        }
    }

    fn section_card(&mut self, number: u64, title: &str, description: &str) {
        // Outline entry only; the card below is what the reader sees.
        self.paragraph_el(
            Paragraph::new()
                .styled(ParagraphStyle::Heading1)
                .run(Run::text(title, 1).color(theme::WHITE)),
        );

        let [number_w, text_w] = theme::SECTION_CARD_COLUMNS;
        let number_cell = TableCell::new(Some(number_w))
            .fill(theme::MED_BLUE)
            .centered()
            .paragraph(
                Paragraph::new()
                    .align(Align::Center)
                    .run(Run::text(number.to_string(), 11).bold(true).color(theme::WHITE)),
            );
        let text_cell = TableCell::new(Some(text_w))
            .fill(theme::LIGHT_BLUE)
            .centered()
            .margins(CARD_TEXT_MARGINS)
            .paragraph(Paragraph::new().run(Run::text(title, 11).bold(true)))
            .paragraph(Paragraph::new().run(Run::text(description, theme::BODY_PT)));

        let card = Table::new(theme::SECTION_CARD_COLUMNS.to_vec()).row(vec![number_cell, text_cell]);
        self.table_el(card);
        self.spacer(60, 60);
    }

    fn sub_heading(&mut self, text: &str) {
        self.paragraph_el(
            Paragraph::new()
                .styled(ParagraphStyle::Heading2)
                .run(Run::text(text, 12)),
        );
    }

    fn callout(&mut self, callout: Callout, parts: &[String]) {
        debug!(title = callout.title, parts = parts.len(); "Rendering callout");
        let mut cell = TableCell::new(None)
            .fill(callout.fill)
            .margins(BOX_MARGINS)
            .paragraph(
                Paragraph::new()
                    .spacing(Spacing::after(60))
                    .run(Run::text(callout.title, 10).bold(true)),
            );
        if parts.is_empty() {
            cell = cell.paragraph(Paragraph::new());
        }
        for part in parts {
            cell = cell.paragraph(Paragraph::new().runs(rich_runs(
                part.trim(),
                theme::BODY_PT,
                theme::DARK_BLUEGRAY,
            )));
        }
        self.table_el(Table::boxed().row(vec![cell]));
        self.spacer(40, 40);
    }

    fn table(&mut self, rows: &[Vec<String>]) {
        let Some(header) = rows.first() else {
            return;
        };
        let columns = rows.iter().map(Vec::len).max().unwrap_or_default();
        if columns == 0 {
            return;
        }
        if is_feature_table(header) {
            self.feature_table(rows);
        } else {
            let widths = theme::fit_widths(theme::generic_column_widths(header), columns);
            self.generic_table(rows, widths);
        }
        self.spacer(40, 40);
    }

    fn feature_table(&mut self, rows: &[Vec<String>]) {
        let widths = theme::FEATURE_COLUMNS;
        let mut table = Table::new(widths.to_vec());
        table = table.row(header_cells(&rows[0], &widths));

        for row in &rows[1..] {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(ci, &width)| {
                    let text = cell_text(row, ci);
                    let (align, run) = match ci {
                        0 => (Align::Center, Run::text(text, theme::BODY_PT).bold(true)),
                        3 => (
                            Align::Center,
                            Run::text(text, theme::BODY_PT)
                                .bold(true)
                                .color(priority_color(text.trim())),
                        ),
                        4 => (Align::Center, Run::text(text, theme::BODY_PT)),
                        _ => (Align::Left, Run::text(text, theme::BODY_PT)),
                    };
                    data_cell(width, align, run)
                })
                .collect();
            table = table.row(cells);
        }
        self.table_el(table);
    }

    fn generic_table(&mut self, rows: &[Vec<String>], widths: Vec<u32>) {
        let mut table = Table::new(widths.clone());
        table = table.row(header_cells(&rows[0], &widths));

        for row in &rows[1..] {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(ci, &width)| {
                    let text = cell_text(row, ci);
                    let (bold, color) = match text.trim() {
                        theme::LEVEL_HIGH => (true, theme::RED),
                        theme::LEVEL_LOW => (true, theme::GREEN),
                        _ => (ci == 0, theme::DARK_BLUEGRAY),
                    };
                    let align = if ci == 0 { Align::Center } else { Align::Left };
                    data_cell(
                        width,
                        align,
                        Run::text(text, theme::BODY_PT).bold(bold).color(color),
                    )
                })
                .collect();
            table = table.row(cells);
        }
        self.table_el(table);
    }

    fn code_box(&mut self, code: &str) {
        let cell = TableCell::new(None)
            .fill(theme::VERY_LIGHT_GRAY)
            .margins(BOX_MARGINS)
            .paragraph(
                Paragraph::new()
                    .spacing(Spacing::new(0, 0))
                    .run(Run::text(code, theme::BODY_PT).font(theme::FONT_CODE)),
            );
        self.table_el(Table::boxed().row(vec![cell]));
        self.spacer(40, 40);
    }

    fn text(&mut self, text: &str) {
        self.paragraph_el(Paragraph::new().runs(rich_runs(
            text,
            theme::BODY_PT,
            theme::DARK_BLUEGRAY,
        )));
    }

    fn render(mut self, blocks: &[Block]) -> Vec<Element> {
        let mut cursor = Cursor::new(blocks);

        while let Some(block) = cursor.advance() {
            // Text, tables and rules ahead of the first numbered section belong to the cover.
            if self.section == 0
                && matches!(block, Block::Paragraph(_) | Block::Table(_) | Block::Rule)
            {
                continue;
            }

            match block {
                Block::Heading { level: 1, .. } | Block::Rule => {}
                Block::Heading { level: 2, text } => self.level_two(text),
                Block::Heading { level, text } => match callout_for(*level, text) {
                    Some(callout) => {
                        let parts = cursor.take_callout_body();
                        self.callout(callout, &parts);
                    }
                    None => self.sub_heading(text),
                },
                Block::Table(rows) => self.table(rows),
                Block::Code { text, .. } => self.code_box(text),
                Block::Paragraph(text) => self.text(text),
                Block::ListItem(text) => self.text(&format!("- {text}")),
            }
        }

        self.out
    }
}

fn cell_text(row: &[String], ci: usize) -> &str {
    row.get(ci).map(String::as_str).unwrap_or_default()
}

fn priority_color(priority: &str) -> &'static str {
    match priority {
        theme::PRIORITY_CRITICAL => theme::RED,
        theme::PRIORITY_HIGH => theme::ORANGE,
        _ => theme::DARK_BLUEGRAY,
    }
}

fn header_cells(header: &[String], widths: &[u32]) -> Vec<TableCell> {
    widths
        .iter()
        .enumerate()
        .map(|(ci, &width)| {
            TableCell::new(Some(width))
                .fill(theme::DARK_NAVY)
                .centered()
                .paragraph(
                    Paragraph::new().align(Align::Center).run(
                        Run::text(cell_text(header, ci), theme::BODY_PT)
                            .bold(true)
                            .color(theme::WHITE),
                    ),
                )
        })
        .collect()
}

fn data_cell(width: u32, align: Align, run: Run) -> TableCell {
    TableCell::new(Some(width))
        .centered()
        .paragraph(Paragraph::new().align(align).run(run))
}

/// Content section elements for the parsed markdown.
pub fn render_body(blocks: &[Block], sections: &SectionMap) -> Vec<Element> {
    Renderer::new(sections).render(blocks)
}
