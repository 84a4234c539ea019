use crate::model::{Align, Element, Paragraph, Run, Spacing, Table, TableCell};
use crate::theme;

const TITLE: &str = "AVATAR OnE 플랫폼";
const SUBTITLE: &str = "기능 명세서";
const WORKFLOW: &str = "Builder → Trainer → 테스트/승인 → 스케줄링 → 결과 조회";
const TAGLINE: &str = "전체 워크플로우 기반 기능 명세";

const METADATA: [(&str, &str); 4] = [
    ("버전", "1.5"),
    ("작성일", "2025-02-02"),
    ("수정일", "2026-02-09"),
    ("대상", "고객 전달용"),
];

/// Elements of the first section. Nothing here comes from the markdown.
pub fn cover_page() -> Vec<Element> {
    let centered = |text: &str, size_pt: u32, color: &'static str, after: u32| {
        Paragraph::new()
            .align(Align::Center)
            .spacing(Spacing::after(after))
            .run(Run::text(text, size_pt).color(color))
    };

    let mut title = centered(TITLE, 28, theme::DARK_NAVY, 120);
    title.runs[0].bold = true;

    vec![
        Element::Paragraph(Paragraph::spacer(Spacing::before(2800))),
        Element::Paragraph(title),
        Element::Paragraph(centered(SUBTITLE, 18, theme::MED_BLUE, 500)),
        Element::Paragraph(Paragraph::spacer(Spacing::new(80, 80))),
        Element::Paragraph(Paragraph::spacer(Spacing::before(200))),
        Element::Paragraph(centered(WORKFLOW, 11, theme::DARK_BLUEGRAY, 80)),
        Element::Paragraph(centered(TAGLINE, 11, theme::DARK_BLUEGRAY, 400)),
        Element::Paragraph(Paragraph::spacer(Spacing::before(400))),
        Element::Table(metadata_table()),
    ]
}

fn metadata_table() -> Table {
    let [label_w, value_w] = theme::COVER_META_COLUMNS;
    METADATA
        .iter()
        .fold(Table::new(theme::COVER_META_COLUMNS.to_vec()).centered(), |table, (label, value)| {
            let label_cell = TableCell::new(Some(label_w))
                .fill(theme::LIGHT_BLUE)
                .centered()
                .paragraph(
                    Paragraph::new()
                        .align(Align::Center)
                        .run(Run::text(*label, 9).bold(true)),
                );
            let value_cell = TableCell::new(Some(value_w))
                .centered()
                .paragraph(Paragraph::new().align(Align::Left).run(Run::text(*value, 9)));
            table.row(vec![label_cell, value_cell])
        })
}
