//! WordprocessingML serialization of the document model.

use quick_xml::escape::escape;

use crate::model::{
    Align, Document, Element, Paragraph, ParagraphStyle, Run, RunKind, Table, TableCell,
};
use crate::theme;

pub const STYLES_RID: &str = "rId1";
pub const FOOTER_RID: &str = "rId2";

const BORDER_EDGES: [&str; 6] = ["top", "left", "bottom", "right", "insideH", "insideV"];

fn run_props(run: &Run) -> String {
    let mut out = String::from("<w:rPr>");
    out.push_str(&format!(
        r#"<w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:eastAsia="{f}" w:cs="{f}"/>"#,
        f = run.font
    ));
    if run.bold {
        out.push_str("<w:b/>");
    }
    out.push_str(&format!(r#"<w:color w:val="{}"/>"#, run.color));
    let half_points = run.size_pt * 2;
    out.push_str(&format!(
        r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/>"#
    ));
    out.push_str("</w:rPr>");
    out
}

pub fn run_xml(run: &Run) -> String {
    let mut out = String::new();
    match &run.kind {
        RunKind::Text(text) => {
            if text.is_empty() {
                return out;
            }
            out.push_str("<w:r>");
            out.push_str(&run_props(run));
            for (i, line) in text.split('\n').enumerate() {
                if i > 0 {
                    out.push_str("<w:br/>");
                }
                if !line.is_empty() {
                    out.push_str(r#"<w:t xml:space="preserve">"#);
                    out.push_str(&escape(line));
                    out.push_str("</w:t>");
                }
            }
            out.push_str("</w:r>");
        }
        RunKind::PageField => {
            out.push_str("<w:r>");
            out.push_str(&run_props(run));
            out.push_str(r#"<w:fldChar w:fldCharType="begin"/>"#);
            out.push_str(r#"<w:instrText xml:space="preserve"> PAGE </w:instrText>"#);
            out.push_str(r#"<w:fldChar w:fldCharType="end"/>"#);
            out.push_str("</w:r>");
        }
    }
    out
}

fn paragraph_props(p: &Paragraph, section: Option<&str>) -> String {
    let mut props = String::new();
    match p.style {
        ParagraphStyle::Normal => {}
        ParagraphStyle::Heading1 => props.push_str(r#"<w:pStyle w:val="Heading1"/>"#),
        ParagraphStyle::Heading2 => props.push_str(r#"<w:pStyle w:val="Heading2"/>"#),
    }
    if !p.spacing.is_empty() {
        props.push_str("<w:spacing");
        if let Some(before) = p.spacing.before {
            props.push_str(&format!(r#" w:before="{before}""#));
        }
        if let Some(after) = p.spacing.after {
            props.push_str(&format!(r#" w:after="{after}""#));
        }
        props.push_str("/>");
    }
    match p.align {
        Align::Inherit => {}
        Align::Left => props.push_str(r#"<w:jc w:val="left"/>"#),
        Align::Center => props.push_str(r#"<w:jc w:val="center"/>"#),
    }
    if let Some(sect) = section {
        props.push_str(sect);
    }
    if props.is_empty() {
        props
    } else {
        format!("<w:pPr>{props}</w:pPr>")
    }
}

pub fn paragraph_xml(p: &Paragraph) -> String {
    let mut out = String::from("<w:p>");
    out.push_str(&paragraph_props(p, None));
    for run in &p.runs {
        out.push_str(&run_xml(run));
    }
    out.push_str("</w:p>");
    out
}

fn cell_xml(cell: &TableCell) -> String {
    let mut out = String::from("<w:tc><w:tcPr>");
    match cell.width {
        Some(w) => out.push_str(&format!(r#"<w:tcW w:w="{w}" w:type="dxa"/>"#)),
        None => out.push_str(r#"<w:tcW w:w="0" w:type="auto"/>"#),
    }
    if let Some(fill) = cell.fill {
        out.push_str(&format!(r#"<w:shd w:val="clear" w:color="auto" w:fill="{fill}"/>"#));
    }
    if let Some(m) = cell.margins {
        out.push_str(&format!(
            r#"<w:tcMar><w:top w:w="{}" w:type="dxa"/><w:left w:w="{}" w:type="dxa"/><w:bottom w:w="{}" w:type="dxa"/><w:right w:w="{}" w:type="dxa"/></w:tcMar>"#,
            m.top, m.left, m.bottom, m.right
        ));
    }
    if cell.v_center {
        out.push_str(r#"<w:vAlign w:val="center"/>"#);
    }
    out.push_str("</w:tcPr>");
    if cell.paragraphs.is_empty() {
        // A cell must hold at least one paragraph.
        out.push_str("<w:p/>");
    }
    for p in &cell.paragraphs {
        out.push_str(&paragraph_xml(p));
    }
    out.push_str("</w:tc>");
    out
}

pub fn table_xml(t: &Table) -> String {
    let mut out = String::from("<w:tbl><w:tblPr>");
    out.push_str(&format!(r#"<w:tblW w:w="{}" w:type="dxa"/>"#, t.width));
    if t.centered {
        out.push_str(r#"<w:jc w:val="center"/>"#);
    }
    out.push_str("<w:tblBorders>");
    for edge in BORDER_EDGES {
        out.push_str(&format!(
            r#"<w:{edge} w:val="single" w:sz="4" w:space="0" w:color="{}"/>"#,
            theme::BORDER
        ));
    }
    out.push_str("</w:tblBorders>");
    out.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
    out.push_str("</w:tblPr><w:tblGrid>");
    for w in &t.grid {
        out.push_str(&format!(r#"<w:gridCol w:w="{w}"/>"#));
    }
    out.push_str("</w:tblGrid>");

    for row in &t.rows {
        out.push_str("<w:tr>");
        for cell in &row.cells {
            out.push_str(&cell_xml(cell));
        }
        out.push_str("</w:tr>");
    }

    out.push_str("</w:tbl>");
    out
}

fn elements_xml(elements: &[Element], out: &mut String) {
    for e in elements {
        match e {
            Element::Paragraph(p) => out.push_str(&paragraph_xml(p)),
            Element::Table(t) => out.push_str(&table_xml(t)),
        }
    }
}

fn section_props(footer: Option<&str>) -> String {
    let mut out = String::from("<w:sectPr>");
    if let Some(rid) = footer {
        out.push_str(&format!(r#"<w:footerReference w:type="default" r:id="{rid}"/>"#));
    }
    out.push_str(&format!(
        r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
        theme::PAGE_WIDTH,
        theme::PAGE_HEIGHT
    ));
    out.push_str(&format!(
        r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="720" w:footer="720" w:gutter="0"/>"#,
        m = theme::PAGE_MARGIN
    ));
    out.push_str(r#"<w:cols w:space="720"/><w:docGrid w:linePitch="360"/>"#);
    out.push_str("</w:sectPr>");
    out
}

pub fn document_xml(doc: &Document) -> String {
    let mut body = String::new();
    elements_xml(&doc.cover, &mut body);
    // The cover section closes with a paragraph carrying its section properties.
    body.push_str("<w:p>");
    body.push_str(&paragraph_props(&Paragraph::new(), Some(section_props(None).as_str())));
    body.push_str("</w:p>");
    elements_xml(&doc.body, &mut body);
    body.push_str(&section_props(Some(FOOTER_RID)));

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:wpc="http://schemas.microsoft.com/office/word/2010/wordprocessingCanvas"
 xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
 xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math"
 xmlns:v="urn:schemas-microsoft-com:vml"
 xmlns:wp14="http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing"
 xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing"
 xmlns:w10="urn:schemas-microsoft-com:office:word"
 xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
 xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordprocessingml"
 xmlns:w15="http://schemas.microsoft.com/office/word/2012/wordprocessingml"
 xmlns:wpg="http://schemas.microsoft.com/office/word/2010/wordprocessingGroup"
 xmlns:wpi="http://schemas.microsoft.com/office/word/2010/wordprocessingInk"
 xmlns:wne="http://schemas.microsoft.com/office/word/2006/wordml"
 xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape"
 mc:Ignorable="w14 w15 wp14">
  <w:body>{body}</w:body>
</w:document>"#
    )
}

pub fn footer_xml() -> String {
    let page = Paragraph::new()
        .align(Align::Center)
        .run(Run::page_field(9));
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:ftr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">{}</w:ftr>"#,
        paragraph_xml(&page)
    )
}

pub fn content_types_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/footer1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml"/>
</Types>"#
}

pub fn rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#
}

pub fn document_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="{STYLES_RID}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="{FOOTER_RID}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer" Target="footer1.xml"/>
</Relationships>"#
    )
}

pub fn styles_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="Arial Unicode MS" w:hAnsi="Arial Unicode MS" w:eastAsia="Arial Unicode MS" w:cs="Arial Unicode MS"/>
        <w:sz w:val="22"/>
        <w:szCs w:val="22"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr>
        <w:spacing w:after="0" w:line="240" w:lineRule="auto"/>
      </w:pPr>
    </w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:uiPriority w:val="9"/>
    <w:qFormat/>
    <w:pPr>
      <w:keepNext/>
      <w:keepLines/>
      <w:spacing w:before="0" w:after="0"/>
      <w:outlineLvl w:val="0"/>
    </w:pPr>
    <w:rPr>
      <w:b/>
      <w:sz w:val="28"/>
    </w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:uiPriority w:val="9"/>
    <w:qFormat/>
    <w:pPr>
      <w:keepNext/>
      <w:keepLines/>
      <w:spacing w:before="200" w:after="100"/>
      <w:outlineLvl w:val="1"/>
    </w:pPr>
    <w:rPr>
      <w:b/>
      <w:sz w:val="26"/>
    </w:rPr>
  </w:style>
</w:styles>"#
}
