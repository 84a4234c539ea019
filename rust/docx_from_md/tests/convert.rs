use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use docx_from_md::package::PARTS;
use docx_from_md::{execute, run, Args};

const SAMPLE: &str = "\
# AVATAR OnE 플랫폼 기능 명세서

> 문서 머리말은 표지에 포함되지 않는다.

## 1. 전체 워크플로우

| 단계 | 이름 | 설명 |
|---|---|---|
| 1 | Builder | 컴포넌트를 조합하여 App을 개발한다 |
| 2 | Trainer | 학습 요청을 제출한다 |
| 3 | 테스트/승인 | 결과를 검증하고 승인한다 |
| 4 | 대기열 | 우선순위에 따라 실행한다 |
| 5 | 리소스 | GPU 자원을 배분한다 |
| 6 | 결과 | 학습된 모델을 관리한다 |

### 프로세스 개요

**Builder**에서 App을 만들고 Trainer로 넘긴다.
승인 후 스케줄링된다.

---

## 2. Builder (App 개발)

### 주요 기능

| ID | 기능명 | 설명 | 우선순위 | 구현단계 |
|---|---|---|---|---|
| B-01 | 캔버스 | 드래그 앤 드롭 편집 | P0 | 1단계 |
| B-02 | 검증 | 스펙 유효성 검사 | P1 | 2단계 |
| B-03 | 내보내기 | YAML 내보내기 | P2 | 3단계 |

```json
{
  \"app\": \"demo\"
}
```

- 첫 번째 항목
- 두 번째 **강조** 항목

## 3. 컴포넌트 글로벌 라이브러리

| 항목 | 값 |
|---|---|
| 버전 관리 | 지원 |
";

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).expect("open docx")).expect("zip");
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"))
        .read_to_string(&mut xml)
        .expect("utf-8 part");
    xml
}

fn assert_well_formed(name: &str, xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0i32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("{name} is malformed: {e}"),
        }
    }
    assert_eq!(depth, 0, "{name} has unbalanced elements");
}

fn convert_sample(md: &str) -> (tempfile::TempDir, Args) {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("spec.md");
    std::fs::write(&input, md).expect("write input");
    let args = Args::new(input, dir.path().join("docs").join("spec.docx"));
    (dir, args)
}

#[test]
fn missing_input_exits_with_one_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = Args::new(dir.path().join("nope.md"), dir.path().join("out.docx"));
    assert_eq!(execute(&args), 1);
    assert!(!args.output.exists());
}

#[test]
fn package_has_all_parts_and_well_formed_xml() {
    let (_dir, args) = convert_sample(SAMPLE);
    assert_eq!(execute(&args), 0);

    for part in PARTS {
        let xml = read_part(&args.output, part);
        assert_well_formed(part, &xml);
    }
}

#[test]
fn document_carries_cards_priorities_and_page_field() {
    let (_dir, args) = convert_sample(SAMPLE);
    let report = run(&args).expect("conversion succeeds");
    assert!(report.size_bytes > 0);

    let doc = read_part(&args.output, "word/document.xml");
    assert!(doc.contains("AVATAR OnE 플랫폼"));
    assert!(doc.contains("3. 컴포넌트 글로벌 라이브러리"));
    assert!(doc.contains("시스템 전역에서 재사용 가능한 컴포넌트를 등록·관리하는 카탈로그이다."));
    assert!(doc.contains("컴포넌트를 조합하여 App을 개발한다"));
    assert!(doc.contains(r#"w:color w:val="C0392B""#));
    assert!(doc.contains(r#"w:color w:val="D4740A""#));
    assert!(doc.contains("&quot;app&quot;: &quot;demo&quot;"));
    assert!(doc.contains("- 첫 번째 항목"));
    assert!(!doc.contains("문서 머리말"));
    assert_eq!(doc.matches("<w:sectPr>").count(), 2);

    let footer = read_part(&args.output, "word/footer1.xml");
    assert!(footer.contains(" PAGE "));
}

#[test]
fn title_only_document_has_empty_body() {
    let (_dir, args) = convert_sample("# 제목만 있는 문서\n");
    assert_eq!(execute(&args), 0);

    let doc = read_part(&args.output, "word/document.xml");
    let body_start = doc.find("</w:sectPr></w:pPr></w:p>").expect("cover section break");
    let tail = &doc[body_start..];
    assert!(!tail.contains("<w:tbl>"));
    assert!(!tail.contains("제목만"));
}
