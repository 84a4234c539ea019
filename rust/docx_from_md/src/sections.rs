//! Section numbers, their canonical titles and card descriptions.
//!
//! Several descriptions are not literal: they reuse the description column of
//! the workflow table that sits under the `1.` section heading.

use std::collections::BTreeMap;

use crate::markdown::Block;

enum Description {
    Literal(&'static str),
    WorkflowStep(&'static str),
}

const SECTIONS: [(u64, &str, Description); 12] = [
    (
        1,
        "전체 워크플로우",
        Description::Literal("본 플랫폼의 핵심 워크플로우를 다음과 같이 정의한다."),
    ),
    (2, "Builder (App 개발)", Description::WorkflowStep("1")),
    (
        3,
        "컴포넌트 글로벌 라이브러리",
        Description::Literal(
            "시스템 전역에서 재사용 가능한 컴포넌트를 등록·관리하는 카탈로그이다.",
        ),
    ),
    (
        4,
        "Trainer (학습 요청)",
        Description::Literal(
            "개발 완료된 App에 대해 학습 파라미터와 리소스를 설정하여 학습 요청을 제출하는 전용 화면이다.",
        ),
    ),
    (5, "테스트 및 승인", Description::WorkflowStep("3")),
    (6, "실행 대기열 및 우선순위 관리", Description::WorkflowStep("4")),
    (7, "리소스 관리", Description::WorkflowStep("5")),
    (8, "결과 모델 관리", Description::WorkflowStep("6")),
    (
        9,
        "워크로드 스케줄링 (HPC)",
        Description::Literal("승인된 워크로드를 실제 HPC 인프라에서 실행하는 계층이다."),
    ),
    (
        10,
        "저장소",
        Description::Literal(
            "스펙 파일, 모델, 테스트 실행 결과, 실행 로그 등을 저장하고 관리한다.",
        ),
    ),
    (
        11,
        "권한 관리 및 인증",
        Description::Literal("역할 기반 접근 제어와 사용자 계정 관리를 제공한다."),
    ),
    (
        12,
        "권장 기술 스택 및 구현 로드맵",
        Description::Literal(
            "HPC/ML 워크로드 관리를 위한 권장 기술 스택과 구현 로드맵을 정의한다.",
        ),
    ),
];

/// Step number -> description, read from the workflow table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowSteps(BTreeMap<String, String>);

impl WorkflowSteps {
    /// Finds the first table under the first `## 1.` heading, stopping at the next level-2 heading.
    pub fn extract(blocks: &[Block]) -> Self {
        let mut steps = BTreeMap::new();

        let Some(start) = blocks.iter().position(
            |b| matches!(b, Block::Heading { level: 2, text } if text.starts_with("1.")),
        ) else {
            return Self(steps);
        };

        let table = blocks[start + 1..]
            .iter()
            .take_while(|b| !b.is_heading(2))
            .find_map(|b| match b {
                Block::Table(rows) => Some(rows),
                _ => None,
            });

        if let Some(rows) = table {
            for row in rows.iter().skip(1).filter(|r| r.len() >= 3) {
                steps.insert(row[0].trim().to_string(), row[2].trim().to_string());
            }
        }
        Self(steps)
    }

    pub fn get(&self, step: &str) -> Option<&str> {
        self.0.get(step).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub title: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    entries: BTreeMap<u64, SectionEntry>,
}

impl SectionMap {
    pub fn new(steps: &WorkflowSteps) -> Self {
        let entries = SECTIONS
            .iter()
            .map(|(number, title, description)| {
                let description = match description {
                    Description::Literal(text) => (*text).to_string(),
                    Description::WorkflowStep(step) => {
                        steps.get(step).unwrap_or_default().to_string()
                    }
                };
                (
                    *number,
                    SectionEntry {
                        title: *title,
                        description,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, number: u64) -> Option<&SectionEntry> {
        self.entries.get(&number)
    }

    /// `(title, description)` for a section. Numbers outside the map keep the
    /// heading's own title and get no description.
    pub fn resolve<'a>(&'a self, number: u64, heading_title: &'a str) -> (&'a str, &'a str) {
        match self.get(number) {
            Some(entry) => (entry.title, entry.description.as_str()),
            None => (heading_title, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_markdown;

    const WORKFLOW_MD: &str = "\
# AVATAR OnE
## 1. 전체 워크플로우
본문
| 단계 | 이름 | 설명 |
|---|---|---|
| 1 | Builder | 앱을 만든다 |
| 2 | 컴포넌트 | 재사용 |
| 3 | 테스트 | 테스트 실행 후 승인한다 |
| 4 | 대기열 | 우선순위로 실행한다 |
| 5 | 리소스 | 자원을 관리한다 |
| 6 | 결과 | 모델을 보관한다 |
| 7 | 짧음 |
## 2. Builder
| 단계 | 이름 | 설명 |
| 9 | late | 무시 |
";

    #[test]
    fn extracts_workflow_steps_under_section_one() {
        let steps = WorkflowSteps::extract(&parse_markdown(WORKFLOW_MD));
        assert_eq!(steps.len(), 6);
        assert_eq!(steps.get("3"), Some("테스트 실행 후 승인한다"));
        assert_eq!(steps.get("7"), None);
        assert_eq!(steps.get("9"), None);
    }

    #[test]
    fn stops_at_next_level_two_heading() {
        let md = "## 1. 워크플로우\n텍스트\n## 2. 다음\n| a | b | c |\n| 1 | x | y |";
        assert!(WorkflowSteps::extract(&parse_markdown(md)).is_empty());
    }

    #[test]
    fn header_only_table_yields_nothing() {
        let md = "## 1. 워크플로우\n| 단계 | 이름 | 설명 |";
        assert!(WorkflowSteps::extract(&parse_markdown(md)).is_empty());
    }

    #[test]
    fn section_map_borrows_workflow_descriptions() {
        let map = SectionMap::new(&WorkflowSteps::extract(&parse_markdown(WORKFLOW_MD)));
        assert_eq!(map.resolve(2, "").1, "앱을 만든다");
        assert_eq!(map.resolve(5, "").1, "테스트 실행 후 승인한다");
        assert_eq!(map.resolve(6, "").1, "우선순위로 실행한다");
        assert_eq!(map.resolve(7, "").1, "자원을 관리한다");
        assert_eq!(map.resolve(8, "").1, "모델을 보관한다");
    }

    #[test]
    fn section_three_uses_literal_description() {
        let map = SectionMap::new(&WorkflowSteps::extract(&parse_markdown(WORKFLOW_MD)));
        let entry = map.get(3).expect("section 3 is mapped");
        assert_eq!(entry.title, "컴포넌트 글로벌 라이브러리");
        assert_eq!(
            entry.description,
            "시스템 전역에서 재사용 가능한 컴포넌트를 등록·관리하는 카탈로그이다."
        );
    }

    #[test]
    fn missing_workflow_leaves_borrowed_descriptions_empty() {
        let map = SectionMap::new(&WorkflowSteps::default());
        assert_eq!(map.resolve(2, "").1, "");
        assert_eq!(map.resolve(1, "").1, "본 플랫폼의 핵심 워크플로우를 다음과 같이 정의한다.");
        assert_eq!(map.resolve(13, "").1, "");
        assert!(map.get(13).is_none());
    }

    #[test]
    fn resolve_falls_back_to_heading_title() {
        let map = SectionMap::new(&WorkflowSteps::default());
        assert_eq!(
            map.resolve(10, "Storage"),
            ("저장소", "스펙 파일, 모델, 테스트 실행 결과, 실행 로그 등을 저장하고 관리한다.")
        );
        assert_eq!(map.resolve(99_999_999_999, "부록"), ("부록", ""));
    }
}
