//! 체크리스트 카탈로그 타입.
//!
//! 이 모듈은 체크리스트 구조를 정의합니다:
//! - `CoreStep` - 트레이드 자격 요건 범주 (섹션에 명시적으로 태그됨)
//! - `ChecklistItem` - 라벨, 극성, 방향 편향을 가진 항목
//! - `ChecklistSection` - 제목과 항목 목록
//! - `Catalog` - 종류별 섹션 묶음

use crate::types::{Direction, Polarity};
use serde::{Deserialize, Serialize};

/// 트레이드 자격 요건 범주.
///
/// 섹션 제목 문자열을 검색하는 대신 카탈로그 정의 시점에 각 섹션에
/// 직접 태그합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreStep {
    /// 전일 NY 고점/저점 필터
    MacroFilter,
    /// 스윙 레인지와 할인 구간
    SwingRangeDiscount,
    /// 리스크 정의 (Kill Zone, SL)
    RiskDefinition,
    /// 하위 타임프레임 확인 (BOS, OB, FVG)
    LowerTimeframeConfirmation,
    /// 진입과 목표가
    ExecutionTargets,
    /// AMD: 매집
    Accumulation,
    /// AMD: 조작
    Manipulation,
    /// AMD: 분배
    Distribution,
}

impl CoreStep {
    /// 전체 core step (정의 순서).
    pub const ALL: [CoreStep; 8] = [
        CoreStep::MacroFilter,
        CoreStep::SwingRangeDiscount,
        CoreStep::RiskDefinition,
        CoreStep::LowerTimeframeConfirmation,
        CoreStep::ExecutionTargets,
        CoreStep::Accumulation,
        CoreStep::Manipulation,
        CoreStep::Distribution,
    ];

    /// 화면 표시용 제목.
    pub fn label(self) -> &'static str {
        match self {
            Self::MacroFilter => "Macro Filter",
            Self::SwingRangeDiscount => "Swing Range & Discount Zone",
            Self::RiskDefinition => "Risk Definition",
            Self::LowerTimeframeConfirmation => "Lower TF Confirmation",
            Self::ExecutionTargets => "Execution & Targets",
            Self::Accumulation => "Accumulation",
            Self::Manipulation => "Manipulation",
            Self::Distribution => "Distribution",
        }
    }

    /// AMD 단계인지 확인합니다.
    pub fn is_amd_phase(self) -> bool {
        matches!(
            self,
            Self::Accumulation | Self::Manipulation | Self::Distribution
        )
    }
}

impl std::fmt::Display for CoreStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 체크리스트 항목.
///
/// 라벨은 AnswerMap의 키로도 쓰이므로 카탈로그 안에서 유일해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// 항목 라벨
    pub label: String,
    /// 좋음/나쁨 태그 (감정 체크리스트만 사용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    /// 라벨이 가리키는 방향들 (BUY와 SELL 둘 다일 수 있음)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bias: Vec<Direction>,
}

impl ChecklistItem {
    /// 새 항목을 생성합니다.
    ///
    /// 방향 편향은 라벨의 "BUY"/"SELL" 표식에서 한 번 계산됩니다.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let bias = [Direction::Buy, Direction::Sell]
            .into_iter()
            .filter(|d| label.contains(d.marker()))
            .collect();
        Self {
            label,
            polarity: None,
            bias,
        }
    }

    /// 좋은 감정 항목을 생성합니다.
    pub fn good(label: impl Into<String>) -> Self {
        Self::new(label).with_polarity(Polarity::Good)
    }

    /// 나쁜 감정 항목을 생성합니다.
    pub fn bad(label: impl Into<String>) -> Self {
        Self::new(label).with_polarity(Polarity::Bad)
    }

    /// 극성을 설정합니다.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// 주어진 방향으로 편향되어 있는지 확인합니다.
    pub fn leans(&self, direction: Direction) -> bool {
        self.bias.contains(&direction)
    }
}

/// 체크리스트 섹션.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// 섹션 제목
    pub title: String,
    /// 이 섹션이 속한 core step (없으면 점수 계산에서 제외)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_step: Option<CoreStep>,
    /// 순서가 있는 항목 목록
    pub items: Vec<ChecklistItem>,
}

impl ChecklistSection {
    /// 태그 없는 섹션을 생성합니다.
    pub fn new(title: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            title: title.into(),
            core_step: None,
            items,
        }
    }

    /// core step 섹션을 생성합니다. 제목은 step의 라벨을 사용합니다.
    pub fn for_step(step: CoreStep, items: Vec<ChecklistItem>) -> Self {
        Self {
            title: step.label().to_string(),
            core_step: Some(step),
            items,
        }
    }
}

/// 카탈로그 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    /// NY 세션 기술적 셋업 단계
    Technical,
    /// Accumulation-Manipulation-Distribution 단계
    Amd,
    /// 진입 전/중/후 감정 체크리스트
    Emotional,
    /// 트레이딩 심리 (아침 마인드셋, 매 거래 전)
    Psychology,
    /// 저널 카드의 9개 셋업 질문
    TradeSetup,
}

impl std::str::FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "amd" => Ok(Self::Amd),
            "emotional" => Ok(Self::Emotional),
            "psychology" => Ok(Self::Psychology),
            "trade-setup" | "trade_setup" | "setup" => Ok(Self::TradeSetup),
            _ => Err(format!("Unknown catalog: {}", s)),
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Technical => "technical",
            Self::Amd => "amd",
            Self::Emotional => "emotional",
            Self::Psychology => "psychology",
            Self::TradeSetup => "trade-setup",
        };
        f.write_str(s)
    }
}

/// 체크리스트 카탈로그.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// 카탈로그 종류 (병합된 카탈로그는 첫 번째 종류를 유지)
    pub kind: CatalogKind,
    /// 순서가 있는 섹션 목록
    pub sections: Vec<ChecklistSection>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, sections: Vec<ChecklistSection>) -> Self {
        Self { kind, sections }
    }

    /// 여러 카탈로그를 순서대로 이어 붙입니다.
    ///
    /// 빈 슬라이스면 섹션 없는 Technical 카탈로그를 반환합니다.
    pub fn merged(catalogs: &[Catalog]) -> Self {
        let kind = catalogs
            .first()
            .map(|c| c.kind)
            .unwrap_or(CatalogKind::Technical);
        let sections = catalogs
            .iter()
            .flat_map(|c| c.sections.iter().cloned())
            .collect();
        Self { kind, sections }
    }

    /// 모든 항목을 섹션 순서대로 반환합니다.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// 주어진 core step으로 태그된 섹션들.
    pub fn sections_for(&self, step: CoreStep) -> impl Iterator<Item = &ChecklistSection> {
        self.sections
            .iter()
            .filter(move |s| s.core_step == Some(step))
    }

    /// 라벨이 카탈로그에 있는지 확인합니다.
    pub fn contains(&self, label: &str) -> bool {
        self.items().any(|item| item.label == label)
    }

    /// 전체 항목 수.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// 중복된 라벨을 반환합니다 (AnswerMap 키 충돌 검사용).
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for item in self.items() {
            if !seen.insert(item.label.as_str()) && !duplicates.contains(&item.label.as_str()) {
                duplicates.push(item.label.as_str());
            }
        }
        duplicates
    }
}
