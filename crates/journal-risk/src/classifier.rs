//! 셋업 분류기.
//!
//! 9개 조건을 두 묶음으로 나눕니다:
//! - 기본(base): Trend, FibZone, KillZoneBox, BreakOfStructure, OrderBlock 모두 충족
//! - 프리미엄(premium): DailyMovement, AmdPattern, EngulfingCandle, UtAlert 모두 충족
//!
//! 규칙은 위에서부터 순서대로 평가하며 처음 일치한 규칙이 결과입니다.
//! Fib 구간 밖의 BoS 진입은 다른 조건과 무관하게 가장 먼저 걸러집니다.

use crate::policy::RiskPolicy;
use journal_core::{AnswerMap, SetupCondition};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 9개 셋업 조건의 체크 상태.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySetup {
    pub trend: bool,
    pub fib_zone: bool,
    pub kill_zone_box: bool,
    pub break_of_structure: bool,
    pub order_block: bool,
    pub daily_movement: bool,
    pub amd_pattern: bool,
    pub engulfing_candle: bool,
    pub ut_alert: bool,
}

impl StrategySetup {
    /// 모든 조건이 꺼진 셋업.
    pub fn new() -> Self {
        Self::default()
    }

    /// 저널 카드의 AnswerMap에서 셋업을 읽습니다.
    ///
    /// 질문 텍스트가 일치하는 항목만 반영합니다.
    pub fn from_answers(answers: &AnswerMap) -> Self {
        SetupCondition::ALL
            .into_iter()
            .filter(|c| answers.is_checked(c.question()))
            .collect()
    }

    fn slot(&mut self, condition: SetupCondition) -> &mut bool {
        match condition {
            SetupCondition::Trend => &mut self.trend,
            SetupCondition::FibZone => &mut self.fib_zone,
            SetupCondition::KillZoneBox => &mut self.kill_zone_box,
            SetupCondition::BreakOfStructure => &mut self.break_of_structure,
            SetupCondition::OrderBlock => &mut self.order_block,
            SetupCondition::DailyMovement => &mut self.daily_movement,
            SetupCondition::AmdPattern => &mut self.amd_pattern,
            SetupCondition::EngulfingCandle => &mut self.engulfing_candle,
            SetupCondition::UtAlert => &mut self.ut_alert,
        }
    }

    pub fn set(&mut self, condition: SetupCondition, checked: bool) {
        *self.slot(condition) = checked;
    }

    /// 조건을 반전하고 새 값을 반환합니다.
    pub fn toggle(&mut self, condition: SetupCondition) -> bool {
        let slot = self.slot(condition);
        *slot = !*slot;
        *slot
    }

    pub fn is_checked(&self, condition: SetupCondition) -> bool {
        match condition {
            SetupCondition::Trend => self.trend,
            SetupCondition::FibZone => self.fib_zone,
            SetupCondition::KillZoneBox => self.kill_zone_box,
            SetupCondition::BreakOfStructure => self.break_of_structure,
            SetupCondition::OrderBlock => self.order_block,
            SetupCondition::DailyMovement => self.daily_movement,
            SetupCondition::AmdPattern => self.amd_pattern,
            SetupCondition::EngulfingCandle => self.engulfing_candle,
            SetupCondition::UtAlert => self.ut_alert,
        }
    }

    pub fn any_checked(&self) -> bool {
        SetupCondition::ALL.into_iter().any(|c| self.is_checked(c))
    }

    pub fn checked_count(&self) -> usize {
        SetupCondition::ALL
            .into_iter()
            .filter(|c| self.is_checked(*c))
            .count()
    }

    /// 기본 5개 조건 모두 충족.
    pub fn is_base(&self) -> bool {
        self.trend
            && self.fib_zone
            && self.kill_zone_box
            && self.break_of_structure
            && self.order_block
    }

    /// 프리미엄 4개 조건 모두 충족.
    pub fn is_premium(&self) -> bool {
        self.daily_movement && self.amd_pattern && self.engulfing_candle && self.ut_alert
    }

    /// 모든 조건을 끕니다.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl FromIterator<SetupCondition> for StrategySetup {
    fn from_iter<I: IntoIterator<Item = SetupCondition>>(iter: I) -> Self {
        let mut setup = Self::default();
        for condition in iter {
            setup.set(condition, true);
        }
        setup
    }
}

/// 셋업 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupCategory {
    /// Fib 구간 밖에서 BoS
    NoDiscount,
    /// 기본 + 프리미엄
    PremiumConfluence,
    /// 기본 조건만
    HighProbability,
    /// 기본 조건 없이 BoS
    EarlyCounterTrend,
    /// 그 밖의 모든 조합
    Incomplete,
}

impl SetupCategory {
    /// 화면 표시용 분류 이름.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoDiscount => "No Discount",
            Self::PremiumConfluence => "Premium Confluence Setup",
            Self::HighProbability => "High Probability Setup",
            Self::EarlyCounterTrend => "Early / Counter-Trend",
            Self::Incomplete => "Incomplete Setup",
        }
    }

    /// 컬러 코드 (UI용)
    pub fn color_code(self) -> &'static str {
        match self {
            Self::NoDiscount | Self::EarlyCounterTrend => "#854d0e", // 노란색
            Self::PremiumConfluence => "#6b21a8",                   // 보라색
            Self::HighProbability => "#166534",                     // 녹색
            Self::Incomplete => "#374151",                          // 회색
        }
    }

    /// 정책에서 이 분류의 권장 리스크를 찾습니다.
    pub fn recommendation(self, policy: &RiskPolicy) -> RiskRecommendation {
        match self {
            Self::NoDiscount => RiskRecommendation::Percent(policy.no_discount_pct),
            Self::PremiumConfluence => RiskRecommendation::Percent(policy.premium_confluence_pct),
            Self::HighProbability => RiskRecommendation::Percent(policy.high_probability_pct),
            Self::EarlyCounterTrend => RiskRecommendation::Percent(policy.early_counter_trend_pct),
            Self::Incomplete => RiskRecommendation::AwaitingConfirmation,
        }
    }
}

impl std::fmt::Display for SetupCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 권장 리스크.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskRecommendation {
    /// 계좌 잔고 대비 비율 (%)
    Percent(Decimal),
    /// 아직 리스크를 걸 단계가 아님
    AwaitingConfirmation,
}

impl RiskRecommendation {
    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Self::Percent(pct) => Some(*pct),
            Self::AwaitingConfirmation => None,
        }
    }
}

impl std::fmt::Display for RiskRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent(pct) => write!(f, "{}%", pct.normalize()),
            Self::AwaitingConfirmation => write!(f, "Awaiting Confirmation..."),
        }
    }
}

/// 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupClassification {
    pub category: SetupCategory,
    pub risk: RiskRecommendation,
}

impl SetupClassification {
    /// 분류 이름 ("Premium Confluence Setup" 등).
    pub fn type_label(&self) -> &'static str {
        self.category.label()
    }
}

impl std::fmt::Display for SetupClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Recommended Risk: {}", self.category, self.risk)
    }
}

fn categorize(setup: &StrategySetup) -> Option<SetupCategory> {
    if !setup.any_checked() {
        return None;
    }

    let base = setup.is_base();
    let category = if !setup.fib_zone && setup.break_of_structure {
        SetupCategory::NoDiscount
    } else if base && setup.is_premium() {
        SetupCategory::PremiumConfluence
    } else if base {
        SetupCategory::HighProbability
    } else if setup.break_of_structure {
        SetupCategory::EarlyCounterTrend
    } else {
        SetupCategory::Incomplete
    };

    Some(category)
}

/// 기본 정책으로 셋업을 분류합니다.
///
/// 아무 조건도 체크되지 않았으면 `None`입니다.
pub fn classify(setup: &StrategySetup) -> Option<SetupClassification> {
    classify_with(setup, &RiskPolicy::default())
}

/// 주어진 정책으로 셋업을 분류합니다.
pub fn classify_with(setup: &StrategySetup, policy: &RiskPolicy) -> Option<SetupClassification> {
    let category = categorize(setup)?;
    let risk = category.recommendation(policy);
    tracing::debug!(
        checked = setup.checked_count(),
        category = %category,
        risk = %risk,
        "Setup classified"
    );
    Some(SetupClassification { category, risk })
}
