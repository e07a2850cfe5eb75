//! 내장 체크리스트 카탈로그.
//!
//! 모든 카탈로그는 컴파일 시점 상수로부터 만들어지며 실패 경로가 없습니다.

use super::catalog::{Catalog, CatalogKind, ChecklistItem, ChecklistSection, CoreStep};
use super::setup::SetupCondition;

/// 종류별 내장 카탈로그를 반환합니다.
pub fn catalog(kind: CatalogKind) -> Catalog {
    match kind {
        CatalogKind::Technical => technical_catalog(),
        CatalogKind::Amd => amd_catalog(),
        CatalogKind::Emotional => emotional_catalog(),
        CatalogKind::Psychology => psychology_catalog(),
        CatalogKind::TradeSetup => trade_setup_catalog(),
    }
}

/// core step 평가용 카탈로그 (NY 세션 단계 + AMD 단계).
pub fn core_step_catalog() -> Catalog {
    Catalog::merged(&[technical_catalog(), amd_catalog()])
}

fn items(labels: &[&str]) -> Vec<ChecklistItem> {
    labels.iter().map(|l| ChecklistItem::new(*l)).collect()
}

/// NY 세션 기술적 셋업 카탈로그.
///
/// 마지막 "Probability Boosters" 섹션은 core step 태그가 없습니다.
pub fn technical_catalog() -> Catalog {
    Catalog::new(
        CatalogKind::Technical,
        vec![
            ChecklistSection::for_step(
                CoreStep::MacroFilter,
                items(&[
                    "BUY → Previous NY low NOT broken",
                    "SELL → Previous NY high NOT broken",
                ]),
            ),
            ChecklistSection::for_step(
                CoreStep::SwingRangeDiscount,
                items(&[
                    "Draw Fib (Low → High for BUY, High → Low for SELL)",
                    "Wait for retracement into 50–61.8%",
                ]),
            ),
            ChecklistSection::for_step(
                CoreStep::RiskDefinition,
                items(&[
                    "Kill Zone = Swing Low/High",
                    "SL beyond Kill Zone",
                    "If Kill Zone broken → INVALID",
                ]),
            ),
            ChecklistSection::for_step(
                CoreStep::LowerTimeframeConfirmation,
                items(&[
                    "Break of Structure inside Discount Zone",
                    "OB Retest",
                    "FVG confluence",
                ]),
            ),
            ChecklistSection::for_step(
                CoreStep::ExecutionTargets,
                items(&[
                    "Entry = OB/FVG after BOS",
                    "SL = Below swing low (BUY) / Above swing high (SELL)",
                    "TP1 = 100% Fib",
                    "TP2 = Extension (new HH/LL)",
                ]),
            ),
            ChecklistSection::new(
                "Probability Boosters",
                items(&["Weekly Open", "Daily Open", "Previous Weekly High/Low"]),
            ),
        ],
    )
}

/// Accumulation-Manipulation-Distribution 카탈로그.
pub fn amd_catalog() -> Catalog {
    Catalog::new(
        CatalogKind::Amd,
        vec![
            ChecklistSection::for_step(
                CoreStep::Accumulation,
                items(&[
                    "Market sweeping liquidity at lows",
                    "Consolidation forming",
                    "Signs of reversal",
                ]),
            ),
            ChecklistSection::for_step(
                CoreStep::Manipulation,
                items(&[
                    "Stop hunt (above/below structure)",
                    "Fake breakout",
                    "Liquidity grab confirmed",
                ]),
            ),
            ChecklistSection::for_step(
                CoreStep::Distribution,
                items(&[
                    "Strong displacement in intended direction",
                    "Retest of OB/FVG",
                    "Trend continuation",
                ]),
            ),
        ],
    )
}

fn emotional_section(title: &str, good: &[&str], bad: &[&str]) -> ChecklistSection {
    let items = good
        .iter()
        .map(|l| ChecklistItem::good(*l))
        .chain(bad.iter().map(|l| ChecklistItem::bad(*l)))
        .collect();
    ChecklistSection::new(title, items)
}

/// 진입 전/중/후 감정 지능 카탈로그.
pub fn emotional_catalog() -> Catalog {
    Catalog::new(
        CatalogKind::Emotional,
        vec![
            emotional_section(
                "Before Trade",
                &[
                    "I followed my trading plan",
                    "I defined entry, stop loss, and take profit before entry",
                    "I’m calm and patient waiting for setup",
                    "I accepted possible loss before placing trade",
                ],
                &[
                    "I’m entering because of FOMO",
                    "I’m increasing my lot size without reason",
                    "I’m revenge trading after a loss",
                    "I don’t have a clear setup",
                ],
            ),
            emotional_section(
                "During Trade",
                &[
                    "I’m sticking to my stop loss and take profit",
                    "I’m not staring at charts anxiously",
                    "I’m calm whether trade is in profit or loss",
                    "I’m following my plan without emotions",
                ],
                &[
                    "I’m moving stop loss further away",
                    "I’m closing trade early due to fear/greed",
                    "I’m adding positions impulsively",
                    "I feel panic or over-excitement",
                ],
            ),
            emotional_section(
                "After Trade",
                &[
                    "I accepted the outcome without emotions",
                    "I reviewed if I followed my rules",
                    "I’m learning from the result (win or loss)",
                    "I’m not rushing to open another trade immediately",
                ],
                &[
                    "I’m blaming the market or broker",
                    "I’m revenge trading right after",
                    "I’m over-celebrating a win or over-mourning a loss",
                    "I ignore reviewing my execution",
                ],
            ),
        ],
    )
}

/// 트레이딩 심리 카탈로그.
pub fn psychology_catalog() -> Catalog {
    Catalog::new(
        CatalogKind::Psychology,
        vec![
            ChecklistSection::new(
                "Morning Mindset",
                items(&[
                    "Clarity Over Noise – Focus on one or two high-quality setups.",
                    "Luck & Risk – Risk and luck are siblings. Control only what you can.",
                    "Never Enough – Happiness = Results - Expectations. Be grateful.",
                    "Confounding Compounding – Small consistent gains beat reckless big wins.",
                    "Getting Wealthy vs. Staying Wealthy – The best trader is the best loser.",
                    "Tails, You Win – Stay alive long enough to catch the big wins.",
                ]),
            ),
            ChecklistSection::new(
                "Before Every Trade",
                items(&[
                    "Check AMD Cycle (Accumulation → Manipulation → Distribution).",
                    "Risk Defined – Know your stop loss and be okay losing it.",
                    "Bias Confirmation – Align trade with higher timeframe & liquidity.",
                    "Emotion Check – No FOMO, no revenge trading.",
                    "Compounding Mindset – One trade doesn’t matter, the series does.",
                ]),
            ),
        ],
    )
}

/// 저널 카드의 셋업 질문 카탈로그.
pub fn trade_setup_catalog() -> Catalog {
    Catalog::new(
        CatalogKind::TradeSetup,
        vec![ChecklistSection::new(
            "Trade Checklist",
            SetupCondition::ALL
                .iter()
                .map(|c| ChecklistItem::new(c.question()))
                .collect(),
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Polarity};

    #[test]
    fn test_core_step_catalog_covers_all_steps() {
        let catalog = core_step_catalog();
        for step in CoreStep::ALL {
            assert_eq!(
                catalog.sections_for(step).count(),
                1,
                "{} 섹션이 정확히 하나여야 함",
                step
            );
        }
    }

    #[test]
    fn test_labels_unique_within_every_catalog() {
        for kind in [
            CatalogKind::Technical,
            CatalogKind::Amd,
            CatalogKind::Emotional,
            CatalogKind::Psychology,
            CatalogKind::TradeSetup,
        ] {
            assert!(catalog(kind).duplicate_labels().is_empty(), "{}", kind);
        }
        assert!(core_step_catalog().duplicate_labels().is_empty());
    }

    #[test]
    fn test_emotional_polarity_split() {
        let catalog = emotional_catalog();
        assert_eq!(catalog.sections.len(), 3);
        let good = catalog
            .items()
            .filter(|i| i.polarity == Some(Polarity::Good))
            .count();
        let bad = catalog
            .items()
            .filter(|i| i.polarity == Some(Polarity::Bad))
            .count();
        assert_eq!(good, 12);
        assert_eq!(bad, 12);
    }

    #[test]
    fn test_direction_tagged_items() {
        let catalog = technical_catalog();
        let buy = catalog.items().filter(|i| i.leans(Direction::Buy)).count();
        let sell = catalog.items().filter(|i| i.leans(Direction::Sell)).count();
        // Macro Filter 1개씩 + 양방향 항목 2개
        assert_eq!(buy, 3);
        assert_eq!(sell, 3);
    }

    #[test]
    fn test_probability_boosters_untagged() {
        let catalog = technical_catalog();
        let boosters = catalog
            .sections
            .iter()
            .find(|s| s.title == "Probability Boosters")
            .unwrap();
        assert!(boosters.core_step.is_none());
    }

    #[test]
    fn test_trade_setup_has_nine_questions() {
        assert_eq!(trade_setup_catalog().item_count(), 9);
        assert_eq!(psychology_catalog().item_count(), 11);
    }
}
