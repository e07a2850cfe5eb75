//! 셋업 분류기 통합 테스트
//!
//! 규칙 우선순위(처음 일치한 규칙 적용)와 전체 512개 조합에 대한
//! 분류 불변식을 검증.

use journal_core::SetupCondition;
use journal_risk::{classify, RiskRecommendation, RiskSizer, SetupCategory, StrategySetup};
use proptest::prelude::*;
use rust_decimal_macros::dec;

// ============================================================================
// 테스트 헬퍼 함수
// ============================================================================

fn setup_of(conditions: &[SetupCondition]) -> StrategySetup {
    conditions.iter().copied().collect()
}

/// 비트마스크 → 셋업 (SetupCondition::ALL 순서)
fn setup_from_mask(mask: u16) -> StrategySetup {
    SetupCondition::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, c)| c)
        .collect()
}

// ============================================================================
// 우선순위 테스트
// ============================================================================

#[test]
fn test_no_discount_beats_premium() {
    // Fib 구간만 빠진 전체 조건
    let setup = setup_of(&[
        SetupCondition::Trend,
        SetupCondition::KillZoneBox,
        SetupCondition::BreakOfStructure,
        SetupCondition::OrderBlock,
        SetupCondition::DailyMovement,
        SetupCondition::AmdPattern,
        SetupCondition::EngulfingCandle,
        SetupCondition::UtAlert,
    ]);
    let result = classify(&setup).unwrap();
    assert_eq!(result.type_label(), "No Discount");
    assert_eq!(result.risk.to_string(), "0.5%");
}

#[test]
fn test_everything_checked_is_premium() {
    let result = classify(&setup_of(&SetupCondition::ALL)).unwrap();
    assert_eq!(result.category, SetupCategory::PremiumConfluence);
    assert_eq!(result.risk.to_string(), "3%");
}

#[test]
fn test_nothing_checked_has_no_result() {
    assert!(classify(&StrategySetup::new()).is_none());
}

#[test]
fn test_partial_without_bos_is_incomplete() {
    let result = classify(&setup_of(&[SetupCondition::Trend, SetupCondition::FibZone])).unwrap();
    assert_eq!(result.category, SetupCategory::Incomplete);
    assert_eq!(result.risk, RiskRecommendation::AwaitingConfirmation);
}

#[test]
fn test_sizing_follows_classification() {
    let sizer = RiskSizer::default();
    let result = sizer.classify(&setup_of(&SetupCondition::ALL)).unwrap();
    assert_eq!(sizer.risk_amount(dec!(5000), &result.risk).unwrap(), Some(dec!(150)));
}

#[test]
fn test_exhaustive_category_counts() {
    let mut counts = std::collections::BTreeMap::new();
    for mask in 1u16..512 {
        let category = classify(&setup_from_mask(mask)).unwrap().category;
        *counts.entry(format!("{:?}", category)).or_insert(0) += 1;
    }
    // BoS=1, Fib=0 → 나머지 7개 조건 자유
    assert_eq!(counts["NoDiscount"], 128);
    assert_eq!(counts["PremiumConfluence"], 1);
    assert_eq!(counts["HighProbability"], 15);
}

// ============================================================================
// 속성 테스트
// ============================================================================

proptest! {
    #[test]
    fn prop_bos_outside_fib_is_always_no_discount(mask in 0u16..512) {
        let mut setup = setup_from_mask(mask);
        setup.set(SetupCondition::BreakOfStructure, true);
        setup.set(SetupCondition::FibZone, false);
        let result = classify(&setup).unwrap();
        prop_assert_eq!(result.category, SetupCategory::NoDiscount);
    }

    #[test]
    fn prop_any_checked_always_classifies(mask in 1u16..512) {
        prop_assert!(classify(&setup_from_mask(mask)).is_some());
    }

    #[test]
    fn prop_awaiting_only_when_incomplete(mask in 1u16..512) {
        let result = classify(&setup_from_mask(mask)).unwrap();
        prop_assert_eq!(
            result.risk == RiskRecommendation::AwaitingConfirmation,
            result.category == SetupCategory::Incomplete
        );
    }

    #[test]
    fn prop_incomplete_never_has_bos(mask in 1u16..512) {
        let setup = setup_from_mask(mask);
        let result = classify(&setup).unwrap();
        if result.category == SetupCategory::Incomplete {
            prop_assert!(!setup.break_of_structure);
        }
    }
}
