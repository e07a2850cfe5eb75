//! 셋업 분류별 권장 리스크 정책.
//!
//! 분류 규칙 자체는 고정이고, 각 분류에 붙는 리스크 비율만 `[risk]` 설정으로
//! 바꿀 수 있습니다.

use journal_core::{ConfigValidationError, RiskSettings};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// 분류별 권장 리스크 비율 (계좌 잔고 대비 %).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Fib 구간 밖 BoS 진입 (기본값: 0.5%)
    pub no_discount_pct: Decimal,
    /// 기본 + 프리미엄 조건 모두 충족 (기본값: 3%)
    pub premium_confluence_pct: Decimal,
    /// 기본 조건 충족 (기본값: 2%)
    pub high_probability_pct: Decimal,
    /// 기본 조건 없이 BoS만 있는 진입 (기본값: 0.5%)
    pub early_counter_trend_pct: Decimal,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            no_discount_pct: dec!(0.5),
            premium_confluence_pct: dec!(3),
            high_probability_pct: dec!(2),
            early_counter_trend_pct: dec!(0.5),
        }
    }
}

impl RiskPolicy {
    /// 기본값으로 새 정책을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 애플리케이션 설정의 `[risk]` 섹션에서 생성하고 검증합니다.
    pub fn from_settings(settings: &RiskSettings) -> Result<Self, ConfigValidationError> {
        let policy = Self {
            no_discount_pct: settings.no_discount_pct,
            premium_confluence_pct: settings.premium_confluence_pct,
            high_probability_pct: settings.high_probability_pct,
            early_counter_trend_pct: settings.early_counter_trend_pct,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// 설정 값을 검증합니다.
    ///
    /// 모든 비율은 0 초과 100 이하여야 합니다.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let fields = [
            ("no_discount_pct", self.no_discount_pct),
            ("premium_confluence_pct", self.premium_confluence_pct),
            ("high_probability_pct", self.high_probability_pct),
            ("early_counter_trend_pct", self.early_counter_trend_pct),
        ];

        for (name, pct) in fields {
            if pct <= Decimal::ZERO || pct > dec!(100) {
                return Err(ConfigValidationError::InvalidValue(format!(
                    "{} must be between 0 and 100",
                    name
                )));
            }
        }

        Ok(())
    }
}
