//! 권장 리스크를 계좌 통화 금액으로 환산.

use crate::classifier::{classify_with, RiskRecommendation, SetupClassification, StrategySetup};
use crate::policy::RiskPolicy;
use journal_core::{ConfigValidationError, JournalError, JournalResult};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// 잔고 대비 퍼센트를 금액으로 변환. 범위를 넘으면 `None`.
/// 예시: pct_to_amount(1000, 2.5) = Some(25) (1000의 2.5%)
fn pct_to_amount(balance: Decimal, pct: Decimal) -> Option<Decimal> {
    let amount = balance.checked_mul(pct)?.checked_div(dec!(100))?;
    Some(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// 정책 기반 리스크 금액 계산기.
#[derive(Debug, Clone, Default)]
pub struct RiskSizer {
    policy: RiskPolicy,
}

impl RiskSizer {
    /// 정책을 검증하고 계산기를 생성합니다.
    pub fn new(policy: RiskPolicy) -> Result<Self, ConfigValidationError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// 셋업을 이 계산기의 정책으로 분류합니다.
    pub fn classify(&self, setup: &StrategySetup) -> Option<SetupClassification> {
        classify_with(setup, &self.policy)
    }

    /// 권장 리스크에 해당하는 금액 (소수점 2자리).
    ///
    /// 확인 대기 중이거나 잔고가 0 이하이면 `Ok(None)`입니다.
    /// 잔고가 너무 커서 계산이 넘치면 `InvalidInput`입니다.
    pub fn risk_amount(
        &self,
        balance: Decimal,
        recommendation: &RiskRecommendation,
    ) -> JournalResult<Option<Decimal>> {
        if balance <= Decimal::ZERO {
            tracing::warn!(%balance, "Non-positive balance; no risk amount");
            return Ok(None);
        }
        let Some(pct) = recommendation.percent() else {
            return Ok(None);
        };
        pct_to_amount(balance, pct).map(Some).ok_or_else(|| {
            JournalError::InvalidInput(format!("risk of {}% on balance {} overflowed", pct, balance))
        })
    }
}
