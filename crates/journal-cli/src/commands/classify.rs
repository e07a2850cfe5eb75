//! 셋업 분류 기능.

use anyhow::Result;
use journal_core::{AnswerMap, RiskSettings};
use journal_risk::{RiskPolicy, RiskSizer, SetupClassification, StrategySetup};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// 분류 설정.
#[derive(Debug, Default)]
pub struct ClassifyConfig {
    /// 플래그로 지정한 조건
    pub setup: StrategySetup,
    /// 저널 카드 AnswerMap 파일 (질문 텍스트 → 체크 여부)
    pub answers_path: Option<PathBuf>,
    /// 계좌 잔고 (지정하면 리스크 금액 계산)
    pub balance: Option<Decimal>,
    /// JSON으로 출력
    pub json: bool,
}

/// 분류 결과와 리스크 금액.
#[derive(Debug, serde::Serialize)]
pub struct ClassifyOutcome {
    pub classification: Option<SetupClassification>,
    pub risk_amount: Option<Decimal>,
}

/// 플래그와 AnswerMap의 조건을 합칩니다 (어느 쪽이든 체크되면 체크).
pub fn merge_setup(flags: StrategySetup, answers: Option<&AnswerMap>) -> StrategySetup {
    let Some(answers) = answers else {
        return flags;
    };
    let from_answers = StrategySetup::from_answers(answers);
    journal_core::SetupCondition::ALL
        .into_iter()
        .filter(|c| flags.is_checked(*c) || from_answers.is_checked(*c))
        .collect()
}

/// 셋업을 `[risk]` 설정의 정책으로 분류하고 결과를 출력합니다.
pub fn run_classify(config: ClassifyConfig, settings: &RiskSettings) -> Result<ClassifyOutcome> {
    let answers: Option<AnswerMap> = config
        .answers_path
        .as_deref()
        .map(|path| super::read_json::<AnswerMap>(path))
        .transpose()?;
    let setup = merge_setup(config.setup, answers.as_ref());

    let sizer = RiskSizer::new(RiskPolicy::from_settings(settings)?)?;
    let classification = sizer.classify(&setup);
    let risk_amount = match (&classification, config.balance) {
        (Some(c), Some(balance)) => sizer.risk_amount(balance, &c.risk)?,
        _ => None,
    };

    let outcome = ClassifyOutcome {
        classification,
        risk_amount,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome);
    }

    match &outcome.classification {
        None => println!("No conditions checked."),
        Some(c) => {
            println!("Setup Type: {}", c.type_label());
            println!("Recommended Risk: {}", c.risk);
            println!("Checked: {}/9", setup.checked_count());
            if let Some(amount) = outcome.risk_amount {
                println!("Risk Amount: {}", amount);
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::SetupCondition;

    #[test]
    fn test_merge_setup() {
        let flags: StrategySetup = [SetupCondition::Trend].into_iter().collect();
        let mut answers = AnswerMap::new();
        answers.set(SetupCondition::UtAlert.question(), true);

        let merged = merge_setup(flags, Some(&answers));
        assert!(merged.trend);
        assert!(merged.ut_alert);
        assert_eq!(merged.checked_count(), 2);

        assert_eq!(merge_setup(flags, None), flags);
    }

    #[test]
    fn test_policy_from_settings() {
        use rust_decimal_macros::dec;

        let settings = RiskSettings {
            high_probability_pct: dec!(1.5),
            ..RiskSettings::default()
        };
        let setup: StrategySetup = [
            SetupCondition::Trend,
            SetupCondition::FibZone,
            SetupCondition::KillZoneBox,
            SetupCondition::BreakOfStructure,
            SetupCondition::OrderBlock,
        ]
        .into_iter()
        .collect();
        let outcome = run_classify(
            ClassifyConfig {
                setup,
                balance: Some(dec!(10000)),
                ..ClassifyConfig::default()
            },
            &settings,
        )
        .unwrap();
        let classification = outcome.classification.unwrap();
        assert_eq!(classification.type_label(), "High Probability Setup");
        assert_eq!(classification.risk.to_string(), "1.5%");
        assert_eq!(outcome.risk_amount, Some(dec!(150)));
    }

    #[test]
    fn test_invalid_risk_settings_rejected() {
        let settings = RiskSettings {
            no_discount_pct: Decimal::ZERO,
            ..RiskSettings::default()
        };
        assert!(run_classify(ClassifyConfig::default(), &settings).is_err());
    }

    #[test]
    fn test_huge_balance_is_error() {
        // Premium Confluence 3%
        let setup: StrategySetup = SetupCondition::ALL.into_iter().collect();
        let err = run_classify(
            ClassifyConfig {
                setup,
                balance: Some(Decimal::MAX),
                ..ClassifyConfig::default()
            },
            &RiskSettings::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("overflowed"));
    }
}
