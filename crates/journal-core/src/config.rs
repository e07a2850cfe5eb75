//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! TOML 파일을 기본으로 하고 `JOURNAL__` 접두사 환경 변수로 오버라이드합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 체크리스트 평가 설정
    #[serde(default)]
    pub evaluation: EvaluationSettings,
    /// 통화 환산 설정
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// 셋업 분류별 리스크 비율
    #[serde(default)]
    pub risk: RiskSettings,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 체크리스트 평가 설정.
///
/// 여기의 값은 문자열/정수 그대로 보관되고, 실제 검증은
/// 평가기 생성 시점(`EvaluatorConfig::validate`)에 수행됩니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationSettings {
    /// 방향 판정에 필요한 최소 core step 수
    #[serde(default = "default_min_core_steps")]
    pub min_core_steps: usize,
    /// 감정 점수 계산 방식 (signed-balance, good-ratio)
    #[serde(default = "default_emotional_scoring")]
    pub emotional_scoring: String,
}

fn default_min_core_steps() -> usize {
    6
}

fn default_emotional_scoring() -> String {
    "good-ratio".to_string()
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            min_core_steps: default_min_core_steps(),
            emotional_scoring: default_emotional_scoring(),
        }
    }
}

/// USD → 현지 통화 환산 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConfig {
    /// 현지 통화 코드
    #[serde(default = "default_local_currency")]
    pub local_currency: String,
    /// 1 USD 당 현지 통화 환율
    #[serde(default = "default_usd_rate")]
    pub usd_rate: Decimal,
}

fn default_local_currency() -> String {
    "TZS".to_string()
}

fn default_usd_rate() -> Decimal {
    Decimal::from(2500)
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            local_currency: default_local_currency(),
            usd_rate: default_usd_rate(),
        }
    }
}

/// 셋업 분류별 권장 리스크 비율 (계좌 잔고 대비 %).
///
/// 범위 검증은 `RiskPolicy::from_settings`에서 합니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RiskSettings {
    #[serde(default = "default_no_discount_pct")]
    pub no_discount_pct: Decimal,
    #[serde(default = "default_premium_confluence_pct")]
    pub premium_confluence_pct: Decimal,
    #[serde(default = "default_high_probability_pct")]
    pub high_probability_pct: Decimal,
    #[serde(default = "default_early_counter_trend_pct")]
    pub early_counter_trend_pct: Decimal,
}

fn default_no_discount_pct() -> Decimal {
    Decimal::new(5, 1)
}

fn default_premium_confluence_pct() -> Decimal {
    Decimal::from(3)
}

fn default_high_probability_pct() -> Decimal {
    Decimal::from(2)
}

fn default_early_counter_trend_pct() -> Decimal {
    Decimal::new(5, 1)
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            no_discount_pct: default_no_discount_pct(),
            premium_confluence_pct: default_premium_confluence_pct(),
            high_probability_pct: default_high_probability_pct(),
            early_counter_trend_pct: default_early_counter_trend_pct(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("JOURNAL")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.evaluation.min_core_steps, 6);
        assert_eq!(config.evaluation.emotional_scoring, "good-ratio");
        assert_eq!(config.currency.local_currency, "TZS");
        assert_eq!(config.currency.usd_rate, dec!(2500));
        assert_eq!(config.risk.no_discount_pct, dec!(0.5));
        assert_eq!(config.risk.premium_confluence_pct, dec!(3));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.evaluation.min_core_steps, 6);
    }

    #[test]
    fn test_partial_sections_deserialize() {
        let json = r#"{ "evaluation": { "min_core_steps": 4 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.evaluation.min_core_steps, 4);
        assert_eq!(config.evaluation.emotional_scoring, "good-ratio");
        assert_eq!(config.currency.usd_rate, dec!(2500));
    }

    #[test]
    fn test_partial_risk_section() {
        let json = r#"{ "risk": { "premium_confluence_pct": "2.5" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.risk.premium_confluence_pct, dec!(2.5));
        assert_eq!(config.risk.high_probability_pct, dec!(2));
    }
}
