//! 감정 지능(EI) 점수.
//!
//! 두 가지 계산 방식을 모두 명명된 전략으로 제공합니다:
//! - `SignedBalance`: 좋은 항목 수 - 나쁜 항목 수 (음수 가능)
//! - `GoodRatio`: 좋은 항목 / (좋은 + 나쁜) × 100, 반올림 (항목이 없으면 0)
//!
//! 어느 쪽을 쓸지는 통합하는 애플리케이션이 설정으로 고릅니다.

use journal_core::{AnswerMap, Catalog, Polarity};
use serde::{Deserialize, Serialize};

/// 체크된 좋은/나쁜 항목 수.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalTally {
    /// 체크된 좋은 항목 수
    pub good: usize,
    /// 체크된 나쁜 항목 수
    pub bad: usize,
}

impl EmotionalTally {
    pub fn new(good: usize, bad: usize) -> Self {
        Self { good, bad }
    }

    /// 감정 카탈로그의 극성 태그를 기준으로 체크된 항목을 셉니다.
    ///
    /// 극성이 없는 항목과 카탈로그에 없는 라벨은 무시합니다.
    pub fn from_answers(answers: &AnswerMap, catalog: &Catalog) -> Self {
        catalog
            .items()
            .filter(|item| answers.is_checked(&item.label))
            .fold(Self::default(), |mut tally, item| {
                match item.polarity {
                    Some(Polarity::Good) => tally.good += 1,
                    Some(Polarity::Bad) => tally.bad += 1,
                    None => {}
                }
                tally
            })
    }

    /// 체크된 극성 항목 총합.
    pub fn total(&self) -> usize {
        self.good + self.bad
    }
}

/// 감정 점수 계산 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmotionalScoring {
    /// 좋은 항목 수 - 나쁜 항목 수
    SignedBalance,
    /// 좋은 항목 비율 (0-100)
    #[default]
    GoodRatio,
}

impl EmotionalScoring {
    /// 집계로부터 점수를 계산합니다.
    pub fn score(self, tally: EmotionalTally) -> EmotionalScore {
        match self {
            Self::SignedBalance => {
                let good = i32::try_from(tally.good).unwrap_or(i32::MAX);
                let bad = i32::try_from(tally.bad).unwrap_or(i32::MAX);
                EmotionalScore::Balance(good.saturating_sub(bad))
            }
            Self::GoodRatio => {
                let total = tally.total();
                if total == 0 {
                    return EmotionalScore::Percent(0);
                }
                // round-half-up: floor(good * 100 / total + 0.5)
                let pct = (tally.good * 200 + total) / (total * 2);
                EmotionalScore::Percent(pct.min(100) as u8)
            }
        }
    }
}

impl std::str::FromStr for EmotionalScoring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "signed-balance" | "balance" | "difference" => Ok(Self::SignedBalance),
            "good-ratio" | "ratio" | "percentage" => Ok(Self::GoodRatio),
            _ => Err(format!("Unknown emotional scoring: {}", s)),
        }
    }
}

impl std::fmt::Display for EmotionalScoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignedBalance => write!(f, "signed-balance"),
            Self::GoodRatio => write!(f, "good-ratio"),
        }
    }
}

/// 감정 점수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmotionalScore {
    /// 부호 있는 차이
    Balance(i32),
    /// 0-100 비율
    Percent(u8),
}

impl EmotionalScore {
    /// 비율 점수의 등급. 차이 점수에는 등급이 없습니다.
    pub fn band(&self) -> Option<EiBand> {
        match self {
            Self::Percent(pct) => Some(EiBand::from_percent(*pct)),
            Self::Balance(_) => None,
        }
    }
}

impl std::fmt::Display for EmotionalScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balance(v) => write!(f, "{:+}", v),
            Self::Percent(p) => write!(f, "{}%", p),
        }
    }
}

/// 비율 EI 점수 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EiBand {
    /// 70% 이상
    Strong,
    /// 40% 이상 70% 미만
    Moderate,
    /// 40% 미만
    Weak,
}

impl EiBand {
    pub fn from_percent(pct: u8) -> Self {
        if pct >= 70 {
            Self::Strong
        } else if pct >= 40 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// 컬러 코드 (UI용)
    pub fn color_code(self) -> &'static str {
        match self {
            Self::Strong => "#16a34a",   // 녹색
            Self::Moderate => "#ca8a04", // 노란색
            Self::Weak => "#dc2626",     // 빨간색
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::emotional_catalog;

    #[test]
    fn test_signed_balance() {
        let score = EmotionalScoring::SignedBalance.score(EmotionalTally::new(3, 1));
        assert_eq!(score, EmotionalScore::Balance(2));

        let score = EmotionalScoring::SignedBalance.score(EmotionalTally::new(1, 4));
        assert_eq!(score, EmotionalScore::Balance(-3));
        assert_eq!(score.to_string(), "-3");
        assert_eq!(score.band(), None);
    }

    #[test]
    fn test_good_ratio() {
        let score = EmotionalScoring::GoodRatio.score(EmotionalTally::new(3, 1));
        assert_eq!(score, EmotionalScore::Percent(75));
        assert_eq!(score.to_string(), "75%");
    }

    #[test]
    fn test_good_ratio_empty_is_zero() {
        let score = EmotionalScoring::GoodRatio.score(EmotionalTally::default());
        assert_eq!(score, EmotionalScore::Percent(0));
    }

    #[test]
    fn test_good_ratio_rounds_half_up() {
        // 1/8 = 12.5% -> 13
        assert_eq!(
            EmotionalScoring::GoodRatio.score(EmotionalTally::new(1, 7)),
            EmotionalScore::Percent(13)
        );
        // 2/3 = 66.67% -> 67
        assert_eq!(
            EmotionalScoring::GoodRatio.score(EmotionalTally::new(2, 1)),
            EmotionalScore::Percent(67)
        );
        // 1/3 = 33.33% -> 33
        assert_eq!(
            EmotionalScoring::GoodRatio.score(EmotionalTally::new(1, 2)),
            EmotionalScore::Percent(33)
        );
        assert_eq!(
            EmotionalScoring::GoodRatio.score(EmotionalTally::new(12, 0)),
            EmotionalScore::Percent(100)
        );
    }

    #[test]
    fn test_tally_from_answers() {
        let catalog = emotional_catalog();
        let mut answers = AnswerMap::new();
        answers.set("I followed my trading plan", true);
        answers.set("I reviewed if I followed my rules", true);
        answers.set("I’m entering because of FOMO", true);
        answers.set("I’m blaming the market or broker", false);
        answers.set("not in the catalog", true);

        let tally = EmotionalTally::from_answers(&answers, &catalog);
        assert_eq!(tally, EmotionalTally::new(2, 1));
    }

    #[test]
    fn test_bands() {
        assert_eq!(EiBand::from_percent(100), EiBand::Strong);
        assert_eq!(EiBand::from_percent(70), EiBand::Strong);
        assert_eq!(EiBand::from_percent(69), EiBand::Moderate);
        assert_eq!(EiBand::from_percent(40), EiBand::Moderate);
        assert_eq!(EiBand::from_percent(39), EiBand::Weak);
        assert_eq!(EmotionalScore::Percent(75).band(), Some(EiBand::Strong));
    }

    #[test]
    fn test_scoring_parse() {
        assert_eq!(
            "signed_balance".parse::<EmotionalScoring>().unwrap(),
            EmotionalScoring::SignedBalance
        );
        assert_eq!(
            "Good-Ratio".parse::<EmotionalScoring>().unwrap(),
            EmotionalScoring::GoodRatio
        );
        assert!("mean".parse::<EmotionalScoring>().is_err());
    }

    #[test]
    fn test_score_json_shape() {
        let json = serde_json::to_string(&EmotionalScore::Percent(75)).unwrap();
        assert_eq!(json, r#"{"kind":"percent","value":75}"#);
    }
}
