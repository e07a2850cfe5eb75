//! 체크리스트 항목의 극성 태그.

use serde::{Deserialize, Serialize};

/// 감정 체크리스트 항목의 좋음/나쁨 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// 좋은 감정 지능 (계획 준수, 침착함 등)
    Good,
    /// 나쁜 감정 지능 (FOMO, 복수 매매 등)
    Bad,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Good => write!(f, "good"),
            Polarity::Bad => write!(f, "bad"),
        }
    }
}
