//! 거래 방향 (매수/매도).

use serde::{Deserialize, Serialize};

/// 거래 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// 매수
    #[serde(alias = "Buy", alias = "buy")]
    Buy,
    /// 매도
    #[serde(alias = "Sell", alias = "sell")]
    Sell,
}

impl Direction {
    /// 반대 방향을 반환합니다.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }

    /// 체크리스트 라벨에서 이 방향을 나타내는 표식.
    ///
    /// 대소문자를 구분합니다. "Buy"나 "buyer"는 방향 표식이 아닙니다.
    pub fn marker(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" | "long" => Ok(Direction::Buy),
            "sell" | "short" => Ok(Direction::Sell),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}
