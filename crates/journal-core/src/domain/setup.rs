//! 전략 셋업 조건.

use serde::{Deserialize, Serialize};

/// 전략 셋업을 구성하는 9개의 명명된 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupCondition {
    /// 4H 추세가 진입 방향과 일치
    Trend,
    /// Fib 할인/프리미엄 구간 안
    FibZone,
    /// ICT Kill Zone 또는 박스 안
    KillZoneBox,
    /// 구조 돌파 (BoS)
    BreakOfStructure,
    /// 유효한 오더 블록
    OrderBlock,
    /// 일간 움직임 방향과 일치
    DailyMovement,
    /// 명확한 AMD 패턴
    AmdPattern,
    /// 장악형 캔들
    EngulfingCandle,
    /// UT Alert 신호
    UtAlert,
}

impl SetupCondition {
    /// 화면 순서대로 나열한 전체 조건.
    pub const ALL: [SetupCondition; 9] = [
        SetupCondition::Trend,
        SetupCondition::FibZone,
        SetupCondition::KillZoneBox,
        SetupCondition::BreakOfStructure,
        SetupCondition::OrderBlock,
        SetupCondition::DailyMovement,
        SetupCondition::AmdPattern,
        SetupCondition::EngulfingCandle,
        SetupCondition::UtAlert,
    ];

    /// 체크리스트에 표시되는 질문.
    pub fn question(self) -> &'static str {
        match self {
            Self::Trend => "Is the 4H trend in your direction?",
            Self::FibZone => "Are you in the Fib Discount/Premium Zone?",
            Self::KillZoneBox => "Is the price within the ICT Kill Zone or Box?",
            Self::BreakOfStructure => "Is there a Break of Structure (BoS)?",
            Self::OrderBlock => "Do you see a valid Order Block?",
            Self::DailyMovement => "Does it align with the Daily Movement direction?",
            Self::AmdPattern => {
                "Is there a clear Accumulation-Manipulation-Distribution (AMD) pattern?"
            }
            Self::EngulfingCandle => "Do you see a Bullish/Bearish Engulfing Candle?",
            Self::UtAlert => "Is there a UT Alert signal?",
        }
    }

    /// 질문 라벨에서 조건을 찾습니다.
    pub fn from_question(question: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.question() == question)
    }
}

impl std::str::FromStr for SetupCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "trend" | "fourhourtrend" => Ok(Self::Trend),
            "fibzone" => Ok(Self::FibZone),
            "killzonebox" | "ictbox" => Ok(Self::KillZoneBox),
            "breakofstructure" | "bos" => Ok(Self::BreakOfStructure),
            "orderblock" => Ok(Self::OrderBlock),
            "dailymovement" => Ok(Self::DailyMovement),
            "amdpattern" | "amd" => Ok(Self::AmdPattern),
            "engulfingcandle" => Ok(Self::EngulfingCandle),
            "utalert" => Ok(Self::UtAlert),
            _ => Err(format!("Unknown setup condition: {}", s)),
        }
    }
}
