//! 방향 판정.

use journal_core::{AnswerMap, ChecklistItem, Direction};
use serde::{Deserialize, Serialize};

/// 체크리스트 기반 방향 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionVerdict {
    /// 매수 셋업 가능성
    Buy,
    /// 매도 셋업 가능성
    Sell,
    /// 뚜렷한 방향 없음
    Neutral,
    /// core step 임계값 미달
    NotReady,
}

impl DirectionVerdict {
    /// 판정이 방향을 가리키면 그 방향을 반환합니다.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Buy => Some(Direction::Buy),
            Self::Sell => Some(Direction::Sell),
            Self::Neutral | Self::NotReady => None,
        }
    }

    /// 화면 표시용 문구.
    pub fn description(self) -> &'static str {
        match self {
            Self::Buy => "Likely BUY Setup",
            Self::Sell => "Likely SELL Setup",
            Self::Neutral => "No clear direction yet",
            Self::NotReady => "Not enough core steps confirmed",
        }
    }

    /// 아이콘 (UI용)
    pub fn icon(self) -> &'static str {
        match self {
            Self::Buy => "✅",
            Self::Sell => "🔻",
            Self::Neutral => "⚖️",
            Self::NotReady => "⏳",
        }
    }
}

impl std::fmt::Display for DirectionVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Neutral => "NEUTRAL",
            Self::NotReady => "NOT_READY",
        };
        write!(f, "{}", s)
    }
}

/// 체크된 BUY/SELL 편향 항목 수를 비교해 방향을 판정합니다.
///
/// 준비되지 않았으면 항목 상태와 관계없이 `NotReady`입니다.
/// 동수(0 대 0 포함)는 `Neutral`입니다. 양방향 항목은 양쪽에 모두 더해집니다.
pub fn evaluate_direction<'a>(
    answers: &AnswerMap,
    items: impl IntoIterator<Item = &'a ChecklistItem>,
    ready: bool,
) -> DirectionVerdict {
    if !ready {
        return DirectionVerdict::NotReady;
    }

    let (buy, sell) = items
        .into_iter()
        .filter(|item| answers.is_checked(&item.label))
        .fold((0usize, 0usize), |(buy, sell), item| {
            (
                buy + usize::from(item.leans(Direction::Buy)),
                sell + usize::from(item.leans(Direction::Sell)),
            )
        });

    tracing::trace!(buy, sell, "Direction signals counted");

    match buy.cmp(&sell) {
        std::cmp::Ordering::Greater => DirectionVerdict::Buy,
        std::cmp::Ordering::Less => DirectionVerdict::Sell,
        std::cmp::Ordering::Equal => DirectionVerdict::Neutral,
    }
}
