//! 감정 지능(EI) 저널.
//!
//! 감정 체크리스트를 제출할 때마다 단계별 선택 항목, 거래 결과, 계산된 점수를
//! 한 건으로 남깁니다. 점수는 기록 시점의 방식으로 고정되며 나중에 다시
//! 계산하지 않습니다.

use crate::emotional::{EiBand, EmotionalScore, EmotionalScoring, EmotionalTally};
use journal_core::{AnswerMap, Catalog, EntryId, JournalError, JournalResult, TradeOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 감정 체크리스트 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalStage {
    Before,
    During,
    After,
}

impl EmotionalStage {
    pub const ALL: [EmotionalStage; 3] = [Self::Before, Self::During, Self::After];

    /// 감정 카탈로그에서 이 단계에 해당하는 섹션 제목.
    pub fn section_title(self) -> &'static str {
        match self {
            Self::Before => "Before Trade",
            Self::During => "During Trade",
            Self::After => "After Trade",
        }
    }
}

/// EI 저널 한 건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalEntry {
    #[serde(default)]
    pub id: EntryId,
    /// 연결된 저널 엔트리 (`JournalBook`의 ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade: Option<EntryId>,
    #[serde(default)]
    pub before: Vec<String>,
    #[serde(default)]
    pub during: Vec<String>,
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub outcome: Option<TradeOutcome>,
    pub score: EmotionalScore,
}

impl EmotionalEntry {
    /// 체크 상태에서 단계별 선택과 점수를 뽑아 기록을 만듭니다.
    ///
    /// 선택 항목은 카탈로그 순서를 따릅니다. 카탈로그에 없는 라벨은 무시합니다.
    pub fn record(
        answers: &AnswerMap,
        catalog: &Catalog,
        outcome: Option<TradeOutcome>,
        scoring: EmotionalScoring,
    ) -> Self {
        let selections = |stage: EmotionalStage| -> Vec<String> {
            catalog
                .sections
                .iter()
                .filter(|s| s.title == stage.section_title())
                .flat_map(|s| s.items.iter())
                .filter(|item| answers.is_checked(&item.label))
                .map(|item| item.label.clone())
                .collect()
        };

        Self {
            id: EntryId::new(),
            trade: None,
            before: selections(EmotionalStage::Before),
            during: selections(EmotionalStage::During),
            after: selections(EmotionalStage::After),
            outcome,
            score: scoring.score(EmotionalTally::from_answers(answers, catalog)),
        }
    }

    /// 저널 엔트리에 연결합니다.
    pub fn for_trade(mut self, trade: EntryId) -> Self {
        self.trade = Some(trade);
        self
    }

    pub fn selections(&self, stage: EmotionalStage) -> &[String] {
        match stage {
            EmotionalStage::Before => &self.before,
            EmotionalStage::During => &self.during,
            EmotionalStage::After => &self.after,
        }
    }

    /// 점수 등급 (목록 색상 표시용). 차이 점수면 `None`.
    pub fn band(&self) -> Option<EiBand> {
        self.score.band()
    }
}

/// 제출 순서대로 쌓이는 EI 저널.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalJournal {
    entries: Vec<EmotionalEntry>,
}

impl EmotionalJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기록을 추가하고 ID를 반환합니다.
    pub fn add(&mut self, entry: EmotionalEntry) -> EntryId {
        let id = entry.id;
        debug!(entry_id = %id, score = %entry.score, "Emotional entry added");
        self.entries.push(entry);
        id
    }

    pub fn entries(&self) -> &[EmotionalEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&EmotionalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 특정 저널 엔트리에 연결된 기록들.
    pub fn for_trade(&self, trade: EntryId) -> impl Iterator<Item = &EmotionalEntry> {
        self.entries.iter().filter(move |e| e.trade == Some(trade))
    }

    pub fn remove(&mut self, id: EntryId) -> JournalResult<EmotionalEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("emotional entry {}", id)))?;
        Ok(self.entries.remove(pos))
    }

    /// JSON 스냅샷으로 직렬화합니다.
    pub fn to_json(&self) -> JournalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON 스냅샷에서 복원합니다.
    pub fn from_json(json: &str) -> JournalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
