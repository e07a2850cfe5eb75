//! 저널 엔트리와 인메모리 저널 북.
//!
//! 이 모듈은 다음 타입을 정의합니다:
//! - `JournalEntry` - 개별 거래 기록
//! - `Emotion`, `TradeOutcome` - 엔트리 부가 정보
//! - `JournalBook` - 엔트리, 엔트리별 AnswerMap, 아카이브 보관소
//!
//! 저장소 동기화는 호출자 몫입니다. `JournalBook`은 JSON 스냅샷만 주고받고,
//! 동시 편집은 마지막 쓰기가 이깁니다.

use super::answers::AnswerMap;
use crate::error::{JournalError, JournalResult};
use crate::types::{Direction, EntryId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// 거래 시점의 감정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Confident,
    Fearful,
    Revengeful,
    Calm,
    Anxious,
}

impl Emotion {
    /// 선택 가능한 감정 목록.
    pub const ALL: [Emotion; 5] = [
        Emotion::Confident,
        Emotion::Fearful,
        Emotion::Revengeful,
        Emotion::Calm,
        Emotion::Anxious,
    ];
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 거래 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeOutcome {
    Win,
    Loss,
    #[serde(rename = "Break-even")]
    BreakEven,
}

impl std::fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeOutcome::Win => write!(f, "Win"),
            TradeOutcome::Loss => write!(f, "Loss"),
            TradeOutcome::BreakEven => write!(f, "Break-even"),
        }
    }
}

/// 긴 날짜 표기 (예: "Monday, January 1, 2024").
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// 저널 엔트리.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// 엔트리 ID
    pub id: EntryId,
    /// 통화쌍 (예: "EUR/USD")
    pub pair: String,
    /// 매수/매도
    pub side: Direction,
    /// 거래일
    pub date: NaiveDate,
    /// 거래 시각
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// 세션 이름 (예: "New York")
    #[serde(default)]
    pub session: Option<String>,
    /// 거래 시점의 감정
    #[serde(default)]
    pub emotions: Vec<Emotion>,
    /// 거래 결과
    #[serde(default)]
    pub outcome: Option<TradeOutcome>,
    /// 메모
    #[serde(default)]
    pub notes: String,
}

impl JournalEntry {
    /// 새 엔트리를 생성합니다.
    pub fn new(pair: impl Into<String>, side: Direction, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            pair: pair.into(),
            side,
            date,
            time: None,
            session: None,
            emotions: Vec::new(),
            outcome: None,
            notes: String::new(),
        }
    }

    /// 거래 시각을 설정합니다.
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// 세션을 설정합니다.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// 감정을 토글합니다.
    pub fn toggle_emotion(&mut self, emotion: Emotion) {
        if let Some(pos) = self.emotions.iter().position(|e| *e == emotion) {
            self.emotions.remove(pos);
        } else {
            self.emotions.push(emotion);
        }
    }

    /// 거래일의 긴 날짜 표기.
    pub fn formatted_date(&self) -> String {
        long_date(self.date)
    }

    /// 감정 목록 표기. 비어 있으면 "None".
    pub fn emotions_label(&self) -> String {
        if self.emotions.is_empty() {
            "None".to_string()
        } else {
            self.emotions
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// 엔트리, 엔트리별 응답, 아카이브를 보관하는 인메모리 저널.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalBook {
    entries: Vec<JournalEntry>,
    #[serde(default)]
    archived: Vec<JournalEntry>,
    #[serde(default)]
    answers: BTreeMap<EntryId, AnswerMap>,
}

impl JournalBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 엔트리를 추가하고 ID를 반환합니다.
    pub fn add(&mut self, entry: JournalEntry) -> EntryId {
        let id = entry.id;
        debug!(entry_id = %id, pair = %entry.pair, "Journal entry added");
        self.entries.push(entry);
        id
    }

    /// 활성 엔트리 목록.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// ID로 활성 엔트리를 찾습니다.
    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 엔트리를 교체합니다. ID는 유지됩니다.
    pub fn update(&mut self, id: EntryId, mut entry: JournalEntry) -> JournalResult<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("journal entry {}", id)))?;
        entry.id = id;
        *slot = entry;
        Ok(())
    }

    /// 엔트리와 그 응답을 삭제합니다.
    pub fn remove(&mut self, id: EntryId) -> JournalResult<JournalEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("journal entry {}", id)))?;
        self.answers.remove(&id);
        debug!(entry_id = %id, "Journal entry removed");
        Ok(self.entries.remove(pos))
    }

    /// 엔트리를 아카이브로 옮깁니다. 응답은 유지됩니다.
    pub fn archive(&mut self, id: EntryId) -> JournalResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("journal entry {}", id)))?;
        let entry = self.entries.remove(pos);
        debug!(entry_id = %id, "Journal entry archived");
        self.archived.push(entry);
        Ok(())
    }

    /// 아카이브된 엔트리 목록.
    pub fn archived(&self) -> &[JournalEntry] {
        &self.archived
    }

    /// 아카이브된 엔트리 하나와 그 응답을 삭제합니다.
    pub fn remove_archived(&mut self, id: EntryId) -> JournalResult<JournalEntry> {
        let pos = self
            .archived
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("archived entry {}", id)))?;
        self.answers.remove(&id);
        debug!(entry_id = %id, "Archived entry removed");
        Ok(self.archived.remove(pos))
    }

    /// 아카이브를 비웁니다. 아카이브된 엔트리의 응답도 삭제됩니다.
    pub fn clear_archive(&mut self) {
        for entry in self.archived.drain(..) {
            self.answers.remove(&entry.id);
        }
    }

    /// 엔트리의 응답 (활성/아카이브 모두).
    pub fn answers(&self, id: EntryId) -> Option<&AnswerMap> {
        self.answers.get(&id)
    }

    /// 활성 엔트리의 응답을 가변으로 엽니다.
    ///
    /// 처음 열리는 엔트리는 빈 AnswerMap으로 시작합니다.
    pub fn answers_mut(&mut self, id: EntryId) -> JournalResult<&mut AnswerMap> {
        if self.get(id).is_none() {
            return Err(JournalError::NotFound(format!("journal entry {}", id)));
        }
        Ok(self.answers.entry(id).or_default())
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
