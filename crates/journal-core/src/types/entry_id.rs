//! 저널 엔트리 식별자.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 저널 엔트리 ID.
///
/// AnswerMap 하나는 정확히 하나의 EntryId에 속합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// 새 무작위 ID를 생성합니다.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 기존 UUID로부터 생성합니다.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// 내부 UUID를 반환합니다.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn test_parse_round_trip() {
        let id = EntryId::new();
        let parsed: EntryId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<EntryId>().is_err());
    }
}
