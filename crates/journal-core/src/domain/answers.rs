//! 엔트리별 체크리스트 응답 상태.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// 체크리스트 항목 라벨 → 체크 여부 매핑.
///
/// 저널 엔트리 하나에 속하며 엔트리 간에 공유되지 않습니다.
/// 존재하지 않는 키는 `false`로 취급합니다. JSON에서 읽을 때 값이
/// `true`가 아닌 항목(`null`, 숫자, 문자열 등)도 `false`입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, bool>);

/// 저장된 값 하나. bool이 아니면 내용은 버립니다.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAnswer {
    Flag(bool),
    Malformed(IgnoredAny),
}

impl StoredAnswer {
    fn is_checked(&self) -> bool {
        matches!(self, StoredAnswer::Flag(true))
    }
}

impl<'de> Deserialize<'de> for AnswerMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = BTreeMap::<String, StoredAnswer>::deserialize(deserializer)?;
        Ok(Self(
            stored
                .into_iter()
                .map(|(label, value)| (label, value.is_checked()))
                .collect(),
        ))
    }
}

impl AnswerMap {
    /// 빈 응답 맵을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목이 체크되었는지 확인합니다.
    pub fn is_checked(&self, label: &str) -> bool {
        self.0.get(label).copied().unwrap_or(false)
    }

    /// 항목의 체크 상태를 설정합니다.
    pub fn set(&mut self, label: impl Into<String>, checked: bool) {
        self.0.insert(label.into(), checked);
    }

    /// 항목을 토글하고 새 상태를 반환합니다.
    pub fn toggle(&mut self, label: &str) -> bool {
        let next = !self.is_checked(label);
        self.0.insert(label.to_string(), next);
        next
    }

    /// 체크된 라벨들을 반환합니다.
    pub fn checked_labels(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(label, _)| label.as_str())
    }

    /// 체크된 항목 수.
    pub fn checked_count(&self) -> usize {
        self.0.values().filter(|checked| **checked).count()
    }

    /// 모든 응답을 지웁니다.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 기록된 모든 (라벨, 체크 여부) 쌍.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &bool)> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absent_key_is_unchecked() {
        let answers = AnswerMap::new();
        assert!(!answers.is_checked("OB Retest"));
        assert_eq!(answers.checked_count(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut answers = AnswerMap::new();
        assert!(answers.toggle("OB Retest"));
        assert!(answers.is_checked("OB Retest"));
        assert!(!answers.toggle("OB Retest"));
        assert!(!answers.is_checked("OB Retest"));
        // 토글 해제된 키도 false로 남아 있음
        assert!(!answers.is_empty());
    }

    #[test]
    fn test_checked_labels() {
        let answers: AnswerMap = [("A", true), ("B", false), ("C", true)]
            .into_iter()
            .collect();
        let labels: Vec<_> = answers.checked_labels().collect();
        assert_eq!(labels, vec!["A", "C"]);
        assert_eq!(answers.checked_count(), 2);
    }

    #[test]
    fn test_json_shape() {
        let mut answers = AnswerMap::new();
        answers.set("FVG confluence", true);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"FVG confluence":true}"#);
    }

    #[test]
    fn test_malformed_values_read_as_unchecked() {
        let json = r#"{
            "OB Retest": true,
            "FVG confluence": null,
            "Daily Open": 1,
            "Fake breakout": "true",
            "Signs of reversal": { "checked": true },
            "Liquidity sweep": false
        }"#;
        let answers: AnswerMap = serde_json::from_str(json).unwrap();
        assert!(answers.is_checked("OB Retest"));
        assert!(!answers.is_checked("FVG confluence"));
        assert!(!answers.is_checked("Daily Open"));
        assert!(!answers.is_checked("Fake breakout"));
        assert!(!answers.is_checked("Signs of reversal"));
        assert_eq!(answers.checked_count(), 1);
        assert_eq!(answers.checked_labels().collect::<Vec<_>>(), vec!["OB Retest"]);
    }

    #[test]
    fn test_non_object_is_still_an_error() {
        assert!(serde_json::from_str::<AnswerMap>("[true]").is_err());
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores_state(
            entries in prop::collection::btree_map("[A-Za-z ]{1,10}", any::<bool>(), 0..10),
            label in "[A-Za-z ]{1,10}",
        ) {
            let mut answers: AnswerMap = entries.into_iter().collect();
            let before = answers.is_checked(&label);
            answers.toggle(&label);
            answers.toggle(&label);
            prop_assert_eq!(answers.is_checked(&label), before);
        }

        #[test]
        fn prop_checked_count_matches_labels(
            entries in prop::collection::btree_map("[a-z]{1,8}", any::<bool>(), 0..20),
        ) {
            let answers: AnswerMap = entries.into_iter().collect();
            prop_assert_eq!(answers.checked_count(), answers.checked_labels().count());
        }
    }
}
