//! JournalBook 통합 테스트
//!
//! 엔트리 작성 → 체크리스트 응답 기록 → 아카이브 → 스냅샷 복원 흐름 검증.

use chrono::{NaiveDate, NaiveTime};
use journal_core::{
    technical_catalog, Direction, Emotion, JournalBook, JournalEntry, JournalError, TradeOutcome,
};

fn sample_entry(pair: &str, side: Direction) -> JournalEntry {
    let date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
    let mut entry = JournalEntry::new(pair, side, date)
        .with_time(time)
        .with_session("New York");
    entry.toggle_emotion(Emotion::Calm);
    entry
}

#[test]
fn test_entry_lifecycle_with_answers() {
    let mut book = JournalBook::new();
    let id = book.add(sample_entry("EUR/USD", Direction::Buy));
    let other = book.add(sample_entry("GBP/USD", Direction::Sell));

    // 카탈로그 라벨로 응답 기록
    let catalog = technical_catalog();
    let first_label = catalog.items().next().unwrap().label.clone();
    book.answers_mut(id).unwrap().set(first_label.clone(), true);
    assert!(book.answers(id).unwrap().is_checked(&first_label));
    assert!(book.answers(other).is_none());

    // 아카이브해도 응답 유지
    book.archive(id).unwrap();
    assert_eq!(book.entries().len(), 1);
    assert_eq!(book.archived().len(), 1);
    assert!(book.answers(id).unwrap().is_checked(&first_label));

    // 아카이브된 엔트리 응답은 수정 불가
    assert!(matches!(book.answers_mut(id), Err(JournalError::NotFound(_))));

    // 아카이브 비우면 응답도 삭제
    book.clear_archive();
    assert!(book.archived().is_empty());
    assert!(book.answers(id).is_none());
}

#[test]
fn test_remove_drops_answers() {
    let mut book = JournalBook::new();
    let id = book.add(sample_entry("XAU/USD", Direction::Sell));
    book.answers_mut(id).unwrap().set("OB Retest", true);

    let removed = book.remove(id).unwrap();
    assert_eq!(removed.pair, "XAU/USD");
    assert!(book.answers(id).is_none());
    assert!(book.remove(id).is_err());
}

#[test]
fn test_update_is_last_write_wins() {
    let mut book = JournalBook::new();
    let id = book.add(sample_entry("EUR/USD", Direction::Buy));

    let mut edited = sample_entry("EUR/USD", Direction::Buy);
    edited.outcome = Some(TradeOutcome::Win);
    edited.notes = "Clean BOS retest".to_string();
    book.update(id, edited).unwrap();

    let entry = book.get(id).unwrap();
    assert_eq!(entry.id, id);
    assert_eq!(entry.outcome, Some(TradeOutcome::Win));
    assert_eq!(entry.formatted_date(), "Tuesday, May 14, 2024");
    assert_eq!(entry.emotions_label(), "Calm");
}

#[test]
fn test_snapshot_restores_everything() {
    let mut book = JournalBook::new();
    let active = book.add(sample_entry("EUR/USD", Direction::Buy));
    let archived = book.add(sample_entry("GBP/JPY", Direction::Sell));
    book.answers_mut(active).unwrap().set("Fake breakout", true);
    book.answers_mut(archived).unwrap().set("Daily Open", true);
    book.archive(archived).unwrap();

    let json = book.to_json().unwrap();
    let restored = JournalBook::from_json(&json).unwrap();

    assert_eq!(restored.entries(), book.entries());
    assert_eq!(restored.archived(), book.archived());
    assert!(restored.answers(active).unwrap().is_checked("Fake breakout"));
    assert!(restored.answers(archived).unwrap().is_checked("Daily Open"));
}

#[test]
fn test_invalid_snapshot_is_serialization_error() {
    let err = JournalBook::from_json("{ not json").unwrap_err();
    assert!(matches!(err, JournalError::Serialization(_)));
}
