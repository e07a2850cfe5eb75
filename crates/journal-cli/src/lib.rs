//! CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 내장 체크리스트 카탈로그 출력
//! - AnswerMap 파일 평가 (core step, 방향, 감정 점수)
//! - 셋업 분류와 권장 리스크 계산
//! - 리스크 거래 원장 요약

pub mod commands;

pub use commands::*;
