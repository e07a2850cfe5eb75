//! # Journal Core
//!
//! 트레이딩 저널의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 저널 전반에서 사용되는 기본 타입을 제공합니다:
//! - 체크리스트 카탈로그 (기술적 셋업, AMD, 감정 체크리스트)
//! - 항목별 체크 상태 (AnswerMap)
//! - 저널 엔트리 및 아카이브
//! - 방향/극성 등 공통 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
