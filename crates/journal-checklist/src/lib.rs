//! 체크리스트 점수 평가.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - core step 충족 개수 계산과 준비 여부 판정
//! - BUY/SELL 방향 판정
//! - 감정 지능(EI) 점수 (부호 있는 차이 / 좋은 항목 비율)와 EI 저널
//! - 체크리스트 진행률
//!
//! 모든 평가는 AnswerMap, 카탈로그, 설정 값에 대한 순수 함수입니다.
//!
//! # 예제
//!
//! ```rust,ignore
//! use journal_checklist::{EvaluatorConfig, ScoreEvaluator};
//!
//! let evaluator = ScoreEvaluator::with_builtin_catalogs(EvaluatorConfig::default())?;
//! let result = evaluator.evaluate(&answers);
//! if result.is_ready {
//!     println!("{}", result.direction);
//! }
//! ```

pub mod config;
pub mod direction;
pub mod ei_journal;
pub mod emotional;
pub mod evaluator;
pub mod progress;
pub mod scoring;

// 주요 타입 재내보내기
pub use config::{EvaluatorConfig, DEFAULT_MIN_CORE_STEPS};
pub use direction::{evaluate_direction, DirectionVerdict};
pub use ei_journal::{EmotionalEntry, EmotionalJournal, EmotionalStage};
pub use emotional::{EiBand, EmotionalScore, EmotionalScoring, EmotionalTally};
pub use evaluator::{EvaluationResult, ScoreEvaluator};
pub use progress::ChecklistProgress;
pub use scoring::{count_core_steps, is_ready};

pub use journal_core::ConfigValidationError;
