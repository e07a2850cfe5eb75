//! 셋업 분류와 리스크 관리.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 9개 셋업 조건 기반 셋업 분류
//! - 분류별 권장 리스크 비율
//! - 권장 비율을 계좌 통화 금액으로 환산
//! - 개인/펀디드 계좌 거래 원장과 차트용 시리즈
//!
//! # 예제
//!
//! ```rust,ignore
//! use journal_risk::{classify, StrategySetup};
//! use journal_core::SetupCondition;
//!
//! let mut setup = StrategySetup::new();
//! setup.set(SetupCondition::BreakOfStructure, true);
//!
//! if let Some(result) = classify(&setup) {
//!     println!("{} ({})", result.type_label(), result.risk);
//! }
//! ```

pub mod classifier;
pub mod ledger;
pub mod policy;
pub mod sizing;

// 주요 타입 재내보내기
pub use classifier::{
    classify, classify_with, RiskRecommendation, SetupCategory, SetupClassification,
    StrategySetup,
};
pub use ledger::{
    chart_label, format_date_and_day, format_usd, AccountKind, CurrencyConverter, HistogramBar,
    LedgerTotals, LinePoint, RiskLedger, RiskTrade,
};
pub use policy::RiskPolicy;
pub use sizing::RiskSizer;

pub use journal_core::{long_date, ConfigValidationError};
