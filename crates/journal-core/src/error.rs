//! 저널 시스템의 에러 타입.
//!
//! 체크리스트 평가 자체는 실패하지 않습니다. 여기의 에러는 설정, 직렬화,
//! 엔트리 조회 등 평가 경로 바깥에서 발생합니다.

use thiserror::Error;

/// 핵심 저널 에러.
#[derive(Debug, Error)]
pub enum JournalError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력 (예: 금액 계산 오버플로)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),
}

/// 저널 작업을 위한 Result 타입.
pub type JournalResult<T> = Result<T, JournalError>;

impl JournalError {
    /// 호출자 설정 문제로 인한 에러인지 확인합니다.
    pub fn is_configuration(&self) -> bool {
        matches!(self, JournalError::Config(_))
    }
}

/// 설정 검증 오류.
///
/// 평가기, 리스크 정책, 통화 환산기를 생성할 때 반환됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl From<ConfigValidationError> for JournalError {
    fn from(err: ConfigValidationError) -> Self {
        JournalError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}
