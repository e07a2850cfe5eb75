//! 평가기 설정.
//!
//! core step 목록, 준비 임계값, 감정 점수 방식을 하나의 설정으로 묶습니다.
//! 화면 변형마다 달랐던 상수들은 여기의 프리셋으로 표현합니다.

use crate::emotional::EmotionalScoring;
use journal_core::{ConfigValidationError, CoreStep, EvaluationSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 기본 준비 임계값 (8개 core step 중 6개).
pub const DEFAULT_MIN_CORE_STEPS: usize = 6;

/// 체크리스트 평가 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// 방향 판정 전에 충족되어야 하는 최소 core step 수 (기본값: 6)
    #[serde(default = "default_min_core_steps")]
    pub min_core_steps: usize,

    /// 평가 대상 core step 목록 (기본값: 전체 8개)
    #[serde(default = "default_core_steps")]
    pub core_steps: Vec<CoreStep>,

    /// 감정 점수 계산 방식 (기본값: good-ratio)
    #[serde(default)]
    pub emotional_scoring: EmotionalScoring,
}

fn default_min_core_steps() -> usize {
    DEFAULT_MIN_CORE_STEPS
}

fn default_core_steps() -> Vec<CoreStep> {
    CoreStep::ALL.to_vec()
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            min_core_steps: default_min_core_steps(),
            core_steps: default_core_steps(),
            emotional_scoring: EmotionalScoring::default(),
        }
    }
}

impl EvaluatorConfig {
    /// 기본값으로 새 설정을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 엄격한 설정: 8개 core step 전부 필요.
    pub fn strict() -> Self {
        Self {
            min_core_steps: CoreStep::ALL.len(),
            ..Self::default()
        }
    }

    /// 느슨한 설정: 절반(4개)만 충족해도 방향 판정.
    pub fn lenient() -> Self {
        Self {
            min_core_steps: 4,
            ..Self::default()
        }
    }

    /// NY 세션 단계만 평가하는 설정 (AMD 제외, 5개 중 4개).
    pub fn session_only() -> Self {
        Self {
            min_core_steps: 4,
            core_steps: CoreStep::ALL
                .into_iter()
                .filter(|s| !s.is_amd_phase())
                .collect(),
            emotional_scoring: EmotionalScoring::default(),
        }
    }

    /// 임계값을 설정합니다.
    pub fn with_min_core_steps(mut self, min_core_steps: usize) -> Self {
        self.min_core_steps = min_core_steps;
        self
    }

    /// 감정 점수 방식을 설정합니다.
    pub fn with_emotional_scoring(mut self, scoring: EmotionalScoring) -> Self {
        self.emotional_scoring = scoring;
        self
    }

    /// 애플리케이션 설정 파일의 `[evaluation]` 섹션에서 생성합니다.
    pub fn from_settings(settings: &EvaluationSettings) -> Result<Self, ConfigValidationError> {
        let emotional_scoring = settings
            .emotional_scoring
            .parse::<EmotionalScoring>()
            .map_err(ConfigValidationError::InvalidValue)?;
        let config = Self {
            min_core_steps: settings.min_core_steps,
            core_steps: default_core_steps(),
            emotional_scoring,
        };
        config.validate()?;
        Ok(config)
    }

    /// 중복 제거된 core step 수.
    pub fn distinct_core_steps(&self) -> usize {
        self.core_steps.iter().collect::<BTreeSet<_>>().len()
    }

    /// 설정 값을 검증합니다.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.core_steps.is_empty() {
            return Err(ConfigValidationError::MissingField("core_steps".into()));
        }

        if self.min_core_steps == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "min_core_steps must be at least 1".into(),
            ));
        }

        let distinct = self.distinct_core_steps();
        if self.min_core_steps > distinct {
            return Err(ConfigValidationError::InvalidValue(format!(
                "min_core_steps ({}) exceeds the number of distinct core steps ({})",
                self.min_core_steps, distinct
            )));
        }

        Ok(())
    }
}
