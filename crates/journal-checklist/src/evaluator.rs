//! 점수 평가기.
//!
//! 설정과 카탈로그를 한 번 검증해 묶어 두고, 이후에는 AnswerMap 하나만 받아
//! `EvaluationResult`를 다시 계산합니다. 숨은 가변 상태가 없으므로 같은
//! 입력에 대해 항상 같은 결과를 냅니다.

use crate::config::EvaluatorConfig;
use crate::direction::{evaluate_direction, DirectionVerdict};
use crate::ei_journal::EmotionalEntry;
use crate::emotional::{EmotionalScore, EmotionalTally};
use crate::scoring::{count_core_steps, is_ready};
use journal_core::{
    core_step_catalog, emotional_catalog, AnswerMap, Catalog, ConfigValidationError,
    TradeOutcome,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 평가 결과. 저장하지 않고 필요할 때마다 다시 계산합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// 충족된 서로 다른 core step 수
    pub completed_core_steps: usize,
    /// 준비 임계값
    pub required_core_steps: usize,
    /// completed_core_steps >= required_core_steps
    pub is_ready: bool,
    /// 방향 판정
    pub direction: DirectionVerdict,
    /// 감정 점수
    pub emotional_score: EmotionalScore,
}

/// 체크리스트 점수 평가기.
#[derive(Debug, Clone)]
pub struct ScoreEvaluator {
    config: EvaluatorConfig,
    catalog: Catalog,
    emotional_catalog: Catalog,
}

impl ScoreEvaluator {
    /// 설정을 검증하고 평가기를 생성합니다.
    ///
    /// 설정 오류는 여기서 거부됩니다. 설정된 core step이 카탈로그에
    /// 없으면 경고만 남기고 그 step은 항상 미충족으로 셉니다.
    pub fn new(
        config: EvaluatorConfig,
        catalog: Catalog,
        emotional_catalog: Catalog,
    ) -> Result<Self, ConfigValidationError> {
        config.validate()?;

        for step in &config.core_steps {
            if catalog.sections_for(*step).next().is_none() {
                warn!(step = %step, "Core step has no section in the catalog");
            }
        }

        let duplicates = catalog.duplicate_labels();
        if !duplicates.is_empty() {
            warn!(?duplicates, "Catalog has duplicate labels; answers are shared");
        }

        Ok(Self {
            config,
            catalog,
            emotional_catalog,
        })
    }

    /// 내장 카탈로그(NY 세션 + AMD, 감정)로 평가기를 생성합니다.
    pub fn with_builtin_catalogs(config: EvaluatorConfig) -> Result<Self, ConfigValidationError> {
        Self::new(config, core_step_catalog(), emotional_catalog())
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn emotional_catalog(&self) -> &Catalog {
        &self.emotional_catalog
    }

    /// 충족된 core step 수.
    pub fn completed_core_steps(&self, answers: &AnswerMap) -> usize {
        count_core_steps(answers, &self.config.core_steps, &self.catalog)
    }

    /// 감정 점수.
    pub fn emotional_score(&self, answers: &AnswerMap) -> EmotionalScore {
        let tally = EmotionalTally::from_answers(answers, &self.emotional_catalog);
        self.config.emotional_scoring.score(tally)
    }

    /// 감정 체크리스트 제출을 EI 저널 기록으로 만듭니다.
    pub fn record_emotions(
        &self,
        answers: &AnswerMap,
        outcome: Option<TradeOutcome>,
    ) -> EmotionalEntry {
        EmotionalEntry::record(
            answers,
            &self.emotional_catalog,
            outcome,
            self.config.emotional_scoring,
        )
    }

    /// AnswerMap 전체를 평가합니다.
    pub fn evaluate(&self, answers: &AnswerMap) -> EvaluationResult {
        let completed = self.completed_core_steps(answers);
        let ready = is_ready(completed, self.config.min_core_steps);
        let direction = evaluate_direction(answers, self.catalog.items(), ready);
        let emotional_score = self.emotional_score(answers);

        debug!(
            completed,
            required = self.config.min_core_steps,
            ready,
            %direction,
            %emotional_score,
            "Checklist evaluated"
        );

        EvaluationResult {
            completed_core_steps: completed,
            required_core_steps: self.config.min_core_steps,
            is_ready: ready,
            direction,
            emotional_score,
        }
    }
}
