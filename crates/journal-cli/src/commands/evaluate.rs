//! AnswerMap 평가 기능.

use anyhow::{Context, Result};
use journal_checklist::{
    ChecklistProgress, EmotionalScoring, EvaluationResult, EvaluatorConfig, ScoreEvaluator,
};
use journal_core::{technical_catalog, AnswerMap, EvaluationSettings};
use std::path::PathBuf;
use tracing::info;

/// 평가 설정.
#[derive(Debug)]
pub struct EvaluateConfig {
    /// AnswerMap JSON 파일 경로 (라벨 → 체크 여부)
    pub answers_path: PathBuf,
    /// 준비 임계값 재정의
    pub min_core_steps: Option<usize>,
    /// 감정 점수 방식 재정의
    pub scoring: Option<String>,
    /// JSON으로 출력
    pub json: bool,
}

/// 설정 파일 값에 CLI 재정의를 적용해 평가기 설정을 만듭니다.
pub fn build_evaluator_config(
    settings: &EvaluationSettings,
    min_core_steps: Option<usize>,
    scoring: Option<&str>,
) -> Result<EvaluatorConfig> {
    let mut config = EvaluatorConfig::from_settings(settings)
        .context("Invalid [evaluation] settings")?;

    if let Some(min) = min_core_steps {
        config = config.with_min_core_steps(min);
    }
    if let Some(scoring) = scoring {
        let scoring = scoring
            .parse::<EmotionalScoring>()
            .map_err(|e| anyhow::anyhow!(e))?;
        config = config.with_emotional_scoring(scoring);
    }

    Ok(config)
}

/// 평가 결과를 사람이 읽을 수 있는 형태로 렌더링합니다.
pub fn render_evaluation(result: &EvaluationResult, progress: &ChecklistProgress) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Core steps: {}/{} required ({})\n",
        result.completed_core_steps,
        result.required_core_steps,
        if result.is_ready { "ready" } else { "not ready" }
    ));
    out.push_str(&format!("Technical checklist: {}\n", progress));
    out.push_str(&format!(
        "Direction: {} {}\n",
        result.direction.icon(),
        result.direction.description()
    ));

    match result.emotional_score.band() {
        Some(band) => out.push_str(&format!(
            "Emotional score: {} ({:?})\n",
            result.emotional_score, band
        )),
        None => out.push_str(&format!("Emotional score: {}\n", result.emotional_score)),
    }

    out
}

/// AnswerMap 파일을 평가하고 결과를 출력합니다.
pub fn run_evaluate(config: EvaluateConfig, settings: &EvaluationSettings) -> Result<EvaluationResult> {
    let evaluator_config =
        build_evaluator_config(settings, config.min_core_steps, config.scoring.as_deref())?;
    let evaluator = ScoreEvaluator::with_builtin_catalogs(evaluator_config)?;

    let answers: AnswerMap = super::read_json(&config.answers_path)?;
    info!(
        path = %config.answers_path.display(),
        checked = answers.checked_count(),
        "Answers loaded"
    );

    let result = evaluator.evaluate(&answers);
    let progress = ChecklistProgress::measure(&answers, &technical_catalog());

    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_evaluation(&result, &progress));
    }

    Ok(result)
}
