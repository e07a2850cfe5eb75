//! core step 충족 개수와 준비 여부.

use journal_core::{AnswerMap, Catalog, CoreStep};
use std::collections::BTreeSet;

/// 충족된 서로 다른 core step의 개수를 셉니다.
///
/// 각 step에 대해 그 step으로 태그된 모든 섹션의 항목을 모으고, 그중 하나라도
/// 체크되어 있으면 충족으로 봅니다. 체크박스 개수가 아니라 범주 개수입니다.
/// 목록에 같은 step이 여러 번 있어도 한 번만 셉니다.
pub fn count_core_steps(answers: &AnswerMap, core_steps: &[CoreStep], catalog: &Catalog) -> usize {
    core_steps
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|step| {
            catalog
                .sections_for(**step)
                .flat_map(|section| section.items.iter())
                .any(|item| answers.is_checked(&item.label))
        })
        .count()
}

/// 충족 개수가 임계값 이상인지 확인합니다.
pub fn is_ready(count: usize, threshold: usize) -> bool {
    count >= threshold
}
