//! 체크리스트 진행률.

use journal_core::{AnswerMap, Catalog};
use serde::{Deserialize, Serialize};

/// 카탈로그 항목 중 체크된 비율.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistProgress {
    /// 체크된 카탈로그 항목 수
    pub completed: usize,
    /// 카탈로그 전체 항목 수
    pub total: usize,
}

impl ChecklistProgress {
    /// 카탈로그 항목 기준으로 진행률을 계산합니다.
    ///
    /// 카탈로그에 없는 라벨은 세지 않습니다.
    pub fn measure(answers: &AnswerMap, catalog: &Catalog) -> Self {
        let completed = catalog
            .items()
            .filter(|item| answers.is_checked(&item.label))
            .count();
        Self {
            completed,
            total: catalog.item_count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// 0-100 진행률 (내림).
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total).min(100) as u8
    }
}

impl std::fmt::Display for ChecklistProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::{psychology_catalog, trade_setup_catalog, SetupCondition};

    #[test]
    fn test_trade_setup_progress() {
        let catalog = trade_setup_catalog();
        let mut answers = AnswerMap::new();
        answers.set(SetupCondition::Trend.question(), true);
        answers.set(SetupCondition::FibZone.question(), true);
        answers.set(SetupCondition::UtAlert.question(), false);
        answers.set("stray key", true);

        let progress = ChecklistProgress::measure(&answers, &catalog);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 9);
        assert_eq!(progress.to_string(), "2/9 completed");
        assert_eq!(progress.percent(), 22);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_complete() {
        let catalog = psychology_catalog();
        let answers: AnswerMap = catalog
            .items()
            .map(|item| (item.label.clone(), true))
            .collect();
        let progress = ChecklistProgress::measure(&answers, &catalog);
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_empty_catalog() {
        let progress = ChecklistProgress::measure(&AnswerMap::new(), &Catalog::merged(&[]));
        assert_eq!(progress.percent(), 0);
        assert!(!progress.is_complete());
    }
}
