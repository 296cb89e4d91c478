use serde::{Deserialize, Serialize};

use super::categories_model::CategoryRollup;

/// Named truncation policy for summary rollup views.
///
/// Order is total descending; ties break by category name ascending, then by
/// category id ascending so the result is stable for identical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSelection {
    pub count: Option<usize>,
}

impl TopSelection {
    /// Keep only the `count` largest categories.
    pub fn top(count: usize) -> Self {
        TopSelection { count: Some(count) }
    }

    /// Sort without truncating.
    pub fn all() -> Self {
        TopSelection { count: None }
    }

    pub fn apply(&self, rollups: &mut Vec<CategoryRollup>) {
        rollups.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.category_id.cmp(&b.category_id))
        });
        if let Some(count) = self.count {
            rollups.truncate(count);
        }
    }
}
