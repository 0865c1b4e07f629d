use tracing::debug;

use crate::{
    domain::logic::utils::clamped_ratio,
    entities::{Budget, BudgetAlertState, ExpenseCategory, PeriodKey, RolloverStatus},
};

impl Budget {
    /// Monthly limit adjusted by the rollover carried from the previous
    /// period (only when rollover is enabled).
    pub fn effective_limit(&self) -> f64 {
        if self.rollover_enabled {
            self.monthly_limit + self.rollover_amount
        } else {
            self.monthly_limit
        }
    }

    pub fn category_limit(&self, category: ExpenseCategory) -> Option<f64> {
        self.category_limits.get(&category).copied()
    }

    pub fn set_category_limit(&mut self, category: ExpenseCategory, limit: Option<f64>) {
        match limit {
            Some(limit) => {
                self.category_limits.insert(category, limit);
            }
            None => {
                self.category_limits.remove(&category);
            }
        }
    }

    pub fn set_rollover_enabled(&mut self, enabled: bool) {
        self.rollover_enabled = enabled;
        if !enabled {
            self.reset_rollover();
        }
    }

    pub fn reset_rollover(&mut self) {
        self.rollover_amount = 0.0;
        self.last_rollover_period = None;
    }

    pub fn rollover_status(&self) -> RolloverStatus {
        if self.rollover_amount > 0.0 {
            RolloverStatus::Positive
        } else if self.rollover_amount < 0.0 {
            RolloverStatus::Negative
        } else {
            RolloverStatus::None
        }
    }
}

/// Share of the effective limit already spent, clamped to [0, 1].
pub fn budget_progress(spent: f64, effective_limit: f64) -> f64 {
    clamped_ratio(spent, effective_limit)
}

/// Carries `monthly_limit - previous_period_spend` into `current_period`.
///
/// Applied at most once per period: returns false (and changes nothing) when
/// rollover is disabled or `current_period` has already been applied.
pub fn apply_rollover(
    budget: &mut Budget,
    previous_period_spend: f64,
    current_period: PeriodKey,
) -> bool {
    if !budget.rollover_enabled {
        return false;
    }
    if budget.last_rollover_period == Some(current_period) {
        debug!(period = %current_period, "rollover already applied for period");
        return false;
    }
    budget.rollover_amount = budget.monthly_limit - previous_period_spend;
    budget.last_rollover_period = Some(current_period);
    debug!(
        period = %current_period,
        rollover_amount = budget.rollover_amount,
        "applied budget rollover"
    );
    true
}

/// Decides whether a budget alert is due.
///
/// Walks `thresholds` in ascending order and returns the first one that has
/// been reached but not yet raised in `period`; the state remembers it so the
/// same threshold is raised once per period. The memory resets when the
/// period changes.
pub fn next_budget_alert(
    state: &mut BudgetAlertState,
    period: PeriodKey,
    percentage_used: u32,
    thresholds: &[u32],
) -> Option<u32> {
    if state.period != Some(period) {
        state.period = Some(period);
        state.last_threshold = 0;
    }
    let mut sorted = thresholds.to_vec();
    sorted.sort_unstable();
    let threshold = sorted
        .into_iter()
        .find(|t| percentage_used >= *t && state.last_threshold < *t)?;
    state.last_threshold = threshold;
    debug!(period = %period, threshold, percentage_used, "budget alert threshold reached");
    Some(threshold)
}
