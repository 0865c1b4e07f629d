use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    domain::logic::utils::{clamped_ratio, days_between, whole_months_between},
    entities::{Contribution, SavingsGoal},
};

impl SavingsGoal {
    pub fn progress(&self) -> f64 {
        clamped_ratio(self.current_amount, self.target_amount)
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn remaining_amount(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.target_date
            .map(|target| days_between(today, target).max(0))
    }

    /// Remaining amount spread over the whole months left until the target
    /// date (at least one).
    pub fn suggested_monthly_contribution(&self, today: NaiveDate) -> Option<f64> {
        let target = self.target_date?;
        let months = whole_months_between(today, target).max(1);
        Some(self.remaining_amount() / months as f64)
    }

    pub(crate) fn add_contribution(&mut self, contribution: Contribution) {
        self.contributions.push(contribution);
        self.recompute_current_amount();
    }

    pub(crate) fn remove_contribution(&mut self, contribution_id: Uuid) -> Option<Contribution> {
        let index = self
            .contributions
            .iter()
            .position(|c| c.id == contribution_id)?;
        let removed = self.contributions.remove(index);
        self.recompute_current_amount();
        Some(removed)
    }

    /// Makes `current_amount` agree with the contributions. A stored amount
    /// not backed by any contribution becomes an opening-balance contribution
    /// dated `opening_date`. Returns whether anything changed.
    pub(crate) fn reconcile(&mut self, opening_date: NaiveDate) -> bool {
        let stored = self.current_amount;
        let mut changed = false;
        if self.contributions.is_empty() && stored > 0.0 {
            self.contributions.push(
                Contribution::new(stored, opening_date)
                    .with_notes(Some("Opening balance".to_string())),
            );
            changed = true;
        }
        self.recompute_current_amount();
        changed || self.current_amount != stored
    }

    fn recompute_current_amount(&mut self) {
        self.current_amount = self.contributions.iter().map(|c| c.amount).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn contributions_keep_current_amount_in_sync() {
        let mut goal = SavingsGoal::new("Vacation", 1000.0);
        let first = Contribution::new(250.0, d(2024, 1, 5));
        let first_id = first.id;
        goal.add_contribution(first);
        goal.add_contribution(Contribution::new(100.0, d(2024, 2, 5)));
        assert_eq!(goal.current_amount(), 350.0);

        let removed = goal.remove_contribution(first_id).unwrap();
        assert_eq!(removed.amount, 250.0);
        assert_eq!(goal.current_amount(), 100.0);
        assert_eq!(goal.contributions().len(), 1);

        assert!(goal.remove_contribution(Uuid::new_v4()).is_none());
        assert_eq!(goal.current_amount(), 100.0);
    }

    #[test]
    fn progress_and_completion() {
        let mut goal = SavingsGoal::new("Laptop", 400.0);
        assert_eq!(goal.progress(), 0.0);
        goal.add_contribution(Contribution::new(500.0, d(2024, 1, 1)));
        assert_eq!(goal.progress(), 1.0);
        assert!(goal.is_completed());
        assert_eq!(goal.remaining_amount(), 0.0);
    }

    #[test]
    fn zero_target_has_zero_progress() {
        let goal = SavingsGoal::new("Nothing", 0.0);
        assert_eq!(goal.progress(), 0.0);
        assert!(goal.is_completed());
    }

    #[test]
    fn suggested_monthly_contribution_uses_whole_months() {
        let mut goal = SavingsGoal::new("Car", 1200.0).with_target_date(d(2024, 7, 10));
        goal.add_contribution(Contribution::new(200.0, d(2024, 1, 1)));
        // Jan 10 -> Jul 10 is six whole months.
        assert_eq!(goal.suggested_monthly_contribution(d(2024, 1, 10)), Some(1000.0 / 6.0));
        // Past target: divide by one month.
        assert_eq!(goal.suggested_monthly_contribution(d(2024, 8, 1)), Some(1000.0));
        assert_eq!(goal.days_remaining(d(2024, 7, 1)), Some(9));
        assert_eq!(goal.days_remaining(d(2024, 8, 1)), Some(0));
        assert_eq!(SavingsGoal::new("Open", 10.0).days_remaining(d(2024, 8, 1)), None);
    }

    #[test]
    fn reconcile_turns_unbacked_amount_into_opening_contribution() {
        let mut goal = SavingsGoal::new("Legacy", 1000.0);
        goal.current_amount = 300.0;
        assert!(goal.reconcile(d(2024, 5, 1)));
        assert_eq!(goal.current_amount(), 300.0);
        assert_eq!(goal.contributions().len(), 1);
        assert_eq!(goal.contributions()[0].date, d(2024, 5, 1));
    }

    #[test]
    fn reconcile_recomputes_drifted_amount() {
        let mut goal = SavingsGoal::new("Drifted", 1000.0);
        goal.add_contribution(Contribution::new(50.0, d(2024, 1, 1)));
        goal.current_amount = 75.0;
        assert!(goal.reconcile(d(2024, 5, 1)));
        assert_eq!(goal.current_amount(), 50.0);
        assert!(!goal.reconcile(d(2024, 5, 1)));
    }
}
