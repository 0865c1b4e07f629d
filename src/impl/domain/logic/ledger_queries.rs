use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::{
    domain::{
        logic::{
            aggregation::{
                available_periods, average_daily, daily_series, group_by_category,
                monthly_series, period_total,
            },
            budget_impl::budget_progress,
            utils::clamped_ratio,
        },
        usecases::ledger_store::LedgerStore,
    },
    entities::{
        DailyAmount, DateFilter, DateRange, Expense, ExpenseCategory, Income, MonthlyAmount,
        PeriodKey, SavingsGoal, Subscription,
    },
};

// Derived values over the store. All of them are pure reads; anything that
// depends on "now" takes `today` explicitly.

impl LedgerStore {
    // Spending.
    // ---

    pub fn total_spent_in(&self, period: PeriodKey) -> f64 {
        period_total(&self.state.expenses, &period.range())
    }

    pub fn total_spent_this_month(&self, today: NaiveDate) -> f64 {
        self.total_spent_in(PeriodKey::of(today))
    }

    pub fn total_spent(&self, filter: DateFilter, today: NaiveDate) -> f64 {
        period_total(&self.state.expenses, &filter.resolve(today))
    }

    /// Expenses within the filter, newest first.
    pub fn expenses_in(&self, filter: DateFilter, today: NaiveDate) -> Vec<&Expense> {
        newest_first(&self.state.expenses, &filter.resolve(today), |e| e.date)
    }

    pub fn expenses_for_period(&self, period: PeriodKey) -> Vec<&Expense> {
        newest_first(&self.state.expenses, &period.range(), |e| e.date)
    }

    pub fn recent_expenses(&self, count: usize) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.state.expenses.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses.truncate(count);
        expenses
    }

    pub fn expenses_by_category(&self, today: NaiveDate) -> BTreeMap<ExpenseCategory, f64> {
        group_by_category(&self.state.expenses, &PeriodKey::of(today).range())
    }

    pub fn available_periods(&self) -> Vec<PeriodKey> {
        available_periods(&self.state.expenses)
    }

    pub fn daily_spending(&self, days: u32, today: NaiveDate) -> Vec<DailyAmount> {
        daily_series(&self.state.expenses, days, today)
    }

    pub fn monthly_spending(&self, months: u32, today: NaiveDate) -> Vec<MonthlyAmount> {
        monthly_series(&self.state.expenses, months, today)
    }

    pub fn average_daily_spending(&self, days: u32, today: NaiveDate) -> f64 {
        average_daily(&self.state.expenses, days, today)
    }

    pub fn spent_on(&self, day: NaiveDate) -> f64 {
        period_total(&self.state.expenses, &DateRange::single_day(day))
    }

    // Income.
    // ---

    pub fn total_income_this_month(&self, today: NaiveDate) -> f64 {
        period_total(&self.state.incomes, &PeriodKey::of(today).range())
    }

    pub fn total_income(&self, filter: DateFilter, today: NaiveDate) -> f64 {
        period_total(&self.state.incomes, &filter.resolve(today))
    }

    pub fn incomes_in(&self, filter: DateFilter, today: NaiveDate) -> Vec<&Income> {
        newest_first(&self.state.incomes, &filter.resolve(today), |i| i.date)
    }

    pub fn recent_incomes(&self, count: usize) -> Vec<&Income> {
        let mut incomes: Vec<&Income> = self.state.incomes.iter().collect();
        incomes.sort_by(|a, b| b.date.cmp(&a.date));
        incomes.truncate(count);
        incomes
    }

    pub fn net_balance_this_month(&self, today: NaiveDate) -> f64 {
        self.total_income_this_month(today) - self.total_spent_this_month(today)
    }

    // Budget.
    // ---

    pub fn effective_limit(&self) -> f64 {
        self.state.budget.effective_limit()
    }

    /// Effective limit minus this month's spend; negative when over budget.
    pub fn remaining_budget(&self, today: NaiveDate) -> f64 {
        self.effective_limit() - self.total_spent_this_month(today)
    }

    pub fn budget_progress(&self, today: NaiveDate) -> f64 {
        budget_progress(self.total_spent_this_month(today), self.effective_limit())
    }

    pub fn is_over_budget(&self, today: NaiveDate) -> bool {
        self.total_spent_this_month(today) > self.effective_limit()
    }

    pub fn category_spent_this_month(&self, category: ExpenseCategory, today: NaiveDate) -> f64 {
        self.state
            .expenses
            .iter()
            .filter(|e| e.category == category)
            .filter(|e| PeriodKey::of(e.date) == PeriodKey::of(today))
            .map(|e| e.amount)
            .sum()
    }

    pub fn category_progress(&self, category: ExpenseCategory, today: NaiveDate) -> f64 {
        match self.state.budget.category_limit(category) {
            Some(limit) => clamped_ratio(self.category_spent_this_month(category, today), limit),
            None => 0.0,
        }
    }

    pub fn is_category_over_budget(&self, category: ExpenseCategory, today: NaiveDate) -> bool {
        self.state
            .budget
            .category_limit(category)
            .is_some_and(|limit| self.category_spent_this_month(category, today) > limit)
    }

    pub fn category_remaining(&self, category: ExpenseCategory, today: NaiveDate) -> Option<f64> {
        self.state
            .budget
            .category_limit(category)
            .map(|limit| limit - self.category_spent_this_month(category, today))
    }

    // Recurring expenses.
    // ---

    pub fn recurring_expenses(&self) -> Vec<&Expense> {
        self.state.expenses.iter().filter(|e| e.is_recurring()).collect()
    }

    /// Recurring expenses due within `[today, today + window_days]`, soonest
    /// first.
    pub fn upcoming_recurring_expenses(&self, today: NaiveDate, window_days: u64) -> Vec<&Expense> {
        let horizon = today.checked_add_days(Days::new(window_days)).unwrap_or(NaiveDate::MAX);
        let mut upcoming: Vec<&Expense> = self
            .state
            .expenses
            .iter()
            .filter(|e| e.is_recurring())
            .filter(|e| e.next_due_date.is_some_and(|due| today <= due && due <= horizon))
            .collect();
        upcoming.sort_by_key(|e| e.next_due_date);
        upcoming
    }

    pub fn monthly_recurring_total(&self) -> f64 {
        self.state
            .expenses
            .iter()
            .filter_map(|e| e.recurrence.map(|unit| e.amount * unit.monthly_multiplier()))
            .sum()
    }

    // Savings.
    // ---

    pub fn total_savings(&self) -> f64 {
        self.state.savings_goals.iter().map(|g| g.current_amount()).sum()
    }

    pub fn active_savings_goals(&self) -> Vec<&SavingsGoal> {
        self.state.savings_goals.iter().filter(|g| !g.is_completed()).collect()
    }

    pub fn completed_savings_goals(&self) -> Vec<&SavingsGoal> {
        self.state.savings_goals.iter().filter(|g| g.is_completed()).collect()
    }

    /// Mean progress of the goals not yet completed; 0 without any.
    pub fn average_active_goal_progress(&self) -> f64 {
        let active = self.active_savings_goals();
        if active.is_empty() {
            return 0.0;
        }
        active.iter().map(|g| g.progress()).sum::<f64>() / active.len() as f64
    }

    // Subscriptions.
    // ---

    pub fn active_subscriptions(&self) -> Vec<&Subscription> {
        self.state.subscriptions.iter().filter(|s| s.is_active).collect()
    }

    pub fn total_monthly_subscriptions(&self) -> f64 {
        self.active_subscriptions().iter().map(|s| s.monthly_cost()).sum()
    }

    pub fn total_yearly_subscriptions(&self) -> f64 {
        self.total_monthly_subscriptions() * 12.0
    }

    /// Active subscriptions billed within the window, soonest first.
    pub fn upcoming_subscriptions(&self, today: NaiveDate, window_days: i64) -> Vec<&Subscription> {
        let mut upcoming: Vec<&Subscription> = self
            .active_subscriptions()
            .into_iter()
            .filter(|s| s.is_due_soon(today, window_days))
            .collect();
        upcoming.sort_by_key(|s| s.next_billing_date);
        upcoming
    }

    pub fn overdue_subscriptions(&self, today: NaiveDate) -> Vec<&Subscription> {
        self.active_subscriptions()
            .into_iter()
            .filter(|s| s.is_overdue(today))
            .collect()
    }

    pub fn subscriptions_by_category(&self) -> BTreeMap<ExpenseCategory, f64> {
        self.active_subscriptions()
            .into_iter()
            .fold(BTreeMap::new(), |mut map, s| {
                *map.entry(s.category).or_insert(0.0) += s.monthly_cost();
                map
            })
    }
}

fn newest_first<'a, T>(
    items: &'a [T],
    range: &DateRange,
    date: impl Fn(&T) -> NaiveDate,
) -> Vec<&'a T> {
    let mut filtered: Vec<&T> = items.iter().filter(|i| range.contains(date(*i))).collect();
    filtered.sort_by(|a, b| date(*b).cmp(&date(*a)));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn store() -> LedgerStore {
        let mut store = LedgerStore::default();
        store
            .add_expense(Expense::new("Groceries", 150.0, ExpenseCategory::Food, d(2024, 4, 3)))
            .unwrap();
        store
            .add_expense(Expense::new("Takeaway", 90.0, ExpenseCategory::Food, d(2024, 4, 20)))
            .unwrap();
        store
            .add_expense(Expense::new("Old groceries", 500.0, ExpenseCategory::Food, d(2024, 3, 30)))
            .unwrap();
        store
    }

    #[test]
    fn category_without_a_limit_has_no_progress_or_remaining() {
        let store = store();
        let today = d(2024, 4, 25);
        assert_eq!(store.category_spent_this_month(ExpenseCategory::Food, today), 240.0);
        assert_eq!(store.category_progress(ExpenseCategory::Food, today), 0.0);
        assert_eq!(store.category_remaining(ExpenseCategory::Food, today), None);
        assert!(!store.is_category_over_budget(ExpenseCategory::Food, today));
    }

    #[test]
    fn category_limit_drives_progress_and_remaining() {
        let mut store = store();
        let today = d(2024, 4, 25);
        store.set_category_limit(ExpenseCategory::Food, Some(300.0)).unwrap();
        assert_eq!(store.category_progress(ExpenseCategory::Food, today), 0.8);
        assert_eq!(store.category_remaining(ExpenseCategory::Food, today), Some(60.0));
        assert!(!store.is_category_over_budget(ExpenseCategory::Food, today));

        store.set_category_limit(ExpenseCategory::Food, Some(200.0)).unwrap();
        assert_eq!(store.category_progress(ExpenseCategory::Food, today), 1.0);
        assert_eq!(store.category_remaining(ExpenseCategory::Food, today), Some(-40.0));
        assert!(store.is_category_over_budget(ExpenseCategory::Food, today));
    }

    #[test]
    fn remaining_budget_goes_negative_when_overspent() {
        let mut store = store();
        let today = d(2024, 4, 25);
        store.set_monthly_limit(200.0).unwrap();
        assert_eq!(store.remaining_budget(today), -40.0);
        assert!(store.is_over_budget(today));
        assert_eq!(store.budget_progress(today), 1.0);
    }

    #[test]
    fn filtered_lists_are_newest_first() {
        let store = store();
        let titles: Vec<&str> = store
            .expenses_in(DateFilter::Last3Months, d(2024, 4, 25))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Takeaway", "Groceries", "Old groceries"]);
        assert_eq!(store.expenses_for_period(PeriodKey::of(d(2024, 3, 1))).len(), 1);
    }
}
