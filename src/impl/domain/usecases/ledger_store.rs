use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    domain::logic::{budget_impl::apply_rollover, utils::validate_amount},
    entities::{
        Budget, Contribution, CurrencyCode, Expense, ExpenseCategory, Income, LedgerState,
        PeriodKey, SavingsGoal, Subscription,
    },
    errors::{DuplicateRecord, NotRecurring, RecordNotFound},
};

/// Single owner of the ledger records. Every mutation is applied in place
/// and is visible to the next read; the store itself never touches storage.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    pub(crate) state: LedgerState,
}

impl LedgerStore {
    pub fn new(state: LedgerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn into_state(self) -> LedgerState {
        self.state
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn incomes(&self) -> &[Income] {
        &self.state.incomes
    }

    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.state.savings_goals
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.state.subscriptions
    }

    pub fn budget(&self) -> &Budget {
        &self.state.budget
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.state.expenses.iter().find(|e| e.id == id)
    }

    pub fn income(&self, id: Uuid) -> Option<&Income> {
        self.state.incomes.iter().find(|i| i.id == id)
    }

    pub fn savings_goal(&self, id: Uuid) -> Option<&SavingsGoal> {
        self.state.savings_goals.iter().find(|g| g.id == id)
    }

    pub fn subscription(&self, id: Uuid) -> Option<&Subscription> {
        self.state.subscriptions.iter().find(|s| s.id == id)
    }

    // Expenses.
    // ---

    pub fn add_expense(&mut self, expense: Expense) -> Result<Uuid, ServerError> {
        validate_amount(&expense.title, expense.amount)?;
        let id = expense.id;
        ensure_new(&self.state.expenses, |e| e.id == id, "expense", id)?;
        self.state.expenses.push(expense);
        Ok(id)
    }

    pub fn update_expense(&mut self, expense: Expense) -> Result<(), ServerError> {
        validate_amount(&expense.title, expense.amount)?;
        let slot = self.expense_mut(expense.id)?;
        *slot = expense;
        Ok(())
    }

    pub fn delete_expense(&mut self, id: Uuid) -> Result<Expense, ServerError> {
        let index = position(&self.state.expenses, |e| e.id == id, "expense", id)?;
        Ok(self.state.expenses.remove(index))
    }

    /// Records a one-time copy of a recurring expense dated `today`, then
    /// moves its next due date one recurrence past `today`.
    pub fn mark_recurring_expense_paid(
        &mut self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<Uuid, ServerError> {
        let template = self.expense(id).cloned().ok_or_else(|| RecordNotFound::new("expense", &id))?;
        let unit = template
            .recurrence
            .ok_or_else(|| NotRecurring::new(&template.title))?;
        let next_due = unit.advance(today)?;

        let mut paid = Expense::new(template.title, template.amount, template.category, today);
        paid.notes = template.notes;
        let paid_id = self.add_expense(paid)?;

        self.expense_mut(id)?.next_due_date = Some(next_due);
        debug!(%id, %next_due, "recurring expense paid");
        Ok(paid_id)
    }

    /// Moves the next due date one recurrence past `today` without recording
    /// a payment.
    pub fn skip_recurring_expense(
        &mut self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<NaiveDate, ServerError> {
        let expense = self.expense_mut(id)?;
        let unit = expense
            .recurrence
            .ok_or_else(|| NotRecurring::new(&expense.title))?;
        let next_due = unit.advance(today)?;
        expense.next_due_date = Some(next_due);
        Ok(next_due)
    }

    // Incomes.
    // ---

    pub fn add_income(&mut self, income: Income) -> Result<Uuid, ServerError> {
        validate_amount(&income.title, income.amount)?;
        let id = income.id;
        ensure_new(&self.state.incomes, |i| i.id == id, "income", id)?;
        self.state.incomes.push(income);
        Ok(id)
    }

    pub fn update_income(&mut self, income: Income) -> Result<(), ServerError> {
        validate_amount(&income.title, income.amount)?;
        let index = position(&self.state.incomes, |i| i.id == income.id, "income", income.id)?;
        self.state.incomes[index] = income;
        Ok(())
    }

    pub fn delete_income(&mut self, id: Uuid) -> Result<Income, ServerError> {
        let index = position(&self.state.incomes, |i| i.id == id, "income", id)?;
        Ok(self.state.incomes.remove(index))
    }

    // Savings goals.
    // ---

    /// Adds a goal. Any contributions it already carries are kept and its
    /// current amount is derived from them.
    pub fn add_savings_goal(&mut self, mut goal: SavingsGoal) -> Result<Uuid, ServerError> {
        validate_amount(&goal.title, goal.target_amount)?;
        for c in goal.contributions.iter() {
            validate_amount(&goal.title, c.amount)?;
        }
        let id = goal.id;
        ensure_new(&self.state.savings_goals, |g| g.id == id, "savings goal", id)?;
        goal.current_amount = goal.contributions.iter().map(|c| c.amount).sum();
        self.state.savings_goals.push(goal);
        Ok(id)
    }

    /// Updates the descriptive fields of a goal (title, target, target date,
    /// style). Contributions are managed separately and are left untouched.
    pub fn update_savings_goal(&mut self, goal: SavingsGoal) -> Result<(), ServerError> {
        validate_amount(&goal.title, goal.target_amount)?;
        let existing = self.savings_goal_mut(goal.id)?;
        existing.title = goal.title;
        existing.target_amount = goal.target_amount;
        existing.target_date = goal.target_date;
        existing.icon = goal.icon;
        existing.color = goal.color;
        Ok(())
    }

    pub fn delete_savings_goal(&mut self, id: Uuid) -> Result<SavingsGoal, ServerError> {
        let index = position(&self.state.savings_goals, |g| g.id == id, "savings goal", id)?;
        Ok(self.state.savings_goals.remove(index))
    }

    pub fn add_contribution(
        &mut self,
        goal_id: Uuid,
        amount: f64,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Result<Uuid, ServerError> {
        let goal = self.savings_goal_mut(goal_id)?;
        validate_amount(&goal.title, amount)?;
        let contribution = Contribution::new(amount, date).with_notes(notes);
        let id = contribution.id;
        goal.add_contribution(contribution);
        Ok(id)
    }

    pub fn remove_contribution(
        &mut self,
        goal_id: Uuid,
        contribution_id: Uuid,
    ) -> Result<Contribution, ServerError> {
        self.savings_goal_mut(goal_id)?
            .remove_contribution(contribution_id)
            .ok_or_else(|| RecordNotFound::new("contribution", &contribution_id))
    }

    // Subscriptions.
    // ---

    pub fn add_subscription(&mut self, subscription: Subscription) -> Result<Uuid, ServerError> {
        validate_amount(&subscription.name, subscription.amount)?;
        let id = subscription.id;
        ensure_new(&self.state.subscriptions, |s| s.id == id, "subscription", id)?;
        self.state.subscriptions.push(subscription);
        Ok(id)
    }

    pub fn update_subscription(&mut self, subscription: Subscription) -> Result<(), ServerError> {
        validate_amount(&subscription.name, subscription.amount)?;
        let slot = self.subscription_mut(subscription.id)?;
        *slot = subscription;
        Ok(())
    }

    pub fn delete_subscription(&mut self, id: Uuid) -> Result<Subscription, ServerError> {
        let index = position(&self.state.subscriptions, |s| s.id == id, "subscription", id)?;
        Ok(self.state.subscriptions.remove(index))
    }

    /// Records the payment as an expense dated `today` and moves the next
    /// billing date one recurrence past `today`. Returns the expense id.
    pub fn mark_subscription_paid(
        &mut self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<Uuid, ServerError> {
        let subscription = self
            .subscription(id)
            .cloned()
            .ok_or_else(|| RecordNotFound::new("subscription", &id))?;
        let next_billing = subscription.recurrence.advance(today)?;
        let expense = Expense::new(
            subscription.name,
            subscription.amount,
            subscription.category,
            today,
        )
        .with_notes("Subscription payment");
        let expense_id = self.add_expense(expense)?;
        self.subscription_mut(id)?.next_billing_date = next_billing;
        debug!(%id, %next_billing, "subscription paid");
        Ok(expense_id)
    }

    /// Returns the new active flag.
    pub fn toggle_subscription_active(&mut self, id: Uuid) -> Result<bool, ServerError> {
        let subscription = self.subscription_mut(id)?;
        subscription.is_active = !subscription.is_active;
        Ok(subscription.is_active)
    }

    // Budget.
    // ---

    pub fn update_budget(&mut self, budget: Budget) -> Result<(), ServerError> {
        validate_amount("monthly limit", budget.monthly_limit)?;
        for (category, limit) in budget.category_limits.iter() {
            validate_amount(&format!("{:?} limit", category), *limit)?;
        }
        self.state.budget = budget;
        Ok(())
    }

    pub fn set_monthly_limit(&mut self, limit: f64) -> Result<(), ServerError> {
        validate_amount("monthly limit", limit)?;
        self.state.budget.monthly_limit = limit;
        Ok(())
    }

    pub fn set_currency(&mut self, currency: CurrencyCode) {
        self.state.budget.currency = currency;
    }

    pub fn set_category_limit(
        &mut self,
        category: ExpenseCategory,
        limit: Option<f64>,
    ) -> Result<(), ServerError> {
        if let Some(limit) = limit {
            validate_amount(&format!("{:?} limit", category), limit)?;
        }
        self.state.budget.set_category_limit(category, limit);
        Ok(())
    }

    pub fn set_rollover_enabled(&mut self, enabled: bool) {
        self.state.budget.set_rollover_enabled(enabled);
    }

    pub fn reset_rollover(&mut self) {
        self.state.budget.reset_rollover();
    }

    /// Carries last month's unused (or overspent) budget into the month of
    /// `today`. Does nothing if rollover is disabled or was already applied
    /// this month.
    pub fn check_and_apply_rollover(&mut self, today: NaiveDate) -> bool {
        let current = PeriodKey::of(today);
        let previous_spend = self.total_spent_in(current.previous());
        apply_rollover(&mut self.state.budget, previous_spend, current)
    }

    /// Drops every record and restores the default budget.
    pub fn reset_all(&mut self) {
        info!(
            expenses = self.state.expenses.len(),
            incomes = self.state.incomes.len(),
            "resetting ledger"
        );
        self.state = LedgerState::default();
    }

    // Lookup helpers.
    // ---

    fn expense_mut(&mut self, id: Uuid) -> Result<&mut Expense, ServerError> {
        self.state
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RecordNotFound::new("expense", &id))
    }

    fn savings_goal_mut(&mut self, id: Uuid) -> Result<&mut SavingsGoal, ServerError> {
        self.state
            .savings_goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| RecordNotFound::new("savings goal", &id))
    }

    fn subscription_mut(&mut self, id: Uuid) -> Result<&mut Subscription, ServerError> {
        self.state
            .subscriptions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| RecordNotFound::new("subscription", &id))
    }
}

fn position<T>(
    items: &[T],
    predicate: impl Fn(&T) -> bool,
    kind: &str,
    id: Uuid,
) -> Result<usize, ServerError> {
    items
        .iter()
        .position(predicate)
        .ok_or_else(|| RecordNotFound::new(kind, &id))
}

fn ensure_new<T>(
    items: &[T],
    predicate: impl Fn(&T) -> bool,
    kind: &str,
    id: Uuid,
) -> Result<(), ServerError> {
    if items.iter().any(predicate) {
        return Err(DuplicateRecord::new(kind, &id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RecurrenceUnit, SearchScope};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn expense_crud() {
        let mut store = LedgerStore::default();
        let id = store
            .add_expense(Expense::new("Lunch", 12.0, ExpenseCategory::Food, d(2024, 4, 2)))
            .unwrap();

        let mut edited = store.expense(id).unwrap().clone();
        edited.amount = 14.0;
        store.update_expense(edited).unwrap();
        assert_eq!(store.total_spent_this_month(d(2024, 4, 20)), 14.0);

        let deleted = store.delete_expense(id).unwrap();
        assert_eq!(deleted.title, "Lunch");
        assert!(store.expenses().is_empty());
        assert!(store.delete_expense(id).is_err());
    }

    #[test]
    fn records_with_an_existing_id_are_rejected() {
        let mut store = LedgerStore::default();
        let lunch = Expense::new("Lunch", 12.0, ExpenseCategory::Food, d(2024, 4, 2));
        store.add_expense(lunch.clone()).unwrap();
        assert!(store.add_expense(lunch).is_err());
        assert_eq!(store.expenses().len(), 1);

        let salary = Income::new("Salary", 2500.0, d(2024, 4, 1));
        store.add_income(salary.clone()).unwrap();
        assert!(store.add_income(salary).is_err());

        let goal = SavingsGoal::new("Bike", 500.0);
        store.add_savings_goal(goal.clone()).unwrap();
        assert!(store.add_savings_goal(goal).is_err());

        let news = Subscription::new("News", 8.0, d(2024, 4, 10));
        store.add_subscription(news.clone()).unwrap();
        assert!(store.add_subscription(news).is_err());

        assert_eq!(store.incomes().len(), 1);
        assert_eq!(store.savings_goals().len(), 1);
        assert_eq!(store.subscriptions().len(), 1);
    }

    #[test]
    fn invalid_amounts_leave_the_store_unchanged() {
        let mut store = LedgerStore::default();
        assert!(store
            .add_expense(Expense::new("Oops", -5.0, ExpenseCategory::Other, d(2024, 4, 2)))
            .is_err());
        assert!(store.add_income(Income::new("Salary", f64::NAN, d(2024, 4, 1))).is_err());
        assert!(store.set_monthly_limit(-1.0).is_err());
        assert!(store.state().expenses.is_empty());
        assert_eq!(store.budget().monthly_limit, 1000.0);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut store = LedgerStore::default();
        let missing = Uuid::new_v4();
        assert!(store
            .update_income(Income::new("Ghost", 1.0, d(2024, 1, 1)))
            .is_err());
        assert!(store.add_contribution(missing, 10.0, d(2024, 1, 1), None).is_err());
        assert!(store.toggle_subscription_active(missing).is_err());
        assert!(store.mark_recurring_expense_paid(missing, d(2024, 1, 1)).is_err());
    }

    #[test]
    fn paying_a_recurring_expense_copies_it_and_advances_due_date() {
        let mut store = LedgerStore::default();
        let rent = Expense::new("Rent", 900.0, ExpenseCategory::Utilities, d(2024, 3, 1))
            .recurring(RecurrenceUnit::Monthly, d(2024, 4, 1));
        let rent_id = store.add_expense(rent).unwrap();

        let paid_id = store.mark_recurring_expense_paid(rent_id, d(2024, 4, 3)).unwrap();

        let paid = store.expense(paid_id).unwrap();
        assert_eq!(paid.date, d(2024, 4, 3));
        assert!(!paid.is_recurring());
        assert_eq!(store.expense(rent_id).unwrap().next_due_date, Some(d(2024, 5, 3)));
        assert_eq!(store.total_spent_this_month(d(2024, 4, 3)), 900.0);

        assert_eq!(
            store.skip_recurring_expense(rent_id, d(2024, 5, 3)).unwrap(),
            d(2024, 6, 3)
        );
        assert_eq!(store.expenses().len(), 2);
    }

    #[test]
    fn one_time_expense_cannot_be_marked_paid() {
        let mut store = LedgerStore::default();
        let id = store
            .add_expense(Expense::new("Gift", 30.0, ExpenseCategory::Shopping, d(2024, 4, 2)))
            .unwrap();
        assert!(store.mark_recurring_expense_paid(id, d(2024, 4, 3)).is_err());
        assert!(store.skip_recurring_expense(id, d(2024, 4, 3)).is_err());
    }

    #[test]
    fn recurring_expenses_due_within_window() {
        let mut store = LedgerStore::default();
        store
            .add_expense(
                Expense::new("Gym", 40.0, ExpenseCategory::Healthcare, d(2024, 3, 5))
                    .recurring(RecurrenceUnit::Monthly, d(2024, 4, 5)),
            )
            .unwrap();
        store
            .add_expense(
                Expense::new("Insurance", 600.0, ExpenseCategory::Other, d(2024, 1, 20))
                    .recurring(RecurrenceUnit::Yearly, d(2025, 1, 20)),
            )
            .unwrap();

        let upcoming = store.upcoming_recurring_expenses(d(2024, 4, 1), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "Gym");
        assert!((store.monthly_recurring_total() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn contributions_drive_goal_amounts() {
        let mut store = LedgerStore::default();
        let goal_id = store.add_savings_goal(SavingsGoal::new("Bike", 500.0)).unwrap();
        let first = store
            .add_contribution(goal_id, 200.0, d(2024, 2, 1), Some("bonus".to_string()))
            .unwrap();
        store.add_contribution(goal_id, 50.0, d(2024, 3, 1), None).unwrap();
        assert_eq!(store.total_savings(), 250.0);
        assert_eq!(store.average_active_goal_progress(), 0.5);

        let removed = store.remove_contribution(goal_id, first).unwrap();
        assert_eq!(removed.notes.as_deref(), Some("bonus"));
        assert_eq!(store.savings_goal(goal_id).unwrap().current_amount(), 50.0);
        assert!(store.remove_contribution(goal_id, first).is_err());

        let mut renamed = store.savings_goal(goal_id).unwrap().clone();
        renamed.title = "Road bike".to_string();
        renamed.current_amount = 9999.0;
        store.update_savings_goal(renamed).unwrap();
        let goal = store.savings_goal(goal_id).unwrap();
        assert_eq!(goal.title, "Road bike");
        assert_eq!(goal.current_amount(), 50.0);
    }

    #[test]
    fn subscriptions_can_be_paused() {
        let mut store = LedgerStore::default();
        let id = store
            .add_subscription(Subscription::new("News", 8.0, d(2024, 4, 10)))
            .unwrap();
        assert_eq!(store.total_monthly_subscriptions(), 8.0);
        assert!(!store.toggle_subscription_active(id).unwrap());
        assert_eq!(store.total_monthly_subscriptions(), 0.0);
        assert!(store.upcoming_subscriptions(d(2024, 4, 8), 7).is_empty());
    }

    #[test]
    fn rollover_uses_previous_month_spend() {
        let mut store = LedgerStore::default();
        store.set_rollover_enabled(true);
        store
            .add_expense(Expense::new("Trip", 1100.0, ExpenseCategory::Travel, d(2024, 1, 15)))
            .unwrap();
        assert!(store.check_and_apply_rollover(d(2024, 2, 1)));
        assert_eq!(store.effective_limit(), 900.0);
        assert!(!store.check_and_apply_rollover(d(2024, 2, 28)));
        assert!(store.check_and_apply_rollover(d(2024, 3, 1)));
        assert_eq!(store.effective_limit(), 2000.0);
    }

    #[test]
    fn search_matches_titles_categories_and_notes() {
        let mut store = LedgerStore::default();
        store
            .add_expense(
                Expense::new("Pizza night", 25.0, ExpenseCategory::Food, d(2024, 4, 1))
                    .with_notes("with Sam"),
            )
            .unwrap();
        store
            .add_expense(Expense::new("Taxi", 18.0, ExpenseCategory::Transportation, d(2024, 4, 2)))
            .unwrap();
        store.add_income(Income::new("Pizza shop refund", 5.0, d(2024, 4, 3))).unwrap();
        store.add_savings_goal(SavingsGoal::new("Pizza oven", 300.0)).unwrap();

        assert_eq!(store.search("PIZZA", SearchScope::All).len(), 3);
        assert_eq!(store.search("pizza", SearchScope::Goals).goals.len(), 1);
        assert_eq!(store.search("sam", SearchScope::Expenses).expenses.len(), 1);
        assert_eq!(store.search("transport", SearchScope::All).expenses[0].title, "Taxi");
        assert!(store.search("   ", SearchScope::All).is_empty());
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut store = LedgerStore::default();
        store
            .add_expense(Expense::new("Lunch", 12.0, ExpenseCategory::Food, d(2024, 4, 2)))
            .unwrap();
        store.set_currency(CurrencyCode::Eur);
        store.reset_all();
        assert_eq!(store.state(), &LedgerState::default());
    }
}
