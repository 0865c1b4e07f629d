use serde_derive::{Deserialize, Serialize};

use super::{
    budget::Budget, budget_alert::BudgetAlertState, expense::Expense, income::Income,
    savings_goal::SavingsGoal, subscription::Subscription,
};

/// Everything that is persisted. Exchanged with the repository as a plain
/// value; the store owns it while the ledger is open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub alert_state: BudgetAlertState,
}
