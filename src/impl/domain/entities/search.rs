use super::{expense::Expense, income::Income, savings_goal::SavingsGoal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Expenses,
    Income,
    Goals,
}

#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub expenses: Vec<&'a Expense>,
    pub incomes: Vec<&'a Income>,
    pub goals: Vec<&'a SavingsGoal>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.incomes.is_empty() && self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len() + self.goals.len()
    }
}
