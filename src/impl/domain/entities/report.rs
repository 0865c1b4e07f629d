use super::{aggregates::CategoryShare, category::ExpenseCategory, period::DateRange};

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReport {
    pub range: DateRange,
    pub total_spent: f64,
    pub total_income: f64,
    pub net_balance: f64,
    pub average_daily: f64,
    pub top_categories: Vec<CategoryShare>,
    /// Percent change of the current month against the one before it.
    pub spending_change: Option<f64>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    TopCategory {
        category: ExpenseCategory,
        percentage: u32,
    },
    OverBudget,
    NearBudget {
        percentage: u32,
    },
    GoodProgress,
    SpendingUp {
        percentage: u32,
    },
    SpendingDown {
        percentage: u32,
    },
    Saved {
        amount: f64,
    },
}
