#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Reports,
    Receipts,
    CategoryBudgets,
    DataExport,
    SubscriptionTracker,
    BudgetRollover,
    UnlimitedSavingsGoals,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Reports => write!(f, "Reports"),
            Feature::Receipts => write!(f, "Receipts"),
            Feature::CategoryBudgets => write!(f, "Category budgets"),
            Feature::DataExport => write!(f, "Data export"),
            Feature::SubscriptionTracker => write!(f, "Subscription tracker"),
            Feature::BudgetRollover => write!(f, "Budget rollover"),
            Feature::UnlimitedSavingsGoals => write!(f, "Unlimited savings goals"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureAccess {
    pub premium: bool,
}
