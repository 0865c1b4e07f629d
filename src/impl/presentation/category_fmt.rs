use crate::entities::{CurrencyCode, ExpenseCategory, Insight, RecurrenceUnit, RolloverStatus};

use super::utils::format_amount;

impl ExpenseCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Symbol name used by the app's icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "fork.knife",
            ExpenseCategory::Transportation => "car.fill",
            ExpenseCategory::Entertainment => "tv.fill",
            ExpenseCategory::Shopping => "bag.fill",
            ExpenseCategory::Utilities => "bolt.fill",
            ExpenseCategory::Healthcare => "heart.fill",
            ExpenseCategory::Education => "book.fill",
            ExpenseCategory::Travel => "airplane",
            ExpenseCategory::Other => "ellipsis.circle.fill",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "orange",
            ExpenseCategory::Transportation => "blue",
            ExpenseCategory::Entertainment => "purple",
            ExpenseCategory::Shopping => "pink",
            ExpenseCategory::Utilities => "yellow",
            ExpenseCategory::Healthcare => "red",
            ExpenseCategory::Education => "green",
            ExpenseCategory::Travel => "cyan",
            ExpenseCategory::Other => "gray",
        }
    }
}

impl RecurrenceUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecurrenceUnit::Weekly => "Weekly",
            RecurrenceUnit::Biweekly => "Every 2 weeks",
            RecurrenceUnit::Monthly => "Monthly",
            RecurrenceUnit::Yearly => "Yearly",
        }
    }
}

impl RolloverStatus {
    pub fn describe(&self) -> &'static str {
        match self {
            RolloverStatus::Positive => "Unused budget carried over from last month.",
            RolloverStatus::Negative => "Last month's overspending reduces this month's budget.",
            RolloverStatus::None => "No rollover this month.",
        }
    }
}

impl Insight {
    pub fn describe(&self, currency: CurrencyCode) -> String {
        match self {
            Insight::TopCategory {
                category,
                percentage,
            } => format!(
                "{} is your top spending category at {}% of the total.",
                category.display_name(),
                percentage
            ),
            Insight::OverBudget => "You have exceeded your monthly budget.".to_string(),
            Insight::NearBudget { percentage } => {
                format!("You have used {}% of your monthly budget.", percentage)
            }
            Insight::GoodProgress => {
                "Great job! You are well within your budget this month.".to_string()
            }
            Insight::SpendingUp { percentage } => {
                format!("Spending is up {}% compared to the previous month.", percentage)
            }
            Insight::SpendingDown { percentage } => {
                format!("Spending is down {}% compared to the previous month.", percentage)
            }
            Insight::Saved { amount } => format!(
                "You saved {} in this period.",
                format_amount(*amount, currency)
            ),
        }
    }
}
