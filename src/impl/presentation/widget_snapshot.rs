use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde_derive::{Deserialize, Serialize};

use crate::{
    domain::{logic::aggregation::top_categories, usecases::ledger_store::LedgerStore},
    entities::PeriodKey,
    errors::SnapshotEncodingFailed,
};

const TOP_CATEGORY_COUNT: usize = 5;
const UPCOMING_SUBSCRIPTION_COUNT: usize = 3;

/// Summary values shown by the home-screen widgets. Written out as JSON for
/// the widget process to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub spent_this_month: f64,
    pub monthly_limit: f64,
    pub today_spending: f64,
    pub total_savings: f64,
    pub savings_goal_progress: f64,
    pub currency_symbol: String,
    pub category_breakdown: Vec<WidgetCategory>,
    pub upcoming_subscriptions: Vec<WidgetSubscription>,
    pub monthly_subscriptions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetCategory {
    pub name: String,
    pub amount: f64,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSubscription {
    pub name: String,
    pub amount: f64,
    pub days_until: i64,
    pub icon: String,
}

impl WidgetSnapshot {
    pub(crate) fn build(store: &LedgerStore, today: NaiveDate, upcoming_window_days: i64) -> Self {
        let month = PeriodKey::of(today).range();
        let category_breakdown = top_categories(store.expenses(), &month)
            .into_iter()
            .take(TOP_CATEGORY_COUNT)
            .map(|share| WidgetCategory {
                name: share.category.display_name().to_string(),
                amount: share.amount,
                icon: share.category.icon().to_string(),
                color: share.category.color().to_string(),
            })
            .collect();
        let upcoming_subscriptions = store
            .upcoming_subscriptions(today, upcoming_window_days)
            .into_iter()
            .take(UPCOMING_SUBSCRIPTION_COUNT)
            .map(|s| WidgetSubscription {
                name: s.name.clone(),
                amount: s.amount,
                days_until: s.days_until_billing(today),
                icon: s.category.icon().to_string(),
            })
            .collect();

        Self {
            spent_this_month: store.total_spent_this_month(today),
            monthly_limit: store.budget().monthly_limit,
            today_spending: store.spent_on(today),
            total_savings: store.total_savings(),
            savings_goal_progress: store.average_active_goal_progress(),
            currency_symbol: store.budget().currency.symbol().to_string(),
            category_breakdown,
            upcoming_subscriptions,
            monthly_subscriptions: store.total_monthly_subscriptions(),
        }
    }

    pub fn to_json(&self) -> Result<String, ServerError> {
        serde_json::to_string(self).map_err(|e| SnapshotEncodingFailed::with_debug(&e))
    }
}
