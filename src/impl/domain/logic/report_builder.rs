use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::{
        logic::{
            aggregation::{period_total, top_categories},
            budget_impl::next_budget_alert,
        },
        usecases::ledger_store::LedgerStore,
    },
    entities::{BudgetAlert, CategoryShare, DateFilter, Insight, PeriodKey, PeriodReport},
};

const NEAR_BUDGET_PROGRESS: f64 = 0.8;
const GOOD_PROGRESS: f64 = 0.5;
const NOTABLE_CHANGE_PERCENT: f64 = 20.0;

impl LedgerStore {
    /// Totals, category breakdown and insights for the expenses and incomes
    /// within `filter`.
    pub fn report(&self, filter: DateFilter, today: NaiveDate) -> PeriodReport {
        let range = filter.resolve(today);
        let total_spent = period_total(&self.state.expenses, &range);
        let total_income = period_total(&self.state.incomes, &range);
        let net_balance = total_income - total_spent;

        // Days elapsed so far, for ranges reaching into the future.
        let elapsed_end = std::cmp::min(range.end, today);
        let elapsed_days = ((elapsed_end - range.start).num_days() + 1).max(1);
        let average_daily = total_spent / elapsed_days as f64;

        let top_categories = top_categories(&self.state.expenses, &range);
        let spending_change = self.spending_change(PeriodKey::of(range.end));
        let insights = build_insights(
            &top_categories,
            self.budget_progress(today),
            total_spent,
            spending_change,
            net_balance,
        );

        PeriodReport {
            range,
            total_spent,
            total_income,
            net_balance,
            average_daily,
            top_categories,
            spending_change,
            insights,
        }
    }

    /// Percent change of spending in `period` against the month before.
    /// `None` when nothing was spent the month before.
    pub fn spending_change(&self, period: PeriodKey) -> Option<f64> {
        let current = self.total_spent_in(period);
        let previous = self.total_spent_in(period.previous());
        if previous <= 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }

    /// Returns the budget alert due for this month's spending, if any, and
    /// remembers it so it is raised only once per month.
    pub fn check_budget_alert(&mut self, today: NaiveDate, thresholds: &[u32]) -> Option<BudgetAlert> {
        let percentage_used = (self.budget_progress(today) * 100.0).floor() as u32;
        let remaining = self.remaining_budget(today);
        let threshold = next_budget_alert(
            &mut self.state.alert_state,
            PeriodKey::of(today),
            percentage_used,
            thresholds,
        )?;
        debug!(threshold, remaining, "budget alert due");
        Some(BudgetAlert {
            threshold,
            percentage_used,
            remaining,
        })
    }
}

fn build_insights(
    top_categories: &[CategoryShare],
    budget_progress: f64,
    total_spent: f64,
    spending_change: Option<f64>,
    net_balance: f64,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(top) = top_categories.first() {
        insights.push(Insight::TopCategory {
            category: top.category,
            percentage: top.percentage as u32,
        });
    }

    if budget_progress >= 1.0 {
        insights.push(Insight::OverBudget);
    } else if budget_progress >= NEAR_BUDGET_PROGRESS {
        insights.push(Insight::NearBudget {
            percentage: (budget_progress * 100.0) as u32,
        });
    } else if budget_progress < GOOD_PROGRESS && total_spent > 0.0 {
        insights.push(Insight::GoodProgress);
    }

    match spending_change {
        Some(change) if change > NOTABLE_CHANGE_PERCENT => insights.push(Insight::SpendingUp {
            percentage: change as u32,
        }),
        Some(change) if change < -NOTABLE_CHANGE_PERCENT => insights.push(Insight::SpendingDown {
            percentage: change.abs() as u32,
        }),
        _ => {}
    }

    if net_balance > 0.0 {
        insights.push(Insight::Saved {
            amount: net_balance,
        });
    }

    insights
}
