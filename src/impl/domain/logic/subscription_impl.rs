use chrono::NaiveDate;

use crate::{domain::logic::utils::days_between, entities::Subscription};

impl Subscription {
    pub fn monthly_cost(&self) -> f64 {
        self.amount * self.recurrence.monthly_multiplier()
    }

    pub fn yearly_cost(&self) -> f64 {
        self.monthly_cost() * 12.0
    }

    /// Negative once the billing date has passed.
    pub fn days_until_billing(&self, today: NaiveDate) -> i64 {
        days_between(today, self.next_billing_date)
    }

    pub fn is_due_soon(&self, today: NaiveDate, window_days: i64) -> bool {
        (0..=window_days).contains(&self.days_until_billing(today))
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_billing_date < today
    }
}
