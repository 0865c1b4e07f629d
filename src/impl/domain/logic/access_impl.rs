use fractic_server_error::ServerError;

use crate::{
    entities::{Feature, FeatureAccess},
    errors::FeatureLocked,
};

pub const MAX_FREE_SAVINGS_GOALS: usize = 2;

impl FeatureAccess {
    pub fn new(premium: bool) -> Self {
        Self { premium }
    }

    /// Every feature is premium-only; free users get the core ledger.
    pub fn allows(&self, _feature: Feature) -> bool {
        self.premium
    }

    pub fn require(&self, feature: Feature) -> Result<(), ServerError> {
        if self.allows(feature) {
            Ok(())
        } else {
            Err(FeatureLocked::new(&feature.to_string()))
        }
    }

    pub fn can_add_more_savings_goals(&self, current_count: usize) -> bool {
        self.premium || current_count < MAX_FREE_SAVINGS_GOALS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_users_are_limited() {
        let free = FeatureAccess::new(false);
        assert!(!free.allows(Feature::Reports));
        assert!(free.require(Feature::DataExport).is_err());
        assert!(free.can_add_more_savings_goals(1));
        assert!(!free.can_add_more_savings_goals(2));
    }

    #[test]
    fn premium_unlocks_everything() {
        let premium = FeatureAccess::new(true);
        assert!(premium.allows(Feature::BudgetRollover));
        assert!(premium.require(Feature::CategoryBudgets).is_ok());
        assert!(premium.can_add_more_savings_goals(50));
    }
}
