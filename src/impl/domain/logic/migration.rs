use chrono::NaiveDate;
use tracing::warn;

use crate::entities::LedgerState;

/// Brings a freshly loaded state in line with the current invariants.
/// Returns the number of records that had to be repaired.
pub(crate) fn migrate_state(state: &mut LedgerState, today: NaiveDate) -> usize {
    let mut repaired = 0;
    for goal in state.savings_goals.iter_mut() {
        if goal.reconcile(today) {
            warn!(goal = %goal.id, title = %goal.title, "reconciled savings goal amount with contributions");
            repaired += 1;
        }
    }
    repaired
}
