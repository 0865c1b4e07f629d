use crate::{
    domain::{logic::utils::contains_ignore_case, usecases::ledger_store::LedgerStore},
    entities::{SearchResults, SearchScope},
};

impl LedgerStore {
    /// Case-insensitive substring search. Expenses match on title, category
    /// name or notes; incomes on title or notes; goals on title. An empty
    /// query matches nothing.
    pub fn search(&self, query: &str, scope: SearchScope) -> SearchResults<'_> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }
        let wants = |s: SearchScope| scope == SearchScope::All || scope == s;
        let matches_notes =
            |notes: &Option<String>| notes.as_deref().is_some_and(|n| contains_ignore_case(n, &needle));

        let mut expenses: Vec<_> = if wants(SearchScope::Expenses) {
            self.state
                .expenses
                .iter()
                .filter(|e| {
                    contains_ignore_case(&e.title, &needle)
                        || contains_ignore_case(e.category.display_name(), &needle)
                        || matches_notes(&e.notes)
                })
                .collect()
        } else {
            Vec::new()
        };
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        let mut incomes: Vec<_> = if wants(SearchScope::Income) {
            self.state
                .incomes
                .iter()
                .filter(|i| contains_ignore_case(&i.title, &needle) || matches_notes(&i.notes))
                .collect()
        } else {
            Vec::new()
        };
        incomes.sort_by(|a, b| b.date.cmp(&a.date));

        let goals = if wants(SearchScope::Goals) {
            self.state
                .savings_goals
                .iter()
                .filter(|g| contains_ignore_case(&g.title, &needle))
                .collect()
        } else {
            Vec::new()
        };

        SearchResults {
            expenses,
            incomes,
            goals,
        }
    }
}
