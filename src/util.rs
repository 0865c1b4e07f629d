use std::{path::Path, str::FromStr};

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    data::{
        datasources::settings_ron_datasource::{SettingsRonDatasource as _, SettingsRonDatasourceImpl},
        models::{iso_date_model::ISODateModel, money_amount_model::MoneyAmountModel},
        repositories::ledger_repository_impl::LedgerRepositoryImpl,
    },
    domain::{
        repositories::ledger_repository::LedgerRepository,
        usecases::{
            ledger_store::LedgerStore,
            persist_usecase::{PersistUsecase as _, PersistUsecaseImpl},
        },
    },
    entities::{
        BudgetAlert, CurrencyCode, DailyAmount, DateFilter, DateRange, Expense, ExpenseCategory,
        Feature, FeatureAccess, LedgerState, MonthlyAmount, PeriodReport, SavingsGoal, Settings,
        Subscription,
    },
    errors::{FeatureLocked, RecordNotFound},
    presentation::{
        csv_exporter::CsvExporter, report_printer::ReportPrinter, widget_snapshot::WidgetSnapshot,
    },
};
use uuid::Uuid;

/// An open ledger: the in-memory store plus the repository it is saved to.
/// Every mutation made through [`PulseLedger::update`] is saved right away.
pub struct PulseLedger<
    R = LedgerRepositoryImpl, // Default.
> where
    R: LedgerRepository,
{
    store: LedgerStore,
    persist_usecase: PersistUsecaseImpl<R>,
    settings: Settings,
    access: FeatureAccess,
}

impl PulseLedger<LedgerRepositoryImpl> {
    /// Opens the ledger document named in `settings`.
    pub fn open_file(settings: Settings, today: NaiveDate) -> Result<Self, ServerError> {
        let repository = LedgerRepositoryImpl::new(settings.data_file.clone());
        Self::open(repository, settings, today)
    }
}

impl<R: LedgerRepository> PulseLedger<R> {
    /// Loads the stored state, repairs it if needed and carries last month's
    /// budget over when rollover is on. The state is saved again only if
    /// either step changed it. A ledger that has never been saved starts in
    /// the configured currency.
    ///
    /// Failing to save those changes does not fail the open; the ledger
    /// keeps them in memory and the next successful save writes them.
    pub fn open(repository: R, settings: Settings, today: NaiveDate) -> Result<Self, ServerError> {
        let persist_usecase = PersistUsecaseImpl::new(repository);
        let (state, migrated) = persist_usecase.open(today)?;
        let state = state.unwrap_or_else(|| {
            let mut state = LedgerState::default();
            state.budget.currency = settings.currency;
            state
        });

        let mut store = LedgerStore::new(state);
        let rolled_over = store.check_and_apply_rollover(today);
        let ledger = Self {
            store,
            persist_usecase,
            access: FeatureAccess::new(settings.premium),
            settings,
        };
        if (migrated || rolled_over) && ledger.save().is_err() {
            warn!(migrated, rolled_over, "opened ledger with unsaved changes");
        }
        info!(
            expenses = ledger.store.expenses().len(),
            goals = ledger.store.savings_goals().len(),
            "ledger opened"
        );
        Ok(ledger)
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn access(&self) -> FeatureAccess {
        self.access
    }

    pub fn repository(&self) -> &R {
        self.persist_usecase.repository()
    }

    pub fn currency(&self) -> CurrencyCode {
        self.store.budget().currency
    }

    /// Applies `f` to the store and saves the result. If `f` fails nothing
    /// is saved. If saving fails the change stays in memory and the
    /// persistence error is returned.
    pub fn update<T, F>(&mut self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut LedgerStore) -> Result<T, ServerError>,
    {
        let value = f(&mut self.store)?;
        self.save()?;
        Ok(value)
    }

    pub fn save(&self) -> Result<(), ServerError> {
        self.persist_usecase
            .commit(self.store.state())
            .inspect_err(|e| warn!(error = ?e, "ledger kept in memory only"))
    }

    // Gated operations.
    // ---

    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> Result<Uuid, ServerError> {
        if !self
            .access
            .can_add_more_savings_goals(self.store.savings_goals().len())
        {
            return Err(FeatureLocked::new(
                &Feature::UnlimitedSavingsGoals.to_string(),
            ));
        }
        self.update(|store| store.add_savings_goal(goal))
    }

    /// `None` removes the category's limit.
    pub fn set_category_budget(
        &mut self,
        category: ExpenseCategory,
        limit: Option<f64>,
    ) -> Result<(), ServerError> {
        self.access.require(Feature::CategoryBudgets)?;
        self.update(|store| store.set_category_limit(category, limit))
    }

    /// Returns the new rollover flag.
    pub fn toggle_rollover(&mut self) -> Result<bool, ServerError> {
        self.access.require(Feature::BudgetRollover)?;
        self.update(|store| {
            let enabled = !store.budget().rollover_enabled;
            store.set_rollover_enabled(enabled);
            Ok(enabled)
        })
    }

    pub fn mark_subscription_paid(
        &mut self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<Uuid, ServerError> {
        self.access.require(Feature::SubscriptionTracker)?;
        self.update(|store| store.mark_subscription_paid(id, today))
    }

    pub fn attach_receipt(
        &mut self,
        expense_id: Uuid,
        receipt_ref: impl Into<String>,
    ) -> Result<(), ServerError> {
        self.access.require(Feature::Receipts)?;
        let receipt_ref = receipt_ref.into();
        self.update(|store| {
            let expense = store
                .expense(expense_id)
                .cloned()
                .ok_or_else(|| RecordNotFound::new("expense", &expense_id))?;
            store.update_expense(expense.with_receipt(receipt_ref))
        })
    }

    pub fn export_csv(&self) -> Result<String, ServerError> {
        self.access.require(Feature::DataExport)?;
        CsvExporter::new().export(self.store.expenses())
    }

    pub fn report(&self, filter: DateFilter, today: NaiveDate) -> Result<PeriodReport, ServerError> {
        self.access.require(Feature::Reports)?;
        Ok(self.store.report(filter, today))
    }

    pub fn text_report(&self, filter: DateFilter, today: NaiveDate) -> Result<String, ServerError> {
        let report = self.report(filter, today)?;
        Ok(ReportPrinter::new(self.currency()).print_report(&report))
    }

    // Ungated.
    // ---

    /// Returns an alert the first time spending crosses one of the configured
    /// thresholds in the current month. The "already alerted" marker is saved.
    pub fn check_budget_alert(&mut self, today: NaiveDate) -> Result<Option<BudgetAlert>, ServerError> {
        let thresholds = self.settings.budget_alert_thresholds.clone();
        self.update(|store| Ok(store.check_budget_alert(today, &thresholds)))
    }

    /// Daily spend over the configured number of days, oldest first.
    pub fn daily_spending(&self, today: NaiveDate) -> Vec<DailyAmount> {
        self.store
            .daily_spending(self.settings.daily_series_days, today)
    }

    /// Monthly spend over the configured number of months, oldest first.
    pub fn monthly_spending(&self, today: NaiveDate) -> Vec<MonthlyAmount> {
        self.store
            .monthly_spending(self.settings.monthly_series_months, today)
    }

    pub fn upcoming_subscriptions(&self, today: NaiveDate) -> Vec<&Subscription> {
        self.store
            .upcoming_subscriptions(today, self.settings.upcoming_window_days)
    }

    pub fn upcoming_recurring_expenses(&self, today: NaiveDate) -> Vec<&Expense> {
        let window = self.settings.upcoming_window_days.max(0) as u64;
        self.store.upcoming_recurring_expenses(today, window)
    }

    pub fn widget_snapshot(&self, today: NaiveDate) -> WidgetSnapshot {
        WidgetSnapshot::build(&self.store, today, self.settings.upcoming_window_days)
    }
}

// Input helpers.
// ---

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ServerError> {
    SettingsRonDatasourceImpl::new().from_file(path)
}

pub fn parse_settings(s: &str) -> Result<Settings, ServerError> {
    SettingsRonDatasourceImpl::new().from_string(s)
}

/// Parses a user-typed amount such as "$1,234.50" or "(12.00)".
pub fn parse_amount(s: &str) -> Result<f64, ServerError> {
    Ok(MoneyAmountModel::from_str(s)?.into())
}

/// Parses a "YYYY-MM-DD" date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ServerError> {
    Ok(ISODateModel::from_str(s)?.into())
}

pub fn custom_filter(start: &str, end: &str) -> Result<DateFilter, ServerError> {
    Ok(DateFilter::Custom(DateRange::new(
        parse_date(start)?,
        parse_date(end)?,
    )?))
}
