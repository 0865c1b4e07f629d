// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod ledger_json_datasource;
        pub(crate) mod settings_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_model;
        pub(crate) mod ledger_document_model;
        pub(crate) mod money_amount_model;
        pub(crate) mod period_key_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod in_memory_ledger_repository;
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregates;
        pub(crate) mod budget;
        pub(crate) mod budget_alert;
        pub(crate) mod category;
        pub(crate) mod currency;
        pub(crate) mod expense;
        pub(crate) mod feature_access;
        pub(crate) mod income;
        pub(crate) mod ledger_state;
        pub(crate) mod period;
        pub(crate) mod records;
        pub(crate) mod recurrence;
        pub(crate) mod report;
        pub(crate) mod savings_goal;
        pub(crate) mod search;
        pub(crate) mod settings;
        pub(crate) mod subscription;
    }
    pub(crate) mod logic {
        pub(crate) mod access_impl;
        pub(crate) mod aggregation;
        pub(crate) mod budget_impl;
        pub(crate) mod ledger_queries;
        pub(crate) mod migration;
        pub(crate) mod recurrence_impl;
        pub(crate) mod report_builder;
        pub(crate) mod savings_impl;
        pub(crate) mod search_impl;
        pub(crate) mod subscription_impl;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod ledger_store;
        pub(crate) mod persist_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod category_fmt;
    pub(crate) mod csv_exporter;
    pub(crate) mod report_printer;
    pub(crate) mod utils;
    pub(crate) mod widget_snapshot;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregates::*;
        pub use crate::domain::entities::budget::*;
        pub use crate::domain::entities::budget_alert::*;
        pub use crate::domain::entities::category::*;
        pub use crate::domain::entities::currency::*;
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::feature_access::*;
        pub use crate::domain::entities::income::*;
        pub use crate::domain::entities::ledger_state::*;
        pub use crate::domain::entities::period::*;
        pub use crate::domain::entities::records::*;
        pub use crate::domain::entities::recurrence::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::savings_goal::*;
        pub use crate::domain::entities::search::*;
        pub use crate::domain::entities::settings::*;
        pub use crate::domain::entities::subscription::*;
    }

    pub mod ledger {
        pub use crate::domain::logic::access_impl::MAX_FREE_SAVINGS_GOALS;
        pub use crate::domain::logic::aggregation::*;
        pub use crate::domain::logic::budget_impl::{apply_rollover, budget_progress, next_budget_alert};
        pub use crate::domain::logic::recurrence_impl::advance;
        pub use crate::domain::usecases::ledger_store::LedgerStore;
    }

    pub mod persistence {
        pub use crate::data::repositories::in_memory_ledger_repository::InMemoryLedgerRepository;
        pub use crate::data::repositories::ledger_repository_impl::LedgerRepositoryImpl;
        pub use crate::domain::repositories::ledger_repository::LedgerRepository;
    }

    pub mod formatting {
        pub use crate::presentation::utils::{format_amount, format_percentage};
        pub use crate::presentation::widget_snapshot::*;
    }
}
