use serde_derive::{Deserialize, Serialize};

/// Currencies a budget can be kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "MXN")]
    Mxn,
}

impl CurrencyCode {
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Mxn => "MXN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Cad => "CA$",
            CurrencyCode::Mxn => "MX$",
        }
    }

    pub fn iso(&self) -> iso_currency::Currency {
        match self {
            CurrencyCode::Usd => iso_currency::Currency::USD,
            CurrencyCode::Eur => iso_currency::Currency::EUR,
            CurrencyCode::Gbp => iso_currency::Currency::GBP,
            CurrencyCode::Cad => iso_currency::Currency::CAD,
            CurrencyCode::Mxn => iso_currency::Currency::MXN,
        }
    }
}
