use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidMoneyAmount;

/// Amount typed by a user: optional currency symbol, thousands separators,
/// and accounting-style parentheses for negatives ("$1,234.50", "(12)").
#[derive(Debug)]
pub(crate) struct MoneyAmountModel(pub f64);
impl FromStr for MoneyAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw
            .trim_matches(|c| c == '(' || c == ')')
            .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
            .trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidMoneyAmount::new(s))?;
        if !amount.is_finite() {
            return Err(InvalidMoneyAmount::new(s));
        }
        Ok(MoneyAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<MoneyAmountModel> for f64 {
    fn from(model: MoneyAmountModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> f64 {
        MoneyAmountModel::from_str(s).unwrap().into()
    }

    #[test]
    fn parses_symbols_separators_and_parentheses() {
        assert_eq!(parse("1,234.50"), 1234.5);
        assert_eq!(parse("$1,234.50"), 1234.5);
        assert_eq!(parse("CA$ 20"), 20.0);
        assert_eq!(parse("€0.99"), 0.99);
        assert_eq!(parse("(12.00)"), -12.0);
        assert_eq!(parse(" 7 "), 7.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(MoneyAmountModel::from_str("").is_err());
        assert!(MoneyAmountModel::from_str("abc").is_err());
        assert!(MoneyAmountModel::from_str("1.2.3").is_err());
        assert!(MoneyAmountModel::from_str("inf").is_err());
    }
}
