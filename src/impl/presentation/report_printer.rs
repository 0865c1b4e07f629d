use crate::entities::{CurrencyCode, PeriodReport};

use super::utils::{format_amount, format_percentage};

const WIDTH: usize = 72;
const TOP_CATEGORY_COUNT: usize = 5;

pub(crate) struct ReportPrinter {
    currency: CurrencyCode,
}

impl ReportPrinter {
    pub(crate) fn new(currency: CurrencyCode) -> Self {
        Self { currency }
    }

    pub(crate) fn print_report(&self, report: &PeriodReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "; --- Report {} to {} {}\n\n",
            report.range.start,
            report.range.end,
            "-".repeat(WIDTH.saturating_sub(32))
        ));
        self.print_totals(&mut out, report);
        out.push('\n');

        out.push_str("; --- Top categories\n\n");
        self.print_top_categories(&mut out, report);
        out.push('\n');

        out.push_str("; --- Insights\n\n");
        self.print_insights(&mut out, report);

        out
    }

    fn print_totals(&self, out: &mut String, report: &PeriodReport) {
        let rows = [
            ("Spent", report.total_spent),
            ("Income", report.total_income),
            ("Net", report.net_balance),
            ("Daily average", report.average_daily),
        ];
        for (label, amount) in rows {
            out.push_str(&format!(
                "{:<20}{:>20}\n",
                label,
                format_amount(amount, self.currency)
            ));
        }
        if let Some(change) = report.spending_change {
            out.push_str(&format!("{:<20}{:>19.0}%\n", "Change vs. previous", change));
        }
    }

    fn print_top_categories(&self, out: &mut String, report: &PeriodReport) {
        if report.top_categories.is_empty() {
            out.push_str("No spending in this period.\n");
            return;
        }
        for share in report.top_categories.iter().take(TOP_CATEGORY_COUNT) {
            out.push_str(&format!(
                "{:<20}{:>20}{:>8}\n",
                share.category.display_name(),
                format_amount(share.amount, self.currency),
                format_percentage(share.percentage / 100.0)
            ));
        }
    }

    fn print_insights(&self, out: &mut String, report: &PeriodReport) {
        if report.insights.is_empty() {
            out.push_str("No insights yet.\n");
            return;
        }
        let options = textwrap::Options::new(WIDTH)
            .initial_indent("- ")
            .subsequent_indent("  ");
        for insight in report.insights.iter() {
            out.push_str(&textwrap::fill(&insight.describe(self.currency), options.clone()));
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{CategoryShare, DateRange, ExpenseCategory, Insight};

    #[test]
    fn prints_totals_categories_and_insights() {
        let report = PeriodReport {
            range: DateRange::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .unwrap(),
            total_spent: 1250.0,
            total_income: 3000.0,
            net_balance: 1750.0,
            average_daily: 40.32,
            top_categories: vec![CategoryShare {
                category: ExpenseCategory::Food,
                amount: 1250.0,
                percentage: 100.0,
            }],
            spending_change: None,
            insights: vec![Insight::Saved { amount: 1750.0 }],
        };
        let text = ReportPrinter::new(CurrencyCode::Usd).print_report(&report);
        assert!(text.contains("2024-03-01 to 2024-03-31"));
        assert!(text.contains("$1,250.00"));
        assert!(text.contains("Food"));
        assert!(text.contains("100%"));
        assert!(text.contains("- You saved $1,750.00 in this period."));
        assert!(!text.contains("Change vs. previous"));
    }
}
