use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Days, NaiveDate};

use crate::entities::{
    CategoryShare, Categorized, DailyAmount, DateRange, DatedAmount, ExpenseCategory,
    MonthlyAmount, PeriodKey,
};

/// Sum of the amounts dated within `range` (inclusive).
pub fn period_total<R: DatedAmount>(records: &[R], range: &DateRange) -> f64 {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .map(|r| r.amount())
        .sum()
}

pub fn group_by_category<R: Categorized>(
    records: &[R],
    range: &DateRange,
) -> BTreeMap<ExpenseCategory, f64> {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .fold(BTreeMap::new(), |mut map, r| {
            *map.entry(r.category()).or_insert(0.0) += r.amount();
            map
        })
}

/// Categories ordered by amount, largest first, with their share of the
/// total spent in `range`.
pub fn top_categories<R: Categorized>(records: &[R], range: &DateRange) -> Vec<CategoryShare> {
    let by_category = group_by_category(records, range);
    let total: f64 = by_category.values().sum();
    let mut shares: Vec<CategoryShare> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    // Stable sort, so equal amounts keep category order.
    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares
}

/// One entry per day for the `n_days` days ending at `today`, oldest first.
/// Days without records are zero.
pub fn daily_series<R: DatedAmount>(records: &[R], n_days: u32, today: NaiveDate) -> Vec<DailyAmount> {
    let totals: HashMap<NaiveDate, f64> =
        records.iter().fold(HashMap::new(), |mut map, r| {
            *map.entry(r.date()).or_insert(0.0) += r.amount();
            map
        });
    (0..n_days as u64)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| DailyAmount {
            date,
            amount: totals.get(&date).copied().unwrap_or(0.0),
        })
        .collect()
}

/// One entry per calendar month for the `n_months` months ending with the
/// month of `today`, oldest first.
pub fn monthly_series<R: DatedAmount>(
    records: &[R],
    n_months: u32,
    today: NaiveDate,
) -> Vec<MonthlyAmount> {
    let totals: HashMap<PeriodKey, f64> =
        records.iter().fold(HashMap::new(), |mut map, r| {
            *map.entry(PeriodKey::of(r.date())).or_insert(0.0) += r.amount();
            map
        });
    let mut periods = Vec::with_capacity(n_months as usize);
    let mut period = PeriodKey::of(today);
    for _ in 0..n_months {
        periods.push(period);
        period = period.previous();
    }
    periods
        .into_iter()
        .rev()
        .map(|period| MonthlyAmount {
            period,
            amount: totals.get(&period).copied().unwrap_or(0.0),
        })
        .collect()
}

pub fn average_daily<R: DatedAmount>(records: &[R], n_days: u32, today: NaiveDate) -> f64 {
    let series = daily_series(records, n_days, today);
    if series.is_empty() {
        return 0.0;
    }
    series.iter().map(|d| d.amount).sum::<f64>() / series.len() as f64
}

/// Months that contain at least one record, newest first.
pub fn available_periods<R: DatedAmount>(records: &[R]) -> Vec<PeriodKey> {
    records
        .iter()
        .map(|r| PeriodKey::of(r.date()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Expense;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Coffee", 5.5, ExpenseCategory::Food, d(2024, 3, 1)),
            Expense::new("Gas", 45.0, ExpenseCategory::Transportation, d(2024, 3, 10)),
            Expense::new("Groceries", 125.75, ExpenseCategory::Food, d(2024, 3, 31)),
            Expense::new("Flight", 300.0, ExpenseCategory::Travel, d(2024, 2, 29)),
        ]
    }

    #[test]
    fn period_total_is_inclusive_on_both_ends() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 31)).unwrap();
        assert_eq!(period_total(&sample(), &range), 176.25);
        let single = DateRange::single_day(d(2024, 2, 29));
        assert_eq!(period_total(&sample(), &single), 300.0);
    }

    #[test]
    fn group_by_category_only_counts_records_in_range() {
        let range = PeriodKey::of(d(2024, 3, 5)).range();
        let grouped = group_by_category(&sample(), &range);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&ExpenseCategory::Food], 131.25);
        assert_eq!(grouped[&ExpenseCategory::Transportation], 45.0);
        assert!(!grouped.contains_key(&ExpenseCategory::Travel));
    }

    #[test]
    fn top_categories_sorted_with_percentages() {
        let range = DateRange::new(d(2024, 2, 1), d(2024, 3, 31)).unwrap();
        let top = top_categories(&sample(), &range);
        assert_eq!(top[0].category, ExpenseCategory::Travel);
        assert_eq!(top[1].category, ExpenseCategory::Food);
        assert_eq!(top[2].category, ExpenseCategory::Transportation);
        let total: f64 = top.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn top_categories_of_empty_range_is_empty() {
        let range = DateRange::single_day(d(2020, 1, 1));
        assert!(top_categories(&sample(), &range).is_empty());
    }

    #[test]
    fn daily_series_is_oldest_first_and_zero_filled() {
        let series = daily_series(&sample(), 3, d(2024, 3, 2));
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, d(2024, 2, 29));
        assert_eq!(series[0].amount, 300.0);
        assert_eq!(series[1].date, d(2024, 3, 1));
        assert_eq!(series[1].amount, 5.5);
        assert_eq!(series[2].date, d(2024, 3, 2));
        assert_eq!(series[2].amount, 0.0);
        // Restartable: same input, same sequence.
        assert_eq!(series, daily_series(&sample(), 3, d(2024, 3, 2)));
    }

    #[test]
    fn daily_series_of_zero_days_is_empty() {
        assert!(daily_series(&sample(), 0, d(2024, 3, 2)).is_empty());
        assert_eq!(average_daily(&sample(), 0, d(2024, 3, 2)), 0.0);
    }

    #[test]
    fn monthly_series_crosses_year_boundary() {
        let series = monthly_series(&sample(), 4, d(2024, 3, 15));
        let keys: Vec<String> = series.iter().map(|m| m.period.to_string()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-02", "2024-03"]);
        assert_eq!(series[2].amount, 300.0);
        assert_eq!(series[3].amount, 176.25);
    }

    #[test]
    fn available_periods_newest_first() {
        let periods = available_periods(&sample());
        assert_eq!(
            periods,
            vec![PeriodKey::of(d(2024, 3, 1)), PeriodKey::of(d(2024, 2, 1))]
        );
    }
}
