//! Aggregation primitives
//!
//! Pure folds over record snapshots. Every function here is total: empty
//! input produces zero or an empty result, and division is guarded so a
//! zero denominator yields 0 instead of a fault.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{ExpenseRecord, IncomeRecord, Money};

/// Sum the selected amount over a slice of records
pub fn total_of<T, F>(records: &[T], amount: F) -> Money
where
    F: Fn(&T) -> Money,
{
    records.iter().map(amount).sum()
}

/// Net worth: total income minus total expenses
///
/// May be negative; over-spending is a reportable fact, not an error.
pub fn net_worth(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Money {
    total_of(income, |r| r.amount) - total_of(expenses, |r| r.amount)
}

/// Group records by a string key, summing the selected amount per key
///
/// Keys are returned in first-seen order so downstream reports are
/// deterministic. Keys whose records all sum to zero are kept.
pub fn group_sum<T, K, A>(records: &[T], key: K, amount: A) -> Vec<(String, Money)>
where
    K: Fn(&T) -> &str,
    A: Fn(&T) -> Money,
{
    let mut sums: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let k = key(record);
        match index.get(k) {
            Some(&i) => sums[i].1 += amount(record),
            None => {
                index.insert(k.to_string(), sums.len());
                sums.push((k.to_string(), amount(record)));
            }
        }
    }

    sums
}

/// Part as a percentage of whole, 0.0 when the whole is zero
pub fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

/// The n most recent records, newest first
///
/// The sort is stable: records sharing a date keep their insertion order.
/// Returns all records when fewer than n exist.
pub fn most_recent<T, D>(records: &[T], date: D, n: usize) -> Vec<T>
where
    T: Clone,
    D: Fn(&T) -> NaiveDate,
{
    let mut sorted: Vec<T> = records.to_vec();
    sorted.sort_by(|a, b| date(b).cmp(&date(a)));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn income(amount: i64, source: &str, d: &str) -> IncomeRecord {
        IncomeRecord::new(Money::from_cents(amount), source, date(d))
    }

    fn expense(amount: i64, category: &str, d: &str) -> ExpenseRecord {
        ExpenseRecord::new(Money::from_cents(amount), category, "", date(d))
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        let records: Vec<IncomeRecord> = Vec::new();
        assert_eq!(total_of(&records, |r| r.amount), Money::zero());
    }

    #[test]
    fn test_total_of_is_order_independent() {
        let mut records = vec![
            income(100, "a", "2024-01-01"),
            income(200, "b", "2024-01-02"),
            income(300, "c", "2024-01-03"),
        ];
        let forward = total_of(&records, |r| r.amount);
        records.reverse();
        let backward = total_of(&records, |r| r.amount);

        assert_eq!(forward, backward);
        assert_eq!(forward.cents(), 600);
    }

    #[test]
    fn test_net_worth_can_be_negative() {
        let income = vec![income(100, "job", "2024-01-01")];
        let expenses = vec![expense(250, "rent", "2024-01-02")];

        assert_eq!(net_worth(&income, &expenses).cents(), -150);
    }

    #[test]
    fn test_group_sum_empty() {
        let records: Vec<ExpenseRecord> = Vec::new();
        let groups = group_sum(&records, |r| r.category.as_str(), |r| r.amount);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_sum_single_key() {
        let records = vec![
            expense(100, "food", "2024-01-01"),
            expense(200, "food", "2024-01-02"),
            expense(300, "food", "2024-01-03"),
        ];
        let groups = group_sum(&records, |r| r.category.as_str(), |r| r.amount);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0], ("food".to_string(), Money::from_cents(600)));
    }

    #[test]
    fn test_group_sum_first_seen_order() {
        let records = vec![
            expense(100, "food", "2024-01-01"),
            expense(200, "rent", "2024-01-01"),
            expense(300, "food", "2024-01-02"),
        ];
        let groups = group_sum(&records, |r| r.category.as_str(), |r| r.amount);

        assert_eq!(groups[0].0, "food");
        assert_eq!(groups[0].1.cents(), 400);
        assert_eq!(groups[1].0, "rent");
    }

    #[test]
    fn test_group_sum_keeps_zero_amount_keys() {
        let records = vec![expense(0, "misc", "2024-01-01")];
        let groups = group_sum(&records, |r| r.category.as_str(), |r| r.amount);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "misc");
        assert!(groups[0].1.is_zero());
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(Money::from_cents(500), Money::zero()), 0.0);
    }

    #[test]
    fn test_percent_of() {
        let pct = percent_of(Money::from_cents(4000), Money::from_cents(5000));
        assert!((pct - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_most_recent_sorts_descending() {
        let records = vec![
            income(1, "a", "2024-01-01"),
            income(2, "b", "2024-03-01"),
            income(3, "c", "2024-02-01"),
        ];
        let recent = most_recent(&records, |r| r.date, 2);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].source, "b");
        assert_eq!(recent[1].source, "c");
    }

    #[test]
    fn test_most_recent_stable_on_ties() {
        let records = vec![
            income(1, "first", "2024-01-01"),
            income(2, "second", "2024-01-01"),
            income(3, "third", "2024-01-01"),
        ];
        let recent = most_recent(&records, |r| r.date, 3);

        assert_eq!(recent[0].source, "first");
        assert_eq!(recent[1].source, "second");
        assert_eq!(recent[2].source, "third");
    }

    #[test]
    fn test_most_recent_idempotent() {
        let records = vec![
            income(1, "a", "2024-03-01"),
            income(2, "b", "2024-02-01"),
            income(3, "c", "2024-01-01"),
        ];
        let once = most_recent(&records, |r| r.date, 3);
        let twice = most_recent(&once, |r| r.date, 3);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_most_recent_fewer_than_n() {
        let records = vec![income(1, "a", "2024-01-01")];
        let recent = most_recent(&records, |r| r.date, 5);
        assert_eq!(recent.len(), 1);
    }
}
