//! Date-range summaries over transactions.
//!
//! Bounds are compared as calendar dates, inclusive at both ends. Stored transactions whose date
//! cannot be parsed are left out of every report.

use crate::error::{typed, ErrorType};
use crate::model::{Amount, Transaction};
use crate::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// Totals for a set of transactions.
///
/// `income` and `expenses` are both non-negative and `balance == income - expenses`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Totals {
    pub income: Amount,
    pub expenses: Amount,
    pub balance: Amount,
    /// Net amount per category.
    pub by_category: BTreeMap<String, Amount>,
}

impl Totals {
    /// Sums `transactions`.
    ///
    /// # Errors
    /// - `ErrorType::Validation` if a sum is too large to be represented.
    pub fn of(transactions: &[Transaction]) -> Result<Self> {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
        for t in transactions {
            let value = t.amount().value();
            if t.amount().is_positive() {
                income = add(income, value)?;
            } else if t.amount().is_negative() {
                expenses = add(expenses, value.abs())?;
            }
            let total = by_category.entry(t.category().to_string()).or_default();
            *total = add(*total, value)?;
        }
        let balance = income.checked_sub(expenses).ok_or_else(overflow)?;
        Ok(Self {
            income: income.into(),
            expenses: expenses.into(),
            balance: balance.into(),
            by_category: by_category
                .into_iter()
                .map(|(k, v)| (k, Amount::new(v)))
                .collect(),
        })
    }
}

fn add(total: Decimal, value: Decimal) -> Result<Decimal> {
    total.checked_add(value).ok_or_else(overflow)
}

fn overflow() -> crate::Error {
    typed(
        ErrorType::Validation,
        "The transaction amounts are too large to add up",
    )
}

/// The outcome of a report: the bounds as the user typed them, the totals and the CSV file the
/// matching transactions were written to.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub start: String,
    pub end: String,
    pub count: usize,
    pub totals: Totals,
    pub path: PathBuf,
}

impl Summary {
    /// A multi-line, human-readable rendering of the summary.
    pub fn describe(&self) -> String {
        let mut s = format!(
            "Report for {} to {} ({} matching) saved to {}\n\
             Income: {}\n\
             Expenses: {}\n\
             Balance: {}",
            self.start,
            self.end,
            self.count,
            self.path.display(),
            self.totals.income,
            self.totals.expenses,
            self.totals.balance
        );
        for (category, amount) in &self.totals.by_category {
            s.push_str(&format!("\n  {category}: {amount}"));
        }
        s
    }
}

/// Returns the transactions dated between `start` and `end`, inclusive, in stored order.
pub fn in_range(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| match t.parsed_date() {
            Some(d) => start <= d && d <= end,
            None => {
                warn!(
                    "Skipping transaction '{}' with unreadable date '{}'",
                    t.description(),
                    t.date()
                );
                false
            }
        })
        .cloned()
        .collect()
}

/// The file name for a report between the two bounds, exactly as they were typed.
pub fn file_name(start: &str, end: &str) -> String {
    format!("report_{start}_{end}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn txn(amount: &str, date: &str, category: &str) -> Transaction {
        Transaction::new("t", Amount::from_str(amount).unwrap(), date, category)
    }

    fn day(s: &str) -> NaiveDate {
        crate::date::parse(s).unwrap()
    }

    #[test]
    fn test_totals() {
        let totals = Totals::of(&[
            txn("-50.0", "15-03-2024", "Food"),
            txn("200.0", "20-03-2024", "Salary"),
            txn("-0.5", "21-03-2024", "Food"),
            txn("0", "22-03-2024", "Other"),
        ])
        .unwrap();
        assert_eq!(totals.income.to_string(), "200.00");
        assert_eq!(totals.expenses.to_string(), "50.50");
        assert_eq!(totals.balance.to_string(), "149.50");
        assert_eq!(totals.by_category["Food"].to_string(), "-50.50");
        assert_eq!(totals.by_category["Salary"].to_string(), "200.00");
    }

    #[test]
    fn test_totals_law() {
        let sets = vec![
            vec![],
            vec![txn("-10", "01-01-2024", "a")],
            vec![txn("10", "01-01-2024", "a"), txn("-30.25", "01-01-2024", "b")],
            vec![txn("0.1", "01-01-2024", "a"), txn("0.2", "01-01-2024", "a")],
        ];
        for set in sets {
            let t = Totals::of(&set).unwrap();
            assert!(t.income.value() >= Decimal::ZERO);
            assert!(t.expenses.value() >= Decimal::ZERO);
            assert_eq!(t.income.value() - t.expenses.value(), t.balance.value());
        }
    }

    #[test]
    fn test_totals_overflow_is_an_error() {
        let huge = "70000000000000000000000000000";
        let err = Totals::of(&[txn(huge, "01-01-2024", "a"), txn(huge, "02-01-2024", "b")])
            .unwrap_err();
        assert_eq!(crate::error::error_type(&err), Some(ErrorType::Validation));

        let err = Totals::of(&[
            txn(&format!("-{huge}"), "01-01-2024", "a"),
            txn(&format!("-{huge}"), "02-01-2024", "b"),
        ])
        .unwrap_err();
        assert_eq!(crate::error::error_type(&err), Some(ErrorType::Validation));

        // Separate categories and opposite signs stay within range.
        let totals = Totals::of(&[
            txn(huge, "01-01-2024", "a"),
            txn(&format!("-{huge}"), "02-01-2024", "a"),
        ])
        .unwrap();
        assert_eq!(totals.by_category["a"].to_string(), "0.00");
    }

    #[test]
    fn test_in_range_is_inclusive() {
        let all = vec![
            txn("1", "01-03-2024", "a"),
            txn("2", "31-03-2024", "a"),
            txn("3", "29-02-2024", "a"),
            txn("4", "01-04-2024", "a"),
        ];
        let found = in_range(&all, day("01-03-2024"), day("31-03-2024"));
        let amounts: Vec<String> = found.iter().map(|t| t.amount().to_string()).collect();
        assert_eq!(amounts, vec!["1.00", "2.00"]);
    }

    #[test]
    fn test_in_range_crosses_years() {
        // Compared as strings, "15-06-2023" would sort after "01-01-2024".
        let all = vec![
            txn("1", "15-06-2023", "a"),
            txn("2", "10-01-2024", "a"),
            txn("3", "05-02-2024", "a"),
        ];
        let found = in_range(&all, day("01-01-2024"), day("31-01-2024"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date(), "10-01-2024");

        let found = in_range(&all, day("01-06-2023"), day("31-12-2023"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date(), "15-06-2023");
    }

    #[test]
    fn test_in_range_skips_unreadable_dates() {
        let all = vec![txn("1", "2024-03-10", "a"), txn("2", "10-03-2024", "a")];
        let found = in_range(&all, day("01-03-2024"), day("31-03-2024"));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("01-03-2024", "31-03-2024"),
            "report_01-03-2024_31-03-2024.csv"
        );
    }
}
