//! Finance command handlers: adding transactions and generating reports.

use crate::commands::Out;
use crate::error::{typed, ErrorType, IntoResult};
use crate::model::{Amount, Transaction};
use crate::report::{self, Summary, Totals};
use crate::store::write_csv;
use crate::{date, utils, Config, Result};
use std::str::FromStr;
use tracing::debug;

/// Adds a transaction. A positive `amount` is income, a negative one is an expense.
///
/// # Errors
/// - `ErrorType::Validation` if `amount` is not a number or `date` is not a valid `DD-MM-YYYY`
///   date. The finance file is not touched.
pub fn add_transaction(
    config: &Config,
    description: &str,
    amount: &str,
    date: &str,
    category: &str,
) -> Result<Out<Transaction>> {
    let amount = Amount::from_str(amount).pub_result(ErrorType::Validation)?;
    let transaction = Transaction::new(description, amount, date, category);
    let transaction = config.store::<Transaction>().append(transaction)?;
    Ok(Out::new(
        format!("Transaction of {} added", transaction.amount()),
        transaction,
    ))
}

/// Summarizes the transactions dated from `start` to `end`, inclusive, and writes them to
/// `report_<start>_<end>.csv` in the reports directory.
///
/// # Errors
/// - `ErrorType::Validation` if either bound is not a valid `DD-MM-YYYY` date. Nothing is written.
pub fn report(config: &Config, start: &str, end: &str) -> Result<Out<Summary>> {
    let start_date = date::parse(start).ok_or_else(|| {
        typed(
            ErrorType::Validation,
            format!("Invalid start date '{start}', expected DD-MM-YYYY"),
        )
    })?;
    let end_date = date::parse(end).ok_or_else(|| {
        typed(
            ErrorType::Validation,
            format!("Invalid end date '{end}', expected DD-MM-YYYY"),
        )
    })?;

    let transactions = config.store::<Transaction>().load()?;
    let matching = report::in_range(&transactions, start_date, end_date);
    debug!(
        "{} of {} transactions fall between {start} and {end}",
        matching.len(),
        transactions.len()
    );

    let totals = Totals::of(&matching)?;

    let dir = config.reports_dir();
    utils::make_dir(&dir)?;
    let path = dir.join(report::file_name(start, end));
    write_csv(&path, &matching)?;

    let summary = Summary {
        start: start.to_string(),
        end: end.to_string(),
        count: matching.len(),
        totals,
        path,
    };
    Ok(Out::new(summary.describe(), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::error_type;
    use crate::test::TestEnv;

    #[test]
    fn test_add_transaction() {
        let env = TestEnv::new();
        let out = add_transaction(env.config(), "Lunch", "-12.5", "15-03-2024", "Food").unwrap();
        assert_eq!(out.message(), "Transaction of -12.50 added");
        let listing = list::<Transaction>(env.config()).unwrap();
        assert!(listing.message().contains("Amount: -12.50"));
    }

    #[test]
    fn test_add_transaction_bad_amount() {
        let env = TestEnv::new();
        let err = add_transaction(env.config(), "Lunch", "a lot", "15-03-2024", "Food").unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        assert!(env.read("finance.json").is_none());
    }

    #[test]
    fn test_add_transaction_too_precise() {
        let env = TestEnv::new();
        let err = add_transaction(env.config(), "Bonus", "12345678901234567.89", "15-03-2024", "Pay")
            .unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        assert!(format!("{err:#}").contains("significant digits"));
        assert!(env.read("finance.json").is_none());
    }

    #[test]
    fn test_add_transaction_bad_date() {
        let env = TestEnv::new();
        add_transaction(env.config(), "Pay", "100", "01-03-2024", "Salary").unwrap();
        let before = env.read("finance.json").unwrap();
        let err = add_transaction(env.config(), "Lunch", "-5", "15.03.2024", "Food").unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        assert_eq!(env.read("finance.json").unwrap(), before);
    }

    #[test]
    fn test_march_report() {
        let env = TestEnv::new();
        add_transaction(env.config(), "Groceries", "-50.0", "15-03-2024", "Food").unwrap();
        add_transaction(env.config(), "Pay", "200.0", "20-03-2024", "Salary").unwrap();
        add_transaction(env.config(), "Rent", "-300", "01-04-2024", "Home").unwrap();

        let out = report(env.config(), "01-03-2024", "31-03-2024").unwrap();
        let summary = out.structure().unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.totals.income.to_string(), "200.00");
        assert_eq!(summary.totals.expenses.to_string(), "50.00");
        assert_eq!(summary.totals.balance.to_string(), "150.00");
        assert!(out.message().contains("Income: 200.00"));
        assert!(out.message().contains("Expenses: 50.00"));
        assert!(out.message().contains("Balance: 150.00"));

        let csv = env.read("report_01-03-2024_31-03-2024.csv").unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("description,amount,date,category"));
        assert_eq!(lines.next(), Some("Groceries,-50.0,15-03-2024,Food"));
        assert_eq!(lines.next(), Some("Pay,200.0,20-03-2024,Salary"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_report_with_amounts_too_large_to_sum() {
        let env = TestEnv::new();
        env.insert_transaction("70000000000000000000000000000", "10-03-2024", "Lottery");
        env.insert_transaction("70000000000000000000000000000", "11-03-2024", "Lottery");
        let err = report(env.config(), "01-03-2024", "31-03-2024").unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        assert!(format!("{err:#}").contains("too large"));
        assert!(env.read("report_01-03-2024_31-03-2024.csv").is_none());
    }

    #[test]
    fn test_report_invalid_bounds() {
        let env = TestEnv::new();
        let err = report(env.config(), "2024-03-01", "31-03-2024").unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        let err = report(env.config(), "01-03-2024", "32-03-2024").unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        assert!(env.read("report_01-03-2024_32-03-2024.csv").is_none());
    }

    #[test]
    fn test_empty_report_still_writes_header() {
        let env = TestEnv::new();
        let out = report(env.config(), "01-01-2020", "31-12-2020").unwrap();
        assert_eq!(out.structure().unwrap().count, 0);
        assert_eq!(out.structure().unwrap().totals.balance.to_string(), "0.00");
        assert_eq!(
            env.read("report_01-01-2020_31-12-2020.csv").unwrap(),
            "description,amount,date,category\n"
        );
    }
}
