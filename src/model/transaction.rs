use crate::error::{typed, ErrorType};
use crate::model::{Amount, Kind, Record};
use crate::{date, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single income (positive amount) or expense (negative amount). Transactions have no identity.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub(crate) description: String,
    pub(crate) amount: Amount,
    /// Expected in `DD-MM-YYYY` form, but not guaranteed until `validate` has been called.
    pub(crate) date: String,
    pub(crate) category: String,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date: date.into(),
            category: category.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// The date as a calendar date, or `None` if it is not a valid `DD-MM-YYYY` date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        date::parse(&self.date)
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Record for Transaction {
    const KIND: Kind = Kind::Finance;
    const HEADERS: &'static [&'static str] = &["description", "amount", "date", "category"];

    fn line(&self) -> String {
        format!(
            "Description: {} | Amount: {} | Date: {} | Category: {}",
            self.description, self.amount, self.date, self.category
        )
    }

    fn validate(&self) -> Result<()> {
        if !date::is_valid(&self.date) {
            return Err(typed(
                ErrorType::Validation,
                format!(
                    "Invalid date '{}', expected DD-MM-YYYY. The transaction was not added",
                    self.date
                ),
            ));
        }
        Ok(())
    }
}
