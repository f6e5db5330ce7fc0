use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::ledger::LedgerError;

/// unique identifier for a customer
pub type CustomerId = u64;

/// unique identifier for a loan
pub type LoanId = u64;

/// minimum age accepted at registration
pub const MINIMUM_CUSTOMER_AGE: u8 = 18;

/// registered borrower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: u8,
    pub monthly_income: Money,
    pub approved_limit: Money,
    pub current_debt: Money,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// check record-level invariants
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.age < MINIMUM_CUSTOMER_AGE {
            return Err(LedgerError::InvalidRecord {
                message: format!(
                    "customer age must be at least {}, got {}",
                    MINIMUM_CUSTOMER_AGE, self.age
                ),
            });
        }

        if !self.monthly_income.is_positive() {
            return Err(LedgerError::InvalidRecord {
                message: format!(
                    "monthly income must be greater than zero, got {}",
                    self.monthly_income
                ),
            });
        }

        Ok(())
    }
}

/// default approved limit for a monthly income: 36 months of income,
/// rounded to the nearest lakh (100,000)
pub fn approved_limit_for_income(monthly_income: Money) -> Money {
    let lakh = dec!(100000);
    let limit = (Decimal::from(36) * monthly_income.as_decimal() / lakh).round() * lakh;
    Money::from_decimal(limit)
}

/// historical loan record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub loan_amount: Money,
    pub interest_rate: Rate,
    pub tenure: u32,
    pub monthly_installment: Money,
    /// paid-on-time mark as stored by the ledger, 1 when set
    pub emis_paid_on_time: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Loan {
    /// check record-level invariants
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.loan_amount.is_positive() {
            return Err(LedgerError::InvalidRecord {
                message: format!("loan amount must be positive, got {}", self.loan_amount),
            });
        }

        if self.tenure == 0 {
            return Err(LedgerError::InvalidRecord {
                message: "tenure must be at least 1 month".to_string(),
            });
        }

        if !self.interest_rate.is_positive() {
            return Err(LedgerError::InvalidRecord {
                message: format!("interest rate must be positive, got {}", self.interest_rate),
            });
        }

        if self.end_date < self.start_date {
            return Err(LedgerError::InvalidRecord {
                message: format!(
                    "end date {} precedes start date {}",
                    self.end_date, self.start_date
                ),
            });
        }

        Ok(())
    }

    /// loan still running on the given date (end date inclusive)
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.end_date >= date
    }

    /// loan started in the same calendar year as the given date
    pub fn started_in_year_of(&self, date: NaiveDate) -> bool {
        self.start_date.year() == date.year()
    }

    /// loan is marked paid on time; the ledger stores the mark as 1
    pub fn paid_on_time(&self) -> bool {
        self.emis_paid_on_time == 1
    }
}
