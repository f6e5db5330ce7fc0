use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::Loan;

/// aggregates over one customer's loan history as of a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanHistorySnapshot {
    pub as_of: NaiveDate,
    pub loan_count: u32,
    pub paid_on_time_count: u32,
    pub started_this_year: u32,
    pub total_volume: Money,
    pub active_volume: Money,
    pub active_emi_total: Money,
}

impl LoanHistorySnapshot {
    pub fn from_loans(loans: &[Loan], as_of: NaiveDate) -> Self {
        let active: Vec<&Loan> = loans.iter().filter(|l| l.is_active_on(as_of)).collect();

        Self {
            as_of,
            loan_count: loans.len() as u32,
            paid_on_time_count: loans.iter().filter(|l| l.paid_on_time()).count() as u32,
            started_this_year: loans.iter().filter(|l| l.started_in_year_of(as_of)).count() as u32,
            total_volume: loans.iter().map(|l| l.loan_amount).sum(),
            active_volume: active.iter().map(|l| l.loan_amount).sum(),
            active_emi_total: active.iter().map(|l| l.monthly_installment).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.loan_count == 0
    }

    /// share of loans paid on time; a customer with no history counts as 1
    pub fn on_time_ratio(&self) -> Decimal {
        if self.loan_count == 0 {
            return Decimal::ONE;
        }
        Decimal::from(self.paid_on_time_count) / Decimal::from(self.loan_count)
    }
}
