use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::ledger::LedgerError;
use crate::types::CustomerId;

#[derive(Error, Debug)]
pub enum EligibilityError {
    #[error("invalid loan amount: {amount}, must be greater than zero")]
    InvalidLoanAmount {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}, must be greater than zero")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid tenure: {tenure} months, must be at least 1")]
    InvalidTenure {
        tenure: u32,
    },

    #[error("customer not found: {customer_id}")]
    CustomerNotFound {
        customer_id: CustomerId,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl EligibilityError {
    /// rejected request input, detected before any ledger access
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EligibilityError::InvalidLoanAmount { .. }
                | EligibilityError::InvalidInterestRate { .. }
                | EligibilityError::InvalidTenure { .. }
        )
    }

    /// errors the caller should surface as a client-facing rejection
    pub fn is_client_error(&self) -> bool {
        self.is_validation() || matches!(self, EligibilityError::CustomerNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, EligibilityError>;
