pub mod memory;

use thiserror::Error;

use crate::types::{Customer, CustomerId, Loan, LoanId};

pub use memory::{InMemoryLedger, NewCustomer, NewLoan};

/// read access to persisted customers and their loan history
///
/// implementations must be safe to share between concurrent eligibility
/// requests; the decisioning core never writes through this trait.
pub trait LedgerStore: Send + Sync {
    /// look up a customer, `None` when the id does not resolve
    fn get_customer(&self, customer_id: CustomerId) -> Result<Option<Customer>, LedgerError>;

    /// every loan ever issued to the customer, in no particular order
    fn list_loans(&self, customer_id: CustomerId) -> Result<Vec<Loan>, LedgerError>;
}

/// ledger store failures
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("customer already exists: {customer_id}")]
    CustomerConflict {
        customer_id: CustomerId,
    },

    #[error("loan already exists: {loan_id}")]
    LoanConflict {
        loan_id: LoanId,
    },

    #[error("unknown customer for loan: {customer_id}")]
    UnknownCustomer {
        customer_id: CustomerId,
    },

    #[error("invalid record: {message}")]
    InvalidRecord {
        message: String,
    },

    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
