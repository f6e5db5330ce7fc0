pub mod config;
pub mod decimal;
pub mod decision;
pub mod dispatch;
pub mod eligibility;
pub mod emi;
pub mod errors;
pub mod ledger;
pub mod policy;
pub mod scoring;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{EligibilityConfig, PolicyConfig, RateTier, ScoringConfig};
pub use decimal::{Money, Rate};
pub use decision::{DecisionReason, EligibilityDecision, EligibilityRequest};
pub use dispatch::{ApplicationDispatcher, CreditApplication, LogDispatcher, QueueDispatcher};
pub use eligibility::EligibilityService;
pub use emi::calculate_emi;
pub use errors::{EligibilityError, Result};
pub use ledger::{InMemoryLedger, LedgerError, LedgerStore, NewCustomer, NewLoan};
pub use policy::{ApprovalPolicy, PolicyOutcome};
pub use scoring::{CreditScore, CreditScorer, LoanHistorySnapshot};
pub use serialization::DecisionView;
pub use types::{approved_limit_for_income, Customer, CustomerId, Loan, LoanId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
