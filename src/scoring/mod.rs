pub mod history;
pub mod scorer;

use serde::{Deserialize, Serialize};

use crate::decision::DecisionReason;

pub use history::LoanHistorySnapshot;
pub use scorer::CreditScorer;

/// credit score result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditScore {
    /// always within 0..=100
    pub value: u8,
    /// set when an override forced the score to zero
    pub reason: Option<DecisionReason>,
}

impl CreditScore {
    pub fn is_overridden(&self) -> bool {
        self.reason.is_some()
    }
}
