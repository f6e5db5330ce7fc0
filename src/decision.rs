use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::{EligibilityError, Result};
use crate::serialization::DecisionView;
use crate::types::CustomerId;

/// why a decision was rejected or had its rate changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionReason {
    /// running loan volume above the approved limit
    CurrentLoansExceedLimit,
    /// running EMIs above the configured share of income
    ExistingEmisExceedIncome { ceiling: Rate },
    /// score band substituted a higher rate
    RateAdjusted { label: String, rate: Rate },
    ScoreTooLow,
    /// the new loan's EMI above the configured share of income
    EmiExceedsIncome { ceiling: Rate },
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionReason::CurrentLoansExceedLimit => {
                write!(f, "current loans exceed approved limit")
            }
            DecisionReason::ExistingEmisExceedIncome { ceiling } => {
                write!(f, "total EMIs exceed {} of income", ceiling)
            }
            DecisionReason::RateAdjusted { label, rate } => {
                write!(f, "credit score {}; interest rate adjusted to {}", label, rate)
            }
            DecisionReason::ScoreTooLow => write!(f, "credit score too low for approval"),
            DecisionReason::EmiExceedsIncome { ceiling } => {
                write!(f, "EMI exceeds {} of income", ceiling)
            }
        }
    }
}

/// a proposed loan to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub customer_id: CustomerId,
    pub loan_amount: Money,
    pub interest_rate: Rate,
    pub tenure: u32,
}

impl EligibilityRequest {
    pub fn new(
        customer_id: CustomerId,
        loan_amount: Money,
        interest_rate: Rate,
        tenure: u32,
    ) -> Self {
        Self {
            customer_id,
            loan_amount,
            interest_rate,
            tenure,
        }
    }

    /// reject non-positive amount or rate and zero tenure
    pub fn validate(&self) -> Result<()> {
        if !self.loan_amount.is_positive() {
            return Err(EligibilityError::InvalidLoanAmount {
                amount: self.loan_amount,
            });
        }
        if !self.interest_rate.is_positive() {
            return Err(EligibilityError::InvalidInterestRate {
                rate: self.interest_rate,
            });
        }
        if self.tenure == 0 {
            return Err(EligibilityError::InvalidTenure {
                tenure: self.tenure,
            });
        }
        Ok(())
    }
}

/// eligibility decision for one request; computed fresh, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub customer_id: CustomerId,
    pub approval: bool,
    /// rate the customer asked for
    pub interest_rate: Rate,
    /// rate the installment was computed with
    pub corrected_interest_rate: Rate,
    pub tenure: u32,
    pub monthly_installment: Money,
    pub credit_score: u8,
    pub reason: Option<DecisionReason>,
}

impl EligibilityDecision {
    /// human-readable reason, empty when none applies
    pub fn reason_text(&self) -> String {
        self.reason
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default()
    }

    pub fn rate_was_corrected(&self) -> bool {
        self.interest_rate != self.corrected_interest_rate
    }

    /// the new installment breached the income ceiling
    pub fn hit_emi_ceiling(&self) -> bool {
        matches!(self.reason, Some(DecisionReason::EmiExceedsIncome { .. }))
    }

    /// get decision as JSON string
    pub fn json(&self) -> String {
        DecisionView::from_decision(self).to_json()
    }
}
