use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PolicyConfig;
use crate::decimal::Rate;
use crate::decision::DecisionReason;

/// outcome of the tiered approval table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    pub approved: bool,
    /// rate the installment is computed with
    pub corrected_rate: Rate,
    pub reason: Option<DecisionReason>,
}

/// maps a credit score and requested rate to approval and corrected rate
///
/// bands are evaluated top-down and the first match wins. a rate-tier band
/// approves only when the requested rate is above its minimum; otherwise it
/// substitutes the adjusted rate and leaves the application unapproved.
#[derive(Debug, Clone)]
pub struct ApprovalPolicy {
    config: PolicyConfig,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::standard())
    }
}

impl ApprovalPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// `prior` carries any reason already set by the scorer
    pub fn decide(
        &self,
        score: u8,
        requested_rate: Rate,
        prior: Option<DecisionReason>,
    ) -> PolicyOutcome {
        let mut outcome = PolicyOutcome {
            approved: false,
            corrected_rate: requested_rate,
            reason: prior,
        };

        if score > self.config.approve_above {
            outcome.approved = true;
            return outcome;
        }

        match self.config.tiers.iter().find(|tier| score > tier.score_above) {
            Some(tier) if requested_rate > tier.minimum_rate => {
                outcome.approved = true;
            }
            Some(tier) => {
                debug!(
                    score,
                    requested = %requested_rate,
                    adjusted = %tier.adjusted_rate,
                    "interest rate adjusted for score band"
                );
                outcome.corrected_rate = tier.adjusted_rate;
                outcome.reason = Some(DecisionReason::RateAdjusted {
                    label: tier.label.clone(),
                    rate: tier.adjusted_rate,
                });
            }
            None => {
                if outcome.reason.is_none() {
                    outcome.reason = Some(DecisionReason::ScoreTooLow);
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn decide(score: u8, rate: Rate) -> PolicyOutcome {
        ApprovalPolicy::default().decide(score, rate, None)
    }

    #[test]
    fn test_high_score_always_approved() {
        for score in [51, 75, 100] {
            for rate in [Rate::from_bps(1), Rate::from_percentage(8), Rate::from_percentage(30)] {
                let outcome = decide(score, rate);
                assert!(outcome.approved, "score {} rate {}", score, rate);
                assert_eq!(outcome.corrected_rate, rate);
                assert!(outcome.reason.is_none());
            }
        }
    }

    #[test]
    fn test_low_band_approves_above_twelve_percent() {
        let outcome = decide(45, Rate::from_percent(dec!(12.5)));
        assert!(outcome.approved);
        assert_eq!(outcome.corrected_rate, Rate::from_percent(dec!(12.5)));
    }

    #[test]
    fn test_low_band_adjusts_rate_without_approving() {
        for score in [31, 50] {
            let outcome = decide(score, Rate::from_percentage(12));
            assert!(!outcome.approved);
            assert_eq!(outcome.corrected_rate, Rate::from_percentage(16));
            assert_eq!(
                outcome.reason.unwrap().to_string(),
                "credit score low; interest rate adjusted to 16%"
            );
        }
    }

    #[test]
    fn test_very_low_band() {
        let approved = decide(20, Rate::from_percentage(18));
        assert!(approved.approved);
        assert_eq!(approved.corrected_rate, Rate::from_percentage(18));

        for score in [11, 30] {
            let adjusted = decide(score, Rate::from_percentage(16));
            assert!(!adjusted.approved);
            assert_eq!(adjusted.corrected_rate, Rate::from_percentage(20));
            assert_eq!(
                adjusted.reason.unwrap().to_string(),
                "credit score very low; interest rate adjusted to 20%"
            );
        }
    }

    #[test]
    fn test_score_too_low() {
        for score in [0, 10] {
            let outcome = decide(score, Rate::from_percentage(24));
            assert!(!outcome.approved);
            assert_eq!(outcome.corrected_rate, Rate::from_percentage(24));
            assert_eq!(outcome.reason, Some(DecisionReason::ScoreTooLow));
        }
    }

    #[test]
    fn test_prior_reason_kept_when_rejected() {
        let outcome = ApprovalPolicy::default().decide(
            0,
            Rate::from_percentage(10),
            Some(DecisionReason::CurrentLoansExceedLimit),
        );
        assert!(!outcome.approved);
        assert_eq!(outcome.reason, Some(DecisionReason::CurrentLoansExceedLimit));
    }

    #[test]
    fn test_custom_tiers() {
        let mut config = PolicyConfig::standard();
        config.approve_above = 70;
        let policy = ApprovalPolicy::new(config);
        assert_eq!(policy.config().approve_above, 70);

        // 60 is now inside the low band
        let outcome = policy.decide(60, Rate::from_percentage(10), None);
        assert!(!outcome.approved);
        assert_eq!(outcome.corrected_rate, Rate::from_percentage(16));
    }
}
