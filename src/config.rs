use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{EligibilityError, Result};

/// eligibility configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub scoring: ScoringConfig,
    pub policy: PolicyConfig,
    /// ceiling on the new loan's EMI as a share of monthly income
    pub emi_income_ceiling: Rate,
}

/// credit score weights and overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// points awarded at a 100% on-time ratio
    pub on_time_weight: Decimal,
    /// points scaled by 1 / (loan count + 1)
    pub loan_count_weight: Decimal,
    /// bonus when any loan started in the current year
    pub current_year_bonus: Decimal,
    /// bonus when the approved limit exceeds all lending to date
    pub limit_headroom_bonus: Decimal,
    pub max_score: u8,
    /// ceiling on running EMIs as a share of monthly income
    pub existing_emi_ceiling: Rate,
}

/// tiered approval policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// scores strictly above this are approved at the requested rate
    pub approve_above: u8,
    /// rate tiers, highest score floor first
    pub tiers: Vec<RateTier>,
}

/// a score band that approves only above a minimum requested rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// band covers scores strictly above this floor
    pub score_above: u8,
    /// requested rates strictly above this are approved unchanged
    pub minimum_rate: Rate,
    /// rate substituted when the requested rate is too low
    pub adjusted_rate: Rate,
    /// wording used in the adjustment reason ("low", "very low")
    pub label: String,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl EligibilityConfig {
    /// standard retail lending configuration
    pub fn standard() -> Self {
        Self {
            scoring: ScoringConfig::standard(),
            policy: PolicyConfig::standard(),
            emi_income_ceiling: Rate::from_percentage(50),
        }
    }

    /// parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EligibilityConfig =
            serde_json::from_str(json).map_err(|e| EligibilityError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.policy.validate()?;
        validate_ceiling("emi_income_ceiling", self.emi_income_ceiling)
    }
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            on_time_weight: dec!(50),
            loan_count_weight: dec!(30),
            current_year_bonus: dec!(10),
            limit_headroom_bonus: dec!(10),
            max_score: 100,
            existing_emi_ceiling: Rate::from_percentage(50),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("on_time_weight", self.on_time_weight),
            ("loan_count_weight", self.loan_count_weight),
            ("current_year_bonus", self.current_year_bonus),
            ("limit_headroom_bonus", self.limit_headroom_bonus),
        ];
        for (name, weight) in weights {
            if weight.is_sign_negative() {
                return Err(EligibilityError::InvalidConfiguration {
                    message: format!("{} must not be negative, got {}", name, weight),
                });
            }
        }

        if self.max_score == 0 || self.max_score > 100 {
            return Err(EligibilityError::InvalidConfiguration {
                message: format!("max_score must be within 1..=100, got {}", self.max_score),
            });
        }

        validate_ceiling("existing_emi_ceiling", self.existing_emi_ceiling)
    }
}

impl PolicyConfig {
    pub fn standard() -> Self {
        Self {
            approve_above: 50,
            tiers: vec![
                RateTier {
                    score_above: 30,
                    minimum_rate: Rate::from_percentage(12),
                    adjusted_rate: Rate::from_percentage(16),
                    label: "low".to_string(),
                },
                RateTier {
                    score_above: 10,
                    minimum_rate: Rate::from_percentage(16),
                    adjusted_rate: Rate::from_percentage(20),
                    label: "very low".to_string(),
                },
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut ceiling = self.approve_above;
        for tier in &self.tiers {
            if tier.score_above >= ceiling {
                return Err(EligibilityError::InvalidConfiguration {
                    message: format!(
                        "tier floor {} must be below the band above it ({})",
                        tier.score_above, ceiling
                    ),
                });
            }
            if !tier.adjusted_rate.is_positive() {
                return Err(EligibilityError::InvalidConfiguration {
                    message: format!("adjusted rate must be positive, got {}", tier.adjusted_rate),
                });
            }
            ceiling = tier.score_above;
        }
        Ok(())
    }
}

fn validate_ceiling(name: &str, ceiling: Rate) -> Result<()> {
    if !ceiling.is_positive() || ceiling > Rate::ONE {
        return Err(EligibilityError::InvalidConfiguration {
            message: format!("{} must be within (0%, 100%], got {}", name, ceiling),
        });
    }
    Ok(())
}
