use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::history::LoanHistorySnapshot;
use super::CreditScore;
use crate::config::ScoringConfig;
use crate::decision::DecisionReason;
use crate::types::Customer;

/// hard upper bound, whatever the configuration says
const MAX_SCORE: u8 = 100;

/// computes the 0-100 credit score from a customer's loan history
#[derive(Debug, Clone)]
pub struct CreditScorer {
    config: ScoringConfig,
}

impl Default for CreditScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::standard())
    }
}

impl CreditScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, customer: &Customer, history: &LoanHistorySnapshot) -> CreditScore {
        let mut result = if history.active_volume > customer.approved_limit {
            CreditScore {
                value: 0,
                reason: Some(DecisionReason::CurrentLoansExceedLimit),
            }
        } else {
            CreditScore {
                value: self.weighted_score(customer, history),
                reason: None,
            }
        };

        // running EMIs override everything above
        if history
            .active_emi_total
            .exceeds_share_of(customer.monthly_income, self.config.existing_emi_ceiling)
        {
            result = CreditScore {
                value: 0,
                reason: Some(DecisionReason::ExistingEmisExceedIncome {
                    ceiling: self.config.existing_emi_ceiling,
                }),
            };
        }

        debug!(
            customer_id = customer.customer_id,
            loans = history.loan_count,
            score = result.value,
            "credit score computed"
        );

        result
    }

    fn weighted_score(&self, customer: &Customer, history: &LoanHistorySnapshot) -> u8 {
        let cfg = &self.config;

        let mut raw = history.on_time_ratio() * cfg.on_time_weight
            + cfg.loan_count_weight / Decimal::from(history.loan_count + 1);

        if history.started_this_year > 0 {
            raw += cfg.current_year_bonus;
        }
        if customer.approved_limit > history.total_volume {
            raw += cfg.limit_headroom_bonus;
        }

        let cap = cfg.max_score.min(MAX_SCORE);
        let capped = raw.min(Decimal::from(cap)).floor();
        capped.to_u8().unwrap_or(0)
    }
}
