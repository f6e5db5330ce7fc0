use std::sync::Arc;

use hourglass_rs::{SafeTimeProvider, TimeSource};
use tracing::{debug, info};

use crate::config::EligibilityConfig;
use crate::decimal::Rate;
use crate::decision::{DecisionReason, EligibilityDecision, EligibilityRequest};
use crate::dispatch::{ApplicationDispatcher, CreditApplication};
use crate::emi::calculate_emi;
use crate::errors::{EligibilityError, Result};
use crate::ledger::LedgerStore;
use crate::policy::ApprovalPolicy;
use crate::scoring::{CreditScorer, LoanHistorySnapshot};

/// composes scoring, approval policy and installment math over a ledger
///
/// evaluation only reads from the ledger; one instance can serve concurrent
/// requests.
pub struct EligibilityService<L> {
    ledger: Arc<L>,
    scorer: CreditScorer,
    policy: ApprovalPolicy,
    emi_income_ceiling: Rate,
    dispatcher: Option<Arc<dyn ApplicationDispatcher>>,
}

impl<L: LedgerStore> EligibilityService<L> {
    /// create with the standard configuration
    pub fn new(ledger: Arc<L>) -> Self {
        let config = EligibilityConfig::standard();
        Self {
            ledger,
            scorer: CreditScorer::new(config.scoring),
            policy: ApprovalPolicy::new(config.policy),
            emi_income_ceiling: config.emi_income_ceiling,
            dispatcher: None,
        }
    }

    /// create with a custom configuration, rejecting invalid ones
    pub fn with_config(ledger: Arc<L>, config: EligibilityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ledger,
            scorer: CreditScorer::new(config.scoring),
            policy: ApprovalPolicy::new(config.policy),
            emi_income_ceiling: config.emi_income_ceiling,
            dispatcher: None,
        })
    }

    /// attach a sink for submitted applications
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn ApplicationDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    /// evaluate against system time
    pub fn evaluate_eligibility(
        &self,
        request: &EligibilityRequest,
    ) -> Result<EligibilityDecision> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.evaluate_eligibility_with_time(request, &time)
    }

    /// evaluate with an explicit clock
    pub fn evaluate_eligibility_with_time(
        &self,
        request: &EligibilityRequest,
        time: &SafeTimeProvider,
    ) -> Result<EligibilityDecision> {
        debug!(
            customer_id = request.customer_id,
            amount = %request.loan_amount,
            rate = %request.interest_rate,
            tenure = request.tenure,
            "evaluating eligibility"
        );
        request.validate()?;

        let customer = self
            .ledger
            .get_customer(request.customer_id)?
            .ok_or(EligibilityError::CustomerNotFound {
                customer_id: request.customer_id,
            })?;
        let loans = self.ledger.list_loans(request.customer_id)?;

        let today = time.now().date_naive();
        let history = LoanHistorySnapshot::from_loans(&loans, today);
        let score = self.scorer.score(&customer, &history);

        let outcome = self
            .policy
            .decide(score.value, request.interest_rate, score.reason);
        debug!(
            customer_id = request.customer_id,
            approved = outcome.approved,
            corrected_rate = %outcome.corrected_rate,
            "approval policy applied"
        );

        let monthly_installment =
            calculate_emi(request.loan_amount, outcome.corrected_rate, request.tenure)?;

        let mut decision = EligibilityDecision {
            customer_id: request.customer_id,
            approval: outcome.approved,
            interest_rate: request.interest_rate,
            corrected_interest_rate: outcome.corrected_rate,
            tenure: request.tenure,
            monthly_installment,
            credit_score: score.value,
            reason: outcome.reason,
        };

        // hard ceiling, independent of score and policy
        if monthly_installment.exceeds_share_of(customer.monthly_income, self.emi_income_ceiling) {
            info!(
                customer_id = request.customer_id,
                emi = %monthly_installment,
                income = %customer.monthly_income,
                ceiling = %self.emi_income_ceiling,
                "installment exceeds income ceiling"
            );
            decision.approval = false;
            decision.reason = Some(DecisionReason::EmiExceedsIncome {
                ceiling: self.emi_income_ceiling,
            });
            return Ok(decision);
        }

        info!(
            customer_id = request.customer_id,
            score = decision.credit_score,
            approved = decision.approval,
            "eligibility evaluated"
        );

        Ok(decision)
    }

    /// evaluate against system time and hand the application to the dispatcher
    pub fn submit_application(
        &self,
        request: &EligibilityRequest,
    ) -> Result<EligibilityDecision> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.submit_application_with_time(request, &time)
    }

    /// evaluate with an explicit clock and hand the application to the dispatcher
    pub fn submit_application_with_time(
        &self,
        request: &EligibilityRequest,
        time: &SafeTimeProvider,
    ) -> Result<EligibilityDecision> {
        let decision = self.evaluate_eligibility_with_time(request, time)?;

        if let Some(dispatcher) = &self.dispatcher {
            let application =
                CreditApplication::from_decision(&decision, request.loan_amount, time.now());
            debug!(
                application_id = %application.application_id,
                "dispatching credit application"
            );
            dispatcher.dispatch(application);
        }

        Ok(decision)
    }
}
