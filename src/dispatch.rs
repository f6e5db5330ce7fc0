use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::decision::EligibilityDecision;
use crate::types::CustomerId;

/// message handed to background processing after a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub application_id: Uuid,
    pub customer_id: CustomerId,
    pub loan_amount: Money,
    pub interest_rate: Rate,
    pub tenure: u32,
    pub monthly_installment: Money,
    pub approved: bool,
    pub submitted_at: DateTime<Utc>,
}

impl CreditApplication {
    pub fn from_decision(
        decision: &EligibilityDecision,
        loan_amount: Money,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            application_id: Uuid::new_v4(),
            customer_id: decision.customer_id,
            loan_amount,
            interest_rate: decision.corrected_interest_rate,
            tenure: decision.tenure,
            monthly_installment: decision.monthly_installment,
            approved: decision.approval,
            submitted_at,
        }
    }
}

/// one-way sink for credit applications; nothing is returned to the caller
pub trait ApplicationDispatcher: Send + Sync {
    fn dispatch(&self, application: CreditApplication);
}

/// logs each application and drops it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDispatcher;

impl ApplicationDispatcher for LogDispatcher {
    fn dispatch(&self, application: CreditApplication) {
        info!(
            application_id = %application.application_id,
            customer_id = application.customer_id,
            approved = application.approved,
            "processing credit application"
        );
    }
}

/// in-process FIFO queue drained by a worker
#[derive(Debug, Default)]
pub struct QueueDispatcher {
    queue: Mutex<VecDeque<CreditApplication>>,
}

impl QueueDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// take every queued application, oldest first
    pub fn drain(&self) -> Vec<CreditApplication> {
        match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl ApplicationDispatcher for QueueDispatcher {
    fn dispatch(&self, application: CreditApplication) {
        match self.queue.lock() {
            Ok(mut queue) => queue.push_back(application),
            Err(_) => warn!(
                application_id = %application.application_id,
                "application queue poisoned, dropping application"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn decision(customer_id: CustomerId) -> EligibilityDecision {
        EligibilityDecision {
            customer_id,
            approval: true,
            interest_rate: Rate::from_percentage(10),
            corrected_interest_rate: Rate::from_percentage(10),
            tenure: 12,
            monthly_installment: Money::from_str_exact("4395.79").unwrap(),
            credit_score: 90,
            reason: None,
        }
    }

    #[test]
    fn test_application_from_decision() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let app = CreditApplication::from_decision(&decision(3), Money::from_major(50_000), at);

        assert_eq!(app.customer_id, 3);
        assert_eq!(app.loan_amount, Money::from_major(50_000));
        assert_eq!(app.interest_rate, Rate::from_percentage(10));
        assert!(app.approved);
        assert_eq!(app.submitted_at, at);
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue = QueueDispatcher::new();
        let at = Utc::now();
        for id in 1..=3 {
            let amount = Money::from_major(1_000);
            queue.dispatch(CreditApplication::from_decision(&decision(id), amount, at));
        }

        assert_eq!(queue.len(), 3);
        let drained = queue.drain();
        assert_eq!(drained.iter().map(|a| a.customer_id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_application_ids_are_unique() {
        let at = Utc::now();
        let a = CreditApplication::from_decision(&decision(1), Money::from_major(1_000), at);
        let b = CreditApplication::from_decision(&decision(1), Money::from_major(1_000), at);
        assert_ne!(a.application_id, b.application_id);
    }

    #[test]
    fn test_log_dispatcher_accepts_messages() {
        LogDispatcher.dispatch(CreditApplication::from_decision(
            &decision(1),
            Money::from_major(1_000),
            Utc::now(),
        ));
    }
}
