//! serialization support for eligibility decisions
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::decision::EligibilityDecision;
use crate::types::CustomerId;

/// response body for an eligibility check
///
/// rates are rendered as percentages. when the new installment breached the
/// income ceiling only approval, reason and installment are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionView {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub customer_id: Option<CustomerId>,
    pub approval: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub corrected_interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tenure: Option<u32>,
    pub monthly_installment: Money,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub credit_score: Option<u8>,
    pub reason: String,
}

impl DecisionView {
    pub fn from_decision(decision: &EligibilityDecision) -> Self {
        if decision.hit_emi_ceiling() {
            return DecisionView {
                customer_id: None,
                approval: decision.approval,
                interest_rate: None,
                corrected_interest_rate: None,
                tenure: None,
                monthly_installment: decision.monthly_installment,
                credit_score: None,
                reason: decision.reason_text(),
            };
        }

        DecisionView {
            customer_id: Some(decision.customer_id),
            approval: decision.approval,
            interest_rate: Some(decision.interest_rate.as_percentage()),
            corrected_interest_rate: Some(decision.corrected_interest_rate.as_percentage()),
            tenure: Some(decision.tenure),
            monthly_installment: decision.monthly_installment,
            credit_score: Some(decision.credit_score),
            reason: decision.reason_text(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::decision::DecisionReason;
    use serde_json::Value;

    fn decision() -> EligibilityDecision {
        EligibilityDecision {
            customer_id: 7,
            approval: false,
            interest_rate: Rate::from_percentage(10),
            corrected_interest_rate: Rate::from_percentage(16),
            tenure: 12,
            monthly_installment: Money::from_str_exact("4536.54").unwrap(),
            credit_score: 42,
            reason: Some(DecisionReason::RateAdjusted {
                label: "low".to_string(),
                rate: Rate::from_percentage(16),
            }),
        }
    }

    #[test]
    fn test_full_view() {
        let json: Value = serde_json::from_str(&decision().json()).unwrap();

        assert_eq!(json["customer_id"], 7);
        assert_eq!(json["approval"], false);
        assert_eq!(json["interest_rate"], "10");
        assert_eq!(json["corrected_interest_rate"], "16");
        assert_eq!(json["tenure"], 12);
        assert_eq!(json["monthly_installment"], "4536.54");
        assert_eq!(json["credit_score"], 42);
        assert_eq!(json["reason"], "credit score low; interest rate adjusted to 16%");
    }

    #[test]
    fn test_ceiling_view_is_reduced() {
        let mut d = decision();
        d.monthly_installment = Money::from_major(40_000);
        d.reason = Some(DecisionReason::EmiExceedsIncome { ceiling: Rate::from_percentage(50) });

        let view = DecisionView::from_decision(&d);
        let json: Value = serde_json::from_str(&view.to_json()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(json["approval"], false);
        assert_eq!(json["reason"], "EMI exceeds 50% of income");
        assert_eq!(json["monthly_installment"], "40000");
    }

    #[test]
    fn test_view_parses_back() {
        let view = DecisionView::from_decision(&decision());
        let parsed: DecisionView = serde_json::from_str(&view.to_json()).unwrap();
        assert_eq!(parsed, view);
    }
}
