/// policy tiers - how score bands treat requested rates
use credit_approval_rs::{calculate_emi, ApprovalPolicy, EligibilityConfig, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== approval policy ===\n");

    let policy = ApprovalPolicy::default();
    let principal = Money::from_major(200_000);

    for score in [90, 45, 25, 5] {
        for percent in [10, 14, 18] {
            let rate = Rate::from_percentage(percent);
            let outcome = policy.decide(score, rate, None);
            let emi = calculate_emi(principal, outcome.corrected_rate, 12)?;
            println!(
                "score {:>3} requested {:>4} -> approved {:<5} rate {:>4} EMI {}",
                score, rate, outcome.approved, outcome.corrected_rate, emi
            );
        }
    }

    // a stricter configuration loaded from JSON
    let json = r#"{
        "scoring": {
            "on_time_weight": "50",
            "loan_count_weight": "30",
            "current_year_bonus": "10",
            "limit_headroom_bonus": "10",
            "max_score": 100,
            "existing_emi_ceiling": "0.4"
        },
        "policy": {
            "approve_above": 70,
            "tiers": [
                {
                    "score_above": 40,
                    "minimum_rate": "0.13",
                    "adjusted_rate": "0.17",
                    "label": "low"
                },
                {
                    "score_above": 20,
                    "minimum_rate": "0.17",
                    "adjusted_rate": "0.22",
                    "label": "very low"
                }
            ]
        },
        "emi_income_ceiling": "0.4"
    }"#;
    let config = EligibilityConfig::from_json(json)?;
    let strict = ApprovalPolicy::new(config.policy);

    println!("\nstricter policy:");
    let outcome = strict.decide(60, Rate::from_percentage(12), None);
    println!("score 60 at 12% -> approved {} rate {}", outcome.approved, outcome.corrected_rate);
    if let Some(reason) = outcome.reason {
        println!("reason: {}", reason);
    }

    Ok(())
}
