/// quick start - minimal example to get started
use std::sync::Arc;

use credit_approval_rs::{
    EligibilityRequest, EligibilityService, InMemoryLedger, Money, NewCustomer, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // register a customer earning 70,000 a month
    let ledger = Arc::new(InMemoryLedger::new());
    let customer = ledger.register_customer(NewCustomer {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        phone_number: "9876543210".to_string(),
        age: 32,
        monthly_income: Money::from_major(70_000),
        approved_limit: None,
    })?;

    // ask for 50,000 at 10% over 12 months
    let service = EligibilityService::new(ledger);
    let request = EligibilityRequest::new(
        customer.customer_id,
        Money::from_major(50_000),
        Rate::from_percentage(10),
        12,
    );
    let decision = service.evaluate_eligibility(&request)?;

    // print the decision
    println!("decision for {}:", customer.full_name());
    println!("{}", decision.json());

    Ok(())
}
