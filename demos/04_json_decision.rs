/// json decision - response bodies for approved, capped and rejected requests
use std::sync::Arc;

use credit_approval_rs::{
    EligibilityError, EligibilityRequest, EligibilityService, InMemoryLedger, Money, NewCustomer,
    Rate,
};

fn request(customer_id: u64, amount: i64, rate: u32) -> EligibilityRequest {
    EligibilityRequest::new(customer_id, Money::from_major(amount), Rate::from_percentage(rate), 12)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ledger = Arc::new(InMemoryLedger::new());
    let customer = ledger.register_customer(NewCustomer {
        first_name: "Tara".to_string(),
        last_name: "Singh".to_string(),
        phone_number: "9988776655".to_string(),
        age: 45,
        monthly_income: Money::from_major(70_000),
        approved_limit: Some(Money::from_major(5_000_000)),
    })?;
    let id = customer.customer_id;
    let service = EligibilityService::new(ledger);

    println!("--- approved ---");
    println!("{}", service.evaluate_eligibility(&request(id, 50_000, 10))?.json());

    println!("\n--- installment above half of income ---");
    println!("{}", service.evaluate_eligibility(&request(id, 1_000_000, 16))?.json());

    println!("\n--- unknown customer ---");
    match service.evaluate_eligibility(&request(999_999, 50_000, 10)) {
        Err(e @ EligibilityError::CustomerNotFound { .. }) => println!("error: {}", e),
        other => println!("unexpected: {:?}", other),
    }

    println!("\n--- invalid amount ---");
    if let Err(e) = service.evaluate_eligibility(&request(id, -1_000, 10)) {
        println!("error: {} (client error: {})", e, e.is_client_error());
    }

    Ok(())
}
