/// basic usage - customers with loan history across score bands
use std::sync::Arc;

use chrono::NaiveDate;
use credit_approval_rs::{
    EligibilityRequest, EligibilityService, InMemoryLedger, Money, NewCustomer, NewLoan, Rate,
};

fn customer(
    ledger: &InMemoryLedger,
    first: &str,
    income: i64,
) -> Result<u64, Box<dyn std::error::Error>> {
    let customer = ledger.register_customer(NewCustomer {
        first_name: first.to_string(),
        last_name: "Sample".to_string(),
        phone_number: "9000000000".to_string(),
        age: 35,
        monthly_income: Money::from_major(income),
        approved_limit: None,
    })?;
    Ok(customer.customer_id)
}

fn closed_loan(
    ledger: &InMemoryLedger,
    customer_id: u64,
    amount: i64,
    on_time: u32,
    year: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    ledger.create_loan(NewLoan {
        customer_id,
        loan_amount: Money::from_major(amount),
        interest_rate: Rate::from_percentage(12),
        tenure: 12,
        monthly_installment: Money::from_major(amount / 11),
        emis_paid_on_time: on_time,
        start_date: NaiveDate::from_ymd_opt(year, 1, 1).ok_or("bad date")?,
        end_date: NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or("bad date")?,
    })?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== basic usage ===\n");

    let ledger = Arc::new(InMemoryLedger::new());

    // spotless record
    let good = customer(&ledger, "Kiran", 90_000)?;
    closed_loan(&ledger, good, 200_000, 1, 2021)?;

    // one of two loans paid on time
    let mixed = customer(&ledger, "Dev", 70_000)?;
    closed_loan(&ledger, mixed, 100_000, 1, 2021)?;
    closed_loan(&ledger, mixed, 100_000, 0, 2022)?;

    // never paid on time
    let poor = customer(&ledger, "Ravi", 60_000)?;
    closed_loan(&ledger, poor, 100_000, 0, 2022)?;

    let service = EligibilityService::new(ledger);

    for (label, id) in [("good", good), ("mixed", mixed), ("poor", poor)] {
        let request =
            EligibilityRequest::new(id, Money::from_major(150_000), Rate::from_percentage(11), 24);
        let decision = service.evaluate_eligibility(&request)?;

        println!("{} history (customer {}):", label, id);
        println!("  credit score:   {}", decision.credit_score);
        println!("  approved:       {}", decision.approval);
        println!("  requested rate: {}", decision.interest_rate);
        println!("  applied rate:   {}", decision.corrected_interest_rate);
        println!("  monthly EMI:    {}", decision.monthly_installment);
        if let Some(reason) = &decision.reason {
            println!("  reason:         {}", reason);
        }
        println!();
    }

    Ok(())
}
