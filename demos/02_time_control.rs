/// time control - deterministic evaluation with controlled time
use std::sync::Arc;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use credit_approval_rs::{
    EligibilityRequest, EligibilityService, InMemoryLedger, Money, NewCustomer, NewLoan, Rate,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let ledger = Arc::new(InMemoryLedger::new());
    let customer = ledger.register_customer(NewCustomer {
        first_name: "Nila".to_string(),
        last_name: "Menon".to_string(),
        phone_number: "9123456780".to_string(),
        age: 29,
        monthly_income: Money::from_major(70_000),
        approved_limit: None,
    })?;

    // a running loan whose EMI takes more than half of income
    ledger.create_loan(NewLoan {
        customer_id: customer.customer_id,
        loan_amount: Money::from_major(400_000),
        interest_rate: Rate::from_percentage(12),
        tenure: 12,
        monthly_installment: Money::from_major(36_000),
        emis_paid_on_time: 1,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("bad date")?,
        end_date: NaiveDate::from_ymd_opt(2025, 12, 31).ok_or("bad date")?,
    })?;

    let service = EligibilityService::new(ledger);
    let request = EligibilityRequest::new(
        customer.customer_id,
        Money::from_major(50_000),
        Rate::from_percentage(10),
        12,
    );

    let decision = service.evaluate_eligibility_with_time(&request, &time)?;
    println!("on {}:", time.now().format("%Y-%m-%d"));
    println!(
        "  score {} approved {} ({})",
        decision.credit_score,
        decision.approval,
        decision.reason_text()
    );

    // the running loan closes and stops counting against income
    controller.advance(Duration::days(240));

    let decision = service.evaluate_eligibility_with_time(&request, &time)?;
    println!("\non {}:", time.now().format("%Y-%m-%d"));
    println!(
        "  score {} approved {} EMI {}",
        decision.credit_score, decision.approval, decision.monthly_installment
    );

    Ok(())
}
