/// dispatch - hand submitted applications to a background queue
use std::sync::Arc;

use credit_approval_rs::{
    ApplicationDispatcher, EligibilityRequest, EligibilityService, InMemoryLedger, LogDispatcher,
    Money, NewCustomer, QueueDispatcher, Rate,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ledger = Arc::new(InMemoryLedger::new());
    let mut ids = Vec::new();
    for (first, income) in [("Isha", 70_000), ("Arjun", 40_000), ("Maya", 120_000)] {
        let customer = ledger.register_customer(NewCustomer {
            first_name: first.to_string(),
            last_name: "Demo".to_string(),
            phone_number: "9000012345".to_string(),
            age: 30,
            monthly_income: Money::from_major(income),
            approved_limit: None,
        })?;
        ids.push(customer.customer_id);
    }

    let queue = Arc::new(QueueDispatcher::new());
    let service = EligibilityService::new(ledger).with_dispatcher(queue.clone());

    for id in &ids {
        let request =
            EligibilityRequest::new(*id, Money::from_major(300_000), Rate::from_percentage(10), 24);
        let decision = service.submit_application(&request)?;
        println!(
            "customer {} approved {} EMI {}",
            id, decision.approval, decision.monthly_installment
        );
    }

    // a worker drains the queue
    println!("\n{} applications queued", queue.len());
    let worker = LogDispatcher;
    for application in queue.drain() {
        worker.dispatch(application);
    }

    Ok(())
}
