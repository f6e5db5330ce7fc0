use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LedgerError, LedgerStore};
use crate::decimal::{Money, Rate};
use crate::types::{approved_limit_for_income, Customer, CustomerId, Loan, LoanId};

/// registration payload; the ledger assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: u8,
    pub monthly_income: Money,
    /// derived from income when absent
    pub approved_limit: Option<Money>,
}

/// loan creation payload; the ledger assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoan {
    pub customer_id: CustomerId,
    pub loan_amount: Money,
    pub interest_rate: Rate,
    pub tenure: u32,
    pub monthly_installment: Money,
    pub emis_paid_on_time: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// in-process ledger backed by ordered maps
#[derive(Debug)]
pub struct InMemoryLedger {
    customers: RwLock<BTreeMap<CustomerId, Customer>>,
    loans: RwLock<BTreeMap<LoanId, Loan>>,
    next_customer_id: AtomicU64,
    next_loan_id: AtomicU64,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(BTreeMap::new()),
            loans: RwLock::new(BTreeMap::new()),
            next_customer_id: AtomicU64::new(1),
            next_loan_id: AtomicU64::new(1),
        }
    }

    /// register a customer, assigning the next free id
    pub fn register_customer(&self, new: NewCustomer) -> Result<Customer, LedgerError> {
        let approved_limit = new
            .approved_limit
            .unwrap_or_else(|| approved_limit_for_income(new.monthly_income));

        let customer = Customer {
            customer_id: self.next_customer_id.fetch_add(1, Ordering::Relaxed),
            first_name: new.first_name,
            last_name: new.last_name,
            phone_number: new.phone_number,
            age: new.age,
            monthly_income: new.monthly_income,
            approved_limit,
            current_debt: Money::ZERO,
        };

        self.insert_customer(customer)
    }

    /// insert a customer with a caller-chosen id
    pub fn insert_customer(&self, customer: Customer) -> Result<Customer, LedgerError> {
        customer.validate()?;

        let mut customers = self.customers.write().map_err(poisoned)?;
        if customers.contains_key(&customer.customer_id) {
            return Err(LedgerError::CustomerConflict {
                customer_id: customer.customer_id,
            });
        }

        self.next_customer_id
            .fetch_max(customer.customer_id + 1, Ordering::Relaxed);
        customers.insert(customer.customer_id, customer.clone());

        debug!(customer_id = customer.customer_id, "customer stored");
        Ok(customer)
    }

    /// create a loan for an existing customer, assigning the next free id
    pub fn create_loan(&self, new: NewLoan) -> Result<Loan, LedgerError> {
        let loan = Loan {
            loan_id: self.next_loan_id.fetch_add(1, Ordering::Relaxed),
            customer_id: new.customer_id,
            loan_amount: new.loan_amount,
            interest_rate: new.interest_rate,
            tenure: new.tenure,
            monthly_installment: new.monthly_installment,
            emis_paid_on_time: new.emis_paid_on_time,
            start_date: new.start_date,
            end_date: new.end_date,
        };

        self.insert_loan(loan)
    }

    /// insert a loan with a caller-chosen id
    pub fn insert_loan(&self, loan: Loan) -> Result<Loan, LedgerError> {
        loan.validate()?;

        {
            let customers = self.customers.read().map_err(poisoned)?;
            if !customers.contains_key(&loan.customer_id) {
                return Err(LedgerError::UnknownCustomer {
                    customer_id: loan.customer_id,
                });
            }
        }

        let mut loans = self.loans.write().map_err(poisoned)?;
        if loans.contains_key(&loan.loan_id) {
            return Err(LedgerError::LoanConflict { loan_id: loan.loan_id });
        }

        self.next_loan_id.fetch_max(loan.loan_id + 1, Ordering::Relaxed);
        loans.insert(loan.loan_id, loan.clone());

        debug!(loan_id = loan.loan_id, customer_id = loan.customer_id, "loan stored");
        Ok(loan)
    }

    pub fn get_loan(&self, loan_id: LoanId) -> Result<Option<Loan>, LedgerError> {
        let loans = self.loans.read().map_err(poisoned)?;
        Ok(loans.get(&loan_id).cloned())
    }

    pub fn customer_count(&self) -> Result<usize, LedgerError> {
        Ok(self.customers.read().map_err(poisoned)?.len())
    }
}

impl LedgerStore for InMemoryLedger {
    fn get_customer(&self, customer_id: CustomerId) -> Result<Option<Customer>, LedgerError> {
        let customers = self.customers.read().map_err(poisoned)?;
        Ok(customers.get(&customer_id).cloned())
    }

    fn list_loans(&self, customer_id: CustomerId) -> Result<Vec<Loan>, LedgerError> {
        let loans = self.loans.read().map_err(poisoned)?;
        Ok(loans
            .values()
            .filter(|loan| loan.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> LedgerError {
    LedgerError::Unavailable("ledger lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registration(income: i64) -> NewCustomer {
        NewCustomer {
            first_name: "Ravi".to_string(),
            last_name: "Kumar".to_string(),
            phone_number: "9123456780".to_string(),
            age: 34,
            monthly_income: Money::from_major(income),
            approved_limit: None,
        }
    }

    fn new_loan(customer_id: CustomerId) -> NewLoan {
        NewLoan {
            customer_id,
            loan_amount: Money::from_major(100_000),
            interest_rate: Rate::from_percentage(12),
            tenure: 24,
            monthly_installment: Money::from_str_exact("4707.35").unwrap(),
            emis_paid_on_time: 1,
            start_date: date(2023, 1, 10),
            end_date: date(2025, 1, 10),
        }
    }

    #[test]
    fn test_register_assigns_ids_and_limit() {
        let ledger = InMemoryLedger::new();

        let first = ledger.register_customer(registration(70_000)).unwrap();
        let second = ledger.register_customer(registration(50_000)).unwrap();

        assert_eq!(first.customer_id, 1);
        assert_eq!(second.customer_id, 2);
        assert_eq!(first.approved_limit, Money::from_major(2_500_000));
        assert_eq!(first.current_debt, Money::ZERO);
        assert_eq!(ledger.customer_count().unwrap(), 2);
    }

    #[test]
    fn test_explicit_limit_is_kept() {
        let ledger = InMemoryLedger::new();
        let mut new = registration(70_000);
        new.approved_limit = Some(Money::from_major(100_000));

        let customer = ledger.register_customer(new).unwrap();
        assert_eq!(customer.approved_limit, Money::from_major(100_000));
    }

    #[test]
    fn test_register_rejects_underage() {
        let ledger = InMemoryLedger::new();
        let mut new = registration(70_000);
        new.age = 16;

        assert!(matches!(
            ledger.register_customer(new),
            Err(LedgerError::InvalidRecord { .. })
        ));
        assert_eq!(ledger.customer_count().unwrap(), 0);
    }

    #[test]
    fn test_insert_customer_conflict_and_sequence() {
        let ledger = InMemoryLedger::new();
        let mut customer = ledger.register_customer(registration(40_000)).unwrap();
        customer.customer_id = 300;
        ledger.insert_customer(customer.clone()).unwrap();

        assert!(matches!(
            ledger.insert_customer(customer),
            Err(LedgerError::CustomerConflict { customer_id: 300 })
        ));

        // sequence continues past imported ids
        let next = ledger.register_customer(registration(40_000)).unwrap();
        assert_eq!(next.customer_id, 301);
    }

    #[test]
    fn test_loans_are_listed_per_customer() {
        let ledger = InMemoryLedger::new();
        let a = ledger.register_customer(registration(70_000)).unwrap();
        let b = ledger.register_customer(registration(70_000)).unwrap();

        let loan = ledger.create_loan(new_loan(a.customer_id)).unwrap();
        ledger.create_loan(new_loan(a.customer_id)).unwrap();
        ledger.create_loan(new_loan(b.customer_id)).unwrap();

        assert_eq!(ledger.list_loans(a.customer_id).unwrap().len(), 2);
        assert_eq!(ledger.list_loans(b.customer_id).unwrap().len(), 1);
        assert!(ledger.list_loans(99).unwrap().is_empty());
        assert_eq!(ledger.get_loan(loan.loan_id).unwrap(), Some(loan));
        assert_eq!(ledger.get_loan(42).unwrap(), None);
    }

    #[test]
    fn test_loan_requires_known_customer() {
        let ledger = InMemoryLedger::new();
        assert!(matches!(
            ledger.create_loan(new_loan(7)),
            Err(LedgerError::UnknownCustomer { customer_id: 7 })
        ));
    }

    #[test]
    fn test_invalid_loan_rejected() {
        let ledger = InMemoryLedger::new();
        let customer = ledger.register_customer(registration(70_000)).unwrap();
        let mut bad = new_loan(customer.customer_id);
        bad.loan_amount = Money::from_major(-5);

        assert!(matches!(
            ledger.create_loan(bad),
            Err(LedgerError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_missing_customer_is_none() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.get_customer(999_999).unwrap().is_none());
    }
}
