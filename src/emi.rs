use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{EligibilityError, Result};

/// calculate the equated monthly installment, rounded to 2 decimal places
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1) with r the monthly rate;
/// a zero rate spreads the principal evenly over the tenure.
pub fn calculate_emi(principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<Money> {
    if tenure_months == 0 {
        return Err(EligibilityError::CalculationError {
            message: "tenure must be at least one month".to_string(),
        });
    }
    if annual_rate.is_negative() {
        return Err(EligibilityError::CalculationError {
            message: format!("negative interest rate {}", annual_rate),
        });
    }

    let p = principal.as_decimal();
    let n = Decimal::from(tenure_months);
    let r = annual_rate.monthly_rate().as_decimal();

    if r.is_zero() {
        return Ok(Money::from_decimal(p / n));
    }

    let compound = (Decimal::ONE + r)
        .checked_powu(u64::from(tenure_months))
        .ok_or_else(|| overflow(tenure_months))?;

    let denominator = compound - Decimal::ONE;
    let emi = p
        .checked_mul(r)
        .and_then(|x| x.checked_mul(compound))
        .and_then(|x| x.checked_div(denominator))
        .ok_or_else(|| EligibilityError::CalculationError {
            message: format!(
                "installment for {} at {} over {} months is not representable",
                principal, annual_rate, tenure_months
            ),
        })?;

    Ok(Money::from_decimal(emi))
}

fn overflow(tenure_months: u32) -> EligibilityError {
    EligibilityError::CalculationError {
        message: format!("compounding overflowed over {} months", tenure_months),
    }
}
