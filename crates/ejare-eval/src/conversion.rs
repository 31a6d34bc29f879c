//! Deposit-to-rent conversion.
//!
//! A held deposit costs the tenant the interest it could have earned. At an
//! effective annual rate `r`, that opportunity cost is `deposit * r / 12`
//! per month, and this is the amount that stands in for cash rent. The
//! deposit itself is never amortized or returned in this model.

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly conversion factor derived from an annual percent rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DepositConversion {
    monthly_factor: f64,
}

impl DepositConversion {
    /// `rate_percent` is in percent form: `20.0` means 20%.
    pub fn from_annual_percent(rate_percent: f64) -> Self {
        Self {
            monthly_factor: rate_percent / 100.0 / MONTHS_PER_YEAR,
        }
    }

    pub fn monthly_factor(&self) -> f64 {
        self.monthly_factor
    }

    /// Imputed monthly rent value of holding `deposit`.
    pub fn rent_equivalent(&self, deposit: f64) -> f64 {
        deposit * self.monthly_factor
    }
}
