use ejare_common::{
    CalcError, Calculation, CalculationMode, CalculationResult, NormalizedInputs, RawInputs, Solved,
};
use ejare_parse::normalize_inputs;

use crate::config::{CalcConfig, ZeroBasePolicy};
use crate::conversion::DepositConversion;
use crate::mode::detect_mode;

/// Holds configuration; carries no state between calls.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Normalize a raw snapshot, pick the mode and reconcile.
    pub fn calculate(&self, raw: &RawInputs) -> CalculationResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("calculate").entered();

        let inputs = normalize_inputs(raw);
        let mode = detect_mode(raw);

        #[cfg(feature = "tracing")]
        tracing::debug!(%mode, rate = ?inputs.rate_percent, "normalized_inputs");

        let result = calculate_normalized(&inputs, mode, &self.config);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(calc) => tracing::debug!(
                    previous_total = calc.previous_total_rent,
                    next_total = calc.next_total_rent,
                    solved = calc.solved.value(),
                    "calculation_ok"
                ),
                Err(err) => tracing::debug!(error = %err, "calculation_failed"),
            }
        }

        result
    }
}

/// Calculate with the default configuration.
pub fn calculate(raw: &RawInputs) -> CalculationResult {
    Calculator::default().calculate(raw)
}

/// Reconcile already-normalized inputs in the given mode.
///
/// The rate is checked first; an invalid rate wins over any mode problem.
pub fn calculate_normalized(
    inputs: &NormalizedInputs,
    mode: CalculationMode,
    config: &CalcConfig,
) -> CalculationResult {
    let Some(rate_percent) = inputs.rate_percent.filter(|r| r / 100.0 > 0.0) else {
        return Err(CalcError::new_invalid_base()
            .with_message("effective rate must be a number greater than zero"));
    };

    let conversion = DepositConversion::from_annual_percent(rate_percent);
    let previous_deposit_equivalent = conversion.rent_equivalent(inputs.previous_deposit);
    let next_deposit_equivalent = conversion.rent_equivalent(inputs.next_deposit);
    let previous_total_rent = inputs.previous_rent + previous_deposit_equivalent;

    match mode {
        CalculationMode::Ambiguous => Err(CalcError::new_ambiguous()
            .with_message("enter either next rent or increase percent, not both")),
        CalculationMode::Incomplete => Err(CalcError::new_incomplete()
            .with_message("enter either next rent or increase percent")),
        CalculationMode::ByNextRent => {
            let next_total_rent = inputs.next_rent + next_deposit_equivalent;
            if previous_total_rent <= 0.0 {
                return Err(zero_base_error());
            }
            let increase_percent =
                (next_total_rent - previous_total_rent) / previous_total_rent * 100.0;
            ensure_finite(&[
                previous_deposit_equivalent,
                previous_total_rent,
                next_deposit_equivalent,
                next_total_rent,
                increase_percent,
            ])?;
            Ok(Calculation {
                previous_deposit_equivalent,
                previous_total_rent,
                next_deposit_equivalent,
                next_total_rent,
                solved: Solved::IncreasePercent(increase_percent),
            })
        }
        CalculationMode::ByIncreasePercent => {
            if previous_total_rent <= 0.0 && config.zero_base_policy == ZeroBasePolicy::Reject {
                return Err(zero_base_error());
            }
            let next_total_rent = previous_total_rent * (1.0 + inputs.increase_percent / 100.0);
            let next_rent = next_total_rent - next_deposit_equivalent;
            ensure_finite(&[
                previous_deposit_equivalent,
                previous_total_rent,
                next_deposit_equivalent,
                next_total_rent,
                next_rent,
            ])?;
            if next_rent < 0.0 {
                return Err(CalcError::new_negative_rent(next_rent, inputs.deposit_delta())
                    .with_message("required next rent is negative"));
            }
            Ok(Calculation {
                previous_deposit_equivalent,
                previous_total_rent,
                next_deposit_equivalent,
                next_total_rent,
                solved: Solved::NextRent(next_rent),
            })
        }
    }
}

/// Every reported figure must be finite; overflow in any of them is an error.
fn ensure_finite(figures: &[f64]) -> Result<(), CalcError> {
    if figures.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CalcError::new_overflow().with_message("amounts too large to calculate with"))
    }
}

fn zero_base_error() -> CalcError {
    CalcError::new_zero_base().with_message("previous total rent must be greater than zero")
}
