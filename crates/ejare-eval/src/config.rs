#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What `ByIncreasePercent` does when the previous total rent is not positive.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ZeroBasePolicy {
    /// Scale the (zero or negative) base like any other; 0 stays 0 and the
    /// negative-rent check decides the outcome.
    #[default]
    Scale,
    /// Fail with `ZeroBaseRent`, same as `ByNextRent`.
    Reject,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalcConfig {
    pub zero_base_policy: ZeroBasePolicy,
}

impl CalcConfig {
    /// Zero base in `ByIncreasePercent` is scaled, not rejected.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Both modes refuse a non-positive previous total rent.
    pub fn strict() -> Self {
        Self {
            zero_base_policy: ZeroBasePolicy::Reject,
        }
    }
}
