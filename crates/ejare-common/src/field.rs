use std::fmt;

/// One of the six input fields the presentation layer collects.
///
/// `name()` returns the wire name used by snapshot files and bindings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    LastYearRent,
    LastYearMortgage,
    NextYearMortgage,
    EffectiveRate,
    NextYearRent,
    RentIncreasePercent,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Self::LastYearRent,
        Self::LastYearMortgage,
        Self::NextYearMortgage,
        Self::EffectiveRate,
        Self::NextYearRent,
        Self::RentIncreasePercent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::LastYearRent => "lastYearRent",
            Self::LastYearMortgage => "lastYearMortgage",
            Self::NextYearMortgage => "nextYearMortgage",
            Self::EffectiveRate => "effectiveRate",
            Self::NextYearRent => "nextYearRent",
            Self::RentIncreasePercent => "rentIncreasePercent",
        }
    }

    /// Accepts the camelCase wire name or its kebab/snake spelling.
    pub fn parse(s: &str) -> Option<Self> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|f| f.name().to_ascii_lowercase() == folded)
    }

    /// The two fields that select the calculation direction.
    pub fn is_mode_selector(&self) -> bool {
        matches!(self, Self::NextYearRent | Self::RentIncreasePercent)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
