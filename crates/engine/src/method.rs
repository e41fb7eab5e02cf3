use crate::EngineError;

/// The closed set of places a saving can be attributed to.
///
/// The canonical string (`as_str`) is what gets stored and what users see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SavingMethod {
    #[default]
    MutualFund,
    Stock,
    SavingAccount,
    Cash,
}

impl SavingMethod {
    pub const ALL: [SavingMethod; 4] = [
        SavingMethod::MutualFund,
        SavingMethod::Stock,
        SavingMethod::SavingAccount,
        SavingMethod::Cash,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MutualFund => "Mutual Fund",
            Self::Stock => "Stock",
            Self::SavingAccount => "Saving Account",
            Self::Cash => "Cash",
        }
    }
}

impl core::fmt::Display for SavingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SavingMethod {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| {
                let allowed = Self::ALL.map(Self::as_str).join(", ");
                EngineError::InvalidMethod(format!("\"{value}\" is not one of: {allowed}"))
            })
    }
}
