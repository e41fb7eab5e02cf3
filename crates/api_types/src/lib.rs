use serde::{Deserialize, Serialize};

/// Body returned alongside every non-2xx status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod savings {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize};

    /// Where a saving was put.
    ///
    /// Serialized with the human label (`"Mutual Fund"`, `"Saving Account"`, ...),
    /// which is also what the form shows.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum SavingMethod {
        #[default]
        #[serde(rename = "Mutual Fund")]
        MutualFund,
        Stock,
        #[serde(rename = "Saving Account")]
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

        pub fn label(self) -> &'static str {
            match self {
                Self::MutualFund => "Mutual Fund",
                Self::Stock => "Stock",
                Self::SavingAccount => "Saving Account",
                Self::Cash => "Cash",
            }
        }

        /// Next method in form order, wrapping around.
        pub fn next(self) -> Self {
            match self {
                Self::MutualFund => Self::Stock,
                Self::Stock => Self::SavingAccount,
                Self::SavingAccount => Self::Cash,
                Self::Cash => Self::MutualFund,
            }
        }

        /// Previous method in form order, wrapping around.
        pub fn prev(self) -> Self {
            match self {
                Self::MutualFund => Self::Cash,
                Self::Stock => Self::MutualFund,
                Self::SavingAccount => Self::Stock,
                Self::Cash => Self::SavingAccount,
            }
        }
    }

    impl std::fmt::Display for SavingMethod {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.label())
        }
    }

    /// A ledger record as exposed over HTTP.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i64,
        /// Major units (e.g. `12.5` for 12.50).
        pub amount: f64,
        pub method: SavingMethod,
        #[serde(default)]
        pub description: String,
        pub date: DateTime<Utc>,
    }

    /// `GET /balance`
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct BalanceResponse {
        #[serde(default, deserialize_with = "lenient_amount")]
        pub balance: f64,
    }

    /// `GET /transactions`
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct TransactionsResponse {
        #[serde(default, deserialize_with = "lenient_list")]
        pub transactions: Vec<TransactionView>,
    }

    /// `POST /add-savings` request body.
    ///
    /// Fields stay loosely typed so that the server can answer with its own
    /// validation message instead of a deserialization error.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct SavingsNew {
        /// JSON number or numeric string, in major units.
        #[serde(default)]
        pub amount: Option<serde_json::Value>,
        #[serde(default)]
        pub method: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
    }

    /// `POST /add-savings` response body.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct SavingsAdded {
        #[serde(default, deserialize_with = "lenient_amount")]
        pub balance: f64,
        #[serde(default, deserialize_with = "lenient_list")]
        pub transactions: Vec<TransactionView>,
    }

    /// Anything that is not a number (including `null`) reads as 0.
    fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_f64().unwrap_or_default())
    }

    /// Anything that is not an array (including `null`) reads as an empty list.
    fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<TransactionView>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            value @ serde_json::Value::Array(_) => {
                serde_json::from_value(value).map_err(serde::de::Error::custom)
            }
            _ => Ok(Vec::new()),
        }
    }
}
