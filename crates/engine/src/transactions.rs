//! Ledger records.
//!
//! A `Transaction` is an immutable saving event. Once stored it is only ever
//! read back: there is no update or delete path.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, Money, ResultEngine, SavingMethod, util::normalize_description};

/// A stored ledger record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub amount: Money,
    pub method: SavingMethod,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Raw amount as received from a caller, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

/// Request to append a saving to the ledger.
///
/// Every field is optional here: presence is part of what
/// [`Engine::add_transaction`](crate::Engine::add_transaction) validates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddTransactionCmd {
    pub amount: Option<AmountInput>,
    pub method: Option<String>,
    pub description: Option<String>,
}

/// Largest amount a single saving may carry (one trillion, in cents).
///
/// Keeps the sum of any realistic number of records far inside `i64`.
pub const MAX_AMOUNT: Money = Money::new(100_000_000_000_000);

/// A validated transaction that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub method: SavingMethod,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl NewTransaction {
    pub fn new(
        amount: Money,
        method: SavingMethod,
        description: Option<&str>,
        date: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be a positive number".to_string(),
            ));
        }
        if amount > MAX_AMOUNT {
            return Err(EngineError::InvalidAmount(format!(
                "amount must not exceed {}",
                MAX_AMOUNT
            )));
        }
        Ok(Self {
            amount,
            method,
            description: normalize_description(description),
            date,
        })
    }

    /// Validates a raw command, stamping it with `date`.
    pub fn from_cmd(cmd: AddTransactionCmd, date: DateTime<Utc>) -> ResultEngine<Self> {
        let method = cmd.method.as_deref().filter(|m| !m.trim().is_empty());
        let (Some(amount), Some(method)) = (cmd.amount, method) else {
            return Err(EngineError::MissingField);
        };

        let amount = match amount {
            AmountInput::Number(value) => Money::from_major(value)?,
            AmountInput::Text(text) => text.parse::<Money>()?,
        };
        let method = SavingMethod::try_from(method)?;

        Self::new(amount, method, cmd.description.as_deref(), date)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "savings_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub amount_minor: i64,
    pub method: String,
    pub description: String,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&NewTransaction> for ActiveModel {
    fn from(tx: &NewTransaction) -> Self {
        Self {
            id: ActiveValue::NotSet,
            amount_minor: ActiveValue::Set(tx.amount.minor()),
            method: ActiveValue::Set(tx.method.as_str().to_string()),
            description: ActiveValue::Set(tx.description.clone()),
            date: ActiveValue::Set(tx.date),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            amount: Money::new(model.amount_minor),
            method: SavingMethod::try_from(model.method.as_str())?,
            description: model.description,
            date: model.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(amount: Option<AmountInput>, method: Option<&str>) -> AddTransactionCmd {
        AddTransactionCmd {
            amount,
            method: method.map(ToString::to_string),
            description: None,
        }
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let now = Utc::now();
        let tx = NewTransaction::from_cmd(cmd(Some(AmountInput::Number(12.5)), Some("Stock")), now)
            .unwrap();
        assert_eq!(tx.amount, Money::new(1250));
        assert_eq!(tx.method, SavingMethod::Stock);
        assert_eq!(tx.description, "");
        assert_eq!(tx.date, now);

        let tx = NewTransaction::from_cmd(
            cmd(Some(AmountInput::Text("7,25".to_string())), Some("Cash")),
            now,
        )
        .unwrap();
        assert_eq!(tx.amount, Money::new(725));
    }

    #[test]
    fn rejects_missing_fields() {
        let now = Utc::now();
        assert_eq!(
            NewTransaction::from_cmd(cmd(None, Some("Cash")), now),
            Err(EngineError::MissingField)
        );
        assert_eq!(
            NewTransaction::from_cmd(cmd(Some(AmountInput::Number(1.0)), None), now),
            Err(EngineError::MissingField)
        );
        assert_eq!(
            NewTransaction::from_cmd(cmd(Some(AmountInput::Number(1.0)), Some("  ")), now),
            Err(EngineError::MissingField)
        );
    }

    #[test]
    fn rejects_non_positive_and_non_numeric_amounts() {
        let now = Utc::now();
        for amount in [
            AmountInput::Number(0.0),
            AmountInput::Number(-10.0),
            AmountInput::Text("abc".to_string()),
            AmountInput::Text("-3".to_string()),
        ] {
            let err = NewTransaction::from_cmd(cmd(Some(amount), Some("Cash")), now).unwrap_err();
            assert!(matches!(err, EngineError::InvalidAmount(_)), "{err:?}");
        }
    }

    #[test]
    fn rejects_amounts_above_the_cap() {
        let now = Utc::now();
        let at_cap = NewTransaction::new(MAX_AMOUNT, SavingMethod::Cash, None, now).unwrap();
        assert_eq!(at_cap.amount, MAX_AMOUNT);

        let err = NewTransaction::from_cmd(
            cmd(Some(AmountInput::Number(5e16)), Some("Cash")),
            now,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)), "{err:?}");
    }

    #[test]
    fn method_must_match_exactly() {
        let err = NewTransaction::from_cmd(
            cmd(Some(AmountInput::Number(5.0)), Some("  Cash  ")),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidMethod(_)), "{err:?}");
    }

    #[test]
    fn rejects_unknown_method() {
        let err = NewTransaction::from_cmd(
            cmd(Some(AmountInput::Number(5.0)), Some("Gold")),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidMethod(_)));
    }
}
