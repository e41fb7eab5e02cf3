//! Savings ledger engine.
//!
//! The [`Engine`] owns a handle to the store and exposes the three ledger
//! operations: [`balance`](Engine::balance), [`list_recent`](Engine::list_recent)
//! and [`add_transaction`](Engine::add_transaction). The balance is never cached;
//! it is re-derived from the stored records on every call.

use sea_orm::DatabaseConnection;

pub use error::EngineError;
pub use method::SavingMethod;
pub use money::Money;
pub use ops::LedgerSnapshot;
pub use transactions::{AddTransactionCmd, AmountInput, MAX_AMOUNT, NewTransaction, Transaction};

mod error;
mod method;
mod money;
mod ops;
mod transactions;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// How many records the "recent transactions" view holds.
pub const RECENT_LIMIT: u64 = 5;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
