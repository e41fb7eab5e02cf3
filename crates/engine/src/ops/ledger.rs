use chrono::Utc;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, prelude::*};

use crate::{
    AddTransactionCmd, Engine, EngineError, Money, NewTransaction, RECENT_LIMIT, ResultEngine,
    Transaction, transactions,
};

/// Balance and most recent history, read back together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub balance: Money,
    pub transactions: Vec<Transaction>,
}

impl Engine {
    /// Sum of every amount in the ledger.
    ///
    /// Reads the whole table on each call; the result always reflects what is
    /// committed in the store.
    pub async fn balance(&self) -> ResultEngine<Money> {
        let amounts: Vec<i64> = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::AmountMinor)
            .into_tuple::<i64>()
            .all(&self.database)
            .await?;

        Money::checked_sum(amounts.into_iter().map(Money::new))
    }

    /// Up to `limit` transactions, newest first.
    ///
    /// Records sharing a timestamp come out in reverse insertion order.
    pub async fn list_recent(&self, limit: u64) -> ResultEngine<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .all(&self.database)
            .await?;

        models.into_iter().map(Transaction::try_from).collect()
    }

    /// Number of records in the ledger.
    pub async fn count(&self) -> ResultEngine<u64> {
        Ok(transactions::Entity::find().count(&self.database).await?)
    }

    /// Balance plus the newest `limit` records.
    pub async fn snapshot(&self, limit: u64) -> ResultEngine<LedgerSnapshot> {
        let balance = self.balance().await?;
        let transactions = self.list_recent(limit).await?;
        Ok(LedgerSnapshot {
            balance,
            transactions,
        })
    }

    /// Validates and appends a saving, then returns the recomputed balance and
    /// the latest [`RECENT_LIMIT`] records.
    ///
    /// Invalid input is rejected before the store is touched, and so is an
    /// amount that would push the balance past what [`Money`] can hold. If
    /// reading back fails after the insert, the record stays committed and the
    /// read error is returned.
    pub async fn add_transaction(&self, cmd: AddTransactionCmd) -> ResultEngine<LedgerSnapshot> {
        let new_tx = NewTransaction::from_cmd(cmd, Utc::now())?;

        let current = self.balance().await?;
        if current.checked_add(new_tx.amount).is_none() {
            return Err(EngineError::InvalidAmount(
                "amount would overflow the ledger balance".to_string(),
            ));
        }

        let model = transactions::ActiveModel::from(&new_tx)
            .insert(&self.database)
            .await?;
        tracing::debug!(
            id = model.id,
            amount = %new_tx.amount,
            method = %new_tx.method,
            "saving appended"
        );

        self.snapshot(RECENT_LIMIT).await
    }
}
