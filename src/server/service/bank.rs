//! Group ledger.
//!
//! Entries are append-only; the balance is recomputed from all entries on
//! every read.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{group::GroupRepository, group_bank::GroupBankRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        access::{authorize, Action, Actor},
        group::{balance_of, BankEntry, CreateBankEntryParams, Ledger},
    },
    service::group::find_group,
};

pub struct BankService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BankService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to a group's ledger.
    ///
    /// # Returns
    /// - `Ok(BankEntry)` - The stored entry with its creator
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is not a game master
    /// - `Err(AppError::BadRequest)` - Missing title or amount, or the entry would
    ///   push the balance out of the `i64` range
    pub async fn record(
        &self,
        actor: &Actor,
        params: CreateBankEntryParams,
    ) -> Result<BankEntry, AppError> {
        let txn = self.db.begin().await?;

        let group = find_group(&txn, params.group_id).await?;
        if !authorize(actor, Action::RecordLedgerEntry) {
            return Err(AuthError::AccessDenied(
                actor.id(),
                "У вас нет прав на обновление банка группы".to_string(),
            )
            .into());
        }

        let amount = match params.amount {
            Some(amount) if !params.title.is_empty() => amount,
            _ => {
                return Err(AppError::BadRequest(
                    "Название и сумма обязательны".to_string(),
                ))
            }
        };

        let repo = GroupBankRepository::new(&txn);
        let balance = balance_of(&repo.get_by_group(group.id).await?)
            .ok_or(InternalError::BalanceOverflow(group.id))?;
        if balance.checked_add(amount).is_none() {
            return Err(AppError::BadRequest(
                "Сумма выводит баланс группы за допустимые пределы".to_string(),
            ));
        }

        let entry = repo
            .create(group.id, actor.id(), params.title, amount, params.description)
            .await?;

        txn.commit().await?;

        Ok(entry)
    }

    /// Gets all entries of a group, newest first, with the total balance.
    ///
    /// # Returns
    /// - `Ok(Ledger)` - Entries and balance
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is neither a member nor a game master
    /// - `Err(InternalError::BalanceOverflow)` - Stored entries sum outside the `i64` range
    pub async fn get_ledger(&self, actor: &Actor, group_id: i32) -> Result<Ledger, AppError> {
        let group = find_group(self.db, group_id).await?;

        let position = GroupRepository::new(self.db)
            .get_position(group.id, actor.id())
            .await?;
        if !authorize(actor, Action::ViewGroup(position)) {
            return Err(AuthError::AccessDenied(
                actor.id(),
                "У вас нет доступа к банку этой группы".to_string(),
            )
            .into());
        }

        let entries = GroupBankRepository::new(self.db).get_by_group(group.id).await?;

        Ledger::from_entries(entries)
            .ok_or_else(|| InternalError::BalanceOverflow(group.id).into())
    }
}
