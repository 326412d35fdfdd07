//! In-memory ledger: accounts, holdings, and the append-only trade journal.

use crate::application::ports::LedgerStore;
use crate::domain::{Account, AccountId, Clock, LedgerError, TradeOrder, TradeRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe ledger storage backing the trade engine.
///
/// Each account lives behind its own mutex, keyed by owner; `commit` holds
/// that one lock for the whole read-validate-write-journal sequence, so
/// trades on the same account serialize while disjoint accounts proceed in
/// parallel. The engine is synchronous and never awaits under the lock.
///
/// The trade is applied to a scratch copy of the account and written back
/// only after the journal append succeeds - a journal failure therefore
/// rolls the whole step back and no record exists for an uncommitted trade.
pub struct InMemoryLedger<C: Clock> {
    clock: Arc<C>,
    starting_balance: Decimal,
    /// Accounts by owner, each behind its own lock
    accounts: Arc<DashMap<String, Arc<Mutex<Account>>>>,
    /// Append-only journal of committed trades
    journal: Arc<RwLock<Vec<TradeRecord>>>,
    /// Monotonic commit sequence, per ledger instance
    sequence: Arc<AtomicU64>,
    /// Optional journal bound; appends beyond it fail as storage errors
    journal_capacity: Option<usize>,
}

impl<C: Clock> InMemoryLedger<C> {
    pub fn new(clock: Arc<C>, starting_balance: Decimal) -> Self {
        InMemoryLedger {
            clock,
            starting_balance,
            accounts: Arc::new(DashMap::new()),
            journal: Arc::new(RwLock::new(Vec::new())),
            sequence: Arc::new(AtomicU64::new(0)),
            journal_capacity: None,
        }
    }

    /// Bound the journal; once full, commits fail with a storage error and
    /// roll back. Used to exercise the rollback path.
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = Some(capacity);
        self
    }

    /// Get or create the account for an owner (sync).
    pub fn open_account(&self, owner_id: &str) -> Account {
        let cell = self
            .accounts
            .entry(owner_id.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(Account::new(
                    owner_id,
                    self.starting_balance,
                    self.clock.now(),
                )))
            });
        let account = cell.lock().clone();
        account
    }

    /// Look up an account by owner (sync).
    pub fn account_of(&self, owner_id: &str) -> Option<Account> {
        self.accounts
            .get(owner_id)
            .map(|cell| cell.value().lock().clone())
    }

    /// The atomic ledger step (sync): validate and apply under the account's
    /// exclusive lock, journal, then publish the new state.
    pub fn commit(&self, owner_id: &str, order: TradeOrder) -> Result<TradeRecord, LedgerError> {
        let cell = self
            .accounts
            .get(owner_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::AccountNotFound(owner_id.to_string()))?;

        let mut account = cell.lock();

        let mut updated = account.clone();
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let record = updated.apply(&order, self.clock.now(), sequence)?;
        self.append(record.clone())?;
        *account = updated;

        Ok(record)
    }

    /// Committed trades for an account, newest first (sync).
    pub fn trades_of(&self, account_id: AccountId) -> Vec<TradeRecord> {
        let journal = self.journal.read();
        let mut trades: Vec<TradeRecord> = journal
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect();
        trades.reverse();
        trades
    }

    /// All accounts (sync).
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts
            .iter()
            .map(|entry| entry.value().lock().clone())
            .collect()
    }

    /// Total number of journaled trades.
    pub fn journal_len(&self) -> usize {
        self.journal.read().len()
    }

    fn append(&self, record: TradeRecord) -> Result<(), LedgerError> {
        let mut journal = self.journal.write();
        if let Some(capacity) = self.journal_capacity {
            if journal.len() >= capacity {
                return Err(LedgerError::Storage(format!(
                    "trade journal full ({} entries)",
                    capacity
                )));
            }
        }
        journal.push(record);
        Ok(())
    }
}

impl<C: Clock> Clone for InMemoryLedger<C> {
    fn clone(&self) -> Self {
        InMemoryLedger {
            clock: Arc::clone(&self.clock),
            starting_balance: self.starting_balance,
            accounts: Arc::clone(&self.accounts),
            journal: Arc::clone(&self.journal),
            sequence: Arc::clone(&self.sequence),
            journal_capacity: self.journal_capacity,
        }
    }
}

#[async_trait]
impl<C: Clock> LedgerStore for InMemoryLedger<C> {
    async fn get_or_create(&self, owner_id: &str) -> Account {
        self.open_account(owner_id)
    }

    async fn get_by_owner(&self, owner_id: &str) -> Option<Account> {
        self.account_of(owner_id)
    }

    async fn commit_trade(
        &self,
        owner_id: &str,
        order: TradeOrder,
    ) -> Result<TradeRecord, LedgerError> {
        self.commit(owner_id, order)
    }

    async fn trades_for(&self, account_id: AccountId) -> Vec<TradeRecord> {
        self.trades_of(account_id)
    }

    async fn list(&self) -> Vec<Account> {
        self.accounts()
    }
}
