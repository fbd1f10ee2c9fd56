use std::collections::HashMap;

use async_trait::async_trait;
use models::bank::{seed_banks, Bank};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;

/// Storage abstraction for bank records.
/// The in-memory store below is the only implementation; a persistent
/// backend plugs in here without touching the service or the routes.
#[async_trait]
pub trait BankDataSource: Send + Sync {
    async fn retrieve_banks(&self) -> Vec<Bank>;
    async fn retrieve_bank(&self, account_number: &str) -> Result<Bank, ServiceError>;
    async fn add_bank(&self, bank: Bank) -> Result<Bank, ServiceError>;
    async fn update_bank(&self, bank: Bank) -> Result<Bank, ServiceError>;
    async fn delete_bank(&self, account_number: &str) -> Result<(), ServiceError>;
}

struct Slot {
    seq: u64,
    bank: Bank,
}

#[derive(Default)]
struct BankTable {
    rows: HashMap<String, Slot>,
    next_seq: u64,
}

impl BankTable {
    fn insert_new(&mut self, bank: Bank) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(bank.account_number.clone(), Slot { seq, bank });
    }

    fn ordered(&self) -> Vec<Bank> {
        let mut slots: Vec<&Slot> = self.rows.values().collect();
        slots.sort_by_key(|s| s.seq);
        slots.into_iter().map(|s| s.bank.clone()).collect()
    }
}

/// In-memory bank store keyed by account number.
///
/// Listing returns banks in insertion order. An update overwrites the row
/// in place, so the bank keeps its position. Every check-then-mutate
/// sequence runs under one write lock.
pub struct MockBankDataSource {
    inner: RwLock<BankTable>,
}

impl MockBankDataSource {
    /// Empty store.
    pub fn new() -> Self {
        Self::with_banks(Vec::new())
    }

    /// Store pre-filled with the three fixed seed rows.
    pub fn seeded() -> Self {
        Self::with_banks(seed_banks())
    }

    /// Store pre-filled with `banks`; later duplicates of an account number are dropped.
    pub fn with_banks(banks: Vec<Bank>) -> Self {
        let mut table = BankTable::default();
        for bank in banks {
            if !table.rows.contains_key(&bank.account_number) {
                table.insert_new(bank);
            }
        }
        Self { inner: RwLock::new(table) }
    }
}

impl Default for MockBankDataSource {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl BankDataSource for MockBankDataSource {
    async fn retrieve_banks(&self) -> Vec<Bank> {
        let table = self.inner.read().await;
        table.ordered()
    }

    async fn retrieve_bank(&self, account_number: &str) -> Result<Bank, ServiceError> {
        debug!(%account_number, "retrieve bank");
        let table = self.inner.read().await;
        table
            .rows
            .get(account_number)
            .map(|slot| slot.bank.clone())
            .ok_or_else(|| ServiceError::bank_not_found(account_number))
    }

    async fn add_bank(&self, bank: Bank) -> Result<Bank, ServiceError> {
        let mut table = self.inner.write().await;
        if table.rows.contains_key(&bank.account_number) {
            debug!(account_number = %bank.account_number, "add rejected: duplicate");
            return Err(ServiceError::bank_exists(&bank.account_number));
        }
        table.insert_new(bank.clone());
        info!(account_number = %bank.account_number, total = table.rows.len(), "bank added");
        Ok(bank)
    }

    async fn update_bank(&self, bank: Bank) -> Result<Bank, ServiceError> {
        let mut table = self.inner.write().await;
        let slot = table
            .rows
            .get_mut(&bank.account_number)
            .ok_or_else(|| ServiceError::bank_not_found(&bank.account_number))?;
        slot.bank = bank.clone();
        info!(account_number = %bank.account_number, "bank updated");
        Ok(bank)
    }

    async fn delete_bank(&self, account_number: &str) -> Result<(), ServiceError> {
        let mut table = self.inner.write().await;
        match table.rows.remove(account_number) {
            Some(_) => {
                info!(%account_number, total = table.rows.len(), "bank deleted");
                Ok(())
            }
            None => Err(ServiceError::bank_not_found(account_number)),
        }
    }
}
