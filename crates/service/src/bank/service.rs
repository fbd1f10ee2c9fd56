use std::sync::Arc;

use models::bank::Bank;
use tracing::instrument;

use crate::bank::repository::BankDataSource;
use crate::errors::ServiceError;

/// Application service the HTTP layer talks to.
/// Forwards every call to the data source unchanged; errors pass through as-is.
pub struct BankService<R: BankDataSource + ?Sized> {
    repo: Arc<R>,
}

impl<R: BankDataSource + ?Sized> BankService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_banks(&self) -> Vec<Bank> { self.repo.retrieve_banks().await }

    #[instrument(skip(self))]
    pub async fn get_bank(&self, account_number: &str) -> Result<Bank, ServiceError> {
        self.repo.retrieve_bank(account_number).await
    }

    #[instrument(skip(self, bank), fields(account_number = %bank.account_number))]
    pub async fn add_bank(&self, bank: Bank) -> Result<Bank, ServiceError> {
        self.repo.add_bank(bank).await
    }

    #[instrument(skip(self, bank), fields(account_number = %bank.account_number))]
    pub async fn update_bank(&self, bank: Bank) -> Result<Bank, ServiceError> {
        self.repo.update_bank(bank).await
    }

    #[instrument(skip(self))]
    pub async fn delete_bank(&self, account_number: &str) -> Result<(), ServiceError> {
        self.repo.delete_bank(account_number).await
    }
}
