use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    pub fn bank_not_found(account_number: &str) -> Self {
        Self::NotFound(format!("could not find bank by account number {account_number}"))
    }

    pub fn bank_exists(account_number: &str) -> Self {
        Self::Conflict(format!("bank with account number {account_number} already exists"))
    }
}
