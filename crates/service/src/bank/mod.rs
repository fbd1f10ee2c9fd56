pub mod repository;
pub mod service;

pub use repository::{BankDataSource, MockBankDataSource};
pub use service::BankService;
