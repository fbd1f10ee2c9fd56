use std::sync::Arc;

use service::bank::{BankDataSource, BankService, MockBankDataSource};

/// Shared handler state. Cloned per request; the store behind it is shared.
#[derive(Clone)]
pub struct ServerState {
    pub bank_svc: Arc<BankService<dyn BankDataSource>>,
}

impl ServerState {
    pub fn new(data_source: Arc<dyn BankDataSource>) -> Self {
        Self { bank_svc: Arc::new(BankService::new(data_source)) }
    }

    /// State backed by a freshly seeded in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MockBankDataSource::seeded()))
    }
}
