use serde::{Deserialize, Serialize};

/// A bank record as exchanged over HTTP and held in the store.
///
/// `account_number` is the primary key; it is chosen by the client on
/// creation and never rewritten afterwards. `trust` and `transaction_fee`
/// are opaque attributes without range checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub account_number: String,
    pub trust: f64,
    pub transaction_fee: i32,
}

impl Bank {
    pub fn new(account_number: impl Into<String>, trust: f64, transaction_fee: i32) -> Self {
        Self { account_number: account_number.into(), trust, transaction_fee }
    }
}

/// Rows every fresh store starts with.
pub fn seed_banks() -> Vec<Bank> {
    vec![
        Bank::new("1234", 1.0, 1),
        Bank::new("3435", 3.14, 0),
        Bank::new("5678", 2.0, 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(Bank::new("1234", 1.0, 1)).unwrap();
        assert_eq!(value, json!({"accountNumber": "1234", "trust": 1.0, "transactionFee": 1}));
    }

    #[test]
    fn rejects_body_missing_a_field() {
        let res = serde_json::from_value::<Bank>(json!({"accountNumber": "1", "trust": 0.5}));
        assert!(res.is_err());
    }

    #[test]
    fn seed_has_unique_account_numbers() {
        let seed = seed_banks();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0], Bank::new("1234", 1.0, 1));
        let mut keys: Vec<_> = seed.iter().map(|b| b.account_number.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }
}
