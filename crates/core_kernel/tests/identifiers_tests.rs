//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, prefixed display, parsing and
//! UUID conversion for every entity the desk stores.

use core_kernel::{
    ClientId, BankId, DeductionId, CashboxId, CashboxBankBalanceId, TransactionId,
};
use uuid::Uuid;

mod cashbox_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = CashboxId::new();
        let id2 = CashboxId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = CashboxId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = CashboxId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CashboxId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_invalid_string_fails_to_parse() {
        assert!("CBX-not-a-uuid".parse::<CashboxId>().is_err());
    }
}

mod prefix_tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(ClientId::prefix(), "CLI");
        assert_eq!(BankId::prefix(), "BNK");
        assert_eq!(DeductionId::prefix(), "DED");
        assert_eq!(CashboxId::prefix(), "CBX");
        assert_eq!(CashboxBankBalanceId::prefix(), "CBB");
        assert_eq!(TransactionId::prefix(), "TXN");
    }

    #[test]
    fn test_display_includes_prefix() {
        let id = TransactionId::new();
        assert!(id.to_string().starts_with("TXN-"));
    }

    #[test]
    fn test_display_parse_round_trip() {
        let id = DeductionId::new();
        let parsed: DeductionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = BankId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
