//! End-to-end tests of the cashbox and transaction services over the
//! in-memory stores

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{BankId, CashboxId, ClientId, Currency, OperationMetadata};
use domain_cashbox::{CashboxBalance, CashboxPort, CashboxServiceError, CloseCashboxRequest};
use domain_exchange::{
    Deduction, DeductionCatalogPort, ExchangeError, FormError, OperationType, TransactionAmountEngine, TransactionDraft,
};
use domain_party::BankPort;
use infra_store::Store;
use test_utils::{
    assert_derived, assert_transaction_amounts, draft_with_catalog_strategy, BankFixtures,
    ClientFixtures, DeductionFixtures, OpenCashboxRequestBuilder, RecordTransactionRequestBuilder,
};

/// Stores with one registered client, one registered bank and an open cashbox
struct Desk {
    store: Store,
    cashbox_id: CashboxId,
    client_id: ClientId,
    bank_id: BankId,
}

impl Desk {
    async fn open() -> Self {
        Self::open_with(DeductionFixtures::catalog()).await
    }

    async fn open_with(catalog: Vec<Deduction>) -> Self {
        let client = ClientFixtures::walk_in();
        let bank = BankFixtures::nacion();
        let (client_id, bank_id) = (client.id, bank.id);
        let store = Store::with_deductions(catalog)
            .seed_clients(vec![client])
            .seed_banks(vec![bank]);

        let request = OpenCashboxRequestBuilder::new().with_bank(bank_id).build();
        let cashbox = store.cashbox_service().open(request, None).await.unwrap();

        Self {
            store,
            cashbox_id: cashbox.id,
            client_id,
            bank_id,
        }
    }

    fn request(&self) -> RecordTransactionRequestBuilder {
        RecordTransactionRequestBuilder::new(self.cashbox_id)
            .with_client(self.client_id)
            .with_bank(self.bank_id)
    }
}

// ============================================================================
// Preview
// ============================================================================

mod preview_tests {
    use super::*;

    #[tokio::test]
    async fn test_preview_uses_stored_catalog() {
        let store = Store::with_deductions(DeductionFixtures::five_percent());
        let ids: Vec<_> = DeductionFixtures::five_percent().iter().map(|d| d.id).collect();
        let service = store.transaction_service();

        // Fresh fixture ids are not in the stored catalog
        let draft = TransactionDraft::new(OperationType::UsdtBuy, dec!(1000))
            .with_exchange_rate(dec!(500))
            .with_deductions(ids);
        let derived = service.preview(&draft, None).await.unwrap();
        assert_derived(derived, dec!(1000), dec!(2));

        let catalog = store.deductions.list_deductions(None).await.unwrap();
        let draft = draft.with_deductions(catalog.iter().map(|d| d.id));
        let derived = service.preview(&draft, None).await.unwrap();
        assert_derived(derived, dec!(950), dec!(1.9));
    }
}

// ============================================================================
// Recording
// ============================================================================

mod record_tests {
    use super::*;

    #[tokio::test]
    async fn test_record_purchase_derives_server_side() {
        let desk = Desk::open().await;
        let service = desk.store.transaction_service();
        let catalog = desk.store.deductions.list_deductions(None).await.unwrap();
        let five_percent = catalog
            .iter()
            .filter(|d| d.name == "Commission" || d.name == "Bank fee")
            .map(|d| d.id);

        let request = desk
            .request()
            .with_operation(OperationType::UsdtBuy, dec!(1000))
            .with_exchange_rate(dec!(500))
            .with_deductions(five_percent)
            .with_description("Counter sale")
            .build();

        let metadata = OperationMetadata {
            correlation_id: Some("req-1".to_string()),
            initiated_by: Some("teller-2".to_string()),
        };
        let transaction = service.record(request, Some(metadata)).await.unwrap();

        assert_eq!(transaction.details.net_amount, dec!(950));
        assert_eq!(transaction.details.crypto_amount, Some(dec!(1.9)));
        assert_eq!(transaction.details.exchange_rate, Some(dec!(500)));
        assert_eq!(transaction.details.deduction_ids.as_ref().map(Vec::len), Some(2));
        assert_eq!(transaction.details.client_id, desk.client_id);
        assert_eq!(transaction.cashbox_id(), desk.cashbox_id);

        let listed = service.list(Some(desk.cashbox_id), None).await.unwrap();
        assert_eq!(listed, vec![transaction]);
    }

    #[tokio::test]
    async fn test_record_sale() {
        let desk = Desk::open().await;
        let request = desk
            .request()
            .with_operation(OperationType::UsdSell, dec!(2))
            .with_exchange_rate(dec!(500))
            .with_currency(Currency::USD)
            .build();

        let transaction = desk.store.transaction_service().record(request, None).await.unwrap();

        assert_eq!(transaction.details.net_amount, dec!(1000));
        assert_eq!(transaction.details.crypto_amount, Some(dec!(2)));
        assert_eq!(transaction.details.currency, Currency::USD);
    }

    #[tokio::test]
    async fn test_record_raw_entry_ignores_deductions() {
        let desk = Desk::open().await;
        let catalog = desk.store.deductions.list_deductions(None).await.unwrap();
        let request = desk
            .request()
            .with_operation(OperationType::UsdtIn, dec!(150))
            .with_deductions(catalog.iter().map(|d| d.id))
            .build();

        let transaction = desk.store.transaction_service().record(request, None).await.unwrap();

        assert_eq!(transaction.details.net_amount, dec!(150));
        assert_eq!(transaction.details.crypto_amount, None);
        assert_eq!(transaction.details.deduction_ids, None);
        assert_eq!(transaction.details.exchange_rate, None);
    }

    #[tokio::test]
    async fn test_record_rejects_missing_rate() {
        let desk = Desk::open().await;
        let service = desk.store.transaction_service();
        let request = desk
            .request()
            .with_operation(OperationType::UsdtBuy, dec!(1000))
            .build();

        let result = service.record(request, None).await;

        assert!(matches!(
            result,
            Err(ExchangeError::Form(FormError::InvalidExchangeRate(_)))
        ));
        assert!(service.list(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_rejects_zero_amount() {
        let desk = Desk::open().await;
        let request = desk
            .request()
            .with_operation(OperationType::ArsOut, Decimal::ZERO)
            .build();

        let result = desk.store.transaction_service().record(request, None).await;

        assert!(matches!(
            result,
            Err(ExchangeError::Form(FormError::InvalidAmount(_)))
        ));
    }

    #[tokio::test]
    async fn test_record_rejects_missing_operation_type() {
        let desk = Desk::open().await;
        let mut request = desk.request().build();
        request.draft.operation_type = None;

        let result = desk.store.transaction_service().record(request, None).await;

        assert!(matches!(
            result,
            Err(ExchangeError::Form(FormError::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn test_record_rejects_closed_cashbox() {
        let desk = Desk::open().await;
        desk.store
            .cashboxes
            .close_cashbox(desk.cashbox_id, CloseCashboxRequest::default(), None)
            .await
            .unwrap();

        let request = desk.request().build();
        let result = desk.store.transaction_service().record(request, None).await;

        assert!(matches!(result, Err(ExchangeError::CashboxNotOpen(id)) if id == desk.cashbox_id));
    }

    #[tokio::test]
    async fn test_record_rejects_unknown_cashbox() {
        let desk = Desk::open().await;
        let request = RecordTransactionRequestBuilder::new(CashboxId::new())
            .with_client(desk.client_id)
            .with_bank(desk.bank_id)
            .build();

        let result = desk.store.transaction_service().record(request, None).await;

        match result {
            Err(ExchangeError::Port(e)) => assert!(e.is_not_found()),
            other => panic!("Expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_record_rejects_unregistered_client() {
        let desk = Desk::open().await;
        let stranger = ClientId::new();
        let request = desk.request().with_client(stranger).build();

        let result = desk.store.transaction_service().record(request, None).await;

        assert!(matches!(result, Err(ExchangeError::UnknownClient(id)) if id == stranger));
        assert!(desk.store.transaction_service().list(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_rejects_unregistered_bank() {
        let desk = Desk::open().await;
        let stray = BankId::new();
        let request = desk.request().with_bank(stray).build();

        let result = desk.store.transaction_service().record(request, None).await;

        assert!(matches!(result, Err(ExchangeError::UnknownBank(id)) if id == stray));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let desk = Desk::open().await;
        let service = desk.store.transaction_service();
        for amount in [dec!(10), dec!(20)] {
            let request = desk
                .request()
                .with_operation(OperationType::ArsIn, amount)
                .build();
            service.record(request, None).await.unwrap();
        }

        let amounts: Vec<_> = service
            .list(None, None)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.details.amount)
            .collect();

        assert_eq!(amounts, vec![dec!(20), dec!(10)]);
    }
}

// ============================================================================
// Properties
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn recorded_amounts_match_engine((draft, catalog) in draft_with_catalog_strategy()) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let desk = Desk::open_with(catalog.clone()).await;

                let mut request = desk.request().build();
                request.draft = draft.clone();
                let expected = TransactionAmountEngine::derive(&draft, &catalog);

                match desk.store.transaction_service().record(request, None).await {
                    Ok(transaction) => assert_transaction_amounts(&transaction, expected),
                    Err(e) => assert!(matches!(e, ExchangeError::Form(_)), "unexpected error {:?}", e),
                }
            });
        }
    }
}

// ============================================================================
// Cashbox service
// ============================================================================

mod cashbox_service_tests {
    use super::*;

    #[tokio::test]
    async fn test_open_rejects_unregistered_bank() {
        let store = Store::new().seed_banks(vec![BankFixtures::nacion()]);
        let stray = BankId::new();
        let request = OpenCashboxRequestBuilder::new().with_bank(stray).build();

        let result = store.cashbox_service().open(request, None).await;

        assert!(matches!(result, Err(CashboxServiceError::BankNotRegistered(id)) if id == stray));
        assert_eq!(store.cashbox_service().current(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deleted_bank_cannot_open_a_cashbox() {
        let bank = BankFixtures::galicia();
        let store = Store::new().seed_banks(vec![bank.clone()]);
        store.banks.delete_bank(bank.id, None).await.unwrap();

        let request = OpenCashboxRequestBuilder::new().with_bank(bank.id).build();
        let result = store.cashbox_service().open(request, None).await;

        assert!(matches!(result, Err(CashboxServiceError::BankNotRegistered(_))));
    }

    #[tokio::test]
    async fn test_totals_sum_every_bank() {
        let nacion = BankFixtures::nacion();
        let galicia = BankFixtures::galicia();
        let store = Store::new().seed_banks(vec![nacion.clone(), galicia.clone()]);
        let service = store.cashbox_service();
        let request = OpenCashboxRequestBuilder::new()
            .with_bank_balance(nacion.id, CashboxBalance::new(dec!(100000), dec!(50), dec!(10)))
            .with_bank_balance(galicia.id, CashboxBalance::new(dec!(25000), dec!(0), dec!(2.5)))
            .build();
        let cashbox = service.open(request, None).await.unwrap();

        let mut closing = std::collections::HashMap::new();
        closing.insert(galicia.id, CashboxBalance::new(dec!(30000), dec!(5), dec!(0)));
        service
            .close(cashbox.id, CloseCashboxRequest { closing_balances: closing }, None)
            .await
            .unwrap();

        let totals = service.totals(cashbox.id, None).await.unwrap();

        assert_eq!(totals.opening, CashboxBalance::new(dec!(125000), dec!(50), dec!(12.5)));
        assert_eq!(totals.closing, CashboxBalance::new(dec!(30000), dec!(5), dec!(0)));
    }

    #[tokio::test]
    async fn test_totals_of_unknown_cashbox() {
        let result = Store::new().cashbox_service().totals(CashboxId::new(), None).await;

        match result {
            Err(CashboxServiceError::Port(e)) => assert!(e.is_not_found()),
            other => panic!("Expected not found, got {:?}", other),
        }
    }
}
