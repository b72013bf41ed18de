//! HTTP tests for the exchange desk API

use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use core_kernel::{BankId, CashboxId, ClientId};
use domain_cashbox::{Cashbox, CashboxBalance, CashboxStatus};
use domain_exchange::{Deduction, Transaction};
use domain_party::{Bank, Client};
use infra_store::Store;
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::dto::cashbox::CashboxTotalsResponse;
use interface_api::dto::transaction::PreviewResponse;
use interface_api::error::ErrorResponse;
use interface_api::handlers::health::HealthResponse;
use interface_api::middleware::OPERATOR_HEADER;
use test_utils::{BankFixtures, ClientFixtures, DeductionFixtures};

fn server_with(store: Store) -> TestServer {
    TestServer::new(create_router(store, ApiConfig::default())).unwrap()
}

fn server() -> TestServer {
    server_with(Store::with_deductions(DeductionFixtures::five_percent()))
}

async fn catalog(server: &TestServer) -> Vec<Deduction> {
    server.get("/api/v1/deductions").await.json::<Vec<Deduction>>()
}

async fn register_bank(server: &TestServer, name: &str) -> Bank {
    let response = server
        .post("/api/v1/banks")
        .json(&json!({ "name": name, "country": "Argentina" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Bank>()
}

async fn register_client(server: &TestServer) -> Client {
    let response = server
        .post("/api/v1/clients")
        .json(&json!({ "name": "Walk-in" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Client>()
}

async fn open_cashbox(server: &TestServer) -> (Cashbox, BankId) {
    let bank = register_bank(server, "Banco Nación").await;
    let response = server
        .post("/api/v1/cashboxes")
        .json(&json!({ "bank_ids": [bank.id] }))
        .await;
    response.assert_status(StatusCode::CREATED);
    (response.json::<Cashbox>(), bank.id)
}

/// A transaction body over a registered client and bank
fn transaction_body(cashbox: &Cashbox, client: &Client, bank_id: BankId) -> Value {
    json!({
        "client_id": client.id,
        "bank_id": bank_id,
        "cashbox_id": cashbox.id,
        "currency": "ARS",
        "operation_type": "ars_in",
        "amount": "100",
    })
}

// ============================================================================
// Health and catalog
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<HealthResponse>().status, "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_every_store() {
        let response = server().get("/health/ready").await;

        response.assert_status_ok();
        let health = response.json::<HealthResponse>();
        assert_eq!(health.status, "ready");
        assert_eq!(health.adapters.len(), 5);
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let response = server().get("/api/v1/operation-types").await;
        assert!(response.headers().get("x-request-id").is_some());
    }
}

mod operation_type_tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_all_codes_with_flags() {
        let response = server().get("/api/v1/operation-types").await;

        response.assert_status_ok();
        let types = response.json::<Vec<Value>>();
        assert_eq!(types.len(), 10);

        let buy = types.iter().find(|t| t["code"] == "usdt_buy").unwrap();
        assert_eq!(buy["label"], "USDT Purchase");
        assert_eq!(buy["asset"], "USDT");
        assert_eq!(buy["show_exchange_rate"], true);
        assert_eq!(buy["show_deductions"], true);

        let entry = types.iter().find(|t| t["code"] == "usdt_in").unwrap();
        assert_eq!(entry["show_exchange_rate"], false);
        assert_eq!(entry["show_deductions"], false);
    }
}

// ============================================================================
// Deductions
// ============================================================================

mod deduction_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let server = server_with(Store::new());

        let response = server
            .post("/api/v1/deductions")
            .json(&json!({ "name": "Commission", "percentage": "3" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Deduction>();
        assert_eq!(created.percentage, dec!(3));

        let fetched = server
            .get(&format!("/api/v1/deductions/{}", created.id))
            .await
            .json::<Deduction>();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let server = server();

        let response = server
            .post("/api/v1/deductions")
            .json(&json!({ "name": "commission", "percentage": "1" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<ErrorResponse>().error, "conflict");
    }

    #[tokio::test]
    async fn test_out_of_range_percentage_is_rejected() {
        let response = server()
            .post("/api/v1/deductions")
            .json(&json!({ "name": "Too much", "percentage": "101" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<ErrorResponse>();
        assert_eq!(body.error, "validation_error");
        assert!(body.details.unwrap().iter().any(|d| d.starts_with("percentage")));
    }

    #[tokio::test]
    async fn test_update() {
        let server = server();
        let target = catalog(&server).await.remove(0);

        let response = server
            .put(&format!("/api/v1/deductions/{}", target.id))
            .json(&json!({ "name": target.name, "percentage": "2.75" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Deduction>().percentage, dec!(2.75));
    }

    #[tokio::test]
    async fn test_delete_then_missing() {
        let server = server();
        let target = catalog(&server).await.remove(0);
        let path = format!("/api/v1/deductions/{}", target.id);

        server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
        server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(catalog(&server).await.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_id() {
        server()
            .get("/api/v1/deductions/not-a-uuid")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

// ============================================================================
// Cashboxes
// ============================================================================

mod cashbox_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_single_open_cashbox() {
        let server = server();
        let (first, bank_id) = open_cashbox(&server).await;

        let response = server
            .post("/api/v1/cashboxes")
            .json(&json!({ "bank_ids": [bank_id] }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(
            response.json::<ErrorResponse>().message,
            "There is already an open cashbox"
        );

        let current = server
            .get("/api/v1/cashboxes/current")
            .await
            .json::<Option<Cashbox>>();
        assert_eq!(current.map(|c| c.id), Some(first.id));
    }

    #[tokio::test]
    async fn test_open_requires_a_bank() {
        let response = server()
            .post("/api/v1/cashboxes")
            .json(&json!({ "bank_ids": [] }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_open_with_unregistered_bank_is_rejected() {
        let server = server();
        let stray = BankId::new();

        let response = server
            .post("/api/v1/cashboxes")
            .json(&json!({ "bank_ids": [stray] }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response
            .json::<ErrorResponse>()
            .message
            .contains(&stray.to_string()));
        let current = server
            .get("/api/v1/cashboxes/current")
            .await
            .json::<Option<Cashbox>>();
        assert!(current.is_none());
    }

    #[tokio::test]
    async fn test_open_with_balances_and_close() {
        let server = server();
        let bank = register_bank(&server, "Banco Nación").await.id;
        let opened = server
            .post("/api/v1/cashboxes")
            .json(&json!({
                "date": "2024-03-04",
                "bank_ids": [bank],
                "bank_balances": { bank.as_uuid().to_string(): { "ARS": "1000", "USD": "50", "USDT": "0" } }
            }))
            .await
            .json::<Cashbox>();
        assert_eq!(opened.balance_for(bank).unwrap().opening.usd, dec!(50));

        let closed = server
            .post(&format!("/api/v1/cashboxes/{}/close", opened.id))
            .json(&json!({
                "closing_balances": { bank.as_uuid().to_string(): { "ARS": "800", "USD": "60", "USDT": "1.5" } }
            }))
            .await;
        closed.assert_status_ok();
        let closed = closed.json::<Cashbox>();
        assert_eq!(closed.status, CashboxStatus::Closed);
        assert_eq!(
            closed.balance_for(bank).unwrap().closing.map(|b| b.usdt),
            Some(dec!(1.5))
        );

        server
            .post(&format!("/api/v1/cashboxes/{}/close", opened.id))
            .await
            .assert_status(StatusCode::CONFLICT);

        let current = server
            .get("/api/v1/cashboxes/current")
            .await
            .json::<Option<Cashbox>>();
        assert!(current.is_none());
    }

    #[tokio::test]
    async fn test_totals_across_banks() {
        let nacion = BankFixtures::nacion();
        let galicia = BankFixtures::galicia();
        let server = server_with(Store::new().seed_banks(vec![nacion.clone(), galicia.clone()]));
        let opened = server
            .post("/api/v1/cashboxes")
            .json(&json!({
                "bank_ids": [nacion.id, galicia.id],
                "bank_balances": {
                    nacion.id.as_uuid().to_string(): { "ARS": "1000", "USD": "50", "USDT": "0" },
                    galicia.id.as_uuid().to_string(): { "ARS": "234.5", "USD": "0", "USDT": "3" }
                }
            }))
            .await
            .json::<Cashbox>();
        server
            .post(&format!("/api/v1/cashboxes/{}/close", opened.id))
            .json(&json!({
                "closing_balances": { nacion.id.as_uuid().to_string(): { "ARS": "900", "USD": "20", "USDT": "0" } }
            }))
            .await
            .assert_status_ok();

        let response = server
            .get(&format!("/api/v1/cashboxes/{}/totals", opened.id))
            .await;

        response.assert_status_ok();
        let totals = response.json::<CashboxTotalsResponse>();
        assert_eq!(totals.opening, CashboxBalance::new(dec!(1234.5), dec!(50), dec!(3)));
        assert_eq!(totals.closing, CashboxBalance::new(dec!(900), dec!(20), dec!(0)));
        assert_eq!(
            totals.opening_display,
            vec!["ARS 1,234.50", "$50.00", "3.00 USDT"]
        );
    }

    #[tokio::test]
    async fn test_unknown_cashbox() {
        let server = server();
        let missing = CashboxId::new();

        server
            .get(&format!("/api/v1/cashboxes/{}", missing))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get(&format!("/api/v1/cashboxes/{}/totals", missing))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Clients and banks
// ============================================================================

mod party_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_client_lifecycle() {
        let server = server_with(Store::new());

        let response = server
            .post("/api/v1/clients")
            .json(&json!({ "name": "Lucía Fernández", "email": "lucia@example.com", "phone": " " }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Client>();
        assert_eq!(created.phone, None);

        let path = format!("/api/v1/clients/{}", created.id);
        let updated = server
            .put(&path)
            .json(&json!({ "name": "Lucía F.", "address": "Av. Corrientes 1234" }))
            .await
            .json::<Client>();
        assert_eq!(updated.email, None);
        assert_eq!(updated.address.as_deref(), Some("Av. Corrientes 1234"));
        assert_eq!(server.get(&path).await.json::<Client>(), updated);

        server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
        server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_client_with_malformed_email_is_rejected() {
        let response = server()
            .post("/api/v1/clients")
            .json(&json!({ "name": "Lucía", "email": "lucia-at-example" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<ErrorResponse>();
        assert!(body.details.unwrap().iter().any(|d| d.starts_with("email")));
    }

    #[tokio::test]
    async fn test_clients_listed_newest_first() {
        let older = ClientFixtures::walk_in();
        let newer = ClientFixtures::regular();
        let server = server_with(Store::new().seed_clients(vec![older.clone(), newer.clone()]));

        let listed = server.get("/api/v1/clients").await.json::<Vec<Client>>();

        assert_eq!(listed, vec![newer, older]);
    }

    #[tokio::test]
    async fn test_bank_swift_code_is_normalized_and_unique() {
        let server = server_with(Store::new());

        let response = server
            .post("/api/v1/banks")
            .json(&json!({ "name": "Banco Nación", "swift_code": "nacnarba" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Bank>().swift_code.as_deref(), Some("NACNARBA"));

        let clash = server
            .post("/api/v1/banks")
            .json(&json!({ "name": "Another", "swift_code": "NACNARBA" }))
            .await;
        clash.assert_status(StatusCode::CONFLICT);
        assert_eq!(server.get("/api/v1/banks").await.json::<Vec<Bank>>().len(), 1);
    }

    #[tokio::test]
    async fn test_bank_with_malformed_swift_code_is_rejected() {
        let response = server()
            .post("/api/v1/banks")
            .json(&json!({ "name": "Banco", "swift_code": "NAC-1" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<ErrorResponse>().error, "validation_error");
    }

    #[tokio::test]
    async fn test_unknown_bank() {
        let server = server();
        let path = format!("/api/v1/banks/{}", BankId::new());

        server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
        server
            .put(&path)
            .json(&json!({ "name": "Ghost" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Transactions
// ============================================================================

mod transaction_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_preview_purchase() {
        let server = server();
        let ids: Vec<_> = catalog(&server).await.into_iter().map(|d| d.id).collect();

        let response = server
            .post("/api/v1/transactions/preview")
            .json(&json!({
                "operation_type": "usdt_buy",
                "amount": "1000",
                "exchange_rate": "500",
                "deduction_ids": ids,
            }))
            .await;

        response.assert_status_ok();
        let preview = response.json::<PreviewResponse>();
        assert_eq!(preview.net_amount, dec!(950));
        assert_eq!(preview.crypto_amount, dec!(1.9));
        assert_eq!(preview.net_display, "ARS 950.00");
        assert_eq!(preview.crypto_display.as_deref(), Some("1.90000000"));
        assert!(preview.classification.is_crypto_purchase);
    }

    #[tokio::test]
    async fn test_preview_without_operation_passes_amount_through() {
        let response = server()
            .post("/api/v1/transactions/preview")
            .json(&json!({ "operation_type": null, "amount": "42", "exchange_rate": null, "currency": "USD" }))
            .await;

        let preview = response.json::<PreviewResponse>();
        assert_eq!(preview.net_amount, dec!(42));
        assert_eq!(preview.net_display, "$42.00");
        assert_eq!(preview.crypto_display, None);
        assert!(!preview.classification.show_deductions);
    }

    #[tokio::test]
    async fn test_preview_with_blank_operation_type_is_unset() {
        let response = server()
            .post("/api/v1/transactions/preview")
            .json(&json!({ "operation_type": "", "amount": "42", "deduction_ids": [] }))
            .await;

        response.assert_status_ok();
        let preview = response.json::<PreviewResponse>();
        assert_eq!(preview.net_amount, dec!(42));
        assert_eq!(preview.crypto_amount, dec!(0));
        assert!(!preview.classification.show_exchange_rate);
    }

    #[tokio::test]
    async fn test_preview_with_unknown_operation_type_is_rejected() {
        let response = server()
            .post("/api/v1/transactions/preview")
            .json(&json!({ "operation_type": "usdt_swap", "amount": "42" }))
            .await;

        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn test_create_ignores_client_derived_amounts() {
        let server = server();
        let (cashbox, bank_id) = open_cashbox(&server).await;
        let client = register_client(&server).await;
        let ids: Vec<_> = catalog(&server).await.into_iter().map(|d| d.id).collect();

        let response = server
            .post("/api/v1/transactions")
            .add_header(OPERATOR_HEADER, HeaderValue::from_static("teller-2"))
            .json(&json!({
                "client_id": client.id,
                "bank_id": bank_id,
                "cashbox_id": cashbox.id,
                "currency": "ARS",
                "operation_type": "usdt_buy",
                "amount": "1000",
                "exchange_rate": "500",
                "deduction_ids": ids,
                "net_amount": "1",
                "crypto_amount": "999",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.details.net_amount, dec!(950));
        assert_eq!(transaction.details.crypto_amount, Some(dec!(1.9)));

        let listed = server
            .get(&format!("/api/v1/transactions?cashbox_id={}", cashbox.id))
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(listed, vec![transaction]);
    }

    #[tokio::test]
    async fn test_create_against_closed_cashbox_conflicts() {
        let server = server();
        let (cashbox, bank_id) = open_cashbox(&server).await;
        let client = register_client(&server).await;
        server
            .post(&format!("/api/v1/cashboxes/{}/close", cashbox.id))
            .await
            .assert_status_ok();

        let response = server
            .post("/api/v1/transactions")
            .json(&transaction_body(&cashbox, &client, bank_id))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_for_unregistered_client_is_rejected() {
        let server = server();
        let (cashbox, bank_id) = open_cashbox(&server).await;
        let mut body = transaction_body(&cashbox, &register_client(&server).await, bank_id);
        body["client_id"] = json!(ClientId::new());

        let response = server.post("/api/v1/transactions").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<ErrorResponse>().message.contains("Client is not registered"));
    }

    #[tokio::test]
    async fn test_create_for_unregistered_bank_is_rejected() {
        let server = server();
        let (cashbox, _) = open_cashbox(&server).await;
        let client = register_client(&server).await;

        let response = server
            .post("/api/v1/transactions")
            .json(&transaction_body(&cashbox, &client, BankId::new()))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<ErrorResponse>().message.contains("Bank is not registered"));
    }

    #[tokio::test]
    async fn test_create_for_unknown_cashbox_is_not_found() {
        let server = server();
        let (mut cashbox, bank_id) = open_cashbox(&server).await;
        let client = register_client(&server).await;
        cashbox.id = CashboxId::new();

        server
            .post("/api/v1/transactions")
            .json(&transaction_body(&cashbox, &client, bank_id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_sale_without_rate_is_rejected() {
        let server = server();
        let (cashbox, bank_id) = open_cashbox(&server).await;
        let client = register_client(&server).await;
        let mut body = transaction_body(&cashbox, &client, bank_id);
        body["currency"] = json!("USDT");
        body["operation_type"] = json!("usdt_sell");
        body["amount"] = json!("2");

        let response = server.post("/api/v1/transactions").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<ErrorResponse>().error, "validation_error");
    }

    #[tokio::test]
    async fn test_list_with_malformed_filter() {
        server()
            .get("/api/v1/transactions?cashbox_id=nope")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
