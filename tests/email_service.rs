//! Facade tests against a mocked executor.
//!
//! Each operation must issue exactly one request; the mock's `times(1)`
//! expectation enforces that on drop.

use async_trait::async_trait;
use mockall::{mock, predicate::function};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use cpanel_mail::domain::{Options, Request};
use cpanel_mail::providers::{CpanelError, CpanelResult, RequestExecutor};
use cpanel_mail::services::EmailService;

mock! {
    pub Executor {}

    #[async_trait]
    impl RequestExecutor for Executor {
        async fn perform_request(&self, request: Request) -> CpanelResult<Value>;
    }
}

/// Expects one request whose descriptor equals `expected` and answers with `response`.
fn expect_descriptor(expected: Value, response: Value) -> MockExecutor {
    let mut executor = MockExecutor::new();
    executor
        .expect_perform_request()
        .with(function(move |request: &Request| {
            Value::Object(request.descriptor()) == expected
        }))
        .times(1)
        .returning(move |_| Ok(response.clone()));
    executor
}

// ============================================================================
// Function selection
// ============================================================================

#[tokio::test]
async fn accounts_without_style_lists_with_disk() {
    let service = EmailService::new(expect_descriptor(
        json!({"api_function": "listpopswithdisk"}),
        json!({}),
    ));

    service.accounts(Options::new()).await.unwrap();
}

#[tokio::test]
async fn accounts_without_disk_style() {
    let service = EmailService::new(expect_descriptor(
        json!({"api_function": "listpops", "domain": "example.com"}),
        json!({}),
    ));

    service
        .accounts(
            Options::new()
                .with("style", "without_disk")
                .with("domain", "example.com"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn accounts_unrecognized_style_falls_back() {
    let service = EmailService::new(expect_descriptor(
        json!({"api_function": "listpopswithdisk"}),
        json!({}),
    ));

    service
        .accounts(Options::new().with("style", "with_colors"))
        .await
        .unwrap();
}

#[tokio::test]
async fn filters_old_style_is_consumed() {
    let service = EmailService::new(expect_descriptor(
        json!({"api_function": "listfilters"}),
        json!({}),
    ));

    service
        .filters(Options::new().with("old_style", true))
        .await
        .unwrap();
}

// ============================================================================
// Argument handling
// ============================================================================

#[tokio::test]
async fn set_mail_delivery_derives_mxcheck() {
    let service = EmailService::new(expect_descriptor(
        json!({
            "api_function": "setalwaysaccept",
            "domain": "x.com",
            "delivery": "local",
            "mxcheck": "local",
        }),
        json!({}),
    ));

    service
        .set_mail_delivery(Options::new().with("domain", "x.com").with("delivery", "local"))
        .await
        .unwrap();
}

#[tokio::test]
async fn add_mailing_list_pins_api_version_one() {
    let service = EmailService::new(expect_descriptor(
        json!({
            "api_function": "addlist",
            "api_version": 1,
            "arg-0": "l",
            "arg-1": "p",
            "arg-2": "d.com",
        }),
        json!({}),
    ));

    service
        .add_mailing_list(
            Options::new()
                .with("list", "l")
                .with("password", "p")
                .with("domain", "d.com"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn add_account_forwards_every_option() {
    let service = EmailService::new(expect_descriptor(
        json!({
            "api_function": "addpop",
            "domain": "example.com",
            "email": "user",
            "password": "hunter2",
            "quota": 0,
        }),
        json!({}),
    ));

    service
        .add_account(
            Options::new()
                .with("domain", "example.com")
                .with("email", "user")
                .with("password", "hunter2")
                .with("quota", 0),
        )
        .await
        .unwrap();
}

// ============================================================================
// Pass-through
// ============================================================================

#[tokio::test]
async fn response_is_returned_unchanged() {
    let body = json!({
        "cpanelresult": {
            "apiversion": 2,
            "data": [{"domain": "example.com", "mx": "mail.example.com", "priority": 0}],
            "event": {"result": 1},
            "func": "listmxs",
            "module": "Email",
        }
    });
    let service = EmailService::new(expect_descriptor(
        json!({"api_function": "listmxs", "domain": "example.com"}),
        body.clone(),
    ));

    let response = service
        .mx(Options::new().with("domain", "example.com"))
        .await
        .unwrap();

    assert_eq!(response, body);
}

#[tokio::test]
async fn executor_error_reaches_caller() {
    let mut executor = MockExecutor::new();
    executor
        .expect_perform_request()
        .times(1)
        .returning(|_| Err(CpanelError::Authentication("bad hash".to_string())));
    let service = EmailService::new(executor);

    let result = service.domains(Options::new()).await;

    assert!(matches!(result, Err(CpanelError::Authentication(_))));
}
