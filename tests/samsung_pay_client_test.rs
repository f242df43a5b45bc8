mod common;

use braintree_sdk::application::samsung_pay::SamsungPayClient;
use braintree_sdk::domain::samsung_pay::{NotReadyReason, SamsungPayCardBrand, SamsungPayStatus};
use braintree_sdk::error::BraintreeError;
use common::{
    CONFIGURATION_WITHOUT_PAYMENT_METHODS, MockGatewayBuilder, MockSamsungPayInternalClientBuilder,
    SamsungPayCalls, braintree_client, client_token,
};

#[test]
fn test_go_to_update_page_forwards_invocation_to_internal_client() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new().build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    sut.go_to_update_page();

    assert_eq!(SamsungPayCalls::get(&calls.update_page), 1);
    assert_eq!(SamsungPayCalls::get(&calls.activate), 0);
}

#[test]
fn test_activate_samsung_pay_forwards_invocation_to_internal_client() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new().build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    sut.activate_samsung_pay();

    assert_eq!(SamsungPayCalls::get(&calls.activate), 1);
    assert_eq!(SamsungPayCalls::get(&calls.update_page), 0);
}

#[test]
fn test_set_internal_client_replaces_collaborator() {
    let gateway = MockGatewayBuilder::new().build();
    let (first, first_calls) = MockSamsungPayInternalClientBuilder::new().build();
    let (second, second_calls) = MockSamsungPayInternalClientBuilder::new().build();
    let mut sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), first);

    sut.set_internal_client(second);
    sut.activate_samsung_pay();

    assert_eq!(SamsungPayCalls::get(&first_calls.activate), 0);
    assert_eq!(SamsungPayCalls::get(&second_calls.activate), 1);
}

#[tokio::test]
async fn test_is_ready_to_pay_when_samsung_pay_not_ready_returns_false() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new()
        .get_samsung_pay_status_success(SamsungPayStatus::NotReady(
            NotReadyReason::SetupNotCompleted,
        ))
        .wallet_card_brands(vec![SamsungPayCardBrand::Visa])
        .build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    assert!(!sut.is_ready_to_pay().await.unwrap());

    // Short-circuits: no configuration fetch, no wallet lookup.
    assert_eq!(SamsungPayCalls::get(&calls.status), 1);
    assert_eq!(SamsungPayCalls::get(&calls.wallet), 0);
    assert_eq!(gateway.get_count(), 0);
}

#[tokio::test]
async fn test_is_ready_to_pay_when_samsung_pay_not_supported_returns_false() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new()
        .get_samsung_pay_status_success(SamsungPayStatus::NotSupported)
        .build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    assert!(!sut.is_ready_to_pay().await.unwrap());
    assert_eq!(SamsungPayCalls::get(&calls.wallet), 0);
    assert_eq!(gateway.get_count(), 0);
}

#[tokio::test]
async fn test_is_ready_to_pay_when_ready_and_accepted_cards_exist_returns_true() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new()
        .get_samsung_pay_status_success(SamsungPayStatus::Ready)
        .wallet_card_brands(vec![SamsungPayCardBrand::Discover, SamsungPayCardBrand::Visa])
        .build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    assert!(sut.is_ready_to_pay().await.unwrap());
    assert_eq!(SamsungPayCalls::get(&calls.wallet), 1);
}

#[tokio::test]
async fn test_is_ready_to_pay_when_no_braintree_accepted_cards_exist_returns_false() {
    let gateway = MockGatewayBuilder::new()
        .configuration(CONFIGURATION_WITHOUT_PAYMENT_METHODS)
        .build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new()
        .wallet_card_brands(vec![SamsungPayCardBrand::Visa])
        .build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    assert!(!sut.is_ready_to_pay().await.unwrap());
    assert_eq!(SamsungPayCalls::get(&calls.wallet), 0);
}

#[tokio::test]
async fn test_is_ready_to_pay_when_no_samsung_pay_accepted_cards_exist_returns_false() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, _calls) = MockSamsungPayInternalClientBuilder::new()
        .wallet_card_brands(vec![SamsungPayCardBrand::AmericanExpress])
        .build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    assert!(!sut.is_ready_to_pay().await.unwrap());
}

#[tokio::test]
async fn test_is_ready_to_pay_forwards_status_error() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, calls) = MockSamsungPayInternalClientBuilder::new()
        .get_samsung_pay_status_error("service unavailable")
        .build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    let result = sut.is_ready_to_pay().await;

    assert!(matches!(result, Err(BraintreeError::SamsungPay(ref m)) if m == "service unavailable"));
    assert_eq!(SamsungPayCalls::get(&calls.wallet), 0);
}

#[tokio::test]
async fn test_braintree_accepted_card_brands_ignores_unknown_brands() {
    let gateway = MockGatewayBuilder::new().build();
    let (internal_client, _calls) = MockSamsungPayInternalClientBuilder::new().build();
    let sut = SamsungPayClient::new(braintree_client(&gateway, client_token()), internal_client);

    let brands = sut.braintree_accepted_card_brands().await.unwrap();

    assert_eq!(brands.len(), 2);
    assert!(brands.contains(&SamsungPayCardBrand::Visa));
    assert!(brands.contains(&SamsungPayCardBrand::Mastercard));
}
