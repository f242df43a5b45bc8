use super::braintree_client::BraintreeClient;
use crate::domain::paypal::{PayPalResponse, PayPalVaultRequest};
use crate::domain::ports::{PayPalInternalClient, PayPalInternalClientBox};
use crate::error::{BraintreeError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Gateway path that creates a PayPal billing agreement.
pub const SETUP_BILLING_AGREEMENT_PATH: &str = "/v1/paypal_hermes/setup_billing_agreement";

/// Entry point for PayPal vault flows.
pub struct PayPalClient {
    internal_client: PayPalInternalClientBox,
}

impl PayPalClient {
    /// Uses the gateway-backed internal client.
    pub fn new(braintree_client: Arc<BraintreeClient>, return_url_scheme: impl Into<String>) -> Self {
        Self {
            internal_client: Box::new(GatewayPayPalInternalClient::new(
                braintree_client,
                return_url_scheme,
            )),
        }
    }

    /// Uses a caller-supplied internal client.
    pub fn with_internal_client(internal_client: PayPalInternalClientBox) -> Self {
        Self { internal_client }
    }

    /// Replaces the internal client that requests are forwarded to.
    pub fn set_internal_client(&mut self, internal_client: PayPalInternalClientBox) {
        self.internal_client = internal_client;
    }

    /// Forwards `request` to the internal client and returns its answer unchanged.
    pub async fn request_billing_agreement(
        &self,
        request: &PayPalVaultRequest,
    ) -> Result<PayPalResponse> {
        self.internal_client.send_request(request).await
    }
}

/// Sets up billing agreements through the gateway.
pub struct GatewayPayPalInternalClient {
    braintree_client: Arc<BraintreeClient>,
    return_url_scheme: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetupResponse {
    agreement_setup: Option<AgreementSetup>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgreementSetup {
    approval_url: Option<String>,
}

impl GatewayPayPalInternalClient {
    /// Return and cancel URLs are built from `return_url_scheme`.
    pub fn new(braintree_client: Arc<BraintreeClient>, return_url_scheme: impl Into<String>) -> Self {
        Self {
            braintree_client,
            return_url_scheme: return_url_scheme.into(),
        }
    }

    /// `{scheme}://onetouch/v1/success`
    pub fn success_url(&self) -> String {
        format!("{}://onetouch/v1/success", self.return_url_scheme)
    }

    /// `{scheme}://onetouch/v1/cancel`
    pub fn cancel_url(&self) -> String {
        format!("{}://onetouch/v1/cancel", self.return_url_scheme)
    }
}

#[async_trait]
impl PayPalInternalClient for GatewayPayPalInternalClient {
    async fn send_request(&self, request: &PayPalVaultRequest) -> Result<PayPalResponse> {
        let configuration = self.braintree_client.get_configuration().await?;
        if !configuration.is_paypal_enabled() {
            return Err(BraintreeError::PayPalDisabled);
        }

        let success_url = self.success_url();
        let body = request.to_json(&success_url, &self.cancel_url()).to_string();
        debug!("requesting paypal billing agreement");
        let response = self
            .braintree_client
            .send_post_with_configuration(SETUP_BILLING_AGREEMENT_PATH, &body, &configuration)
            .await?;

        let parsed: SetupResponse = serde_json::from_str(&response)?;
        let approval_url = parsed
            .agreement_setup
            .and_then(|setup| setup.approval_url)
            .ok_or_else(|| {
                BraintreeError::UnexpectedResponse("missing agreementSetup.approvalUrl".to_string())
            })?;

        Ok(PayPalResponse::new(approval_url, success_url))
    }
}
