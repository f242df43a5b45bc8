use super::braintree_client::BraintreeClient;
use crate::domain::three_d_secure::{ThreeDSecureRequest, ThreeDSecureResult};
use crate::error::{BraintreeError, Result};
use std::sync::Arc;
use tracing::debug;

/// Runs 3-D Secure lookups through the core client.
pub struct ThreeDSecureClient {
    braintree_client: Arc<BraintreeClient>,
}

impl ThreeDSecureClient {
    /// Creates a client that posts lookups through `braintree_client`.
    pub fn new(braintree_client: Arc<BraintreeClient>) -> Self {
        Self { braintree_client }
    }

    /// Runs a 3-D Secure lookup for the request's nonce.
    ///
    /// The nonce becomes a path segment, so it must be non-empty and made of ASCII
    /// letters, digits, `-` and `_`. Gateway errors, including the authorization
    /// error returned for tokenization keys, are returned as-is.
    pub async fn perform_lookup(&self, request: &ThreeDSecureRequest) -> Result<ThreeDSecureResult> {
        let nonce = request
            .nonce()
            .ok_or_else(|| BraintreeError::InvalidArgument("nonce is required".to_string()))?;
        if !is_path_safe(nonce) {
            return Err(BraintreeError::InvalidArgument(format!(
                "nonce {nonce:?} is not a valid path segment"
            )));
        }
        if request.amount().is_none() {
            return Err(BraintreeError::InvalidArgument(
                "amount is required".to_string(),
            ));
        }

        let path = format!("/v1/payment_methods/{nonce}/three_d_secure/lookup");
        debug!(path = %path, "3ds lookup");
        let body = self
            .braintree_client
            .send_post(&path, &request.to_json().to_string())
            .await?;

        ThreeDSecureResult::from_json(&body)
    }
}

fn is_path_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
