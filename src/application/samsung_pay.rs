use super::braintree_client::BraintreeClient;
use crate::domain::ports::SamsungPayInternalClientBox;
use crate::domain::samsung_pay::{SamsungPayCardBrand, SamsungPayStatus};
use crate::error::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Entry point for Samsung Pay.
///
/// Device-side work is forwarded to the injected internal client; the only
/// logic here is the readiness check.
pub struct SamsungPayClient {
    braintree_client: Arc<BraintreeClient>,
    internal_client: SamsungPayInternalClientBox,
}

impl SamsungPayClient {
    /// Creates a client that forwards device calls to `internal_client`.
    pub fn new(
        braintree_client: Arc<BraintreeClient>,
        internal_client: SamsungPayInternalClientBox,
    ) -> Self {
        Self {
            braintree_client,
            internal_client,
        }
    }

    /// Replaces the internal client, for tests and custom device integrations.
    pub fn set_internal_client(&mut self, internal_client: SamsungPayInternalClientBox) {
        self.internal_client = internal_client;
    }

    /// Opens the Samsung Pay update page on the device.
    pub fn go_to_update_page(&self) {
        self.internal_client.go_to_samsung_pay_update_page();
    }

    /// Starts Samsung Pay setup on the device.
    pub fn activate_samsung_pay(&self) {
        self.internal_client.activate_samsung_pay();
    }

    /// True when Samsung Pay is ready and the wallet holds a card that both the
    /// merchant's Braintree account and Samsung Pay accept.
    ///
    /// A status other than `Ready` answers `false` without consulting anything else.
    pub async fn is_ready_to_pay(&self) -> Result<bool> {
        let status = self.internal_client.get_samsung_pay_status().await?;
        if status != SamsungPayStatus::Ready {
            debug!(?status, "samsung pay not ready");
            return Ok(false);
        }

        let accepted = self.braintree_accepted_card_brands().await?;
        if accepted.is_empty() {
            debug!("no braintree card brands usable with samsung pay");
            return Ok(false);
        }

        let wallet = self.internal_client.get_wallet_card_brands().await?;
        Ok(wallet.iter().any(|brand| accepted.contains(brand)))
    }

    /// Card brands enabled for Samsung Pay in the merchant configuration.
    pub async fn braintree_accepted_card_brands(&self) -> Result<HashSet<SamsungPayCardBrand>> {
        let configuration = self.braintree_client.get_configuration().await?;
        Ok(configuration
            .samsung_pay()
            .supported_card_brands
            .iter()
            .filter_map(|name| SamsungPayCardBrand::from_gateway_name(name))
            .collect())
    }
}
