use super::authorization::Authorization;
use super::configuration::Configuration;
use super::paypal::{PayPalResponse, PayPalVaultRequest};
use super::samsung_pay::{SamsungPayCardBrand, SamsungPayStatus};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStrategy {
    NoRetry,
    RetryMax3Times,
}

/// Transport to the gateway. Errors, including authorization failures, are
/// returned exactly as the gateway reported them.
#[async_trait]
pub trait GatewayHttp: Send + Sync {
    async fn get(
        &self,
        url: &str,
        configuration: Option<&Configuration>,
        authorization: &Authorization,
        retry: RetryStrategy,
    ) -> Result<String>;

    async fn post(
        &self,
        path: &str,
        body: &str,
        configuration: &Configuration,
        authorization: &Authorization,
    ) -> Result<String>;
}

#[async_trait]
pub trait ConfigurationCache: Send + Sync {
    async fn get_configuration(&self, cache_key: &str) -> Result<Option<String>>;
    async fn save_configuration(&self, configuration: &Configuration, cache_key: &str)
    -> Result<()>;
}

/// Bridge to the Samsung Pay SDK on the device.
#[async_trait]
pub trait SamsungPayInternalClient: Send + Sync {
    fn go_to_samsung_pay_update_page(&self);
    fn activate_samsung_pay(&self);
    async fn get_samsung_pay_status(&self) -> Result<SamsungPayStatus>;
    /// Brands of the cards the user has added to their Samsung Pay wallet.
    async fn get_wallet_card_brands(&self) -> Result<Vec<SamsungPayCardBrand>>;
}

#[async_trait]
pub trait PayPalInternalClient: Send + Sync {
    async fn send_request(&self, request: &PayPalVaultRequest) -> Result<PayPalResponse>;
}

/// Shared between the core client and its configuration loader.
pub type GatewayHttpRef = Arc<dyn GatewayHttp>;
pub type ConfigurationCacheBox = Box<dyn ConfigurationCache>;
pub type SamsungPayInternalClientBox = Box<dyn SamsungPayInternalClient>;
pub type PayPalInternalClientBox = Box<dyn PayPalInternalClient>;
