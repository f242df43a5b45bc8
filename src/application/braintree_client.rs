use super::configuration_loader::ConfigurationLoader;
use crate::domain::authorization::Authorization;
use crate::domain::configuration::Configuration;
use crate::domain::ports::{ConfigurationCacheBox, GatewayHttpRef, RetryStrategy};
use crate::error::Result;
use tracing::debug;

/// The core client shared by every payment-method client.
///
/// Holds the merchant's authorization and the gateway transport, and resolves
/// the merchant configuration before each gateway call.
pub struct BraintreeClient {
    authorization: Authorization,
    http: GatewayHttpRef,
    configuration_loader: ConfigurationLoader,
}

impl BraintreeClient {
    /// Creates a client whose configuration is loaded through `http` and cached in `cache`.
    pub fn new(
        authorization: Authorization,
        http: GatewayHttpRef,
        cache: ConfigurationCacheBox,
    ) -> Self {
        let configuration_loader = ConfigurationLoader::new(http.clone(), cache);
        Self {
            authorization,
            http,
            configuration_loader,
        }
    }

    /// The authorization every gateway request is sent with.
    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    /// Loads the merchant configuration, from cache when possible.
    pub async fn get_configuration(&self) -> Result<Configuration> {
        let result = self
            .configuration_loader
            .load_configuration(&self.authorization)
            .await?;
        Ok(result.configuration)
    }

    /// Fetches `url` once, without retries.
    pub async fn send_get(&self, url: &str) -> Result<String> {
        let configuration = self.get_configuration().await?;
        debug!(url = %url, "gateway GET");
        self.http
            .get(
                url,
                Some(&configuration),
                &self.authorization,
                RetryStrategy::NoRetry,
            )
            .await
    }

    /// Posts `body` to `path`. Gateway errors are returned unchanged.
    pub async fn send_post(&self, path: &str, body: &str) -> Result<String> {
        let configuration = self.get_configuration().await?;
        self.send_post_with_configuration(path, body, &configuration).await
    }

    /// Like `send_post`, for callers that already hold the configuration.
    pub async fn send_post_with_configuration(
        &self,
        path: &str,
        body: &str,
        configuration: &Configuration,
    ) -> Result<String> {
        debug!(path = %path, "gateway POST");
        self.http
            .post(path, body, configuration, &self.authorization)
            .await
    }
}
