use crate::domain::authorization::Authorization;
use crate::domain::configuration::Configuration;
use crate::domain::ports::{ConfigurationCacheBox, GatewayHttpRef, RetryStrategy};
use crate::error::{BraintreeError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tracing::{debug, warn};

/// Version of the configuration document requested from the gateway.
pub const CONFIG_VERSION: u32 = 3;

/// A loaded configuration plus any cache failures encountered on the way.
///
/// Cache failures never fail the load; they are reported here so callers can log them.
#[derive(Debug)]
pub struct ConfigurationLoaderResult {
    pub configuration: Configuration,
    pub load_from_cache_error: Option<BraintreeError>,
    pub save_to_cache_error: Option<BraintreeError>,
}

/// Fetches the merchant configuration, preferring a cached copy.
pub struct ConfigurationLoader {
    http: GatewayHttpRef,
    cache: ConfigurationCacheBox,
}

impl ConfigurationLoader {
    /// Creates a loader that fetches through `http` and caches in `cache`.
    pub fn new(http: GatewayHttpRef, cache: ConfigurationCacheBox) -> Self {
        Self { http, cache }
    }

    /// Returns the cached configuration when present, otherwise fetches and caches it.
    ///
    /// Fetch failures become `Configuration` errors; an invalid authorization fails
    /// before any I/O.
    pub async fn load_configuration(
        &self,
        authorization: &Authorization,
    ) -> Result<ConfigurationLoaderResult> {
        if let Authorization::Invalid { error_message, .. } = authorization {
            return Err(BraintreeError::InvalidAuthorization(error_message.clone()));
        }

        let url = format!(
            "{}?configVersion={}",
            authorization.config_url(),
            CONFIG_VERSION
        );
        let cache_key = cache_key(&url, authorization);

        let mut load_from_cache_error = None;
        match self.cache.get_configuration(&cache_key).await {
            Ok(Some(cached)) => match Configuration::from_json(&cached) {
                Ok(configuration) => {
                    debug!(url = %url, "configuration loaded from cache");
                    return Ok(ConfigurationLoaderResult {
                        configuration,
                        load_from_cache_error: None,
                        save_to_cache_error: None,
                    });
                }
                Err(e) => warn!(error = %e, "ignoring unparseable cached configuration"),
            },
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "configuration cache read failed");
                load_from_cache_error = Some(e);
            }
        }

        debug!(url = %url, "fetching configuration");
        let body = self
            .http
            .get(&url, None, authorization, RetryStrategy::RetryMax3Times)
            .await
            .map_err(|e| BraintreeError::Configuration(e.to_string()))?;
        let configuration = Configuration::from_json(&body)?;

        let save_to_cache_error = self
            .cache
            .save_configuration(&configuration, &cache_key)
            .await
            .err();
        if let Some(e) = &save_to_cache_error {
            warn!(error = %e, "configuration cache write failed");
        }

        Ok(ConfigurationLoaderResult {
            configuration,
            load_from_cache_error,
            save_to_cache_error,
        })
    }
}

/// Standard base64 of the configuration URL followed by the bearer credential.
pub fn cache_key(url: &str, authorization: &Authorization) -> String {
    BASE64_STANDARD.encode(format!("{url}{}", authorization.bearer()))
}
