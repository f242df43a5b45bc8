use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// Merchant configuration served by the gateway.
///
/// The parsed fields cover what the clients in this crate consult; the raw
/// document is kept so `to_json` reproduces the response exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    raw: Value,
    environment: Option<String>,
    client_api_url: Option<String>,
    merchant_id: Option<String>,
    paypal_enabled: bool,
    three_d_secure_enabled: bool,
    samsung_pay: SamsungPayConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamsungPayConfiguration {
    pub display_name: Option<String>,
    pub service_id: Option<String>,
    pub supported_card_brands: Vec<String>,
    pub samsung_authorization: Option<String>,
    pub environment: Option<String>,
}

impl SamsungPayConfiguration {
    pub fn is_enabled(&self) -> bool {
        self.samsung_authorization
            .as_deref()
            .is_some_and(|auth| !auth.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigurationWire {
    environment: Option<String>,
    client_api_url: Option<String>,
    merchant_id: Option<String>,
    #[serde(default)]
    paypal_enabled: bool,
    #[serde(default)]
    three_d_secure_enabled: bool,
    #[serde(default)]
    samsung_pay: SamsungPayConfiguration,
}

impl Configuration {
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(body)?;
        let wire = ConfigurationWire::deserialize(&raw)?;

        Ok(Self {
            environment: wire.environment,
            client_api_url: wire.client_api_url,
            merchant_id: wire.merchant_id,
            paypal_enabled: wire.paypal_enabled,
            three_d_secure_enabled: wire.three_d_secure_enabled,
            samsung_pay: wire.samsung_pay,
            raw,
        })
    }

    pub fn to_json(&self) -> String {
        self.raw.to_string()
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn client_api_url(&self) -> Option<&str> {
        self.client_api_url.as_deref()
    }

    pub fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    pub fn is_paypal_enabled(&self) -> bool {
        self.paypal_enabled
    }

    pub fn is_three_d_secure_enabled(&self) -> bool {
        self.three_d_secure_enabled
    }

    pub fn samsung_pay(&self) -> &SamsungPayConfiguration {
        &self.samsung_pay
    }
}
