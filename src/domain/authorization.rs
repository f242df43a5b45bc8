/// Credentials used to talk to the gateway, already decomposed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// Publishable key with restricted permissions.
    TokenizationKey { key: String, config_url: String },
    /// Server-generated client token.
    ClientToken {
        authorization_fingerprint: String,
        config_url: String,
    },
    /// A credential that failed to parse; `error_message` is reported on first use.
    Invalid { raw: String, error_message: String },
}

impl Authorization {
    pub fn config_url(&self) -> &str {
        match self {
            Authorization::TokenizationKey { config_url, .. }
            | Authorization::ClientToken { config_url, .. } => config_url,
            Authorization::Invalid { .. } => "",
        }
    }

    /// The value sent as the bearer credential.
    pub fn bearer(&self) -> &str {
        match self {
            Authorization::TokenizationKey { key, .. } => key,
            Authorization::ClientToken {
                authorization_fingerprint,
                ..
            } => authorization_fingerprint,
            Authorization::Invalid { raw, .. } => raw,
        }
    }

    pub fn is_tokenization_key(&self) -> bool {
        matches!(self, Authorization::TokenizationKey { .. })
    }
}
