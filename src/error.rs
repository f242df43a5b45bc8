use thiserror::Error;

#[derive(Error, Debug)]
pub enum BraintreeError {
    /// Raised by the gateway when the credential lacks permission for an endpoint.
    #[error("{0}")]
    Authorization(String),
    #[error("{0}")]
    InvalidAuthorization(String),
    #[error("Request for configuration has failed: {0}")]
    Configuration(String),
    #[error("{0}")]
    Http(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parcel error: {0}")]
    Codec(String),
    #[error("Configuration cache error: {0}")]
    Cache(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unexpected gateway response: {0}")]
    UnexpectedResponse(String),
    #[error("PayPal is not enabled. See https://developer.paypal.com/braintree/docs for more information.")]
    PayPalDisabled,
    #[error("Samsung Pay error: {0}")]
    SamsungPay(String),
}

pub type Result<T> = std::result::Result<T, BraintreeError>;
