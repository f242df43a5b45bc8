#![allow(dead_code)]

use async_trait::async_trait;
use braintree_sdk::application::braintree_client::BraintreeClient;
use braintree_sdk::domain::authorization::Authorization;
use braintree_sdk::domain::configuration::Configuration;
use braintree_sdk::domain::ports::{
    ConfigurationCache, GatewayHttp, GatewayHttpRef, RetryStrategy, SamsungPayInternalClient,
};
use braintree_sdk::domain::samsung_pay::{SamsungPayCardBrand, SamsungPayStatus};
use braintree_sdk::error::{BraintreeError, Result};
use braintree_sdk::infrastructure::in_memory::InMemoryConfigurationCache;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const CONFIG_URL: &str = "https://example.com/config";

pub const CONFIGURATION: &str = r#"{
    "environment": "sandbox",
    "clientApiUrl": "https://api.sandbox.braintreegateway.com:443/merchants/integration_merchant_id/client_api",
    "merchantId": "integration_merchant_id",
    "paypalEnabled": true,
    "threeDSecureEnabled": true,
    "samsungPay": {
        "displayName": "some example merchant",
        "serviceId": "some-service-id",
        "supportedCardBrands": ["visa", "mastercard", "jcb"],
        "samsungAuthorization": "example-samsung-authorization",
        "environment": "SANDBOX"
    }
}"#;

pub const CONFIGURATION_WITHOUT_PAYMENT_METHODS: &str = r#"{
    "environment": "sandbox",
    "merchantId": "integration_merchant_id",
    "paypalEnabled": false,
    "samsungPay": {"supportedCardBrands": ["jcb"]}
}"#;

pub const TOKENIZATION_KEY_ERROR: &str = "Tokenization key authorization not allowed for this endpoint. Please use an authentication method with upgraded permissions";

pub fn client_token() -> Authorization {
    Authorization::ClientToken {
        authorization_fingerprint: "bearer".to_string(),
        config_url: CONFIG_URL.to_string(),
    }
}

pub fn tokenization_key() -> Authorization {
    Authorization::TokenizationKey {
        key: "sandbox_tmxhyf7d_dcpspy2brwdjr3qn".to_string(),
        config_url: CONFIG_URL.to_string(),
    }
}

/// A canned gateway reply. Errors are rebuilt per call since `BraintreeError` is not `Clone`.
#[derive(Clone, Debug)]
pub enum Reply {
    Body(String),
    HttpError(String),
    AuthorizationError(String),
}

impl Reply {
    fn into_result(self) -> Result<String> {
        match self {
            Reply::Body(body) => Ok(body),
            Reply::HttpError(message) => Err(BraintreeError::Http(message)),
            Reply::AuthorizationError(message) => Err(BraintreeError::Authorization(message)),
        }
    }
}

/// Records every request and answers from canned replies.
pub struct MockGateway {
    get_reply: Reply,
    post_replies: HashMap<String, Reply>,
    pub gets: Mutex<Vec<(String, RetryStrategy)>>,
    pub posts: Mutex<Vec<(String, String)>>,
}

impl MockGateway {
    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayHttp for MockGateway {
    async fn get(
        &self,
        url: &str,
        _configuration: Option<&Configuration>,
        _authorization: &Authorization,
        retry: RetryStrategy,
    ) -> Result<String> {
        self.gets.lock().unwrap().push((url.to_string(), retry));
        self.get_reply.clone().into_result()
    }

    async fn post(
        &self,
        path: &str,
        body: &str,
        _configuration: &Configuration,
        _authorization: &Authorization,
    ) -> Result<String> {
        self.posts
            .lock()
            .unwrap()
            .push((path.to_string(), body.to_string()));
        self.post_replies
            .get(path)
            .cloned()
            .unwrap_or_else(|| Reply::HttpError(format!("no reply for {path}")))
            .into_result()
    }
}

pub struct MockGatewayBuilder {
    get_reply: Reply,
    post_replies: HashMap<String, Reply>,
}

impl MockGatewayBuilder {
    pub fn new() -> Self {
        Self {
            get_reply: Reply::Body(CONFIGURATION.to_string()),
            post_replies: HashMap::new(),
        }
    }

    pub fn configuration(mut self, body: &str) -> Self {
        self.get_reply = Reply::Body(body.to_string());
        self
    }

    pub fn get_reply(mut self, reply: Reply) -> Self {
        self.get_reply = reply;
        self
    }

    pub fn post_reply(mut self, path: &str, reply: Reply) -> Self {
        self.post_replies.insert(path.to_string(), reply);
        self
    }

    pub fn build(self) -> Arc<MockGateway> {
        Arc::new(MockGateway {
            get_reply: self.get_reply,
            post_replies: self.post_replies,
            gets: Mutex::default(),
            posts: Mutex::default(),
        })
    }
}

pub fn braintree_client(gateway: &Arc<MockGateway>, authorization: Authorization) -> Arc<BraintreeClient> {
    let http: GatewayHttpRef = gateway.clone();
    Arc::new(BraintreeClient::new(
        authorization,
        http,
        Box::new(InMemoryConfigurationCache::new()),
    ))
}

/// A cache whose every operation fails.
pub struct FailingCache;

#[async_trait]
impl ConfigurationCache for FailingCache {
    async fn get_configuration(&self, _cache_key: &str) -> Result<Option<String>> {
        Err(BraintreeError::Cache("cache load error".to_string()))
    }

    async fn save_configuration(&self, _configuration: &Configuration, _cache_key: &str) -> Result<()> {
        Err(BraintreeError::Cache("cache save error".to_string()))
    }
}

#[derive(Default, Debug)]
pub struct SamsungPayCalls {
    pub update_page: AtomicUsize,
    pub activate: AtomicUsize,
    pub status: AtomicUsize,
    pub wallet: AtomicUsize,
}

impl SamsungPayCalls {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub struct MockSamsungPayInternalClient {
    status: std::result::Result<SamsungPayStatus, String>,
    wallet: Vec<SamsungPayCardBrand>,
    calls: Arc<SamsungPayCalls>,
}

#[async_trait]
impl SamsungPayInternalClient for MockSamsungPayInternalClient {
    fn go_to_samsung_pay_update_page(&self) {
        self.calls.update_page.fetch_add(1, Ordering::SeqCst);
    }

    fn activate_samsung_pay(&self) {
        self.calls.activate.fetch_add(1, Ordering::SeqCst);
    }

    async fn get_samsung_pay_status(&self) -> Result<SamsungPayStatus> {
        self.calls.status.fetch_add(1, Ordering::SeqCst);
        self.status.clone().map_err(BraintreeError::SamsungPay)
    }

    async fn get_wallet_card_brands(&self) -> Result<Vec<SamsungPayCardBrand>> {
        self.calls.wallet.fetch_add(1, Ordering::SeqCst);
        Ok(self.wallet.clone())
    }
}

pub struct MockSamsungPayInternalClientBuilder {
    status: std::result::Result<SamsungPayStatus, String>,
    wallet: Vec<SamsungPayCardBrand>,
}

impl MockSamsungPayInternalClientBuilder {
    pub fn new() -> Self {
        Self {
            status: Ok(SamsungPayStatus::Ready),
            wallet: Vec::new(),
        }
    }

    pub fn get_samsung_pay_status_success(mut self, status: SamsungPayStatus) -> Self {
        self.status = Ok(status);
        self
    }

    pub fn get_samsung_pay_status_error(mut self, message: &str) -> Self {
        self.status = Err(message.to_string());
        self
    }

    pub fn wallet_card_brands(mut self, brands: Vec<SamsungPayCardBrand>) -> Self {
        self.wallet = brands;
        self
    }

    pub fn build(self) -> (Box<MockSamsungPayInternalClient>, Arc<SamsungPayCalls>) {
        let calls = Arc::new(SamsungPayCalls::default());
        let client = MockSamsungPayInternalClient {
            status: self.status,
            wallet: self.wallet,
            calls: calls.clone(),
        };
        (Box::new(client), calls)
    }
}
