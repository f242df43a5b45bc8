//! Application layer: the core gateway client and the payment-method clients
//! built on top of it.
//!
//! Payment-method clients forward to an injected collaborator and hand back
//! whatever it produced, untouched.

pub mod braintree_client;
pub mod configuration_loader;
pub mod paypal;
pub mod samsung_pay;
pub mod three_d_secure;
