//! Domain layer: gateway value objects, response objects and the ports
//! through which the application layer reaches external collaborators.

/// Generates a chained setter and a borrowing getter for each optional string field.
macro_rules! optional_string_fields {
    ($ty:ty { $($field:ident => $setter:ident),* $(,)? }) => {
        impl $ty {
            $(
                pub fn $setter(mut self, value: impl Into<String>) -> Self {
                    self.$field = Some(value.into());
                    self
                }

                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }
            )*
        }
    };
}

pub mod address;
pub mod authorization;
pub mod configuration;
pub mod nonce;
pub mod paypal;
pub mod ports;
pub mod samsung_pay;
pub mod three_d_secure;
