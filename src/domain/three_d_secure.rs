use crate::codec::{Parcel, ParcelReader, Parcelable};
use crate::domain::nonce::CardNonce;
use crate::error::Result;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Billing address and cardholder details sent with a 3-D Secure lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ThreeDSecurePostalAddress {
    street_address: Option<String>,
    extended_address: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country_code_alpha2: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
}

optional_string_fields!(ThreeDSecurePostalAddress {
    street_address => with_street_address,
    extended_address => with_extended_address,
    locality => with_locality,
    region => with_region,
    postal_code => with_postal_code,
    country_code_alpha2 => with_country_code_alpha2,
    first_name => with_first_name,
    last_name => with_last_name,
    phone_number => with_phone_number,
});

impl ThreeDSecurePostalAddress {
    pub fn new() -> Self {
        Self::default()
    }

    fn has_billing_address(&self) -> bool {
        [
            &self.street_address,
            &self.extended_address,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country_code_alpha2,
        ]
        .iter()
        .any(|field| field.is_some())
    }

    /// Exports the gateway representation.
    ///
    /// Unset fields are emitted as `null`. The `billingAddress` group is `null`
    /// as a whole when none of its members is set.
    pub fn to_json(&self) -> Value {
        let billing_address = if self.has_billing_address() {
            json!({
                "line1": self.street_address,
                "line2": self.extended_address,
                "city": self.locality,
                "state": self.region,
                "postalCode": self.postal_code,
                "countryCode": self.country_code_alpha2,
            })
        } else {
            Value::Null
        };

        json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "phoneNumber": self.phone_number,
            "billingAddress": billing_address,
        })
    }
}

/// Field order: street address, extended address, locality, region, postal code,
/// country code, first name, last name, phone number.
impl Parcelable for ThreeDSecurePostalAddress {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_string(self.street_address.as_deref())?;
        parcel.write_string(self.extended_address.as_deref())?;
        parcel.write_string(self.locality.as_deref())?;
        parcel.write_string(self.region.as_deref())?;
        parcel.write_string(self.postal_code.as_deref())?;
        parcel.write_string(self.country_code_alpha2.as_deref())?;
        parcel.write_string(self.first_name.as_deref())?;
        parcel.write_string(self.last_name.as_deref())?;
        parcel.write_string(self.phone_number.as_deref())?;
        Ok(())
    }

    fn read_from(reader: &mut ParcelReader) -> Result<Self> {
        Ok(Self {
            street_address: reader.read_string()?,
            extended_address: reader.read_string()?,
            locality: reader.read_string()?,
            region: reader.read_string()?,
            postal_code: reader.read_string()?,
            country_code_alpha2: reader.read_string()?,
            first_name: reader.read_string()?,
            last_name: reader.read_string()?,
            phone_number: reader.read_string()?,
        })
    }
}

/// Parameters for a 3-D Secure lookup against a tokenized card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ThreeDSecureRequest {
    nonce: Option<String>,
    amount: Option<String>,
    email: Option<String>,
    mobile_phone_number: Option<String>,
    shipping_method: Option<String>,
    billing_address: Option<ThreeDSecurePostalAddress>,
}

optional_string_fields!(ThreeDSecureRequest {
    nonce => with_nonce,
    amount => with_amount,
    email => with_email,
    mobile_phone_number => with_mobile_phone_number,
    shipping_method => with_shipping_method,
});

impl ThreeDSecureRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_billing_address(mut self, address: ThreeDSecurePostalAddress) -> Self {
        self.billing_address = Some(address);
        self
    }

    pub fn billing_address(&self) -> Option<&ThreeDSecurePostalAddress> {
        self.billing_address.as_ref()
    }

    /// Lookup body: `{"amount", "customer"}`, where `customer` is the billing
    /// address export extended with the contact fields.
    pub fn to_json(&self) -> Value {
        let address = self.billing_address.clone().unwrap_or_default().to_json();
        let mut customer = match address {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        customer.insert("mobilePhoneNumber".into(), json!(self.mobile_phone_number));
        customer.insert("email".into(), json!(self.email));
        customer.insert("shippingMethod".into(), json!(self.shipping_method));

        json!({
            "amount": self.amount,
            "customer": Value::Object(customer),
        })
    }
}

/// Challenge parameters returned by a lookup. `acs_url` is present only when the
/// issuer wants the cardholder to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreeDSecureLookup {
    pub acs_url: Option<String>,
    pub md: Option<String>,
    pub term_url: Option<String>,
    pub pareq: Option<String>,
}

impl ThreeDSecureLookup {
    pub fn requires_user_authentication(&self) -> bool {
        self.acs_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreeDSecureResult {
    pub card_nonce: Option<CardNonce>,
    pub lookup: ThreeDSecureLookup,
    pub error_message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    payment_method: Option<Value>,
    #[serde(default)]
    lookup: Option<ThreeDSecureLookup>,
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ThreeDSecureResult {
    /// Parses a lookup response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: LookupResponse = serde_json::from_str(body)?;
        let card_nonce = response
            .payment_method
            .map(|value| CardNonce::from_value(&value))
            .transpose()?;

        Ok(Self {
            card_nonce,
            lookup: response.lookup.unwrap_or_default(),
            error_message: response.error.and_then(|e| e.message),
        })
    }
}
