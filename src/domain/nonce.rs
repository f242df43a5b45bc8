use crate::codec::{Parcel, ParcelReader, Parcelable};
use crate::error::{BraintreeError, Result};
use serde::Deserialize;
use serde_json::Value;

/// 3-D Secure outcome attached to a card nonce.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreeDSecureInfo {
    liability_shifted: bool,
    liability_shift_possible: bool,
    was_verified: bool,
    status: Option<String>,
    enrolled: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ThreeDSecureInfoWire {
    liability_shifted: Option<bool>,
    liability_shift_possible: Option<bool>,
    status: Option<String>,
    enrolled: Option<String>,
}

impl From<ThreeDSecureInfoWire> for ThreeDSecureInfo {
    fn from(wire: ThreeDSecureInfoWire) -> Self {
        Self {
            was_verified: wire.liability_shifted.is_some() && wire.liability_shift_possible.is_some(),
            liability_shifted: wire.liability_shifted.unwrap_or(false),
            liability_shift_possible: wire.liability_shift_possible.unwrap_or(false),
            status: wire.status,
            enrolled: wire.enrolled,
        }
    }
}

impl ThreeDSecureInfo {
    /// Whether fraud liability moved from the merchant to the issuer.
    pub fn is_liability_shifted(&self) -> bool {
        self.liability_shifted
    }

    pub fn liability_shift_possible(&self) -> bool {
        self.liability_shift_possible
    }

    /// True when the gateway reported both liability fields, i.e. a lookup ran.
    pub fn was_verified(&self) -> bool {
        self.was_verified
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn enrolled(&self) -> Option<&str> {
        self.enrolled.as_deref()
    }
}

/// Field order: liability shifted, liability shift possible, was verified, status, enrolled.
impl Parcelable for ThreeDSecureInfo {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_bool(self.liability_shifted);
        parcel.write_bool(self.liability_shift_possible);
        parcel.write_bool(self.was_verified);
        parcel.write_string(self.status.as_deref())?;
        parcel.write_string(self.enrolled.as_deref())?;
        Ok(())
    }

    fn read_from(reader: &mut ParcelReader) -> Result<Self> {
        Ok(Self {
            liability_shifted: reader.read_bool()?,
            liability_shift_possible: reader.read_bool()?,
            was_verified: reader.read_bool()?,
            status: reader.read_string()?,
            enrolled: reader.read_string()?,
        })
    }
}

/// A tokenized card returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNonce {
    nonce: String,
    description: Option<String>,
    is_default: bool,
    card_type: Option<String>,
    last_two: Option<String>,
    last_four: Option<String>,
    three_d_secure_info: ThreeDSecureInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardNonceWire {
    nonce: Option<String>,
    description: Option<String>,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    details: CardDetailsWire,
    #[serde(default)]
    three_d_secure_info: Option<ThreeDSecureInfoWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CardDetailsWire {
    card_type: Option<String>,
    last_two: Option<String>,
    last_four: Option<String>,
}

impl CardNonce {
    /// Parses a tokenization response.
    ///
    /// Accepts `{"creditCards": [..]}` (first entry), `{"paymentMethod": {..}}`
    /// or a bare payment-method object.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let payment_method = if let Some(cards) = value.get("creditCards") {
            cards.get(0).cloned().ok_or_else(|| {
                BraintreeError::UnexpectedResponse("creditCards is empty".to_string())
            })?
        } else if let Some(method) = value.get("paymentMethod") {
            method.clone()
        } else {
            value
        };
        Self::from_value(&payment_method)
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self> {
        let wire = CardNonceWire::deserialize(value)?;
        let nonce = wire
            .nonce
            .ok_or_else(|| BraintreeError::UnexpectedResponse("missing nonce".to_string()))?;

        Ok(Self {
            nonce,
            description: wire.description,
            is_default: wire.default,
            card_type: wire.details.card_type,
            last_two: wire.details.last_two,
            last_four: wire.details.last_four,
            three_d_secure_info: wire.three_d_secure_info.unwrap_or_default().into(),
        })
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    pub fn last_two(&self) -> Option<&str> {
        self.last_two.as_deref()
    }

    pub fn last_four(&self) -> Option<&str> {
        self.last_four.as_deref()
    }

    pub fn three_d_secure_info(&self) -> &ThreeDSecureInfo {
        &self.three_d_secure_info
    }
}

/// Field order: nonce, description, default flag, card type, last two, last four,
/// 3-D Secure info.
impl Parcelable for CardNonce {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_string(Some(&self.nonce))?;
        parcel.write_string(self.description.as_deref())?;
        parcel.write_bool(self.is_default);
        parcel.write_string(self.card_type.as_deref())?;
        parcel.write_string(self.last_two.as_deref())?;
        parcel.write_string(self.last_four.as_deref())?;
        self.three_d_secure_info.write_to(parcel)?;
        Ok(())
    }

    fn read_from(reader: &mut ParcelReader) -> Result<Self> {
        let nonce = reader
            .read_string()?
            .ok_or_else(|| BraintreeError::Codec("card nonce without nonce".to_string()))?;
        Ok(Self {
            nonce,
            description: reader.read_string()?,
            is_default: reader.read_bool()?,
            card_type: reader.read_string()?,
            last_two: reader.read_string()?,
            last_four: reader.read_string()?,
            three_d_secure_info: ThreeDSecureInfo::read_from(reader)?,
        })
    }
}
