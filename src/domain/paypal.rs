use crate::codec::{Parcel, ParcelReader, Parcelable};
use crate::domain::address::PostalAddress;
use crate::error::{BraintreeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    Debit,
    Credit,
}

impl LineItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineItemKind::Debit => "debit",
            LineItemKind::Credit => "credit",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "debit" => Ok(LineItemKind::Debit),
            "credit" => Ok(LineItemKind::Credit),
            other => Err(BraintreeError::Codec(format!("unknown line item kind {other:?}"))),
        }
    }
}

/// Page shown first when the buyer lands on PayPal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingPageType {
    Login,
    Billing,
}

impl LandingPageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LandingPageType::Login => "login",
            LandingPageType::Billing => "billing",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "login" => Ok(LandingPageType::Login),
            "billing" => Ok(LandingPageType::Billing),
            other => Err(BraintreeError::Codec(format!("unknown landing page type {other:?}"))),
        }
    }
}

/// A line item shown to the buyer. Amounts are kept as the strings the merchant supplied.
///
/// Serializes to the gateway shape with snake_case keys; unset fields become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPalLineItem {
    kind: LineItemKind,
    name: String,
    quantity: String,
    unit_amount: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    product_code: Option<String>,
    #[serde(default)]
    unit_tax_amount: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

optional_string_fields!(PayPalLineItem {
    description => with_description,
    product_code => with_product_code,
    unit_tax_amount => with_unit_tax_amount,
    url => with_url,
});

impl PayPalLineItem {
    pub fn new(
        kind: LineItemKind,
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit_amount: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            quantity: quantity.into(),
            unit_amount: unit_amount.into(),
            description: None,
            product_code: None,
            unit_tax_amount: None,
            url: None,
        }
    }

    pub fn kind(&self) -> LineItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit_amount(&self) -> &str {
        &self.unit_amount
    }

    pub fn to_json(&self) -> Value {
        // Derived Serialize on plain strings and options cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Field order: kind, name, quantity, unit amount, description, product code,
/// unit tax amount, url.
impl Parcelable for PayPalLineItem {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_string(Some(self.kind.as_str()))?;
        parcel.write_string(Some(&self.name))?;
        parcel.write_string(Some(&self.quantity))?;
        parcel.write_string(Some(&self.unit_amount))?;
        parcel.write_string(self.description.as_deref())?;
        parcel.write_string(self.product_code.as_deref())?;
        parcel.write_string(self.unit_tax_amount.as_deref())?;
        parcel.write_string(self.url.as_deref())?;
        Ok(())
    }

    fn read_from(reader: &mut ParcelReader) -> Result<Self> {
        let mut required = |field: &str| -> Result<String> {
            reader
                .read_string()?
                .ok_or_else(|| BraintreeError::Codec(format!("line item without {field}")))
        };
        let kind = LineItemKind::parse(&required("kind")?)?;
        let name = required("name")?;
        let quantity = required("quantity")?;
        let unit_amount = required("unit amount")?;

        Ok(Self {
            kind,
            name,
            quantity,
            unit_amount,
            description: reader.read_string()?,
            product_code: reader.read_string()?,
            unit_tax_amount: reader.read_string()?,
            url: reader.read_string()?,
        })
    }
}

/// A request to vault a PayPal account through a billing agreement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PayPalVaultRequest {
    locale_code: Option<String>,
    billing_agreement_description: Option<String>,
    shipping_address_required: bool,
    shipping_address_editable: bool,
    shipping_address_override: Option<PostalAddress>,
    display_name: Option<String>,
    landing_page_type: Option<LandingPageType>,
    should_offer_credit: bool,
    risk_correlation_id: Option<String>,
    merchant_account_id: Option<String>,
    line_items: Vec<PayPalLineItem>,
}

optional_string_fields!(PayPalVaultRequest {
    locale_code => with_locale_code,
    billing_agreement_description => with_billing_agreement_description,
    display_name => with_display_name,
    risk_correlation_id => with_risk_correlation_id,
    merchant_account_id => with_merchant_account_id,
});

impl PayPalVaultRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shipping_address_required(mut self, required: bool) -> Self {
        self.shipping_address_required = required;
        self
    }

    pub fn with_shipping_address_editable(mut self, editable: bool) -> Self {
        self.shipping_address_editable = editable;
        self
    }

    pub fn with_shipping_address_override(mut self, address: PostalAddress) -> Self {
        self.shipping_address_override = Some(address);
        self
    }

    pub fn with_landing_page_type(mut self, landing_page_type: LandingPageType) -> Self {
        self.landing_page_type = Some(landing_page_type);
        self
    }

    pub fn with_should_offer_credit(mut self, offer: bool) -> Self {
        self.should_offer_credit = offer;
        self
    }

    /// Replaces all line items.
    pub fn with_line_items(mut self, items: Vec<PayPalLineItem>) -> Self {
        self.line_items = items;
        self
    }

    pub fn add_line_item(mut self, item: PayPalLineItem) -> Self {
        self.line_items.push(item);
        self
    }

    pub fn is_shipping_address_required(&self) -> bool {
        self.shipping_address_required
    }

    pub fn is_shipping_address_editable(&self) -> bool {
        self.shipping_address_editable
    }

    pub fn shipping_address_override(&self) -> Option<&PostalAddress> {
        self.shipping_address_override.as_ref()
    }

    pub fn landing_page_type(&self) -> Option<LandingPageType> {
        self.landing_page_type
    }

    pub fn should_offer_credit(&self) -> bool {
        self.should_offer_credit
    }

    pub fn line_items(&self) -> &[PayPalLineItem] {
        &self.line_items
    }

    /// Builds the billing-agreement setup body.
    ///
    /// `shipping_address` is `null` unless an override with at least one set field
    /// is attached.
    pub fn to_json(&self, return_url: &str, cancel_url: &str) -> Value {
        let shipping_address = match &self.shipping_address_override {
            Some(address) if address.has_shipping_fields() => json!({
                "line1": address.street_address(),
                "line2": address.extended_address(),
                "city": address.locality(),
                "state": address.region(),
                "postal_code": address.postal_code(),
                "country_code": address.country_code_alpha2(),
                "recipient_name": address.recipient_name(),
            }),
            _ => Value::Null,
        };
        let address_override =
            self.shipping_address_override.is_some() && !self.shipping_address_editable;
        let line_items: Vec<Value> = self.line_items.iter().map(PayPalLineItem::to_json).collect();

        json!({
            "return_url": return_url,
            "cancel_url": cancel_url,
            "offer_paypal_credit": self.should_offer_credit,
            "description": self.billing_agreement_description,
            "merchant_account_id": self.merchant_account_id,
            "correlation_id": self.risk_correlation_id,
            "line_items": line_items,
            "shipping_address": shipping_address,
            "experience_profile": {
                "no_shipping": !self.shipping_address_required,
                "landing_page_type": self.landing_page_type.map(|t| t.as_str()),
                "brand_name": self.display_name,
                "locale_code": self.locale_code,
                "address_override": address_override,
            },
        })
    }
}

/// Field order: locale code, billing agreement description, shipping address
/// required, shipping address editable, shipping address override, display name,
/// landing page type, offer credit, risk correlation id, merchant account id,
/// line items.
impl Parcelable for PayPalVaultRequest {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_string(self.locale_code.as_deref())?;
        parcel.write_string(self.billing_agreement_description.as_deref())?;
        parcel.write_bool(self.shipping_address_required);
        parcel.write_bool(self.shipping_address_editable);
        parcel.write_parcelable(self.shipping_address_override.as_ref())?;
        parcel.write_string(self.display_name.as_deref())?;
        parcel.write_string(self.landing_page_type.map(|t| t.as_str()))?;
        parcel.write_bool(self.should_offer_credit);
        parcel.write_string(self.risk_correlation_id.as_deref())?;
        parcel.write_string(self.merchant_account_id.as_deref())?;
        parcel.write_list(&self.line_items)?;
        Ok(())
    }

    fn read_from(reader: &mut ParcelReader) -> Result<Self> {
        Ok(Self {
            locale_code: reader.read_string()?,
            billing_agreement_description: reader.read_string()?,
            shipping_address_required: reader.read_bool()?,
            shipping_address_editable: reader.read_bool()?,
            shipping_address_override: reader.read_parcelable()?,
            display_name: reader.read_string()?,
            landing_page_type: reader
                .read_string()?
                .as_deref()
                .map(LandingPageType::parse)
                .transpose()?,
            should_offer_credit: reader.read_bool()?,
            risk_correlation_id: reader.read_string()?,
            merchant_account_id: reader.read_string()?,
            line_items: reader.read_list()?,
        })
    }
}

/// Outcome of setting up a billing agreement: where to send the buyer next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalResponse {
    approval_url: String,
    success_url: String,
    pairing_id: Option<String>,
}

impl PayPalResponse {
    pub fn new(approval_url: impl Into<String>, success_url: impl Into<String>) -> Self {
        let approval_url = approval_url.into();
        let pairing_id = pairing_id_from_url(&approval_url);
        Self {
            approval_url,
            success_url: success_url.into(),
            pairing_id,
        }
    }

    pub fn approval_url(&self) -> &str {
        &self.approval_url
    }

    pub fn success_url(&self) -> &str {
        &self.success_url
    }

    /// The `ba_token` (or `token`) query parameter of the approval URL.
    pub fn pairing_id(&self) -> Option<&str> {
        self.pairing_id.as_deref()
    }
}

fn pairing_id_from_url(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    let params: Vec<(&str, &str)> = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();

    ["ba_token", "token"].iter().find_map(|wanted| {
        params
            .iter()
            .find(|(key, value)| key == wanted && !value.is_empty())
            .map(|(_, value)| value.to_string())
    })
}
