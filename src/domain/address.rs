use crate::codec::{Parcel, ParcelReader, Parcelable};
use crate::error::Result;
use serde::Deserialize;

/// A shipping address attached to a PayPal request.
///
/// Every field is optional and stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    recipient_name: Option<String>,
    phone_number: Option<String>,
    street_address: Option<String>,
    extended_address: Option<String>,
    locality: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    sorting_code: Option<String>,
    country_code_alpha2: Option<String>,
}

optional_string_fields!(PostalAddress {
    recipient_name => with_recipient_name,
    phone_number => with_phone_number,
    street_address => with_street_address,
    extended_address => with_extended_address,
    locality => with_locality,
    region => with_region,
    postal_code => with_postal_code,
    sorting_code => with_sorting_code,
    country_code_alpha2 => with_country_code_alpha2,
});

impl PostalAddress {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when any field exported in the gateway shipping address is set.
    ///
    /// Phone number and sorting code are not part of that group.
    pub fn has_shipping_fields(&self) -> bool {
        [
            &self.recipient_name,
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
}

/// Field order: recipient name, phone number, street address, extended address,
/// locality, region, postal code, sorting code, country code.
impl Parcelable for PostalAddress {
    fn write_to(&self, parcel: &mut Parcel) -> Result<()> {
        parcel.write_string(self.recipient_name.as_deref())?;
        parcel.write_string(self.phone_number.as_deref())?;
        parcel.write_string(self.street_address.as_deref())?;
        parcel.write_string(self.extended_address.as_deref())?;
        parcel.write_string(self.locality.as_deref())?;
        parcel.write_string(self.region.as_deref())?;
        parcel.write_string(self.postal_code.as_deref())?;
        parcel.write_string(self.sorting_code.as_deref())?;
        parcel.write_string(self.country_code_alpha2.as_deref())?;
        Ok(())
    }

    fn read_from(reader: &mut ParcelReader) -> Result<Self> {
        Ok(Self {
            recipient_name: reader.read_string()?,
            phone_number: reader.read_string()?,
            street_address: reader.read_string()?,
            extended_address: reader.read_string()?,
            locality: reader.read_string()?,
            region: reader.read_string()?,
            postal_code: reader.read_string()?,
            sorting_code: reader.read_string()?,
            country_code_alpha2: reader.read_string()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_new_address_is_empty() {
        let address = PostalAddress::new();
        assert!(address.is_empty());
        assert_eq!(address.recipient_name(), None);
        assert_eq!(address.country_code_alpha2(), None);
    }

    #[test]
    fn test_setters_store_values_verbatim() {
        let address = PostalAddress::new()
            .with_recipient_name("Jane Doe")
            .with_street_address("  1 Main St ")
            .with_locality("")
            .with_country_code_alpha2("US")
            .with_country_code_alpha2("GB");

        assert!(!address.is_empty());
        assert_eq!(address.recipient_name(), Some("Jane Doe"));
        assert_eq!(address.street_address(), Some("  1 Main St "));
        assert_eq!(address.locality(), Some(""));
        // last write wins
        assert_eq!(address.country_code_alpha2(), Some("GB"));
    }

    #[test]
    fn test_shipping_fields_ignore_phone_and_sorting_code() {
        let address = PostalAddress::new()
            .with_phone_number("555-0100")
            .with_sorting_code("SC1");
        assert!(!address.is_empty());
        assert!(!address.has_shipping_fields());
        assert!(address.with_postal_code("60654").has_shipping_fields());
    }

    #[test]
    fn test_parcel_round_trip() {
        let address = PostalAddress::new()
            .with_recipient_name("Postal Address")
            .with_phone_number("555-0100")
            .with_postal_code("60654")
            .with_sorting_code("SC1");

        let decoded: PostalAddress =
            codec::from_bytes(codec::to_bytes(&address).unwrap()).unwrap();
        assert_eq!(decoded, address);

        let empty: PostalAddress =
            codec::from_bytes(codec::to_bytes(&PostalAddress::new()).unwrap()).unwrap();
        assert!(empty.is_empty());
    }
}
