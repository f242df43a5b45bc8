use crate::domain::paypal::PayPalLineItem;
use crate::error::{BraintreeError, Result};
use std::io::Read;

/// Reads PayPal line items from a CSV source.
///
/// Expects the header `kind,name,quantity,unit_amount,description,product_code,unit_tax_amount,url`.
/// Whitespace is trimmed, trailing optional columns may be left off, and empty
/// optional cells are read as unset.
pub struct LineItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LineItemReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one line item per record.
    pub fn line_items(self) -> impl Iterator<Item = Result<PayPalLineItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BraintreeError::from))
    }
}
