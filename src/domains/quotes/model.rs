//! Quote data types.

use serde::{Deserialize, Serialize};

/// Raw quote record as returned by the upstream service.
///
/// Every field is optional; the upstream omits `price` when it has nothing
/// for the symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,
}

/// A quote that actually carries a price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedQuote {
    pub price: f64,
    pub name: Option<String>,
    pub currency: Option<String>,
}

/// Outcome of a successful upstream lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteLookup {
    /// The upstream returned a usable price.
    Found(PricedQuote),

    /// The upstream answered but had no price for the symbol.
    NoData,
}

impl From<Quote> for QuoteLookup {
    fn from(quote: Quote) -> Self {
        // A zero price carries no information, treat it like a missing one.
        match quote.price {
            Some(price) if price != 0.0 => Self::Found(PricedQuote {
                price,
                name: quote.name.filter(|n| !n.is_empty()),
                currency: quote.currency.filter(|c| !c.is_empty()),
            }),
            _ => Self::NoData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_quote_is_found() {
        let quote: Quote =
            serde_json::from_str(r#"{"price": 193.5, "name": "Apple Inc.", "currency": "USD"}"#)
                .unwrap();
        assert_eq!(
            QuoteLookup::from(quote),
            QuoteLookup::Found(PricedQuote {
                price: 193.5,
                name: Some("Apple Inc.".to_string()),
                currency: Some("USD".to_string()),
            })
        );
    }

    #[test]
    fn test_missing_or_null_price_is_no_data() {
        let empty: Quote = serde_json::from_str("{}").unwrap();
        assert_eq!(QuoteLookup::from(empty), QuoteLookup::NoData);

        let null: Quote = serde_json::from_str(r#"{"price": null, "name": "X"}"#).unwrap();
        assert_eq!(QuoteLookup::from(null), QuoteLookup::NoData);
    }

    #[test]
    fn test_zero_price_is_no_data() {
        let quote = Quote {
            price: Some(0.0),
            ..Default::default()
        };
        assert_eq!(QuoteLookup::from(quote), QuoteLookup::NoData);
    }

    #[test]
    fn test_empty_strings_are_dropped() {
        let quote = Quote {
            price: Some(1.0),
            name: Some(String::new()),
            currency: Some(String::new()),
        };
        assert_eq!(
            QuoteLookup::from(quote),
            QuoteLookup::Found(PricedQuote {
                price: 1.0,
                name: None,
                currency: None,
            })
        );
    }

    #[test]
    fn test_wrong_field_type_fails() {
        assert!(serde_json::from_str::<Quote>(r#"{"price": "12.5"}"#).is_err());
        assert!(serde_json::from_str::<Quote>("null").is_err());
        assert!(serde_json::from_str::<Quote>("42").is_err());
    }
}
