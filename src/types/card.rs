//! Card details consumed by the card source preset

use crate::form::FormEncodable;
use serde::{Deserialize, Serialize};

/// Raw card details entered by the customer
///
/// Encoded on its own this nests under `card` (`card[number]=...`). When used
/// to build a card source, its fields minus `currency` are packed under the
/// source's `card` key as [`CardDetails`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardParams {
    /// Card number
    pub number: String,
    /// Two-digit expiry month
    pub exp_month: u32,
    /// Two or four digit expiry year
    pub exp_year: u32,
    /// Card security code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Cardholder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    /// Currency for managed accounts paying out to a debit card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CardParams {
    /// Create card params from the mandatory fields
    pub fn new(number: impl Into<String>, exp_month: u32, exp_year: u32) -> Self {
        Self {
            number: number.into(),
            exp_month,
            exp_year,
            cvc: None,
            name: None,
            address_line1: None,
            address_line2: None,
            address_city: None,
            address_state: None,
            address_zip: None,
            address_country: None,
            currency: None,
        }
    }

    /// Set the security code
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Set the cardholder name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address_line1(mut self, line1: impl Into<String>) -> Self {
        self.address_line1 = Some(line1.into());
        self
    }

    pub fn with_address_line2(mut self, line2: impl Into<String>) -> Self {
        self.address_line2 = Some(line2.into());
        self
    }

    pub fn with_address_city(mut self, city: impl Into<String>) -> Self {
        self.address_city = Some(city.into());
        self
    }

    pub fn with_address_state(mut self, state: impl Into<String>) -> Self {
        self.address_state = Some(state.into());
        self
    }

    pub fn with_address_zip(mut self, zip: impl Into<String>) -> Self {
        self.address_zip = Some(zip.into());
        self
    }

    pub fn with_address_country(mut self, country: impl Into<String>) -> Self {
        self.address_country = Some(country.into());
        self
    }

    /// Set the currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Last four digits of the card number, if it has that many
    pub fn last4(&self) -> Option<&str> {
        last4(&self.number)
    }
}

fn last4(number: &str) -> Option<&str> {
    let len = number.len();
    if len >= 4 && number.is_char_boundary(len - 4) {
        Some(&number[len - 4..])
    } else {
        None
    }
}

fn masked_number(number: &str) -> String {
    match last4(number) {
        Some(last4) => format!("**** {}", last4),
        None => "****".to_string(),
    }
}

impl std::fmt::Debug for CardParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardParams")
            .field("number", &masked_number(&self.number))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &self.cvc.as_ref().map(|_| "***"))
            .field("name", &self.name)
            .field("address_line1", &self.address_line1)
            .field("address_line2", &self.address_line2)
            .field("address_city", &self.address_city)
            .field("address_state", &self.address_state)
            .field("address_zip", &self.address_zip)
            .field("address_country", &self.address_country)
            .field("currency", &self.currency)
            .finish()
    }
}

impl FormEncodable for CardParams {
    fn root_object_name(&self) -> Option<&'static str> {
        Some("card")
    }
}

/// Card fields packed under `card` in a card source
///
/// Everything from [`CardParams`] except the payout currency, which card
/// sources do not take.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl From<CardParams> for CardDetails {
    fn from(card: CardParams) -> Self {
        Self {
            number: card.number,
            exp_month: card.exp_month,
            exp_year: card.exp_year,
            cvc: card.cvc,
            name: card.name,
            address_line1: card.address_line1,
            address_line2: card.address_line2,
            address_city: card.address_city,
            address_state: card.address_state,
            address_zip: card.address_zip,
            address_country: card.address_country,
        }
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &masked_number(&self.number))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &self.cvc.as_ref().map(|_| "***"))
            .field("name", &self.name)
            .field("address_line1", &self.address_line1)
            .field("address_line2", &self.address_line2)
            .field("address_city", &self.address_city)
            .field("address_state", &self.address_state)
            .field("address_zip", &self.address_zip)
            .field("address_country", &self.address_country)
            .finish()
    }
}
