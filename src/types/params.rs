//! Source creation parameters and per-method presets

use super::card::{CardDetails, CardParams};
use super::constants::currencies;
use super::owner::{AddressDetails, OwnerDetails, RedirectDetails};
use super::source::{SourceFlow, SourceType, SourceUsage};
use crate::form::FormEncodable;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level keys a method-specific payload must not be written under
const RESERVED_KEYS: [&str; 9] = [
    "type", "amount", "currency", "flow", "metadata", "owner", "redirect", "token", "usage",
];

/// Bancontact payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BancontactDetails {
    /// Full name of the account holder
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// Bitcoin payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitcoinDetails {
    /// Customer email the receiver instructions go to
    pub email: String,
}

/// Giropay payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiropayDetails {
    /// Full name of the account holder
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// iDEAL payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdealDetails {
    /// Full name of the account holder
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Customer's bank, skips the bank selection page when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

/// SEPA Direct Debit payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SepaDebitDetails {
    /// Full name of the account holder
    pub name: String,
    /// Account to debit; passed through unchecked
    pub iban: String,
}

/// Sofort payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SofortDetails {
    /// Country code of the customer's bank
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// 3-D Secure payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreeDSecureDetails {
    /// ID of the card source being authenticated
    pub card: String,
}

/// Method-specific payload, written under the key named after the source type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceDetails {
    Bancontact(BancontactDetails),
    Bitcoin(BitcoinDetails),
    Card(CardDetails),
    Giropay(GiropayDetails),
    Ideal(IdealDetails),
    SepaDebit(SepaDebitDetails),
    Sofort(SofortDetails),
    ThreeDSecure(ThreeDSecureDetails),
    /// Free-form payload for types without a dedicated struct
    Other(BTreeMap<String, Value>),
}

impl SourceDetails {
    /// Source type this payload belongs to, `None` for free-form payloads
    pub fn source_type(&self) -> Option<SourceType> {
        match self {
            SourceDetails::Bancontact(_) => Some(SourceType::Bancontact),
            SourceDetails::Bitcoin(_) => Some(SourceType::Bitcoin),
            SourceDetails::Card(_) => Some(SourceType::Card),
            SourceDetails::Giropay(_) => Some(SourceType::Giropay),
            SourceDetails::Ideal(_) => Some(SourceType::Ideal),
            SourceDetails::SepaDebit(_) => Some(SourceType::SepaDebit),
            SourceDetails::Sofort(_) => Some(SourceType::Sofort),
            SourceDetails::ThreeDSecure(_) => Some(SourceType::ThreeDSecure),
            SourceDetails::Other(_) => None,
        }
    }
}

/// Parameters used to create a Source object
///
/// Build one with a preset such as [`SourceParams::ideal`], or start from
/// [`SourceParams::new`] and the `with_*` setters. Fields left as `None` are
/// omitted from the encoded body. Values are not validated: malformed IBANs,
/// card numbers or currencies are sent as-is and rejected by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceParams {
    /// Type of source to create
    pub source_type: SourceType,
    /// Amount in the smallest currency unit (e.g. 1099 for EUR 10.99)
    pub amount: Option<u64>,
    /// Currency the source will be chargeable in
    pub currency: Option<String>,
    /// Authentication flow; left unset the API infers it from the type
    pub flow: Option<SourceFlow>,
    /// Arbitrary key/value pairs attached to the source
    pub metadata: Option<BTreeMap<String, String>>,
    /// Owner of the payment instrument
    pub owner: Option<OwnerDetails>,
    /// Required when `flow` is redirect
    pub redirect: Option<RedirectDetails>,
    /// Previously issued token; its properties override these params
    pub token: Option<String>,
    /// Whether the source can be charged more than once
    pub usage: Option<SourceUsage>,
    /// Method-specific payload
    pub details: Option<SourceDetails>,
}

impl SourceParams {
    /// Create params for a source type with every other field unset
    pub fn new(source_type: SourceType) -> Self {
        Self {
            source_type,
            amount: None,
            currency: None,
            flow: None,
            metadata: None,
            owner: None,
            redirect: None,
            token: None,
            usage: None,
            details: None,
        }
    }

    fn single_use_redirect(
        source_type: SourceType,
        amount: u64,
        currency: impl Into<String>,
        return_url: impl Into<String>,
        details: SourceDetails,
    ) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            flow: Some(SourceFlow::Redirect),
            redirect: Some(RedirectDetails::new(return_url)),
            usage: Some(SourceUsage::SingleUse),
            details: Some(details),
            ..Self::new(source_type)
        }
    }

    /// Params for a Bancontact source, always charged in EUR
    pub fn bancontact(
        amount: u64,
        name: impl Into<String>,
        return_url: impl Into<String>,
        statement_descriptor: Option<&str>,
    ) -> Self {
        let details = BancontactDetails {
            name: name.into(),
            statement_descriptor: statement_descriptor.map(str::to_string),
        };
        Self::single_use_redirect(
            SourceType::Bancontact,
            amount,
            currencies::EUR,
            return_url,
            SourceDetails::Bancontact(details),
        )
    }

    /// Params for a Bitcoin receiver source
    pub fn bitcoin(amount: u64, currency: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            flow: Some(SourceFlow::Receiver),
            usage: Some(SourceUsage::SingleUse),
            details: Some(SourceDetails::Bitcoin(BitcoinDetails {
                email: email.into(),
            })),
            ..Self::new(SourceType::Bitcoin)
        }
    }

    /// Params for a card source
    ///
    /// Flow and usage are left for the API to infer. The card's payout
    /// currency is not part of a card source and is dropped.
    pub fn card(card: CardParams) -> Self {
        Self {
            details: Some(SourceDetails::Card(card.into())),
            ..Self::new(SourceType::Card)
        }
    }

    /// Params for a Giropay source, always charged in EUR
    pub fn giropay(
        amount: u64,
        name: impl Into<String>,
        return_url: impl Into<String>,
        statement_descriptor: Option<&str>,
    ) -> Self {
        let details = GiropayDetails {
            name: name.into(),
            statement_descriptor: statement_descriptor.map(str::to_string),
        };
        Self::single_use_redirect(
            SourceType::Giropay,
            amount,
            currencies::EUR,
            return_url,
            SourceDetails::Giropay(details),
        )
    }

    /// Params for an iDEAL source, always charged in EUR
    pub fn ideal(
        amount: u64,
        name: impl Into<String>,
        return_url: impl Into<String>,
        statement_descriptor: Option<&str>,
        bank: Option<&str>,
    ) -> Self {
        let details = IdealDetails {
            name: name.into(),
            statement_descriptor: statement_descriptor.map(str::to_string),
            bank: bank.map(str::to_string),
        };
        Self::single_use_redirect(
            SourceType::Ideal,
            amount,
            currencies::EUR,
            return_url,
            SourceDetails::Ideal(details),
        )
    }

    /// Params for a reusable SEPA Direct Debit source in EUR
    ///
    /// The holder's address goes under `owner[address]`; `address_line1` is
    /// left out when not given.
    pub fn sepa_debit(
        name: impl Into<String>,
        iban: impl Into<String>,
        address_line1: Option<&str>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let address = AddressDetails {
            line1: address_line1.map(str::to_string),
            city: Some(city.into()),
            postal_code: Some(postal_code.into()),
            country: Some(country.into()),
            ..AddressDetails::default()
        };

        Self {
            currency: Some(currencies::EUR.to_string()),
            usage: Some(SourceUsage::Reusable),
            owner: Some(OwnerDetails::new().with_address(address)),
            details: Some(SourceDetails::SepaDebit(SepaDebitDetails {
                name: name.into(),
                iban: iban.into(),
            })),
            ..Self::new(SourceType::SepaDebit)
        }
    }

    /// Params for a Sofort source, always charged in EUR
    pub fn sofort(
        amount: u64,
        return_url: impl Into<String>,
        country: impl Into<String>,
        statement_descriptor: Option<&str>,
    ) -> Self {
        let details = SofortDetails {
            country: country.into(),
            statement_descriptor: statement_descriptor.map(str::to_string),
        };
        Self::single_use_redirect(
            SourceType::Sofort,
            amount,
            currencies::EUR,
            return_url,
            SourceDetails::Sofort(details),
        )
    }

    /// Params for a 3-D Secure source authenticating an existing card source
    pub fn three_d_secure(
        amount: u64,
        currency: impl Into<String>,
        return_url: impl Into<String>,
        card_source_id: impl Into<String>,
    ) -> Self {
        let details = ThreeDSecureDetails {
            card: card_source_id.into(),
        };
        Self::single_use_redirect(
            SourceType::ThreeDSecure,
            amount,
            currency,
            return_url,
            SourceDetails::ThreeDSecure(details),
        )
    }

    /// Set the amount
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the authentication flow
    pub fn with_flow(mut self, flow: SourceFlow) -> Self {
        self.flow = Some(flow);
        self
    }

    /// Set the usage
    pub fn with_usage(mut self, usage: SourceUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Set the owner
    pub fn with_owner(mut self, owner: OwnerDetails) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Set the redirect return URL
    pub fn with_redirect(mut self, return_url: impl Into<String>) -> Self {
        self.redirect = Some(RedirectDetails::new(return_url));
        self
    }

    /// Set the token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the method-specific payload
    ///
    /// The payload is always written under this params' own type. A payload
    /// built for a different type is kept, but logged.
    pub fn with_details(mut self, details: SourceDetails) -> Self {
        if let Some(details_type) = details.source_type() {
            if details_type != self.source_type {
                tracing::warn!(
                    "Source payload for '{}' attached to a '{}' source",
                    details_type,
                    self.source_type
                );
            }
        }
        self.details = Some(details);
        self
    }

    /// Add one metadata entry, creating the map if needed
    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
    }
}

impl Serialize for SourceParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.source_type)?;

        if let Some(amount) = &self.amount {
            map.serialize_entry("amount", amount)?;
        }
        if let Some(currency) = &self.currency {
            map.serialize_entry("currency", currency)?;
        }
        if let Some(flow) = &self.flow {
            map.serialize_entry("flow", flow)?;
        }
        if let Some(metadata) = &self.metadata {
            map.serialize_entry("metadata", metadata)?;
        }
        if let Some(owner) = &self.owner {
            map.serialize_entry("owner", owner)?;
        }
        if let Some(redirect) = &self.redirect {
            map.serialize_entry("redirect", redirect)?;
        }
        if let Some(token) = &self.token {
            map.serialize_entry("token", token)?;
        }
        if let Some(usage) = &self.usage {
            map.serialize_entry("usage", usage)?;
        }
        if let Some(details) = &self.details {
            let key = self.source_type.as_str();
            if RESERVED_KEYS.contains(&key) {
                tracing::warn!(
                    "Dropping source payload: type '{}' collides with a top-level parameter",
                    key
                );
            } else {
                map.serialize_entry(key, details)?;
            }
        }

        map.end()
    }
}

impl FormEncodable for SourceParams {}
