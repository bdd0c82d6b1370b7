//! Source type, flow and usage enums

use crate::SourceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Payment method a source is created for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceType {
    Bancontact,
    Bitcoin,
    Card,
    Giropay,
    Ideal,
    SepaDebit,
    Sofort,
    ThreeDSecure,
    /// A type this crate has no preset for, kept as its raw wire string
    Unknown(String),
}

impl SourceType {
    /// Wire string, also used as the key of the method-specific payload
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Bancontact => "bancontact",
            SourceType::Bitcoin => "bitcoin",
            SourceType::Card => "card",
            SourceType::Giropay => "giropay",
            SourceType::Ideal => "ideal",
            SourceType::SepaDebit => "sepa_debit",
            SourceType::Sofort => "sofort",
            SourceType::ThreeDSecure => "three_d_secure",
            SourceType::Unknown(raw) => raw,
        }
    }

    /// Parse a wire string; anything unrecognised becomes [`SourceType::Unknown`]
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "bancontact" => SourceType::Bancontact,
            "bitcoin" => SourceType::Bitcoin,
            "card" => SourceType::Card,
            "giropay" => SourceType::Giropay,
            "ideal" => SourceType::Ideal,
            "sepa_debit" => SourceType::SepaDebit,
            "sofort" => SourceType::Sofort,
            "three_d_secure" => SourceType::ThreeDSecure,
            _ => SourceType::Unknown(raw.to_string()),
        }
    }

    /// Whether this is one of the modeled payment methods
    pub fn is_known(&self) -> bool {
        !matches!(self, SourceType::Unknown(_))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_raw(s))
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

/// Authentication flow required before a source becomes chargeable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    /// Customer is redirected to a third-party page
    Redirect,
    /// Customer pushes funds to an out-of-band receiver address
    Receiver,
    /// Customer confirms with a separately delivered code
    #[serde(alias = "verification")]
    CodeVerification,
    /// No further authentication
    None,
}

impl SourceFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFlow::Redirect => "redirect",
            SourceFlow::Receiver => "receiver",
            SourceFlow::CodeVerification => "code_verification",
            SourceFlow::None => "none",
        }
    }
}

impl fmt::Display for SourceFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFlow {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redirect" => Ok(SourceFlow::Redirect),
            "receiver" => Ok(SourceFlow::Receiver),
            "code_verification" | "verification" => Ok(SourceFlow::CodeVerification),
            "none" => Ok(SourceFlow::None),
            _ => Err(SourceError::invalid_value("source flow", s)),
        }
    }
}

/// Whether a source can be charged more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceUsage {
    Reusable,
    SingleUse,
}

impl SourceUsage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceUsage::Reusable => "reusable",
            SourceUsage::SingleUse => "single_use",
        }
    }
}

impl fmt::Display for SourceUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceUsage {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reusable" => Ok(SourceUsage::Reusable),
            "single_use" => Ok(SourceUsage::SingleUse),
            _ => Err(SourceError::invalid_value("source usage", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_round_trips_through_strings() {
        for source_type in [
            SourceType::Bancontact,
            SourceType::Bitcoin,
            SourceType::Card,
            SourceType::Giropay,
            SourceType::Ideal,
            SourceType::SepaDebit,
            SourceType::Sofort,
            SourceType::ThreeDSecure,
        ] {
            let parsed: SourceType = source_type.as_str().parse().unwrap();
            assert_eq!(parsed, source_type);
            assert!(parsed.is_known());
        }
    }

    #[test]
    fn test_source_type_parse_is_case_insensitive() {
        assert_eq!("SEPA_DEBIT".parse::<SourceType>().unwrap(), SourceType::SepaDebit);
        assert_eq!("iDEAL".parse::<SourceType>().unwrap(), SourceType::Ideal);
    }

    #[test]
    fn test_unknown_source_type_keeps_raw_string() {
        let source_type: SourceType = "alipay".parse().unwrap();
        assert_eq!(source_type, SourceType::Unknown("alipay".to_string()));
        assert_eq!(source_type.as_str(), "alipay");
        assert!(!source_type.is_known());
    }

    #[test]
    fn test_source_type_serde() {
        let json = serde_json::to_string(&SourceType::ThreeDSecure).unwrap();
        assert_eq!(json, "\"three_d_secure\"");

        let parsed: SourceType = serde_json::from_str("\"giropay\"").unwrap();
        assert_eq!(parsed, SourceType::Giropay);
    }

    #[test]
    fn test_flow_strings() {
        assert_eq!(SourceFlow::CodeVerification.to_string(), "code_verification");
        assert_eq!(
            "verification".parse::<SourceFlow>().unwrap(),
            SourceFlow::CodeVerification
        );
        assert_eq!("none".parse::<SourceFlow>().unwrap(), SourceFlow::None);
        assert_eq!(
            serde_json::to_string(&SourceFlow::Receiver).unwrap(),
            "\"receiver\""
        );
        assert!("teleport".parse::<SourceFlow>().is_err());
    }

    #[test]
    fn test_flow_deserialize_accepts_verification_alias() {
        let flow: SourceFlow = serde_json::from_str("\"verification\"").unwrap();
        assert_eq!(flow, SourceFlow::CodeVerification);

        let flow: SourceFlow = serde_json::from_str("\"code_verification\"").unwrap();
        assert_eq!(flow, SourceFlow::CodeVerification);
    }

    #[test]
    fn test_usage_strings() {
        assert_eq!(SourceUsage::SingleUse.to_string(), "single_use");
        assert_eq!(
            "REUSABLE".parse::<SourceUsage>().unwrap(),
            SourceUsage::Reusable
        );
        assert!("twice".parse::<SourceUsage>().is_err());
    }
}
