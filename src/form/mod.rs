//! Form encoding for request parameter objects
//!
//! Every request-parameter type in this crate implements [`FormEncodable`], so a
//! single transport routine can turn any of them into an
//! `application/x-www-form-urlencoded` body without knowing the concrete type.
//!
//! Encoding happens in three steps:
//! 1. [`FormEncodable::to_form_value`] - a nested mapping of strings to strings,
//!    numbers and nested mappings, wrapped under the type's root object name
//! 2. [`FormEncodable::to_form_body`] - the mapping encoded with `serde_qs` into
//!    bracketed keys (`owner[address][city]`)
//! 3. [`FormEncodable::to_form_pairs`] - the body decoded back into key/value
//!    pairs, for callers that hand pairs to their HTTP client
//!
//! # Examples
//!
//! ```
//! use rust_stripe_sources::form::FormEncodable;
//! use rust_stripe_sources::types::SourceParams;
//!
//! # fn example() -> rust_stripe_sources::Result<()> {
//! let params = SourceParams::bancontact(1099, "Jane Doe", "https://example.com/return", None);
//! let body = params.to_form_body()?;
//! assert!(body.starts_with("type=bancontact&amount=1099&currency=EUR"));
//! # Ok(())
//! # }
//! ```

use crate::{Result, SourceError};
use serde::Serialize;
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// A request-parameter object that can be sent as a form body
pub trait FormEncodable: Serialize {
    /// Name of the key the whole object is nested under, if any
    ///
    /// Card parameters, for example, encode as `card[number]=...`.
    fn root_object_name(&self) -> Option<&'static str> {
        None
    }

    /// Nested form value with absent fields removed
    fn to_form_value(&self) -> Result<Value> {
        let value =
            prune(serde_json::to_value(self)?).unwrap_or_else(|| Value::Object(Map::new()));

        match self.root_object_name() {
            Some(root) => {
                let mut wrapped = Map::new();
                wrapped.insert(root.to_string(), value);
                Ok(Value::Object(wrapped))
            }
            None => Ok(value),
        }
    }

    /// Bracket-flattened key/value pairs in declaration order, decoded from
    /// [`FormEncodable::to_form_body`]
    fn to_form_pairs(&self) -> Result<Vec<(String, String)>> {
        let body = self.to_form_body()?;
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        tracing::trace!("Decoded {} pairs from form body", pairs.len());
        Ok(pairs)
    }

    /// `application/x-www-form-urlencoded` body
    fn to_form_body(&self) -> Result<String> {
        let body = encode_value(&self.to_form_value()?)?;
        tracing::debug!("Encoded form body ({} bytes)", body.len());
        Ok(body)
    }
}

/// Encode a nested form value as a bracketed query string
///
/// Nested mappings become `owner[address][city]=...` and arrays become
/// `expand[0]=...`. The value must be a mapping at the top level.
pub fn encode_value(value: &Value) -> Result<String> {
    if !value.is_object() {
        return Err(SourceError::encoding("top-level form value must be a mapping"));
    }
    Ok(serde_qs::to_string(value)?)
}

/// Drop nulls and mappings left empty once their nulls are gone
fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
                .collect();
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Object(pruned))
            }
        }
        Value::Array(items) => Some(Value::Array(items.into_iter().filter_map(prune).collect())),
        other => Some(other),
    }
}
