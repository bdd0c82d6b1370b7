//! # Stripe Sources parameters
//!
//! Typed, form-encodable parameters for creating payment **Sources**: card,
//! bank redirect methods (Bancontact, Giropay, iDEAL, Sofort), SEPA Direct
//! Debit, Bitcoin receivers and 3-D Secure.
//!
//! ## Features
//!
//! - **Presets per payment method**: each preset sets `type`, `flow`, `usage`,
//!   fixed currencies and the method-specific payload
//! - **Omission on absence**: unset fields never reach the wire
//! - **Uniform form encoding**: every parameter type implements
//!   [`form::FormEncodable`], so one transport routine can send any of them
//! - **Pass-through values**: IBANs, card numbers and currencies are not
//!   validated locally; the API is the source of truth
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_stripe_sources::form::FormEncodable;
//! use rust_stripe_sources::types::{SourceParams, FORM_CONTENT_TYPE, SOURCES_ENDPOINT};
//!
//! # fn main() -> rust_stripe_sources::Result<()> {
//! let mut params = SourceParams::ideal(
//!     1099,
//!     "Jane Doe",
//!     "https://example.com/return",
//!     Some("ORDER123"),
//!     None,
//! );
//! params.insert_metadata("order_id", "6735");
//!
//! // Hand these to your HTTP client
//! let body = params.to_form_body()?;
//! println!("POST {} ({})\n{}", SOURCES_ENDPOINT, FORM_CONTENT_TYPE, body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: source parameters, presets and nested value types
//! - **`form`**: the form-encoding contract and bracket flattening
//! - **`error`**: error type for encoding and parsing

pub mod error;
pub mod form;
pub mod types;

// Re-exports for convenience
pub use error::{Result, SourceError};
pub use form::FormEncodable;
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(SOURCES_ENDPOINT, "/v1/sources");
        assert_eq!(FORM_CONTENT_TYPE, "application/x-www-form-urlencoded");
        assert_eq!(currencies::EUR, "EUR");
    }

    #[test]
    fn test_params_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceParams>();
        assert_send_sync::<CardParams>();
    }

    #[test]
    fn test_generic_encoding_across_param_types() {
        fn encode<P: FormEncodable>(params: &P) -> Vec<(String, String)> {
            params.to_form_pairs().unwrap()
        }

        let card = CardParams::new("4242424242424242", 12, 2030);
        let card_pairs = vec![
            ("card[number]".to_string(), "4242424242424242".to_string()),
            ("card[exp_month]".to_string(), "12".to_string()),
            ("card[exp_year]".to_string(), "2030".to_string()),
        ];
        assert_eq!(encode(&card), card_pairs);

        let mut source_pairs = vec![("type".to_string(), "card".to_string())];
        source_pairs.extend(card_pairs);
        assert_eq!(encode(&SourceParams::card(card)), source_pairs);
    }
}
