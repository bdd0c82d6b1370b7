//! Request parameter types for creating Sources
//!
//! This module defines the parameter object sent to the sources endpoint and the
//! smaller value types composed into it.
//!
//! # Architecture
//!
//! - [`source`] - `type`, `flow` and `usage` wire enums
//! - [`params`] - [`SourceParams`] with one preset per payment method
//! - [`owner`] - owner, address and redirect details
//! - [`card`] - raw card details for card sources
//! - [`constants`] - endpoint path, content type and fixed currencies
//!
//! # Examples
//!
//! ## Using a preset
//!
//! ```
//! use rust_stripe_sources::form::FormEncodable;
//! use rust_stripe_sources::types::{SourceParams, SourceUsage};
//!
//! # fn example() -> rust_stripe_sources::Result<()> {
//! let params = SourceParams::sepa_debit(
//!     "Jane Doe",
//!     "DE89370400440532013000",
//!     None,
//!     "Berlin",
//!     "10115",
//!     "DE",
//! );
//! assert_eq!(params.usage, Some(SourceUsage::Reusable));
//!
//! let pairs = params.to_form_pairs()?;
//! assert!(pairs.contains(&("owner[address][city]".to_string(), "Berlin".to_string())));
//! # Ok(())
//! # }
//! ```
//!
//! ## Deriving a variant from a common base
//!
//! ```
//! use rust_stripe_sources::types::SourceParams;
//!
//! let base = SourceParams::ideal(1099, "Jane Doe", "https://example.com/return", None, None);
//!
//! let mut tagged = base.clone();
//! tagged.insert_metadata("order_id", "6735");
//!
//! assert!(base.metadata.is_none());
//! ```
//!
//! ## Manual construction
//!
//! ```
//! use rust_stripe_sources::types::{OwnerDetails, SourceFlow, SourceParams, SourceType};
//!
//! let params = SourceParams::new(SourceType::Card)
//!     .with_token("tok_visa")
//!     .with_flow(SourceFlow::None)
//!     .with_owner(OwnerDetails::new().with_email("jane@example.com"));
//! ```

pub mod card;
pub mod constants;
pub mod owner;
pub mod params;
pub mod source;


// Re-export commonly used types
pub use card::{CardDetails, CardParams};
pub use constants::{currencies, FORM_CONTENT_TYPE, SOURCES_ENDPOINT};
pub use owner::{AddressDetails, OwnerDetails, RedirectDetails};
pub use params::{
    BancontactDetails, BitcoinDetails, GiropayDetails, IdealDetails, SepaDebitDetails,
    SofortDetails, SourceDetails, SourceParams, ThreeDSecureDetails,
};
pub use source::{SourceFlow, SourceType, SourceUsage};
