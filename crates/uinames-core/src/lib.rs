//! # uinames-core
//!
//! Network-free half of the uinames client: building validated generation
//! requests and exposing the JSON identities the service returns.
//!
//! ## Validation split
//!
//! | Parameter | Checked locally | Checked by the service |
//! |-----------|-----------------|------------------------|
//! | amount | yes, must be in 1..=500 | yes |
//! | gender | no, unlisted values are forwarded | yes |
//! | region | no | yes |
//! | minlen / maxlen | no, even when minlen > maxlen | yes |
//!
//! Testers should not expect an unknown region or gender to fail before the
//! request is sent. Only the amount bound is enforced here.
//!
//! ## Field access
//!
//! ```rust
//! use serde_json::json;
//! use uinames_core::Person;
//!
//! let person = Person::wrap_single(json!({
//!     "name": "Aaron",
//!     "surname": "Carter",
//!     "gender": "male",
//!     "region": "New Zealand",
//! }))
//! .unwrap();
//!
//! assert_eq!(person.name().unwrap(), "Aaron");
//! assert!(person.get("age").is_err()); // only present in extended payloads
//! ```

pub mod person;
pub mod request;

pub use person::{Birthday, CreditCard, FieldError, People, Person, PropertyUnavailable, WrapError};
pub use request::{
    build_request, Gender, GenerationRequest, GenerationRequestBuilder, RequestError, AMOUNT_MAX,
    AMOUNT_MIN,
};
