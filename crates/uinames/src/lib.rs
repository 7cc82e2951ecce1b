//! # uinames
//!
//! Client for the uinames random identity API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uinames::{GenerationRequest, Gender, NamesClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NamesClient::from_env()?;
//!
//! let person = client
//!     .generate_random_identity(&GenerationRequest::default())
//!     .await?;
//! println!("{} {}", person.name()?, person.surname()?);
//!
//! let request = GenerationRequest::builder()
//!     .amount(4)
//!     .gender(Gender::Male)
//!     .region("canada")
//!     .extended(true)
//!     .build()?;
//! for p in client.generate_random_identities(&request).await?.iter() {
//!     println!("{} {}, age {}", p.name()?, p.surname()?, p.age()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! | Situation | Error |
//! |-----------|-------|
//! | amount outside 1..=500 | `ClientError::InvalidRequest`, no request sent |
//! | service rejects gender, region, ... | `ClientError::Rejected` with the 4xx status |
//! | other non-2xx | `ClientError::Status` |
//! | connection, TLS, timeout | `ClientError::Transport` |
//! | field missing from an identity | `FieldError::Unavailable` at access time |
//!
//! ## Environment
//!
//! - `UINAMES_BASE_URL`: endpoint override (default `https://uinames.com/api/`)
//! - `UINAMES_TIMEOUT_SECS`: whole-request timeout
//! - `UINAMES_SYSTEM_PROXY`: `0`/`false` ignores proxy settings from the environment

pub mod client;
pub mod error;

pub use client::{ClientConfig, NamesClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use uinames_core::{
    build_request, Birthday, CreditCard, FieldError, Gender, GenerationRequest,
    GenerationRequestBuilder, People, Person, PropertyUnavailable, RequestError, WrapError,
};

/// Generate one unfiltered identity with a client configured from the environment.
pub async fn generate_random_identity() -> Result<Person, ClientError> {
    NamesClient::from_env()?
        .generate_random_identity(&GenerationRequest::default())
        .await
}

/// Generate identities with a client configured from the environment.
pub async fn generate_random_identities(
    request: &GenerationRequest,
) -> Result<People, ClientError> {
    NamesClient::from_env()?
        .generate_random_identities(request)
        .await
}
