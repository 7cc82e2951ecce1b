//! Generation request construction.
//!
//! Only the amount bound is enforced before a request leaves the process.
//! Gender, region and name-length filters are forwarded as given; the service
//! owns those enumerations and answers bad values with a 4xx status.

use std::fmt;
use std::str::FromStr;

/// Smallest number of identities the service will generate per call.
pub const AMOUNT_MIN: u32 = 1;

/// Largest number of identities the service will generate per call.
pub const AMOUNT_MAX: u32 = 500;

/// Gender filter for generated identities.
///
/// `Unlisted` carries any value outside the locally known set. It is sent
/// verbatim so the service can accept or reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unlisted(String),
}

impl Gender {
    /// Wire value sent in the `gender` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unlisted(value) => value,
        }
    }

    /// Whether this value is one the service is known to accept.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        !matches!(self, Gender::Unlisted(_))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unlisted(s.to_string()),
        }
    }
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Gender::from(s))
    }
}

/// Errors detected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("amount {amount} is outside the accepted range 1..=500")]
    AmountOutOfRange { amount: u32 },
}

/// Outbound query for the identity generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Number of identities to generate (1..=500)
    pub amount: u32,
    /// Restrict identities to one gender
    pub gender: Option<Gender>,
    /// Country or region name, validated by the service
    pub region: Option<String>,
    /// Minimum generated name length
    pub minlen: Option<u32>,
    /// Maximum generated name length
    pub maxlen: Option<u32>,
    /// Ask for the extended field set (age, phone, birthday, ...)
    pub extended: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            amount: AMOUNT_MIN,
            gender: None,
            region: None,
            minlen: None,
            maxlen: None,
            extended: false,
        }
    }
}

impl GenerationRequest {
    /// Start a builder with the default amount of one.
    #[must_use]
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Check the locally enforceable constraints.
    ///
    /// Requests assembled through the public fields bypass the builder, so
    /// the client calls this again before sending.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !(AMOUNT_MIN..=AMOUNT_MAX).contains(&self.amount) {
            return Err(RequestError::AmountOutOfRange {
                amount: self.amount,
            });
        }
        Ok(())
    }

    /// Query parameters for the multi-identity entry point.
    ///
    /// `amount` is always present. Optional filters appear only when set and
    /// `ext` only when the extended field set was requested.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(6);
        pairs.push(("amount", self.amount.to_string()));
        pairs.extend(self.filter_pairs());
        pairs
    }

    /// Query parameters for the single-identity entry point.
    ///
    /// The service answers a request without `amount` with a bare object.
    #[must_use]
    pub fn single_query_pairs(&self) -> Vec<(&'static str, String)> {
        self.filter_pairs()
    }

    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(ref gender) = self.gender {
            pairs.push(("gender", gender.to_string()));
        }
        if let Some(ref region) = self.region {
            pairs.push(("region", region.clone()));
        }
        if let Some(minlen) = self.minlen {
            pairs.push(("minlen", minlen.to_string()));
        }
        if let Some(maxlen) = self.maxlen {
            pairs.push(("maxlen", maxlen.to_string()));
        }
        if self.extended {
            pairs.push(("ext", "true".to_string()));
        }
        pairs
    }
}

/// Chained construction of a [`GenerationRequest`].
#[derive(Debug, Clone, Default)]
pub struct GenerationRequestBuilder {
    request: GenerationRequest,
}

impl GenerationRequestBuilder {
    #[must_use]
    pub fn amount(mut self, amount: u32) -> Self {
        self.request.amount = amount;
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        self.request.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.request.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn minlen(mut self, minlen: u32) -> Self {
        self.request.minlen = Some(minlen);
        self
    }

    #[must_use]
    pub fn maxlen(mut self, maxlen: u32) -> Self {
        self.request.maxlen = Some(maxlen);
        self
    }

    #[must_use]
    pub fn extended(mut self, extended: bool) -> Self {
        self.request.extended = extended;
        self
    }

    /// Finish the request, rejecting an out-of-range amount.
    pub fn build(self) -> Result<GenerationRequest, RequestError> {
        self.request.validate()?;
        Ok(self.request)
    }
}

/// Build a validated request from individual parameters.
///
/// Pure transformation: the only failure is an amount outside 1..=500.
/// A `minlen` greater than `maxlen` is left for the service to judge.
pub fn build_request(
    amount: u32,
    gender: Option<Gender>,
    region: Option<&str>,
    minlen: Option<u32>,
    maxlen: Option<u32>,
    extended: bool,
) -> Result<GenerationRequest, RequestError> {
    let request = GenerationRequest {
        amount,
        gender,
        region: region.map(str::to_string),
        minlen,
        maxlen,
        extended,
    };
    request.validate()?;
    Ok(request)
}
