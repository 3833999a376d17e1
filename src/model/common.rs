use serde::{Serialize, Serializer};

use crate::error::ProfileError;

/// Outcome marker carried by every response body.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Status {
    Success,
    Failed,
}

/// A Codeforces rating field, or `"Unrated"` for users without a contest
/// rating.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Rated<T> {
    Rated(T),
    Unrated,
}

impl<T> Rated<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Rated::Rated(value) => Some(value),
            Rated::Unrated => None,
        }
    }
}

impl<T: Serialize> Serialize for Rated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rated::Rated(value) => value.serialize(serializer),
            Rated::Unrated => serializer.serialize_str("Unrated"),
        }
    }
}

/// An AtCoder profile field, or `"NA"` for users who never entered a rated
/// contest.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Availability<T> {
    Available(T),
    NotAvailable,
}

impl<T> Availability<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Availability::Available(value) => Some(value),
            Availability::NotAvailable => None,
        }
    }
}

impl<T: Serialize> Serialize for Availability<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Availability::Available(value) => value.serialize(serializer),
            Availability::NotAvailable => serializer.serialize_str("NA"),
        }
    }
}

/// Response body sent in place of a profile when a lookup fails.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FailureResponse {
    pub status: Status,
    pub details: String,
}

impl FailureResponse {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            status: Status::Failed,
            details: details.into(),
        }
    }

    /// Body for a request path that does not name a platform and username.
    pub fn invalid_route() -> Self {
        Self::new("Invalid route")
    }
}

impl From<&ProfileError> for FailureResponse {
    fn from(err: &ProfileError) -> Self {
        Self::new(err.details())
    }
}
