use serde::Serialize;

use crate::model::Availability;

/// Rating summary of an AtCoder user.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct AtCoderProfile {
    pub rating: Availability<u32>,
    pub highest: Availability<u32>,
    pub rank: Availability<u32>,
    /// Skill level such as `"2 Kyu"` or `"1 Dan"`.
    pub level: Availability<String>,
}

impl AtCoderProfile {
    /// Profile of a user who never took part in a rated contest.
    pub fn never_rated() -> Self {
        Self {
            rating: Availability::NotAvailable,
            highest: Availability::NotAvailable,
            rank: Availability::NotAvailable,
            level: Availability::NotAvailable,
        }
    }
}
