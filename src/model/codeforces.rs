use serde::Serialize;

use crate::model::Rated;

/// Rating summary and contest history of a Codeforces user.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CodeforcesProfile {
    pub rating: Rated<i64>,
    pub max_rating: Rated<i64>,
    pub rank: Rated<String>,
    pub max_rank: Rated<String>,
    /// Rows of the contest history table, in page order.
    pub contests: Vec<ContestEntry>,
}

/// One row of a Codeforces contest history table, kept as displayed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ContestEntry {
    #[serde(rename = "Contest")]
    pub contest: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Solved")]
    pub solved: String,
    #[serde(rename = "Rating Change")]
    pub rating_change: String,
    #[serde(rename = "New Rating")]
    pub new_rating: String,
}
