use serde::Serialize;

/// Ranking and problem lists of a SPOJ user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpojProfile {
    pub points: f64,
    pub rank: u32,
    /// Problem codes of accepted problems.
    pub solved: Vec<String>,
    /// Problem codes on the user's to-do list, `None` when the profile has no
    /// such list.
    pub todo: Option<Vec<String>>,
    pub join_date: String,
    pub institute: String,
}
