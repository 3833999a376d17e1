use serde::Serialize;

/// A competitive programming judge a profile can be looked up on.
///
/// Parsed from the lowercase tag a caller passes (`"codeforces"`, `"spoj"`,
/// `"atcoder"`, `"interviewbit"`) and serialized as the display name echoed
/// back in every [`Profile`](crate::Profile).
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "Codeforces")]
    Codeforces,
    #[serde(rename = "SPOJ")]
    Spoj,
    #[serde(rename = "Atcoder")]
    AtCoder,
    /// Recognized but without a working extractor.
    #[serde(rename = "Interviewbit")]
    InterviewBit,
}
