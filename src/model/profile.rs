use serde::Serialize;

use crate::model::{AtCoderProfile, CodeforcesProfile, Platform, SpojProfile, Status};

/// A normalized profile returned by a successful lookup.
///
/// The platform-specific fields are flattened next to `status`, `username`
/// and `platform`, so the serialized form is a single flat object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub status: Status,
    pub username: String,
    pub platform: Platform,
    #[serde(flatten)]
    pub details: ProfileDetails,
}

impl Profile {
    /// Wrap extracted details, echoing `username` and the platform the details
    /// came from.
    pub fn new(username: impl Into<String>, details: ProfileDetails) -> Self {
        Self {
            status: Status::Success,
            username: username.into(),
            platform: details.platform(),
            details,
        }
    }
}

/// Platform-specific part of a [`Profile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileDetails {
    Codeforces(CodeforcesProfile),
    Spoj(SpojProfile),
    AtCoder(AtCoderProfile),
}

impl ProfileDetails {
    pub fn platform(&self) -> Platform {
        match self {
            ProfileDetails::Codeforces(_) => Platform::Codeforces,
            ProfileDetails::Spoj(_) => Platform::Spoj,
            ProfileDetails::AtCoder(_) => Platform::AtCoder,
        }
    }
}

impl From<CodeforcesProfile> for ProfileDetails {
    fn from(profile: CodeforcesProfile) -> Self {
        ProfileDetails::Codeforces(profile)
    }
}

impl From<SpojProfile> for ProfileDetails {
    fn from(profile: SpojProfile) -> Self {
        ProfileDetails::Spoj(profile)
    }
}

impl From<AtCoderProfile> for ProfileDetails {
    fn from(profile: AtCoderProfile) -> Self {
        ProfileDetails::AtCoder(profile)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{Availability, ContestEntry, Rated};

    #[test]
    fn test_codeforces_profile_json_shape() {
        let profile = Profile::new(
            "uwi",
            CodeforcesProfile {
                rating: Rated::Rated(3000),
                max_rating: Rated::Rated(3200),
                rank: Rated::Rated("legendary grandmaster".to_string()),
                max_rank: Rated::Rated("legendary grandmaster".to_string()),
                contests: vec![ContestEntry {
                    contest: "Codeforces Round 1".to_string(),
                    rank: "3".to_string(),
                    solved: "5".to_string(),
                    rating_change: "+42".to_string(),
                    new_rating: "3000".to_string(),
                }],
            }
            .into(),
        );

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "status": "Success",
                "username": "uwi",
                "platform": "Codeforces",
                "rating": 3000,
                "max_rating": 3200,
                "rank": "legendary grandmaster",
                "max_rank": "legendary grandmaster",
                "contests": [{
                    "Contest": "Codeforces Round 1",
                    "Rank": "3",
                    "Solved": "5",
                    "Rating Change": "+42",
                    "New Rating": "3000"
                }]
            })
        );
    }

    #[test]
    fn test_spoj_profile_without_todo_serializes_null() {
        let profile = Profile::new(
            "someone",
            SpojProfile {
                points: 12.5,
                rank: 4021,
                solved: vec!["TEST".to_string()],
                todo: None,
                join_date: "March 2015".to_string(),
                institute: "Some University".to_string(),
            }
            .into(),
        );

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["platform"], "SPOJ");
        assert_eq!(json["todo"], serde_json::Value::Null);
        assert_eq!(json["join_date"], "March 2015");
        assert_eq!(json["points"], 12.5);
    }

    #[test]
    fn test_unrated_atcoder_profile() {
        let profile = Profile::new("newbie", AtCoderProfile::never_rated().into());
        assert_eq!(profile.platform, Platform::AtCoder);
        assert_eq!(profile.details.platform(), profile.platform);
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "status": "Success",
                "username": "newbie",
                "platform": "Atcoder",
                "rating": "NA",
                "highest": "NA",
                "rank": "NA",
                "level": "NA"
            })
        );
        assert_eq!(
            AtCoderProfile::never_rated().level,
            Availability::<String>::NotAvailable
        );
    }
}
