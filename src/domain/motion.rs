use serde::Deserialize;

/// A row of the motions table: who moved and seconded it, where it applies and how members voted.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Motion {
    #[serde(rename = "Mover")]
    pub mover: Option<String>,
    #[serde(rename = "Second")]
    pub second: Option<String>,
    #[serde(rename = "geojson")]
    pub geojson: Option<String>,
    #[serde(rename = "Votes")]
    pub votes: Option<String>,
}

impl Motion {
    pub fn moved_by(&self, name: &str) -> bool {
        matches_name(self.mover.as_deref(), name)
    }

    pub fn seconded_by(&self, name: &str) -> bool {
        matches_name(self.second.as_deref(), name)
    }

    /// The recorded votes, or `None` if the vote list is absent or cannot be decoded.
    pub fn votes(&self) -> Option<Vec<Vote>> {
        serde_json::from_str(self.votes.as_deref()?).ok()
    }
}

#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vote {
    #[serde(rename = "Member Name")]
    pub member_name: Option<String>,
    #[serde(rename = "Vote")]
    pub vote: Option<String>,
}

impl Vote {
    pub fn cast_by(&self, name: &str) -> bool {
        matches_name(self.member_name.as_deref(), name)
    }

    pub fn is_yes(&self) -> bool {
        self.vote.as_deref() == Some("YES")
    }

    pub fn is_no(&self) -> bool {
        self.vote.as_deref() == Some("NO")
    }
}

fn matches_name(candidate: Option<&str>, name: &str) -> bool {
    candidate.is_some_and(|candidate| candidate.trim().eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn motion(votes: &str) -> Motion {
        Motion {
            votes: Some(votes.to_string()),
            ..Motion::default()
        }
    }

    #[test]
    fn votes_decodes_the_vote_list() {
        let motion = motion(r#"[{"Member Name": "NITHYA RAMAN", "Vote": "YES"}, {"Member Name": "JOHN LEE"}]"#);

        assert_eq!(
            motion.votes(),
            Some(vec![
                Vote {
                    member_name: Some("NITHYA RAMAN".to_string()),
                    vote: Some("YES".to_string()),
                },
                Vote {
                    member_name: Some("JOHN LEE".to_string()),
                    vote: None,
                },
            ])
        );
    }

    #[test]
    fn votes_is_none_for_an_undecodable_list() {
        assert_eq!(motion("not json").votes(), None);
        assert_eq!(Motion::default().votes(), None);
    }

    #[test]
    fn mover_and_second_match_case_insensitively() {
        let motion = Motion {
            mover: Some("TRACI PARK".to_string()),
            second: Some("John Lee".to_string()),
            ..Motion::default()
        };

        assert!(motion.moved_by("Traci Park"));
        assert!(motion.seconded_by("JOHN LEE"));
        assert!(!motion.moved_by("John Lee"));
    }

    #[test]
    fn vote_recognizes_yes_and_no() {
        let yes = Vote {
            member_name: None,
            vote: Some("YES".to_string()),
        };
        let absent = Vote {
            member_name: None,
            vote: Some("ABSENT".to_string()),
        };

        assert!(yes.is_yes() && !yes.is_no());
        assert!(!absent.is_yes() && !absent.is_no());
    }
}
