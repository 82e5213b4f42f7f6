use serde::{Deserialize, Serialize};
use std::fmt;

/// One cast appearance: `actor` played in `movie`, listed with `gender`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub movie: String,
    pub actor: String,
    pub gender: Gender,
}

impl CastRecord {
    pub fn new(movie: impl Into<String>, actor: impl Into<String>, gender: impl Into<Gender>) -> Self {
        Self {
            movie: movie.into(),
            actor: actor.into(),
            gender: gender.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Unknown,
    /// Any label the dataset uses that is not one of the above, kept verbatim.
    Other(String),
}

impl Gender {
    pub fn is_female(&self) -> bool {
        matches!(self, Gender::Female)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => "Unknown",
            Gender::Other(label) => label,
        }
    }
}

impl From<&str> for Gender {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Female" => Gender::Female,
            "Male" => Gender::Male,
            "Unknown" => Gender::Unknown,
            other => Gender::Other(other.to_string()),
        }
    }
}

impl From<String> for Gender {
    fn from(label: String) -> Self {
        Gender::from(label.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_label() {
        assert_eq!(Gender::from("Female"), Gender::Female);
        assert_eq!(Gender::from(" Female "), Gender::Female);
        assert_eq!(Gender::from("Male"), Gender::Male);
        assert_eq!(Gender::from("Unknown"), Gender::Unknown);
        assert_eq!(Gender::from("Non-binary"), Gender::Other("Non-binary".to_string()));
    }

    #[test]
    fn test_gender_labels_are_case_sensitive() {
        assert_eq!(Gender::from("female"), Gender::Other("female".to_string()));
        assert_eq!(Gender::from(" FEMALE "), Gender::Other("FEMALE".to_string()));
        assert_eq!(Gender::from("male"), Gender::Other("male".to_string()));
    }

    #[test]
    fn test_only_female_counts_as_female() {
        assert!(Gender::Female.is_female());
        assert!(!Gender::Male.is_female());
        assert!(!Gender::Unknown.is_female());
        assert!(!Gender::Other("female-ish".to_string()).is_female());
    }
}
