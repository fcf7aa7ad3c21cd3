use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    NoGender,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NoGender];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NoGender => "NoGender",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidGender(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Gender;

    #[test]
    fn parse_gender_ignores_case() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" NOGENDER ".parse::<Gender>().unwrap(), Gender::NoGender);
    }

    #[test]
    fn parse_gender_rejects_unknown() {
        assert!("other".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(Gender::Female.to_string(), "Female");
    }
}
