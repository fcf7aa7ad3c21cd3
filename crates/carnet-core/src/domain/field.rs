use crate::domain::Gender;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields of a contact record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    LastName,
    FirstName,
    Gender,
    BirthDate,
    Nickname,
    Address,
    PersonalPhoneNumber,
    ProfessionalPhoneNumber,
    EmailAddress,
    LinkedinLink,
    GithubGitlabLink,
}

impl ContactField {
    pub const ALL: [ContactField; 11] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::Gender,
        ContactField::BirthDate,
        ContactField::Nickname,
        ContactField::Address,
        ContactField::PersonalPhoneNumber,
        ContactField::ProfessionalPhoneNumber,
        ContactField::EmailAddress,
        ContactField::LinkedinLink,
        ContactField::GithubGitlabLink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::LastName => "lastName",
            ContactField::FirstName => "firstName",
            ContactField::Gender => "gender",
            ContactField::BirthDate => "birthDate",
            ContactField::Nickname => "nickname",
            ContactField::Address => "address",
            ContactField::PersonalPhoneNumber => "personalPhoneNumber",
            ContactField::ProfessionalPhoneNumber => "professionalPhoneNumber",
            ContactField::EmailAddress => "emailAddress",
            ContactField::LinkedinLink => "linkedinLink",
            ContactField::GithubGitlabLink => "githubGitlabLink",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            ContactField::LastName
                | ContactField::FirstName
                | ContactField::Gender
                | ContactField::Address
                | ContactField::PersonalPhoneNumber
                | ContactField::EmailAddress
        )
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("pseudo") {
            return Ok(ContactField::Nickname);
        }
        ContactField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownField(trimmed.to_string()))
    }
}

/// Dynamically typed value of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Gender(Gender),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Gender(_) => None,
        }
    }

    pub fn as_gender(&self) -> Option<Gender> {
        match self {
            FieldValue::Gender(gender) => Some(*gender),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Gender(gender) => gender.fmt(f),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<Gender> for FieldValue {
    fn from(value: Gender) -> Self {
        FieldValue::Gender(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}
