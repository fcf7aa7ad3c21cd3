use crate::domain::ContactField;
use thiserror::Error;

/// Every variant is an invalid-argument failure raised at the point of
/// violation; the variant names the constraint that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0} cannot be null")]
    MissingField(ContactField),
    #[error("invalid email address")]
    InvalidEmailAddress,
    #[error("invalid linkedin link")]
    InvalidLinkedinLink,
    #[error("invalid github or gitlab link")]
    InvalidGithubGitlabLink,
    #[error("invalid gender: {0}")]
    InvalidGender(String),
    #[error("unknown contact field: {0}")]
    UnknownField(String),
}

impl CoreError {
    pub fn field(&self) -> Option<ContactField> {
        match self {
            CoreError::MissingField(field) => Some(*field),
            CoreError::InvalidEmailAddress => Some(ContactField::EmailAddress),
            CoreError::InvalidLinkedinLink => Some(ContactField::LinkedinLink),
            CoreError::InvalidGithubGitlabLink => Some(ContactField::GithubGitlabLink),
            CoreError::InvalidGender(_) => Some(ContactField::Gender),
            CoreError::UnknownField(_) => None,
        }
    }
}
