use crate::domain::Gender;
use serde::{Deserialize, Serialize};

/// Nullable shape of a contact, used for form input and serialization.
///
/// A draft carries no guarantees; turning it into a
/// [`ContactRecord`](crate::domain::ContactRecord) runs every field check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, alias = "pseudo", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_gitlab_link: Option<String>,
}
