use crate::domain::ContactField;
use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
        .expect("Failed to compile email address regex")
});

static LINKEDIN_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(linkedin)\.com/[a-zA-Z0-9_-]+/?$")
        .expect("Failed to compile linkedin link regex")
});

static GITHUB_GITLAB_LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(github|gitlab)\.com/[a-zA-Z0-9_-]+/?$")
        .expect("Failed to compile github/gitlab link regex")
});

pub fn is_valid_email_address(value: &str) -> bool {
    EMAIL_ADDRESS_REGEX.is_match(value)
}

pub fn is_valid_linkedin_link(value: &str) -> bool {
    LINKEDIN_LINK_REGEX.is_match(value)
}

pub fn is_valid_github_gitlab_link(value: &str) -> bool {
    GITHUB_GITLAB_LINK_REGEX.is_match(value)
}

/// Rejects an absent value for a required field.
pub fn require<T>(field: ContactField, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or(CoreError::MissingField(field))
}

pub fn validate_email_address(value: Option<String>) -> Result<String, CoreError> {
    let value = require(ContactField::EmailAddress, value)?;
    if !is_valid_email_address(&value) {
        return Err(CoreError::InvalidEmailAddress);
    }
    Ok(value)
}

pub fn validate_linkedin_link(value: Option<String>) -> Result<Option<String>, CoreError> {
    match value {
        Some(link) if !is_valid_linkedin_link(&link) => Err(CoreError::InvalidLinkedinLink),
        other => Ok(other),
    }
}

pub fn validate_github_gitlab_link(value: Option<String>) -> Result<Option<String>, CoreError> {
    match value {
        Some(link) if !is_valid_github_gitlab_link(&link) => {
            Err(CoreError::InvalidGithubGitlabLink)
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_common_shapes() {
        assert!(is_valid_email_address("a@b.co"));
        assert!(is_valid_email_address("john.doe+news@mail.example.com"));
        assert!(is_valid_email_address("first_last%tag@host-name.museum"));
    }

    #[test]
    fn email_rejects_malformed_values() {
        assert!(!is_valid_email_address("not-an-email"));
        assert!(!is_valid_email_address("a@b.c"));
        assert!(!is_valid_email_address("a@b.abcdefg"));
        assert!(!is_valid_email_address("a b@c.com"));
        assert!(!is_valid_email_address("a@b.co\n"));
        assert!(!is_valid_email_address(""));
    }

    #[test]
    fn email_is_case_sensitive_only_in_character_classes() {
        assert!(is_valid_email_address("ADA@EXAMPLE.COM"));
        assert!(!is_valid_email_address("ada@example.c0m"));
    }

    #[test]
    fn linkedin_accepts_optional_scheme_and_www() {
        assert!(is_valid_linkedin_link("https://linkedin.com/johndoe"));
        assert!(is_valid_linkedin_link("http://www.linkedin.com/john_doe/"));
        assert!(is_valid_linkedin_link("linkedin.com/john-doe"));
    }

    #[test]
    fn linkedin_rejects_other_hosts_and_nested_paths() {
        assert!(!is_valid_linkedin_link("https://facebook.com/johndoe"));
        assert!(!is_valid_linkedin_link("https://linkedin.com/in/johndoe"));
        assert!(!is_valid_linkedin_link("https://LinkedIn.com/johndoe"));
        assert!(!is_valid_linkedin_link("ftp://linkedin.com/johndoe"));
    }

    #[test]
    fn github_gitlab_accepts_both_hosts() {
        assert!(is_valid_github_gitlab_link("https://github.com/octocat"));
        assert!(is_valid_github_gitlab_link("https://gitlab.com/octocat"));
        assert!(is_valid_github_gitlab_link("www.github.com/octocat/"));
    }

    #[test]
    fn github_gitlab_rejects_other_hosts() {
        assert!(!is_valid_github_gitlab_link("https://bitbucket.org/octocat"));
        assert!(!is_valid_github_gitlab_link("https://github.io/octocat"));
    }

    #[test]
    fn validate_email_rejects_null_explicitly() {
        assert_eq!(
            validate_email_address(None),
            Err(CoreError::MissingField(ContactField::EmailAddress))
        );
        assert_eq!(
            validate_email_address(Some("nope".to_string())),
            Err(CoreError::InvalidEmailAddress)
        );
    }

    #[test]
    fn validate_links_let_null_through() {
        assert_eq!(validate_linkedin_link(None), Ok(None));
        assert_eq!(validate_github_gitlab_link(None), Ok(None));
        assert_eq!(
            validate_github_gitlab_link(Some("https://bitbucket.org/octocat".to_string())),
            Err(CoreError::InvalidGithubGitlabLink)
        );
    }
}
