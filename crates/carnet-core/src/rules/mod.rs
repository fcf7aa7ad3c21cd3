pub mod validation;

pub use validation::{
    is_valid_email_address, is_valid_github_gitlab_link, is_valid_linkedin_link, require,
    validate_email_address, validate_github_gitlab_link, validate_linkedin_link,
};
