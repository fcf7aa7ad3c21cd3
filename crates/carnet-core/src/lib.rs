pub mod domain;
pub mod error;
pub mod observe;
pub mod rules;

pub use domain::*;
pub use error::CoreError;
pub use observe::{ContactChange, Listeners, SubscriptionId};
pub use rules::*;
