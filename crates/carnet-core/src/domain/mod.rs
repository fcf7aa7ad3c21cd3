pub mod contact;
pub mod draft;
pub mod field;
pub mod gender;

pub use contact::ContactRecord;
pub use draft::ContactDraft;
pub use field::{ContactField, FieldValue};
pub use gender::Gender;
