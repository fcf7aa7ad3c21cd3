use crate::domain::{ContactDraft, ContactField, FieldValue, Gender};
use crate::error::CoreError;
use crate::observe::{ContactChange, Listeners, SubscriptionId};
use crate::rules::validation::{
    require, validate_email_address, validate_github_gitlab_link, validate_linkedin_link,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// One contact card.
///
/// Required fields can never be absent. Optional fields start out empty.
/// Every successful change is reported to the listeners registered through
/// [`ContactRecord::subscribe`] or [`ContactRecord::subscribe_all`]; setting a
/// field to the value it already holds is not a change.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "ContactDraft", into = "ContactDraft")]
pub struct ContactRecord {
    last_name: String,
    first_name: String,
    gender: Gender,
    birth_date: Option<String>,
    nickname: Option<String>,
    address: String,
    personal_phone_number: String,
    professional_phone_number: Option<String>,
    email_address: String,
    linkedin_link: Option<String>,
    github_gitlab_link: Option<String>,
    listeners: Listeners,
}

impl ContactRecord {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        gender: Gender,
        address: impl Into<String>,
        personal_phone_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let email_address = validate_email_address(Some(email_address.into()))
            .map_err(|err| rejected(ContactField::EmailAddress, err))?;
        Ok(Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            gender,
            birth_date: None,
            nickname: None,
            address: address.into(),
            personal_phone_number: personal_phone_number.into(),
            professional_phone_number: None,
            email_address,
            linkedin_link: None,
            github_gitlab_link: None,
            listeners: Listeners::new(),
        })
    }

    /// Builds a record from nullable input. Required fields are checked in
    /// declaration order, so the error names the first missing one.
    pub fn from_draft(draft: ContactDraft) -> Result<Self, CoreError> {
        let last_name = require(ContactField::LastName, draft.last_name)?;
        let first_name = require(ContactField::FirstName, draft.first_name)?;
        let gender = require(ContactField::Gender, draft.gender)?;
        let address = require(ContactField::Address, draft.address)?;
        let personal_phone_number =
            require(ContactField::PersonalPhoneNumber, draft.personal_phone_number)?;
        let email_address = require(ContactField::EmailAddress, draft.email_address)?;

        let mut record = Self::new(
            last_name,
            first_name,
            gender,
            address,
            personal_phone_number,
            email_address,
        )?;
        record.birth_date = draft.birth_date;
        record.nickname = draft.nickname;
        record.professional_phone_number = draft.professional_phone_number;
        record.linkedin_link = validate_linkedin_link(draft.linkedin_link)?;
        record.github_gitlab_link = validate_github_gitlab_link(draft.github_gitlab_link)?;
        Ok(record)
    }

    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            last_name: Some(self.last_name.clone()),
            first_name: Some(self.first_name.clone()),
            gender: Some(self.gender),
            birth_date: self.birth_date.clone(),
            nickname: self.nickname.clone(),
            address: Some(self.address.clone()),
            personal_phone_number: Some(self.personal_phone_number.clone()),
            professional_phone_number: self.professional_phone_number.clone(),
            email_address: Some(self.email_address.clone()),
            linkedin_link: self.linkedin_link.clone(),
            github_gitlab_link: self.github_gitlab_link.clone(),
        }
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn personal_phone_number(&self) -> &str {
        &self.personal_phone_number
    }

    pub fn professional_phone_number(&self) -> Option<&str> {
        self.professional_phone_number.as_deref()
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn linkedin_link(&self) -> Option<&str> {
        self.linkedin_link.as_deref()
    }

    pub fn github_gitlab_link(&self) -> Option<&str> {
        self.github_gitlab_link.as_deref()
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        commit(
            ContactField::LastName,
            &mut self.last_name,
            value.into(),
            &mut self.listeners,
        );
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        commit(
            ContactField::FirstName,
            &mut self.first_name,
            value.into(),
            &mut self.listeners,
        );
    }

    pub fn set_gender(&mut self, value: Gender) {
        commit(
            ContactField::Gender,
            &mut self.gender,
            value,
            &mut self.listeners,
        );
    }

    pub fn set_birth_date(&mut self, value: Option<String>) {
        commit(
            ContactField::BirthDate,
            &mut self.birth_date,
            value,
            &mut self.listeners,
        );
    }

    pub fn set_nickname(&mut self, value: Option<String>) {
        commit(
            ContactField::Nickname,
            &mut self.nickname,
            value,
            &mut self.listeners,
        );
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        commit(
            ContactField::Address,
            &mut self.address,
            value.into(),
            &mut self.listeners,
        );
    }

    pub fn set_personal_phone_number(&mut self, value: impl Into<String>) {
        commit(
            ContactField::PersonalPhoneNumber,
            &mut self.personal_phone_number,
            value.into(),
            &mut self.listeners,
        );
    }

    pub fn set_professional_phone_number(&mut self, value: Option<String>) {
        commit(
            ContactField::ProfessionalPhoneNumber,
            &mut self.professional_phone_number,
            value,
            &mut self.listeners,
        );
    }

    pub fn set_email_address(&mut self, value: impl Into<String>) -> Result<(), CoreError> {
        let value = validate_email_address(Some(value.into()))
            .map_err(|err| rejected(ContactField::EmailAddress, err))?;
        commit(
            ContactField::EmailAddress,
            &mut self.email_address,
            value,
            &mut self.listeners,
        );
        Ok(())
    }

    pub fn set_linkedin_link(&mut self, value: Option<String>) -> Result<(), CoreError> {
        let value = validate_linkedin_link(value)
            .map_err(|err| rejected(ContactField::LinkedinLink, err))?;
        commit(
            ContactField::LinkedinLink,
            &mut self.linkedin_link,
            value,
            &mut self.listeners,
        );
        Ok(())
    }

    pub fn set_github_gitlab_link(&mut self, value: Option<String>) -> Result<(), CoreError> {
        let value = validate_github_gitlab_link(value)
            .map_err(|err| rejected(ContactField::GithubGitlabLink, err))?;
        commit(
            ContactField::GithubGitlabLink,
            &mut self.github_gitlab_link,
            value,
            &mut self.listeners,
        );
        Ok(())
    }

    /// Sets a field by name from nullable text, the way a form binds to it.
    /// Dispatches to the typed setter, so the checks are the same.
    pub fn set(&mut self, field: ContactField, value: Option<&str>) -> Result<(), CoreError> {
        let value = value.map(str::to_string);
        match field {
            ContactField::LastName => self.set_last_name(require_logged(field, value)?),
            ContactField::FirstName => self.set_first_name(require_logged(field, value)?),
            ContactField::Gender => {
                let gender = require_logged(field, value)?
                    .parse()
                    .map_err(|err| rejected(field, err))?;
                self.set_gender(gender);
            }
            ContactField::BirthDate => self.set_birth_date(value),
            ContactField::Nickname => self.set_nickname(value),
            ContactField::Address => self.set_address(require_logged(field, value)?),
            ContactField::PersonalPhoneNumber => {
                self.set_personal_phone_number(require_logged(field, value)?)
            }
            ContactField::ProfessionalPhoneNumber => self.set_professional_phone_number(value),
            ContactField::EmailAddress => {
                self.set_email_address(require_logged(field, value)?)?
            }
            ContactField::LinkedinLink => self.set_linkedin_link(value)?,
            ContactField::GithubGitlabLink => self.set_github_gitlab_link(value)?,
        }
        Ok(())
    }

    pub fn get(&self, field: ContactField) -> Option<FieldValue> {
        match field {
            ContactField::LastName => self.last_name.to_field_value(),
            ContactField::FirstName => self.first_name.to_field_value(),
            ContactField::Gender => self.gender.to_field_value(),
            ContactField::BirthDate => self.birth_date.to_field_value(),
            ContactField::Nickname => self.nickname.to_field_value(),
            ContactField::Address => self.address.to_field_value(),
            ContactField::PersonalPhoneNumber => self.personal_phone_number.to_field_value(),
            ContactField::ProfessionalPhoneNumber => {
                self.professional_phone_number.to_field_value()
            }
            ContactField::EmailAddress => self.email_address.to_field_value(),
            ContactField::LinkedinLink => self.linkedin_link.to_field_value(),
            ContactField::GithubGitlabLink => self.github_gitlab_link.to_field_value(),
        }
    }

    pub fn subscribe<F>(&mut self, field: ContactField, listener: F) -> SubscriptionId
    where
        F: FnMut(&ContactChange) + 'static,
    {
        self.listeners.subscribe(Some(field), listener)
    }

    pub fn subscribe_all<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ContactChange) + 'static,
    {
        self.listeners.subscribe(None, listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl TryFrom<ContactDraft> for ContactRecord {
    type Error = CoreError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        Self::from_draft(draft)
    }
}

impl From<ContactRecord> for ContactDraft {
    fn from(record: ContactRecord) -> Self {
        record.to_draft()
    }
}

/// Copies the field values; listeners stay with the original.
impl Clone for ContactRecord {
    fn clone(&self) -> Self {
        Self {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            gender: self.gender,
            birth_date: self.birth_date.clone(),
            nickname: self.nickname.clone(),
            address: self.address.clone(),
            personal_phone_number: self.personal_phone_number.clone(),
            professional_phone_number: self.professional_phone_number.clone(),
            email_address: self.email_address.clone(),
            linkedin_link: self.linkedin_link.clone(),
            github_gitlab_link: self.github_gitlab_link.clone(),
            listeners: Listeners::new(),
        }
    }
}

impl PartialEq for ContactRecord {
    fn eq(&self, other: &Self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field) == other.get(field))
    }
}

impl Eq for ContactRecord {}

impl fmt::Debug for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactRecord")
            .field("last_name", &self.last_name)
            .field("first_name", &self.first_name)
            .field("gender", &self.gender)
            .field("birth_date", &self.birth_date)
            .field("nickname", &self.nickname)
            .field("address", &self.address)
            .field("personal_phone_number", &self.personal_phone_number)
            .field("professional_phone_number", &self.professional_phone_number)
            .field("email_address", &self.email_address)
            .field("linkedin_link", &self.linkedin_link)
            .field("github_gitlab_link", &self.github_gitlab_link)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Contact{")?;
        for (index, field) in ContactField::ALL.into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match self.get(field) {
                Some(value) => write!(f, "{}='{}'", field, value)?,
                None => write!(f, "{}='null'", field)?,
            }
        }
        f.write_str("}")
    }
}

trait FieldSlot: PartialEq {
    fn to_field_value(&self) -> Option<FieldValue>;
}

impl FieldSlot for String {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Text(self.clone()))
    }
}

impl FieldSlot for Option<String> {
    fn to_field_value(&self) -> Option<FieldValue> {
        self.clone().map(FieldValue::Text)
    }
}

impl FieldSlot for Gender {
    fn to_field_value(&self) -> Option<FieldValue> {
        Some(FieldValue::Gender(*self))
    }
}

fn commit<T: FieldSlot>(field: ContactField, slot: &mut T, value: T, listeners: &mut Listeners) {
    if *slot == value {
        return;
    }
    let old = std::mem::replace(slot, value);
    let change = ContactChange {
        field,
        old: old.to_field_value(),
        new: slot.to_field_value(),
    };
    trace!(field = %field, "contact field updated");
    listeners.notify(&change);
}

fn require_logged<T>(field: ContactField, value: Option<T>) -> Result<T, CoreError> {
    require(field, value).map_err(|err| rejected(field, err))
}

fn rejected(field: ContactField, err: CoreError) -> CoreError {
    debug!(field = %field, error = %err, "contact update rejected");
    err
}
