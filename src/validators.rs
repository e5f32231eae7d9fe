use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use yew::Reducible;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_email_valid(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Company,
    Email,
    FacilityType,
    Message,
}

impl ContactField {
    /// Form control id, also used to link error text via `aria-describedby`.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Company => "company",
            ContactField::Email => "email",
            ContactField::FacilityType => "facilityType",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please include your name.")]
    MissingName,
    #[error("Please include your company.")]
    MissingCompany,
    #[error("Please provide a valid email.")]
    InvalidEmail,
    #[error("Select a facility type.")]
    MissingFacilityType,
    #[error("Share a short description of your needs.")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormValues {
    pub name: String,
    pub company: String,
    pub email: String,
    pub facility_type: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Company => &self.company,
            ContactField::Email => &self.email,
            ContactField::FacilityType => &self.facility_type,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Company => self.company = value,
            ContactField::Email => self.email = value,
            ContactField::FacilityType => self.facility_type = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> ContactFormErrors {
        let mut errors = ContactFormErrors::default();
        if !is_non_empty(&self.name) {
            errors.insert(ContactField::Name, ValidationError::MissingName);
        }
        if !is_non_empty(&self.company) {
            errors.insert(ContactField::Company, ValidationError::MissingCompany);
        }
        if !is_email_valid(&self.email) {
            errors.insert(ContactField::Email, ValidationError::InvalidEmail);
        }
        if !is_non_empty(&self.facility_type) {
            errors.insert(ContactField::FacilityType, ValidationError::MissingFacilityType);
        }
        if !is_non_empty(&self.message) {
            errors.insert(ContactField::Message, ValidationError::MissingMessage);
        }
        errors
    }
}

/// Edits applied to the form state. Each one builds on the latest values,
/// so several fields changing before a re-render (autofill) all stick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormAction {
    SetField(ContactField, String),
    Reset,
}

impl Reducible for ContactFormValues {
    type Action = ContactFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContactFormAction::SetField(field, value) => {
                if self.get(field) == value {
                    return self;
                }
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            ContactFormAction::Reset => Rc::new(Self::default()),
        }
    }
}

/// Field errors from the last submit attempt, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormErrors(BTreeMap<ContactField, ValidationError>);

impl ContactFormErrors {
    fn insert(&mut self, field: ContactField, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: ContactField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}
