use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::AppError;

/// Upper bound on contact methods a visitor may attach to one submission.
pub const MAX_CONTACT_METHODS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Bug,
    Feature,
    Usability,
    Content,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethodType {
    #[default]
    Email,
    Phone,
    Whatsapp,
    Instagram,
    Facebook,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    #[serde(rename = "type")]
    pub method_type: ContactMethodType,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_methods: Option<Vec<ContactMethod>>,
}

/// Request body posted to the feedback endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct FeedbackSubmission {
    pub feedback_type: FeedbackType,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Subject is required"))
    )]
    pub subject: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

/// Response to a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Editable state behind the feedback form.
///
/// Holds the initial values it was opened with so that `reset` after a
/// successful submission brings back the same pre-filled subject and page.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackDraft {
    pub feedback_type: FeedbackType,
    pub subject: String,
    pub description: String,
    pub related_page: String,
    pub name: String,
    pub contact_methods: Vec<ContactMethod>,
    initial_type: FeedbackType,
    initial_subject: String,
    initial_related_page: String,
}

impl Default for FeedbackDraft {
    fn default() -> Self {
        Self::new(FeedbackType::General, "", "")
    }
}

impl FeedbackDraft {
    pub fn new(
        feedback_type: FeedbackType,
        subject: impl Into<String>,
        related_page: impl Into<String>,
    ) -> Self {
        let subject = subject.into();
        let related_page = related_page.into();
        Self {
            feedback_type,
            subject: subject.clone(),
            description: String::new(),
            related_page: related_page.clone(),
            name: String::new(),
            contact_methods: vec![ContactMethod::default()],
            initial_type: feedback_type,
            initial_subject: subject,
            initial_related_page: related_page,
        }
    }

    /// Append an empty phone contact method.
    pub fn add_contact_method(&mut self) -> Result<(), AppError> {
        if self.contact_methods.len() >= MAX_CONTACT_METHODS {
            return Err(AppError::bad_request(format!(
                "Maximum {MAX_CONTACT_METHODS} contact methods allowed"
            )));
        }
        self.contact_methods.push(ContactMethod {
            method_type: ContactMethodType::Phone,
            value: String::new(),
        });
        Ok(())
    }

    /// Remove the contact method at `index`; out-of-range indices are ignored.
    pub fn remove_contact_method(&mut self, index: usize) {
        if index < self.contact_methods.len() {
            self.contact_methods.remove(index);
        }
    }

    pub fn set_contact_type(&mut self, index: usize, method_type: ContactMethodType) {
        if let Some(method) = self.contact_methods.get_mut(index) {
            method.method_type = method_type;
        }
    }

    pub fn set_contact_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(method) = self.contact_methods.get_mut(index) {
            method.value = value.into();
        }
    }

    /// Client-side required-field check, run before anything is sent.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if self.subject.trim().is_empty() {
            field_errors.insert("subject".to_string(), "Subject is required".to_string());
        }
        if self.description.trim().is_empty() {
            field_errors.insert(
                "description".to_string(),
                "Description is required".to_string(),
            );
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", field_errors))
        }
    }

    /// Build the request body.
    ///
    /// `relatedPage` is sent only when filled in. `contactInfo` is sent only
    /// when the visitor gave a name or at least one contact value, and then
    /// carries only the filled contact methods.
    pub fn to_submission(&self) -> FeedbackSubmission {
        let related_page = Some(self.related_page.clone()).filter(|p| !p.trim().is_empty());

        let name = Some(self.name.clone()).filter(|n| !n.trim().is_empty());
        let filled: Vec<ContactMethod> = self
            .contact_methods
            .iter()
            .filter(|m| !m.value.trim().is_empty())
            .cloned()
            .collect();

        let contact_info = if name.is_some() || !filled.is_empty() {
            Some(ContactInfo {
                name,
                contact_methods: Some(filled).filter(|m| !m.is_empty()),
            })
        } else {
            None
        };

        FeedbackSubmission {
            feedback_type: self.feedback_type,
            subject: self.subject.clone(),
            description: self.description.clone(),
            related_page,
            contact_info,
        }
    }

    /// Restore the values the form was opened with.
    pub fn reset(&mut self) {
        *self = Self::new(
            self.initial_type,
            self.initial_subject.clone(),
            self.initial_related_page.clone(),
        );
    }
}
