//! Lead submissions (quote requests, bookings, contact messages) and their
//! persisted records.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::notifications::templates::NotificationContent;
use crate::store::Collection;
use crate::validation::{
    normalize_email, normalize_optional, normalize_text, validate_email, validate_required,
    validate_single_line, Normalize, Validatable,
};

/// A persisted lead record.
pub trait Lead: Serialize + DeserializeOwned + NotificationContent + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> Uuid;
}

/// Client payload that becomes a [`Lead`] once the server assigns identity.
pub trait LeadSubmission: Normalize + Validatable + Send {
    type Record: Lead;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Self::Record;
}

/// Mandatory text arrives as absent, `null` or a string; the first two become
/// empty so they fail validation with a field-level message.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub address: String,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct QuoteRequestCreate {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Name is required"))]
    #[validate(custom(function = "validate_single_line", message = "Name must be a single line"))]
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_email", message = "A valid email address is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Phone is required"))]
    #[validate(length(max = 40, message = "Phone must not exceed 40 characters"))]
    pub phone: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Service is required"))]
    #[validate(length(max = 100, message = "Service must not exceed 100 characters"))]
    pub service: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Address is required"))]
    #[validate(length(max = 300, message = "Address must not exceed 300 characters"))]
    pub address: String,

    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: Option<String>,
}

impl Normalize for QuoteRequestCreate {
    fn normalize(&mut self) {
        normalize_text(&mut self.name);
        normalize_email(&mut self.email);
        normalize_text(&mut self.phone);
        normalize_text(&mut self.service);
        normalize_text(&mut self.address);
        normalize_optional(&mut self.message);
    }
}

impl LeadSubmission for QuoteRequestCreate {
    type Record = QuoteRequest;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> QuoteRequest {
        QuoteRequest {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            address: self.address,
            message: self.message.unwrap_or_default(),
            created_at,
        }
    }
}

impl Lead for QuoteRequest {
    const COLLECTION: Collection = Collection::Quotes;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub address: String,
    pub preferred_date: String,
    pub preferred_time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookingCreate {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Name is required"))]
    #[validate(custom(function = "validate_single_line", message = "Name must be a single line"))]
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_email", message = "A valid email address is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Phone is required"))]
    #[validate(length(max = 40, message = "Phone must not exceed 40 characters"))]
    pub phone: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Service is required"))]
    #[validate(length(max = 100, message = "Service must not exceed 100 characters"))]
    pub service: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Address is required"))]
    #[validate(length(max = 300, message = "Address must not exceed 300 characters"))]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Preferred date is required"))]
    #[validate(length(max = 50, message = "Preferred date must not exceed 50 characters"))]
    pub preferred_date: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Preferred time is required"))]
    #[validate(length(max = 50, message = "Preferred time must not exceed 50 characters"))]
    pub preferred_time: String,

    #[validate(length(max = 5000, message = "Notes must not exceed 5000 characters"))]
    pub notes: Option<String>,
}

impl Normalize for BookingCreate {
    fn normalize(&mut self) {
        normalize_text(&mut self.name);
        normalize_email(&mut self.email);
        normalize_text(&mut self.phone);
        normalize_text(&mut self.service);
        normalize_text(&mut self.address);
        normalize_text(&mut self.preferred_date);
        normalize_text(&mut self.preferred_time);
        normalize_optional(&mut self.notes);
    }
}

impl LeadSubmission for BookingCreate {
    type Record = Booking;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            address: self.address,
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            notes: self.notes.unwrap_or_default(),
            status: BookingStatus::Pending,
            created_at,
        }
    }
}

impl Lead for Booking {
    const COLLECTION: Collection = Collection::Bookings;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactMessageCreate {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Name is required"))]
    #[validate(custom(function = "validate_single_line", message = "Name must be a single line"))]
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_email", message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(max = 40, message = "Phone must not exceed 40 characters"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Subject is required"))]
    #[validate(custom(function = "validate_single_line", message = "Subject must be a single line"))]
    #[validate(length(max = 200, message = "Subject must not exceed 200 characters"))]
    pub subject: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_required", message = "Message is required"))]
    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: String,
}

impl Normalize for ContactMessageCreate {
    fn normalize(&mut self) {
        normalize_text(&mut self.name);
        normalize_email(&mut self.email);
        normalize_optional(&mut self.phone);
        normalize_text(&mut self.subject);
        normalize_text(&mut self.message);
    }
}

impl LeadSubmission for ContactMessageCreate {
    type Record = ContactMessage;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone.unwrap_or_default(),
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

impl Lead for ContactMessage {
    const COLLECTION: Collection = Collection::Contacts;

    fn id(&self) -> Uuid {
        self.id
    }
}
