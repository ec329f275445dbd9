//! Best-effort email notifications for new leads

pub mod dispatcher;
pub mod mailer;
pub mod templates;

pub use dispatcher::{NotificationDispatcher, NotificationOutcome};
pub use mailer::{EmailMessage, Mailer, NotificationError, ResendMailer, SentEmail};
pub use templates::NotificationContent;
