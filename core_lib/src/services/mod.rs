pub mod content_service;
pub mod intake_service;

pub use content_service::ContentCatalog;
pub use intake_service::LeadService;
