pub mod content;
pub mod health;
pub mod leads;
pub mod routes;
