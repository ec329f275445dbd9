pub mod content;
pub mod leads;

pub use content::{GalleryItem, Service, Testimonial};
pub use leads::*;
