pub mod resource;

pub use resource::{CatalogError, ResourceService};
