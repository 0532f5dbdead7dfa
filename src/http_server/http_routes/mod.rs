pub mod greeting;
pub mod resource;
