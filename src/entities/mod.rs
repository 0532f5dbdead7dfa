pub mod album;
pub mod category;
pub mod opaque;
pub mod singer;
pub mod song;

pub use opaque::Opaque;
