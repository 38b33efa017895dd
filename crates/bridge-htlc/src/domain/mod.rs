//! # Domain Module
//!
//! Core domain types for the bridge originator.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod pre_image;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use pre_image::{PreImage, PRE_IMAGE_LEN};
pub use value_objects::*;
