//! REST API request handlers, one module per demo area.

pub mod hash;
pub mod health;
pub mod integrity;
pub mod reverse;
