//! Platform-agnostic building blocks shared by the views and components.

pub mod map;
pub mod timing;
pub mod toggle;
