//! Page components.

pub mod availability;
pub mod contact;
pub mod greeting;
pub mod nav;
pub mod starfield;
