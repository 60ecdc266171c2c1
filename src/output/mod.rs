//! Console rendering and CI integration

pub mod ci;
pub mod console;

pub use ci::CiEnvironment;
pub use console::{green, red, Color, Console};
