#![doc = include_str!("../../README.md")]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

mod dependency;
mod error;
pub mod manifest;
pub mod parse;
mod requirement;
mod scheme;
mod version;

pub use dependency::*;
pub use error::*;
pub use requirement::*;
pub use scheme::*;
pub use version::*;

/// Re-exported crates referenced in macros.
#[doc(hidden)]
pub mod macro_support {
    pub use url;
}
