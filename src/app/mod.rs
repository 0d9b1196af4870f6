// SPDX-License-Identifier: MPL-2.0
//! Application hosting: command-line flags and the async event loop that
//! drives an overlay session from input and timer channels.

pub mod driver;
mod flags;

pub use driver::run;
pub use flags::{Flags, DEFAULT_DURATION_SECS, USAGE};
