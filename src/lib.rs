// Author: Lukas Bower
#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Library surface for the plain-char signedness probe.

pub mod features;
mod probe;

pub use probe::{Signedness, CHAR_IS_SIGNED, PROBE, PROBE_VALUE};
