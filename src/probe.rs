// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Compile-time probe constant and signedness classification for plain char.
// Author: Lukas Bower

//! Compile-time probe for the signedness of the platform's plain `char` type.
//!
//! The C ABI leaves the signedness of plain `char` to the target, and Rust
//! mirrors that choice in [`core::ffi::c_char`]. The probe constant below
//! carries the bit pattern of decimal `-2`; whether it reads back as `-2` or
//! `254` after integer promotion tells us which definition the target uses.

use core::ffi::c_char;
use core::fmt;

use static_assertions::assert_eq_size;

// The whole scheme relies on plain char being exactly one byte wide.
assert_eq_size!(c_char, u8);

/// Probe constant holding the bit pattern of decimal `-2` in plain `char`.
pub const PROBE: c_char = -2i8 as c_char;

/// The probe value after integer promotion.
///
/// Matches how C evaluates `c < 0`: the value sign-extends to `-2` on
/// signed-char targets and zero-extends to `254` on unsigned-char targets.
pub const PROBE_VALUE: i32 = PROBE as i32;

/// Whether plain `char` is a signed type on the current target.
pub const CHAR_IS_SIGNED: bool = PROBE_VALUE < 0;

/// Assert at compile time that plain `char` is signed on the current target.
///
/// Expands to a constant item, so the assertion is usable anywhere items are
/// accepted. A mismatch fails the build with the fixed diagnostic
/// `Expected char to be signed`.
#[macro_export]
macro_rules! assert_char_signed {
    () => {
        const _: () = ::core::assert!(
            $crate::PROBE_VALUE < 0,
            "Expected char to be signed"
        );
    };
}

/// Assert at compile time that plain `char` is unsigned on the current target.
///
/// A mismatch fails the build with the fixed diagnostic
/// `Expected char to be unsigned`.
#[macro_export]
macro_rules! assert_char_unsigned {
    () => {
        const _: () = ::core::assert!(
            $crate::PROBE_VALUE > 0,
            "Expected char to be unsigned"
        );
    };
}

/// Signedness classification of an integer-like type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signedness {
    /// The representable range includes negative values.
    Signed,
    /// The representable range covers non-negative values only.
    Unsigned,
}

impl Signedness {
    /// Classification of plain `char` on the current target.
    pub const fn of_char() -> Self {
        if CHAR_IS_SIGNED {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        }
    }

    /// Stable lowercase name for log and audit lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
