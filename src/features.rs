// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Compile-time feature manifest and guard rails for probe builds.
// Author: Lukas Bower

//! Compile-time feature manifest and guard rails for probe builds.

/// True when the build expects plain `char` to be signed.
pub const EXPECT_SIGNED: bool = cfg!(feature = "expect-char-signed");

/// True when the build expects plain `char` to be unsigned.
pub const EXPECT_UNSIGNED: bool = cfg!(feature = "expect-char-unsigned");

#[cfg(all(feature = "expect-char-signed", feature = "expect-char-unsigned"))]
compile_error!("features `expect-char-signed` and `expect-char-unsigned` are mutually exclusive");

#[cfg(feature = "expect-char-signed")]
crate::assert_char_signed!();

#[cfg(feature = "expect-char-unsigned")]
crate::assert_char_unsigned!();

/// Emit a single audit line describing the active expectation, if any.
pub fn emit_expectation_audit() {
    if EXPECT_SIGNED {
        log::debug!("expectation: plain char is signed");
    } else if EXPECT_UNSIGNED {
        log::debug!("expectation: plain char is unsigned");
    }
}
