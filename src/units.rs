// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width code units the distance routine can operate on.
//!
//! Equality between units is raw (`==` on the unit itself). Class membership is
//! decided on the unit's `char` value, which is always a widening: a byte is read
//! as Latin-1, a UTF-16 unit as its BMP scalar, a `u32` as a Unicode scalar. Units
//! with no scalar value (lone surrogates, out-of-range `u32`) belong to no class.
//! Nothing is ever truncated to a narrower type for the membership test.

/// A single fixed-width element of a sequence.
pub trait CodeUnit: Copy + Eq {
    /// The unit's character value, or `None` if it does not encode one.
    fn as_char(self) -> Option<char>;
}

impl CodeUnit for u8 {
    #[inline]
    fn as_char(self) -> Option<char> {
        Some(char::from(self))
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn as_char(self) -> Option<char> {
        char::from_u32(u32::from(self))
    }
}

impl CodeUnit for u32 {
    #[inline]
    fn as_char(self) -> Option<char> {
        char::from_u32(self)
    }
}

impl CodeUnit for char {
    #[inline]
    fn as_char(self) -> Option<char> {
        Some(self)
    }
}
