//! # Arithm
//!
//! Integer arithmetic primitives.
//!
//! All operations work on `i64`. Overflow wraps around using two's complement
//! arithmetic, so `add` is total and never panics, in debug or release builds.
//!
//! ```rust
//! assert_eq!(arithm::add(2, 3), 5);
//! assert_eq!(arithm::add(i64::MAX, 1), i64::MIN);
//! ```

/// Adds two integers, wrapping on overflow.
#[must_use]
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
