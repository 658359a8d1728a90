// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Unit, Inferred, and Never Return Kinds
//!
//! This crate is a small teaching aid showing the three ways a Rust
//! function can "return":
//!
//! - **unit** (`()`): the function is called for its side effect and its
//!   result carries no information — [`print_name`] and [`print_sum`]
//!   (modulo the `Result` wrapper their writers need).
//! - **a value, with the type read off the body**: an expression-bodied
//!   function such as [`sum`], whose `i64` result is the whole point.
//! - **never** (`!`): the function cannot complete normally at all —
//!   [`spin_forever`] loops unconditionally and has no representable
//!   return value.
//!
//! # Quick Start
//!
//! ```
//! use std::io::stdout;
//! use anyhow::Result;
//! use voidnever::{print_name, print_sum};
//!
//! fn main() -> Result<()> {
//!     let mut out = stdout();
//!     print_name(&mut out, "Great typescripted")?;
//!     print_sum(&mut out, 25, 79)?;
//!     Ok(())
//! }
//! ```
//!
//! The printing functions take any [`Write`] so their exact output can be
//! captured and checked without touching the process's real stdout.

use std::io::Write;

use anyhow::Result;

/// Writes `name` and a trailing newline to `out`.
///
/// Called for its side effect only; apart from the I/O `Result` there is
/// nothing to return, which is what a `()` return type expresses.
pub fn print_name(out: &mut impl Write, name: &str) -> Result<()> {
    writeln!(out, "{name}")?;
    Ok(())
}

/// The sum of `a` and `b`.
///
/// Expression-bodied: the result type is exactly the type of `a + b`,
/// the value-returning member of the trio.
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Writes the decimal sum of `a` and `b`, with a trailing newline, to
/// `out`.
pub fn print_sum(out: &mut impl Write, a: i64, b: i64) -> Result<()> {
    writeln!(out, "{}", sum(a, b))?;
    Ok(())
}

/// Prints `typescripted` forever.
///
/// The `!` return type records that control flow never completes
/// normally: the loop has no `break` and no branch out, so there is no
/// value this function could produce. Code after a call to it is
/// unreachable, and the compiler knows it.
pub fn spin_forever() -> ! {
    loop {
        println!("typescripted");
    }
}
