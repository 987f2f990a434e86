//! Core invoice value types and subtotal arithmetic.
//!
//! Everything here is a plain, stateless value record: no identity, no
//! lifecycle, no persistence beyond one pipeline invocation.

mod types;

pub use types::*;
