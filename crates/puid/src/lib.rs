//! # puid
//!
//! Prefixed, sortable identifiers: a 128-bit UUID (normally version 7)
//! rendered as a 3-letter type tag followed by 26 lowercase Crockford base32
//! symbols.
//!
//! ```text
//! 01960ec0-c6cf-74d3-ae14-50c20e035fe6  <->  tst06b0xg66sxtd7bgma310w0tzwr
//! ```
//!
//! The crate has two independent halves:
//!
//! - the identifier codec ([`encode`], [`decode`], [`validate`], [`new_id`]),
//!   which validates both directions so identifiers can be trusted at system
//!   boundaries;
//! - the prefix deriver ([`derive_prefixes`]), which assigns stable, unique
//!   prefixes to a batch of model names.
//!
//! ## Features
//!
//! - `generator` (default): the thread-local RNG and [`new_id`].
//! - `tracing`: trace spans for codec and generator calls, debug events for
//!   prefix collisions.

mod adapter;
mod base32;
mod codec;
mod deriver;
mod error;
mod generator;
mod prefix;
mod rand;
mod time;
mod uuid;

pub use crate::adapter::*;
pub use crate::base32::*;
pub use crate::codec::*;
pub use crate::deriver::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::prefix::*;
pub use crate::rand::*;
pub use crate::time::*;
pub use crate::uuid::*;
