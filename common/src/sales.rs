//! # Sale Models
//!
//! Monetary sale value objects and the textual form in which they enter
//! the tool. All amounts are exact decimals; validation happens in the
//! constructors, so an existing value is always well-formed.

pub mod channel;
pub mod entry;
pub mod sale;
