//! Shared source-location types used by the readers, tokens and log events

pub mod span;

pub use span::{Position, Span};
