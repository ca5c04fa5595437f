//! Unicode emoji registry ingestion.
//!
//! This crate covers the front half of the constant-table pipeline: fetching
//! the two Unicode Consortium registry files, sanitizing their lines, and
//! parsing them into structured records.
//!
//! - [`sanitize::sanitized_lines`] strips comments/blanks and normalizes
//!   smart quotes.
//! - [`base::parse_base_registry`] reads the flat emoji registry
//!   (`emoji-test.txt`), merging one record per display name across
//!   qualification levels.
//! - [`zwj::parse_sequence_registry`] reads the ZWJ sequence registry
//!   (`emoji-zwj-sequences.txt`), where duplicate names are fatal.
//!
//! Parsing is all-or-nothing: the first malformed line aborts with a
//! [`RegistryError`] carrying the raw line, since the consumers of the
//! generated tables need the complete registry or none of it.

pub mod base;
pub mod codepoint;
pub mod error;
pub mod fetch;
pub mod sanitize;
pub mod zwj;

pub use base::{BaseRegistry, Qualification, QualifiedEmoji, parse_base_registry};
pub use codepoint::CodePointSequence;
pub use error::{RegistryError, Result};
pub use fetch::RegistrySource;
pub use sanitize::sanitized_lines;
pub use zwj::{SequenceEmoji, SequenceRegistry, parse_sequence_registry};
