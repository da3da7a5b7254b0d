//! `trustforge` fills bracketed `[Placeholder]` tokens in a fixed catalog of
//! legal document templates (trusts, LLC operating agreements, promissory
//! notes) and assembles them into ordered document packets. Wizard-collected
//! input records are mapped onto tokens with fallback and derivation rules, so
//! generation is total: missing fields default to underscored blanks, never to
//! an error.

pub use assembler::*;
pub use catalog::*;
pub use data::*;
pub use error::*;
pub use input::*;
pub use placeholder::*;

mod assembler;
mod catalog;
mod data;
mod error;
mod input;
mod placeholder;

#[cfg(test)]
mod __tests;
