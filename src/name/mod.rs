//! Name templates - the filename grammar and the value types built on it.
//!
//! [`parser::parse`] splits a filename into [`parser::Pieces`]; [`SeqName`]
//! wraps those pieces as an immutable template that can be re-rendered for any
//! frame, and [`FileName`] is the plain one-file counterpart.

pub mod bracket;
pub mod error;
pub mod file_name;
pub mod format;
pub mod frame;
pub mod parser;
pub mod seq_name;
pub mod traits;

pub use bracket::Bracket;
pub use error::NameError;
pub use file_name::{FileName, FileNameChanges};
pub use frame::Frame;
pub use parser::{Pieces, is_sequence_name, parse};
pub use seq_name::{SeqChanges, SeqName};
pub use traits::{Alter, NameTemplate};
