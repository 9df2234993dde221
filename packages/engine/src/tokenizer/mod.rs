//! Pattern tokenizer implementation
//!
//! Lexical analysis converting raw pattern strings into span-carrying token
//! sequences. Grammar checks are left entirely to the selector tree builder.

mod characters;
mod core;
mod strings;

pub use characters::is_key_character;
pub use self::core::{Tokenizer, tokenize};
