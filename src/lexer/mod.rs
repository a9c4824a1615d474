//! Lexical analysis for Limp source lines.
//!
//! The scanner works on one line at a time and keeps no state between
//! lines. It handles:
//!
//! - Keywords, identifiers, digit runs and symbols (including `:=`)
//! - Byte spans of every lexeme within its line
//! - In-place reporting of characters that fit no token

pub mod lexer;
pub mod tokens;
