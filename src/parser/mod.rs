//! Profile-aware front end: source text → tokens → AST
//!
//! This module transforms source text in one of two small languages into
//! an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across per-grammar files
//! - [`ast`]: AST node definitions shared by both profiles
//!
//! # Profiles
//!
//! The active [`ast::Profile`] selects the grammar and keyword set:
//! - `Bool`: boolean assignments, `x := 'T' or y and not 'F';`
//! - `CLike`: a restricted statement/expression subset of a C-like
//!   language (declarations, control flow, precedence-climbed
//!   expressions; no preprocessor interpretation, no type checking)
//!
//! # Error tolerance
//!
//! Neither stage aborts on malformed input. The lexer classifies what it
//! cannot scan as `Unknown` tokens and records lexical diagnostics; the
//! parser recovers at statement boundaries and records syntactic
//! diagnostics. Both always run to end of input.

pub mod ast;
pub mod lexer;
pub mod parse;

mod bool_lang;
mod declarations;
mod expressions;
mod statements;
