//! # Introduction
//!
//! minifront is an error-tolerant front end for two miniature languages:
//! a boolean-expression/assignment language and a restricted C-like
//! statement/expression subset. It scans, parses, and renders a syntax
//! tree while collecting diagnostics instead of stopping at the first
//! malformed construct.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST (+ diagnostics)
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source under the active
//!    [`parser::ast::Profile`]; unscannable input becomes `Unknown`
//!    tokens plus lexical diagnostics, never a failure.
//! 2. [`parser::parse`] — recursive descent with panic-mode recovery;
//!    always yields a `Program` root plus syntactic diagnostics.
//! 3. [`printer`] — renders the tree as indented text for inspection.
//!
//! Both stages run to end of input on any byte sequence; the diagnostic
//! lists are the only failure signal.

pub mod parser;
pub mod printer;
