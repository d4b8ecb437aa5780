//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the token cursor with one token of lookahead, the
//! syntactic diagnostic list, the duplicate-suppression latch, and the
//! panic-mode synchronization used by both grammars.
//!
//! # Parser Architecture
//!
//! Recursive descent, with methods split across multiple files using
//! `impl Parser` blocks:
//! - This module: parser state, helpers, entry point, error recovery
//! - `bool_lang`: the boolean-expression/assignment grammar
//! - `declarations`: C-like top-level items
//! - `statements`: C-like statements
//! - `expressions`: C-like expressions with precedence climbing
//!
//! # Error policy
//!
//! Grammar violations never abort the parse. A diagnostic is recorded at
//! the current lookahead position, then the parser either substitutes a
//! synthetic placeholder and continues (for single missing delimiters), or
//! skips ahead to the next `;` at bracket depth zero before resuming at a
//! statement boundary. While the `in_recovery` latch is set, further
//! diagnostics for the same failure point are suppressed; the latch is
//! cleared as soon as a statement completes or is skipped past, so one
//! malformed construct yields one message.

use crate::parser::ast::{AstNode, Profile, SourceLocation};
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;

/// Syntactic diagnostic; advisory, never fatal to the parse
#[derive(Debug, Clone)]
pub struct SyntaxError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive descent parser with panic-mode error recovery.
///
/// One instance per token stream, run exactly once via
/// [`Parser::parse_program`].
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) profile: Profile,
    pub(crate) errors: Vec<SyntaxError>,
    /// Suppresses diagnostic cascades: set when a diagnostic is emitted,
    /// cleared once a statement is parsed or skipped past.
    pub(crate) in_recovery: bool,
}

impl Parser {
    /// Create a parser over an already-scanned token stream.
    ///
    /// The stream normally ends with the `Eof` token produced by
    /// [`crate::parser::lexer::Lexer::tokenize`]; a terminator is appended
    /// here if the caller handed over a stream without one.
    pub fn new(mut tokens: Vec<Token>, profile: Profile) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let location = tokens
                .last()
                .map_or(SourceLocation::new(1, 1), |t| t.location);
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                location,
            });
        }
        Self {
            tokens,
            position: 0,
            profile,
            errors: Vec::new(),
            in_recovery: false,
        }
    }

    /// Parse the whole token stream into a single `Program` node.
    ///
    /// Always returns a best-effort tree, no matter how malformed the
    /// input; the diagnostic list is the only failure signal.
    pub fn parse_program(mut self) -> (AstNode, Vec<SyntaxError>) {
        let items = match self.profile {
            Profile::Bool => self.parse_bool_program(),
            Profile::CLike => self.parse_clike_program(),
        };
        (AstNode::Program(items), self.errors)
    }

    // ===== Cursor helpers =====

    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees an Eof sentinel and `advance` never moves past it
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// True when the lookahead is the given keyword.
    pub(crate) fn check_keyword(&self, word: &str) -> bool {
        self.peek_kind() == TokenKind::Keyword && self.peek().lexeme == word
    }

    pub(crate) fn match_keyword(&mut self, word: &str) -> bool {
        if self.check_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// True when the lookahead is the given free-form operator.
    pub(crate) fn check_op(&self, op: &str) -> bool {
        self.peek_kind() == TokenKind::Op && self.peek().lexeme == op
    }

    pub(crate) fn match_op(&mut self, op: &str) -> bool {
        if self.check_op(op) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    // ===== Diagnostics and recovery =====

    /// Record a diagnostic at the current lookahead position, unless the
    /// recovery latch is already set for this failure point.
    pub(crate) fn error_here(&mut self, message: impl Into<String>) {
        if !self.in_recovery {
            self.errors.push(SyntaxError {
                message: message.into(),
                location: self.current_location(),
            });
        }
        self.in_recovery = true;
    }

    /// Forward progress was made; further failures are new failures.
    pub(crate) fn clear_recovery(&mut self) {
        self.in_recovery = false;
    }

    /// Expect a specific token kind; on a mismatch, record a diagnostic
    /// naming `what` and continue as if a synthetic token were present
    /// (the lookahead is not consumed).
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            self.error_here(format!("expected {}, found {}", what, self.peek()));
            false
        }
    }

    /// Panic-mode resynchronization: skip forward to just past the next
    /// `;` at bracket depth zero, treating `()[]{}` as nesting and
    /// ignoring stray unmatched closers. Angle brackets are deliberately
    /// not tracked; `<` and `>` are comparison operators.
    pub(crate) fn synchronize(&mut self) {
        let mut depth: usize = 0;

        while !self.is_at_end() {
            match self.peek_kind() {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1)
                }
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    break;
                }
                _ => {}
            }
            self.advance();
        }

        // Skipping past the failed statement counts as forward progress
        self.clear_recovery();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::*;
    use crate::parser::lexer::Lexer;

    fn parse(source: &str, profile: Profile) -> (AstNode, Vec<SyntaxError>) {
        let (tokens, _) = Lexer::new(source, profile).tokenize();
        Parser::new(tokens, profile).parse_program()
    }

    #[test]
    fn test_empty_input_yields_empty_program() {
        for profile in [Profile::Bool, Profile::CLike] {
            let (root, errors) = parse("", profile);
            assert!(errors.is_empty());
            match root {
                AstNode::Program(items) => assert!(items.is_empty()),
                _ => panic!("expected program root"),
            }
        }
    }

    #[test]
    fn test_parse_always_returns_program_root() {
        // Deliberately broken inputs still produce a Program
        let sources = [
            ")( }{ ;;; := :=",
            "x :=",
            "if while do ] ] )",
            "int int int ( ( (",
        ];
        for source in sources {
            for profile in [Profile::Bool, Profile::CLike] {
                let (root, _) = parse(source, profile);
                assert!(matches!(root, AstNode::Program(_)));
            }
        }
    }

    #[test]
    fn test_synchronize_tracks_bracket_depth() {
        // The first ';' is nested inside parens, so recovery must skip to
        // the one after the closing paren
        let (tokens, _) = Lexer::new("a (b; c) d; e", Profile::CLike).tokenize();
        let mut parser = Parser::new(tokens, Profile::CLike);
        parser.synchronize();
        assert_eq!(parser.peek().lexeme, "e");
    }

    #[test]
    fn test_synchronize_ignores_stray_closers() {
        let (tokens, _) = Lexer::new(") ] } x ; y", Profile::CLike).tokenize();
        let mut parser = Parser::new(tokens, Profile::CLike);
        parser.synchronize();
        assert_eq!(parser.peek().lexeme, "y");
    }

    #[test]
    fn test_latch_suppresses_duplicate_diagnostics() {
        let (tokens, _) = Lexer::new("x", Profile::CLike).tokenize();
        let mut parser = Parser::new(tokens, Profile::CLike);
        parser.error_here("first");
        parser.error_here("second");
        assert_eq!(parser.errors.len(), 1);
        parser.clear_recovery();
        parser.error_here("third");
        assert_eq!(parser.errors.len(), 2);
    }
}
