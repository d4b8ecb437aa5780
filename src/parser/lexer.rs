//! Lexer (tokenizer) for both language profiles
//!
//! Converts raw source text into a flat [`Token`] stream plus a list of
//! lexical diagnostics. The scan never aborts on bad input: an unrecognised
//! character becomes an [`TokenKind::Unknown`] token with a diagnostic, a
//! malformed literal keeps its longest valid prefix, and an unterminated
//! string or char literal is flagged but still produced. The returned
//! stream is finite and always ends with exactly one [`TokenKind::Eof`].
//!
//! Profile differences handled here:
//! - [`Profile::Bool`]: `:=` is the only two-character form of `:` (a lone
//!   `:` is a lexical error), and `'T'`/`'F'` are boolean literals.
//! - [`Profile::CLike`]: `//` and `/* ... */` comments (discarded),
//!   `#`-prefixed preprocessor lines (kept as single tokens), numeric
//!   literals with hex/binary/fraction/exponent/suffix forms, string and
//!   char literals, and the full two-character operator table.

use crate::parser::ast::{Profile, SourceLocation};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::fmt;

/// All token kinds produced by the lexer.
///
/// Structural punctuation gets one fixed kind per mark; the remaining
/// operators share [`TokenKind::Op`] and are distinguished by lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    Str,
    CharLit,
    /// `'T'` / `'F'` in the boolean profile
    BoolLit,
    Keyword,
    /// Operator not covered by a fixed punctuation kind (`+`, `==`, `+=`, ...)
    Op,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
    ColonColon,
    Arrow,
    /// `:=` (boolean profile assignment)
    ColonEq,
    /// A whole `#...` line, kept as one token and never interpreted
    Preprocessor,
    Eof,
    Unknown,
}

/// A classified lexical unit with its exact source substring and position.
///
/// The lexeme is never semantically decoded here; numbers and strings keep
/// their raw spelling (including quotes) for a later stage to interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::Number => write!(f, "number '{}'", self.lexeme),
            TokenKind::Str => write!(f, "string literal {}", self.lexeme),
            TokenKind::CharLit => write!(f, "character literal {}", self.lexeme),
            TokenKind::BoolLit => write!(f, "boolean literal {}", self.lexeme),
            TokenKind::Preprocessor => write!(f, "preprocessor line"),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Lexical diagnostic; advisory, never fatal to the scan
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

static BOOL_KEYWORDS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["or", "xor", "and", "not"].into_iter().collect());

static CLIKE_KEYWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "int", "float", "double", "char", "bool", "void", "long", "short", "signed", "unsigned",
        "const", "if", "else", "while", "do", "for", "break", "continue", "return", "true",
        "false", "using",
    ]
    .into_iter()
    .collect()
});

/// Profile-aware lexer; one instance per source text, run exactly once.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    profile: Profile,
    /// True while only whitespace has been seen on the current line;
    /// gates preprocessor-line recognition.
    fresh_line: bool,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given source string and profile.
    pub fn new(input: &str, profile: Profile) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            profile,
            fresh_line: true,
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Consumes the lexer: a fresh instance is required to re-scan. Always
    /// terminates and always returns a stream ending in a single
    /// [`TokenKind::Eof`] token, no matter how malformed the input is.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, "", self.current_location()));
                break;
            }

            tokens.push(self.next_token());
        }

        (tokens, self.errors)
    }

    /// Scan the next token; guaranteed to consume at least one character.
    fn next_token(&mut self) -> Token {
        let loc = self.current_location();

        if self.profile == Profile::CLike && self.peek() == Some('#') && self.fresh_line {
            return self.preprocessor_line(loc);
        }

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, "", loc),
        };

        // Punctuation shared by both profiles
        match ch {
            '(' => return Token::new(TokenKind::LParen, "(", loc),
            ')' => return Token::new(TokenKind::RParen, ")", loc),
            '{' => return Token::new(TokenKind::LBrace, "{", loc),
            '}' => return Token::new(TokenKind::RBrace, "}", loc),
            '[' => return Token::new(TokenKind::LBracket, "[", loc),
            ']' => return Token::new(TokenKind::RBracket, "]", loc),
            ';' => return Token::new(TokenKind::Semicolon, ";", loc),
            ',' => return Token::new(TokenKind::Comma, ",", loc),
            _ => {}
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            return self.identifier_or_keyword(ch, loc);
        }

        if ch == ':' {
            return match self.profile {
                Profile::Bool => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::ColonEq, ":=", loc)
                    } else {
                        self.error("bare ':' is not a token, expected ':='", loc);
                        Token::new(TokenKind::Unknown, ":", loc)
                    }
                }
                Profile::CLike => {
                    if self.peek() == Some(':') {
                        self.advance();
                        Token::new(TokenKind::ColonColon, "::", loc)
                    } else {
                        Token::new(TokenKind::Colon, ":", loc)
                    }
                }
            };
        }

        if ch == '\'' {
            return match self.profile {
                Profile::Bool => self.bool_literal(loc),
                Profile::CLike => self.char_literal(loc),
            };
        }

        match self.profile {
            Profile::CLike => match ch {
                '"' => self.string_literal(loc),
                '0'..='9' => self.number_literal(ch, loc),
                '.' => Token::new(TokenKind::Dot, ".", loc),
                '+' => {
                    if self.peek() == Some('+') {
                        self.advance();
                        Token::new(TokenKind::Op, "++", loc)
                    } else if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "+=", loc)
                    } else {
                        Token::new(TokenKind::Op, "+", loc)
                    }
                }
                '-' => {
                    if self.peek() == Some('-') {
                        self.advance();
                        Token::new(TokenKind::Op, "--", loc)
                    } else if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "-=", loc)
                    } else if self.peek() == Some('>') {
                        self.advance();
                        Token::new(TokenKind::Arrow, "->", loc)
                    } else {
                        Token::new(TokenKind::Op, "-", loc)
                    }
                }
                '*' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "*=", loc)
                    } else {
                        Token::new(TokenKind::Op, "*", loc)
                    }
                }
                '/' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "/=", loc)
                    } else {
                        Token::new(TokenKind::Op, "/", loc)
                    }
                }
                '%' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "%=", loc)
                    } else {
                        Token::new(TokenKind::Op, "%", loc)
                    }
                }
                '=' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "==", loc)
                    } else {
                        Token::new(TokenKind::Op, "=", loc)
                    }
                }
                '!' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "!=", loc)
                    } else {
                        Token::new(TokenKind::Op, "!", loc)
                    }
                }
                '<' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "<=", loc)
                    } else if self.peek() == Some('<') {
                        self.advance();
                        Token::new(TokenKind::Op, "<<", loc)
                    } else {
                        Token::new(TokenKind::Op, "<", loc)
                    }
                }
                '>' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, ">=", loc)
                    } else if self.peek() == Some('>') {
                        self.advance();
                        Token::new(TokenKind::Op, ">>", loc)
                    } else {
                        Token::new(TokenKind::Op, ">", loc)
                    }
                }
                '&' => {
                    if self.peek() == Some('&') {
                        self.advance();
                        Token::new(TokenKind::Op, "&&", loc)
                    } else if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "&=", loc)
                    } else {
                        Token::new(TokenKind::Op, "&", loc)
                    }
                }
                '|' => {
                    if self.peek() == Some('|') {
                        self.advance();
                        Token::new(TokenKind::Op, "||", loc)
                    } else if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "|=", loc)
                    } else {
                        Token::new(TokenKind::Op, "|", loc)
                    }
                }
                '^' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        Token::new(TokenKind::Op, "^=", loc)
                    } else {
                        Token::new(TokenKind::Op, "^", loc)
                    }
                }
                '~' => Token::new(TokenKind::Op, "~", loc),
                '?' => Token::new(TokenKind::Op, "?", loc),
                _ => self.unknown_char(ch, loc),
            },
            Profile::Bool => self.unknown_char(ch, loc),
        }
    }

    fn unknown_char(&mut self, ch: char, loc: SourceLocation) -> Token {
        self.error(format!("unexpected character '{}'", ch), loc);
        Token::new(TokenKind::Unknown, ch.to_string(), loc)
    }

    /// Boolean literal: exactly `'T'` or `'F'` (opening quote consumed).
    ///
    /// Any other quoted content is a lexical error; recovery skips to the
    /// next quote, newline, or end of input.
    fn bool_literal(&mut self, loc: SourceLocation) -> Token {
        if matches!(self.peek(), Some('T') | Some('F')) && self.peek_ahead(1) == Some('\'') {
            let value = self.advance().unwrap_or('T');
            self.advance(); // closing quote
            return Token::new(TokenKind::BoolLit, format!("'{}'", value), loc);
        }

        self.error("invalid boolean literal, expected 'T' or 'F'", loc);

        let mut lexeme = String::from("'");
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
            lexeme.push(ch);
            if ch == '\'' {
                break;
            }
        }
        Token::new(TokenKind::Unknown, lexeme, loc)
    }

    /// Character literal (opening quote consumed).
    ///
    /// A backslash consumes the following character without interpreting
    /// it. Hitting a newline or end of input before the closing quote is
    /// flagged, but the partial lexeme is still returned as a token.
    fn char_literal(&mut self, loc: SourceLocation) -> Token {
        let lexeme = self.quoted_literal('\'');
        if !lexeme.ends_with('\'') || lexeme.len() < 2 {
            self.error("unterminated character literal", loc);
        }
        Token::new(TokenKind::CharLit, lexeme, loc)
    }

    /// String literal (opening quote consumed); same tolerance as chars.
    fn string_literal(&mut self, loc: SourceLocation) -> Token {
        let lexeme = self.quoted_literal('"');
        if !lexeme.ends_with('"') || lexeme.len() < 2 {
            self.error("unterminated string literal", loc);
        }
        Token::new(TokenKind::Str, lexeme, loc)
    }

    /// Consume up to and including the closing `quote`, stopping early at a
    /// newline or end of input. Returns the raw lexeme including quotes.
    fn quoted_literal(&mut self, quote: char) -> String {
        let mut lexeme = String::new();
        lexeme.push(quote);

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
            lexeme.push(ch);
            if ch == quote {
                break;
            }
            if ch == '\\' {
                // One character of escape lookahead, uninterpreted
                if let Some(escaped) = self.peek() {
                    if escaped != '\n' {
                        self.advance();
                        lexeme.push(escaped);
                    }
                }
            }
        }

        lexeme
    }

    /// Numeric literal (first digit consumed).
    ///
    /// Decimal, hex (`0x`), and binary (`0b`) forms with `'` digit-group
    /// separators, an optional fraction, an optional exponent, and optional
    /// `u`/`l`/`f` suffixes. Malformed forms emit one diagnostic but keep
    /// the longest valid lexeme instead of dropping the token.
    fn number_literal(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first);

        if first == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            return self.radix_literal(lexeme, loc, 16, "hexadecimal");
        }
        if first == '0' && matches!(self.peek(), Some('b') | Some('B')) {
            return self.radix_literal(lexeme, loc, 2, "binary");
        }

        self.digits_into(&mut lexeme, 10);

        // Fraction: consume '.' only when a digit follows, so member access
        // on a number (and a trailing dot) lexes as a separate token.
        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            lexeme.push('.');
            self.digits_into(&mut lexeme, 10);
        }

        // Exponent: digits are required after `e`/`E` and optional sign
        if matches!(self.peek(), Some('e') | Some('E')) {
            let mut exponent = String::new();
            if let Some(marker) = self.advance() {
                exponent.push(marker);
            }
            if matches!(self.peek(), Some('+') | Some('-')) {
                if let Some(sign) = self.advance() {
                    exponent.push(sign);
                }
            }
            let mut exp_digits = String::new();
            self.digits_into(&mut exp_digits, 10);
            if exp_digits.is_empty() {
                // Truncate back to the valid prefix; the consumed marker
                // and sign are covered by the diagnostic
                self.error("exponent has no digits", loc);
            } else {
                lexeme.push_str(&exponent);
                lexeme.push_str(&exp_digits);
            }
        }

        self.numeric_suffixes(&mut lexeme, loc);

        // Extra decimal points: keep the valid prefix, flag once, and
        // consume the malformed tail so it cannot cascade into the parser
        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            self.error("number has multiple decimal points", loc);
            while matches!(self.peek(), Some(c) if c == '.' || c.is_ascii_digit()) {
                self.advance();
            }
        }

        Token::new(TokenKind::Number, lexeme, loc)
    }

    /// Hex/binary literal: `lexeme` holds the leading `0`, the radix marker
    /// is at the cursor.
    fn radix_literal(
        &mut self,
        mut lexeme: String,
        loc: SourceLocation,
        radix: u32,
        name: &str,
    ) -> Token {
        let marker = match self.advance() {
            Some(marker) => marker,
            None => return Token::new(TokenKind::Number, lexeme, loc),
        };

        let mut digits = String::new();
        self.digits_into(&mut digits, radix);

        if digits.is_empty() {
            // `0x` with nothing after it: the longest valid lexeme is `0`;
            // the marker is attributed to the diagnostic
            self.error(format!("{} literal has no digits", name), loc);
            return Token::new(TokenKind::Number, lexeme, loc);
        }

        lexeme.push(marker);
        lexeme.push_str(&digits);
        self.numeric_suffixes(&mut lexeme, loc);
        Token::new(TokenKind::Number, lexeme, loc)
    }

    /// Collect digits of the given radix plus `'` group separators.
    ///
    /// A separator is only consumed when another digit follows it, so a
    /// char literal right after a number is left intact.
    fn digits_into(&mut self, out: &mut String, radix: u32) {
        while let Some(ch) = self.peek() {
            if ch.is_digit(radix) {
                self.advance();
                out.push(ch);
            } else if ch == '\'' && self.peek_ahead(1).is_some_and(|c| c.is_digit(radix)) {
                self.advance();
                out.push('\'');
            } else {
                break;
            }
        }
    }

    /// Trailing `u`/`U`/`l`/`L`/`f`/`F` suffixes; conflicting combinations
    /// are flagged as a diagnostic but kept in the lexeme.
    fn numeric_suffixes(&mut self, lexeme: &mut String, loc: SourceLocation) {
        let mut suffix = String::new();
        while matches!(
            self.peek(),
            Some('u') | Some('U') | Some('l') | Some('L') | Some('f') | Some('F')
        ) {
            if let Some(ch) = self.advance() {
                suffix.push(ch);
            }
        }

        if suffix.is_empty() {
            return;
        }

        let unsigned = suffix.chars().filter(|c| matches!(c, 'u' | 'U')).count();
        let long = suffix.chars().filter(|c| matches!(c, 'l' | 'L')).count();
        let float = suffix.chars().filter(|c| matches!(c, 'f' | 'F')).count();
        if (float > 0 && unsigned > 0) || float > 1 || unsigned > 1 || long > 2 {
            self.error(
                format!("conflicting numeric literal suffixes '{}'", suffix),
                loc,
            );
        }

        lexeme.push_str(&suffix);
    }

    /// Parse identifier or keyword (first character consumed).
    ///
    /// Classification against the active profile's fixed keyword set is a
    /// single lookup, decided once per lexeme.
    fn identifier_or_keyword(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
                ident.push(ch);
            } else {
                break;
            }
        }

        let keywords = match self.profile {
            Profile::Bool => &*BOOL_KEYWORDS,
            Profile::CLike => &*CLIKE_KEYWORDS,
        };

        let kind = if keywords.contains(ident.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Ident
        };
        Token::new(kind, ident, loc)
    }

    /// A whole `#...` line, kept as a single uninterpreted token.
    fn preprocessor_line(&mut self, loc: SourceLocation) -> Token {
        let mut lexeme = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
            lexeme.push(ch);
        }
        Token::new(TokenKind::Preprocessor, lexeme, loc)
    }

    /// Skip whitespace and (C-like profile only) comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.profile == Profile::CLike => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment();
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */); an unterminated block comment
    /// runs to end of input and is not an error by itself.
    fn skip_block_comment(&mut self) {
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn error(&mut self, message: impl Into<String>, location: SourceLocation) {
        self.errors.push(LexError {
            message: message.into(),
            location,
        });
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character, tracking line/column and line freshness
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
            self.fresh_line = true;
        } else {
            self.column += 1;
            if !ch.is_whitespace() {
                self.fresh_line = false;
            }
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str, profile: Profile) -> (Vec<Token>, Vec<LexError>) {
        Lexer::new(source, profile).tokenize()
    }

    #[test]
    fn test_clike_simple_tokens() {
        let (tokens, errors) = scan("int main() { return 0; }", Profile::CLike);

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].lexeme, "int");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].lexeme, "main");
        assert_eq!(tokens[2].kind, TokenKind::LParen);
        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[4].kind, TokenKind::LBrace);
        assert_eq!(tokens[5].lexeme, "return");
        assert_eq!(tokens[6].kind, TokenKind::Number);
        assert_eq!(tokens[7].kind, TokenKind::Semicolon);
        assert_eq!(tokens[8].kind, TokenKind::RBrace);
        assert_eq!(tokens[9].kind, TokenKind::Eof);
    }

    #[test]
    fn test_clike_operators_longest_match() {
        let (tokens, errors) = scan("++ -- += == != && || << >> -> :: <=", Profile::CLike);

        assert!(errors.is_empty());
        let lexemes: Vec<&str> = tokens
            .iter()
            .take_while(|t| t.kind != TokenKind::Eof)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(
            lexemes,
            ["++", "--", "+=", "==", "!=", "&&", "||", "<<", ">>", "->", "::", "<="]
        );
        assert_eq!(tokens[9].kind, TokenKind::Arrow);
        assert_eq!(tokens[10].kind, TokenKind::ColonColon);
    }

    #[test]
    fn test_comments_discarded() {
        let (tokens, errors) = scan(
            "int x; // comment\nint y; /* block\ncomment */ int z;",
            Profile::CLike,
        );

        assert!(errors.is_empty());
        let idents: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(idents, ["x", "y", "z"]);
    }

    #[test]
    fn test_unterminated_block_comment_is_not_an_error() {
        let (tokens, errors) = scan("int x; /* runs to the end", Profile::CLike);

        assert!(errors.is_empty());
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_preprocessor_line_kept_as_token() {
        let (tokens, errors) = scan("#include <iostream>\nint x;", Profile::CLike);

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Preprocessor);
        assert_eq!(tokens[0].lexeme, "#include <iostream>");
        assert_eq!(tokens[1].lexeme, "int");
    }

    #[test]
    fn test_hash_not_at_line_start_is_unknown() {
        let (tokens, errors) = scan("int x; # define", Profile::CLike);

        assert_eq!(errors.len(), 1);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Unknown));
    }

    #[test]
    fn test_bool_profile_tokens() {
        let (tokens, errors) = scan("x := 'T' or y;", Profile::Bool);

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::ColonEq);
        assert_eq!(tokens[2].kind, TokenKind::BoolLit);
        assert_eq!(tokens[2].lexeme, "'T'");
        assert_eq!(tokens[3].kind, TokenKind::Keyword);
        assert_eq!(tokens[3].lexeme, "or");
        assert_eq!(tokens[4].kind, TokenKind::Ident);
        assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_bool_bare_colon_is_error() {
        let (tokens, errors) = scan("x : y", Profile::Bool);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        // The scan continues past the bad colon
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[2].lexeme, "y");
    }

    #[test]
    fn test_bool_invalid_literal_recovers_at_quote() {
        let (tokens, errors) = scan("x := 'Q' ; y := 'F';", Profile::Bool);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
        // Everything after the closing quote still tokenizes normally
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::BoolLit && t.lexeme == "'F'"));
    }

    #[test]
    fn test_number_forms() {
        let (tokens, errors) = scan("0x1F 0b1010 12.5 1e10 3.14f 1'000'000 7ul", Profile::CLike);

        assert!(errors.is_empty(), "unexpected diagnostics: {:?}", errors);
        let lexemes: Vec<&str> = tokens
            .iter()
            .take_while(|t| t.kind != TokenKind::Eof)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(
            lexemes,
            ["0x1F", "0b1010", "12.5", "1e10", "3.14f", "1'000'000", "7ul"]
        );
        assert!(tokens
            .iter()
            .take_while(|t| t.kind != TokenKind::Eof)
            .all(|t| t.kind == TokenKind::Number));
    }

    #[test]
    fn test_multiple_decimal_points_truncates() {
        let (tokens, errors) = scan("12.2.3.3;", Profile::CLike);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "12.2");
        // The malformed tail is consumed, not re-tokenized
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_hex_with_no_digits() {
        let (tokens, errors) = scan("0x;", Profile::CLike);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "0");
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_conflicting_suffixes_flagged_not_rejected() {
        let (tokens, errors) = scan("10uf", Profile::CLike);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "10uf");
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, errors) = scan("\"hello", Profile::CLike);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].lexeme, "\"hello");
    }

    #[test]
    fn test_string_escape_lookahead() {
        let (tokens, errors) = scan(r#""a\"b""#, Profile::CLike);

        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].lexeme, r#""a\"b""#);
    }

    #[test]
    fn test_unknown_character_continues_scan() {
        let (tokens, errors) = scan("x @ y", Profile::CLike);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].lexeme, "y");
    }

    #[test]
    fn test_digit_in_bool_profile_is_unknown() {
        let (tokens, errors) = scan("x := 5;", Profile::Bool);

        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_positions_nondecreasing_single_eof() {
        let source = "int x = 1;\nfloat y = 2.5; /* c */ while (x) { y++; }";
        let (tokens, _) = scan(source, Profile::CLike);

        let mut prev = (0usize, 0usize);
        for token in &tokens {
            let pos = (token.location.line, token.location.column);
            assert!(pos >= prev, "token positions went backwards at {:?}", pos);
            prev = pos;
        }
        assert_eq!(
            tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Eof)
                .count(),
            1
        );
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
