//! Boolean-profile grammar implementation
//!
//! The smaller of the two languages: a flat list of assignments over
//! boolean expressions.
//!
//! # Grammar
//!
//! ```text
//! program   ::= statement*
//! statement ::= identifier ":=" expr ";"
//! expr      ::= term (("or" | "xor") term)*
//! term      ::= factor ("and" factor)*
//! factor    ::= "not" factor | primary
//! primary   ::= identifier | boolean_literal | "(" expr ")"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse statements until end of input, skipping stray `;` tokens.
    pub(crate) fn parse_bool_program(&mut self) -> Vec<AstNode> {
        let mut items = Vec::new();

        while !self.is_at_end() {
            if self.match_kind(TokenKind::Semicolon) {
                self.clear_recovery();
                continue;
            }
            if let Some(stmt) = self.parse_bool_statement() {
                items.push(stmt);
            }
            self.clear_recovery();
        }

        items
    }

    /// Parse one assignment statement: `identifier ':=' expr ';'`.
    ///
    /// A failure before the expression resynchronizes to the next `;` at
    /// bracket depth zero; a missing trailing `;` is substituted so the
    /// following statement still parses.
    fn parse_bool_statement(&mut self) -> Option<AstNode> {
        let loc = self.current_location();

        if !self.check(TokenKind::Ident) {
            self.error_here(format!("expected identifier, found {}", self.peek()));
            self.synchronize();
            return None;
        }
        let name = self.advance();
        let target = AstNode::Identifier {
            name: name.lexeme,
            location: name.location,
        };

        if !self.check(TokenKind::ColonEq) {
            self.error_here(format!("expected ':=', found {}", self.peek()));
            self.synchronize();
            return None;
        }
        self.advance();

        let value = self.parse_bool_expr();
        self.expect(TokenKind::Semicolon, "';' after assignment");

        Some(AstNode::Assign {
            op: AssignOp::ColonEq,
            left: Box::new(target),
            right: Box::new(value),
            location: loc,
        })
    }

    /// expr ::= term (("or" | "xor") term)*
    pub(crate) fn parse_bool_expr(&mut self) -> AstNode {
        let mut left = self.parse_bool_term();

        loop {
            let loc = self.current_location();
            let op = if self.match_keyword("or") {
                BinOp::BoolOr
            } else if self.match_keyword("xor") {
                BinOp::BoolXor
            } else {
                break;
            };

            let right = self.parse_bool_term();
            left = AstNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    /// term ::= factor ("and" factor)*
    fn parse_bool_term(&mut self) -> AstNode {
        let mut left = self.parse_bool_factor();

        while self.check_keyword("and") {
            let loc = self.current_location();
            self.advance();
            let right = self.parse_bool_factor();
            left = AstNode::Binary {
                op: BinOp::BoolAnd,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    /// factor ::= "not" factor | primary
    fn parse_bool_factor(&mut self) -> AstNode {
        let loc = self.current_location();
        if self.match_keyword("not") {
            let operand = self.parse_bool_factor();
            return AstNode::Unary {
                op: UnOp::Not,
                operand: Box::new(operand),
                location: loc,
            };
        }

        self.parse_bool_primary()
    }

    /// primary ::= identifier | boolean_literal | "(" expr ")"
    ///
    /// Anything else records one diagnostic, consumes the offending token,
    /// and yields an error literal so the surrounding tree stays intact.
    fn parse_bool_primary(&mut self) -> AstNode {
        let loc = self.current_location();

        if self.check(TokenKind::Ident) {
            let token = self.advance();
            return AstNode::Identifier {
                name: token.lexeme,
                location: token.location,
            };
        }

        if self.check(TokenKind::BoolLit) {
            let token = self.advance();
            return AstNode::Literal {
                kind: LiteralKind::Bool,
                value: token.lexeme,
                location: token.location,
            };
        }

        if self.match_kind(TokenKind::LParen) {
            let expr = self.parse_bool_expr();
            self.expect(TokenKind::RParen, "')' after expression");
            return expr;
        }

        self.error_here(format!(
            "expected boolean expression, found {}",
            self.peek()
        ));
        if self.is_at_end() {
            AstNode::error_leaf("", loc)
        } else {
            let token = self.advance();
            AstNode::error_leaf(token.lexeme, loc)
        }
    }
}
