//! C-like profile: statement parsing
//!
//! Statement forms of the restricted grammar:
//!
//! - Control flow: `if`/`else`, `while`, `do-while`, `for`
//! - Jump statements: `break`, `continue`, `return`
//! - Braced blocks and expression statements
//! - In-statement variable declarations (shared with the top level)
//!
//! Control constructs are encoded as tagged binary nodes; see the AST
//! module for the composition of each tag. Statement bodies are single
//! statements or blocks; a block is a `Program` sequence node.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse one statement; `None` for forms that produce no node (empty
    /// statements, skipped clauses, failed recoveries).
    pub(crate) fn parse_statement(&mut self) -> Option<AstNode> {
        let loc = self.current_location();

        match self.peek_kind() {
            TokenKind::Semicolon => {
                self.advance();
                return None;
            }
            TokenKind::Preprocessor => {
                self.advance();
                return None;
            }
            TokenKind::LBrace => return Some(self.parse_block()),
            _ => {}
        }

        if self.check_keyword("if") {
            return Some(self.parse_if_statement());
        }
        if self.check_keyword("while") {
            return Some(self.parse_while_statement());
        }
        if self.check_keyword("do") {
            return Some(self.parse_do_while_statement());
        }
        if self.check_keyword("for") {
            return Some(self.parse_for_statement());
        }

        if self.match_keyword("break") {
            self.expect(TokenKind::Semicolon, "';' after 'break'");
            return Some(AstNode::Unary {
                op: UnOp::Break,
                operand: Box::new(AstNode::void(loc)),
                location: loc,
            });
        }
        if self.match_keyword("continue") {
            self.expect(TokenKind::Semicolon, "';' after 'continue'");
            return Some(AstNode::Unary {
                op: UnOp::Continue,
                operand: Box::new(AstNode::void(loc)),
                location: loc,
            });
        }
        if self.match_keyword("return") {
            let value = if self.check(TokenKind::Semicolon) {
                AstNode::void(loc)
            } else {
                self.parse_expression()
            };
            self.expect(TokenKind::Semicolon, "';' after 'return'");
            return Some(AstNode::Unary {
                op: UnOp::Return,
                operand: Box::new(value),
                location: loc,
            });
        }

        if self.at_type_name() {
            return self.parse_declaration();
        }

        // Bare expression statement
        let expr = self.parse_expression();
        self.expect(TokenKind::Semicolon, "';' after expression");
        Some(AstNode::ExprStatement(Box::new(expr)))
    }

    /// Parse a braced block into a `Program` sequence node; the lookahead
    /// is the opening `{`.
    pub(crate) fn parse_block(&mut self) -> AstNode {
        self.advance(); // '{'
        let mut statements = Vec::new();

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.clear_recovery();
        }

        self.expect(TokenKind::RBrace, "'}' after block");
        AstNode::Program(statements)
    }

    /// Statement-or-block body for control constructs. An immediate `;`
    /// (empty body) becomes an explicit void leaf, never a missing child.
    fn parse_body(&mut self) -> AstNode {
        let loc = self.current_location();
        if self.check(TokenKind::LBrace) {
            return self.parse_block();
        }
        match self.parse_statement() {
            Some(stmt) => stmt,
            None => AstNode::void(loc),
        }
    }

    /// if '(' expr ')' stmt ('else' stmt)?
    fn parse_if_statement(&mut self) -> AstNode {
        let loc = self.current_location();
        self.advance(); // 'if'

        self.expect(TokenKind::LParen, "'(' after 'if'");
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen, "')' after if condition");

        let then_branch = self.parse_body();

        let right = if self.match_keyword("else") {
            let else_loc = self.current_location();
            let else_branch = self.parse_body();
            AstNode::Binary {
                op: BinOp::Else,
                left: Box::new(then_branch),
                right: Box::new(else_branch),
                location: else_loc,
            }
        } else {
            then_branch
        };

        AstNode::Binary {
            op: BinOp::If,
            left: Box::new(condition),
            right: Box::new(right),
            location: loc,
        }
    }

    /// while '(' expr ')' stmt
    fn parse_while_statement(&mut self) -> AstNode {
        let loc = self.current_location();
        self.advance(); // 'while'

        self.expect(TokenKind::LParen, "'(' after 'while'");
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen, "')' after while condition");

        let body = self.parse_body();

        AstNode::Binary {
            op: BinOp::While,
            left: Box::new(condition),
            right: Box::new(body),
            location: loc,
        }
    }

    /// do stmt while '(' expr ')' ';'
    fn parse_do_while_statement(&mut self) -> AstNode {
        let loc = self.current_location();
        self.advance(); // 'do'

        let body = self.parse_body();

        let condition = if self.match_keyword("while") {
            self.expect(TokenKind::LParen, "'(' after 'while'");
            let condition = self.parse_expression();
            self.expect(TokenKind::RParen, "')' after do-while condition");
            self.expect(TokenKind::Semicolon, "';' after do-while");
            condition
        } else {
            self.error_here(format!(
                "expected 'while' after do body, found {}",
                self.peek()
            ));
            self.synchronize();
            AstNode::error_leaf("", self.current_location())
        };

        AstNode::Binary {
            op: BinOp::DoWhile,
            left: Box::new(body),
            right: Box::new(condition),
            location: loc,
        }
    }

    /// for '(' init? ';' cond? ';' incr? ')' stmt
    ///
    /// Empty clauses become explicit void leaves. The init clause may be a
    /// declaration (which consumes its own `;`) or an expression.
    fn parse_for_statement(&mut self) -> AstNode {
        let loc = self.current_location();
        self.advance(); // 'for'

        self.expect(TokenKind::LParen, "'(' after 'for'");

        let init = if self.match_kind(TokenKind::Semicolon) {
            AstNode::void(loc)
        } else if self.at_type_name() {
            self.parse_declaration()
                .unwrap_or_else(|| AstNode::void(loc))
        } else {
            let expr = self.parse_expression();
            self.expect(TokenKind::Semicolon, "';' after for initializer");
            expr
        };

        let cond = if self.check(TokenKind::Semicolon) {
            AstNode::void(self.current_location())
        } else {
            self.parse_expression()
        };
        self.expect(TokenKind::Semicolon, "';' after for condition");

        let incr = if self.check(TokenKind::RParen) {
            AstNode::void(self.current_location())
        } else {
            self.parse_expression()
        };
        self.expect(TokenKind::RParen, "')' after for clauses");

        let body = self.parse_body();

        let clauses = AstNode::Binary {
            op: BinOp::ForSpec,
            left: Box::new(init),
            right: Box::new(AstNode::Binary {
                op: BinOp::ForSpec,
                left: Box::new(cond),
                right: Box::new(incr),
                location: loc,
            }),
            location: loc,
        };

        AstNode::Binary {
            op: BinOp::For,
            left: Box::new(clauses),
            right: Box::new(body),
            location: loc,
        }
    }
}
