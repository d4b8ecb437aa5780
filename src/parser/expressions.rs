//! C-like profile: expression parsing
//!
//! Precedence climbing, loosest to tightest:
//!
//! 1. Assignment (`=`, `+=` `-=` `*=` `/=` `%=`), right-associative
//! 2. `||`
//! 3. `&&`
//! 4. Equality: `==` `!=`
//! 5. Relational and shifts, one level: `<` `>` `<=` `>=` `<<` `>>`
//! 6. Additive: `+` `-`
//! 7. Multiplicative: `*` `/` `%`
//! 8. Prefix unary: `!` `-` `+` `~` `&` `*` `++` `--`
//! 9. Postfix: `++` `--` `[...]` `.name` `->name` `(args)`
//! 10. Primary: literals, identifiers, parenthesized expressions
//!
//! A primary that matches nothing records one diagnostic, consumes the
//! offending token, and yields an error literal, so every caller always
//! receives a node.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a full expression. Total: always returns a node.
    pub(crate) fn parse_expression(&mut self) -> AstNode {
        self.parse_assignment()
    }

    /// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
    /// No lvalue validation happens here; that is a later stage's concern.
    fn parse_assignment(&mut self) -> AstNode {
        let left = self.parse_logic_or();
        let loc = self.current_location();

        if self.match_op("=") {
            let right = self.parse_assignment();
            return AstNode::Assign {
                op: AssignOp::Eq,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        let op = if self.check_op("+=") {
            BinOp::AddAssign
        } else if self.check_op("-=") {
            BinOp::SubAssign
        } else if self.check_op("*=") {
            BinOp::MulAssign
        } else if self.check_op("/=") {
            BinOp::DivAssign
        } else if self.check_op("%=") {
            BinOp::ModAssign
        } else {
            return left;
        };
        self.advance();

        let right = self.parse_assignment();
        AstNode::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: loc,
        }
    }

    fn parse_logic_or(&mut self) -> AstNode {
        let mut left = self.parse_logic_and();

        while self.check_op("||") {
            let loc = self.current_location();
            self.advance();
            let right = self.parse_logic_and();
            left = AstNode::Binary {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    fn parse_logic_and(&mut self) -> AstNode {
        let mut left = self.parse_equality();

        while self.check_op("&&") {
            let loc = self.current_location();
            self.advance();
            let right = self.parse_equality();
            left = AstNode::Binary {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    fn parse_equality(&mut self) -> AstNode {
        let mut left = self.parse_relational();

        loop {
            let loc = self.current_location();
            let op = if self.check_op("==") {
                BinOp::Eq
            } else if self.check_op("!=") {
                BinOp::Ne
            } else {
                break;
            };
            self.advance();

            let right = self.parse_relational();
            left = AstNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    /// Relational operators and shifts share one level in this subset.
    fn parse_relational(&mut self) -> AstNode {
        let mut left = self.parse_additive();

        loop {
            let loc = self.current_location();
            let op = if self.check_op("<") {
                BinOp::Lt
            } else if self.check_op("<=") {
                BinOp::Le
            } else if self.check_op(">") {
                BinOp::Gt
            } else if self.check_op(">=") {
                BinOp::Ge
            } else if self.check_op("<<") {
                BinOp::Shl
            } else if self.check_op(">>") {
                BinOp::Shr
            } else {
                break;
            };
            self.advance();

            let right = self.parse_additive();
            left = AstNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    fn parse_additive(&mut self) -> AstNode {
        let mut left = self.parse_multiplicative();

        loop {
            let loc = self.current_location();
            let op = if self.check_op("+") {
                BinOp::Add
            } else if self.check_op("-") {
                BinOp::Sub
            } else {
                break;
            };
            self.advance();

            let right = self.parse_multiplicative();
            left = AstNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    fn parse_multiplicative(&mut self) -> AstNode {
        let mut left = self.parse_unary();

        loop {
            let loc = self.current_location();
            let op = if self.check_op("*") {
                BinOp::Mul
            } else if self.check_op("/") {
                BinOp::Div
            } else if self.check_op("%") {
                BinOp::Mod
            } else {
                break;
            };
            self.advance();

            let right = self.parse_unary();
            left = AstNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        left
    }

    fn parse_unary(&mut self) -> AstNode {
        let loc = self.current_location();

        let op = if self.check_op("!") {
            Some(UnOp::Bang)
        } else if self.check_op("-") {
            Some(UnOp::Neg)
        } else if self.check_op("+") {
            Some(UnOp::Plus)
        } else if self.check_op("~") {
            Some(UnOp::BitNot)
        } else if self.check_op("&") {
            Some(UnOp::AddrOf)
        } else if self.check_op("*") {
            Some(UnOp::Deref)
        } else if self.check_op("++") {
            Some(UnOp::PreInc)
        } else if self.check_op("--") {
            Some(UnOp::PreDec)
        } else {
            None
        };

        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary();
            return AstNode::Unary {
                op,
                operand: Box::new(operand),
                location: loc,
            };
        }

        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> AstNode {
        let mut expr = self.parse_primary();

        loop {
            let loc = self.current_location();

            if self.check_op("++") {
                self.advance();
                expr = AstNode::Unary {
                    op: UnOp::PostInc,
                    operand: Box::new(expr),
                    location: loc,
                };
            } else if self.check_op("--") {
                self.advance();
                expr = AstNode::Unary {
                    op: UnOp::PostDec,
                    operand: Box::new(expr),
                    location: loc,
                };
            } else if self.match_kind(TokenKind::LBracket) {
                let index = self.parse_expression();
                self.expect(TokenKind::RBracket, "']' after index");
                expr = AstNode::Binary {
                    op: BinOp::Index,
                    left: Box::new(expr),
                    right: Box::new(index),
                    location: loc,
                };
            } else if self.match_kind(TokenKind::Dot) {
                let member = self.parse_member_name();
                expr = AstNode::Binary {
                    op: BinOp::Member,
                    left: Box::new(expr),
                    right: Box::new(member),
                    location: loc,
                };
            } else if self.match_kind(TokenKind::Arrow) {
                let member = self.parse_member_name();
                expr = AstNode::Binary {
                    op: BinOp::Arrow,
                    left: Box::new(expr),
                    right: Box::new(member),
                    location: loc,
                };
            } else if self.match_kind(TokenKind::LParen) {
                let args = self.parse_call_args();
                expr = AstNode::Binary {
                    op: BinOp::Call,
                    left: Box::new(expr),
                    right: Box::new(args),
                    location: loc,
                };
            } else {
                break;
            }
        }

        expr
    }

    /// Identifier after `.` or `->`; a missing name degrades to an error
    /// leaf without consuming the lookahead.
    fn parse_member_name(&mut self) -> AstNode {
        if self.check(TokenKind::Ident) {
            let token = self.advance();
            return AstNode::Identifier {
                name: token.lexeme,
                location: token.location,
            };
        }
        self.error_here(format!("expected member name, found {}", self.peek()));
        AstNode::error_leaf("", self.current_location())
    }

    /// Comma-separated argument list, already past the opening `(`; the
    /// arguments become a `Program` sequence node.
    fn parse_call_args(&mut self) -> AstNode {
        let mut args = Vec::new();

        if !self.check(TokenKind::RParen) && !self.is_at_end() {
            loop {
                args.push(self.parse_assignment());
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')' after arguments");

        AstNode::Program(args)
    }

    fn parse_primary(&mut self) -> AstNode {
        let loc = self.current_location();

        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                return AstNode::Literal {
                    kind: LiteralKind::Number,
                    value: token.lexeme,
                    location: token.location,
                };
            }
            TokenKind::Str => {
                let token = self.advance();
                return AstNode::Literal {
                    kind: LiteralKind::Str,
                    value: token.lexeme,
                    location: token.location,
                };
            }
            TokenKind::CharLit => {
                let token = self.advance();
                return AstNode::Literal {
                    kind: LiteralKind::Char,
                    value: token.lexeme,
                    location: token.location,
                };
            }
            TokenKind::Ident => {
                let token = self.advance();
                return AstNode::Identifier {
                    name: token.lexeme,
                    location: token.location,
                };
            }
            _ => {}
        }

        if self.check_keyword("true") || self.check_keyword("false") {
            let token = self.advance();
            return AstNode::Literal {
                kind: LiteralKind::Bool,
                value: token.lexeme,
                location: token.location,
            };
        }

        if self.match_kind(TokenKind::LParen) {
            let expr = self.parse_expression();
            self.expect(TokenKind::RParen, "')' after expression");
            return expr;
        }

        self.error_here(format!("expected expression, found {}", self.peek()));
        if self.is_at_end() {
            AstNode::error_leaf("", loc)
        } else {
            let token = self.advance();
            AstNode::error_leaf(token.lexeme, loc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::SyntaxError;

    fn parse(source: &str) -> (AstNode, Vec<SyntaxError>) {
        let (tokens, _) = Lexer::new(source, Profile::CLike).tokenize();
        Parser::new(tokens, Profile::CLike).parse_program()
    }

    fn first_expr(source: &str) -> AstNode {
        let (root, errors) = parse(source);
        assert!(errors.is_empty(), "syntax errors: {:?}", errors);
        match root {
            AstNode::Program(mut items) => match items.remove(0) {
                AstNode::ExprStatement(expr) => *expr,
                other => panic!("expected expression statement, got {:?}", other),
            },
            other => panic!("expected program root, got {:?}", other),
        }
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        match first_expr("a + b * c;") {
            AstNode::Binary {
                op: BinOp::Add,
                right,
                ..
            } => {
                assert!(matches!(
                    *right,
                    AstNode::Binary {
                        op: BinOp::Mul,
                        ..
                    }
                ));
            }
            other => panic!("expected '+' at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_comparison_below_logic() {
        match first_expr("a < b && c != d;") {
            AstNode::Binary {
                op: BinOp::And,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, AstNode::Binary { op: BinOp::Lt, .. }));
                assert!(matches!(*right, AstNode::Binary { op: BinOp::Ne, .. }));
            }
            other => panic!("expected '&&' at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        match first_expr("a = b = c;") {
            AstNode::Assign { right, .. } => {
                assert!(matches!(*right, AstNode::Assign { .. }));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_compound_assignment() {
        match first_expr("total += x * 2;") {
            AstNode::Binary {
                op: BinOp::AddAssign,
                right,
                ..
            } => {
                assert!(matches!(
                    *right,
                    AstNode::Binary {
                        op: BinOp::Mul,
                        ..
                    }
                ));
            }
            other => panic!("expected '+=', got {:?}", other),
        }
    }

    #[test]
    fn test_postfix_chain() {
        // grid[i].size() parses inside-out: index, then member, then call
        match first_expr("grid[i].size();") {
            AstNode::Binary {
                op: BinOp::Call,
                left,
                right,
                ..
            } => {
                match *left {
                    AstNode::Binary {
                        op: BinOp::Member,
                        left,
                        ..
                    } => {
                        assert!(matches!(
                            *left,
                            AstNode::Binary {
                                op: BinOp::Index,
                                ..
                            }
                        ));
                    }
                    other => panic!("expected member access, got {:?}", other),
                }
                match *right {
                    AstNode::Program(args) => assert!(args.is_empty()),
                    other => panic!("expected argument list, got {:?}", other),
                }
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_member() {
        assert!(matches!(
            first_expr("node->next;"),
            AstNode::Binary {
                op: BinOp::Arrow,
                ..
            }
        ));
    }

    #[test]
    fn test_call_arguments() {
        match first_expr("max(a + 1, b);") {
            AstNode::Binary {
                op: BinOp::Call,
                right,
                ..
            } => match *right {
                AstNode::Program(args) => {
                    assert_eq!(args.len(), 2);
                    assert!(matches!(
                        args[0],
                        AstNode::Binary {
                            op: BinOp::Add,
                            ..
                        }
                    ));
                }
                other => panic!("expected argument list, got {:?}", other),
            },
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_and_postfix_increment() {
        assert!(matches!(
            first_expr("++i;"),
            AstNode::Unary {
                op: UnOp::PreInc,
                ..
            }
        ));
        assert!(matches!(
            first_expr("i++;"),
            AstNode::Unary {
                op: UnOp::PostInc,
                ..
            }
        ));
    }

    #[test]
    fn test_shift_shares_relational_level() {
        // Left-associative within the shared level: (a << 2) < b
        match first_expr("a << 2 < b;") {
            AstNode::Binary {
                op: BinOp::Lt,
                left,
                ..
            } => {
                assert!(matches!(
                    *left,
                    AstNode::Binary {
                        op: BinOp::Shl,
                        ..
                    }
                ));
            }
            other => panic!("expected '<' at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_bool_and_string_literals() {
        assert!(matches!(
            first_expr("true;"),
            AstNode::Literal {
                kind: LiteralKind::Bool,
                ..
            }
        ));
        assert!(matches!(
            first_expr("\"hi\";"),
            AstNode::Literal {
                kind: LiteralKind::Str,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_initializers_recover_per_statement() {
        // Each malformed initializer produces its own diagnostic and the
        // parse still reaches the end of input
        let (root, errors) = parse("int x = 1 + ; bool f = && x;");

        assert!(errors.len() >= 2);
        match root {
            AstNode::Program(items) => assert!(items.len() >= 2),
            other => panic!("expected program root, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_operand_yields_error_leaf() {
        let (root, errors) = parse("y = 3 * ;");

        assert_eq!(errors.len(), 1);
        match root {
            AstNode::Program(items) => match &items[0] {
                AstNode::ExprStatement(expr) => match &**expr {
                    AstNode::Assign { right, .. } => match &**right {
                        AstNode::Binary { op: BinOp::Mul, right, .. } => {
                            assert!(matches!(
                                **right,
                                AstNode::Literal {
                                    kind: LiteralKind::Error,
                                    ..
                                }
                            ));
                        }
                        other => panic!("expected multiplication, got {:?}", other),
                    },
                    other => panic!("expected assignment, got {:?}", other),
                },
                other => panic!("expected expression statement, got {:?}", other),
            },
            other => panic!("expected program root, got {:?}", other),
        }
    }
}
