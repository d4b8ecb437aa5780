//! C-like profile: top-level item parsing
//!
//! Handles the permissive top-level dispatch and the declaration forms:
//!
//! - Preprocessor lines and `using ...;` clauses: consumed, not modeled
//! - Stray top-level `}`: silently discarded (noise from enclosing
//!   structure this restricted grammar does not parse)
//! - Variable declarations: `int x = 5;`
//! - Function definitions and prototypes: `int f(...) { ... }` / `int f(...);`
//!   (the parameter list is skipped as balanced parens, not modeled)
//! - Templated type names: `vector<vector<int>>` (generic suffix skipped)
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

/// Keywords that can open a declaration in the restricted grammar.
const TYPE_KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "bool", "void", "long", "short", "signed", "unsigned",
    "const",
];

impl Parser {
    /// Parse top-level items until end of input.
    pub(crate) fn parse_clike_program(&mut self) -> Vec<AstNode> {
        let mut items = Vec::new();

        while !self.is_at_end() {
            match self.peek_kind() {
                // Not interpreted at this level
                TokenKind::Preprocessor => {
                    self.advance();
                }
                // Stray closer from structure outside the subset; discard
                TokenKind::RBrace => {
                    self.advance();
                }
                TokenKind::Semicolon => {
                    self.advance();
                }
                _ if self.check_keyword("using") => {
                    self.skip_using_clause();
                }
                _ if self.at_type_name() => {
                    if let Some(item) = self.parse_declaration() {
                        items.push(item);
                    }
                }
                _ => {
                    if let Some(stmt) = self.parse_statement() {
                        items.push(stmt);
                    }
                }
            }
            self.clear_recovery();
        }

        items
    }

    /// True when the lookahead starts a type name: a type keyword, or the
    /// identifier `vector` (treated as a type name in this subset).
    pub(crate) fn at_type_name(&self) -> bool {
        match self.peek_kind() {
            TokenKind::Keyword => TYPE_KEYWORDS.contains(&self.peek().lexeme.as_str()),
            TokenKind::Ident => self.peek().lexeme == "vector",
            _ => false,
        }
    }

    /// Consume `using ...;` without modeling it; stops after the `;` or at
    /// end of input. Deliberately silent.
    fn skip_using_clause(&mut self) {
        self.advance(); // 'using'
        while !self.is_at_end() {
            if self.advance().kind == TokenKind::Semicolon {
                break;
            }
        }
    }

    /// Parse a declaration opening with a type name: either a variable
    /// declaration (`decl` node) or a function definition/prototype,
    /// disambiguated by whether `(` follows the declared name.
    pub(crate) fn parse_declaration(&mut self) -> Option<AstNode> {
        let loc = self.current_location();
        let type_name = self.parse_type_name();

        if !self.check(TokenKind::Ident) {
            self.error_here(format!(
                "expected name after type, found {}",
                self.peek()
            ));
            self.synchronize();
            return None;
        }
        let name_token = self.advance();
        let name = AstNode::Identifier {
            name: name_token.lexeme,
            location: name_token.location,
        };

        if self.check(TokenKind::LParen) {
            return Some(self.parse_function_rest(type_name, name, loc));
        }

        let declarator = if self.match_op("=") {
            let eq_loc = loc;
            let init = self.parse_expression();
            AstNode::Assign {
                op: AssignOp::Eq,
                left: Box::new(name),
                right: Box::new(init),
                location: eq_loc,
            }
        } else {
            name
        };

        self.expect(TokenKind::Semicolon, "';' after declaration");

        Some(AstNode::Binary {
            op: BinOp::Decl,
            left: Box::new(type_name),
            right: Box::new(declarator),
            location: loc,
        })
    }

    /// Function declaration/definition after the declared name: skip the
    /// parameter list as balanced parens, then either a body block
    /// (definition) or `;` (prototype).
    fn parse_function_rest(
        &mut self,
        type_name: AstNode,
        name: AstNode,
        loc: SourceLocation,
    ) -> AstNode {
        let declarator = AstNode::Binary {
            op: BinOp::Decl,
            left: Box::new(type_name),
            right: Box::new(name),
            location: loc,
        };

        self.skip_balanced_parens();

        if self.check(TokenKind::LBrace) {
            let body = self.parse_block();
            return AstNode::Binary {
                op: BinOp::FuncDef,
                left: Box::new(declarator),
                right: Box::new(body),
                location: loc,
            };
        }

        if !self.match_kind(TokenKind::Semicolon) {
            self.error_here(format!(
                "expected function body or ';', found {}",
                self.peek()
            ));
            self.synchronize();
        }

        let end = self.current_location();
        AstNode::Binary {
            op: BinOp::FuncProto,
            left: Box::new(declarator),
            right: Box::new(AstNode::void(end)),
            location: loc,
        }
    }

    /// Consume a type name token and any trailing generic-argument suffix
    /// (`<...>`, balanced by nesting depth), returning an identifier leaf
    /// for the base name. `>>` closes two levels, as in `vector<vector<int>>`.
    pub(crate) fn parse_type_name(&mut self) -> AstNode {
        let token = self.advance();
        let name = AstNode::Identifier {
            name: token.lexeme,
            location: token.location,
        };

        if self.check_op("<") {
            let mut depth: usize = 0;
            while !self.is_at_end() {
                if self.check_op("<") {
                    depth += 1;
                } else if self.check_op(">") {
                    depth = depth.saturating_sub(1);
                } else if self.check_op(">>") {
                    depth = depth.saturating_sub(2);
                }
                self.advance();
                if depth == 0 {
                    break;
                }
            }
        }

        name
    }

    /// Skip a balanced `( ... )` group, consuming nested parens; used for
    /// parameter lists, which this grammar does not model individually.
    pub(crate) fn skip_balanced_parens(&mut self) {
        if !self.match_kind(TokenKind::LParen) {
            return;
        }
        let mut depth: usize = 1;
        while depth > 0 && !self.is_at_end() {
            match self.peek_kind() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            self.advance();
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

    fn children(root: AstNode) -> Vec<AstNode> {
        match root {
            AstNode::Program(items) => items,
            other => panic!("expected program root, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_declarations() {
        let (root, errors) = parse("int x = 5; float y = 3.14f; bool flag = true;");

        assert!(errors.is_empty());
        let items = children(root);
        assert_eq!(items.len(), 3);
        for item in &items {
            assert!(matches!(
                item,
                AstNode::Binary {
                    op: BinOp::Decl,
                    ..
                }
            ));
        }
        match &items[2] {
            AstNode::Binary { right, .. } => match &**right {
                AstNode::Assign { right, .. } => {
                    assert!(matches!(
                        **right,
                        AstNode::Literal {
                            kind: LiteralKind::Bool,
                            ..
                        }
                    ));
                }
                other => panic!("expected initializer, got {:?}", other),
            },
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_declaration_without_initializer() {
        let (root, errors) = parse("int counter;");

        assert!(errors.is_empty());
        let items = children(root);
        match &items[0] {
            AstNode::Binary {
                op: BinOp::Decl,
                left,
                right,
                ..
            } => {
                assert!(matches!(**left, AstNode::Identifier { ref name, .. } if name == "int"));
                assert!(
                    matches!(**right, AstNode::Identifier { ref name, .. } if name == "counter")
                );
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_templated_type_name_skipped() {
        let (root, errors) = parse("vector<vector<int>> grid = rows;");

        assert!(errors.is_empty());
        let items = children(root);
        match &items[0] {
            AstNode::Binary {
                op: BinOp::Decl,
                left,
                ..
            } => {
                assert!(matches!(**left, AstNode::Identifier { ref name, .. } if name == "vector"));
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_function_definition_and_prototype() {
        let (root, errors) = parse("int add(int a, int b) { return a + b; } void log(int level);");

        assert!(errors.is_empty());
        let items = children(root);
        assert_eq!(items.len(), 2);
        assert!(matches!(
            items[0],
            AstNode::Binary {
                op: BinOp::FuncDef,
                ..
            }
        ));
        match &items[1] {
            AstNode::Binary {
                op: BinOp::FuncProto,
                right,
                ..
            } => {
                assert!(matches!(
                    **right,
                    AstNode::Literal {
                        kind: LiteralKind::Void,
                        ..
                    }
                ));
            }
            other => panic!("expected prototype, got {:?}", other),
        }
    }

    #[test]
    fn test_preprocessor_and_using_skipped_silently() {
        let (root, errors) = parse("#include <iostream>\nusing namespace std;\nint x = 1;");

        assert!(errors.is_empty());
        assert_eq!(children(root).len(), 1);
    }

    #[test]
    fn test_stray_rbrace_discarded_without_diagnostic() {
        let (root, errors) = parse("} int x = 1; }");

        assert!(errors.is_empty());
        assert_eq!(children(root).len(), 1);
    }

    #[test]
    fn test_missing_name_resynchronizes() {
        let (root, errors) = parse("int = 5; int y = 2;");

        assert_eq!(errors.len(), 1);
        let items = children(root);
        assert_eq!(items.len(), 1);
    }
}
