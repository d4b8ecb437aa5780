//! Indented plain-text rendering of an AST
//!
//! One node per line, two spaces of indentation per tree level, with the
//! node's source location appended where it carries one. Intended for
//! inspection output and tests, not for round-tripping source text.

use crate::parser::ast::{AstNode, LiteralKind};

/// Render the tree rooted at `node` as indented text.
pub fn render(node: &AstNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &AstNode, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    match node {
        AstNode::Program(items) => {
            out.push_str(&format!("program ({} items)\n", items.len()));
            for item in items {
                write_node(out, item, depth + 1);
            }
        }
        AstNode::ExprStatement(expr) => {
            out.push_str("expr-stmt\n");
            write_node(out, expr, depth + 1);
        }
        AstNode::Assign {
            op,
            left,
            right,
            location,
        } => {
            out.push_str(&format!("assign '{}' @ {}\n", op, location));
            write_node(out, left, depth + 1);
            write_node(out, right, depth + 1);
        }
        AstNode::Binary {
            op,
            left,
            right,
            location,
        } => {
            out.push_str(&format!("binary '{}' @ {}\n", op, location));
            write_node(out, left, depth + 1);
            write_node(out, right, depth + 1);
        }
        AstNode::Unary {
            op,
            operand,
            location,
        } => {
            out.push_str(&format!("unary '{}' @ {}\n", op, location));
            write_node(out, operand, depth + 1);
        }
        AstNode::Identifier { name, location } => {
            out.push_str(&format!("ident '{}' @ {}\n", name, location));
        }
        AstNode::Literal {
            kind,
            value,
            location,
        } => {
            let tag = match kind {
                LiteralKind::Number => "number",
                LiteralKind::Str => "string",
                LiteralKind::Char => "char",
                LiteralKind::Bool => "bool",
                LiteralKind::Void => "void",
                LiteralKind::Error => "error",
            };
            if value.is_empty() {
                out.push_str(&format!("{} @ {}\n", tag, location));
            } else if matches!(
                kind,
                LiteralKind::Str | LiteralKind::Char | LiteralKind::Bool
            ) {
                // The raw lexeme already carries its own quotes
                out.push_str(&format!("{} {} @ {}\n", tag, value, location));
            } else {
                out.push_str(&format!("{} '{}' @ {}\n", tag, value, location));
            }
        }
    }
}
