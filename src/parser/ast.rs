// AST (Abstract Syntax Tree) definitions shared by both language profiles

use std::fmt;

/// Which of the two supported grammars and keyword sets is active.
///
/// Fixed for the lifetime of a [`crate::parser::lexer::Lexer`] /
/// [`crate::parser::parse::Parser`] pair; never changes mid-scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Boolean-expression/assignment language: `x := 'T' or y and not 'F';`
    Bool,
    /// Simplified expression-and-statement subset of a C-like language.
    CLike,
}

/// Source location information for error reporting (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binary operator tags.
///
/// A single binary-shaped node is deliberately reused for both expressions
/// and compound control constructs; the tag distinguishes the semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Shifts (same precedence level as relational in this subset)
    Shl,
    Shr,
    // Logical
    And,
    Or,
    // Word-operator forms (boolean profile)
    BoolOr,
    BoolXor,
    BoolAnd,
    // Compound assignment
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    // Postfix structure
    Index,
    Member,
    Arrow,
    Call,
    // Control constructs and declarations, encoded as binary nodes
    If,
    Else,
    While,
    DoWhile,
    For,
    ForSpec,
    Decl,
    FuncDef,
    FuncProto,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::BoolOr => "or",
            BinOp::BoolXor => "xor",
            BinOp::BoolAnd => "and",
            BinOp::AddAssign => "+=",
            BinOp::SubAssign => "-=",
            BinOp::MulAssign => "*=",
            BinOp::DivAssign => "/=",
            BinOp::ModAssign => "%=",
            BinOp::Index => "[]",
            BinOp::Member => ".",
            BinOp::Arrow => "->",
            BinOp::Call => "call",
            BinOp::If => "if",
            BinOp::Else => "else",
            BinOp::While => "while",
            BinOp::DoWhile => "do-while",
            BinOp::For => "for",
            BinOp::ForSpec => "for-spec",
            BinOp::Decl => "decl",
            BinOp::FuncDef => "func-def",
            BinOp::FuncProto => "func-proto",
        };
        write!(f, "{}", tag)
    }
}

/// Unary operator tags (prefix, postfix, and unary-shaped statements)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not,      // not x (boolean profile)
    Bang,     // !x
    Neg,      // -x
    Plus,     // +x
    BitNot,   // ~x
    AddrOf,   // &x
    Deref,    // *x
    PreInc,   // ++x
    PreDec,   // --x
    PostInc,  // x++
    PostDec,  // x--
    Return,   // return x;
    Break,    // break;
    Continue, // continue;
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            UnOp::Not => "not",
            UnOp::Bang => "!",
            UnOp::Neg => "-",
            UnOp::Plus => "+",
            UnOp::BitNot => "~",
            UnOp::AddrOf => "&",
            UnOp::Deref => "*",
            UnOp::PreInc => "++",
            UnOp::PreDec => "--",
            UnOp::PostInc => "post++",
            UnOp::PostDec => "post--",
            UnOp::Return => "return",
            UnOp::Break => "break",
            UnOp::Continue => "continue",
        };
        write!(f, "{}", tag)
    }
}

/// Assignment operator: `:=` in the boolean profile, `=` in the C-like one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    ColonEq,
    Eq,
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignOp::ColonEq => write!(f, ":="),
            AssignOp::Eq => write!(f, "="),
        }
    }
}

/// Classification of an [`AstNode::Literal`] leaf.
///
/// `Void` stands in for a deliberately absent branch (empty `for` clause,
/// bare `return`); `Error` is the placeholder produced when recovery gives
/// up on an expression. Both keep every child slot populated so downstream
/// consumers never see a missing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Str,
    Char,
    Bool,
    Void,
    Error,
}

/// AST nodes produced by the parser.
///
/// A closed set of six shapes; compound constructs reuse [`AstNode::Binary`]
/// with a distinguishing [`BinOp`] tag, and statement sequences (the program
/// itself, braced blocks, argument lists) reuse [`AstNode::Program`].
#[derive(Debug, Clone)]
pub enum AstNode {
    /// Ordered statement/item sequence (top level, blocks, argument lists)
    Program(Vec<AstNode>),
    /// An expression used as a statement
    ExprStatement(Box<AstNode>),
    Assign {
        op: AssignOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    Binary {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    Unary {
        op: UnOp,
        operand: Box<AstNode>,
        location: SourceLocation,
    },
    Identifier {
        name: String,
        location: SourceLocation,
    },
    /// Leaf literal; `value` is the raw lexeme, not a decoded value
    Literal {
        kind: LiteralKind,
        value: String,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Explicit placeholder for a deliberately absent branch.
    pub fn void(location: SourceLocation) -> Self {
        AstNode::Literal {
            kind: LiteralKind::Void,
            value: String::new(),
            location,
        }
    }

    /// Placeholder leaf produced when error recovery discards input.
    pub fn error_leaf(value: impl Into<String>, location: SourceLocation) -> Self {
        AstNode::Literal {
            kind: LiteralKind::Error,
            value: value.into(),
            location,
        }
    }

    /// Get the source location of this node, if it carries one.
    ///
    /// Sequence nodes have no single location of their own.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            AstNode::Program(_) => None,
            AstNode::ExprStatement(expr) => expr.location(),
            AstNode::Assign { location, .. }
            | AstNode::Binary { location, .. }
            | AstNode::Unary { location, .. }
            | AstNode::Identifier { location, .. }
            | AstNode::Literal { location, .. } => Some(*location),
        }
    }
}
