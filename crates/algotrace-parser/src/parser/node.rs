//! Syntax tree node types.
//!
//! The tree is a closed set of enums. Every node is owned by exactly one parent;
//! there is no sharing and no parent pointers. Walkers that need to know a
//! node's parent pass it down explicitly (see [`crate::visit::BlockOwner`]).
//!
//! Literal tokens keep their raw source text (quotes, escapes, numeric
//! separators) so the printer reproduces them exactly.

use std::fmt;

/// A parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `function name(params) { body }`
    Function(Function),
    /// `let a = 1, b;`
    Var(VarDecl),
    /// `expr;`
    Expr(Expr),
    /// `{ statements }`
    Block(Block),
    If(IfStmt),
    /// `for (init; test; update) body`
    For(ForStmt),
    /// `for (left in right) body`
    ForIn(ForEachStmt),
    /// `for (left of right) body`
    ForOf(ForEachStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    Return(Option<Expr>),
    Break(Option<String>),
    Continue(Option<String>),
    Throw(Expr),
    Try(TryStmt),
    Switch(SwitchStmt),
    Labeled(LabeledStmt),
    Debugger,
    Empty,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub const fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub kind: VarKind,
    pub declarators: Vec<Declarator>,
}

/// One `target = init` entry of a variable declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Declarator {
    pub target: Pattern,
    pub init: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub test: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
}

/// Left side of a `for-in` / `for-of` head.
#[derive(Clone, Debug, PartialEq)]
pub enum ForHead {
    /// `for (const x of xs)`: a declaration with a single declarator and no initializer.
    Var(VarDecl),
    /// `for (x of xs)`: an existing assignment target.
    Target(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForEachStmt {
    pub left: ForHead,
    pub right: Expr,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStmt {
    pub test: Expr,
    pub body: Box<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub test: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TryStmt {
    pub block: Block,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<Block>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStmt {
    pub discriminant: Expr,
    pub cases: Vec<SwitchCase>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    /// `None` for `default:`
    pub test: Option<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabeledStmt {
    pub label: String,
    pub body: Box<Stmt>,
}

// =============================================================================
// Functions and bindings
// =============================================================================

/// Function declaration or function expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: Option<String>,
    pub params: Vec<Param>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub params: Vec<Param>,
    pub body: ArrowBody,
    /// `x => x` rather than `(x) => x`
    pub bare_param: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrowBody {
    Block(Block),
    Expr(Box<Expr>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub binding: BindingElement,
    pub rest: bool,
}

/// A binding target with an optional default value: `x = 0`, `[a, b] = pair`.
#[derive(Clone, Debug, PartialEq)]
pub struct BindingElement {
    pub target: Pattern,
    pub default: Option<Expr>,
}

impl BindingElement {
    pub fn ident(name: impl Into<String>) -> Self {
        Self {
            target: Pattern::Identifier(name.into()),
            default: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Identifier(String),
    Array(ArrayPattern),
    Object(ObjectPattern),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayPattern {
    /// `None` entries are holes: `[, second]`
    pub elements: Vec<Option<BindingElement>>,
    pub rest: Option<Box<Pattern>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternProperty>,
    pub rest: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectPatternProperty {
    pub key: PropertyKey,
    pub value: BindingElement,
    /// `{ a }` / `{ a = 1 }` rather than `{ a: a }`
    pub shorthand: bool,
}

impl Pattern {
    /// Append every identifier this pattern binds, in source order.
    pub fn collect_bound_names(&self, out: &mut Vec<String>) {
        match self {
            Pattern::Identifier(name) => out.push(name.clone()),
            Pattern::Array(array) => {
                for element in array.elements.iter().flatten() {
                    element.target.collect_bound_names(out);
                }
                if let Some(rest) = &array.rest {
                    rest.collect_bound_names(out);
                }
            }
            Pattern::Object(object) => {
                for prop in &object.properties {
                    prop.value.target.collect_bound_names(out);
                }
                if let Some(rest) = &object.rest {
                    out.push(rest.clone());
                }
            }
        }
    }

    pub fn bound_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }
}

impl Param {
    pub fn ident(name: impl Into<String>) -> Self {
        Self {
            binding: BindingElement::ident(name),
            rest: false,
        }
    }
}

/// Names bound by a parameter list, in order.
pub fn param_names(params: &[Param]) -> Vec<String> {
    let mut names = Vec::new();
    for param in params {
        param.binding.target.collect_bound_names(&mut names);
    }
    names
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Identifier(String),
    This,
    Null,
    Bool(bool),
    /// Raw numeric text, including BigInt suffix.
    Number(String),
    /// Raw string text, including quotes.
    String(String),
    Template(Template),
    /// `None` entries are holes: `[1, , 3]`
    Array(Vec<Option<Expr>>),
    Object(Vec<Property>),
    Function(Box<Function>),
    Arrow(Box<Arrow>),
    Unary {
        op: UnaryOp,
        arg: Box<Expr>,
    },
    Update {
        op: UpdateOp,
        prefix: bool,
        arg: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        optional: bool,
    },
    /// `new C(args)`; `args` is `None` for `new C`
    New {
        callee: Box<Expr>,
        args: Option<Vec<Expr>>,
    },
    Member {
        object: Box<Expr>,
        property: String,
        optional: bool,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
        optional: bool,
    },
    Sequence(Vec<Expr>),
    Paren(Box<Expr>),
    Spread(Box<Expr>),
}

/// Template literal. `quasis` holds the raw text between substitutions and
/// always has one more entry than `exprs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    pub quasis: Vec<String>,
    pub exprs: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    KeyValue { key: PropertyKey, value: Expr },
    /// `{ name }`
    Shorthand(String),
    /// `{ ...expr }`
    Spread(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKey {
    Identifier(String),
    /// Raw text including quotes.
    String(String),
    Number(String),
    Computed(Box<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args,
            optional: false,
        }
    }

    pub const fn object(properties: Vec<Property>) -> Self {
        Self::Object(properties)
    }

    /// Strip any number of enclosing parentheses.
    pub fn unparenthesized(&self) -> &Self {
        let mut expr = self;
        while let Expr::Paren(inner) = expr {
            expr = inner;
        }
        expr
    }

    /// Valid left-hand side of a simple or compound assignment / update.
    pub fn is_simple_assignment_target(&self) -> bool {
        match self.unparenthesized() {
            Expr::Identifier(_) => true,
            Expr::Member { optional, .. } | Expr::Index { optional, .. } => !optional,
            _ => false,
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
    BitNot,
    TypeOf,
    Void,
    Delete,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::BitNot => "~",
            Self::TypeOf => "typeof",
            Self::Void => "void",
            Self::Delete => "delete",
        }
    }

    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::TypeOf | Self::Void | Self::Delete)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

impl UpdateOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Coalesce,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    InstanceOf,
    In,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coalesce => "??",
            Self::Or => "||",
            Self::And => "&&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::InstanceOf => "instanceof",
            Self::In => "in",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "**",
        }
    }

    /// Binding power; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Coalesce => 1,
            Self::Or => 2,
            Self::And => 3,
            Self::BitOr => 4,
            Self::BitXor => 5,
            Self::BitAnd => 6,
            Self::Eq | Self::NotEq | Self::StrictEq | Self::StrictNotEq => 7,
            Self::Lt
            | Self::Gt
            | Self::LtEq
            | Self::GtEq
            | Self::InstanceOf
            | Self::In => 8,
            Self::Shl | Self::Shr | Self::UShr => 9,
            Self::Add | Self::Sub => 10,
            Self::Mul | Self::Div | Self::Mod => 11,
            Self::Exp => 12,
        }
    }

    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Exp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Exp,
    Div,
    Mod,
    Shl,
    Shr,
    UShr,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
    Coalesce,
}

impl AssignOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Exp => "**=",
            Self::Div => "/=",
            Self::Mod => "%=",
            Self::Shl => "<<=",
            Self::Shr => ">>=",
            Self::UShr => ">>>=",
            Self::BitAnd => "&=",
            Self::BitOr => "|=",
            Self::BitXor => "^=",
            Self::And => "&&=",
            Self::Or => "||=",
            Self::Coalesce => "??=",
        }
    }
}

// =============================================================================
// Node kinds (for logging and tests)
// =============================================================================

/// The kind tag of a statement, without its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StmtKind {
    Function,
    Var,
    Expr,
    Block,
    If,
    For,
    ForIn,
    ForOf,
    While,
    DoWhile,
    Return,
    Break,
    Continue,
    Throw,
    Try,
    Switch,
    Labeled,
    Debugger,
    Empty,
}

impl Stmt {
    pub const fn kind(&self) -> StmtKind {
        match self {
            Stmt::Function(_) => StmtKind::Function,
            Stmt::Var(_) => StmtKind::Var,
            Stmt::Expr(_) => StmtKind::Expr,
            Stmt::Block(_) => StmtKind::Block,
            Stmt::If(_) => StmtKind::If,
            Stmt::For(_) => StmtKind::For,
            Stmt::ForIn(_) => StmtKind::ForIn,
            Stmt::ForOf(_) => StmtKind::ForOf,
            Stmt::While(_) => StmtKind::While,
            Stmt::DoWhile(_) => StmtKind::DoWhile,
            Stmt::Return(_) => StmtKind::Return,
            Stmt::Break(_) => StmtKind::Break,
            Stmt::Continue(_) => StmtKind::Continue,
            Stmt::Throw(_) => StmtKind::Throw,
            Stmt::Try(_) => StmtKind::Try,
            Stmt::Switch(_) => StmtKind::Switch,
            Stmt::Labeled(_) => StmtKind::Labeled,
            Stmt::Debugger => StmtKind::Debugger,
            Stmt::Empty => StmtKind::Empty,
        }
    }

    pub const fn is_loop(&self) -> bool {
        matches!(
            self,
            Stmt::For(_) | Stmt::ForIn(_) | Stmt::ForOf(_) | Stmt::While(_) | Stmt::DoWhile(_)
        )
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
