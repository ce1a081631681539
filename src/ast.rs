use std::{fmt, mem, rc::Rc};

/// A location in the source text.
///
/// Lines and columns are both 1-based. Columns count characters, not bytes, so
/// a caret rendered under `column` lines up with the offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The column of the first character on `line`.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The tag identifying each kind of AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    VarDeclaration,
    FuncDeclaration,
    ForStatement,
    WhileStatement,
    AssignmentExpr,
    BinaryExpr,
    UnaryExpr,
    CallExpr,
    Identifier,
    NumericLiteral,
    BooleanLiteral,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The root of every parsed source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub body: Vec<Statement>,
}

impl Program {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

/// A user-defined function declaration: `fn name(a, b) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name the function is bound to.
    pub name:       String,
    /// The parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The statements executed on each call, shared with every function
    /// value the declaration produces.
    pub body:       Rc<[Statement]>,
    /// Position of the `fn` keyword.
    pub position:   Position,
}

/// A statement.
///
/// Expressions are statements too; every statement produces a value when
/// evaluated, which is how a block or program yields its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;` or `const name = value;`
    VarDeclaration {
        /// The declared name.
        name:     String,
        /// The initializer; `None` binds the name to nil.
        value:    Option<Expr>,
        /// Whether the binding was declared with `const`.
        constant: bool,
        /// Position of the `let`/`const` keyword.
        position: Position,
    },
    /// `fn name(params) { body }`
    FuncDeclaration(FunctionDecl),
    /// `for <count> { body }`
    ForStatement {
        /// How many times the body runs.
        iterations: u64,
        /// The loop body.
        body:       Vec<Statement>,
        /// Position of the `for` keyword.
        position:   Position,
    },
    /// `while <condition> { body }`
    WhileStatement {
        /// Re-evaluated before every pass.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Position of the `while` keyword.
        position:  Position,
    },
    /// An expression used as a statement.
    Expression(Expr),
}

impl Statement {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::VarDeclaration { .. } => NodeKind::VarDeclaration,
            Self::FuncDeclaration(_) => NodeKind::FuncDeclaration,
            Self::ForStatement { .. } => NodeKind::ForStatement,
            Self::WhileStatement { .. } => NodeKind::WhileStatement,
            Self::Expression(expr) => expr.kind(),
        }
    }

    /// Gets the source position of the statement's first token.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::VarDeclaration { position, .. }
            | Self::FuncDeclaration(FunctionDecl { position, .. })
            | Self::ForStatement { position, .. }
            | Self::WhileStatement { position, .. } => *position,
            Self::Expression(expr) => expr.position(),
        }
    }
}

impl Statement {
    const fn placeholder() -> Self {
        Self::Expression(Expr::placeholder())
    }

    /// Moves the nested statement bodies into `pending`.
    fn detach_bodies(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::ForStatement { body, .. } | Self::WhileStatement { body, .. } => pending.append(body),
            Self::FuncDeclaration(decl) => {
                if let Some(body) = Rc::get_mut(&mut decl.body) {
                    pending.extend(body.iter_mut().map(|statement| mem::replace(statement, Self::placeholder())));
                }
            },
            Self::VarDeclaration { .. } | Self::Expression(_) => {},
        }
    }
}

/// Tears nested blocks down iteratively, so dropping deeply nested source
/// cannot exhaust the native stack.
impl Drop for Statement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_bodies(&mut pending);
        while let Some(mut statement) = pending.pop() {
            statement.detach_bodies(&mut pending);
        }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `target = value`. The target is checked when evaluated.
    Assignment {
        /// The assigned-to expression; only identifiers are valid.
        target:   Box<Self>,
        /// The assigned value.
        value:    Box<Self>,
        /// Position of the target.
        position: Position,
    },
    /// A binary operation such as `a + b` or `a && b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the left operand.
        position: Position,
    },
    /// A prefix operation such as `!a`.
    Unary {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `callee(arguments)`
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// Position of the callee.
        position:  Position,
    },
    /// A reference to a binding.
    Identifier {
        /// The referenced name.
        name:     String,
        /// Position of the name.
        position: Position,
    },
    /// A number literal such as `42` or `3.5`.
    NumericLiteral {
        /// The literal's value.
        value:    f64,
        /// Position of the literal.
        position: Position,
    },
    /// A boolean literal.
    BooleanLiteral {
        /// The literal's value.
        value:    bool,
        /// Position of the literal.
        position: Position,
    },
}

impl Expr {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Assignment { .. } => NodeKind::AssignmentExpr,
            Self::Binary { .. } => NodeKind::BinaryExpr,
            Self::Unary { .. } => NodeKind::UnaryExpr,
            Self::Call { .. } => NodeKind::CallExpr,
            Self::Identifier { .. } => NodeKind::Identifier,
            Self::NumericLiteral { .. } => NodeKind::NumericLiteral,
            Self::BooleanLiteral { .. } => NodeKind::BooleanLiteral,
        }
    }

    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use april::ast::{Expr, Position};
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               position: Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assignment { position, .. }
            | Self::Binary { position, .. }
            | Self::Unary { position, .. }
            | Self::Call { position, .. }
            | Self::Identifier { position, .. }
            | Self::NumericLiteral { position, .. }
            | Self::BooleanLiteral { position, .. } => *position,
        }
    }
}

impl Expr {
    const fn placeholder() -> Self {
        Self::BooleanLiteral { value:    false,
                               position: Position::new(0, 0), }
    }

    const fn is_leaf(&self) -> bool {
        matches!(self, Self::Identifier { .. } | Self::NumericLiteral { .. } | Self::BooleanLiteral { .. })
    }

    /// Moves every non-leaf child into `pending`, leaving leaves in place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Assignment { target: first,
                               value: second,
                               .. }
            | Self::Binary { left: first,
                             right: second,
                             .. } => {
                first.detach_into(pending);
                second.detach_into(pending);
            },
            Self::Unary { operand, .. } => operand.detach_into(pending),
            Self::Call { callee, arguments, .. } => {
                callee.detach_into(pending);
                pending.append(arguments);
            },
            Self::Identifier { .. } | Self::NumericLiteral { .. } | Self::BooleanLiteral { .. } => {},
        }
    }

    fn detach_into(&mut self, pending: &mut Vec<Self>) {
        if !self.is_leaf() {
            pending.push(mem::replace(self, Self::placeholder()));
        }
    }
}

/// Tears the tree down with an explicit worklist instead of recursing once
/// per nesting level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// Whether the operator combines two booleans.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}
