use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numbers, strings and the booleans `aye` and `nay`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// A boolean literal value: `aye` or `nay`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions only appear on the right of `stash`, after `shout` and `booty`,
/// in conditions and inside index brackets.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Property lookup such as `crew.length`.
    PropertyAccess {
        /// The value whose property is read.
        base:     Box<Self>,
        /// The property name.
        property: String,
        /// Line number in the source code.
        line:     usize,
    },
    /// Indexing expression such as `crew[2]`.
    IndexAccess {
        /// The string or list to index into.
        base:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal such as `[1, 2, 3]`.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A binary operation: arithmetic or comparison.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use piratelang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "gold".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::PropertyAccess { line, .. }
            | Self::IndexAccess { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// A procedure declared with `plunder`.
///
/// Parameters are recorded as written but never bound; procedure bodies work
/// on the single global environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDef {
    /// The name of the procedure.
    pub name:   String,
    /// The parameter names as written in the declaration.
    pub params: Vec<String>,
    /// The statements executed when the procedure is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
///
/// Every statement starts on its own source line. `If`, `Loop` and
/// `ProcedureDecl` additionally own the block of lines up to their closing
/// brace.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `shout <expr>`
    Print {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `ask <name>`
    Input {
        /// The variable receiving the input.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `<name> stash <expr>`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if <condition> { ... }`
    If {
        /// The condition deciding whether the body runs.
        condition: Expr,
        /// Statements executed when the condition holds.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `loop <condition> { ... }` and `loop if <condition> { ... }`
    Loop {
        /// The condition checked before every iteration.
        condition: Expr,
        /// Statements executed on every iteration.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `plunder <name>(...) { ... }`
    ProcedureDecl(Rc<ProcedureDef>),
    /// `<name>(...)`
    ProcedureCall {
        /// The name of the called procedure.
        name:      String,
        /// Arguments as written. They are checked for syntax but never
        /// evaluated or bound.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `booty <expr>`
    Return {
        /// The returned expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number on which the statement starts.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Print { line, .. }
            | Self::Input { line, .. }
            | Self::Assignment { line, .. }
            | Self::If { line, .. }
            | Self::Loop { line, .. }
            | Self::ProcedureCall { line, .. }
            | Self::Return { line, .. }
            | Self::Expression { line, .. } => *line,
            Self::ProcedureDecl(def) => def.line,
        }
    }
}

/// A parsed program: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Arithmetic operators may appear in any expression; comparisons only in the
/// conditions of `if` and `loop`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Structural equality (`be`)
    Be,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Be, Div, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Be => "be",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
