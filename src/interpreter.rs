/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, and produces results. All
/// bindings it reads or writes live in an `Environment`.
///
/// # Responsibilities
/// - Evaluates AST nodes against a scope chain.
/// - Runs user and native function calls under a call depth limit.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens, each carrying its kind, line/column position and byte span. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace, `@` line comments and nested `#| ... |#` block
///   comments.
/// - Reports lexical errors for illegal characters and malformed comments.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` that represents the syntactic structure of the source.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity.
/// - Reports the first syntax error with its source position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: nil, numbers, booleans and functions.
/// - Defines user and native function values.
/// - Provides typed accessors that raise type mismatches.
pub mod value;
/// Lexical scopes.
///
/// Defines `Environment`, the shared, parent-linked binding table that
/// implements static scoping and closures.
pub mod environment;
/// Host-provided bindings.
///
/// Registers the constants `true`, `false` and `nil` and the native functions
/// every program can call.
pub mod native;
