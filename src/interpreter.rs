/// The environment module holds the state of a running program.
///
/// There is exactly one flat variable scope and one procedure table per run.
/// Blocks and procedure bodies do not introduce scopes of their own.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the statements of a program in order, evaluates
/// expressions, manages variable state and reports runtime errors such as
/// unknown names, type mismatches and division by zero.
///
/// # Responsibilities
/// - Evaluates expressions and statements.
/// - Runs `if` and `loop` blocks and procedure bodies.
/// - Propagates `booty` out of nested blocks.
pub mod evaluator;
/// The host module is the boundary between a program and the outside world.
///
/// Programs print through [`host::Host::write_output_line`] and read through
/// [`host::Host::read_input_line`]. The console host talks to stdin and
/// stdout; the scripted host replays queued input and captures output.
pub mod host;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text line by line and produces a stream of
/// tokens, each corresponding to a keyword, literal, name or operator, tagged
/// with its source line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Drops blank lines and `#` comment lines.
/// - Converts each remaining line into tokens followed by a line break token.
/// - Passes unknown characters through so the parser can report them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser groups tokens into logical lines, matches block headers with
/// their closing braces and recognises expressions by their shape.
///
/// # Responsibilities
/// - Converts lines into statement nodes.
/// - Validates block structure, reporting errors with line info.
/// - Applies the first-occurrence operator split for arithmetic.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, floats, strings, booleans and lists.
/// - Implements truthiness and the printed form of every value.
/// - Interprets lines of user input as numbers where possible.
pub mod value;
