//! # piratelang
//!
//! piratelang is a small, pirate-flavoured teaching language written in Rust.
//! Programs are line oriented: every statement sits on its own line, blocks
//! are opened with `{` at the end of a header and closed with a line starting
//! with `}`.
//!
//! ```text
//! plunder greet() {
//!     shout "Ahoy, " + name + "!"
//! }
//!
//! ask name
//! greet()
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::trace;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::Context, host::Host, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing, evaluation and host I/O.
///
/// Every error carries the source line it refers to (or the path, for
/// source files that cannot be read) and belongs to one [`error::ErrorKind`].
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Classifies any of them into a kind such as `SyntaxError` or `NameError`.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the host boundary to provide a complete runtime.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Promote integers to `f64` and convert lengths to `i64`.
/// - Validate list and string indices.
pub mod util;

/// Lexes and parses a program without running it.
///
/// # Errors
/// Returns the first `ParseError` in the source.
///
/// # Examples
/// ```
/// use piratelang::parse;
///
/// let program = parse("gold stash 10\nif gold > 5 {\n    shout \"rich\"\n}").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse("}").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    trace!("lexing {} bytes", source.len());
    let tokens = tokenize(source);

    trace!("parsing {} tokens", tokens.len());
    parse_program(&tokens)
}

/// Runs a program from source to completion.
///
/// The whole source is parsed before anything runs, so a syntax error on the
/// last line means nothing is printed. Execution then uses a fresh
/// environment and talks to the world only through `host`.
///
/// # Errors
/// Returns the parse or runtime error that stopped the program. Use
/// [`error::kind_of`] to classify it.
///
/// # Examples
/// ```
/// use piratelang::{interpreter::host::ScriptedHost, run};
///
/// let mut host = ScriptedHost::default();
/// let res = run("i stash 0\nloop i < 3 {\n    shout i\n    i stash i + 1\n}", &mut host);
///
/// assert!(res.is_ok());
/// assert_eq!(host.output(), ["0", "1", "2"]);
///
/// // Unknown variables are an error, never a placeholder.
/// let res = run("shout missing", &mut ScriptedHost::default());
/// assert!(res.is_err());
/// ```
pub fn run(source: &str, host: &mut dyn Host) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse(source)?;

    trace!("evaluating {} top-level statements", program.statements.len());
    Context::new(host).run(&program)?;

    trace!("program finished");
    Ok(())
}
