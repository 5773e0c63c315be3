/// Block parsing.
///
/// Collects the statements between a block header and its closing brace.
pub mod block;
/// Condition parsing for `if` and `loop` headers.
///
/// Handles `be` and the ordering comparisons before falling back to a plain
/// expression whose truthiness decides the branch.
pub mod condition;
/// Core parsing entry points and result types.
///
/// Splits the token stream into logical lines and parses a whole program.
pub mod core;
/// Expression parsing.
///
/// Expressions are recognised by shape, in a fixed order: property access,
/// single tokens, bracket forms, then arithmetic split at the first top-level
/// `+`, `-`, `*` or `/`.
pub mod expression;
/// Statement parsing.
///
/// Dispatches on the leading keyword of a line and builds the matching
/// statement node.
pub mod statement;
/// Parser utilities.
///
/// Provides shared helpers for bracket-aware token scanning, comma separated
/// lists and identifiers.
pub mod utils;
