/// Property and index access, and list construction.
///
/// Implements `.length` and `base[index]` for strings and lists.
pub mod access;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// concatenation, equality and ordering comparisons.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and the control
/// flow signal used by `booty`.
pub mod core;

/// Procedure declaration and calls.
///
/// Procedures share the global environment; calls run the stored body and
/// drop whatever it returns.
pub mod procedure;

/// Execution of the statements that talk to the host or change control flow.
pub mod statement;
