//! Centralized limits for the parser and the instrumentation walk.
//!
//! Inputs are short, hand-written algorithm functions. Anything nested deeper
//! than these limits is treated as malformed input rather than risking a stack
//! overflow in the recursive-descent parser.

/// Maximum nesting depth of statements and expressions accepted by the parser.
///
/// Each nested statement, parenthesized expression or operand adds one
/// level. So does each link of an operator, member or call chain, since
/// `a + b + c` nests as deeply in the tree as `((a + b) + c)`. Exceeding the limit is reported as a parse
/// failure with `diagnostic_codes::NESTING_TOO_DEEP`.
pub const MAX_PARSE_DEPTH: u32 = 256;

/// Maximum source size the instrumenter will look at, in bytes.
///
/// Byte offsets are stored as `u32`, so larger inputs cannot be represented.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;
