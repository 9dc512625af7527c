//! Rules Module
//!
//! Parses textual rule notations into canonical, bounds-checked rule sets.

mod notation;
mod rule_set;


// Re-export public types
pub use notation::{parse_compact, parse_delimited};
pub use rule_set::RuleSet;

// == Public Constants ==
/// Largest valid neighbor count in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;
