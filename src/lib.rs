//! # BLB
//!
//! An interpreter for BLB, a small Batch-like scripting language:
//! sequential statements, `%NAME%` variable substitution, `:label` jump
//! targets, conditionals, bounded `for` loops and `call`s into other
//! scripts.
//!
//! ```text
//! :greet
//! set WHO=world
//! if %WHO% == world then echo hello, %WHO%
//! ```
//!
//! Run a script with `blb script.blb`. One bad line never stops a script;
//! errors are reported and execution carries on, in the forgiving manner
//! of its ancestors.

pub mod lang;
pub mod mach;
pub mod term;
