/*!
# Language Module

Text-level concerns of the BLB language: line classification, statement
parsing, and the restricted condition grammar. Nothing in here touches the
filesystem or the terminal.

*/

pub type LineIndex = Option<usize>;

#[macro_use]
mod error;
mod cond;
mod line;
mod parse;

pub use cond::CmpOp;
pub use cond::Condition;
pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use parse::parse;
pub use parse::Command;
