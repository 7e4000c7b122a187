/*!
## Machine Module

The execution machine for BLB scripts: the loaded script and its label
index, the variable store, the run loop with its dispatcher and
control-flow handlers, and the external command table. Terminal I/O is
behind the [`Console`] trait; the real terminal lives in `crate::term`.

*/

pub mod cmd;
mod console;
mod runtime;
mod script;
mod var;

pub use console::Console;
pub use runtime::Flow;
pub use runtime::Runtime;
pub use script::Script;
pub use var::Var;
