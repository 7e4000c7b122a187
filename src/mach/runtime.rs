use super::{cmd, Console, Script, Var};
use crate::error;
use crate::lang::{parse, Command, Error};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Nested `call` frames allowed before the script is stopped with
/// OUT OF MEMORY. Keeps self-calling scripts from blowing the stack.
const MAX_CALL_DEPTH: usize = 64;

/// Outcome of dispatching one statement: carry on with the next line or
/// move the program counter to a resolved label index. Errors travel
/// separately as `Result` and never mean "jump".
#[derive(Debug, PartialEq)]
pub enum Flow {
    Advance,
    Jump(usize),
}

/// ## The execution machine
///
/// Owns the variable store, the external argument list and the interrupt
/// flag; the script context is passed into each `run` frame rather than
/// held as ambient state, so `call` simply recurses with a fresh script.
///
/// Every in-script error is reported through the console and execution
/// continues on the next line. The only things that end a run early are
/// the interrupt flag (BREAK) and the end of the script itself.
pub struct Runtime<'a> {
    console: &'a mut dyn Console,
    vars: Var,
    args: Vec<String>,
    interrupted: Arc<AtomicBool>,
    depth: usize,
}

impl<'a> Runtime<'a> {
    pub fn new(console: &'a mut dyn Console) -> Runtime<'a> {
        Runtime {
            console,
            vars: Var::new(),
            args: Vec::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
            depth: 0,
        }
    }

    /// External arguments of the invocation, the list `shift` consumes.
    pub fn set_args(&mut self, args: Vec<String>) {
        self.args = args;
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Shared flag for a Ctrl-C handler. Setting it stops the script at
    /// the next line boundary with a BREAK report.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn run_file(&mut self, path: &Path) -> Result<()> {
        let script = Script::load(path)?;
        self.run(&script)
    }

    /// Drive one script to completion. Errors other than BREAK never
    /// surface here; they are reported and the counter advances.
    pub fn run(&mut self, script: &Script) -> Result<()> {
        let mut pc = 0;
        while pc < script.len() {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Err(error!(Break));
            }
            let line = match script.line(pc) {
                Some(line) => line,
                None => return Err(error!(InternalError; "LINE FETCH PAST END")),
            };
            if !line.is_statement() {
                pc += 1;
                continue;
            }
            let text = self.vars.substitute(line.text());
            match self.dispatch(&text, script, pc) {
                Ok(Flow::Advance) => pc += 1,
                Ok(Flow::Jump(target)) => pc = target,
                Err(e) if e.is_break() => return Err(e),
                Err(e) => {
                    self.console.error(&e.in_line(pc));
                    pc += 1;
                }
            }
        }
        Ok(())
    }

    /// Classify one substituted statement and run its handler. Handlers
    /// for `for` and `if` re-enter here with their body statement; `call`
    /// re-enters `run` with the loaded script.
    fn dispatch(&mut self, stmt: &str, script: &Script, index: usize) -> Result<Flow> {
        match parse(stmt)? {
            Command::Set { name, value } => {
                self.vars.store(&name, value);
                Ok(Flow::Advance)
            }
            Command::Echo(text) => {
                self.console.print(&text);
                Ok(Flow::Advance)
            }
            Command::Cls => {
                self.console.clear();
                Ok(Flow::Advance)
            }
            Command::Timeout(seconds) => {
                self.console.sleep(seconds);
                Ok(Flow::Advance)
            }
            Command::Dir { path, recursive } => {
                cmd::dir(self.console, &path, recursive)?;
                Ok(Flow::Advance)
            }
            Command::Del(path) => {
                cmd::del(self.console, &path)?;
                Ok(Flow::Advance)
            }
            Command::Copy { src, dst } => {
                cmd::copy(self.console, &src, &dst)?;
                Ok(Flow::Advance)
            }
            Command::Mkdir(path) => {
                cmd::mkdir(self.console, &path)?;
                Ok(Flow::Advance)
            }
            Command::Move { src, dst } => {
                cmd::mv(self.console, &src, &dst)?;
                Ok(Flow::Advance)
            }
            Command::Ren { old, new } => {
                cmd::ren(self.console, &old, &new)?;
                Ok(Flow::Advance)
            }
            Command::For { var, values, body } => {
                self.run_for(&var, values, &body, script, index)
            }
            Command::If { cond, body } => {
                if cond.eval() {
                    self.dispatch(&body, script, index)
                } else {
                    Ok(Flow::Advance)
                }
            }
            Command::Goto(label) => match script.label(&label) {
                Some(index) => Ok(Flow::Jump(index)),
                None => Err(error!(UndefinedLabel; label)),
            },
            Command::Call(path) => self.run_call(&path),
            Command::Shift => {
                if self.args.is_empty() {
                    self.console.print("No arguments to shift.");
                } else {
                    self.args.remove(0);
                    self.console.print("Shifted arguments.");
                }
                Ok(Flow::Advance)
            }
            Command::Pause => {
                self.console.pause();
                Ok(Flow::Advance)
            }
        }
    }

    /// Bind the loop variable and dispatch the body once per value, in
    /// list order. The body is substituted again each iteration so the
    /// fresh binding is visible. A failing iteration is reported and the
    /// next value still runs; only a jump or BREAK ends the loop early.
    /// The binding stays after the loop either way.
    fn run_for(
        &mut self,
        var: &str,
        values: Vec<String>,
        body: &str,
        script: &Script,
        index: usize,
    ) -> Result<Flow> {
        for value in values {
            self.vars.store(var, value);
            let text = self.vars.substitute(body);
            match self.dispatch(&text, script, index) {
                Ok(Flow::Advance) => {}
                Ok(Flow::Jump(target)) => return Ok(Flow::Jump(target)),
                Err(e) if e.is_break() => return Err(e),
                Err(e) => self.console.error(&e.in_line(index)),
            }
        }
        Ok(Flow::Advance)
    }

    /// Load and run another script to completion, sharing the variable
    /// store and argument list, then resume on the line after `call`.
    fn run_call(&mut self, path: &str) -> Result<Flow> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(error!(OutOfMemory; "CALL NESTING TOO DEEP"));
        }
        let script = Script::load(Path::new(path))?;
        self.depth += 1;
        let result = self.run(&script);
        self.depth -= 1;
        result?;
        Ok(Flow::Advance)
    }
}
