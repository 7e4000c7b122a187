/*!
## Terminal Module

The real console: prints script output, styles error reports, clears the
screen and reads the `pause` key press. Also the CLI entry logic wired to
it: argument handling, Ctrl-C, and the process exit code.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate mortal;
use crate::lang::Error;
use crate::mach::{Console, Runtime};
use ansi_term::Style;
use mortal::{Event, PrepareConfig, Terminal};
use std::io::BufRead;
use std::path::Path;
use std::sync::atomic::Ordering;

/// Run the interpreter for `blb <script.blb> [ARGS..]`.
///
/// Only the invocation itself can fail the process: a missing argument or
/// an unloadable script exits 1. Everything a running script reports is
/// non-fatal and the process still exits 0, as does a Ctrl-C BREAK.
pub fn main() -> i32 {
    let mut args = std::env::args().skip(1);
    let script_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: blb <script.blb> [ARGS..]");
            return 1;
        }
    };
    let mut console = Term::new();
    let mut runtime = Runtime::new(&mut console);
    runtime.set_args(args.collect());

    let interrupted = runtime.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    match runtime.run_file(Path::new(&script_path)) {
        Ok(()) => 0,
        Err(error) => {
            if error.is_break() {
                println!("{}", Style::new().bold().paint(error.to_string()));
                0
            } else {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                1
            }
        }
    }
}

/// Console over the process terminal. Falls back to plain line I/O when
/// the terminal can't be opened (output piped to a file, say).
pub struct Term {
    terminal: Option<Terminal>,
}

impl Term {
    pub fn new() -> Term {
        Term {
            terminal: Terminal::new().ok(),
        }
    }
}

impl Default for Term {
    fn default() -> Term {
        Term::new()
    }
}

impl Console for Term {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, error: &Error) {
        println!("{}", Style::new().bold().paint(error.to_string()));
    }

    fn clear(&mut self) {
        if let Some(terminal) = &self.terminal {
            let _ = terminal.clear_screen();
        }
    }

    fn pause(&mut self) {
        println!("Press any key to continue...");
        let raw_key = match &self.terminal {
            Some(terminal) => read_key(terminal).is_ok(),
            None => false,
        };
        if !raw_key {
            let mut line = String::new();
            let _ = std::io::stdin().lock().read_line(&mut line);
        }
    }

    fn sleep(&mut self, seconds: u64) {
        std::thread::sleep(std::time::Duration::from_secs(seconds));
    }
}

fn read_key(terminal: &Terminal) -> std::io::Result<()> {
    let state = terminal.prepare(PrepareConfig::default())?;
    loop {
        match terminal.read_event(None)? {
            Some(Event::Key(_)) | Some(Event::Signal(_)) => break,
            Some(_) | None => continue,
        }
    }
    terminal.restore(state)?;
    Ok(())
}
