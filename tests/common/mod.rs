use blb::lang::Error;
use blb::mach::{Console, Runtime, Script};

/// Console that records everything a script shows, one entry per line.
/// Blocking commands record a marker instead of blocking.
#[derive(Default)]
pub struct Capture {
    pub lines: Vec<String>,
}

impl Capture {
    pub fn new() -> Capture {
        Capture::default()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Console for Capture {
    fn print(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
    fn error(&mut self, error: &Error) {
        self.lines.push(format!("?{}", error));
    }
    fn clear(&mut self) {
        self.lines.push("[cls]".to_string());
    }
    fn pause(&mut self) {
        self.lines.push("[pause]".to_string());
    }
    fn sleep(&mut self, seconds: u64) {
        self.lines.push(format!("[sleep {}]", seconds));
    }
}

/// Run a script source to completion and return its captured output.
#[allow(dead_code)]
pub fn run(source: &str) -> String {
    let mut console = Capture::new();
    let script = Script::from_source(source);
    Runtime::new(&mut console).run(&script).unwrap();
    console.text()
}
