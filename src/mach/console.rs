use crate::lang::Error;

/// ## Machine-to-terminal seam
///
/// Everything the machine shows the user or blocks on goes through this
/// trait, keeping the runtime free of terminal concerns and fully testable.
/// The real implementation lives in the `term` module; tests capture.
pub trait Console {
    /// Write one line of script output.
    fn print(&mut self, text: &str);
    /// Report a non-fatal in-script error.
    fn error(&mut self, error: &Error);
    /// Clear the display.
    fn clear(&mut self);
    /// Prompt and block until the user acknowledges with a key press.
    fn pause(&mut self);
    /// Block for a delay of whole seconds.
    fn sleep(&mut self, seconds: u64);
}
