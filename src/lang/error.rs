use super::LineIndex;

pub struct Error {
    code: u16,
    line: LineIndex,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line: None,
            message: String::new(),
        }
    }

    pub fn is_break(&self) -> bool {
        self.code == ErrorCode::Break as u16
    }

    pub fn in_line(self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            code: self.code,
            line: Some(line),
            message: self.message,
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            line: self.line,
            message: message.into(),
        }
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    Break = 3,
    OutOfMemory = 7,
    UndefinedLabel = 8,
    UnknownCommand = 21,
    InternalError = 51,
    FileNotFound = 53,
    FileError = 57,
    FileExists = 58,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "BREAK",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LABEL",
            21 => "UNKNOWN COMMAND",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "FILE I/O ERROR",
            58 => "FILE ALREADY EXISTS",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" IN LINE {}", line + 1));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "SCRIPT ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
