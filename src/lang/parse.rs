use super::{Condition, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## One parsed statement
///
/// Produced from a substituted line by [`parse`] and consumed by a single
/// dispatch step. The payload for each kind is already split per that
/// command's argument contract; bodies of `for` and `if` stay raw because
/// they are dispatched again as whole statements.
#[derive(Debug, PartialEq)]
pub enum Command {
    Set { name: String, value: String },
    Echo(String),
    Cls,
    Timeout(u64),
    Dir { path: String, recursive: bool },
    Del(String),
    Copy { src: String, dst: String },
    Mkdir(String),
    Move { src: String, dst: String },
    Ren { old: String, new: String },
    For { var: String, values: Vec<String>, body: String },
    If { cond: Condition, body: String },
    Goto(String),
    Call(String),
    Shift,
    Pause,
}

/// Classify one substituted statement. The command keyword is the first
/// whitespace-delimited token, matched exactly: `dirt x` is an unknown
/// command, never `dir` with a mangled argument.
pub fn parse(stmt: &str) -> Result<Command> {
    let stmt = stmt.trim();
    let mut split = stmt.splitn(2, char::is_whitespace);
    let keyword = split.next().unwrap_or("");
    let tail = split.next().unwrap_or("").trim();
    match keyword {
        "set" => parse_set(tail),
        "echo" => Ok(Command::Echo(tail.to_string())),
        "cls" => Ok(Command::Cls),
        "timeout" => parse_timeout(tail),
        "dir" => Ok(parse_dir(tail)),
        "del" => Ok(Command::Del(required(tail)?)),
        "copy" => {
            let (src, dst) = pair(tail)?;
            Ok(Command::Copy { src, dst })
        }
        "mkdir" => Ok(Command::Mkdir(required(tail)?)),
        "move" => {
            let (src, dst) = pair(tail)?;
            Ok(Command::Move { src, dst })
        }
        "ren" => {
            let (old, new) = pair(tail)?;
            Ok(Command::Ren { old, new })
        }
        "for" => parse_for(tail),
        "if" => parse_if(tail),
        "goto" => Ok(Command::Goto(required(tail)?)),
        "call" => Ok(Command::Call(required(tail)?)),
        "shift" => Ok(Command::Shift),
        "pause" => Ok(Command::Pause),
        _ => Err(error!(UnknownCommand; stmt.to_string())),
    }
}

fn required(tail: &str) -> Result<String> {
    if tail.is_empty() {
        Err(error!(SyntaxError; "MISSING ARGUMENT"))
    } else {
        Ok(tail.to_string())
    }
}

/// `SRC DST` split on the first run of whitespace.
fn pair(tail: &str) -> Result<(String, String)> {
    let mut split = tail.splitn(2, char::is_whitespace);
    match (split.next(), split.next()) {
        (Some(a), Some(b)) if !b.trim().is_empty() => {
            Ok((a.to_string(), b.trim().to_string()))
        }
        _ => Err(error!(SyntaxError; tail.to_string())),
    }
}

fn parse_set(tail: &str) -> Result<Command> {
    let mut split = tail.splitn(2, '=');
    match (split.next(), split.next()) {
        (Some(name), Some(value)) if !name.trim().is_empty() => Ok(Command::Set {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        }),
        _ => Err(error!(SyntaxError; tail.to_string())),
    }
}

fn parse_timeout(tail: &str) -> Result<Command> {
    let token = tail.split_whitespace().next().unwrap_or("");
    match token.parse::<u64>() {
        Ok(seconds) => Ok(Command::Timeout(seconds)),
        Err(_) => Err(error!(SyntaxError; format!("BAD DELAY {:?}", token))),
    }
}

fn parse_dir(tail: &str) -> Command {
    let recursive = tail.split_whitespace().any(|t| t == "/s");
    let path: Vec<&str> = tail.split_whitespace().filter(|t| *t != "/s").collect();
    let path = if path.is_empty() {
        ".".to_string()
    } else {
        path.join(" ")
    };
    Command::Dir { path, recursive }
}

/// `VAR in V1 V2 ... do COMMAND`, split on the first ` do ` then ` in `.
fn parse_for(tail: &str) -> Result<Command> {
    let (head, body) = match split_once_str(tail, " do ") {
        Some(parts) => parts,
        None => return Err(error!(SyntaxError; "FOR WITHOUT DO")),
    };
    let (var, list) = match split_once_str(head, " in ") {
        Some(parts) => parts,
        None => return Err(error!(SyntaxError; "FOR WITHOUT IN")),
    };
    let var = var.trim();
    let body = body.trim();
    if var.is_empty() || var.split_whitespace().count() != 1 || body.is_empty() {
        return Err(error!(SyntaxError; tail.to_string()));
    }
    Ok(Command::For {
        var: var.to_string(),
        values: list.split_whitespace().map(String::from).collect(),
        body: body.to_string(),
    })
}

/// `CONDITION then COMMAND`, split on the first ` then `.
fn parse_if(tail: &str) -> Result<Command> {
    let (cond, body) = match split_once_str(tail, " then ") {
        Some(parts) => parts,
        None => return Err(error!(SyntaxError; "IF WITHOUT THEN")),
    };
    let body = body.trim();
    if body.is_empty() {
        return Err(error!(SyntaxError; tail.to_string()));
    }
    Ok(Command::If {
        cond: Condition::from_str(cond)?,
        body: body.to_string(),
    })
}

fn split_once_str<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let pos = s.find(sep)?;
    Some((&s[..pos], &s[pos + sep.len()..]))
}
