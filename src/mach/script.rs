use crate::error;
use crate::lang::{Error, Line};
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// ## A loaded script
///
/// The ordered line table plus the label index, built once at load and
/// immutable afterwards. Labels are static: the index is never rescanned
/// during execution, and a duplicate label resolves to its last occurrence.

#[derive(Debug)]
pub struct Script {
    lines: Vec<Line>,
    labels: HashMap<String, usize>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Script> {
        if !path.is_file() {
            return Err(error!(FileNotFound; path.display().to_string()));
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| error!(FileError; format!("{}: {}", path.display(), e)))?;
        Ok(Script::from_source(&source))
    }

    pub fn from_source(source: &str) -> Script {
        let lines: Vec<Line> = source.lines().map(Line::from_str).collect();
        let mut labels = HashMap::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(name) = line.label() {
                labels.insert(name.to_string(), index);
            }
        }
        Script { lines, labels }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}
