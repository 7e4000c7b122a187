/// ## One raw script line
///
/// Lines are trimmed when loaded and classified by their leading text:
/// blank, comment (`::` or a leading `rem` token), label (`:name`),
/// or statement. Only statements reach the dispatcher.

#[derive(Debug, PartialEq)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn from_str(s: &str) -> Line {
        Line {
            text: s.trim().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.text.starts_with("::") || self.text.split_whitespace().next() == Some("rem")
    }

    /// Label name for a `:name` line. `::` is a comment, not a label,
    /// and a bare `:` defines nothing.
    pub fn label(&self) -> Option<&str> {
        if self.is_comment() || !self.text.starts_with(':') {
            return None;
        }
        let name = self.text[1..].trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn is_statement(&self) -> bool {
        !self.is_blank() && !self.is_comment() && !self.text.starts_with(':')
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert!(Line::from_str("").is_blank());
        assert!(Line::from_str("  \t ").is_blank());
        assert!(!Line::from_str("  \t ").is_statement());
    }

    #[test]
    fn test_comment() {
        assert!(Line::from_str(":: a comment").is_comment());
        assert!(Line::from_str("rem a comment").is_comment());
        assert!(Line::from_str("rem").is_comment());
        assert!(!Line::from_str("remark x").is_comment());
        assert!(Line::from_str("remark x").is_statement());
    }

    #[test]
    fn test_label() {
        assert_eq!(Line::from_str(":main").label(), Some("main"));
        assert_eq!(Line::from_str("  : main ").label(), Some("main"));
        assert_eq!(Line::from_str("::main").label(), None);
        assert_eq!(Line::from_str(":").label(), None);
        assert!(!Line::from_str(":main").is_statement());
        assert!(!Line::from_str(":").is_statement());
    }

    #[test]
    fn test_statement() {
        let line = Line::from_str("  echo hello ");
        assert!(line.is_statement());
        assert_eq!(line.text(), "echo hello");
    }
}
