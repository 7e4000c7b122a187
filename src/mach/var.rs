use std::collections::HashMap;

/// ## Variable memory
///
/// Names are case-sensitive and values are always strings. Substitution is
/// a literal text pass: every `%NAME%` with a binding is replaced, unbound
/// references stay verbatim. Names are applied longest-first so a variable
/// that is a substring of another never corrupts the longer reference.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn store(&mut self, name: &str, value: String) {
        self.vars.insert(name.to_string(), value);
    }

    pub fn fetch(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn substitute(&self, text: &str) -> String {
        if !text.contains('%') {
            return text.to_string();
        }
        let mut names: Vec<&String> = self.vars.keys().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let mut out = text.to_string();
        for name in names {
            let marker = format!("%{}%", name);
            if out.contains(&marker) {
                out = out.replace(&marker, &self.vars[name.as_str()]);
            }
        }
        out
    }
}
