use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Restricted condition grammar for `if`
///
/// A condition is exactly one comparison: `LHS op RHS` where op is one of
/// `==` `!=` `<=` `>=` `<` `>`. Operands are compared numerically when both
/// parse as numbers and lexicographically otherwise. Nothing else is a
/// condition; there is no expression language behind this.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CmpOp {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

#[derive(Debug, PartialEq)]
pub struct Condition {
    lhs: String,
    op: CmpOp,
    rhs: String,
}

const OPS_WIDE: [(&str, CmpOp); 4] = [
    ("<=", CmpOp::Le),
    (">=", CmpOp::Ge),
    ("==", CmpOp::Eq),
    ("!=", CmpOp::Ne),
];
const OPS_NARROW: [(&str, CmpOp); 2] = [("<", CmpOp::Lt), (">", CmpOp::Gt)];

impl Condition {
    pub fn from_str(s: &str) -> Result<Condition> {
        let (pos, token, op) = find_op(s).ok_or_else(|| error!(SyntaxError; s.to_string()))?;
        let lhs = operand(&s[..pos]);
        let rhs = operand(&s[pos + token.len()..]);
        if lhs.is_empty() || rhs.is_empty() {
            return Err(error!(SyntaxError; s.to_string()));
        }
        Ok(Condition { lhs, op, rhs })
    }

    pub fn eval(&self) -> bool {
        let ordering = match (self.lhs.parse::<f64>(), self.rhs.parse::<f64>()) {
            (Ok(l), Ok(r)) => l.partial_cmp(&r),
            _ => Some(self.lhs.as_str().cmp(self.rhs.as_str())),
        };
        let ordering = match ordering {
            Some(ordering) => ordering,
            None => return false, // NaN compares false to everything
        };
        match self.op {
            CmpOp::Eq => ordering == std::cmp::Ordering::Equal,
            CmpOp::Ne => ordering != std::cmp::Ordering::Equal,
            CmpOp::Lt => ordering == std::cmp::Ordering::Less,
            CmpOp::Gt => ordering == std::cmp::Ordering::Greater,
            CmpOp::Le => ordering != std::cmp::Ordering::Greater,
            CmpOp::Ge => ordering != std::cmp::Ordering::Less,
        }
    }
}

/// Earliest operator occurrence wins; at equal positions the two-character
/// form wins, so `<=` never parses as `<`.
fn find_op(s: &str) -> Option<(usize, &'static str, CmpOp)> {
    let mut best: Option<(usize, &'static str, CmpOp)> = None;
    for &(token, op) in OPS_WIDE.iter().chain(OPS_NARROW.iter()) {
        if let Some(pos) = s.find(token) {
            match best {
                Some((best_pos, _, _)) if best_pos <= pos => {}
                _ => best = Some((pos, token, op)),
            }
        }
    }
    best
}

/// Trim an operand and strip one pair of surrounding double quotes.
fn operand(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
