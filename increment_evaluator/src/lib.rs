use nom::{combinator::map, multi::count};
use util::{parse_number, token, ws, ParseResult, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Increment,
    Decrement,
    Unrecognized(String),
}

impl From<&str> for Statement {
    fn from(s: &str) -> Self {
        match s {
            "++X" | "X++" => Self::Increment,
            "--X" | "X--" => Self::Decrement,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl Statement {
    /// Unrecognized statements leave `x` untouched.
    pub fn delta(&self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
            Self::Unrecognized(s) => {
                log::warn!("ignoring unrecognized statement {s:?}");
                0
            }
        }
    }
}

/// Final value of `x`, starting from 0.
pub fn evaluate(statements: &[Statement]) -> i64 {
    let x: i64 = statements.iter().map(Statement::delta).sum();
    log::debug!("{} statements, x = {x}", statements.len());
    x
}

/// `n` followed by `n` statements.
pub fn parse_statements(i: Span) -> ParseResult<Vec<Statement>> {
    let (i, n) = ws(parse_number::<usize>)(i)?;
    count(ws(map(token, |t: Span| Statement::from(*t.fragment()))), n)(i)
}
