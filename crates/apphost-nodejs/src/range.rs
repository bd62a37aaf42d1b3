//! npm-style version range parsing.
//!
//! A range is one or more `||` alternatives, each a list of clauses that must
//! all hold. Clauses are separated by whitespace or commas:
//!
//! - `>=13.4.0 <15` (two clauses)
//! - `^14.0.0 || ~13.5` (two alternatives)
//! - `1.2 - 1.4.5` (hyphen range, read as `>=1.2 <=1.4.5`)
//!
//! Versions inside clauses may be partial (`14`, `14.1`) or use wildcards
//! (`14.x`, `*`). The original version text is kept so callers can rewrite
//! clauses without re-rendering versions.
//!
//! # Examples
//!
//! ```
//! use apphost_nodejs::range::{Operator, VersionRange};
//!
//! let range = VersionRange::parse(">= 13.0.2, <14.0.15").unwrap();
//! assert_eq!(range.to_string(), ">=13.0.2 <14.0.15");
//! assert_eq!(range.alternatives()[0][1].op(), Operator::Lt);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(\d+|[xX*])(\.(\d+|[xX*]))?(\.(\d+|[xX*]))?(-[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$",
    )
    .unwrap()
});

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator: the bare version itself
    Exact,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=` (also written `=>`)
    Gte,
    /// `<`
    Lt,
    /// `<=` (also written `=<`)
    Lte,
    /// `~` (also written `~>`)
    Tilde,
    /// `^`
    Caret,
}

impl Operator {
    /// Split a leading operator off `token`. Longer spellings are tried first.
    fn split_prefix(token: &str) -> (Self, &str) {
        const SPELLINGS: [(&str, Operator); 11] = [
            (">=", Operator::Gte),
            ("=>", Operator::Gte),
            ("<=", Operator::Lte),
            ("=<", Operator::Lte),
            ("!=", Operator::Ne),
            ("~>", Operator::Tilde),
            (">", Operator::Gt),
            ("<", Operator::Lt),
            ("=", Operator::Eq),
            ("~", Operator::Tilde),
            ("^", Operator::Caret),
        ];
        for (spelling, op) in SPELLINGS {
            if let Some(rest) = token.strip_prefix(spelling) {
                return (op, rest);
            }
        }
        (Operator::Exact, token)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "",
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Tilde => "~",
            Self::Caret => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<operator><version>` comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    op: Operator,
    version: String,
}

impl Clause {
    pub fn new(op: Operator, version: &str) -> Result<Self> {
        if !VERSION_PATTERN.is_match(version) {
            return Err(Error::invalid_range(version, "not a version"));
        }
        Ok(Self {
            op,
            version: version.to_string(),
        })
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    /// The version exactly as written, e.g. `14`, `14.0.15`, `v1.2.x`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The dot-separated components of the version text.
    pub fn components(&self) -> Vec<&str> {
        self.version.split('.').collect()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

/// A parsed range expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    alternatives: Vec<Vec<Clause>>,
}

impl VersionRange {
    pub fn parse(range: &str) -> Result<Self> {
        if range.trim().is_empty() {
            return Err(Error::invalid_range(range, "empty range"));
        }

        let alternatives = range
            .split("||")
            .map(|group| parse_group(range, group))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { alternatives })
    }

    /// `||`-separated alternatives, each a list of AND-ed clauses.
    pub fn alternatives(&self) -> &[Vec<Clause>] {
        &self.alternatives
    }
}

/// Clauses joined by single spaces, alternatives by ` || `.
impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            for (j, clause) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{clause}")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for VersionRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_group(range: &str, group: &str) -> Result<Vec<Clause>> {
    let tokens: Vec<&str> = group
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(Error::invalid_range(range, "empty alternative"));
    }

    let mut clauses = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        if tokens.get(i + 1) == Some(&"-") {
            let upper = tokens
                .get(i + 2)
                .ok_or_else(|| Error::invalid_range(range, "hyphen range without upper bound"))?;
            clauses.push(Clause::new(Operator::Gte, token)?);
            clauses.push(Clause::new(Operator::Lte, upper)?);
            i += 3;
            continue;
        }

        let (op, mut version) = Operator::split_prefix(token);
        if version.is_empty() {
            // operator written apart from its version, e.g. `>= 13.0.2`
            i += 1;
            version = tokens
                .get(i)
                .copied()
                .ok_or_else(|| Error::invalid_range(range, format!("'{token}' has no version")))?;
        }
        clauses.push(Clause::new(op, version)?);
        i += 1;
    }

    Ok(clauses)
}
