//! Compiled regular expressions as first-class operands.

use crate::error::{MatchError, Result};
use fancy_regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Pattern flag set.
///
/// `global` does not change what [`Pattern::test`] accepts; it only takes part
/// in pattern equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PatternFlags {
    pub global: bool,
    pub multiline: bool,
    pub ignore_case: bool,
}

impl PatternFlags {
    /// Parse a flag string such as `"gi"`.
    pub fn parse(flags: &str) -> Result<Self> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            match flag {
                'g' => parsed.global = true,
                'm' => parsed.multiline = true,
                'i' => parsed.ignore_case = true,
                other => return Err(MatchError::InvalidFlag(other)),
            }
        }
        Ok(parsed)
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        Ok(())
    }
}

/// A compiled pattern with its source text and flags.
///
/// Two patterns are the same definition when source and flags agree,
/// regardless of whether they share a compiled regex.
#[derive(Clone)]
pub struct Pattern {
    source: Arc<str>,
    flags: PatternFlags,
    regex: Arc<Regex>,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        Self::with_flags(source, PatternFlags::default())
    }

    pub fn with_flags(source: &str, flags: PatternFlags) -> Result<Self> {
        // Flags go in as an inline group so the stored source stays as written.
        let mut compiled = String::with_capacity(source.len() + 6);
        match (flags.ignore_case, flags.multiline) {
            (true, true) => compiled.push_str("(?im)"),
            (true, false) => compiled.push_str("(?i)"),
            (false, true) => compiled.push_str("(?m)"),
            (false, false) => {}
        }
        compiled.push_str(source);

        let regex = Regex::new(&compiled)
            .map_err(|e| MatchError::InvalidPattern(format!("{source}: {e}")))?;

        Ok(Self {
            source: Arc::from(source),
            flags,
            regex: Arc::new(regex),
        })
    }

    /// Parse a literal of the form `/source/flags`.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        let body = literal
            .strip_prefix('/')
            .ok_or_else(|| MatchError::InvalidPattern(literal.to_string()))?;
        let end = body
            .rfind('/')
            .ok_or_else(|| MatchError::InvalidPattern(literal.to_string()))?;
        let flags = PatternFlags::parse(&body[end + 1..])?;
        Self::with_flags(&body[..end], flags)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Whether the pattern matches anywhere in `text`.
    ///
    /// Fails only when a backtracking pattern exhausts its step budget.
    pub fn test(&self, text: &str) -> Result<bool> {
        self.regex
            .is_match(text)
            .map_err(|e| MatchError::PatternExecution(format!("{self}: {e}")))
    }

    pub fn same_definition(&self, other: &Pattern) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}
