/*!
The option vocabulary: the argument-kind of a registered flag, and the
record the iterator yields for every recognized option.
*/

use core::fmt;

use crate::error::Error;

/// Synthetic option name carried by non-option tokens when the parser runs
/// in [`ParseMode::Emit`][crate::ParseMode::Emit].
pub const NON_OPTION: &str = "\u{1}";

/// Whether a flag refuses, requires, or merely accepts a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// The flag never takes a value.
    #[default]
    None,
    /// The flag always takes a value.
    Required,
    /// The flag takes a value when one is attached or available.
    Optional,
}

impl ArgKind {
    /// The numeric registration code, for callers that drive registration
    /// from integer tables.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            ArgKind::None => 0,
            ArgKind::Required => 1,
            ArgKind::Optional => 2,
        }
    }
}

impl TryFrom<u8> for ArgKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        match code {
            0 => Ok(ArgKind::None),
            1 => Ok(ArgKind::Required),
            2 => Ok(ArgKind::Optional),
            n => Err(Error::UnknownArgKind(n)),
        }
    }
}

/**
A single recognized option.

`name` is the matched flag's registered spelling (a single character for
short options). `has_arg` is true iff a value was bound, regardless of
whether the flag's kind was `Required` or `Optional`; `arg` is that value,
empty when nothing was bound.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opt {
    pub name: String,
    pub has_arg: bool,
    pub arg: String,
}

impl Opt {
    pub(crate) fn flag(name: impl Into<String>) -> Self {
        Opt {
            name: name.into(),
            has_arg: false,
            arg: String::new(),
        }
    }

    pub(crate) fn with_arg(name: impl Into<String>, arg: impl Into<String>) -> Self {
        Opt {
            name: name.into(),
            has_arg: true,
            arg: arg.into(),
        }
    }

    pub(crate) fn non_option(token: impl Into<String>) -> Self {
        Opt::with_arg(NON_OPTION, token)
    }

    /// Is this the option registered under `name`?
    #[inline]
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Is this a synthetic non-option yielded in `Emit` mode?
    #[inline]
    #[must_use]
    pub fn is_non_option(&self) -> bool {
        self.name == NON_OPTION
    }
}

/**
The option as a single re-parsable command-line token: `--name=value` or
`-cvalue` when a value was bound, the bare dashed name otherwise. A
synthetic non-option displays as its original token.

Parsing the displayed token with the same configuration recognizes the
same option again.
*/
impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_non_option() {
            return f.write_str(&self.arg);
        }
        let short = self.name.chars().count() == 1;
        match (short, self.has_arg) {
            (true, true) => write!(f, "-{}{}", self.name, self.arg),
            (true, false) => write!(f, "-{}", self.name),
            (false, true) => write!(f, "--{}={}", self.name, self.arg),
            (false, false) => write!(f, "--{}", self.name),
        }
    }
}
