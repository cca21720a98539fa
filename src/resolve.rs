/*!
Option resolution over the parser chain.

Both resolvers walk from the requesting parser toward the root. Short
options take the first match on that walk. Long options collect candidates
from the whole chain and pick the longest registered name that is a valid
prefix of the input token, where "valid" means the name runs to the end of
the token or stops at an `=`. Registered names may themselves contain `=`,
so the token is never pre-split; instead the `=` positions enumerate the
only boundaries a shorter candidate may stop at.
*/

use std::collections::VecDeque;
use std::mem;

use crate::error::Error;
use crate::opt::{ArgKind, Opt};
use crate::parser::Parser;
use crate::util::{has_prefix, trim_prefix};

/// Resolve a long-option token (leading dashes already stripped, any
/// `=value` still attached) against the chain. `rest` is the remaining
/// argument vector, consulted for `--name value` forms.
pub(crate) fn long(
    chain: &[Parser],
    name: &str,
    rest: &mut VecDeque<String>,
) -> Result<Opt, Error> {
    let mut candidates: Vec<(String, ArgKind, bool)> = Vec::new();
    for parser in chain {
        let node = parser.node.borrow();
        let fold = node.config.fold_long;
        for (key, kind) in &node.longs {
            if key.len() <= name.len() && has_prefix(name, key, fold) {
                candidates.push((key.clone(), *kind, fold));
            }
        }
    }
    // Longest first; the sort is stable, so equal lengths stay in
    // discovery order (the requesting parser's table before ancestors').
    candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let boundaries: Vec<usize> = memchr::memchr_iter(b'=', name.as_bytes()).collect();

    for (key, kind, fold) in candidates {
        if key.len() == name.len() {
            return exact(key, name, kind, rest);
        }
        if !boundaries.contains(&key.len()) {
            continue;
        }
        if kind == ArgKind::None {
            // An `=value` cannot attach to a no-argument option; a shorter
            // candidate may still match at an earlier boundary.
            continue;
        }
        let value = trim_prefix(trim_prefix(name, &key, fold), "=", false);
        return Ok(Opt::with_arg(key, value));
    }

    Err(Error::UnknownOption(name.to_owned()))
}

/// An exact-length match binds its value, if any, from the remaining
/// argument vector.
fn exact(key: String, name: &str, kind: ArgKind, rest: &mut VecDeque<String>) -> Result<Opt, Error> {
    match kind {
        ArgKind::None => Ok(Opt::flag(key)),
        ArgKind::Required => match rest.pop_front() {
            Some(value) => Ok(Opt::with_arg(key, value)),
            None => Err(Error::MissingArgument(name.to_owned())),
        },
        ArgKind::Optional => match rest.pop_front() {
            Some(value) => Ok(Opt::with_arg(key, value)),
            None => Ok(Opt::flag(key)),
        },
    }
}

/// Resolve one character of a short-option cluster.
///
/// `word` is the remaining text of the current token after `c`; an
/// argument-taking option consumes it whole, or falls back to the remaining
/// argument vector when the word is empty.
pub(crate) fn short(
    chain: &[Parser],
    c: char,
    word: &mut String,
    rest: &mut VecDeque<String>,
) -> Result<Opt, Error> {
    if c == '-' {
        return Err(Error::InvalidDash);
    }

    let mut matched: Option<(char, ArgKind)> = None;
    for parser in chain {
        let node = parser.node.borrow();
        let hit = node
            .shorts
            .iter()
            .find(|(key, _)| *key == c)
            .or_else(|| match node.config.fold_short {
                true => node.shorts.iter().find(|(key, _)| *key == flip(c)),
                false => None,
            });
        if let Some(&(key, kind)) = hit {
            matched = Some((key, kind));
            break;
        }
    }

    let Some((key, kind)) = matched else {
        return Err(Error::UnknownOption(c.to_string()));
    };

    match kind {
        ArgKind::None => Ok(Opt::flag(key.to_string())),
        ArgKind::Required => {
            if !word.is_empty() {
                Ok(Opt::with_arg(key.to_string(), mem::take(word)))
            } else if let Some(value) = rest.pop_front() {
                Ok(Opt::with_arg(key.to_string(), value))
            } else {
                Err(Error::MissingArgument(c.to_string()))
            }
        }
        ArgKind::Optional => {
            if !word.is_empty() {
                Ok(Opt::with_arg(key.to_string(), mem::take(word)))
            } else if let Some(value) = rest.pop_front() {
                Ok(Opt::with_arg(key.to_string(), value))
            } else {
                Ok(Opt::flag(key.to_string()))
            }
        }
    }
}

/// The opposite ASCII case of `c`, or `c` itself when it has none.
fn flip(c: char) -> char {
    match c.is_ascii_lowercase() {
        true => c.to_ascii_uppercase(),
        false => c.to_ascii_lowercase(),
    }
}
