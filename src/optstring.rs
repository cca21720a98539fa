/*!
The optstring compiler: translates a POSIX optstring into a parser
configuration and a short-option table.

```text
optstring := prefix* body
prefix    := ':' | '+' | '-'
body      := item*
item      := char argmark?  |  'W;'
argmark   := ':' | '::'
```

`:` selects silent errors; `+` and `-` select the [`Stop`] and [`Emit`]
non-option policies, the last occurrence winning. Body characters must be
graphic and may not be `:`, `;`, or `-`. Redefinitions overwrite silently.

[`Stop`]: ParseMode::Stop
[`Emit`]: ParseMode::Emit
*/

use std::env;

use crate::config::{Config, ParseMode};
use crate::error::Error;
use crate::opt::ArgKind;
use crate::util::is_graphic;

/// Output of [`compile`]: a configuration and the short table it implies.
#[derive(Debug)]
pub(crate) struct Compiled {
    pub(crate) config: Config,
    pub(crate) shorts: Vec<(char, ArgKind)>,
}

impl Compiled {
    /// True when the optstring had a body: it registered short options or
    /// enabled the `-W` mechanism. The long-only constructor rejects such
    /// optstrings.
    pub(crate) fn has_body(&self) -> bool {
        !self.shorts.is_empty() || self.config.gnu_words
    }
}

/// Compile `optstring` into a configuration and short-option table.
///
/// A non-empty `POSIXLY_CORRECT` environment variable selects the `Stop`
/// policy before the behavior prefix is consumed, so an explicit `-` prefix
/// still overrides it.
pub(crate) fn compile(optstring: &str) -> Result<Compiled, Error> {
    let mut config = Config::default();
    if posixly_correct() {
        config.mode = ParseMode::Stop;
    }

    let mut chars = optstring.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            ':' => config.silent_errors = true,
            '+' => config.mode = ParseMode::Stop,
            '-' => config.mode = ParseMode::Emit,
            _ => break,
        }
        chars.next();
    }

    let mut shorts: Vec<(char, ArgKind)> = Vec::new();
    while let Some(c) = chars.next() {
        match c {
            ':' | ';' | '-' => return Err(Error::ProhibitedShortOption(c)),
            c if !is_graphic(c) => return Err(Error::InvalidShortOption(c)),
            'W' if chars.peek() == Some(&';') => {
                chars.next();
                // GNU `W;`: enable the `-W word` rewrite. `-W` itself takes
                // a required argument, the word.
                config.gnu_words = true;
                define(&mut shorts, 'W', ArgKind::Required);
            }
            c => {
                let kind = match chars.peek() {
                    Some(&':') => {
                        chars.next();
                        match chars.peek() {
                            Some(&':') => {
                                chars.next();
                                ArgKind::Optional
                            }
                            _ => ArgKind::Required,
                        }
                    }
                    _ => ArgKind::None,
                };
                define(&mut shorts, c, kind);
            }
        }
    }

    Ok(Compiled { config, shorts })
}

/// Insert or overwrite a short definition. The last definition wins.
pub(crate) fn define(shorts: &mut Vec<(char, ArgKind)>, c: char, kind: ArgKind) {
    match shorts.iter_mut().find(|(key, _)| *key == c) {
        Some((_, slot)) => *slot = kind,
        None => shorts.push((c, kind)),
    }
}

fn posixly_correct() -> bool {
    env::var_os("POSIXLY_CORRECT").is_some_and(|value| !value.is_empty())
}
