/*!
Behavioral switches for a parser.

A configuration is normally assembled by the optstring compiler (behavior
prefixes plus the `POSIXLY_CORRECT` probe) and frozen into the parser at
construction. [`Parser::set_config`][crate::Parser::set_config] exists for
the internal long-only mode, which may coexist with short options even
though the long-only constructor refuses an optstring.
*/

/// Policy for non-option tokens encountered while options remain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Buffer non-options and append them to the residue once iteration
    /// ends, so options may appear anywhere on the command line.
    #[default]
    Permute,
    /// Stop at the first non-option, leaving it and everything after it in
    /// the residue (POSIX behavior).
    Stop,
    /// Yield each non-option as a synthetic option named
    /// [`NON_OPTION`][crate::NON_OPTION].
    Emit,
}

/// The recognized behavioral switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Suppress the error sink. Errors are still returned through the
    /// stream; only reporting is silenced.
    pub silent_errors: bool,
    /// Case-insensitive matching of short options (ASCII).
    pub fold_short: bool,
    /// Case-insensitive matching of long options (ASCII).
    pub fold_long: bool,
    /// Accept single-dash multi-character tokens as long options.
    pub long_only: bool,
    /// Rewrite `-W word` to the long option `word`.
    pub gnu_words: bool,
    /// Case-insensitive subcommand lookup.
    pub fold_commands: bool,
    /// Policy for non-option tokens.
    pub mode: ParseMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            silent_errors: false,
            fold_short: false,
            fold_long: true,
            long_only: false,
            gnu_words: false,
            fold_commands: false,
            mode: ParseMode::Permute,
        }
    }
}
