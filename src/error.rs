/*!
The error vocabulary and the pluggable reporting sink.

Every error is returned through the parse stream; the sink only mirrors the
message for parsers that have not opted into silence. The display strings
below are stable: applications match on them or pass them through.
*/

use std::rc::Rc;

/// Everything that can go wrong while configuring a parser, recognizing
/// options, or dispatching to a subcommand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No registered option matched the input token.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A `Required`-argument option had no value to bind.
    #[error("option requires an argument: {0}")]
    MissingArgument(String),

    /// `-` appeared as an option character inside a short cluster.
    #[error("invalid option: -")]
    InvalidDash,

    /// A numeric argument-kind code was out of range.
    #[error("unknown argument type: {0}")]
    UnknownArgKind(u8),

    /// A short option character was not graphic.
    #[error("invalid short option: {0}")]
    InvalidShortOption(char),

    /// A short option character was one of `:`, `;`, `-`.
    #[error("prohibited short option: {0}")]
    ProhibitedShortOption(char),

    /// A long option name was empty or contained a non-graphic character.
    #[error("invalid long option: {0}")]
    InvalidLongOption(String),

    /// Lookup or execution of a command name that is not registered.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command name is registered but carries no parser.
    #[error("command {0} has no parser")]
    CommandWithoutParser(String),

    /// An alias referred to a target that does not exist.
    #[error("command {0} does not exist")]
    NoSuchCommand(String),

    /// A long-only constructor was handed an optstring with a body.
    #[error("long-only parser does not accept an optstring: {0}")]
    LongOnlyOptstring(String),
}

/// Destination for error messages when a parser is not silent.
///
/// Shared (`Rc`) so a sink can be handed to several parsers in a tree; the
/// iterator clones the handle out of the parser before invoking it.
pub type Sink = Rc<dyn Fn(&Error)>;

/// The default sink reports through the `tracing` error level.
pub(crate) fn default_sink() -> Sink {
    Rc::new(|err| tracing::error!("{err}"))
}
