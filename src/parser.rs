/*!
The parser node: configuration, option tables, the argument vector, the
command registry, and the back-link that forms the parent chain.

[`Parser`] is a cheap handle over a shared node; clones refer to the same
parser. Sharing is load-bearing here: a command registry never owns its
targets (aliases share them), and a child keeps a non-owning back-link to
the parser that registered it. Option tables are insertion-ordered so that
the long resolver's tie-break ("discovery order") is exactly registration
order.
*/

use std::cell::RefCell;
use std::env;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::command::Commands;
use crate::config::Config;
use crate::error::{Error, Sink, default_sink};
use crate::iter::Parse;
use crate::opt::ArgKind;
use crate::optstring;
use crate::util::is_graphic;

pub(crate) struct Node {
    pub(crate) config: Config,
    pub(crate) shorts: Vec<(char, ArgKind)>,
    pub(crate) longs: Vec<(String, ArgKind)>,
    pub(crate) args: Vec<String>,
    pub(crate) commands: Commands,
    pub(crate) parent: Weak<RefCell<Node>>,
    pub(crate) sink: Sink,
    pub(crate) dispatched: Option<Parser>,
}

/**
One node of a parser tree.

A parser owns a short-option table, a long-option table, the argument
vector it will consume, and a registry of subcommand names. Iterating with
[`parse`][Parser::parse] drains the vector and leaves the residue (permuted
non-options plus anything after `--`) behind in its place.

Handles are cheap to clone and refer to the same node. A parser registered
as a subcommand gains a non-owning link to its parent, and its resolvers
fall back to ancestor tables for options they do not know.
*/
#[derive(Clone)]
pub struct Parser {
    pub(crate) node: Rc<RefCell<Node>>,
}

impl Parser {
    /// An empty parser over `args` with default configuration and no
    /// registered options.
    ///
    /// The vector is the raw token list, without the program name; the
    /// library never strips a leading element.
    pub fn new<I, S>(args: I) -> Parser
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Parser::with_config(args, Config::default())
    }

    /// A parser over the process arguments, skipping the program name.
    pub fn from_env() -> Parser {
        Parser::new(env::args().skip(1))
    }

    /// `getopt(3)`: compile `optstring` into a configured parser.
    pub fn getopt<I, S>(args: I, optstring: &str) -> Result<Parser, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let compiled = optstring::compile(optstring)?;
        let parser = Parser::with_config(args, compiled.config);
        parser.node.borrow_mut().shorts = compiled.shorts;
        Ok(parser)
    }

    /// `getopt_long(3)`: short options from `optstring`, long options from
    /// the descriptor list.
    pub fn getopt_long<I, S, L, N>(args: I, optstring: &str, longs: L) -> Result<Parser, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        L: IntoIterator<Item = (N, ArgKind)>,
        N: Into<String>,
    {
        let parser = Parser::getopt(args, optstring)?;
        for (name, kind) in longs {
            parser.add_long(name, kind)?;
        }
        Ok(parser)
    }

    /// `getopt_long_only(3)`: single-dash multi-character tokens may match
    /// long options.
    ///
    /// The optstring may carry behavior prefixes but not a body; in
    /// long-only mode short options are only reachable through
    /// [`set_config`][Parser::set_config] plus [`add_short`][Parser::add_short].
    pub fn getopt_long_only<I, S, L, N>(args: I, optstring: &str, longs: L) -> Result<Parser, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        L: IntoIterator<Item = (N, ArgKind)>,
        N: Into<String>,
    {
        let compiled = optstring::compile(optstring)?;
        if compiled.has_body() {
            return Err(Error::LongOnlyOptstring(optstring.to_owned()));
        }
        let mut config = compiled.config;
        config.long_only = true;
        let parser = Parser::with_config(args, config);
        for (name, kind) in longs {
            parser.add_long(name, kind)?;
        }
        Ok(parser)
    }

    fn with_config<I, S>(args: I, config: Config) -> Parser
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Parser {
            node: Rc::new(RefCell::new(Node {
                config,
                shorts: Vec::new(),
                longs: Vec::new(),
                args: args.into_iter().map(Into::into).collect(),
                commands: Commands::default(),
                parent: Weak::new(),
                sink: default_sink(),
                dispatched: None,
            })),
        }
    }

    /// Register (or silently overwrite) a short option.
    ///
    /// The character must be graphic and may not be `:`, `;`, or `-`.
    pub fn add_short(&self, c: char, kind: ArgKind) -> Result<(), Error> {
        match c {
            ':' | ';' | '-' => return Err(Error::ProhibitedShortOption(c)),
            c if !is_graphic(c) => return Err(Error::InvalidShortOption(c)),
            _ => {}
        }
        optstring::define(&mut self.node.borrow_mut().shorts, c, kind);
        Ok(())
    }

    /// Register (or silently overwrite) a long option.
    ///
    /// Names may contain any graphic characters, `=` included.
    pub fn add_long(&self, name: impl Into<String>, kind: ArgKind) -> Result<(), Error> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(is_graphic) {
            return Err(Error::InvalidLongOption(name));
        }
        let mut node = self.node.borrow_mut();
        match node.longs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = kind,
            None => node.longs.push((name, kind)),
        }
        Ok(())
    }

    /// Register a subcommand name.
    ///
    /// `child` may be `None`, reserving the name; dispatching to a reserved
    /// name is an error. Registering a live child installs its parent link,
    /// which is never mutated afterwards.
    pub fn add_command<'p>(&self, name: impl Into<String>, child: impl Into<Option<&'p Parser>>) {
        let child = child.into().cloned();
        if let Some(ref child) = child
            && !Rc::ptr_eq(&child.node, &self.node)
        {
            child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        }
        self.node.borrow_mut().commands.insert(name.into(), child);
    }

    /// Define `alias` as another name for the registered command `target`.
    pub fn alias(&self, alias: impl Into<String>, target: &str) -> Result<(), Error> {
        self.node.borrow_mut().commands.alias(alias.into(), target)
    }

    /// Every registered command and alias name, in registration order.
    pub fn commands(&self) -> Vec<String> {
        self.node.borrow().commands.names()
    }

    /// Every name (primary registration and aliases alike) that maps to
    /// `target`'s parser.
    pub fn aliases_of(&self, target: &Parser) -> Vec<String> {
        self.node.borrow().commands.aliases_of(target)
    }

    /// Hand `args` to the named command's parser, clearing any residue it
    /// held, and return its handle.
    pub fn execute<I, S>(&self, name: &str, args: I) -> Result<Parser, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let found = {
            let node = self.node.borrow();
            node.commands.find(name, node.config.fold_commands)
        };
        match found {
            None => Err(Error::UnknownCommand(name.to_owned())),
            Some(None) => Err(Error::CommandWithoutParser(name.to_owned())),
            Some(Some(child)) => {
                child.set_args(args);
                Ok(child)
            }
        }
    }

    /// Begin lazy iteration over the argument vector.
    ///
    /// The stream yields options in left-to-right order; when it ends (or
    /// the iterator is dropped early) the vector holds the residue.
    pub fn parse(&self) -> Parse {
        Parse::new(self.clone())
    }

    /// The child that received the remaining arguments when iteration hit a
    /// subcommand name, if any. Cleared by the next call to
    /// [`parse`][Parser::parse].
    pub fn dispatched(&self) -> Option<Parser> {
        self.node.borrow().dispatched.clone()
    }

    /// The current argument vector: the input before iteration, the residue
    /// after.
    pub fn args(&self) -> Vec<String> {
        self.node.borrow().args.clone()
    }

    /// Install a new argument vector, clearing any dispatch record.
    pub fn set_args<I, S>(&self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = self.node.borrow_mut();
        node.args = args.into_iter().map(Into::into).collect();
        node.dispatched = None;
    }

    /// The parser's configuration.
    pub fn config(&self) -> Config {
        self.node.borrow().config
    }

    /// Replace the configuration wholesale.
    pub fn set_config(&self, config: Config) {
        self.node.borrow_mut().config = config;
    }

    /// Replace the error sink invoked for non-silent parse errors.
    pub fn set_error_sink(&self, sink: impl Fn(&Error) + 'static) {
        self.node.borrow_mut().sink = Rc::new(sink);
    }

    /// The chain of parsers from `self` to the root, nearest first.
    pub(crate) fn chain(&self) -> Vec<Parser> {
        let mut chain = vec![self.clone()];
        let mut next = self.node.borrow().parent.upgrade();
        while let Some(node) = next {
            next = node.borrow().parent.upgrade();
            chain.push(Parser { node });
        }
        chain
    }

    /// Do two handles refer to the same node?
    pub(crate) fn same_node(&self, other: &Parser) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("Parser")
            .field("args", &node.args)
            .field("shorts", &node.shorts.len())
            .field("longs", &node.longs.len())
            .field("commands", &node.commands.names())
            .finish()
    }
}
