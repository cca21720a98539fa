/*!
`parley` recognizes command-line options in the POSIX `getopt(3)` and GNU
`getopt_long(3)` / `getopt_long_only(3)` tradition, and dispatches across a
tree of subcommands whose parsers inherit the options of every ancestor.

It is deliberately unopinionated: no typed value conversion, no help
rendering, no completion. You get a lazy stream of recognized options, the
exact argument residue, and nothing else.

# Example

```
use parley::Parser;

fn main() -> Result<(), parley::Error> {
    let parser = Parser::getopt(["-a", "-b", "value", "input"], "ab:")?;

    for opt in parser.parse() {
        let opt = opt?;
        if opt.is("a") {
            println!("got -a");
        } else if opt.is("b") {
            println!("got -b {}", opt.arg);
        }
    }

    // Non-options are permuted to the residue.
    assert_eq!(parser.args(), ["input"]);
    Ok(())
}
```

# Subcommands

Subcommands form a tree. Iterating a parent stops at a registered command
name and hands the remaining arguments to the child; the child's own
iteration resolves options it does not know through the parent chain:

```
use parley::{ArgKind, Parser};

fn main() -> Result<(), parley::Error> {
    let root = Parser::getopt(["fetch", "-v", "--depth", "3"], "v")?;
    let fetch = Parser::new(Vec::<String>::new());
    fetch.add_long("depth", ArgKind::Required)?;
    root.add_command("fetch", &fetch);

    assert!(root.parse().next().is_none());

    let child = root.dispatched().expect("fetch was named");
    let opts: Vec<_> = child.parse().collect::<Result<_, _>>()?;
    assert_eq!(opts[0].name, "v"); // inherited from the root
    assert_eq!((opts[1].name.as_str(), opts[1].arg.as_str()), ("depth", "3"));
    Ok(())
}
```

# Errors

Errors travel through the stream; iteration continues past them. Parsers
additionally report messages through a pluggable sink (`tracing` by
default) unless configured silent — the two channels are orthogonal.
*/

mod command;
mod config;
mod error;
mod iter;
mod opt;
mod optstring;
mod parser;
mod resolve;

#[doc(hidden)]
pub mod util;

pub use config::{Config, ParseMode};
pub use error::{Error, Sink};
pub use iter::Parse;
pub use opt::{ArgKind, NON_OPTION, Opt};
pub use parser::Parser;
