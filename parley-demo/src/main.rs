//! A small bookmark-manager-shaped CLI exercising the parser tree:
//! global options, two subcommands with their own options, aliases, and
//! option inheritance through the dispatch chain.
//!
//! Try:
//!
//! ```text
//! parley-demo -v add -t rust --title 'The Book' https://doc.rust-lang.org
//! parley-demo ls --sort date -v
//! ```

use anyhow::Result;
use parley::{ArgKind, Parser};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let root = Parser::getopt(std::env::args().skip(1), "v")?;
    root.add_long("color", ArgKind::Optional)?;

    let add = Parser::getopt(Vec::<String>::new(), "t:")?;
    add.add_long("title", ArgKind::Required)?;

    let list = Parser::new(Vec::<String>::new());
    list.add_long("sort", ArgKind::Required)?;

    root.add_command("add", &add);
    root.add_command("list", &list);
    root.alias("ls", "list")?;

    let mut verbosity = 0u32;
    drive(&root, &mut verbosity)
}

/// Consume one parser's stream, then descend into the dispatched child, if
/// any. Options the child does not know (like `-v`) resolve through the
/// parent chain, so they may appear after the command name.
fn drive(parser: &Parser, verbosity: &mut u32) -> Result<()> {
    for opt in parser.parse() {
        let opt = opt?;
        match opt.name.as_str() {
            "v" => *verbosity += 1,
            "color" => {
                let scheme = match opt.has_arg {
                    true => opt.arg.as_str(),
                    false => "auto",
                };
                println!("color: {scheme}");
            }
            "t" => println!("tag: {}", opt.arg),
            "title" => println!("title: {}", opt.arg),
            "sort" => println!("sort key: {}", opt.arg),
            name => println!("option: {name}"),
        }
    }

    if let Some(child) = parser.dispatched() {
        return drive(&child, verbosity);
    }

    println!("verbosity: {verbosity}");
    println!("operands: {:?}", parser.args());
    Ok(())
}
