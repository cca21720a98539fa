//! `POSIXLY_CORRECT` is read at optstring-compile time and is process-wide
//! state, so this suite lives in its own test binary with a single test.

use std::env;

use parley::{ParseMode, Parser};

#[test]
fn test_posixly_correct_selects_stop_mode() {
    unsafe { env::set_var("POSIXLY_CORRECT", "1") };
    let parser = Parser::getopt(["-a", "x", "-b"], "ab").unwrap();
    assert_eq!(parser.config().mode, ParseMode::Stop);

    let yielded: Vec<_> = parser
        .parse()
        .map(|opt| opt.unwrap().name)
        .collect();
    assert_eq!(yielded, ["a"]);
    assert_eq!(parser.args(), ["x", "-b"]);

    // An explicit `-` prefix still overrides the environment.
    let parser = Parser::getopt(Vec::<String>::new(), "-a").unwrap();
    assert_eq!(parser.config().mode, ParseMode::Emit);

    // Only a non-empty value counts.
    unsafe { env::set_var("POSIXLY_CORRECT", "") };
    let parser = Parser::getopt(Vec::<String>::new(), "a").unwrap();
    assert_eq!(parser.config().mode, ParseMode::Permute);

    unsafe { env::remove_var("POSIXLY_CORRECT") };
}
