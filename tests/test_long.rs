use parley::{ArgKind, Error, Parser};

fn opts(parser: &Parser) -> Vec<(String, bool, String)> {
    parser
        .parse()
        .map(|opt| opt.expect("stream should be error-free"))
        .map(|opt| (opt.name, opt.has_arg, opt.arg))
        .collect()
}

fn opt(name: &str, has_arg: bool, arg: &str) -> (String, bool, String) {
    (name.to_owned(), has_arg, arg.to_owned())
}

#[test]
fn test_long_forms() {
    let longs = [("depth", ArgKind::Required), ("verbose", ArgKind::None)];
    let parser =
        Parser::getopt_long(["--verbose", "--depth", "3", "--depth=7"], "", longs).unwrap();
    assert_eq!(
        opts(&parser),
        vec![
            opt("verbose", false, ""),
            opt("depth", true, "3"),
            opt("depth", true, "7"),
        ]
    );
}

#[test]
fn test_equals_with_empty_value() {
    let parser = Parser::getopt_long(["--depth="], "", [("depth", ArgKind::Required)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("depth", true, "")]);
}

#[test]
fn test_optional_long_consumes_following_token() {
    let parser = Parser::getopt_long(["--color", "auto"], "", [("color", ArgKind::Optional)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("color", true, "auto")]);

    let parser = Parser::getopt_long(["--color"], "", [("color", ArgKind::Optional)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("color", false, "")]);
}

#[test]
fn test_exact_match_beats_shorter_prefix() {
    let longs = [("foo", ArgKind::Required), ("foo=bar", ArgKind::None)];
    let parser = Parser::getopt_long(["--foo=bar"], "", longs).unwrap();
    assert_eq!(opts(&parser), vec![opt("foo=bar", false, "")]);
}

#[test]
fn test_value_may_contain_equals() {
    let parser = Parser::getopt_long(["--foo=bar=baz"], "", [("foo", ArgKind::Required)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("foo", true, "bar=baz")]);
}

#[test]
fn test_registered_name_containing_equals_takes_value() {
    let parser =
        Parser::getopt_long(["--foo=bar=arg"], "", [("foo=bar", ArgKind::Required)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("foo=bar", true, "arg")]);
}

#[test]
fn test_no_arg_candidate_is_skipped_not_bound() {
    // `=value` cannot attach to a no-argument option, and the shorter
    // candidate does not stop at the `=` boundary, so nothing matches.
    let longs = [("output", ArgKind::None), ("out", ArgKind::Required)];
    let parser = Parser::getopt_long(["--output=file"], "", longs).unwrap();
    let stream: Vec<_> = parser.parse().collect();
    assert_eq!(stream, vec![Err(Error::UnknownOption("output=file".into()))]);
}

#[test]
fn test_long_missing_required_argument() {
    let parser = Parser::getopt_long(["--depth"], "", [("depth", ArgKind::Required)]).unwrap();
    let stream: Vec<_> = parser.parse().collect();
    assert_eq!(stream, vec![Err(Error::MissingArgument("depth".into()))]);
}

#[test]
fn test_long_case_fold_is_on_by_default() {
    let parser = Parser::getopt_long(["--DEPTH=3"], "", [("depth", ArgKind::Required)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("depth", true, "3")]);

    let strict = Parser::getopt_long(["--DEPTH=3"], "", [("depth", ArgKind::Required)]).unwrap();
    let mut config = strict.config();
    config.fold_long = false;
    strict.set_config(config);
    let stream: Vec<_> = strict.parse().collect();
    assert_eq!(stream, vec![Err(Error::UnknownOption("DEPTH=3".into()))]);
}

#[test]
fn test_long_only_single_dash() {
    let longs = [("depth", ArgKind::Required), ("verbose", ArgKind::None)];
    let parser = Parser::getopt_long_only(["-verbose", "-depth=3"], "", longs).unwrap();
    assert_eq!(
        opts(&parser),
        vec![opt("verbose", false, ""), opt("depth", true, "3")]
    );
}

#[test]
fn test_long_only_unknown_without_shorts() {
    let parser =
        Parser::getopt_long_only(["-bogus"], "", [("depth", ArgKind::Required)]).unwrap();
    let stream: Vec<_> = parser.parse().collect();
    assert_eq!(stream, vec![Err(Error::UnknownOption("bogus".into()))]);
}

#[test]
fn test_long_only_falls_back_to_shorts() {
    let parser = Parser::getopt_long_only(["-ab"], "", [("verbose", ArgKind::None)]).unwrap();
    parser.add_short('a', ArgKind::None).unwrap();
    parser.add_short('b', ArgKind::None).unwrap();
    assert_eq!(opts(&parser), vec![opt("a", false, ""), opt("b", false, "")]);
}

#[test]
fn test_long_only_prefers_the_long_match() {
    let parser =
        Parser::getopt_long_only(["-verbose"], "", [("verbose", ArgKind::None)]).unwrap();
    parser.add_short('v', ArgKind::None).unwrap();
    assert_eq!(opts(&parser), vec![opt("verbose", false, "")]);
}

#[test]
fn test_double_dash_form_still_works_in_long_only() {
    let parser =
        Parser::getopt_long_only(["--verbose"], "", [("verbose", ArgKind::None)]).unwrap();
    assert_eq!(opts(&parser), vec![opt("verbose", false, "")]);
}
