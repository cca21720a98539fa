use parley::{ArgKind, Error, Parser};

#[test]
fn test_short_registration_validation() {
    let parser = Parser::new(Vec::<String>::new());

    for c in [':', ';', '-'] {
        let err = parser.add_short(c, ArgKind::None).unwrap_err();
        assert_eq!(err, Error::ProhibitedShortOption(c));
    }

    let err = parser.add_short('\t', ArgKind::None).unwrap_err();
    assert_eq!(err, Error::InvalidShortOption('\t'));

    // `=` is graphic and perfectly registrable as a short option.
    parser.add_short('=', ArgKind::None).unwrap();
}

#[test]
fn test_long_registration_validation() {
    let parser = Parser::new(Vec::<String>::new());

    let err = parser.add_long("has space", ArgKind::None).unwrap_err();
    assert_eq!(err, Error::InvalidLongOption("has space".into()));

    let err = parser.add_long("", ArgKind::None).unwrap_err();
    assert_eq!(err, Error::InvalidLongOption(String::new()));

    parser.add_long("with=equals", ArgKind::Required).unwrap();
}

#[test]
fn test_optstring_validation() {
    let err = Parser::getopt(Vec::<String>::new(), "a;").unwrap_err();
    assert_eq!(err, Error::ProhibitedShortOption(';'));

    let err = Parser::getopt(Vec::<String>::new(), "a b").unwrap_err();
    assert_eq!(err, Error::InvalidShortOption(' '));

    // A behavior character after the body is a body character.
    let err = Parser::getopt(Vec::<String>::new(), "a-").unwrap_err();
    assert_eq!(err, Error::ProhibitedShortOption('-'));
}

#[test]
fn test_long_only_rejects_an_optstring_body() {
    let err = Parser::getopt_long_only(Vec::<String>::new(), "ab", [("x", ArgKind::None)])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "long-only parser does not accept an optstring: ab"
    );

    // Behavior prefixes alone are fine.
    let parser =
        Parser::getopt_long_only(Vec::<String>::new(), ":+", [("x", ArgKind::None)]).unwrap();
    assert!(parser.config().silent_errors);
    assert!(parser.config().long_only);
}

#[test]
fn test_numeric_argument_kinds() {
    assert_eq!(ArgKind::try_from(0).unwrap(), ArgKind::None);
    assert_eq!(ArgKind::try_from(1).unwrap(), ArgKind::Required);
    assert_eq!(ArgKind::try_from(2).unwrap(), ArgKind::Optional);
    assert_eq!(ArgKind::Optional.code(), 2);

    let err = ArgKind::try_from(7).unwrap_err();
    assert_eq!(err.to_string(), "unknown argument type: 7");
}

#[test]
fn test_message_strings() {
    assert_eq!(
        Error::UnknownOption("x".into()).to_string(),
        "unknown option: x"
    );
    assert_eq!(
        Error::MissingArgument("x".into()).to_string(),
        "option requires an argument: x"
    );
    assert_eq!(Error::InvalidDash.to_string(), "invalid option: -");
    assert_eq!(Error::UnknownArgKind(9).to_string(), "unknown argument type: 9");
    assert_eq!(
        Error::InvalidShortOption('\n').to_string(),
        "invalid short option: \n"
    );
    assert_eq!(
        Error::ProhibitedShortOption(';').to_string(),
        "prohibited short option: ;"
    );
    assert_eq!(
        Error::InvalidLongOption("a b".into()).to_string(),
        "invalid long option: a b"
    );
    assert_eq!(
        Error::UnknownCommand("c".into()).to_string(),
        "unknown command: c"
    );
    assert_eq!(
        Error::CommandWithoutParser("c".into()).to_string(),
        "command c has no parser"
    );
    assert_eq!(
        Error::NoSuchCommand("c".into()).to_string(),
        "command c does not exist"
    );
}
