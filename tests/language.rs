use std::{
    cell::RefCell,
    fs,
    io::{self, Cursor, Write},
    rc::Rc,
};

use linescript::{
    config::Config,
    error::{ParseError, RuntimeError},
    interpreter::runner::Interpreter,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// A writer whose contents stay readable after it is moved into the
/// interpreter.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

fn quiet() -> Config {
    Config { quiet: true,
             ..Config::default() }
}

fn run_with_input(src: &str, input: &str) -> (String, Vec<RuntimeError>) {
    let output = SharedBuffer::default();
    let mut interpreter =
        Interpreter::with_io(quiet(), Cursor::new(input.to_owned()), output.clone());

    let errors = interpreter.run(src)
                            .unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    (output.contents(), errors)
}

fn run(src: &str) -> (String, Vec<RuntimeError>) {
    run_with_input(src, "")
}

fn assert_output(src: &str, expected: &str) {
    let (output, errors) = run(src);

    assert!(errors.is_empty(), "Script failed: {errors:?}");
    assert_eq!(output, expected);
}

fn assert_failure(src: &str) -> RuntimeError {
    let (_, mut errors) = run(src);

    assert_eq!(errors.len(), 1, "expected exactly one failing statement: {errors:?}");
    errors.remove(0)
}

fn parse_error(src: &str) -> ParseError {
    let mut interpreter = Interpreter::with_io(quiet(), io::empty(), io::sink());

    match interpreter.run(src) {
        Err(e) => e,
        Ok(errors) => panic!("Script parsed but was expected to fail: {errors:?}"),
    }
}

#[test]
fn scripts_match_their_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ls"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        count += 1;
        let (output, errors) = run(&script);
        assert!(errors.is_empty(), "Script {path:?} failed: {errors:?}");
        assert_eq!(output, expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn precedence_and_associativity() {
    assert_output("print 2 + 3 * 4", "14\n");
    assert_output("print (2 + 3) * 4", "20\n");
    assert_output("print 2 ^ 3 ^ 2", "512\n");
    assert_output("print 10 - 4 - 3", "3\n");
}

#[test]
fn unary_minus() {
    assert_output("print -3 + 4", "1\n");
    assert_output("print 3 - -4", "7\n");
    assert_output("print -2 ^ 2", "-4\n");
    assert_output("x := 5\nprint -x", "-5\n");
}

#[test]
fn numeric_promotion() {
    assert_output("print 1 + 2.5", "3.5\n");
    assert_output("print 5 / 2", "2\n");
    assert_output("print 5.0 / 2", "2.5\n");
    assert_output("print 2 ^ -1", "0\n");
}

#[test]
fn string_concatenation() {
    assert_output("print \"ab\" + \"cd\"", "abcd\n");
    assert_output("a := \"ab\"\nb := \"ab\"\nprint a = b", "True\n");
    assert_output("print \"ab\" + \"cd\" = \"abcd\"", "True\n");
}

#[test]
fn booleans_and_comparisons() {
    assert_output("print 2 < 3 & 3 <= 3", "True\n");
    assert_output("print !(1 = 1) | 2 != 2", "False\n");
    assert_output("print 2 = 2.0", "True\n");
    assert_output("print 4 >= 5", "False\n");
}

#[test]
fn one_line_while_loop() {
    assert_output("x := 0 while x < 3 { print x x := x + 1 }", "0\n1\n2\n");
}

#[test]
fn nested_blocks() {
    let script = r#"
i := 0
while i < 4 {
    if i = 2 {
        print "two"
    }
    if i != 2 {
        print i
    }
    i := i + 1
}
"#;

    assert_output(script, "0\n1\ntwo\n3\n");
}

#[test]
fn block_brace_on_its_own_line() {
    assert_output("x := 1\nif x = 1\n{\n  print x\n}", "1\n");
    assert_output("n := 0\nwhile n < 2\n{\n  print n\n  n := n + 1\n}", "0\n1\n");
}

#[test]
fn delete_lifecycle() {
    let (output, errors) = run("x := 1\nprint x\ndel x\nprint x\nx := 2\nprint x");

    assert_eq!(output, "1\n2\n");
    assert!(matches!(errors[..], [RuntimeError::NoIdentifierAvailable { ref name, .. }] if name == "x"));
}

#[test]
fn failing_statement_does_not_stop_the_next() {
    let (output, errors) = run("print 1\nprint true + false\nprint 3");

    assert_eq!(output, "1\n3\n");
    assert!(matches!(errors[..], [RuntimeError::WrongTypeUsedWithBinOp { .. }]));
}

#[test]
fn earlier_side_effects_are_kept() {
    let (output, errors) = run("print (x := 1) + 1\nprint x");

    assert_eq!(output, "1\n");
    assert!(matches!(errors[..], [RuntimeError::MissingValue { .. }]));
}

#[test]
fn input_reads_one_line() {
    let (output, errors) = run_with_input("name := input \"Name?\"\nprint \"Hi \" + name",
                                          "Ada\n");

    assert!(errors.is_empty());
    assert_eq!(output, "Name?\nHi Ada\n");
}

#[test]
fn type_errors() {
    assert!(matches!(assert_failure("print \"a\" + 1"), RuntimeError::IncompatibleType { .. }));
    assert!(matches!(assert_failure("print true & 1"), RuntimeError::ExpectedBool { .. }));
    assert!(matches!(assert_failure("print \"a\" < \"b\""),
                     RuntimeError::MustBeNumWithComparisonOp { .. }));
    assert!(matches!(assert_failure("print -true"), RuntimeError::UnaryTypeMismatch { .. }));
    assert!(matches!(assert_failure("if 1 { print 1 }"),
                     RuntimeError::ExpectedBoolWithControl { keyword: "if", .. }));
}

#[test]
fn while_condition_is_checked_every_iteration() {
    let (output, errors) = run("x := true\nwhile x { print 1 x := 0 }");

    assert_eq!(output, "1\n");
    assert!(matches!(errors[..],
                     [RuntimeError::ExpectedBoolWithControl { keyword: "while", .. }]));
}

#[test]
fn slot_errors() {
    assert!(matches!(assert_failure("1 := 2"),
                     RuntimeError::ExpectedIdentifier { operator: ":=", .. }));
    assert!(matches!(assert_failure("del 3"),
                     RuntimeError::ExpectedIdentifier { operator: "del", .. }));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(assert_failure("print 1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_failure("print 9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(assert_failure("print 9223372036854775808"),
                     RuntimeError::InvalidLiteral { .. }));
}

#[test]
fn parse_errors_stop_the_whole_program() {
    assert!(matches!(parse_error("print 1\nprint #"),
                     ParseError::InvalidCharacter { character: '#', .. }));
    assert!(matches!(parse_error("print \"open"), ParseError::UnterminatedString { .. }));
    assert!(matches!(parse_error("print (1 + 2"), ParseError::UnclosedParen { .. }));
    assert!(matches!(parse_error("print 1 + 2)"), ParseError::UnmatchedParen { .. }));
    assert!(matches!(parse_error("while true {\nprint 1"), ParseError::UnclosedBlock { .. }));
    assert!(matches!(parse_error("if true\nprint 1"), ParseError::MissingBlock { .. }));
    assert!(matches!(parse_error("x := 3\nprint 2x"), ParseError::DanglingOperand { .. }));
}

#[test]
fn diagnostics_carry_line_and_cursor() {
    let error = assert_failure("x := 1\ny := x + missing");

    assert_eq!(error.to_string(),
               "Error at line 2, cursor 9: NoIdentifierAvailable: Cannot find identifier \
                \"missing\".");
}

#[test]
fn nesting_limit_is_configurable() {
    let source = format!("x := {}1{}", "(".repeat(40), ")".repeat(40));
    let deep = format!("print {}1", "-".repeat(40));

    let mut interpreter = Interpreter::with_io(Config { max_depth: 8,
                                                        quiet:     true, },
                                               io::empty(),
                                               io::sink());

    assert!(interpreter.run(&source).is_ok());
    assert!(matches!(interpreter.run(&deep), Err(ParseError::NestingTooDeep { limit: 8, .. })));
}
