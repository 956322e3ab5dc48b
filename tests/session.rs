use std::cell::RefCell;
use std::io::Cursor;
use std::path::PathBuf;
use std::rc::Rc;

use simple_lang::{RunSummary, Session};

struct Harness {
    session: Session,
    out: Rc<RefCell<Vec<u8>>>,
    err: Rc<RefCell<Vec<u8>>>,
}

impl Harness {
    fn new() -> Self {
        let out = Rc::new(RefCell::new(Vec::new()));
        let err = Rc::new(RefCell::new(Vec::new()));
        Self {
            session: Session::new(out.clone(), err.clone()),
            out,
            err,
        }
    }

    fn eval(&mut self, line: &str) -> f64 {
        self.session.evaluate_line(line)
    }

    fn out(&self) -> String {
        String::from_utf8(self.out.borrow().clone()).unwrap()
    }

    fn err(&self) -> String {
        String::from_utf8(self.err.borrow().clone()).unwrap()
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn precedence_and_grouping() {
    let mut h = Harness::new();
    assert_eq!(h.eval("2 + 3 * 4"), 14.0);
    assert_eq!(h.eval("(2 + 3) * 4"), 20.0);
    assert_eq!(h.eval("10 - 4 - 3"), 3.0);
    assert_eq!(h.eval("64 / 8 / 2"), 4.0);
    assert_eq!(h.eval("1.5 * 4 - 2 / 8"), 5.75);
    assert_eq!(h.eval("((7))"), 7.0);
    assert!(h.err().is_empty());
}

#[test]
fn assignment_persists_across_lines() {
    let mut h = Harness::new();
    assert_eq!(h.eval("x = 5"), 5.0);
    assert_eq!(h.eval("x"), 5.0);
    assert_eq!(h.eval("x"), 5.0);
    assert_eq!(h.session.environment().get("x"), Some(5.0));
}

#[test]
fn variable_mutation() {
    let mut h = Harness::new();
    h.eval("x = 1");
    h.eval("x = x + 1");
    assert_eq!(h.eval("x"), 2.0);
}

#[test]
fn parenthesised_chained_assignment() {
    let mut h = Harness::new();
    assert_eq!(h.eval("a = (b = 3) + 1"), 4.0);
    assert_eq!(h.eval("a * b"), 12.0);
}

#[test]
fn unparenthesised_chained_assignment_sets_both() {
    let mut h = Harness::new();
    assert_eq!(h.eval("b = 7"), 7.0);
    assert_eq!(h.eval("a = b = 1"), 1.0);
    assert_eq!(h.eval("a"), 1.0);
    assert_eq!(h.eval("b"), 1.0);
    assert!(h.err().is_empty());
}

#[test]
fn division_by_zero_returns_zero() {
    let mut h = Harness::new();
    assert_eq!(h.eval("1 / 0"), 0.0);
    assert_eq!(h.err(), "Error: Division by zero\n");
}

#[test]
fn undefined_variable_returns_zero() {
    let mut h = Harness::new();
    assert_eq!(h.eval("y"), 0.0);
    assert_eq!(h.err(), "Error: Undefined variable: `y`\n");
}

#[test]
fn unbalanced_parenthesis_returns_zero() {
    let mut h = Harness::new();
    assert_eq!(h.eval("(1 + 2"), 0.0);
    assert!(h.err().starts_with("Error: Expected closing parenthesis"));
}

#[test]
fn unknown_characters_are_tolerated() {
    let mut h = Harness::new();
    assert_eq!(h.eval("1 @+ 2"), 3.0);
    assert_eq!(h.err(), "Unknown character: @\n");
}

#[test]
fn skipped_character_can_leave_an_invalid_stream() {
    let mut h = Harness::new();
    // `1 + + 2` after skipping, and there is no unary plus
    assert_eq!(h.eval("1 + @ + 2"), 0.0);
    assert_eq!(
        h.err(),
        "Unknown character: @\nError: Unexpected token: `+` at position [6:6]\n"
    );
}

#[test]
fn out_of_range_literal_is_a_parse_error() {
    let mut h = Harness::new();
    assert_eq!(h.eval(&"9".repeat(400)), 0.0);
    assert!(h.err().starts_with("Error: Number literal `999"));
}

#[test]
fn whitespace_does_not_matter() {
    let mut h = Harness::new();
    assert_eq!(h.eval("1+2"), h.eval(" 1 + 2 "));
    assert_eq!(h.eval("x=3*2"), h.eval("x = 3 * 2"));
}

#[test]
fn trailing_tokens_are_ignored() {
    let mut h = Harness::new();
    assert_eq!(h.eval("1 + 2 3"), 3.0);
    assert!(h.err().is_empty());
}

#[test]
fn failed_line_keeps_earlier_state() {
    let mut h = Harness::new();
    h.eval("x = 10");
    assert_eq!(h.eval("x = x / 0"), 0.0);
    assert_eq!(h.eval("x"), 10.0);
}

#[test]
fn empty_line_is_a_parse_error() {
    let mut h = Harness::new();
    assert_eq!(h.eval(""), 0.0);
    assert!(h.err().starts_with("Error: Unexpected token: `end of input`"));
}

#[test]
fn file_mode_numbers_lines_and_skips_comments() {
    let mut h = Harness::new();
    let input = "# setup\n\n1 + 1\nx = 4 * 2\n";
    let summary = h.session.run_reader(Cursor::new(input)).unwrap();

    assert_eq!(h.out(), "Line 3: 2\nLine 4: 8\n");
    assert_eq!(
        summary,
        RunSummary {
            evaluated: 2,
            skipped: 2,
            failed: 0
        }
    );
}

#[test]
fn file_mode_reports_errors_and_continues() {
    let mut h = Harness::new();
    let summary = h.session.run_file(fixture("shapes.calc")).unwrap();

    assert_eq!(
        summary,
        Some(RunSummary {
            evaluated: 4,
            skipped: 3,
            failed: 1
        })
    );
    assert_eq!(h.out(), "Line 3: 4\nLine 4: 2.5\nLine 5: 10\nLine 8: 13\n");
    assert_eq!(h.err(), "Error at line 7: Division by zero\n");
    assert_eq!(h.session.environment().get("perimeter"), Some(13.0));
}

#[test]
fn file_mode_shares_the_session_environment() {
    let mut h = Harness::new();
    h.session.run_reader(Cursor::new("x = 2\n")).unwrap();
    assert_eq!(h.eval("x * 21"), 42.0);
}

#[test]
fn missing_file_is_reported_not_raised() {
    let mut h = Harness::new();
    let path = fixture("does-not-exist.calc");
    let summary = h.session.run_file(&path).unwrap();

    assert_eq!(summary, None);
    assert_eq!(h.out(), "");
    assert_eq!(h.err(), format!("Could not open file: {}\n", path.display()));
}

#[test]
fn crlf_line_endings() {
    let mut h = Harness::new();
    h.session.run_reader(Cursor::new("1 + 1\r\n# c\r\n2 * 2\r\n")).unwrap();
    assert_eq!(h.out(), "Line 1: 2\nLine 3: 4\n");
}
