use smart_calc::config::Config;
use smart_calc::{run, Calculator};
use std::io::Cursor;

fn transcript_with(config: Config, input: &str) -> String {
    let mut calculator = Calculator::new(config);
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output, &mut calculator).unwrap();
    String::from_utf8(output).unwrap()
}

fn transcript(input: &str) -> String {
    transcript_with(Config::default(), input)
}

#[test]
fn evaluates_expressions() {
    let output = transcript("3 + 4 * 12 / (6 - 2) ^ 2\n1 - -2\n1 + +2\n1--2\n");
    assert_eq!(output, "6\n3\n3\n3\n");
}

#[test]
fn assignments_round_trip() {
    let output = transcript("a = 5\na\nb = a\nb\nc\nc = d\n");
    assert_eq!(output, "5\n5\nUnknown variable\nUnknown variable\n");
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let input = "\
(1 + 2
1 + 2)
2 ^ 0.5
2 ** 3
8 // 2
1 / 0
a1 = 5
a = 1 = 2
a = 2b
/quit
1 + 1
";
    let expected = "\
Invalid expression
Invalid expression
Invalid expression
Invalid expression
Invalid expression
Invalid expression
Invalid identifier
Invalid assignment
Invalid assignment
Unknown command
2
";
    assert_eq!(transcript(input), expected);
}

#[test]
fn variables_are_listed_in_assignment_order() {
    assert_eq!(transcript("/variables\n"), "");
    assert_eq!(transcript("b = 2\na = 1\nb = 3\n/variables\n"), "b = 3\na = 1\n");
}

#[test]
fn exit_stops_reading() {
    assert_eq!(transcript("1 + 1\n/exit\n2 + 2\n"), "2\nBye!\n");
}

#[test]
fn end_of_input_is_a_normal_exit() {
    assert_eq!(transcript(""), "");
    assert_eq!(transcript("\n\n   \n7"), "7\n");
}

#[test]
fn prompt_is_written_before_each_read() {
    let config = Config { prompt: "> ".into(), ..Config::default() };
    assert_eq!(transcript_with(config, "1\n"), "> 1\n> ");
}

#[test]
fn help_is_static_text() {
    let output = transcript("/help\n");
    assert!(output.contains("/exit"));
    assert!(output.contains("3 + 4 * 12 / (6 - 2) ^ 2"));
}

#[test]
fn undecodable_line_is_an_invalid_expression() {
    let mut calculator = Calculator::new(Config::default());
    let mut output = Vec::new();
    run(Cursor::new(&b"1 + 1\n\xff\n2 + 2\r\n"[..]), &mut output, &mut calculator).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "2\nInvalid expression\n4\n");
}
