use std::{error::Error, fs, path::Path, thread};

use piratelang::{
    error::{ErrorKind, kind_of},
    interpreter::{evaluator::core::MAX_CALL_DEPTH, host::ScriptedHost},
    run,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "pirate"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));

        count += 1;
        let mut host = ScriptedHost::with_input(demo_input(path));
        if let Err(e) = run(&source, &mut host) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }

        assert_eq!(host.output(),
                   expected.lines().collect::<Vec<_>>(),
                   "Output of {path:?} does not match");
    }

    assert!(count > 0, "No demo programs found in demos");
}

/// Lines fed to `ask`, read from the `.in` file next to the demo if there is
/// one.
fn demo_input(path: &Path) -> Vec<String> {
    fs::read_to_string(path.with_extension("in")).map(|text| text.lines().map(str::to_string).collect())
                                                 .unwrap_or_default()
}

fn run_scripted(src: &str, input: &[&str]) -> (Result<(), Box<dyn Error>>, Vec<String>) {
    let mut host = ScriptedHost::with_input(input.iter().copied());
    let result = run(src, &mut host);
    (result, host.output().to_vec())
}

fn output_of(src: &str) -> Vec<String> {
    output_with_input(src, &[])
}

fn output_with_input(src: &str, input: &[&str]) -> Vec<String> {
    match run_scripted(src, input) {
        (Ok(()), output) => output,
        (Err(e), _) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let (Err(e), _) = run_scripted(src, &[]) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run_scripted(src, &[]) {
        (Ok(()), _) => panic!("Script succeeded but was expected to fail with {kind}"),
        (Err(e), _) => assert_eq!(kind_of(e.as_ref()), Some(kind), "Unexpected error: {e}"),
    }
}

#[test]
fn division_is_always_floating_point() {
    assert_eq!(output_of("a stash 7\nb stash 2\nshout a / b"), ["3.5"]);
    assert_eq!(output_of("shout 6 / 3"), ["2.0"]);
    assert_eq!(output_of("shout 1.5 / 0.5"), ["3.0"]);
}

#[test]
fn length_counts_characters() {
    assert_eq!(output_of("s stash \"ahoy\"\nshout s.length"), ["4"]);
    assert_eq!(output_of("s stash \"\"\nshout s.length"), ["0"]);
    assert_eq!(output_of("s stash \"mañana\"\nshout s.length"), ["6"]);
}

#[test]
fn string_concatenation_renders_the_other_side() {
    assert_eq!(output_of("shout \"x\" + 5"), ["x5"]);
    assert_eq!(output_of("shout 5 + \"x\""), ["5x"]);
    assert_eq!(output_of("shout \"flag: \" + aye"), ["flag: aye"]);
    assert_eq!(output_of("shout \"half: \" + 0.5"), ["half: 0.5"]);
}

#[test]
fn stash_overwrites() {
    assert_eq!(output_of("a stash 3\na stash 3\nshout a"), ["3"]);
    assert_eq!(output_of("a stash 3\na stash \"three\"\nshout a"), ["three"]);
}

#[test]
fn loop_counts_and_halts() {
    let src = "i stash 0\nloop i < 3 {\n    shout i\n    i stash i + 1\n}";
    assert_eq!(output_of(src), ["0", "1", "2"]);

    let src = "i stash 3\nloop if i > 0 {\n    shout i\n    i stash i - 1\n}\nshout \"done\"";
    assert_eq!(output_of(src), ["3", "2", "1", "done"]);
}

#[test]
fn loop_with_false_condition_never_runs() {
    assert_eq!(output_of("loop nay {\n    shout \"never\"\n}\nshout \"after\""), ["after"]);
}

#[test]
fn procedures_run_once_per_call() {
    let src = "plunder greet() {\n    shout \"ahoy\"\n}\ngreet()\ngreet()";
    assert_eq!(output_of(src), ["ahoy", "ahoy"]);

    let src = "plunder greet() {\n    shout \"ahoy\"\n}";
    assert_eq!(output_of(src), Vec::<String>::new());
}

#[test]
fn undeclared_procedure_is_name_error() {
    assert_failure("greet()", ErrorKind::Name);
    assert_failure("greet()\nplunder greet() {\n    shout \"ahoy\"\n}", ErrorKind::Name);
}

#[test]
fn procedures_share_global_variables() {
    let src = "plunder bump() {\n    gold stash gold + 10\n}\ngold stash 5\nbump()\nbump()\nshout gold";
    assert_eq!(output_of(src), ["25"]);
}

#[test]
fn procedure_arguments_are_not_evaluated() {
    let src = "plunder hail(who) {\n    shout \"hail\"\n}\nhail(nobody_here)";
    assert_eq!(output_of(src), ["hail"]);

    assert_failure("plunder hail(who) {\n}\nhail(1 +)", ErrorKind::Syntax);
}

#[test]
fn redeclared_procedure_replaces_the_old_body() {
    let src = "plunder p() {\n    shout 1\n}\np()\nplunder p() {\n    shout 2\n}\np()";
    assert_eq!(output_of(src), ["1", "2"]);
}

#[test]
fn booty_leaves_the_procedure_from_nested_blocks() {
    let src = r#"
plunder count() {
    i stash 0
    loop aye {
        i stash i + 1
        if i be 3 {
            booty i
        }
    }
    shout "unreachable"
}

count()
shout i
"#;
    assert_eq!(output_of(src), ["3"]);
}

/// A procedure that calls itself until `n` reaches zero, started with
/// `n` set to `depth`.
fn countdown(depth: usize) -> String {
    format!("n stash {depth}
plunder down() {{
    n stash n - 1
    if n > 0 {{
        down()
    }}
}}
down()
shout n")
}

/// Runs `src` on a thread with room for the deepest allowed recursion in an
/// unoptimised build.
fn run_on_big_stack(src: String) -> (Option<(ErrorKind, String)>, Vec<String>) {
    let run_it = move || {
        let (result, output) = run_scripted(&src, &[]);
        let error = result.err()
                          .and_then(|e| kind_of(e.as_ref()).map(|kind| (kind, e.to_string())));
        (error, output)
    };

    thread::Builder::new().stack_size(64 * 1024 * 1024)
                          .spawn(run_it)
                          .unwrap()
                          .join()
                          .unwrap()
}

#[test]
fn recursion_within_the_limit_runs() {
    assert_eq!(output_of(&countdown(50)), ["0"]);

    let (error, output) = run_on_big_stack(countdown(MAX_CALL_DEPTH));
    assert_eq!(error, None);
    assert_eq!(output, ["0"]);
}

#[test]
fn runaway_recursion_is_recursion_error() {
    let (error, output) = run_on_big_stack(countdown(MAX_CALL_DEPTH + 1));
    let expected = format!("RecursionError on line 5: Calling 'down' would nest more than \
                            {MAX_CALL_DEPTH} procedure calls.");

    assert!(output.is_empty());
    assert_eq!(error, Some((ErrorKind::Recursion, expected)));

    let (error, output) =
        run_on_big_stack("plunder again() {\n    again()\n}\nagain()\nshout \"never\"".to_string());
    assert!(output.is_empty());
    assert_eq!(error.map(|(kind, _)| kind), Some(ErrorKind::Recursion));
}

#[test]
fn call_depth_recovers_after_each_call() {
    let src = format!("plunder down() {{
    n stash n - 1
    if n > 0 {{
        down()
    }}
}}
round stash 0
loop round < 3 {{
    n stash {MAX_CALL_DEPTH}
    down()
    round stash round + 1
}}
shout round");

    let (error, output) = run_on_big_stack(src);
    assert_eq!(error, None);
    assert_eq!(output, ["3"]);
}

#[test]
fn booty_at_top_level_stops_the_program() {
    assert_eq!(output_of("shout 1\nbooty 0\nshout 2"), ["1"]);
    assert_eq!(output_of("if aye {\n    booty 0\n}\nshout 2"), Vec::<String>::new());
}

#[test]
fn unknown_variable_is_name_error() {
    assert_failure("shout missing", ErrorKind::Name);
    assert_failure("x stash missing + 1", ErrorKind::Name);
}

#[test]
fn index_errors() {
    assert_failure("name stash \"ab\"\nshout name[5]", ErrorKind::Index);
    assert_failure("crew stash [1, 2]\nshout crew[0 - 1]", ErrorKind::Index);
    assert_failure("crew stash [1, 2]\nshout crew[\"0\"]", ErrorKind::Index);
    assert_failure("crew stash [1, 2]\nshout crew[1.0]", ErrorKind::Index);
}

#[test]
fn indexing_strings_and_lists() {
    assert_eq!(output_of("name stash \"abc\"\nshout name[1]"), ["b"]);
    assert_eq!(output_of("crew stash [\"Anne\", \"Mary\", 3]\nshout crew[1]\nshout crew[2]"),
               ["Mary", "3"]);
    assert_eq!(output_of("grid stash [[1, 2], [3, 4]]\nshout grid[1][0]"), ["3"]);
    assert_eq!(output_of("crew stash [\"Anne\"]\ni stash 0\nshout crew[i].length"), ["4"]);
    assert_eq!(output_of("crew stash [10, 20, 30]\nshout crew[1 + 1]"), ["30"]);
}

#[test]
fn operator_scan_order_is_first_occurrence() {
    assert_eq!(output_of("shout 2 + 3 * 4"), ["14"]);
    assert_eq!(output_of("shout 10 - 4 - 3"), ["9"]);
    assert_eq!(output_of("shout 8 / 4 / 2"), ["4.0"]);
    assert_eq!(output_of("shout 2 - 1 + 1"), ["2"]);
    assert_eq!(output_of("shout 1 + 2 + \"a\""), ["12a"]);
    assert_eq!(output_of("shout \"a\" + 1 + 2"), ["a3"]);
}

#[test]
fn property_binds_to_the_last_operand() {
    assert_eq!(output_of("crew stash [1, 2, 3]\nshout \"size: \" + crew.length"), ["size: 3"]);
    assert_eq!(output_of("crew stash [1, 2, 3]\nshout crew.length * 2"), ["6"]);
}

#[test]
fn printing_values() {
    assert_eq!(output_of("shout aye\nshout nay"), ["aye", "nay"]);
    assert_eq!(output_of("shout 1.5 + 1.5"), ["3.0"]);
    assert_eq!(output_of("shout 0.1 + 0.2"), ["0.30000000000000004"]);
    assert_eq!(output_of("shout 2 * 2.5"), ["5.0"]);
    assert_eq!(output_of("shout [1, \"a\", aye, 2.0]"), ["[1, \"a\", aye, 2.0]"]);
    assert_eq!(output_of("shout []"), ["[]"]);
    assert_eq!(output_of("shout [1, 2] + [3]"), ["[1, 2, 3]"]);
}

#[test]
fn comparisons() {
    let src = r#"
if 3 be 3.0 {
    shout "numbers"
}
if "1" be 1 {
    shout "never"
}
if [1, 2] be [1, 2.0] {
    shout "lists"
}
if "abc" < "abd" {
    shout "strings"
}
if nay < aye {
    shout "booleans"
}
if 2 >= 2 {
    shout "ge"
}
if 2.5 <= 2 {
    shout "never"
}
"#;
    assert_eq!(output_of(src), ["numbers", "lists", "strings", "booleans", "ge"]);
}

#[test]
fn numeric_strings_compare_as_numbers() {
    assert_eq!(output_of("s stash \"7\"\nif s > 5 {\n    shout \"big\"\n}"), ["big"]);
    assert_eq!(output_of("s stash \"10\"\nif s > \"9\" {\n    shout \"big\"\n}"), ["big"]);
}

#[test]
fn mismatched_ordering_is_type_error() {
    assert_failure("if \"abc\" < 5 {\n}", ErrorKind::Type);
    assert_failure("if aye > 0 {\n}", ErrorKind::Type);
    assert_failure("if [1] < [2] {\n}", ErrorKind::Type);
}

#[test]
fn truthiness() {
    let src = r#"
if 0 {
    shout "zero"
}
if 0.0 {
    shout "zero float"
}
if "" {
    shout "empty string"
}
if [] {
    shout "empty list"
}
if nay {
    shout "nay"
}
if "x" {
    shout "text"
}
if [0] {
    shout "list"
}
if 0 - 1 {
    shout "negative"
}
"#;
    assert_eq!(output_of(src), ["text", "list", "negative"]);
}

#[test]
fn input_is_typed() {
    assert_eq!(output_with_input("ask n\nshout n + 1", &["41"]), ["42"]);
    assert_eq!(output_with_input("ask n\nshout n + 1", &["2.5"]), ["3.5"]);
    assert_eq!(output_with_input("ask n\nshout n + 1", &["Anne"]), ["Anne1"]);
    assert_eq!(output_with_input("ask a\nask b\nshout b + a", &["x", "y"]), ["yx"]);
}

#[test]
fn only_plain_decimals_are_read_as_numbers() {
    for word in ["Nan", "NaN", "inf", "Infinity", "1e5", "3.", ".5"] {
        assert_eq!(output_with_input("ask name\nshout \"Ahoy \" + name", &[word]),
                   [format!("Ahoy {word}")]);
    }

    assert_eq!(output_with_input("ask n\nshout n + 1", &[" -12 "]), ["-11"]);
    assert_eq!(output_with_input("ask n\nshout n + 1", &["+0.5"]), ["1.5"]);

    let src = "ask limit\nif limit > 5 {\n    shout \"big\"\n}";
    let (result, _) = run_scripted(src, &["inf"]);
    assert_eq!(result.err().and_then(|e| kind_of(e.as_ref())), Some(ErrorKind::Type));
}

#[test]
fn exhausted_input_is_io_error() {
    assert_failure("ask name", ErrorKind::Io);
}

#[test]
fn type_errors() {
    assert_failure("shout 1 - \"a\"", ErrorKind::Type);
    assert_failure("shout \"a\" * 2", ErrorKind::Type);
    assert_failure("shout aye + 1", ErrorKind::Type);
    assert_failure("shout [1] + 1", ErrorKind::Type);
    assert_failure("shout 5.length", ErrorKind::Type);
    assert_failure("s stash \"abc\"\nshout s.size", ErrorKind::Type);
    assert_failure("flag stash aye\nshout flag[0]", ErrorKind::Type);
}

#[test]
fn multiplying_text_explains_itself() {
    let (result, _) = run_scripted("shout \"a\" * 2", &[]);
    let message = result.map_or_else(|e| e.to_string(), |()| String::new());

    assert_eq!(message, "TypeError on line 1: only numbers may be multiplied.");
}

#[test]
fn arithmetic_errors() {
    assert_failure("shout 1 / 0", ErrorKind::Arithmetic);
    assert_failure("shout 1.5 / 0.0", ErrorKind::Arithmetic);
    assert_failure("shout 9223372036854775807 + 1", ErrorKind::Arithmetic);
    assert_failure("big stash 9223372036854775807\nshout big * 2", ErrorKind::Arithmetic);
}

#[test]
fn large_integers_promote_to_the_nearest_float() {
    assert_eq!(output_of("shout 9007199254740993 / 1"), ["9007199254740992.0"]);
    assert_eq!(output_of("shout 9223372036854775807 / 1"), ["9223372036854775808"]);
    assert_eq!(output_of("big stash 9007199254740993\nshout big + 0.5"), ["9007199254740992.0"]);
    assert_eq!(output_of("if 9007199254740993 be 9007199254740992.0 {\n    shout \"same\"\n}"),
               ["same"]);
    assert_eq!(output_of("if 9007199254740993 > 1.5 {\n    shout \"bigger\"\n}"), ["bigger"]);
}

#[test]
fn syntax_errors() {
    assert_failure("if aye", ErrorKind::Syntax);
    assert_failure("if aye {\n    shout 1", ErrorKind::Syntax);
    assert_failure("}", ErrorKind::Syntax);
    assert_failure("if aye {\n    shout 1\n} shout 2", ErrorKind::Syntax);
    assert_failure("shout", ErrorKind::Syntax);
    assert_failure("shout -5", ErrorKind::Syntax);
    assert_failure("shout 1 +", ErrorKind::Syntax);
    assert_failure("shout $", ErrorKind::Syntax);
    assert_failure("stash 5", ErrorKind::Syntax);
    assert_failure("ask 5", ErrorKind::Syntax);
    assert_failure("plunder greet {\n}", ErrorKind::Syntax);
    assert_failure("shout 99999999999999999999", ErrorKind::Syntax);
    assert_failure("shout \"unterminated", ErrorKind::Syntax);
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let (result, output) = run_scripted("shout 1\nshout (", &[]);

    assert!(result.is_err());
    assert!(output.is_empty());
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "# the ship's log\n\n    shout 1   \n   # shout 2\n\nshout 3\n";
    assert_eq!(output_of(src), ["1", "3"]);
}

#[test]
fn errors_report_the_source_line() {
    let (result, _) = run_scripted("# comment\n\nshout missing", &[]);
    let message = result.map_or_else(|e| e.to_string(), |()| String::new());

    assert_eq!(message, "NameError on line 3: Unknown variable 'missing'.");
}

#[test]
fn nested_blocks() {
    let src = r#"
row stash 0
loop row < 2 {
    col stash 0
    loop col < 2 {
        if row be col {
            shout "diagonal " + row
        }
        col stash col + 1
    }
    row stash row + 1
}
"#;
    assert_eq!(output_of(src), ["diagonal 0", "diagonal 1"]);
}

#[test]
fn expression_statements_are_evaluated() {
    assert_success("1 + 2");
    assert_failure("missing + 2", ErrorKind::Name);
}
