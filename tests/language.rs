use std::fs;

use reckon::{
    ast::Command,
    interpret,
    interpreter::{
        lexer::{Lexed, Token, scan},
        parser::core::parse_command,
        semantics::Semantics,
    },
};
use walkdir::WalkDir;

fn run(source: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    interpret(source, &mut out, &mut err);
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn assert_prints(source: &str, expected: &str) {
    let (stdout, stderr) = run(source);
    assert_eq!(stdout, expected, "stdout mismatch for {source:?}");
    assert!(stderr.is_empty(),
            "unexpected diagnostics for {source:?}: {stderr}");
}

fn assert_complains(source: &str, needle: &str) {
    let (_, stderr) = run(source);
    assert!(stderr.contains(needle),
            "expected {needle:?} in diagnostics for {source:?}, got: {stderr}");
}

fn parse_all(source: &str) -> Vec<Command> {
    let (tokens, faults) = scan(source);
    assert!(faults.is_empty(), "unexpected scan faults for {source:?}");

    let mut iter = tokens.iter().peekable();
    let mut commands = Vec::new();
    loop {
        while let Some(Lexed { token: Token::Newline, .. }) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        let mut semantics = Semantics::new();
        commands.push(parse_command(&mut iter, &mut semantics).expect("command should parse"));
    }
    commands
}

#[test]
fn arithmetic_and_precedence() {
    assert_prints("1+2*3\n", "7\n");
    assert_prints("2 + 3 * 4 ^ 2\n", "50\n");
    assert_prints("(1 + 2) * 3\n", "9\n");
    assert_prints("7 / 2\n", "3.5\n");
    assert_prints("10 - 2 - 3\n", "5\n");
}

#[test]
fn power_is_left_associative() {
    assert_prints("2 ^ 3 ^ 2\n", "64\n");
}

#[test]
fn power_clamps_its_exponent() {
    assert_prints("2 ^ -3\n", "1\n");
    assert_prints("2 ^ 2.9\n", "4\n");
    assert_prints("2 ^ 0\n", "1\n");
}

#[test]
fn modulo_is_floored() {
    assert_prints("5 % 3\n", "2\n");
    assert_prints("-7 % 3\n", "2\n");
    assert_prints("7 % -3\n", "-2\n");
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_prints("-2 ^ 2\n", "4\n");
    assert_prints("- -3\n", "3\n");
}

#[test]
fn numeric_literal_forms() {
    assert_prints("2.5 + .5\n", "3\n");
    assert_prints("5.\n", "5\n");
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_prints("1 < 2\n", "1\n");
    assert_prints("2 <= 1\n", "0\n");
    assert_prints("2 > 1\n", "1\n");
    assert_prints("1 >= 2\n", "0\n");
    assert_prints("1 == 1\n", "1\n");
    assert_prints("1 != 1\n", "0\n");
}

#[test]
fn comparisons_chain_left_associatively() {
    // `a < b < c` compares the 0-or-1 result of the left comparison with
    // `c`.
    assert_prints("1 < 2 < 3\n", "1\n");
    assert_prints("3 < 2 < 1\n", "1\n");
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert_prints("x = 0\n1 || x++\nx\n", "1\n1\n");
    assert_prints("x = 0\n0 && x++\nx\n", "0\n1\n");
    assert_prints("2 && 3\n", "1\n");
    assert_prints("0 || 0\n", "0\n");
}

#[test]
fn logical_not_sits_below_comparisons() {
    assert_prints("!0\n", "1\n");
    assert_prints("!5\n", "0\n");
    // `!` binds looser than `<`, so this negates the whole comparison.
    assert_prints("!1 < 2\n", "0\n");
}

#[test]
fn assignment_is_silent_and_reads_back() {
    assert_prints("x = 3\nx\n", "3\n");
    assert_prints("x = y = 5\nx\ny\n", "5\n5\n");
}

#[test]
fn compound_assignments_desugar() {
    assert_prints("x = 4\nx += 2\nx\n", "6\n");
    assert_prints("x = 4\nx -= 2\nx\n", "2\n");
    assert_prints("x = 4\nx *= 2\nx\n", "8\n");
    assert_prints("x = 4\nx /= 2\nx\n", "2\n");
    assert_prints("x = 4\nx %= 3\nx\n", "1\n");
    assert_prints("x = 3\nx ^= 2\nx\n", "9\n");
}

#[test]
fn assignment_binds_tighter_than_comparison() {
    // Assignment sits between the comparisons and the additive operators,
    // so this line assigns 1 and then compares.
    assert_prints("z = 1 < 2\nz\n", "1\n1\n");
}

#[test]
fn increments_and_decrements() {
    assert_prints("n = 5\nn++\nn\n", "5\n6\n");
    assert_prints("n = 5\n++n\nn\n", "6\n6\n");
    assert_prints("n = 5\nn--\nn\n", "5\n4\n");
    assert_prints("n = 5\n--n\nn\n", "4\n4\n");
    // Unbound names read as zero before stepping.
    assert_prints("fresh++\nfresh\n", "0\n1\n");
}

#[test]
fn reading_an_unbound_name_yields_zero() {
    assert_prints("nothing\n", "0\n");
}

#[test]
fn if_and_else_branches() {
    assert_prints("if (1) 10 else 20\n", "10\n");
    assert_prints("if (0) 10 else 20\n", "20\n");
    assert_prints("if (0) 10\n", "");
    assert_prints("if (3 < 4) { 1; 2 } else { 3 }\n", "1\n2\n");
}

#[test]
fn while_loop_prints_each_iteration() {
    assert_prints("i=0\nwhile (i<3) { i; i=i+1; }\n", "0\n1\n2\n");
}

#[test]
fn break_terminates_the_innermost_while() {
    assert_prints("i = 0\nwhile (1) { i = i + 1; if (i == 3) break }\ni\n",
                  "3\n");
    let nested = "i = 0\n\
                  while (i < 2) {\n\
                      j = 0\n\
                      while (1) {\n\
                          j = j + 1\n\
                          if (j == 2) break\n\
                      }\n\
                      j\n\
                      i = i + 1\n\
                  }\n";
    assert_prints(nested, "2\n2\n");
}

#[test]
fn continue_restarts_the_condition() {
    assert_prints("i = 0; s = 0\nwhile (i < 5) { i = i + 1; if (i == 2) continue; s = s + i }\ns\n",
                  "13\n");
}

#[test]
fn function_definition_and_recursion() {
    assert_prints("define f(n) { if (n<=1) return 1; return n*f(n-1); }\nf(5)\n",
                  "120\n");
}

#[test]
fn definitions_print_nothing() {
    assert_prints("define f() { return 1 }\n", "");
}

#[test]
fn calls_default_to_zero() {
    assert_prints("define noop() { }\nnoop()\n", "0\n");
    assert_prints("define bare() { return }\nbare()\n", "0\n");
}

#[test]
fn latest_definition_wins() {
    assert_prints("define f() { return 1 }\ndefine f() { return 2 }\nf()\n",
                  "2\n");
}

#[test]
fn autos_shadow_and_restore_globals() {
    let source = "a = 10\n\
                  define f() auto a { a = 5; return a }\n\
                  f()\n\
                  a\n";
    assert_prints(source, "5\n10\n");
}

#[test]
fn parameters_shadow_and_restore_globals() {
    let source = "x = 1\n\
                  define set(x) { x = 99; return x }\n\
                  set(7)\n\
                  x\n";
    assert_prints(source, "99\n1\n");
}

#[test]
fn assignment_to_an_unbound_name_creates_a_global() {
    assert_prints("define g() { y = 42; return 0 }\ng()\ny\n", "0\n42\n");
}

#[test]
fn arguments_evaluate_in_the_caller_scope_left_to_right() {
    let source = "define pair(a, b) { return a * 10 + b }\n\
                  n = 0\n\
                  pair(n++, n++)\n";
    assert_prints(source, "1\n");
}

#[test]
fn division_by_zero_is_reported_and_recovered_from() {
    let (stdout, stderr) = run("1/0\n2\n");
    assert_eq!(stdout, "2\n");
    assert_eq!(stderr,
               "\nruntime error in function (main): division by zero.\n");
}

#[test]
fn modulo_zero_is_reported() {
    let (stdout, stderr) = run("5 % 0\n");
    assert_eq!(stdout, "");
    assert_eq!(stderr, "\nruntime error in function (main): modulo zero.\n");
}

#[test]
fn runtime_errors_name_the_faulting_function() {
    let (stdout, stderr) = run("define f() { return 1/0 }\nf()\n");
    assert_eq!(stdout, "");
    assert_eq!(stderr, "\nruntime error in function f: division by zero.\n");
}

#[test]
fn undefined_function_call_is_reported() {
    let (stdout, stderr) = run("f(1)\n2\n");
    assert_eq!(stdout, "2\n");
    assert_eq!(stderr,
               "\nruntime error in function (main): function 'f' not defined.\n");
}

#[test]
fn wrong_arity_call_is_reported() {
    assert_complains("define f(x) { return x }\nf(1, 2)\n",
                     "runtime error in function (main): wrong number of arguments for function 'f'.");
}

#[test]
fn frames_unwind_when_a_call_faults() {
    let source = "a = 1; b = 2\n\
                  define f(a) auto b { b = 9; return 1 / 0 }\n\
                  f(5)\n\
                  a; b\n";
    let (stdout, stderr) = run(source);
    assert_eq!(stdout, "1\n2\n");
    assert_eq!(stderr, "\nruntime error in function f: division by zero.\n");
}

#[test]
fn halt_stops_the_interpreter() {
    assert_prints("1\nhalt\n2\n", "1\n");
    assert_prints("define f() { halt }\n1\nf()\n2\n", "1\n");
    assert_prints("i=0\nwhile (1) { i; halt }\n", "0\n");
}

#[test]
fn break_outside_while_is_a_semantic_error() {
    let (stdout, stderr) = run("break\n");
    assert_eq!(stdout, "");
    assert_eq!(stderr,
               "\nsemantic error: break outside while at line 1, column 1.\n");
}

#[test]
fn continue_outside_while_is_a_semantic_error() {
    assert_complains("continue\n", "semantic error: continue outside while at line 1, column 1.");
}

#[test]
fn return_outside_function_is_a_semantic_error() {
    assert_complains("return 5\n",
                     "semantic error: return outside function definition at line 1, column 1.");
}

#[test]
fn semantically_failed_commands_do_not_execute() {
    let (stdout, stderr) = run("1\nbreak; 2\n3\n");
    assert_eq!(stdout, "1\n3\n");
    assert!(stderr.contains("break outside while"));
}

#[test]
fn duplicate_parameter_is_reported_with_its_position() {
    let (stdout, stderr) = run("define f(x,x) { }\n");
    assert_eq!(stdout, "");
    assert_eq!(stderr,
               "\nsemantic error: duplicate name in parameter or auto variable list at line 1, \
                column 12.\n");
}

#[test]
fn auto_repeating_a_parameter_is_reported() {
    let (stdout, stderr) = run("define g(x) auto x { x=1; return x; }\n1\n");
    assert_eq!(stdout, "1\n");
    assert_eq!(stderr,
               "\nsemantic error: duplicate name in parameter or auto variable list at line 1, \
                column 18.\n");
}

#[test]
fn failed_definitions_are_not_installed() {
    let (_, stderr) = run("define f(x,x) { return 1 }\nf(1,1)\n");
    assert!(stderr.contains("duplicate name"));
    assert!(stderr.contains("function 'f' not defined"));
}

#[test]
fn syntax_errors_recover_at_the_next_line() {
    let (stdout, stderr) = run("1 +\n2\n");
    assert_eq!(stdout, "2\n");
    assert!(stderr.contains("at line 1, column 4"));
}

#[test]
fn trailing_garbage_is_a_syntax_error() {
    let (stdout, stderr) = run("1 2\n3\n");
    assert_eq!(stdout, "3\n");
    assert!(stderr.contains("syntax error \"2\" at line 1, column 3"));
}

#[test]
fn missing_close_paren_is_reported() {
    assert_complains("(1+2\n", "expected ')'");
}

#[test]
fn illegal_characters_are_rendered_and_skipped() {
    let (stdout, stderr) = run("1 @ 2\n3\n");
    assert_eq!(stdout, "3\n");
    assert!(stderr.contains("illegal character: @ at line 1 column 3"));
    assert!(stderr.contains("syntax error \"@\" at line 1, column 3"));
}

#[test]
fn control_characters_render_with_a_caret() {
    assert_complains("\u{1}\n", "illegal character: ^A at line 1 column 1");
}

#[test]
fn comments_are_skipped() {
    assert_prints("1 + 2 # the rest of this line is ignored\n", "3\n");
    assert_prints("3 /* inline */ + 4\n", "7\n");
    // A block comment swallows its newlines, so the command continues on
    // the next physical line.
    assert_prints("1 /* two\nlines */ + 2\n", "3\n");
}

#[test]
fn newlines_are_allowed_after_loop_and_branch_heads() {
    assert_prints("if (1)\n{ 42 }\n", "42\n");
    assert_prints("i = 3\nwhile (i > 0)\n{ i; i = i - 1 }\n", "3\n2\n1\n");
    assert_prints("if (0) 1 else\n2\n", "2\n");
}

#[test]
fn a_newline_terminates_an_unbraced_command() {
    let (stdout, stderr) = run("define f()\n{ return 1 }\n");
    assert_eq!(stdout, "");
    assert!(stderr.contains("expected '{'"));
}

#[test]
fn multi_line_definitions_parse_inside_braces() {
    let source = "define sum(n) auto i, s {\n\
                      i = 1\n\
                      while (i <= n) {\n\
                          s = s + i\n\
                          i = i + 1\n\
                      }\n\
                      return s\n\
                  }\n\
                  sum(4)\n";
    assert_prints(source, "10\n");
}

#[test]
fn pretty_printing_round_trips() {
    let corpus = "x = 1 + 2 * 3 ^ -2\n\
                  define f(a, b) auto t { t = a; if (t < b) return b; return t }\n\
                  define g() { while (x < 10) { x += 1; if (x == 5) break; continue } }\n\
                  !one && two || three == 1 < 2\n\
                  f(1, x++) + --y\n";
    let first = parse_all(corpus);
    let printed = first.iter().map(|c| format!("{c}\n")).collect::<String>();
    let second = parse_all(&printed);
    assert_eq!(first, second, "printed form parsed differently:\n{printed}");
}

#[test]
fn token_dump_lists_positions() {
    let mut out = Vec::new();
    reckon::dump_tokens("x = 1\n", &mut out);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("1:1 Name(\"x\") \"x\""), "got: {text}");
}

#[test]
fn ast_dump_prints_canonical_source() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    reckon::dump_ast("x=1+2\n", &mut out, &mut err);
    assert_eq!(String::from_utf8(out).unwrap(), "(x = (1 + 2))\n");
    assert!(err.is_empty());
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "rk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Missing expected output for {path:?}: {e}")
                       });

        let (stdout, stderr) = run(&source);
        assert_eq!(stdout, expected, "output mismatch for {path:?}");
        assert!(stderr.is_empty(), "diagnostics for {path:?}: {stderr}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
