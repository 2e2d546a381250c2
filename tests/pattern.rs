//! Tests for pattern compilation and rendering.

use chrono::{Local, TimeZone};
use patternlog::pattern::{FormatContext, NodeKind, Pattern, PatternNode};
use patternlog::{CallerFrame, DiagnosticSink, Error, Level, SilentDiagnostics};
use std::sync::Mutex;

const LOGGER: &str = "com.example.android.MainActivity";

fn frame() -> CallerFrame {
    CallerFrame::new("com.example.PatternTest", "new", "pattern_test.rs", 15)
}

fn render_with(pattern: &str, caller: Option<&CallerFrame>) -> String {
    let ctx = FormatContext {
        timestamp: Local.with_ymd_and_hms(2013, 7, 12, 19, 45, 26).unwrap(),
        level: Level::Debug,
        logger_name: LOGGER,
        caller,
    };
    Pattern::try_compile(pattern).unwrap().apply(&ctx).unwrap()
}

fn render(pattern: &str) -> String {
    render_with(pattern, None)
}

/// Collects warnings so tests can assert the lossy path reported something.
#[derive(Default)]
struct CollectingSink(Mutex<Vec<String>>);

impl DiagnosticSink for CollectingSink {
    fn warn(&self, scope: &str, message: &str) {
        self.0.lock().unwrap().push(format!("{scope}: {message}"));
    }
}

#[test]
fn literal_text_passes_through() {
    assert_eq!(render("hello world"), "hello world");
    assert_eq!(render(""), "");
}

#[test]
fn percent_escape() {
    assert_eq!(render("%%e"), "%e");
    assert_eq!(render("%%de"), "%de");
    assert_eq!(render("%%%%%%"), "%%%");
}

#[test]
fn newline_token() {
    assert_eq!(render("abc%nde"), "abc\nde");
    assert_eq!(render("%%%nde"), "%\nde");
}

#[test]
fn level_token_renders_uppercase_name() {
    assert_eq!(render("%level"), "DEBUG");
    assert_eq!(render("%p"), "DEBUG");
}

#[test]
fn level_token_with_widths() {
    assert_eq!(render("%1.1level"), "D");
    assert_eq!(render("%1.1p"), "D");
    assert_eq!(render("%7level"), "  DEBUG");
    assert_eq!(render("%-7level!"), "DEBUG  !");
}

#[test]
fn logger_token_renders_full_name() {
    assert_eq!(render("%logger"), LOGGER);
    assert_eq!(render("%c"), LOGGER);
}

#[test]
fn logger_token_with_braces() {
    assert_eq!(render("%logger{3}"), "com.example.android");
    assert_eq!(render("%c{3}"), "com.example.android");
    assert_eq!(render("%logger{-1}"), "example.android.MainActivity");
    assert_eq!(render("%logger{.15}"), "com.example.*");
    assert_eq!(render("%logger{.-25}"), "*.android.MainActivity");
    assert_eq!(render("%logger{3.-18}"), "*.example.android");
}

#[test]
fn logger_token_accepts_explicit_signs() {
    assert_eq!(render("%logger{+3}"), "com.example.android");
    assert_eq!(render("%logger{.+15}"), "com.example.*");
}

#[test]
fn date_token_with_explicit_format() {
    assert_eq!(render("%d{%H:%M:%S}"), "19:45:26");
    assert_eq!(render("%date{%Y}"), "2013");
}

#[test]
fn date_token_default_format() {
    assert_eq!(render("%date"), "2013-07-12 19:45:26.000");
    assert_eq!(render("%d"), "2013-07-12 19:45:26.000");
}

#[test]
fn caller_token() {
    let frame = frame();
    assert_eq!(
        render_with("%caller", Some(&frame)),
        "com.example.PatternTest#new:15"
    );
    assert_eq!(render_with("%C{-2}", Some(&frame)), "PatternTest#new:15");
    assert_eq!(
        render_with("%caller{-2.20}", Some(&frame)),
        "PatternTest#new:15"
    );
}

#[test]
fn caller_token_without_frame_fails() {
    let ctx = FormatContext {
        timestamp: Local::now(),
        level: Level::Info,
        logger_name: LOGGER,
        caller: None,
    };
    let pattern = Pattern::try_compile("%caller").unwrap();
    assert!(matches!(pattern.apply(&ctx), Err(Error::MissingCallerFrame)));
}

#[test]
fn group_widths_apply_to_joined_content() {
    assert_eq!(render("%6(ab)"), "    ab");
    assert_eq!(render("%-6(ab)"), "ab    ");
    assert_eq!(render("%.3(abcde)"), "abc");
    assert_eq!(render("%.-3(abcde)"), "cde");
}

#[test]
fn group_with_conversions_inside() {
    assert_eq!(render("%10(%1.1level x)"), "       D x");
}

#[test]
fn nested_groups() {
    assert_eq!(render("%(a%-4(b)c)"), "ab   c");
}

#[test]
fn text_after_group_is_kept() {
    assert_eq!(render("%(abc)def"), "abcdef");
}

#[test]
fn unclosed_group_closes_at_end_of_input() {
    assert_eq!(render("%6(abc"), "   abc");
}

#[test]
fn close_paren_outside_group_is_literal() {
    assert_eq!(render("a)b"), "a)b");
}

#[test]
fn full_pattern() {
    let frame = frame();
    let rendered = render_with(
        "%d{%H:%M:%S} %5level %60(%logger{30.30} %caller{-2.20}):%n",
        Some(&frame),
    );
    let expected = format!(
        "19:45:26 DEBUG {:>60}:\n",
        "com.example.android.* PatternTest#new:15"
    );
    assert_eq!(rendered, expected);
}

#[test]
fn malformed_pattern_reports_position() {
    let err = Pattern::try_compile("ab%qcd").unwrap_err();
    match err {
        Error::MalformedPattern { pattern, position } => {
            assert_eq!(pattern, "ab%qcd");
            assert_eq!(position, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn numeric_overflow_is_malformed() {
    assert!(Pattern::try_compile("%logger{2147483648}").is_err());
}

#[test]
fn lossy_compile_falls_back_to_literal() {
    let sink = CollectingSink::default();
    let pattern = Pattern::compile("%q", &sink);

    let ctx = FormatContext {
        timestamp: Local::now(),
        level: Level::Info,
        logger_name: LOGGER,
        caller: None,
    };
    assert_eq!(pattern.apply(&ctx).unwrap(), "%q");

    let warnings = sink.0.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("PATTERN:"));
}

#[test]
fn lossy_compile_is_silent_on_valid_patterns() {
    let sink = CollectingSink::default();
    let pattern = Pattern::compile("%level %logger{-1}", &sink);
    assert!(!pattern.needs_caller());
    assert!(sink.0.lock().unwrap().is_empty());
}

#[test]
fn needs_caller_reflects_tree_content() {
    assert!(Pattern::try_compile("%caller").unwrap().needs_caller());
    assert!(Pattern::try_compile("%(x%(y%C)z)").unwrap().needs_caller());
    assert!(!Pattern::try_compile("%logger %level %d").unwrap().needs_caller());
    assert!(!Pattern::literal("%caller").needs_caller());
}

#[test]
fn hand_built_tree_renders_like_compiled() {
    let root = PatternNode::new(
        0,
        0,
        NodeKind::Group(vec![
            PatternNode::new(0, 0, NodeKind::Severity),
            PatternNode::new(0, 0, NodeKind::Literal(" ".to_string())),
            PatternNode::new(
                0,
                0,
                NodeKind::LoggerName {
                    segments: -1,
                    budget: 0,
                },
            ),
        ]),
    );
    let built = Pattern::from_node(root);
    let ctx = FormatContext {
        timestamp: Local::now(),
        level: Level::Warn,
        logger_name: LOGGER,
        caller: None,
    };
    assert_eq!(built.apply(&ctx).unwrap(), "WARN example.android.MainActivity");
}

#[test]
fn compile_does_not_warn_through_silent_sink() {
    // smoke check that the no-op sink satisfies the trait
    let pattern = Pattern::compile("%bogus", &SilentDiagnostics);
    assert!(!pattern.needs_caller());
}
