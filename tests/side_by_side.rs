//! End-to-end tests: files on disk → comparison → rendered text.
//!
//! Run with: cargo test --test side_by_side

use std::fs;

use pretty_assertions::assert_eq;

use bldiff::{
    CompareOptions, Palette, Verdict, compare, render, render_summary, source, string_width,
};

// =============================================================================
// HELPERS
// =============================================================================

fn rendered(left: &str, right: &str, width: usize, palette: &Palette) -> String {
    let options = CompareOptions {
        column_width: width,
        tab_width: 4,
        marker: palette.marker(),
    };
    let comparison = compare(left, right, &options);
    let mut out = Vec::new();
    render(&mut out, &comparison, palette).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn files_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "a\nb\nc\n").unwrap();
    fs::write(&b, "a\nb\n").unwrap();

    let left = source::read_text(&a).unwrap();
    let right = source::read_text(&b).unwrap();
    let comparison = compare(&left, &right, &CompareOptions::new(8));

    assert_eq!(comparison.len(), 3);
    let verdicts: Vec<_> = comparison.verdicts().collect();
    assert_eq!(verdicts, [Verdict::Match, Verdict::Match, Verdict::Differ]);
}

#[test]
fn plain_block_layout() {
    let text = rendered(
        "fn main() {\n    run();\n}\n",
        "fn main() {\n    run()\n    exit();\n}\n",
        14,
        &Palette::plain(),
    );
    let expected = [
        "",
        "1 fn main() {  | 1 fn main() { ",
        "2     run();   | 2     run()   ",
        "3 }            | 3     exit(); ",
        "X              | 4 }           ",
        "",
    ]
    .join("\n")
        + "\n";
    assert_eq!(text, expected);
}

#[test]
fn long_lines_are_cut_not_wrapped() {
    let long = "x".repeat(200);
    let text = rendered(&long, &long, 20, &Palette::plain());
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3); // blank, one row, blank
    assert_eq!(lines[1], format!("1 {} | 1 {}", "x".repeat(18), "x".repeat(18)));
}

#[test]
fn colored_rows_keep_printable_width() {
    let palette = Palette::default();
    let text = rendered("same\nleft only\n", "same\n", 12, &palette);
    for line in text.lines().filter(|l| !l.is_empty()) {
        assert_eq!(string_width(line), 12 + 3 + 12, "{line:?}");
    }
    assert!(text.contains("\x1b[32m1 same"));
    assert!(text.contains("\x1b[31m\x1b[31mX\x1b[0m"));
}

#[test]
fn plain_output_has_no_escapes() {
    let text = rendered("a\tb\n", "a b\nc\n", 10, &Palette::plain());
    assert!(!text.contains('\x1b'));
    assert!(!text.contains('\t'));
}

#[test]
fn empty_against_content() {
    let comparison = compare("", "one\ntwo\n", &CompareOptions::new(10));
    assert_eq!(comparison.len(), 2);
    assert_eq!(comparison.rows()[0].left.trim_end(), "1");
    assert_eq!(comparison.rows()[1].left.trim_end(), "X");
    assert!(comparison.verdicts().all(|v| v == Verdict::Differ));
}

#[test]
fn summary_follows_block() {
    let comparison = compare("a\nfoo\nz\n", "a\nfoo;\ny\n", &CompareOptions::new(10));
    let mut out = Vec::new();
    render_summary(&mut out, &comparison.counts(), &Palette::plain()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1 match, 1 similar, 1 differ (3 rows)\n"
    );
}
