//! Integration tests for the text formatter.

use mdpdf::format::{format_markdown, FormatOptions, TextFormatter, REPLACEMENTS};

fn assert_blank_invariants(lines: &[String]) {
    if let Some(first) = lines.first() {
        assert!(!first.is_empty(), "leading blank in {lines:?}");
    }
    if let Some(last) = lines.last() {
        assert!(!last.is_empty(), "trailing blank in {lines:?}");
    }
    for pair in lines.windows(2) {
        assert!(
            !(pair[0].is_empty() && pair[1].is_empty()),
            "double blank in {lines:?}"
        );
    }
}

#[test]
fn test_blank_invariants_over_mixed_inputs() {
    let inputs = [
        "",
        "\n\n",
        "# A",
        "## A\n## B\n## C",
        "### A\n\n\n### B\n",
        "\n\n- a\n\n\n- b\n\n",
        "# A\n\n\n\n## B\n\n### C\n*d*\n\ntext\n\n\n",
        "- **\n# **\n\n## `` \n",
        "\r\n# Windows\r\n\r\nline endings\r\n",
        "\r# Old Mac\r\rline\u{2028}\u{2029}- sep\x0c",
    ];
    for input in inputs {
        let lines = format_markdown(input).into_vec();
        assert_blank_invariants(&lines);
    }
}

#[test]
fn test_windows_line_endings() {
    let lines = format_markdown("# Windows\r\n\r\nline endings\r\n").into_vec();
    assert_eq!(lines, vec!["WINDOWS", "", "line endings"]);
}

#[test]
fn test_every_line_break_starts_a_new_line() {
    let lines = format_markdown("A\rB\u{2028}C").into_vec();
    assert_eq!(lines, vec!["A", "B", "C"]);

    let lines = format_markdown("A\x0cB").into_vec();
    assert_eq!(lines, vec!["A", "B"]);

    let lines = format_markdown("# Title\u{85}- item\x0b*dates*").into_vec();
    assert_eq!(lines, vec!["TITLE", "", "  - item", "dates"]);
}

#[test]
fn test_no_substitution_character_survives() {
    let mut markup = String::new();
    for (c, _) in REPLACEMENTS {
        markup.push_str(&format!("- item {}x{}\n", c, c));
        markup.push_str(&format!("# head {}\n", c));
        markup.push_str(&format!("plain {} text\n", c));
    }
    let lines = format_markdown(&markup).into_vec();
    for line in &lines {
        for (c, _) in REPLACEMENTS {
            assert!(!line.contains(*c), "{c:?} survived in {line:?}");
        }
    }
}

#[test]
fn test_long_paragraph_wraps_at_width() {
    let sentence = "Designed and operated distributed systems with strong consistency guarantees. ";
    let markup = sentence.repeat(6);
    let lines = format_markdown(&markup).into_vec();

    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| l.chars().count() <= 88));
    assert_eq!(lines.join(" "), markup.trim());
}

#[test]
fn test_long_bullet_wraps_with_indent() {
    let formatter = TextFormatter::new(FormatOptions::new().with_wrap_width(30));
    let lines = formatter
        .format("- Reduced cloud spend by consolidating clusters and tuning autoscaling")
        .into_vec();

    assert_eq!(
        lines,
        vec![
            "  - Reduced cloud spend by",
            "    consolidating clusters and",
            "    tuning autoscaling",
        ]
    );
}

#[test]
fn test_hyphenated_words_break_after_hyphen() {
    let formatter = TextFormatter::new(FormatOptions::new().with_wrap_width(20));
    let lines = formatter.format("Built a high-throughput event-driven system").into_vec();

    assert!(lines.iter().all(|l| l.chars().count() <= 20), "{lines:?}");
    assert!(lines.iter().any(|l| l.ends_with('-')), "{lines:?}");
}

#[test]
fn test_custom_bullet_markers() {
    let formatter = TextFormatter::new(FormatOptions::new().with_bullet("* ", "  "));
    let lines = formatter.format("- one\n- two").into_vec();
    assert_eq!(lines, vec!["* one", "* two"]);
}

#[test]
fn test_headings_upper_case_only_levels_one_and_two() {
    let lines = format_markdown("# Name\n## Section\n### Role Title\nBody").into_vec();
    assert_eq!(
        lines,
        vec!["NAME", "", "SECTION", "", "Role Title", "Body"]
    );
}
