use prompt_scm::branch::{BranchFormatter, BranchOptions};
use std::collections::BTreeMap;

fn mapped() -> BTreeMap<String, String> {
    let mut m = BTreeMap::new();
    m.insert("feat/*".to_string(), "🚀 ".to_string());
    m.insert("bug/*".to_string(), "🐛 ".to_string());
    m
}

fn format(options: BranchOptions, input: &str) -> String {
    BranchFormatter::new(&options).format_branch(input)
}

#[test]
fn test_format_branch() {
    struct Case {
        case: &'static str,
        input: &'static str,
        expected: &'static str,
        max: usize,
        symbol: &'static str,
        full_path: bool,
        mapped: BTreeMap<String, String>,
    }
    let base = |case, input, expected| Case {
        case,
        input,
        expected,
        max: 0,
        symbol: "",
        full_path: true,
        mapped: BTreeMap::new(),
    };
    let cases = vec![
        base("No settings", "main", "main"),
        Case { max: 10, ..base("Max length higher than branch name", "main", "main") },
        Case {
            max: 5,
            ..base("Max length lower than branch name", "feature/test-this-branch", "featu")
        },
        Case {
            max: 5,
            symbol: "…",
            ..base("With truncate symbol", "feature/test-this-branch", "feat…")
        },
        Case {
            max: 5,
            symbol: "…",
            full_path: false,
            ..base("Truncate symbol and short path", "feature/test-this-branch", "test…")
        },
        Case {
            max: 5,
            symbol: "…",
            ..base("Shorter than max with truncate symbol", "feat", "feat")
        },
        Case {
            mapped: mapped(),
            ..base("Branch mapping", "feat/my-new-feature", "🚀 my-new-feature")
        },
        Case {
            max: 5,
            mapped: mapped(),
            ..base("Branch mapping with max length", "feat/my-new-feature", "🚀 my-")
        },
        Case {
            full_path: false,
            mapped: mapped(),
            ..base("Branch mapping with nested path", "bug/auth/login-loop", "🐛 login-loop")
        },
        Case {
            mapped: mapped(),
            ..base("Branch mapping without match", "release/1.0", "release/1.0")
        },
        base("Empty branch", "", ""),
    ];

    for c in cases {
        let options = BranchOptions {
            branch_max_length: c.max,
            truncate_symbol: c.symbol.to_string(),
            full_branch_path: c.full_path,
            mapped_branches: c.mapped,
            ..Default::default()
        };
        assert_eq!(format(options, c.input), c.expected, "{}", c.case);
    }
}

#[test]
fn test_branch_patterns() {
    let cases: Vec<(&str, &str, Vec<&str>, &str)> = vec![
        ("No patterns", "main", vec![], "main"),
        ("No match", "main", vec!["feature/(.*)"], "main"),
        ("Match", "feature/my-new-feature", vec!["feature/(.*)"], "feature/my-new-feature"),
        ("Index omitted", "feature/my-new-feature", vec!["feature/(.*):"], "feature/my-new-feature"),
        ("Match with index", "feature/my-new-feature", vec!["feature/(.*):1"], "my-new-feature"),
        (
            "Index not a number",
            "feature/my-new-feature",
            vec!["feature/(.*):not-a-number"],
            "feature/my-new-feature",
        ),
        ("Index out of bounds", "feature/my-new-feature", vec!["feature/(.*):2"], "feature/my-new-feature"),
        ("Negative index", "feature/my-new-feature", vec!["feature/(.*):-2"], "feature/my-new-feature"),
        (
            "Multiple patterns",
            "feature/my-new-feature",
            vec!["no-match/(.*):1", "(.*)/(.*):2"],
            "my-new-feature",
        ),
        (
            "First match governs even without a usable group",
            "feature/my-new-feature",
            vec!["feature/(.*):5", "(.*)/(.*):2"],
            "feature/my-new-feature",
        ),
        (
            "Invalid regex is skipped",
            "feature/my-new-feature",
            vec!["feature/((.*):1", "feature/(.*):1"],
            "my-new-feature",
        ),
        (
            "Optional group that did not participate",
            "feature/x",
            vec!["feature/(y)?x:1"],
            "feature/x",
        ),
        ("Group zero is the whole match", "JIRA-42-fix-login", vec!["[A-Z]+-[0-9]+:0"], "JIRA-42"),
    ];

    for (case, input, patterns, expected) in cases {
        let options = BranchOptions {
            branch_patterns: patterns.into_iter().map(String::from).collect(),
            ..Default::default()
        };
        assert_eq!(format(options, input), expected, "{}", case);
    }
}

#[test]
fn test_patterns_run_before_mapping() {
    let options = BranchOptions {
        branch_patterns: vec!["^(feat/[A-Z]+-[0-9]+):1".to_string()],
        mapped_branches: mapped(),
        ..Default::default()
    };
    assert_eq!(format(options, "feat/PROJECT-123-with-long-name"), "🚀 PROJECT-123");
}

#[test]
fn test_truncate_symbol_longer_than_budget() {
    let options = BranchOptions {
        branch_max_length: 2,
        truncate_symbol: "...".to_string(),
        ..Default::default()
    };
    assert_eq!(format(options, "feature"), "...");
}

#[test]
fn test_formatter_is_reusable() {
    let formatter = BranchFormatter::new(&BranchOptions {
        branch_max_length: 4,
        ..Default::default()
    });
    assert_eq!(formatter.format_branch("main"), "main");
    assert_eq!(formatter.format_branch("develop"), "deve");
}
