//! # Branch Module
//!
//! Turns a raw branch name into the string shown in the prompt.
//!
//! ## Pipeline
//!
//! 1. Regex extraction (`regex[:index]` patterns, first match governs)
//! 2. Glob to label mapping (`feat/*` -> `🚀 `)
//! 3. Optional reduction to the last path segment
//! 4. Truncation to a character budget with an optional symbol

use regex::Regex;
use std::collections::BTreeMap;

/// User-facing branch options, resolved from CLI and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOptions {
    /// 0 disables truncation
    pub branch_max_length: usize,
    pub truncate_symbol: String,
    pub full_branch_path: bool,
    pub branch_patterns: Vec<String>,
    pub mapped_branches: BTreeMap<String, String>,
}

impl Default for BranchOptions {
    fn default() -> Self {
        Self {
            branch_max_length: 0,
            truncate_symbol: String::new(),
            full_branch_path: true,
            branch_patterns: Vec::new(),
            mapped_branches: BTreeMap::new(),
        }
    }
}

/// Capture group selector parsed from the `:N` suffix of a branch pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureIndex {
    /// No `:` or nothing after it
    Omitted,
    Group(usize),
    /// Non-numeric or negative suffix
    Invalid,
}

#[derive(Debug, Clone)]
pub struct BranchPattern {
    pub source: String,
    /// `None` when the body is not a valid regex
    pub regex: Option<Regex>,
    pub index: CaptureIndex,
}

impl BranchPattern {
    /// Split `pattern` on its last `:` into regex body and capture index.
    pub fn parse(pattern: &str) -> Self {
        let (body, index) = match pattern.rsplit_once(':') {
            None => (pattern, CaptureIndex::Omitted),
            Some((body, "")) => (body, CaptureIndex::Omitted),
            Some((body, suffix)) => (body, parse_capture_index(suffix)),
        };
        let regex = match Regex::new(body) {
            Ok(re) => Some(re),
            Err(e) => {
                log::debug!("ignoring branch pattern {:?}: {}", pattern, e);
                None
            }
        };
        Self {
            source: pattern.to_string(),
            regex,
            index,
        }
    }

    /// `None` when the pattern does not apply, so the next one is tried.
    /// `Some(raw)` when it matched but no usable group was selected.
    pub fn extract<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let re = self.regex.as_ref()?;
        let caps = re.captures(raw)?;
        let extracted = match self.index {
            CaptureIndex::Group(i) => caps.get(i).map(|m| m.as_str()),
            CaptureIndex::Omitted | CaptureIndex::Invalid => None,
        };
        Some(extracted.unwrap_or(raw))
    }
}

fn parse_capture_index(suffix: &str) -> CaptureIndex {
    match suffix.parse::<i64>() {
        Ok(n) if n >= 0 => usize::try_from(n)
            .map(CaptureIndex::Group)
            .unwrap_or(CaptureIndex::Invalid),
        _ => CaptureIndex::Invalid,
    }
}

/// A `glob -> label` rule. `*` matches any run of characters (slashes included),
/// `?` exactly one.
#[derive(Debug, Clone)]
pub struct BranchMapping {
    pub glob: String,
    pub label: String,
    matcher: Option<Regex>,
    /// Literal text before the first wildcard, removed from the name on match
    prefix: String,
}

impl BranchMapping {
    pub fn new(glob: &str, label: &str) -> Self {
        let prefix: String = glob.chars().take_while(|c| *c != '*' && *c != '?').collect();
        let matcher = match Regex::new(&glob_to_regex(glob)) {
            Ok(re) => Some(re),
            Err(e) => {
                log::debug!("ignoring branch mapping {:?}: {}", glob, e);
                None
            }
        };
        Self {
            glob: glob.to_string(),
            label: label.to_string(),
            matcher,
            prefix,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Name with the glob's literal prefix removed.
    fn strip<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.prefix.as_str()).unwrap_or(name)
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut pattern = String::from("^");
    let mut literal = String::new();
    for c in glob.chars() {
        match c {
            '*' | '?' => {
                pattern.push_str(&regex::escape(&literal));
                literal.clear();
                pattern.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    pattern.push_str(&regex::escape(&literal));
    pattern.push('$');
    pattern
}

/// Branch name formatter with patterns and mappings compiled once per session.
#[derive(Debug, Clone)]
pub struct BranchFormatter {
    max_length: usize,
    truncate_symbol: String,
    full_branch_path: bool,
    patterns: Vec<BranchPattern>,
    mappings: Vec<BranchMapping>,
}

impl BranchFormatter {
    pub fn new(options: &BranchOptions) -> Self {
        Self {
            max_length: options.branch_max_length,
            truncate_symbol: options.truncate_symbol.clone(),
            full_branch_path: options.full_branch_path,
            patterns: options
                .branch_patterns
                .iter()
                .map(|p| BranchPattern::parse(p))
                .collect(),
            mappings: options
                .mapped_branches
                .iter()
                .map(|(glob, label)| BranchMapping::new(glob, label))
                .collect(),
        }
    }

    pub fn format_branch(&self, raw: &str) -> String {
        let extracted = self.extract(raw);

        let (label, mut name) = match self.mappings.iter().find(|m| m.matches(extracted)) {
            Some(mapping) => (mapping.label.as_str(), mapping.strip(extracted)),
            None => ("", extracted),
        };

        if !self.full_branch_path {
            if let Some((_, last)) = name.rsplit_once('/') {
                name = last;
            }
        }

        self.truncate(label, name)
    }

    fn extract<'a>(&self, raw: &'a str) -> &'a str {
        self.patterns
            .iter()
            .find_map(|p| p.extract(raw))
            .unwrap_or(raw)
    }

    /// The budget covers label, name and symbol; the label itself is never cut.
    fn truncate(&self, label: &str, name: &str) -> String {
        let label_len = label.chars().count();
        let name_len = name.chars().count();
        if self.max_length == 0 || label_len + name_len <= self.max_length {
            return format!("{label}{name}");
        }
        let keep = self
            .max_length
            .saturating_sub(label_len)
            .saturating_sub(self.truncate_symbol.chars().count());
        let cut: String = name.chars().take(keep).collect();
        format!("{label}{cut}{}", self.truncate_symbol)
    }
}
