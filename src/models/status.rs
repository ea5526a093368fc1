use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A class of file-level change reported by the VCS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Untracked,
    Added,
    Modified,
    Deleted,
    Moved,
    Unmerged,
}

impl Category {
    /// Canonical render order for status summaries
    pub const ALL: [Category; 6] = [
        Category::Untracked,
        Category::Added,
        Category::Modified,
        Category::Deleted,
        Category::Moved,
        Category::Unmerged,
    ];

    /// Name used as the key for format overrides
    pub fn name(self) -> &'static str {
        match self {
            Category::Untracked => "Untracked",
            Category::Added => "Added",
            Category::Modified => "Modified",
            Category::Deleted => "Deleted",
            Category::Moved => "Moved",
            Category::Unmerged => "Unmerged",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Category::Untracked => "?",
            Category::Added => "+",
            Category::Modified => "~",
            Category::Deleted => "-",
            Category::Moved => ">",
            Category::Unmerged => "x",
        }
    }

    /// Map a single porcelain status letter onto a category.
    /// Unmodified (`.` or space) and unknown letters map to nothing.
    pub fn from_status_code(code: char) -> Option<Category> {
        match code {
            'M' | 'T' | 'm' => Some(Category::Modified),
            'A' | 'C' => Some(Category::Added),
            'D' => Some(Category::Deleted),
            'R' => Some(Category::Moved),
            'U' => Some(Category::Unmerged),
            _ => None,
        }
    }
}

/// Per-category change counters for one side (working tree or index) of a repository.
///
/// Rendering goes through [`fmt::Display`]: non-zero categories in canonical order,
/// each as `<symbol><count>` unless `formats` carries an override template for the
/// category name, joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScmStatus {
    pub untracked: u32,
    pub added: u32,
    pub modified: u32,
    pub deleted: u32,
    pub moved: u32,
    pub unmerged: u32,
    /// Category name -> template with a single `%d` placeholder
    #[serde(skip)]
    pub formats: HashMap<String, String>,
}

impl ScmStatus {
    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Untracked => self.untracked,
            Category::Added => self.added,
            Category::Modified => self.modified,
            Category::Deleted => self.deleted,
            Category::Moved => self.moved,
            Category::Unmerged => self.unmerged,
        }
    }

    fn count_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Untracked => &mut self.untracked,
            Category::Added => &mut self.added,
            Category::Modified => &mut self.modified,
            Category::Deleted => &mut self.deleted,
            Category::Moved => &mut self.moved,
            Category::Unmerged => &mut self.unmerged,
        }
    }

    pub fn increment(&mut self, category: Category) {
        let slot = self.count_mut(category);
        *slot = slot.saturating_add(1);
    }

    /// Count a porcelain status letter; letters without a category are ignored.
    pub fn add_code(&mut self, code: char) {
        if let Some(category) = Category::from_status_code(code) {
            self.increment(category);
        }
    }

    pub fn changed(&self) -> bool {
        Category::ALL.iter().any(|c| self.count(*c) > 0)
    }

    pub fn with_formats(mut self, formats: HashMap<String, String>) -> Self {
        self.formats = formats;
        self
    }

    fn render_category(&self, category: Category) -> Option<String> {
        let value = self.count(category);
        if value == 0 {
            return None;
        }
        match self.formats.get(category.name()) {
            Some(template) => Some(render_count_template(template, value)),
            None => Some(format!("{}{}", category.symbol(), value)),
        }
    }
}

impl fmt::Display for ScmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Category::ALL
            .iter()
            .filter_map(|c| self.render_category(*c))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// Substitute `value` for the first `%d` in `template`; `%%` renders a literal `%`.
pub fn render_count_template(template: &str, value: u32) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut substituted = false;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('d') if !substituted => {
                chars.next();
                out.push_str(&value.to_string());
                substituted = true;
            }
            _ => out.push('%'),
        }
    }
    out
}
