use std::env;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bright_black(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bright_magenta(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::models::ScmStatus;
use crate::segment::SegmentData;

const BRANCH_ICON: &str = "⎇";
const WORKING_ICON: &str = "✎";
const STAGING_ICON: &str = "●";

fn colors_enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

/// Plain segment text: branch, ahead/behind, then working and staging summaries.
pub fn segment_text(data: &SegmentData) -> String {
    render_segment(data, false)
}

fn render_segment(data: &SegmentData, color: bool) -> String {
    let paint = |s: String, f: fn(&str) -> String| if color { f(&s) } else { s };
    let st = &data.status;
    let mut out = String::new();

    if !data.branch.is_empty() {
        out.push_str(&paint(
            format!("{} {}", BRANCH_ICON, data.branch),
            |s| s.bright_magenta().to_string(),
        ));
    }
    if st.ahead > 0 {
        out.push_str(&paint(format!(" ↑{}", st.ahead), |s| s.cyan().to_string()));
    }
    if st.behind > 0 {
        out.push_str(&paint(format!(" ↓{}", st.behind), |s| s.cyan().to_string()));
    }
    if st.working.changed() {
        out.push_str(&paint(format!(" {} {}", WORKING_ICON, st.working), |s| {
            s.yellow().to_string()
        }));
    }
    if st.working.changed() && st.staging.changed() {
        out.push_str(&paint(" |".to_string(), |s| s.bright_black().to_string()));
    }
    if st.staging.changed() {
        out.push_str(&paint(format!(" {} {}", STAGING_ICON, st.staging), |s| {
            s.green().to_string()
        }));
    }
    out.trim_start().to_string()
}

fn status_json(status: &ScmStatus) -> serde_json::Value {
    serde_json::json!({
        "changed": status.changed(),
        "summary": status.to_string(),
        "counts": status,
    })
}

pub fn build_json_output(data: &SegmentData) -> serde_json::Value {
    let st = &data.status;
    serde_json::json!({
        "branch": data.branch,
        "head": st.head,
        "detached": st.is_detached(),
        "commit": st.short_oid(),
        "upstream": st.upstream,
        "ahead": st.ahead,
        "behind": st.behind,
        "changed": st.working.changed() || st.staging.changed(),
        "working": status_json(&st.working),
        "staging": status_json(&st.staging),
        "text": segment_text(data),
    })
}

pub fn print_text_output(data: &SegmentData) {
    println!("{}", render_segment(data, colors_enabled()));
}

pub fn print_json_output(data: &SegmentData) -> anyhow::Result<()> {
    let json = build_json_output(data);
    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}
