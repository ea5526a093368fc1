use serde_json::Value;

use prompt_scm::display::{build_json_output, segment_text};
use prompt_scm::models::{GitStatus, ScmStatus};
use prompt_scm::segment::SegmentData;

fn sample() -> SegmentData {
    SegmentData {
        branch: "🚀 search".to_string(),
        status: GitStatus {
            head: Some("feat/search".to_string()),
            oid: Some("0123456789abcdef".to_string()),
            upstream: Some("origin/feat/search".to_string()),
            ahead: 2,
            behind: 0,
            working: ScmStatus {
                modified: 3,
                unmerged: 1,
                ..Default::default()
            },
            staging: ScmStatus {
                added: 1,
                ..Default::default()
            },
        },
    }
}

#[test]
fn json_output_shape() {
    let json: Value = build_json_output(&sample());

    for key in [
        "branch", "head", "detached", "commit", "upstream", "ahead", "behind", "changed",
        "working", "staging", "text",
    ] {
        assert!(json.get(key).is_some(), "missing key: {}", key);
    }

    assert_eq!(json["branch"], "🚀 search");
    assert_eq!(json["head"], "feat/search");
    assert_eq!(json["detached"], false);
    assert_eq!(json["commit"], "0123456");
    assert_eq!(json["ahead"], 2);
    assert_eq!(json["changed"], true);

    assert_eq!(json["working"]["changed"], true);
    assert_eq!(json["working"]["summary"], "~3 x1");
    assert_eq!(json["working"]["counts"]["modified"], 3);
    assert_eq!(json["working"]["counts"]["unmerged"], 1);
    assert!(json["working"]["counts"].get("formats").is_none());
    assert_eq!(json["staging"]["summary"], "+1");
}

#[test]
fn json_output_clean_detached() {
    let data = SegmentData {
        branch: "(detached@0123456)".to_string(),
        status: GitStatus {
            oid: Some("0123456789".to_string()),
            ..Default::default()
        },
    };
    let json = build_json_output(&data);
    assert_eq!(json["detached"], true);
    assert!(json["head"].is_null());
    assert_eq!(json["changed"], false);
    assert_eq!(json["working"]["summary"], "");
    assert_eq!(json["text"], "⎇ (detached@0123456)");
}

#[test]
fn text_output_layout() {
    assert_eq!(segment_text(&sample()), "⎇ 🚀 search ↑2 ✎ ~3 x1 | ● +1");

    let mut only_staged = sample();
    only_staged.status.working = ScmStatus::default();
    only_staged.status.ahead = 0;
    assert_eq!(segment_text(&only_staged), "⎇ 🚀 search ● +1");
}
