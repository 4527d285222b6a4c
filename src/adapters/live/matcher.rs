//! Structural field-by-field matcher with noise masking.

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use serde_json::Value;

use crate::noise::NoiseMask;
use crate::ports::matcher::{CaseMatcher, FieldDiff, MatchVerdict, SideReport};
use crate::record::{RecordedCase, RequestRecord, ResponseRecord};

/// Rendered stand-in for a value absent on one side.
const MISSING: &str = "<missing>";

/// Matcher comparing method, url, status, headers, and bodies.
///
/// Bodies that parse as JSON on both sides are diffed recursively into
/// dotted paths (`resp.body.user.token`); any other body is a single field.
/// Differences whose path is covered by the noise mask are forgiven; see
/// [`crate::noise`] for rule semantics.
#[derive(Default)]
pub struct StructuralMatcher;

impl StructuralMatcher {
    /// Creates a structural matcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CaseMatcher for StructuralMatcher {
    fn compare(
        &self,
        pre_rec: &RecordedCase,
        test_bench: &RecordedCase,
        noise: &NoiseMask,
    ) -> MatchVerdict {
        let request = apply_mask(request_diffs(&pre_rec.request, &test_bench.request), noise);
        let response = apply_mask(response_diffs(&pre_rec.response, &test_bench.response), noise);
        MatchVerdict::from_sides(request, response)
    }
}

fn request_diffs(pre_rec: &RequestRecord, test_bench: &RequestRecord) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();
    push_if_differs(&mut diffs, "req.method", &pre_rec.method, &test_bench.method);
    push_if_differs(&mut diffs, "req.url", &pre_rec.url, &test_bench.url);
    header_diffs(&mut diffs, "req.header", &pre_rec.headers, &test_bench.headers);
    body_diffs(&mut diffs, "req.body", &pre_rec.body, &test_bench.body);
    diffs
}

fn response_diffs(pre_rec: &ResponseRecord, test_bench: &ResponseRecord) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();
    push_if_differs(
        &mut diffs,
        "resp.status",
        &pre_rec.status.to_string(),
        &test_bench.status.to_string(),
    );
    header_diffs(&mut diffs, "resp.header", &pre_rec.headers, &test_bench.headers);
    body_diffs(&mut diffs, "resp.body", &pre_rec.body, &test_bench.body);
    diffs
}

fn push_if_differs(diffs: &mut Vec<FieldDiff>, field: &str, pre_rec: &str, test_bench: &str) {
    if pre_rec != test_bench {
        diffs.push(FieldDiff {
            field: field.to_string(),
            pre_rec: pre_rec.to_string(),
            test_bench: test_bench.to_string(),
        });
    }
}

/// Compares the union of header keys; header names are lowercased in the
/// diff path so mask entries stay case-insensitive.
fn header_diffs(
    diffs: &mut Vec<FieldDiff>,
    prefix: &str,
    pre_rec: &BTreeMap<String, String>,
    test_bench: &BTreeMap<String, String>,
) {
    let keys: BTreeSet<&String> = pre_rec.keys().chain(test_bench.keys()).collect();
    for key in keys {
        let a = pre_rec.get(key).map_or(MISSING, String::as_str);
        let b = test_bench.get(key).map_or(MISSING, String::as_str);
        if a != b {
            diffs.push(FieldDiff {
                field: format!("{prefix}.{}", key.to_lowercase()),
                pre_rec: a.to_string(),
                test_bench: b.to_string(),
            });
        }
    }
}

fn body_diffs(diffs: &mut Vec<FieldDiff>, prefix: &str, pre_rec: &str, test_bench: &str) {
    if pre_rec == test_bench {
        return;
    }
    match (
        serde_json::from_str::<Value>(pre_rec),
        serde_json::from_str::<Value>(test_bench),
    ) {
        (Ok(a), Ok(b)) => json_diffs(diffs, prefix, &a, &b),
        _ => diffs.push(FieldDiff {
            field: prefix.to_string(),
            pre_rec: pre_rec.to_string(),
            test_bench: test_bench.to_string(),
        }),
    }
}

/// Recursive JSON diff producing one leaf entry per divergent path.
///
/// Objects recurse over the key union, arrays recurse index-wise when the
/// lengths agree and report a single diff at the array path otherwise.
fn json_diffs(diffs: &mut Vec<FieldDiff>, path: &str, pre_rec: &Value, test_bench: &Value) {
    match (pre_rec, test_bench) {
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            for key in keys {
                let sub_path = format!("{path}.{key}");
                match (a.get(key.as_str()), b.get(key.as_str())) {
                    (Some(va), Some(vb)) => json_diffs(diffs, &sub_path, va, vb),
                    (Some(va), None) => push_leaf(diffs, &sub_path, &render(va), MISSING),
                    (None, Some(vb)) => push_leaf(diffs, &sub_path, MISSING, &render(vb)),
                    (None, None) => {}
                }
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.len() == b.len() {
                for (index, (va, vb)) in a.iter().zip(b).enumerate() {
                    json_diffs(diffs, &format!("{path}.{index}"), va, vb);
                }
            } else {
                push_leaf(diffs, path, &render(pre_rec), &render(test_bench));
            }
        }
        _ => {
            if pre_rec != test_bench {
                push_leaf(diffs, path, &render(pre_rec), &render(test_bench));
            }
        }
    }
}

fn push_leaf(diffs: &mut Vec<FieldDiff>, field: &str, pre_rec: &str, test_bench: &str) {
    diffs.push(FieldDiff {
        field: field.to_string(),
        pre_rec: pre_rec.to_string(),
        test_bench: test_bench.to_string(),
    });
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn apply_mask(diffs: Vec<FieldDiff>, noise: &NoiseMask) -> SideReport {
    let surviving: Vec<FieldDiff> =
        diffs.into_iter().filter(|diff| !is_masked(diff, noise)).collect();
    SideReport { matched: surviving.is_empty(), diffs: surviving }
}

fn is_masked(diff: &FieldDiff, noise: &NoiseMask) -> bool {
    noise
        .iter()
        .any(|(path, rules)| covers(path, &diff.field) && rules_permit(rules, diff))
}

/// A mask path covers a diff path when equal or when the diff path is
/// nested under it (`resp.body` covers `resp.body.token`).
fn covers(mask_path: &str, field: &str) -> bool {
    field == mask_path
        || field
            .strip_prefix(mask_path)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Empty rule lists mask unconditionally; otherwise both recorded values
/// must match at least one rule. An unparseable rule never masks.
fn rules_permit(rules: &[String], diff: &FieldDiff) -> bool {
    if rules.is_empty() {
        return true;
    }
    let matches_any = |value: &str| {
        rules.iter().any(|rule| Regex::new(rule).is_ok_and(|re| re.is_match(value)))
    };
    matches_any(&diff.pre_rec) && matches_any(&diff.test_bench)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn base_case() -> RecordedCase {
        RecordedCase {
            name: "case-1".into(),
            request: RequestRecord {
                method: "GET".into(),
                url: "http://localhost/cart".into(),
                headers: BTreeMap::from([("Accept".to_string(), "application/json".to_string())]),
                body: String::new(),
                timestamp: "2025-05-01T10:00:00Z".parse().unwrap(),
            },
            response: ResponseRecord {
                status: 200,
                headers: BTreeMap::from([("Date".to_string(), "Thu, 01 May 2025".to_string())]),
                body: r#"{"user":{"id":7,"token":"abc"}}"#.into(),
                timestamp: "2025-05-01T10:00:01Z".parse().unwrap(),
            },
        }
    }

    fn mask(entries: &[(&str, &[&str])]) -> NoiseMask {
        entries
            .iter()
            .map(|(path, rules)| {
                ((*path).to_string(), rules.iter().map(|r| (*r).to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn identical_cases_match() {
        let case = base_case();
        let verdict = StructuralMatcher.compare(&case, &case, &NoiseMask::new());
        assert!(verdict.matched);
        assert!(verdict.request.diffs.is_empty());
        assert!(verdict.response.diffs.is_empty());
    }

    #[test]
    fn differing_method_fails_the_request_side() {
        let pre = base_case();
        let mut bench = base_case();
        bench.request.method = "POST".into();

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert!(!verdict.matched);
        assert!(!verdict.request.matched);
        assert!(verdict.response.matched);
        assert_eq!(verdict.request.diffs[0].field, "req.method");
    }

    #[test]
    fn differing_status_fails_the_response_side() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.status = 500;

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert!(verdict.request.matched);
        assert_eq!(verdict.response.diffs[0].field, "resp.status");
        assert_eq!(verdict.response.diffs[0].pre_rec, "200");
        assert_eq!(verdict.response.diffs[0].test_bench, "500");
    }

    #[test]
    fn header_only_on_one_side_renders_missing() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.headers.insert("X-Request-Id".into(), "r-1".into());

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        let diff = &verdict.response.diffs[0];
        assert_eq!(diff.field, "resp.header.x-request-id");
        assert_eq!(diff.pre_rec, MISSING);
        assert_eq!(diff.test_bench, "r-1");
    }

    #[test]
    fn masked_header_difference_is_forgiven() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.headers.insert("Date".into(), "Fri, 02 May 2025".into());

        let noise = mask(&[("resp.header.date", &[])]);
        let verdict = StructuralMatcher.compare(&pre, &bench, &noise);
        assert!(verdict.matched);
    }

    #[test]
    fn json_bodies_diff_by_nested_path() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.body = r#"{"user":{"id":7,"token":"xyz"}}"#.into();

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert_eq!(verdict.response.diffs.len(), 1);
        assert_eq!(verdict.response.diffs[0].field, "resp.body.user.token");
        assert_eq!(verdict.response.diffs[0].pre_rec, "abc");
        assert_eq!(verdict.response.diffs[0].test_bench, "xyz");
    }

    #[test]
    fn mask_prefix_forgives_nested_body_paths() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.body = r#"{"user":{"id":7,"token":"xyz"}}"#.into();

        let exact = mask(&[("resp.body.user.token", &[])]);
        assert!(StructuralMatcher.compare(&pre, &bench, &exact).matched);

        let prefix = mask(&[("resp.body", &[])]);
        assert!(StructuralMatcher.compare(&pre, &bench, &prefix).matched);

        // An unrelated sibling path does not cover it.
        let unrelated = mask(&[("resp.body.user.id", &[])]);
        assert!(!StructuralMatcher.compare(&pre, &bench, &unrelated).matched);
    }

    #[test]
    fn rules_mask_only_when_both_sides_match() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.body = r#"{"user":{"id":7,"token":"de4db33f"}}"#.into();

        let hex_rule = mask(&[("resp.body.user.token", &["^[0-9a-f]+$"])]);
        // Pre-recorded "abc" and test-bench "de4db33f" are both hex: masked.
        assert!(StructuralMatcher.compare(&pre, &bench, &hex_rule).matched);

        let digits_rule = mask(&[("resp.body.user.token", &["^[0-9]+$"])]);
        // Neither value is all digits: the difference survives.
        assert!(!StructuralMatcher.compare(&pre, &bench, &digits_rule).matched);
    }

    #[test]
    fn invalid_rule_never_masks() {
        let pre = base_case();
        let mut bench = base_case();
        bench.response.body = r#"{"user":{"id":7,"token":"xyz"}}"#.into();

        let broken = mask(&[("resp.body.user.token", &["[unclosed"])]);
        assert!(!StructuralMatcher.compare(&pre, &bench, &broken).matched);
    }

    #[test]
    fn non_json_bodies_diff_as_single_field() {
        let mut pre = base_case();
        let mut bench = base_case();
        pre.response.body = "plain one".into();
        bench.response.body = "plain two".into();

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert_eq!(verdict.response.diffs.len(), 1);
        assert_eq!(verdict.response.diffs[0].field, "resp.body");
    }

    #[test]
    fn json_bodies_equal_modulo_whitespace_match() {
        let mut pre = base_case();
        let mut bench = base_case();
        pre.response.body = r#"{"a":1,"b":2}"#.into();
        bench.response.body = "{ \"b\": 2, \"a\": 1 }".into();

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert!(verdict.matched);
    }

    #[test]
    fn array_length_mismatch_reports_the_array_path() {
        let mut pre = base_case();
        let mut bench = base_case();
        pre.response.body = r#"{"items":[1,2]}"#.into();
        bench.response.body = r#"{"items":[1]}"#.into();

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert_eq!(verdict.response.diffs[0].field, "resp.body.items");
    }

    #[test]
    fn array_elements_diff_by_index() {
        let mut pre = base_case();
        let mut bench = base_case();
        pre.response.body = r#"{"items":[{"sku":"a"},{"sku":"b"}]}"#.into();
        bench.response.body = r#"{"items":[{"sku":"a"},{"sku":"c"}]}"#.into();

        let verdict = StructuralMatcher.compare(&pre, &bench, &NoiseMask::new());
        assert_eq!(verdict.response.diffs[0].field, "resp.body.items.1.sku");
    }
}
