//! Unit tests for the tracker context.

use rstest::rstest;

use crate::tracker::domain::{Issue, IssueQuery};

#[rstest]
#[case("", None)]
#[case("   ", None)]
#[case("rpms", Some("rpms"))]
fn blank_namespaces_are_ignored(#[case] namespace: &str, #[case] expected: Option<&str>) {
    let query = IssueQuery::new("epel", "42").with_namespace(namespace);

    assert_eq!(query.namespace(), expected);
}

#[rstest]
fn query_display_includes_namespace() {
    let plain = IssueQuery::new("fesco", "7");
    let namespaced = IssueQuery::new("kernel", "7").with_namespace("rpms");

    assert_eq!(plain.to_string(), "fesco #7");
    assert_eq!(namespaced.to_string(), "rpms/kernel #7");
}

#[rstest]
fn issue_exposes_query_fields() {
    let issue = Issue::new(
        IssueQuery::new("epel", "12"),
        "Add package",
        "https://pagure.io/epel/issue/12",
    );

    assert_eq!(issue.project(), "epel");
    assert_eq!(issue.issue_id(), "12");
    assert_eq!(issue.namespace(), None);
    assert_eq!(issue.title(), "Add package");
    assert_eq!(issue.full_url(), "https://pagure.io/epel/issue/12");
}
