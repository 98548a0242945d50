//! Reply rendering tests.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use crate::accounts::domain::{DirectoryUser, GroupRole};
use crate::command::{
    registry::CommandRegistry,
    reply::{self, MEMBER_LIST_LIMIT, ReplyFormatter},
};
use crate::lookup::LINE_BREAK;
use crate::packages::domain::PackageAccess;
use crate::tracker::domain::{Issue, IssueQuery};

#[fixture]
fn formatter() -> ReplyFormatter {
    ReplyFormatter::new("https://accounts.example.org/")
}

fn synthetic_users(count: usize) -> Vec<DirectoryUser> {
    (0..count)
        .map(|index| DirectoryUser::new(format!("user{index}")))
        .collect()
}

#[rstest]
fn user_link_points_at_profile(formatter: ReplyFormatter) {
    assert_eq!(
        formatter.user_link("alice"),
        "[alice](https://accounts.example.org/user/alice)"
    );
}

#[rstest]
fn member_list_at_limit_is_enumerated(formatter: ReplyFormatter) {
    let users = synthetic_users(MEMBER_LIST_LIMIT);

    let rendered = formatter.roster("crowd", GroupRole::Members, &users);

    assert!(rendered.starts_with("Members of crowd: [user0]("));
    assert!(rendered.contains("[user199]"));
}

#[rstest]
fn member_list_above_limit_is_summarised(formatter: ReplyFormatter) {
    let users = synthetic_users(MEMBER_LIST_LIMIT + 1);

    let rendered = formatter.roster("crowd", GroupRole::Members, &users);

    assert_eq!(rendered, "crowd has 201 members, too many to list here");
}

#[rstest]
fn sponsor_lists_are_always_enumerated(formatter: ReplyFormatter) {
    let users = synthetic_users(MEMBER_LIST_LIMIT + 1);

    let rendered = formatter.roster("crowd", GroupRole::Sponsors, &users);

    assert!(rendered.starts_with("Sponsors of crowd: "));
    assert!(rendered.contains("[user200]"));
}

#[rstest]
#[case(DirectoryUser::new("bob"), "bob")]
#[case(DirectoryUser::new("bob").with_human_name("Bob Builder"), "Bob Builder (bob)")]
#[case(
    DirectoryUser::new("alex").with_human_name("Alex").with_pronouns(["they/them", "she/her"]),
    "Alex (alex) - they/them or she/her"
)]
fn hello_shows_name_and_pronouns(#[case] user: DirectoryUser, #[case] expected: &str) {
    assert_eq!(reply::hello(&user), expected);
}

#[rstest]
fn user_details_print_none_for_absent_values() {
    let user = DirectoryUser::new("carol")
        .with_human_name("Carol")
        .with_gpg_key_ids(["AAAA", "BBBB"]);

    let expected = [
        "User: carol",
        "Name: Carol",
        "Pronouns: None",
        "Creation: None",
        "Timezone: None",
        "Locale: None",
        "GPG Key IDs: AAAA and BBBB",
    ]
    .join(LINE_BREAK);
    assert_eq!(reply::user_details(&user), expected);
}

#[rstest]
fn user_details_render_creation_as_utc_timestamp() {
    let created = Utc
        .with_ymd_and_hms(2019, 3, 14, 9, 26, 53)
        .single()
        .expect("valid timestamp");
    let user = DirectoryUser::new("dave").with_creation(created);

    assert!(reply::user_details(&user).contains("Creation: 2019-03-14T09:26:53Z"));
}

#[rstest]
#[case(None, r#"User "erin" doesn't share their timezone"#)]
#[case(Some("Mars/Olympus"), r#"The timezone of "erin" was unknown: "Mars/Olympus""#)]
#[case(
    Some("Asia/Kolkata"),
    r#"The current local time of "erin" is: "17:30" (timezone: Asia/Kolkata)"#
)]
fn local_time_reports_by_timezone(#[case] timezone: Option<&str>, #[case] expected: &str) {
    let mut user = DirectoryUser::new("erin");
    if let Some(zone) = timezone {
        user = user.with_timezone(zone);
    }
    let now = Utc
        .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp");

    assert_eq!(reply::local_time(&user, now), expected);
}

#[rstest]
fn package_access_skips_empty_levels() {
    let access = PackageAccess::new("kernel")
        .with_owners(["jforbes"])
        .with_committers(["jwboyer", "jmflinuxtx"]);

    assert_eq!(
        reply::package_access(&access),
        format!("__owner:__ jforbes{LINE_BREAK}__commit:__ jwboyer, jmflinuxtx")
    );
}

#[rstest]
fn unassigned_package_says_so() {
    assert_eq!(
        reply::package_access(&PackageAccess::new("orphan")),
        "No users have access to package orphan."
    );
}

#[rstest]
fn issue_summary_links_the_issue() {
    let issue = Issue::new(
        IssueQuery::new("epel", "123"),
        "Request EPEL branch",
        "https://pagure.io/epel/issue/123",
    );

    assert_eq!(
        reply::issue_summary(&issue),
        "[epel #123](https://pagure.io/epel/issue/123): Request EPEL branch"
    );
}

#[rstest]
fn command_listing_has_one_line_per_command() {
    let registry = CommandRegistry::builtin();

    let listing = reply::command_listing(&registry);
    let lines: Vec<&str> = listing.split(LINE_BREAK).collect();

    assert_eq!(lines.len(), registry.list().len());
    assert!(lines.contains(&"`!members <groupname>`:: Return a list of members of the specified group"));
    assert!(lines.contains(&"`!help [commandname]`:: list commands"));
    assert!(lines.contains(&"`!version`:: return information about this bot"));
}

#[rstest]
fn command_help_lists_aliases() {
    let registry = CommandRegistry::builtin();
    let hello = registry.find("hello").expect("hello is built in");

    let help = reply::command_help(hello);

    assert!(help.starts_with("**Usage:** `!hello [username]` - "));
    assert!(help.contains("#### Aliases ####"));
    assert!(help.contains("* `hellomynameis`"));
}

#[rstest]
fn command_help_without_aliases_has_no_alias_section() {
    let registry = CommandRegistry::builtin();
    let whoowns = registry.find("whoowns").expect("whoowns is built in");

    assert!(!reply::command_help(whoowns).contains("Aliases"));
}
