//! When steps for identity resolution scenarios.

use super::world::{IdentityWorld, SENDER};
use fedora_bot::accounts::domain::LookupRequest;
use rstest_bdd_macros::when;

#[when(r#""{input}" is resolved"#)]
fn input_is_resolved(world: &mut IdentityWorld, input: String) {
    world.resolve(&LookupRequest::new(input, SENDER));
}

#[when(r#"a message mentioning "{first}" and "{second}" is resolved"#)]
fn mentions_are_resolved(world: &mut IdentityWorld, first: String, second: String) {
    let body = format!(
        r#"<a href="https://matrix.to/#/{first}">one</a> and <a href="https://matrix.to/#/{second}">two</a>"#
    );
    world.resolve(&LookupRequest::new("one two", SENDER).with_formatted_body(body));
}
