//! Then steps for identity resolution scenarios.

use super::world::IdentityWorld;
use fedora_bot::accounts::domain::DirectoryUser;
use fedora_bot::lookup::{AmbiguitySource, LookupError};
use rstest_bdd_macros::then;

fn last_result(world: &IdentityWorld) -> Result<&Result<DirectoryUser, LookupError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing resolution result in scenario world"))
}

#[then(r#"the resolved user is "{username}""#)]
fn resolved_user_is(world: &IdentityWorld, username: String) -> Result<(), eyre::Report> {
    let user = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected resolution failure: {err}"))?;
    if user.username() != username {
        return Err(eyre::eyre!(
            "expected {username}, resolved {}",
            user.username()
        ));
    }
    Ok(())
}

#[then(r#"resolution fails with "{message}""#)]
fn resolution_fails_with(world: &IdentityWorld, message: String) -> Result<(), eyre::Report> {
    let Err(error) = last_result(world)? else {
        return Err(eyre::eyre!("expected resolution to fail"));
    };
    if error.user_message() != message {
        return Err(eyre::eyre!("unexpected message: {}", error.user_message()));
    }
    Ok(())
}

#[then(r#"resolution is ambiguous between "{first}" and "{second}""#)]
fn resolution_is_ambiguous(
    world: &IdentityWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Err(LookupError::AmbiguousMatch {
            reason: AmbiguitySource::SharedMatrixAccount,
            candidates,
            ..
        }) if *candidates == [first.clone(), second.clone()] => Ok(()),
        other => Err(eyre::eyre!(
            "expected ambiguity between {first} and {second}, got {other:?}"
        )),
    }
}

#[then("the directory served {count:usize} calls")]
fn directory_served(world: &IdentityWorld, count: usize) -> Result<(), eyre::Report> {
    let served = world.directory.call_count();
    if served != count {
        return Err(eyre::eyre!("expected {count} directory calls, saw {served}"));
    }
    Ok(())
}
