//! Given steps for identity resolution scenarios.

use super::world::IdentityWorld;
use fedora_bot::accounts::domain::DirectoryUser;
use rstest_bdd_macros::given;

#[given("a directory with user {username:string}")]
fn directory_with_user(world: &mut IdentityWorld, username: String) {
    world.directory = world.directory.clone().with_user(DirectoryUser::new(username));
}

#[given("a directory with user {username:string} on chat account {account:string}")]
fn directory_with_chat_account(world: &mut IdentityWorld, username: String, account: String) {
    world.directory = world
        .directory
        .clone()
        .with_user(DirectoryUser::new(username).with_ircnicks([account]));
}

#[given("a directory that failed to start")]
fn directory_failed_to_start(world: &mut IdentityWorld) {
    world.directory_failed = true;
}
