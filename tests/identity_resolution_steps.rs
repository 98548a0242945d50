//! Behaviour tests for identity resolution.

mod identity_steps;

use identity_steps::world::{IdentityWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Home server identity resolves without a search"
)]
#[tokio::test(flavor = "multi_thread")]
async fn home_server_identity(world: IdentityWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Chat identity claimed by one user resolves through a search"
)]
#[tokio::test(flavor = "multi_thread")]
async fn searched_chat_identity(world: IdentityWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Chat identity shared by several users is ambiguous"
)]
#[tokio::test(flavor = "multi_thread")]
async fn shared_chat_identity(world: IdentityWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Unmapped chat identity is not found"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unmapped_chat_identity(world: IdentityWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Malformed identity never reaches the directory"
)]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_identity(world: IdentityWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Several mentions are rejected before the text is read"
)]
#[tokio::test(flavor = "multi_thread")]
async fn several_mentions(world: IdentityWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity_resolution.feature",
    name = "Directory that failed at startup"
)]
#[tokio::test(flavor = "multi_thread")]
async fn directory_failed_at_startup(world: IdentityWorld) {
    let _ = world;
}
