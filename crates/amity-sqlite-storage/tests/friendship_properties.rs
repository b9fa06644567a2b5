//! Invariant tests for the friendship edge state machine and the
//! profile aggregations, run against an in-memory SQLite store.

use amity_core::FriendshipStatus;
use amity_core::SocialGraphError;
use amity_core::SocialGraphStore;
use amity_core::UserId;
use amity_sqlite_storage::SqliteSocialGraph;
use amity_sqlite_storage::StoreConfig;

async fn store() -> SqliteSocialGraph {
    SqliteSocialGraph::connect(&StoreConfig::in_memory())
        .await
        .expect("in-memory store should open")
}

async fn add_user(store: &SqliteSocialGraph, id: &str) -> UserId {
    let user = UserId::parse(id).expect("fixture id is valid");
    store
        .insert_user(&user, &format!("{} Example", id), "+1 555 0100")
        .await
        .expect("fixture user should insert");
    user
}

/// Rows stored for one ordered pair. The pair constraint should keep
/// this at zero or one forever.
async fn pair_row_count(store: &SqliteSocialGraph, a: &UserId, b: &UserId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM friendships WHERE user_id = ?1 AND friend_user_id = ?2")
        .bind(a.as_str())
        .bind(b.as_str())
        .fetch_one(store.pool())
        .await
        .expect("count query should run")
}

/// Establish an accepted friendship: `a` sends, `b` accepts.
async fn befriend(store: &SqliteSocialGraph, a: &UserId, b: &UserId) {
    store.upsert_friend_request(a, b).await.expect("send should succeed");
    store.accept_friend_request(b, a).await.expect("accept should succeed");
}

// ============================================================================
// State machine transitions
// ============================================================================

#[tokio::test]
async fn resend_after_decline_reuses_the_edge() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    store.upsert_friend_request(&alice, &bob).await.expect("first send");
    store.decline_friend_request(&bob, &alice).await.expect("decline");
    assert_eq!(
        store.edge_status(&alice, &bob).await.expect("read edge"),
        Some(FriendshipStatus::Declined)
    );

    // A declined edge must not block re-sending.
    store.upsert_friend_request(&alice, &bob).await.expect("re-send");
    assert_eq!(
        store.edge_status(&alice, &bob).await.expect("read edge"),
        Some(FriendshipStatus::Requested)
    );
    assert_eq!(pair_row_count(&store, &alice, &bob).await, 1);
}

#[tokio::test]
async fn resend_overwrites_even_an_accepted_edge() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;
    befriend(&store, &alice, &bob).await;

    // Send is a plain upsert: any existing status for the pair is
    // overwritten, the reciprocal edge is not consulted.
    store.upsert_friend_request(&alice, &bob).await.expect("re-send");
    assert_eq!(
        store.edge_status(&alice, &bob).await.expect("read edge"),
        Some(FriendshipStatus::Requested)
    );
    assert_eq!(
        store.edge_status(&bob, &alice).await.expect("read edge"),
        Some(FriendshipStatus::Accepted)
    );
    assert_eq!(pair_row_count(&store, &alice, &bob).await, 1);
}

#[tokio::test]
async fn accept_establishes_symmetric_accepted_edges() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    store.upsert_friend_request(&alice, &bob).await.expect("send");
    store.accept_friend_request(&bob, &alice).await.expect("accept");

    assert_eq!(
        store.edge_status(&alice, &bob).await.expect("read edge"),
        Some(FriendshipStatus::Accepted)
    );
    assert_eq!(
        store.edge_status(&bob, &alice).await.expect("read edge"),
        Some(FriendshipStatus::Accepted)
    );
    assert_eq!(pair_row_count(&store, &alice, &bob).await, 1);
    assert_eq!(pair_row_count(&store, &bob, &alice).await, 1);
}

#[tokio::test]
async fn accept_updates_an_existing_reciprocal_edge_in_place() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    // Both sides sent requests; the reciprocal edge already exists.
    store.upsert_friend_request(&alice, &bob).await.expect("alice sends");
    store.upsert_friend_request(&bob, &alice).await.expect("bob sends");

    store.accept_friend_request(&bob, &alice).await.expect("accept");

    assert_eq!(
        store.edge_status(&bob, &alice).await.expect("read edge"),
        Some(FriendshipStatus::Accepted)
    );
    assert_eq!(pair_row_count(&store, &alice, &bob).await, 1);
    assert_eq!(pair_row_count(&store, &bob, &alice).await, 1);
}

#[tokio::test]
async fn decline_leaves_the_reciprocal_edge_alone() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    store.upsert_friend_request(&alice, &bob).await.expect("alice sends");
    store.upsert_friend_request(&bob, &alice).await.expect("bob sends");

    store.decline_friend_request(&bob, &alice).await.expect("decline");

    assert_eq!(
        store.edge_status(&alice, &bob).await.expect("read edge"),
        Some(FriendshipStatus::Declined)
    );
    assert_eq!(
        store.edge_status(&bob, &alice).await.expect("read edge"),
        Some(FriendshipStatus::Requested)
    );
}

#[tokio::test]
async fn accept_without_pending_request_changes_nothing() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    let err = store
        .accept_friend_request(&bob, &alice)
        .await
        .expect_err("no pending request to accept");
    assert!(matches!(err, SocialGraphError::NoPendingRequest { .. }));

    assert_eq!(store.edge_status(&alice, &bob).await.expect("read edge"), None);
    assert_eq!(store.edge_status(&bob, &alice).await.expect("read edge"), None);
}

#[tokio::test]
async fn accept_rolls_back_when_the_reciprocal_write_fails() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    store.upsert_friend_request(&alice, &bob).await.expect("send");

    // Make the reciprocal insert fail after the pending edge has been
    // updated, so the transaction must undo step 1.
    sqlx::query(
        r#"CREATE TRIGGER reject_reciprocal BEFORE INSERT ON friendships
WHEN NEW.user_id = 'bob' AND NEW.friend_user_id = 'alice'
BEGIN SELECT RAISE(ABORT, 'reciprocal write rejected'); END"#,
    )
    .execute(store.pool())
    .await
    .expect("trigger should install");

    let err = store
        .accept_friend_request(&bob, &alice)
        .await
        .expect_err("accept must fail when the reciprocal write fails");
    assert!(matches!(err, SocialGraphError::Storage { .. }));

    // No partial accept: step 1's update was rolled back with the rest.
    assert_eq!(
        store.edge_status(&alice, &bob).await.expect("read edge"),
        Some(FriendshipStatus::Requested)
    );
    assert_eq!(store.edge_status(&bob, &alice).await.expect("read edge"), None);
}

#[tokio::test]
async fn accept_is_not_replayable_once_settled() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;
    befriend(&store, &alice, &bob).await;

    // The edge is already accepted; there is no pending request left.
    let err = store
        .accept_friend_request(&bob, &alice)
        .await
        .expect_err("second accept must fail");
    assert!(matches!(err, SocialGraphError::NoPendingRequest { .. }));
}

#[tokio::test]
async fn decline_without_pending_request_is_rejected() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    let err = store
        .decline_friend_request(&bob, &alice)
        .await
        .expect_err("nothing to decline");
    assert!(matches!(err, SocialGraphError::NoPendingRequest { .. }));
}

#[tokio::test]
async fn send_to_missing_user_writes_no_row() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let ghost = UserId::parse("ghost").expect("valid id");

    // The handler guard rejects this earlier; the foreign key is the
    // storage-level backstop.
    let err = store
        .upsert_friend_request(&alice, &ghost)
        .await
        .expect_err("foreign key must reject the edge");
    assert!(matches!(err, SocialGraphError::Storage { .. }));
    assert_eq!(pair_row_count(&store, &alice, &ghost).await, 0);
}

// ============================================================================
// Probes
// ============================================================================

#[tokio::test]
async fn pending_request_probe_tracks_the_edge_state() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;

    assert!(!store.has_pending_request(&alice, &bob).await.expect("probe"));
    store.upsert_friend_request(&alice, &bob).await.expect("send");
    assert!(store.has_pending_request(&alice, &bob).await.expect("probe"));
    // Direction matters: bob has not sent anything.
    assert!(!store.has_pending_request(&bob, &alice).await.expect("probe"));

    store.decline_friend_request(&bob, &alice).await.expect("decline");
    assert!(!store.has_pending_request(&alice, &bob).await.expect("probe"));
}

#[tokio::test]
async fn user_exists_probe() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let ghost = UserId::parse("ghost").expect("valid id");

    assert!(store.user_exists(&alice).await.expect("probe"));
    assert!(!store.user_exists(&ghost).await.expect("probe"));
}

// ============================================================================
// Profile aggregation
// ============================================================================

#[tokio::test]
async fn mutual_count_reflects_shared_accepted_friends() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;
    let xavier = add_user(&store, "xavier").await;
    let yann = add_user(&store, "yann").await;
    let zoe = add_user(&store, "zoe").await;
    let wanda = add_user(&store, "wanda").await;

    // alice: {xavier, yann, zoe, bob}; bob: {yann, zoe, wanda, alice}.
    befriend(&store, &alice, &xavier).await;
    befriend(&store, &alice, &yann).await;
    befriend(&store, &alice, &zoe).await;
    befriend(&store, &bob, &yann).await;
    befriend(&store, &bob, &zoe).await;
    befriend(&store, &bob, &wanda).await;
    befriend(&store, &alice, &bob).await;

    let profile = store
        .friend_profile(&alice, &bob)
        .await
        .expect("profile query should run")
        .expect("bob exists");
    assert_eq!(profile.id, bob);
    assert_eq!(profile.mutual_friend_count, 2, "shared friends are yann and zoe");
    assert_eq!(profile.total_friend_count, 4, "bob's own accepted-friend count");
}

#[tokio::test]
async fn mutual_count_is_zero_not_null_without_shared_friends() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;
    befriend(&store, &alice, &bob).await;

    let profile = store
        .friend_profile(&alice, &bob)
        .await
        .expect("profile query should run")
        .expect("bob exists");
    assert_eq!(profile.mutual_friend_count, 0);
    assert_eq!(profile.total_friend_count, 1, "alice is bob's only friend");
    profile.validate().expect("result schema holds with zero mutuals");
}

#[tokio::test]
async fn pending_and_declined_edges_do_not_count_as_friends() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let bob = add_user(&store, "bob").await;
    let carol = add_user(&store, "carol").await;
    befriend(&store, &alice, &bob).await;

    // carol's request to bob is pending; alice's to carol was declined.
    store.upsert_friend_request(&carol, &bob).await.expect("send");
    store.upsert_friend_request(&alice, &carol).await.expect("send");
    store.decline_friend_request(&carol, &alice).await.expect("decline");

    let profile = store
        .friend_profile(&alice, &bob)
        .await
        .expect("profile query should run")
        .expect("bob exists");
    assert_eq!(profile.total_friend_count, 1);
    assert_eq!(profile.mutual_friend_count, 0);
}

#[tokio::test]
async fn profile_of_unknown_user_is_none() {
    let store = store().await;
    let alice = add_user(&store, "alice").await;
    let ghost = UserId::parse("ghost").expect("valid id");

    let profile = store
        .friend_profile(&alice, &ghost)
        .await
        .expect("profile query should run");
    assert!(profile.is_none());
}
