//! Comment participation and moderation rules
//!
//! Reading and posting follow the parent ticket's visibility; editing
//! and deleting are author-or-manager.

mod common;

use common::{actor, create_ticket, create_user, test_pool};
use shared::ErrorCode;
use shared::models::Role;
use ticket_server::db::repository::{comment, ticket};
use ticket_server::policy::{self, ensure_can_modify};

#[tokio::test]
async fn support_comment_is_visible_to_creator_but_not_others() {
    // Scenario: support posts a comment on an assigned ticket; the
    // original creator can read it; an unrelated user is denied.
    let pool = test_pool().await;
    let support = create_user(&pool, "agent", Role::Support).await;
    let alice = create_user(&pool, "alice", Role::User).await;
    let mallory = create_user(&pool, "mallory", Role::User).await;

    let t = create_ticket(&pool, alice.id, "Email bouncing back").await;
    ticket::assign(&pool, t.id, support.id).await.unwrap();
    let loaded = ticket::find_by_id(&pool, t.id).await.unwrap().unwrap();

    // Support may participate after assignment
    policy::ensure_can_view(&actor(&support), &loaded).unwrap();
    let posted = comment::create(&pool, t.id, support.id, "Checking the relay logs")
        .await
        .unwrap();
    assert_eq!(posted.user.id, support.id);

    // Creator reads the thread
    policy::ensure_can_view(&actor(&alice), &loaded).unwrap();
    let thread = comment::list_for_ticket(&pool, t.id).await.unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].comment, "Checking the relay logs");

    // Unrelated user is denied before any comment is read
    let err = policy::ensure_can_view(&actor(&mallory), &loaded).unwrap_err();
    assert_eq!(err.code, ErrorCode::AccessDenied);
}

#[tokio::test]
async fn author_edits_own_comment_only() {
    let pool = test_pool().await;
    let alice = create_user(&pool, "alice", Role::User).await;
    let support = create_user(&pool, "agent", Role::Support).await;

    let t = create_ticket(&pool, alice.id, "Screen cracked badly").await;
    ticket::assign(&pool, t.id, support.id).await.unwrap();

    let mine = comment::create(&pool, t.id, alice.id, "It fell off the desk")
        .await
        .unwrap();
    let theirs = comment::create(&pool, t.id, support.id, "Warranty covers this")
        .await
        .unwrap();

    let my_row = comment::find_by_id(&pool, mine.id).await.unwrap().unwrap();
    let their_row = comment::find_by_id(&pool, theirs.id).await.unwrap().unwrap();

    // Own comment: allowed, and the edit sticks
    ensure_can_modify(&actor(&alice), &my_row).unwrap();
    comment::update(&pool, mine.id, "It fell off the desk onto tile")
        .await
        .unwrap();
    let reread = comment::find_by_id(&pool, mine.id).await.unwrap().unwrap();
    assert_eq!(reread.comment, "It fell off the desk onto tile");

    // Someone else's comment: denied, even for the assigned support actor
    let err = ensure_can_modify(&actor(&alice), &their_row).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotCommentAuthor);
    let err = ensure_can_modify(&actor(&support), &my_row).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotCommentAuthor);
}

#[tokio::test]
async fn manager_moderates_any_comment_anywhere() {
    let pool = test_pool().await;
    let manager = create_user(&pool, "boss", Role::Manager).await;
    let alice = create_user(&pool, "alice", Role::User).await;

    // The manager neither created nor is assigned to this ticket
    let t = create_ticket(&pool, alice.id, "Spam in the portal").await;
    let posted = comment::create(&pool, t.id, alice.id, "buy cheap watches")
        .await
        .unwrap();
    let row = comment::find_by_id(&pool, posted.id).await.unwrap().unwrap();

    ensure_can_modify(&actor(&manager), &row).unwrap();
    assert!(comment::delete(&pool, posted.id).await.unwrap());
    assert!(comment::find_by_id(&pool, posted.id).await.unwrap().is_none());
}

#[tokio::test]
async fn comment_existence_is_checked_before_authorship() {
    let pool = test_pool().await;
    let missing = comment::find_by_id(&pool, 424_242).await.unwrap();
    assert!(missing.is_none());
}
