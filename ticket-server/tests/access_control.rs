//! Visibility and list-scope behavior
//!
//! The list query must return exactly the tickets the item-level policy
//! would allow, per actor, page by page.

mod common;

use common::{actor, create_ticket, create_user, test_pool};
use shared::models::{Role, TicketPriority, TicketStatus};
use std::time::Duration;
use ticket_server::db::repository::ticket;
use ticket_server::policy::{self, TicketListQuery, scope_for};

#[tokio::test]
async fn user_sees_own_ticket_unassigned_support_sees_nothing() {
    let pool = test_pool().await;
    let reporter = create_user(&pool, "reporter", Role::User).await;
    let support = create_user(&pool, "helpdesk", Role::Support).await;

    let t = create_ticket(&pool, reporter.id, "Laptop will not boot").await;
    assert_eq!(t.status, TicketStatus::Open);

    let own = ticket::list(&pool, scope_for(&actor(&reporter)), &TicketListQuery::default())
        .await
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, t.id);
    assert_eq!(own[0].created_by.id, reporter.id);

    let assigned = ticket::list(&pool, scope_for(&actor(&support)), &TicketListQuery::default())
        .await
        .unwrap();
    assert!(assigned.is_empty());
}

#[tokio::test]
async fn list_results_match_item_level_policy_for_every_actor() {
    let pool = test_pool().await;
    let manager = create_user(&pool, "boss", Role::Manager).await;
    let support = create_user(&pool, "agent", Role::Support).await;
    let alice = create_user(&pool, "alice", Role::User).await;
    let bob = create_user(&pool, "bob", Role::User).await;

    let t1 = create_ticket(&pool, alice.id, "Alice ticket one").await;
    let t2 = create_ticket(&pool, alice.id, "Alice ticket two").await;
    let t3 = create_ticket(&pool, bob.id, "Bob ticket one").await;
    ticket::assign(&pool, t2.id, support.id).await.unwrap();
    ticket::assign(&pool, t3.id, support.id).await.unwrap();

    let all_ids = [t1.id, t2.id, t3.id];
    let query = TicketListQuery {
        page_size: 100,
        ..TicketListQuery::default()
    };

    for user in [&manager, &support, &alice, &bob] {
        let who = actor(user);
        let listed = ticket::list(&pool, scope_for(&who), &query).await.unwrap();
        let listed_ids: Vec<i64> = listed.iter().map(|t| t.id).collect();

        for id in all_ids {
            let t = ticket::find_by_id(&pool, id).await.unwrap().unwrap();
            assert_eq!(
                listed_ids.contains(&id),
                policy::can_view(&who, &t),
                "listing for {} disagrees with can_view on ticket {}",
                user.name,
                id
            );
        }
    }
}

#[tokio::test]
async fn status_and_priority_filters_intersect_the_scope() {
    let pool = test_pool().await;
    let manager = create_user(&pool, "boss", Role::Manager).await;
    let support = create_user(&pool, "agent", Role::Support).await;
    let alice = create_user(&pool, "alice", Role::User).await;

    let open = create_ticket(&pool, alice.id, "Open ticket here").await;
    let advancing = create_ticket(&pool, alice.id, "Soon in progress").await;
    ticket::assign(&pool, advancing.id, support.id).await.unwrap();
    let fresh = ticket::find_by_id(&pool, advancing.id).await.unwrap().unwrap();
    ticket::transition_status(&pool, &fresh, TicketStatus::InProgress, support.id)
        .await
        .unwrap();

    // Manager filtering on OPEN sees only the open one
    let query = TicketListQuery {
        status: Some(TicketStatus::Open),
        ..TicketListQuery::default()
    };
    let listed = ticket::list(&pool, scope_for(&actor(&manager)), &query)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, open.id);

    // Support filtering on OPEN sees nothing: their one ticket advanced
    let listed = ticket::list(&pool, scope_for(&actor(&support)), &query)
        .await
        .unwrap();
    assert!(listed.is_empty());

    // Priority filter with no match is empty, not an error
    let query = TicketListQuery {
        priority: Some(TicketPriority::High),
        ..TicketListQuery::default()
    };
    let listed = ticket::list(&pool, scope_for(&actor(&manager)), &query)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn pagination_is_newest_first() {
    let pool = test_pool().await;
    let alice = create_user(&pool, "alice", Role::User).await;

    let first = create_ticket(&pool, alice.id, "First ticket filed").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = create_ticket(&pool, alice.id, "Second ticket filed").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let third = create_ticket(&pool, alice.id, "Third ticket filed").await;

    let scope = scope_for(&actor(&alice));

    let page1 = ticket::list(
        &pool,
        scope,
        &TicketListQuery {
            page: 1,
            page_size: 2,
            ..TicketListQuery::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        page1.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![third.id, second.id]
    );

    let page2 = ticket::list(
        &pool,
        scope,
        &TicketListQuery {
            page: 2,
            page_size: 2,
            ..TicketListQuery::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page2.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first.id]);
}

#[tokio::test]
async fn access_denied_is_distinct_from_not_found() {
    let pool = test_pool().await;
    let alice = create_user(&pool, "alice", Role::User).await;
    let bob = create_user(&pool, "bob", Role::User).await;
    let t = create_ticket(&pool, alice.id, "Alice private ticket").await;

    // Existing but invisible: denied
    let loaded = ticket::find_by_id(&pool, t.id).await.unwrap().unwrap();
    let err = policy::ensure_can_view(&actor(&bob), &loaded).unwrap_err();
    assert_eq!(err.code, shared::ErrorCode::AccessDenied);

    // Absent: not found, reported before any access decision
    let missing = ticket::find_by_id(&pool, 999_999).await.unwrap();
    assert!(missing.is_none());
}
