//! Shared helpers for integration tests

use shared::models::{Role, Ticket, TicketCreate, TicketPriority, User, UserCreate};
use sqlx::SqlitePool;
use ticket_server::auth::{CurrentUser, hash_password};
use ticket_server::db::DbService;
use ticket_server::db::repository::{ticket, user};

/// Fresh in-memory database with migrations applied
pub async fn test_pool() -> SqlitePool {
    DbService::in_memory()
        .await
        .expect("in-memory database")
        .pool
}

pub async fn create_user(pool: &SqlitePool, name: &str, role: Role) -> User {
    let data = UserCreate {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        password: "password-123".to_string(),
        role,
    };
    let hash = hash_password(&data.password).expect("hash password");
    user::create(pool, &data, &hash).await.expect("create user")
}

pub async fn create_ticket(pool: &SqlitePool, created_by: i64, title: &str) -> Ticket {
    let data = TicketCreate {
        title: title.to_string(),
        description: format!("description of {title}"),
        priority: TicketPriority::Medium,
    };
    ticket::create(pool, &data, created_by)
        .await
        .expect("create ticket")
}

pub fn actor(user: &User) -> CurrentUser {
    CurrentUser {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
    }
}
