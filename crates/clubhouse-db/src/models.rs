//! Database row types — these map directly to SQLite rows.
//! Distinct from clubhouse-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: String,
}

pub struct AnnouncementRow {
    pub id: i64,
    pub title: String,
    pub description: String,
}

pub struct ContentRow {
    pub id: i64,
    pub tag: String,
    pub content: String,
}
