use crate::models::{AnnouncementRow, ContentRow, EventRow, UserRow};
use crate::{Database, DbError, Result};
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Users --

    /// Insert an account, returning its id. A duplicate username surfaces as
    /// `DbError::Duplicate`.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
                (username, password_hash),
            )
            .map_err(constraint_as_duplicate)?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_username(conn, username))
    }

    // -- Events --

    pub fn insert_event(&self, name: &str, description: &str, date: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO events (name, description, date) VALUES (?1, ?2, ?3)",
                (name, description, date),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn list_events(&self) -> Result<Vec<EventRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, name, description, date FROM events ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(EventRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        date: row.get(3)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Announcements --

    pub fn insert_announcement(&self, title: &str, description: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO announcements (title, description) VALUES (?1, ?2)",
                (title, description),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn list_announcements(&self) -> Result<Vec<AnnouncementRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, title, description FROM announcements ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(AnnouncementRow {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        description: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Page content --

    pub fn insert_content(&self, tag: &str, content: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO page_content (tag, content) VALUES (?1, ?2)",
                (tag, content),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn list_content(&self) -> Result<Vec<ContentRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, tag, content FROM page_content ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(ContentRow {
                        id: row.get(0)?,
                        tag: row.get(1)?,
                        content: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// First record matching a tag, if any.
    pub fn get_content_by_tag(&self, tag: &str) -> Result<Option<ContentRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, tag, content FROM page_content WHERE tag = ?1 ORDER BY id LIMIT 1",
                    [tag],
                    |row| {
                        Ok(ContentRow {
                            id: row.get(0)?,
                            tag: row.get(1)?,
                            content: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Replace the text of an existing record. Returns false when the id does
    /// not exist.
    pub fn update_content(&self, id: i64, content: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE page_content SET content = ?1 WHERE id = ?2",
                (content, id),
            )?;
            Ok(changed > 0)
        })
    }

    /// Returns false when the id does not exist.
    pub fn delete_content(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM page_content WHERE id = ?1", [id])?;
            Ok(changed > 0)
        })
    }
}

fn query_user_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let row = conn
        .query_row(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?1",
            [username],
            |row| {
                Ok(UserRow {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(row)
}

fn constraint_as_duplicate(e: rusqlite::Error) -> DbError {
    match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DbError::Duplicate
        }
        other => DbError::Sqlite(other),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbError};

    #[test]
    fn duplicate_username_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        db.create_user("alice", "hash-1").unwrap();

        let err = db.create_user("alice", "hash-2").unwrap_err();
        assert!(matches!(err, DbError::Duplicate));
    }

    #[test]
    fn user_lookup_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_user("bob", "some-hash").unwrap();

        let row = db.get_user_by_username("bob").unwrap().unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.password_hash, "some-hash");

        assert!(db.get_user_by_username("nobody").unwrap().is_none());
    }

    #[test]
    fn events_list_in_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        db.insert_event("Meetup", "desc", "2025-01-01").unwrap();
        db.insert_event("Party", "desc2", "2025-02-01").unwrap();

        let events = db.list_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Meetup");
        assert_eq!(events[1].date, "2025-02-01");
    }

    #[test]
    fn content_tag_lookup() {
        let db = Database::open_in_memory().unwrap();
        db.insert_content("home", "hi").unwrap();

        let row = db.get_content_by_tag("home").unwrap().unwrap();
        assert_eq!(row.content, "hi");

        assert!(db.get_content_by_tag("missing").unwrap().is_none());
    }

    #[test]
    fn content_update_and_delete_report_missing_ids() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert_content("about", "v1").unwrap();

        assert!(db.update_content(id, "v2").unwrap());
        assert_eq!(db.get_content_by_tag("about").unwrap().unwrap().content, "v2");

        assert!(!db.update_content(id + 100, "v3").unwrap());
        assert!(db.delete_content(id).unwrap());
        assert!(!db.delete_content(id).unwrap());
    }
}
