//! SQLite-backed durable entity store.
//!
//! One table per entity family with a JSON document column keyed by id; batch
//! reads are a single `WHERE id IN (...)` select indexed into the caller's
//! lookup map. Bookmarks get real columns so the per-user listing can be
//! ordered in SQL.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use verseforge_core::{
    BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Bookmark, BookmarkStore,
    Commentary, ContentType, EntityStore, Quote, StoreError, StrongsLexiconEntry,
};

const ENTITY_TABLES: [&str; 7] = [
    "commentaries",
    "quotes",
    "verses",
    "verse_versions",
    "book_overviews",
    "takeaways",
    "strongs_entries",
];

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS commentaries    (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS quotes          (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS verses          (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS verse_versions  (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS book_overviews  (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS takeaways       (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS strongs_entries (id TEXT PRIMARY KEY, doc TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS bookmarks (
        id           TEXT PRIMARY KEY,
        user_id      TEXT NOT NULL,
        content_type TEXT NOT NULL,
        reference_id TEXT,
        created_at   TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_bookmarks_user ON bookmarks(user_id, created_at);
";

fn query_err(e: rusqlite::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

pub struct SqliteEntityStore {
    conn: Mutex<Connection>,
}

impl SqliteEntityStore {
    /// Create or open a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        conn.execute_batch(&format!("PRAGMA journal_mode=WAL;\n{SCHEMA}"))
            .map_err(query_err)?;
        info!("SqliteEntityStore opened at {:?}", path.as_ref());
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open an in-memory database (for tests).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        conn.execute_batch(SCHEMA).map_err(query_err)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    async fn fetch_docs<T: DeserializeOwned>(
        &self,
        table: &str,
        ids: &[String],
    ) -> Result<Vec<T>, StoreError> {
        let conn = self.conn.lock().await;
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("SELECT doc FROM {table} WHERE id IN ({placeholders})");
        let mut stmt = conn.prepare(&sql).map_err(query_err)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
                row.get::<_, String>(0)
            })
            .map_err(query_err)?;

        let mut out = Vec::with_capacity(ids.len());
        for doc in rows {
            let doc = doc.map_err(query_err)?;
            out.push(
                serde_json::from_str(&doc).map_err(|e| StoreError::Corrupt(e.to_string()))?,
            );
        }
        debug!("{table}: fetched {} of {} requested", out.len(), ids.len());
        Ok(out)
    }

    async fn put_doc<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        entity: &T,
    ) -> Result<(), StoreError> {
        let doc =
            serde_json::to_string(entity).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let conn = self.conn.lock().await;
        conn.execute(
            &format!("INSERT OR REPLACE INTO {table} (id, doc) VALUES (?1, ?2)"),
            params![id, doc],
        )
        .map_err(query_err)?;
        Ok(())
    }

    pub async fn seed_commentary(&self, entity: &Commentary) -> Result<(), StoreError> {
        self.put_doc("commentaries", &entity.id, entity).await
    }

    pub async fn seed_quote(&self, entity: &Quote) -> Result<(), StoreError> {
        self.put_doc("quotes", &entity.id, entity).await
    }

    pub async fn seed_verse(&self, entity: &BibleVerse) -> Result<(), StoreError> {
        self.put_doc("verses", &entity.id, entity).await
    }

    pub async fn seed_verse_version(&self, entity: &BibleVerseVersion) -> Result<(), StoreError> {
        self.put_doc("verse_versions", &entity.id, entity).await
    }

    pub async fn seed_book_overview(&self, entity: &BibleBookOverview) -> Result<(), StoreError> {
        self.put_doc("book_overviews", &entity.id, entity).await
    }

    pub async fn seed_takeaway(&self, entity: &BibleVerseTakeaway) -> Result<(), StoreError> {
        self.put_doc("takeaways", &entity.id, entity).await
    }

    pub async fn seed_strongs_entry(
        &self,
        entity: &StrongsLexiconEntry,
    ) -> Result<(), StoreError> {
        self.put_doc("strongs_entries", &entity.id, entity).await
    }

    pub async fn seed_bookmark(&self, bookmark: &Bookmark) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO bookmarks (id, user_id, content_type, reference_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                bookmark.id,
                bookmark.user_id,
                bookmark.content_type.as_str(),
                bookmark.reference_id,
                bookmark.created_at.to_rfc3339(),
            ],
        )
        .map_err(query_err)?;
        Ok(())
    }

    /// Row counts per table, for status reporting.
    pub async fn table_counts(&self) -> Result<Vec<(String, i64)>, StoreError> {
        let conn = self.conn.lock().await;
        let mut counts = Vec::new();
        for table in ENTITY_TABLES.iter().chain(["bookmarks"].iter()) {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
                .map_err(query_err)?;
            counts.push((table.to_string(), count));
        }
        Ok(counts)
    }
}

fn parse_content_type(tag: &str) -> Result<ContentType, StoreError> {
    serde_json::from_value(serde_json::Value::String(tag.to_string()))
        .map_err(|_| StoreError::Corrupt(format!("unknown content type tag: {tag}")))
}

fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("bad created_at timestamp: {e}")))
}

#[async_trait]
impl EntityStore for SqliteEntityStore {
    async fn commentaries_by_ids(&self, ids: &[String]) -> Result<Vec<Commentary>, StoreError> {
        self.fetch_docs("commentaries", ids).await
    }

    async fn quotes_by_ids(&self, ids: &[String]) -> Result<Vec<Quote>, StoreError> {
        self.fetch_docs("quotes", ids).await
    }

    async fn verses_by_ids(&self, ids: &[String]) -> Result<Vec<BibleVerse>, StoreError> {
        self.fetch_docs("verses", ids).await
    }

    async fn verse_versions_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleVerseVersion>, StoreError> {
        self.fetch_docs("verse_versions", ids).await
    }

    async fn book_overviews_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleBookOverview>, StoreError> {
        self.fetch_docs("book_overviews", ids).await
    }

    async fn takeaways_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleVerseTakeaway>, StoreError> {
        self.fetch_docs("takeaways", ids).await
    }

    async fn strongs_entries_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<StrongsLexiconEntry>, StoreError> {
        self.fetch_docs("strongs_entries", ids).await
    }
}

#[async_trait]
impl BookmarkStore for SqliteEntityStore {
    async fn bookmarks_for_user(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT id, user_id, content_type, reference_id, created_at
                 FROM bookmarks WHERE user_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(query_err)?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .map_err(query_err)?;

        let mut bookmarks = Vec::new();
        for row in rows {
            let (id, user_id, content_type, reference_id, created_at) =
                row.map_err(query_err)?;
            bookmarks.push(Bookmark {
                id,
                user_id,
                content_type: parse_content_type(&content_type)?,
                reference_id,
                created_at: parse_created_at(&created_at)?,
            });
        }
        Ok(bookmarks)
    }
}
