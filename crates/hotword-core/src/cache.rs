//! SQLite cache of fetched page HTML, keyed by URL.
//!
//! One table, `page(link UNIQUE, html)`. A page is stored after every
//! successful download and served from here on later runs.

use camino::{Utf8Path, Utf8PathBuf};
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{SourceError, SourceResult};

/// File name of the cache inside the user cache directory.
pub const PAGE_CACHE_FILE: &str = "pages.sqlite";

const CREATE_PAGE_TABLE: &str = "CREATE TABLE IF NOT EXISTS page (
    link TEXT NOT NULL UNIQUE,
    html TEXT NOT NULL
)";

/// An open page cache.
#[derive(Debug)]
pub struct PageCache {
    conn: Connection,
    path: Utf8PathBuf,
}

impl PageCache {
    /// Open (creating if needed) the cache database at `path`.
    pub fn open(path: &Utf8Path) -> SourceResult<Self> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| SourceError::CacheDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path.as_std_path()).map_err(|source| SourceError::Cache {
            path: path.to_path_buf(),
            source,
        })?;
        Self::init(conn, path.to_path_buf())
    }

    /// A cache that lives only as long as the returned value.
    pub fn open_in_memory() -> SourceResult<Self> {
        let path = Utf8PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| SourceError::Cache {
            path: path.clone(),
            source,
        })?;
        Self::init(conn, path)
    }

    fn init(conn: Connection, path: Utf8PathBuf) -> SourceResult<Self> {
        let cache = Self { conn, path };
        cache
            .conn
            .execute(CREATE_PAGE_TABLE, [])
            .map_err(|source| cache.error(source))?;
        Ok(cache)
    }

    /// Database location.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The stored HTML of `link`, if any.
    pub fn get(&self, link: &str) -> SourceResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT html FROM page WHERE link = ?1",
                params![link],
                |row| row.get(0),
            )
            .optional()
            .map_err(|source| self.error(source))
    }

    /// Store `html` for `link`, replacing an older copy.
    pub fn put(&self, link: &str, html: &str) -> SourceResult<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO page (link, html) VALUES (?1, ?2)",
                params![link, html],
            )
            .map_err(|source| self.error(source))?;
        Ok(())
    }

    fn error(&self, source: rusqlite::Error) -> SourceError {
        SourceError::Cache {
            path: self.path.clone(),
            source,
        }
    }
}
