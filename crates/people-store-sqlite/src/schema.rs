//! SQL schema for the SQLite person store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Name of the Unicode-aware lowercase function registered on every
/// connection. SQLite's built-in `lower()` only folds ASCII.
pub const CASEFOLD_FN: &str = "casefold";

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted people from being handed out again.
-- Empty strings and zero stand for \"no value\" in the optional columns.
CREATE TABLE IF NOT EXISTS people (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    surname     TEXT    NOT NULL,
    patronymic  TEXT    NOT NULL DEFAULT '',
    age         INTEGER NOT NULL DEFAULT 0 CHECK (age >= 0),
    gender      TEXT    NOT NULL DEFAULT '',
    nationality TEXT    NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS people_surname_idx ON people(surname);

PRAGMA user_version = 1;
";
