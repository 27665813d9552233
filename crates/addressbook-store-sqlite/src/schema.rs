//! SQL schema for the address book SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS address_books (
    id    TEXT PRIMARY KEY,
    name  TEXT
);

-- Contacts belong to exactly one address book and go with it.
CREATE TABLE IF NOT EXISTS contacts (
    id               TEXT PRIMARY KEY,
    address_book_id  TEXT NOT NULL
                     REFERENCES address_books(id) ON DELETE CASCADE,
    first_name       TEXT,
    middle_name      TEXT,
    sur_name         TEXT,
    phone_number     TEXT,
    email            TEXT,
    state            TEXT,
    country          TEXT
);

CREATE INDEX IF NOT EXISTS contacts_address_book_idx ON contacts(address_book_id);

PRAGMA user_version = 1;
";
