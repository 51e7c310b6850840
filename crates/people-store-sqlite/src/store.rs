//! [`SqliteStore`]: the SQLite implementation of [`PersonStore`].

use std::path::Path;

use people_core::{
  person::{NewPerson, Person},
  store::{Page, PersonFilter, PersonStore},
};
use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use crate::{
  Result,
  encode::{PERSON_COLUMNS, RawPerson, encode_age},
  schema::{CASEFOLD_FN, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  async fn init(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.create_scalar_function(
          CASEFOLD_FN,
          1,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("person schema ready");
    Ok(())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, person: NewPerson) -> Result<Person> {
    let row = person.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (name, surname, patronymic, age, gender, nationality)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.name,
            row.surname,
            row.patronymic,
            encode_age(row.age),
            row.gender,
            row.nationality,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(person.with_id(id))
  }

  async fn get(&self, id: i64) -> Result<Option<Person>> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ?1"),
              rusqlite::params![id],
              RawPerson::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn list(&self, filter: &PersonFilter, page: Page) -> Result<Vec<Person>> {
    // Needles are folded here so the SQL only folds the column side.
    let name_needle    = filter.name.as_deref().map(str::to_lowercase);
    let surname_needle = filter.surname.as_deref().map(str::to_lowercase);
    let limit_val      = i64::from(page.limit);
    let offset_val     = i64::try_from(page.offset()).unwrap_or(i64::MAX);

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {PERSON_COLUMNS}
           FROM people
           WHERE (?1 IS NULL OR instr({CASEFOLD_FN}(name), ?1) > 0)
             AND (?2 IS NULL OR instr({CASEFOLD_FN}(surname), ?2) > 0)
           ORDER BY id ASC
           LIMIT ?3 OFFSET ?4"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![name_needle, surname_needle, limit_val, offset_val],
            RawPerson::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn update(&self, person: Person) -> Result<Option<Person>> {
    let row = person.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE people
           SET name = ?2, surname = ?3, patronymic = ?4,
               age = ?5, gender = ?6, nationality = ?7
           WHERE id = ?1",
          rusqlite::params![
            row.id,
            row.name,
            row.surname,
            row.patronymic,
            encode_age(row.age),
            row.gender,
            row.nationality,
          ],
        )?)
      })
      .await?;

    Ok((changed > 0).then_some(person))
  }

  async fn delete(&self, id: i64) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if removed == 0 {
      tracing::debug!(id, "delete of unknown person ignored");
    }
    Ok(())
  }
}
