//! Encoding and decoding helpers between [`Person`] and the plain columns
//! stored in SQLite.
//!
//! Ages are stored as `INTEGER` (i64) and narrowed back to `u32` on read.

use people_core::person::Person;

use crate::{Error, Result};

/// Column list shared by every `SELECT` against `people`, in the order
/// [`RawPerson::from_row`] expects.
pub const PERSON_COLUMNS: &str = "id, name, surname, patronymic, age, gender, nationality";

pub fn encode_age(age: u32) -> i64 { i64::from(age) }

/// A `people` row as read from SQLite, before validation.
pub struct RawPerson {
  pub id:          i64,
  pub name:        String,
  pub surname:     String,
  pub patronymic:  String,
  pub age:         i64,
  pub gender:      String,
  pub nationality: String,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      surname:     row.get(2)?,
      patronymic:  row.get(3)?,
      age:         row.get(4)?,
      gender:      row.get(5)?,
      nationality: row.get(6)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    let age = u32::try_from(self.age).map_err(|_| Error::Corrupt {
      id:     self.id,
      reason: format!("age {} out of range", self.age),
    })?;

    Ok(Person {
      id: self.id,
      name: self.name,
      surname: self.surname,
      patronymic: self.patronymic,
      age,
      gender: self.gender,
      nationality: self.nationality,
    })
  }
}
