//! Person: the sole entity of the store.
//!
//! Identity fields (`name`, `surname`, `patronymic`) come from the caller.
//! Derived fields (`age`, `gender`, `nationality`) always come from
//! enrichment; an empty value means the lookup produced nothing.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, enrich::Enrichment};

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted, enriched person.
///
/// Zero-valued optional fields are omitted when serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:          i64,
  pub name:        String,
  pub surname:     String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub patronymic:  String,
  #[serde(default, skip_serializing_if = "is_zero")]
  pub age:         u32,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub gender:      String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub nationality: String,
}

fn is_zero(n: &u32) -> bool { *n == 0 }

impl Person {
  /// Replace the identity fields with `identity` and the derived fields with
  /// `enrichment`. The id is untouched.
  pub fn overwrite(&mut self, identity: Identity, enrichment: Enrichment) {
    self.name        = identity.name;
    self.surname     = identity.surname;
    self.patronymic  = identity.patronymic;
    self.age         = enrichment.age;
    self.gender      = enrichment.gender;
    self.nationality = enrichment.nationality;
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Caller-supplied identity fields, as received. Not yet validated.
#[derive(Debug, Clone, Default)]
pub struct PersonInput {
  pub name:       String,
  pub surname:    String,
  pub patronymic: Option<String>,
}

impl PersonInput {
  /// Trim all fields and check that `name` and `surname` are present.
  pub fn validate(self) -> Result<Identity> {
    let name = self.name.trim();
    let surname = self.surname.trim();

    if name.is_empty() {
      return Err(Error::Validation("name is required".into()));
    }
    if surname.is_empty() {
      return Err(Error::Validation("surname is required".into()));
    }

    Ok(Identity {
      name:       name.to_owned(),
      surname:    surname.to_owned(),
      patronymic: self
        .patronymic
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_owned(),
    })
  }
}

/// Validated identity fields. `patronymic` is empty when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub name:       String,
  pub surname:    String,
  pub patronymic: String,
}

/// A person that has been enriched but not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
  pub name:        String,
  pub surname:     String,
  pub patronymic:  String,
  pub age:         u32,
  pub gender:      String,
  pub nationality: String,
}

impl NewPerson {
  pub fn new(identity: Identity, enrichment: Enrichment) -> Self {
    Self {
      name:        identity.name,
      surname:     identity.surname,
      patronymic:  identity.patronymic,
      age:         enrichment.age,
      gender:      enrichment.gender,
      nationality: enrichment.nationality,
    }
  }

  /// Attach the id assigned by the store.
  pub fn with_id(self, id: i64) -> Person {
    Person {
      id,
      name:        self.name,
      surname:     self.surname,
      patronymic:  self.patronymic,
      age:         self.age,
      gender:      self.gender,
      nationality: self.nationality,
    }
  }
}
