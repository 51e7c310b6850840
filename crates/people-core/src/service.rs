//! [`PersonService`]: the enrich-then-persist orchestration.
//!
//! This is the only place that calls an [`Enricher`]. Derived fields are
//! always overwritten with fresh lookups on create and update, whatever the
//! caller sent.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
  Error, Result,
  enrich::{Enricher, Enrichment},
  person::{NewPerson, Person, PersonInput},
  store::{Page, PersonFilter, PersonStore},
};

/// Combines a [`PersonStore`] with an [`Enricher`].
///
/// Cloning is cheap; both halves are reference-counted.
pub struct PersonService<S, E> {
  store:    Arc<S>,
  enricher: Arc<E>,
}

impl<S, E> Clone for PersonService<S, E> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      enricher: Arc::clone(&self.enricher),
    }
  }
}

impl<S, E> PersonService<S, E>
where
  S: PersonStore,
  E: Enricher,
{
  pub fn new(store: Arc<S>, enricher: Arc<E>) -> Self { Self { store, enricher } }

  /// Validate, enrich and persist a new person.
  pub async fn add_person(&self, input: PersonInput) -> Result<Person> {
    let identity = input.validate()?;
    let enrichment = self.enrich(&identity.name).await;

    let person = self
      .store
      .create(NewPerson::new(identity, enrichment))
      .await
      .map_err(Error::store)?;

    info!(id = person.id, "person created");
    Ok(person)
  }

  /// Replace the identity fields of person `id` and re-run enrichment.
  ///
  /// An unknown id fails before any lookup is made.
  pub async fn update_person(&self, id: i64, input: PersonInput) -> Result<Person> {
    let mut person = self.get_person(id).await?;
    let identity = input.validate()?;
    let enrichment = self.enrich(&identity.name).await;
    person.overwrite(identity, enrichment);

    let person = self
      .store
      .update(person)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;

    info!(id, "person updated");
    Ok(person)
  }

  pub async fn get_person(&self, id: i64) -> Result<Person> {
    self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }

  pub async fn list_people(&self, filter: &PersonFilter, page: Page) -> Result<Vec<Person>> {
    let people = self.store.list(filter, page).await.map_err(Error::store)?;
    info!(count = people.len(), page = page.page, limit = page.limit, "listed people");
    Ok(people)
  }

  /// Delete person `id`. Succeeds whether or not the person existed.
  pub async fn delete_person(&self, id: i64) -> Result<()> {
    self.store.delete(id).await.map_err(Error::store)?;
    info!(id, "person deleted");
    Ok(())
  }

  /// Run the three lookups for `name` concurrently.
  async fn enrich(&self, name: &str) -> Enrichment {
    let (age, gender, nationality) = tokio::join!(
      self.enricher.lookup_age(name),
      self.enricher.lookup_gender(name),
      self.enricher.lookup_nationality(name),
    );
    let enrichment = Enrichment { age, gender, nationality };
    debug!(name, ?enrichment, "enriched person");
    enrichment
  }
}

#[cfg(test)]
mod tests {
  use std::{
    collections::{BTreeMap, HashMap},
    convert::Infallible,
    sync::{
      Mutex,
      atomic::{AtomicUsize, Ordering},
    },
  };

  use super::*;

  // ─── Fakes ───────────────────────────────────────────────────────────────

  #[derive(Default)]
  struct MemoryStore {
    rows:    Mutex<BTreeMap<i64, Person>>,
    next_id: AtomicUsize,
  }

  impl PersonStore for MemoryStore {
    type Error = Infallible;

    async fn create(&self, person: NewPerson) -> Result<Person, Infallible> {
      let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
      let person = person.with_id(id);
      self.rows.lock().unwrap().insert(id, person.clone());
      Ok(person)
    }

    async fn get(&self, id: i64) -> Result<Option<Person>, Infallible> {
      Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, filter: &PersonFilter, page: Page) -> Result<Vec<Person>, Infallible> {
      let matches = |field: &str, needle: &Option<String>| {
        needle
          .as_deref()
          .is_none_or(|n| field.to_lowercase().contains(&n.to_lowercase()))
      };
      Ok(
        self
          .rows
          .lock()
          .unwrap()
          .values()
          .filter(|p| matches(&p.name, &filter.name) && matches(&p.surname, &filter.surname))
          .skip(page.offset() as usize)
          .take(page.limit as usize)
          .cloned()
          .collect(),
      )
    }

    async fn update(&self, person: Person) -> Result<Option<Person>, Infallible> {
      let mut rows = self.rows.lock().unwrap();
      Ok(rows.get_mut(&person.id).map(|slot| {
        *slot = person.clone();
        person
      }))
    }

    async fn delete(&self, id: i64) -> Result<(), Infallible> {
      self.rows.lock().unwrap().remove(&id);
      Ok(())
    }
  }

  /// Answers from a fixed table; unknown names get zero values.
  #[derive(Default)]
  struct StubEnricher {
    known: HashMap<String, Enrichment>,
    calls: AtomicUsize,
  }

  impl StubEnricher {
    fn with(mut self, name: &str, age: u32, gender: &str, nationality: &str) -> Self {
      self.known.insert(name.to_owned(), Enrichment {
        age,
        gender: gender.to_owned(),
        nationality: nationality.to_owned(),
      });
      self
    }

    fn entry(&self, name: &str) -> Enrichment {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.known.get(name).cloned().unwrap_or_default()
    }
  }

  impl Enricher for StubEnricher {
    async fn lookup_age<'a>(&'a self, name: &'a str) -> u32 { self.entry(name).age }

    async fn lookup_gender<'a>(&'a self, name: &'a str) -> String { self.entry(name).gender }

    async fn lookup_nationality<'a>(&'a self, name: &'a str) -> String {
      self.entry(name).nationality
    }
  }

  fn service(enricher: StubEnricher) -> (PersonService<MemoryStore, StubEnricher>, Arc<StubEnricher>) {
    let enricher = Arc::new(enricher);
    (
      PersonService::new(Arc::new(MemoryStore::default()), Arc::clone(&enricher)),
      enricher,
    )
  }

  fn input(name: &str, surname: &str) -> PersonInput {
    PersonInput {
      name:       name.into(),
      surname:    surname.into(),
      patronymic: None,
    }
  }

  // ─── Tests ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn add_person_enriches_and_assigns_id() {
    let (svc, enricher) =
      service(StubEnricher::default().with("Alice", 30, "female", "US"));

    let person = svc.add_person(input("Alice", "Smith")).await.unwrap();
    assert_eq!(person, Person {
      id:          1,
      name:        "Alice".into(),
      surname:     "Smith".into(),
      patronymic:  String::new(),
      age:         30,
      gender:      "female".into(),
      nationality: "US".into(),
    });
    assert_eq!(enricher.calls.load(Ordering::SeqCst), 3);
  }

  #[tokio::test]
  async fn add_person_assigns_fresh_ids() {
    let (svc, _) = service(StubEnricher::default());
    let a = svc.add_person(input("Anna", "Ivanova")).await.unwrap();
    let b = svc.add_person(input("Anna", "Ivanova")).await.unwrap();
    assert_ne!(a.id, b.id);
  }

  #[tokio::test]
  async fn add_person_with_no_predictions_stores_zero_values() {
    let (svc, _) = service(StubEnricher::default());
    let person = svc.add_person(input("Zzyzx", "Road")).await.unwrap();
    assert_eq!(person.age, 0);
    assert_eq!(person.gender, "");
    assert_eq!(person.nationality, "");
  }

  #[tokio::test]
  async fn add_person_rejects_missing_surname_without_lookups() {
    let (svc, enricher) = service(StubEnricher::default());
    let err = svc.add_person(input("Alice", "")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(enricher.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn update_unknown_id_fails_without_lookups() {
    let (svc, enricher) = service(StubEnricher::default());
    let err = svc.update_person(42, input("Bob", "Jones")).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(42)));
    assert_eq!(enricher.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn update_person_re_enriches_against_new_name() {
    let (svc, _) = service(
      StubEnricher::default()
        .with("Alice", 30, "female", "US")
        .with("Ivan", 45, "male", "RU"),
    );
    let created = svc.add_person(input("Alice", "Smith")).await.unwrap();

    let mut changed = input("Ivan", "Petrov");
    changed.patronymic = Some("Sergeevich".into());
    let updated = svc.update_person(created.id, changed).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ivan");
    assert_eq!(updated.patronymic, "Sergeevich");
    assert_eq!(updated.age, 45);
    assert_eq!(updated.gender, "male");
    assert_eq!(updated.nationality, "RU");
    assert_eq!(svc.get_person(created.id).await.unwrap(), updated);
  }

  #[tokio::test]
  async fn delete_is_idempotent() {
    let (svc, _) = service(StubEnricher::default());
    let person = svc.add_person(input("Alice", "Smith")).await.unwrap();

    svc.delete_person(person.id).await.unwrap();
    svc.delete_person(person.id).await.unwrap();
    assert!(matches!(svc.get_person(person.id).await, Err(Error::NotFound(_))));
  }
}
