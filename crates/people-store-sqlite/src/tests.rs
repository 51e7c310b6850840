//! Integration tests for `SqliteStore` against an in-memory database.

use people_core::{
  person::NewPerson,
  store::{Page, PersonFilter, PersonStore},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_person(name: &str, surname: &str) -> NewPerson {
  NewPerson {
    name:        name.into(),
    surname:     surname.into(),
    patronymic:  String::new(),
    age:         0,
    gender:      String::new(),
    nationality: String::new(),
  }
}

fn filter(name: Option<&str>, surname: Option<&str>) -> PersonFilter {
  PersonFilter {
    name:    name.map(Into::into),
    surname: surname.map(Into::into),
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_person() {
  let s = store().await;

  let mut input = new_person("Dmitriy", "Ushakov");
  input.patronymic = "Vasilevich".into();
  input.age = 42;
  input.gender = "male".into();
  input.nationality = "UA".into();

  let person = s.create(input).await.unwrap();
  assert_eq!(person.id, 1);

  let fetched = s.get(person.id).await.unwrap();
  assert_eq!(fetched, Some(person));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(999).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let first = s.create(new_person("Alice", "Smith")).await.unwrap();
  s.delete(first.id).await.unwrap();

  let second = s.create(new_person("Alice", "Smith")).await.unwrap();
  assert_ne!(first.id, second.id);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_filters_by_case_insensitive_substring() {
  let s = store().await;
  for name in ["Anna", "Anne", "Johanna", "Bob"] {
    s.create(new_person(name, "Doe")).await.unwrap();
  }

  let found = s
    .list(&filter(Some("an"), None), Page::default())
    .await
    .unwrap();
  let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["Anna", "Anne", "Johanna"]);
}

#[tokio::test]
async fn list_folds_non_ascii_case() {
  let s = store().await;
  s.create(new_person("Анна", "Иванова")).await.unwrap();
  s.create(new_person("Пётр", "Сидоров")).await.unwrap();

  let found = s
    .list(&filter(None, Some("ИВАН")), Page::default())
    .await
    .unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].name, "Анна");
}

#[tokio::test]
async fn list_ands_name_and_surname_filters() {
  let s = store().await;
  s.create(new_person("Anna", "Smith")).await.unwrap();
  s.create(new_person("Anna", "Jones")).await.unwrap();
  s.create(new_person("Bob", "Smith")).await.unwrap();

  let found = s
    .list(&filter(Some("anna"), Some("smi")), Page::default())
    .await
    .unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].surname, "Smith");
  assert_eq!(found[0].name, "Anna");
}

#[tokio::test]
async fn list_pages_in_id_order() {
  let s = store().await;
  for i in 0..25 {
    s.create(new_person(&format!("Person{i}"), "Doe")).await.unwrap();
  }

  let all = s
    .list(&PersonFilter::default(), Page::new(Some(1), Some(100)))
    .await
    .unwrap();
  let second = s
    .list(&PersonFilter::default(), Page::new(Some(2), Some(10)))
    .await
    .unwrap();

  assert_eq!(second.len(), 10);
  assert_eq!(second.as_slice(), &all[10..20]);
}

#[tokio::test]
async fn list_past_last_page_is_empty() {
  let s = store().await;
  s.create(new_person("Alice", "Smith")).await.unwrap();

  let found = s
    .list(&PersonFilter::default(), Page::new(Some(5), Some(10)))
    .await
    .unwrap();
  assert!(found.is_empty());
}

// ─── Update / delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_all_fields() {
  let s = store().await;
  let mut person = s.create(new_person("Alice", "Smith")).await.unwrap();

  person.name = "Alicia".into();
  person.age = 31;
  person.nationality = "ES".into();
  let updated = s.update(person.clone()).await.unwrap();
  assert_eq!(updated.as_ref(), Some(&person));

  assert_eq!(s.get(person.id).await.unwrap(), Some(person));
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let ghost = new_person("Ghost", "Nobody").with_id(77);
  assert!(s.update(ghost).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_is_ok() {
  let s = store().await;
  s.delete(12345).await.unwrap();
}
