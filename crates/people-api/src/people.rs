//! Handlers for `/people` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/people`      | Optional `name`, `surname`, `page` (default 1), `limit` (default 10) |
//! | `POST`   | `/people`      | Body: [`PersonBody`]; returns 201 + enriched person |
//! | `GET`    | `/people/:id`  | 404 if not found |
//! | `PUT`    | `/people/:id`  | Body: [`PersonBody`]; re-enriches; 404 if not found |
//! | `DELETE` | `/people/:id`  | Always `{"message":"Person deleted"}` |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use people_core::{
  enrich::Enricher,
  person::{Person, PersonInput},
  service::PersonService,
  store::{Page, PersonFilter, PersonStore},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

fn person_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
  path
    .map(|Path(id)| id)
    .map_err(|e| ApiError::BadRequest(e.body_text()))
}

// ─── Body ────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /people` and `PUT /people/:id`.
///
/// `name` and `surname` are required; their absence is reported as a 400 by
/// the service rather than as a deserialisation error.
#[derive(Debug, Deserialize)]
pub struct PersonBody {
  #[serde(default)]
  pub name:        String,
  #[serde(default)]
  pub surname:     String,
  pub patronymic:  Option<String>,
  /// Accepted but ignored; always replaced by enrichment. Any integer is
  /// tolerated, including negatives.
  pub age:         Option<i64>,
  /// Accepted but ignored; always replaced by enrichment.
  pub gender:      Option<String>,
  /// Accepted but ignored; always replaced by enrichment.
  pub nationality: Option<String>,
}

impl From<PersonBody> for PersonInput {
  fn from(b: PersonBody) -> Self {
    PersonInput {
      name:       b.name,
      surname:    b.surname,
      patronymic: b.patronymic,
    }
  }
}

fn person_body(body: Result<Json<PersonBody>, JsonRejection>) -> Result<PersonInput, ApiError> {
  body
    .map(|Json(b)| b.into())
    .map_err(|e| ApiError::BadRequest(e.body_text()))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// Query parameters are kept as raw strings so that a bad `page` or `limit`
/// falls back to its default instead of rejecting the request.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub name:    Option<String>,
  pub surname: Option<String>,
  pub page:    Option<String>,
  pub limit:   Option<String>,
}

impl ListParams {
  fn filter(&self) -> PersonFilter {
    let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.is_empty());
    PersonFilter {
      name:    non_empty(&self.name),
      surname: non_empty(&self.surname),
    }
  }

  fn page(&self) -> Page {
    let number = |s: &Option<String>| s.as_deref().and_then(|s| s.trim().parse().ok());
    Page::new(number(&self.page), number(&self.limit))
  }
}

/// `GET /people[?name=...][&surname=...][&page=...][&limit=...]`
pub async fn list<S, E>(
  State(service): State<PersonService<S, E>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let people = service.list_people(&params.filter(), params.page()).await?;
  Ok(Json(people))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /people` returns 201 + the stored, enriched [`Person`].
pub async fn create<S, E>(
  State(service): State<PersonService<S, E>>,
  body: Result<Json<PersonBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let person = service.add_person(person_body(body)?).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /people/:id`
pub async fn get_one<S, E>(
  State(service): State<PersonService<S, E>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let person = service.get_person(person_id(path)?).await?;
  Ok(Json(person))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /people/:id`: overwrites identity fields and re-runs enrichment.
///
/// An unknown id is reported as 404 before the body is looked at.
pub async fn update<S, E>(
  State(service): State<PersonService<S, E>>,
  path: Result<Path<i64>, PathRejection>,
  body: Result<Json<PersonBody>, JsonRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let id = person_id(path)?;
  service.get_person(id).await?;
  let person = service.update_person(id, person_body(body)?).await?;
  Ok(Json(person))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /people/:id`: unknown ids are not an error.
pub async fn delete<S, E>(
  State(service): State<PersonService<S, E>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  service.delete_person(person_id(path)?).await?;
  Ok(Json(json!({ "message": "Person deleted" })))
}
