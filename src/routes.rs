//! HTTP boundary for the dashboard API.
//!
//! Every widget entity exposes the same four verbs, so one generic router is
//! built per entity type instead of thirteen copies of the same handler set.
//! Bodies are taken as raw JSON and deserialized explicitly so that every
//! malformed request maps to the shared 400 envelope rather than axum's
//! default rejection text.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AppState;
use crate::api_envelope::{ApiErrorTuple, ApiSuccessBody, invalid_request, not_found, success};
use crate::schema::{UserDraft, UserPatch, UserRecord};
use crate::store::{Record, StoreError, Table};

type RawBody = Result<Json<Value>, JsonRejection>;

fn parse_body<P: DeserializeOwned>(body: RawBody) -> Result<P, ApiErrorTuple> {
    let Json(value) = body.map_err(|_| invalid_request())?;
    serde_json::from_value(value).map_err(|_| invalid_request())
}

/// The uniform CRUD surface for one entity table:
/// `POST /`, `GET /:ownerId`, `PATCH /:id`, `DELETE /:id`.
pub fn entity_router<T>(table: Table<T>) -> Router
where
    T: Record + Serialize,
    T::Draft: DeserializeOwned,
    T::Patch: DeserializeOwned,
{
    Router::new()
        .route("/", post(create_record::<T>))
        .route(
            "/:id",
            get(list_records::<T>)
                .patch(update_record::<T>)
                .delete(delete_record::<T>),
        )
        .with_state(table)
}

async fn create_record<T>(
    State(table): State<Table<T>>,
    body: RawBody,
) -> Result<Json<T>, ApiErrorTuple>
where
    T: Record + Serialize,
    T::Draft: DeserializeOwned,
{
    let draft: T::Draft = parse_body(body)?;
    Ok(Json(table.insert(draft).await))
}

async fn list_records<T>(State(table): State<Table<T>>, Path(owner_id): Path<u64>) -> Json<Vec<T>>
where
    T: Record + Serialize,
{
    Json(table.list_by_owner(owner_id).await)
}

async fn update_record<T>(
    State(table): State<Table<T>>,
    Path(id): Path<u64>,
    body: RawBody,
) -> Result<Json<T>, ApiErrorTuple>
where
    T: Record + Serialize,
    T::Patch: DeserializeOwned,
{
    let patch: T::Patch = parse_body(body)?;
    match table.update(id, patch).await {
        Ok(record) => Ok(Json(record)),
        Err(StoreError::NotFound) => Err(not_found("Not found")),
    }
}

async fn delete_record<T>(
    State(table): State<Table<T>>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<ApiSuccessBody>)
where
    T: Record,
{
    table.delete(id).await;
    success()
}

// ---------------------------------------------------------------------------
// auth and user surface

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    user: UserRecord,
}

fn email_is_plausible(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Email-only sign-in. An unknown email creates the account on the spot with
/// an empty profile; a known one signs straight in.
async fn login(
    State(state): State<AppState>,
    body: RawBody,
) -> Result<Json<LoginResponse>, ApiErrorTuple> {
    let LoginBody { email } = parse_body(body)?;
    if !email_is_plausible(&email) {
        return Err(invalid_request());
    }

    let user = match state.store.users.find(|row| row.email == email).await {
        Some(user) => user,
        None => {
            tracing::info!(%email, "creating account on first login");
            state
                .store
                .users
                .insert(UserDraft {
                    email,
                    name: String::new(),
                    profile_picture: None,
                    daily_quote: None,
                    portfolio_link: None,
                    theme: "light".to_string(),
                    focus_mode_enabled: false,
                })
                .await
        }
    };

    Ok(Json(LoginResponse { user }))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserRecord>, ApiErrorTuple> {
    match state.store.users.get(id).await {
        Some(user) => Ok(Json(user)),
        None => Err(not_found("User not found")),
    }
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: RawBody,
) -> Result<Json<UserRecord>, ApiErrorTuple> {
    let patch: UserPatch = parse_body(body)?;
    match state.store.users.update(id, patch).await {
        Ok(user) => Ok(Json(user)),
        Err(StoreError::NotFound) => Err(not_found("User not found")),
    }
}

pub fn auth_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/user/:id", get(get_user).patch(update_user))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    service: &'static str,
    status: &'static str,
}

pub async fn healthz() -> Json<HealthBody> {
    Json(HealthBody {
        service: "lifedash",
        status: "ok",
    })
}
