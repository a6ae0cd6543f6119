use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use service::errors::ServiceError;
use service::pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use service::student::{Student, StudentInput};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::metrics;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub index: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

fn observe<T>(operation: &str, res: Result<T, ServiceError>) -> Result<T, JsonApiError> {
    metrics::record(operation, &res);
    res.map_err(JsonApiError::from)
}

#[utoipa::path(post, path = "/api/students", tag = "students",
    request_body = crate::openapi::StudentInputDoc,
    responses((status = 201, description = "Created", body = crate::openapi::StudentDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorBodyDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<StudentInput>,
) -> Result<(StatusCode, Json<Student>), JsonApiError> {
    let created = observe("create", state.directory.create(input).await)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/students", tag = "students",
    responses((status = 200, description = "All students by ascending id", body = [crate::openapi::StudentDoc])))]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    observe("list_all", state.directory.list_all().await).map(Json)
}

#[utoipa::path(get, path = "/api/students/page", tag = "students",
    params(
        ("index" = Option<i64>, Query, description = "0-based page index, default 0"),
        ("size" = Option<i64>, Query, description = "Page size in 1..=100, default 20")
    ),
    responses((status = 200, description = "One page", body = crate::openapi::StudentPageDoc), (status = 400, description = "Malformed paging", body = crate::openapi::ErrorBodyDoc)))]
pub async fn list_page(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<PageQuery>,
) -> Result<Json<Page<Student>>, JsonApiError> {
    let req = PageRequest::new(q.index.unwrap_or(0), q.size.unwrap_or(DEFAULT_PAGE_SIZE));
    let page = observe("list_page", state.directory.list_page(req).await)?;
    Ok(Json(page))
}

#[utoipa::path(get, path = "/api/students/search", tag = "students",
    params(("name" = String, Query, description = "Case-insensitive substring of the name")),
    responses((status = 200, description = "Matching students", body = [crate::openapi::StudentDoc])))]
pub async fn search(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<Student>>, JsonApiError> {
    observe("search_by_name", state.directory.search_by_name(&q.name).await).map(Json)
}

#[utoipa::path(get, path = "/api/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Found", body = crate::openapi::StudentDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn get(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Student>, JsonApiError> {
    observe("get", state.directory.get(id).await).map(Json)
}

#[utoipa::path(put, path = "/api/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = crate::openapi::StudentInputDoc,
    responses((status = 200, description = "Updated", body = crate::openapi::StudentDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorBodyDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<StudentInput>,
) -> Result<Json<Student>, JsonApiError> {
    observe("update", state.directory.update(id, input).await).map(Json)
}

#[utoipa::path(delete, path = "/api/students/{id}", tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses((status = 200, description = "Deleted record", body = crate::openapi::StudentDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Student>, JsonApiError> {
    observe("delete", state.directory.delete(id).await).map(Json)
}
