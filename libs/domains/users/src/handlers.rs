use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUserDto, UpdateUserDto, User};
use crate::service::UserService;

pub const USERS_PATH: &str = "/users";
pub const USER_PATH: &str = "/users/{id}";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(User, CreateUserDto, UpdateUserDto),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
///
/// Errors returned by the handlers are rendered by `UserError`'s
/// `IntoResponse`, which defers to `AppError` for the status code.
pub fn router<S: UserService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(USERS_PATH, get(list_users::<S>).post(create_user::<S>))
        .route(
            USER_PATH,
            get(get_user::<S>)
                .put(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<S: UserService>(
    State(service): State<Arc<S>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.find_all().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created; body is the new identifier", body = String,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<S: UserService>(
    State(service): State<Arc<S>>,
    JsonBody(dto): JsonBody<CreateUserDto>,
) -> UserResult<impl IntoResponse> {
    let id = service.create(dto).await?;
    let location = format!("{USERS_PATH}/{id}");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], id))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<S: UserService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.find_one(&id).await?;
    Ok(Json(user))
}

/// Update a user. Empty fields are left unchanged.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 204, description = "User updated successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<S: UserService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
    JsonBody(mut dto): JsonBody<UpdateUserDto>,
) -> UserResult<impl IntoResponse> {
    dto.id = id;
    service.update(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<S: UserService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
