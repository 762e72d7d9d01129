//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::UserConfig;
use crate::application::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::domain::entity::user::SafeUser;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{CreateUserRequest, UpdateUserRequest};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UserAppState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<UserConfig>,
}

fn parse_user_id(raw: &str) -> UserResult<UserId> {
    raw.parse()
        .map_err(|_| UserError::validation("Invalid user id"))
}

/// GET /api/users
pub async fn list_users<U>(State(state): State<UserAppState<U>>) -> UserResult<Json<Vec<SafeUser>>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let users = ListUsersUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_user<U>(
    State(state): State<UserAppState<U>>,
    Path(id): Path<String>,
) -> UserResult<Json<SafeUser>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let id = parse_user_id(&id)?;
    let user = GetUserUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create_user<U>(
    State(state): State<UserAppState<U>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> UserResult<(StatusCode, Json<SafeUser>)>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(user.to_safe())))
}

/// PUT /api/users/{id}
pub async fn update_user<U>(
    State(state): State<UserAppState<U>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> UserResult<Json<SafeUser>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let id = parse_user_id(&id)?;
    let Json(req) = body?;
    let user = UpdateUserUseCase::new(state.repo.clone())
        .execute(&id, req.into())
        .await?;
    Ok(Json(user))
}

/// DELETE /api/users/{id}
pub async fn delete_user<U>(
    State(state): State<UserAppState<U>>,
    Path(id): Path<String>,
) -> UserResult<Json<SafeUser>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let id = parse_user_id(&id)?;
    let user = DeleteUserUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(user))
}
