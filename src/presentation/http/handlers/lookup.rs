//! Company and Platform Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::application::dto::{CompanyResponse, PlatformResponse};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Optional `?name=` filter on the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct NameFilter {
    pub name: Option<String>,
}

/// List companies, or the one matching `?name=`
pub async fn list_companies(
    State(state): State<AppState>,
    Query(filter): Query<NameFilter>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let companies = match filter.name {
        Some(name) => state.lookups.find_company(&name).await?.into_iter().collect(),
        None => state.lookups.list_companies().await?,
    };
    Ok(Json(companies))
}

/// Get company by ID
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompanyResponse>, AppError> {
    Ok(Json(state.lookups.get_company(&id).await?))
}

/// Delete an unreferenced company
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.lookups.delete_company(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List platforms, or the one matching `?name=`
pub async fn list_platforms(
    State(state): State<AppState>,
    Query(filter): Query<NameFilter>,
) -> Result<Json<Vec<PlatformResponse>>, AppError> {
    let platforms = match filter.name {
        Some(name) => state.lookups.find_platform(&name).await?.into_iter().collect(),
        None => state.lookups.list_platforms().await?,
    };
    Ok(Json(platforms))
}

/// Get platform by ID
pub async fn get_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlatformResponse>, AppError> {
    Ok(Json(state.lookups.get_platform(&id).await?))
}

/// Delete an unreferenced platform
pub async fn delete_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.lookups.delete_platform(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
