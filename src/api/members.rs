//! Member management endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{CreateMember, Member, UpdateMember},
    AppState,
};

use super::PageQuery;

/// A page of members with the roster total
#[derive(Serialize, ToSchema)]
pub struct MemberList {
    pub members: Vec<Member>,
    pub total: i64,
}

/// List members ordered by name, one page at a time
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of members", body = MemberList),
        (status = 400, description = "Invalid page parameters")
    )
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<MemberList>> {
    let members = state
        .services
        .members
        .list_members(query.page(), query.page_size())
        .await?;
    let total = state.services.members.count().await?;

    Ok(Json(MemberList { members, total }))
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = state.services.members.add_member(request).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Get a single member
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "The member", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(id).await?;
    Ok(Json(member))
}

/// Overwrite a member's fields
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 204, description = "Member updated")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMember>,
) -> AppResult<StatusCode> {
    state.services.members.update_member(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.members.delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Export the member roster as CSV
#[utoipa::path(
    get,
    path = "/members/export",
    tag = "members",
    responses(
        (status = 200, description = "CSV export of all members", content_type = "text/csv")
    )
)]
pub async fn export_members(
    State(state): State<AppState>,
) -> AppResult<([(header::HeaderName, &'static str); 1], String)> {
    let csv = state.services.members.export_csv().await?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], csv))
}
