use super::super::ApiState;
use super::{ApiResponse, HandlerResult};
use crate::types::*;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FriendQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FriendList {
    pub friends: Vec<FriendProfile>,
    pub following_count: usize,
}

// 好友和通知设置handlers
pub async fn list_friends(
    Query(params): Query<FriendQuery>,
    State(state): State<ApiState>,
) -> HandlerResult {
    let friends = state.social.search_friends(params.q.as_deref()).await;
    let following_count = state.social.following_count().await;
    Ok(ApiResponse::success(FriendList {
        friends,
        following_count,
    }))
}

pub async fn toggle_follow(Path(id): Path<String>, State(state): State<ApiState>) -> HandlerResult {
    Ok(ApiResponse::success(state.social.toggle_follow(&id).await?))
}

pub async fn get_settings(State(state): State<ApiState>) -> HandlerResult {
    Ok(ApiResponse::success(state.social.settings().await))
}

pub async fn update_settings(
    State(state): State<ApiState>,
    Json(settings): Json<NotificationSettings>,
) -> HandlerResult {
    Ok(ApiResponse::success(state.social.replace_settings(settings).await))
}

pub async fn toggle_settings_user(
    Path(id): Path<String>,
    State(state): State<ApiState>,
) -> HandlerResult {
    Ok(ApiResponse::success(state.social.toggle_followed_user(&id).await?))
}
