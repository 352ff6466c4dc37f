use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::HoleBatch;
use crate::domain::{CourseId, NewCourse};
use crate::services::CourseService;

use super::{error_response, AppState};

pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(course): Json<NewCourse>,
) -> impl IntoResponse {
    let service = CourseService::new(state.store.pool().clone());

    match service.create_course(&course) {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn add_holes(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<CourseId>,
    Json(batch): Json<HoleBatch>,
) -> impl IntoResponse {
    let service = CourseService::new(state.store.pool().clone());

    match service.add_holes(course_id, &batch.holes) {
        Ok(holes) => (StatusCode::CREATED, Json(holes)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_holes(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<CourseId>,
) -> impl IntoResponse {
    let service = CourseService::new(state.store.pool().clone());

    match service.list_holes(course_id) {
        Ok(holes) => Json(holes).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_hole(
    State(state): State<Arc<AppState>>,
    Path((course_id, hole_number)): Path<(CourseId, i32)>,
) -> impl IntoResponse {
    let service = CourseService::new(state.store.pool().clone());

    match service.find_hole(course_id, hole_number) {
        Ok(hole) => Json(hole).into_response(),
        Err(e) => error_response(e),
    }
}
