use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::career::CareerRecommendation;
use crate::models::roadmap::{Roadmap, RoadmapInput};
use crate::narrative::defaults::SOFTWARE_DEVELOPMENT_ID;
use crate::roadmap::state::RoadmapError;
use crate::roadmap::transformer::{fallback_roadmap, transform};
use crate::state::AppState;

/// Either a prepared input, a recommendation to derive one from, or neither
/// (which yields the fallback roadmap). `input` wins when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRoadmapRequest {
    #[serde(default)]
    pub input: Option<RoadmapInput>,
    #[serde(default)]
    pub recommendation: Option<CareerRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub id: Uuid,
    pub progress: u8,
    pub roadmap: Roadmap,
}

impl RoadmapResponse {
    fn new(id: Uuid, roadmap: Roadmap) -> Self {
        Self {
            id,
            progress: roadmap.progress(),
            roadmap,
        }
    }
}

fn build(req: CreateRoadmapRequest) -> Roadmap {
    match (req.input, req.recommendation) {
        (Some(input), _) => transform(&input),
        (None, Some(rec)) if rec.id == SOFTWARE_DEVELOPMENT_ID => {
            transform(&RoadmapInput::software_development())
        }
        (None, Some(rec)) => transform(&RoadmapInput::from_recommendation(&rec)),
        (None, None) => fallback_roadmap(),
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Roadmap {id} not found"))
}

/// Applies a state transition and returns the updated roadmap.
async fn apply(
    state: &AppState,
    id: Uuid,
    transition: impl FnOnce(&mut Roadmap) -> Result<(), RoadmapError>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let roadmap = state
        .roadmaps
        .update(id, |roadmap| {
            transition(roadmap)?;
            Ok::<_, RoadmapError>(roadmap.clone())
        })
        .await
        .ok_or_else(|| not_found(id))??;
    Ok(Json(RoadmapResponse::new(id, roadmap)))
}

/// POST /api/v1/roadmaps
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateRoadmapRequest>,
) -> (StatusCode, Json<RoadmapResponse>) {
    let roadmap = build(req);
    let id = state.roadmaps.insert(roadmap.clone()).await;
    info!(%id, title = %roadmap.title, sections = roadmap.sections.len(), "roadmap created");
    (StatusCode::CREATED, Json(RoadmapResponse::new(id, roadmap)))
}

/// GET /api/v1/roadmaps/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let roadmap = state.roadmaps.get(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(RoadmapResponse::new(id, roadmap)))
}

/// PATCH /api/v1/roadmaps/:id/sections/:section_id/expanded
pub async fn handle_toggle_expanded(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(Uuid, u32)>,
) -> Result<Json<RoadmapResponse>, AppError> {
    apply(&state, id, |r| r.toggle_section_expanded(section_id).map(|_| ())).await
}

/// PATCH /api/v1/roadmaps/:id/sections/:section_id/completed
pub async fn handle_toggle_section(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(Uuid, u32)>,
) -> Result<Json<RoadmapResponse>, AppError> {
    apply(&state, id, |r| r.toggle_section_completed(section_id).map(|_| ())).await
}

/// PATCH /api/v1/roadmaps/:id/sections/:section_id/items/:item_id/completed
pub async fn handle_toggle_item(
    State(state): State<AppState>,
    Path((id, section_id, item_id)): Path<(Uuid, u32, u32)>,
) -> Result<Json<RoadmapResponse>, AppError> {
    apply(&state, id, |r| r.toggle_item_completed(section_id, item_id).map(|_| ())).await
}

/// DELETE /api/v1/roadmaps/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.roadmaps.remove(id).await.ok_or_else(|| not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::defaults::software_development_path;

    #[test]
    fn test_build_without_input_is_fallback() {
        assert_eq!(build(CreateRoadmapRequest::default()), fallback_roadmap());
    }

    #[test]
    fn test_build_default_path_uses_fixed_input() {
        let roadmap = build(CreateRoadmapRequest {
            input: None,
            recommendation: Some(software_development_path()),
        });
        assert_eq!(roadmap.sections[0].sub_items[0].title, "JavaScript");
        assert_eq!(roadmap.sections[1].title, "Frontend Specialization");
        assert_eq!(roadmap.sections.len(), 9);
    }

    #[test]
    fn test_build_from_parsed_recommendation() {
        let mut rec = software_development_path();
        rec.id = "career-path-x".to_string();
        rec.title = "Platform Engineering".to_string();
        let roadmap = build(CreateRoadmapRequest {
            input: None,
            recommendation: Some(rec),
        });
        assert_eq!(roadmap.title, "Platform Engineering");
        assert_eq!(roadmap.sections[0].description, "Phase 1: Foundation");
    }
}
