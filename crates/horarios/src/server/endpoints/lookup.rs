use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Query parameters for the occupancy lookup endpoint. Both are required;
/// they stay optional here so the handler can answer 400 itself instead of
/// letting the extractor reject the request.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub dia: Option<String>,
    pub horario: Option<String>,
}

/// GET /api/disciplinas-por-horario?dia=<DayName>&horario=<HH:MM>
/// Returns every class section occupying the given weekday/time slot.
pub async fn get_classes_by_slot(
    State(s): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Response {
    let (dia, horario) = match (params.dia.as_deref(), params.horario.as_deref()) {
        (Some(dia), Some(horario)) if !dia.is_empty() && !horario.is_empty() => (dia, horario),
        _ => {
            return ApiErrorType::from((
                StatusCode::BAD_REQUEST,
                "Parameters 'dia' and 'horario' are required",
            ))
            .into_response();
        }
    };

    info!("GET /api/disciplinas-por-horario dia={dia} horario={horario}");

    let matches = s.catalog.find(dia, horario);
    (StatusCode::OK, Json(matches)).into_response()
}

/// GET /
/// Serves the static schedule-grid front end.
pub async fn get_index() -> Response {
    Html(include_str!("../../../static/index.html")).into_response()
}

/// GET /health
pub async fn get_health(State(s): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "entries": s.catalog.len() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use axum::body::to_bytes;

    fn test_state() -> Arc<AppState> {
        let subjects = serde_json::from_value(serde_json::json!([
            {
                "disciplina": "DIM0138 - ALGORITHMS I",
                "turmas": [{"turma": "01", "docente": "ADA LOVELACE", "horario": "35M12"}]
            }
        ]))
        .unwrap();

        Arc::new(AppState {
            catalog: Catalog::from_subjects(subjects),
        })
    }

    async fn lookup(dia: Option<&str>, horario: Option<&str>) -> Response {
        let params = LookupParams {
            dia: dia.map(str::to_string),
            horario: horario.map(str::to_string),
        };
        get_classes_by_slot(State(test_state()), Query(params)).await
    }

    #[tokio::test]
    async fn test_missing_parameters_are_rejected() {
        for (dia, horario) in [
            (None, None),
            (Some("Tuesday"), None),
            (None, Some("07:00")),
            (Some(""), Some("07:00")),
        ] {
            let response = lookup(dia, horario).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert!(json.get("error").is_some());
        }
    }

    #[tokio::test]
    async fn test_lookup_returns_matching_entries() {
        let response = lookup(Some("Tuesday"), Some("07:00")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["disciplina"], "DIM0138 - ALGORITHMS I");
        assert_eq!(entries[0]["docente"], "ADA LOVELACE");
        assert_eq!(
            entries[0]["horario_legivel"],
            "Tuesday and Thursday from 07:00 to 08:45"
        );
    }

    #[tokio::test]
    async fn test_lookup_unoccupied_slot_is_empty_array() {
        let response = lookup(Some("Saturday"), Some("21:15")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_health_reports_entry_count() {
        let response = get_health(State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["entries"], 1);
    }
}
