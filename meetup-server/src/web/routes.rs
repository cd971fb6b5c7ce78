//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::PreferenceTag;
use crate::planner::{PlanError, RecommendRequest, Recommendation, Recommender, RequestError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/recommend", post(recommend_form))
        .route("/api/recommend", post(recommend_api))
        .route("/api/stations", get(list_stations))
        .route("/api/tags", get(list_tags))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the participant form.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let min = state.config.min_participants;
    let max = state.config.max_participants;
    let count = query.n.unwrap_or(min).clamp(min, max);

    let stations = state
        .dataset
        .stations()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let html = IndexTemplate::new(count, min, max, stations)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

    Ok(Html(html))
}

/// Stations participants may start from, in table order.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .dataset
        .stations()
        .iter()
        .map(|s| s.to_string())
        .collect();

    Json(StationListResponse { stations })
}

/// The preference tag vocabulary.
async fn list_tags() -> Json<TagListResponse> {
    let tags = PreferenceTag::ALL.into_iter().map(TagResult::from).collect();
    Json(TagListResponse { tags })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Validate the pairs and run the planner.
fn run_recommendation<S: AsRef<str>, T: AsRef<str>>(
    state: &AppState,
    pairs: &[(S, T)],
) -> Result<(RecommendRequest, Recommendation), AppError> {
    let request = RecommendRequest::parse(pairs, &state.dataset.travel_times, &state.config)?;
    let recommendation = Recommender::new(&state.dataset, &state.config).recommend(&request)?;
    Ok((request, recommendation))
}

/// Recommend from the HTML form.
///
/// The form repeats `station` and `tag` once per participant. Answers with a
/// results page or JSON depending on the Accept header.
async fn recommend_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);

    let result = pair_form_fields(&fields)
        .map_err(|message| AppError::BadRequest { message })
        .and_then(|pairs| run_recommendation(&state, &pairs));

    match result {
        Ok((request, recommendation)) if html => {
            let template = ResultsTemplate::new(
                request.participants(),
                &recommendation,
                state.config.page_size,
            );
            let html = template.render().map_err(|e| AppError::Internal {
                message: format!("Template error: {e}"),
            })?;
            Ok(Html(html).into_response())
        }
        Ok((_, recommendation)) => {
            Ok(Json(RecommendResponse::from_recommendation(&recommendation)).into_response())
        }
        Err(e) if html => Ok(e.into_html_response()),
        Err(e) => Err(e),
    }
}

/// Recommend from a JSON body.
async fn recommend_api(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RecommendRequestBody = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "unparseable request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let (_, recommendation) = run_recommendation(&state, &req.pairs())?;
    Ok(Json(RecommendResponse::from_recommendation(&recommendation)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(%status, reason = message, "request failed");
        } else {
            info!(%status, reason = message, "request rejected");
        }
    }

    /// Render as an error page, falling back to JSON if the page fails.
    fn into_html_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        let title = status.canonical_reason().unwrap_or("Error").to_string();

        match (ErrorTemplate {
            title,
            message: message.to_string(),
        })
        .render()
        {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => AppError::Internal {
                message: format!("Template error: {e}"),
            }
            .into_response(),
        }
    }
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(e) => e.into(),
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::ingest::{parse_attractions, parse_travel_times};
    use crate::planner::PlannerConfig;
    use axum::http::HeaderValue;

    fn state() -> AppState {
        let travel_times = parse_travel_times(
            "單位:分,台北車站,西門,中山,淡水\n\
             台北車站,0,3,4,\n\
             西門,3,0,6,\n\
             中山,4,6,0,\n\
             淡水,,,,0\n",
        )
        .unwrap();
        let catalog = parse_attractions(
            "name,mrt_station,walk_min,rating,price_level,tags\n\
             書店咖啡,台北車站,2,4.6,low,咖啡廳\n\
             河濱步道,台北車站,12,4.2,low,散步\n\
             百貨,台北車站,5,3.9,high,逛街\n\
             紅樓,西門,3,4.4,low,看展\n",
        )
        .unwrap();
        AppState::new(Dataset::new(travel_times, catalog), PlannerConfig::default())
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers
    }

    fn form(pairs: &[(&str, &str)]) -> Form<Vec<(String, String)>> {
        Form(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn index_clamps_participant_count() {
        let Html(page) = index_page(State(state()), Query(IndexQuery { n: Some(50) }))
            .await
            .unwrap();
        assert_eq!(page.matches("name=\"station\"").count(), 10);

        let Html(page) = index_page(State(state()), Query(IndexQuery::default()))
            .await
            .unwrap();
        assert_eq!(page.matches("name=\"station\"").count(), 2);
        assert!(page.contains("淡水"));
    }

    #[tokio::test]
    async fn api_recommend_ranks() {
        let body = Bytes::from(
            r#"{"participants":[{"station":"西門","tag":"cafe"},{"station":"中山","tag":"散步"}]}"#,
        );
        let response = recommend_api(State(state()), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["outcome"], "ranked");
        assert_eq!(json["fair_stations"], serde_json::json!(["台北車站"]));
        assert_eq!(json["bound_mins"], 4);
        let names: Vec<&str> = json["attractions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["書店咖啡", "河濱步道", "百貨"]);
    }

    #[tokio::test]
    async fn api_no_fair_station() {
        let body = Bytes::from(
            r#"{"participants":[{"station":"西門","tag":"cafe"},{"station":"淡水","tag":"walk"}]}"#,
        );
        let response = recommend_api(State(state()), body).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["outcome"], "no_fair_station");
        assert_eq!(json["attractions"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn api_rejects_bad_requests() {
        let cases = [
            "not json",
            r#"{"participants":[{"station":"西門","tag":"cafe"}]}"#,
            r#"{"participants":[{"station":"西門","tag":"cafe"},{"station":"板橋","tag":"cafe"}]}"#,
            r#"{"participants":[{"station":"西門","tag":"cafe"},{"station":"中山","tag":"karaoke"}]}"#,
        ];

        for case in cases {
            let err = recommend_api(State(state()), Bytes::from(case))
                .await
                .unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest { .. }),
                "{case} should be a bad request"
            );
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn unknown_station_is_named() {
        let body = Bytes::from(
            r#"{"participants":[{"station":"西門","tag":"cafe"},{"station":"板橋","tag":"cafe"}]}"#,
        );
        let response = recommend_api(State(state()), body)
            .await
            .unwrap_err()
            .into_response();

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("板橋"));
    }

    #[tokio::test]
    async fn form_renders_results_page() {
        let fields = form(&[
            ("station", "西門"),
            ("tag", "cafe"),
            ("station", "中山"),
            ("tag", "walk"),
        ]);
        let response = recommend_form(State(state()), html_headers(), fields)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_text(response).await;
        assert!(page.contains("Meet at 台北車站"));
        assert!(page.contains("書店咖啡"));
        assert!(!page.contains("紅樓"));
    }

    #[tokio::test]
    async fn form_without_html_accept_returns_json() {
        let fields = form(&[
            ("station", "西門"),
            ("tag", "cafe"),
            ("station", "中山"),
            ("tag", "walk"),
        ]);
        let response = recommend_form(State(state()), HeaderMap::new(), fields)
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["outcome"], "ranked");
    }

    #[tokio::test]
    async fn form_errors_render_error_page() {
        let fields = form(&[("station", "西門"), ("station", "中山"), ("tag", "walk")]);
        let response = recommend_form(State(state()), html_headers(), fields)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Got 2 stations but 1 tags"));
    }

    #[tokio::test]
    async fn form_errors_as_json() {
        let fields = form(&[("station", "西門"), ("tag", "cafe")]);
        let err = recommend_form(State(state()), HeaderMap::new(), fields)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn lists_stations_and_tags() {
        let Json(stations) = list_stations(State(state())).await;
        assert_eq!(stations.stations, vec!["台北車站", "西門", "中山", "淡水"]);

        let Json(tags) = list_tags().await;
        assert_eq!(tags.tags.len(), 8);
        assert_eq!(tags.tags[3].slug, "cafe");
    }

    #[test]
    fn plan_errors_map_to_status() {
        let bad: AppError = PlanError::InvalidRequest(RequestError::UnknownStation("x".into())).into();
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let internal: AppError = PlanError::NoParticipants.into();
        assert!(matches!(internal, AppError::Internal { .. }));
    }
}
