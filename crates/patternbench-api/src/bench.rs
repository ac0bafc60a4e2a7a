// Benchmark dispatcher
//
// One GET endpoint: answer microcalls with a bare timestamp, otherwise
// validate the run parameters, execute the measured run on the blocking pool,
// and render the report.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use patternbench_core::{
    harness, timestamp_now, Case, Endpoints, RunConfig, WorkloadCtx, MAX_MAGNITUDE, MIN_MAGNITUDE,
};

use crate::client::HttpMicroCaller;
use crate::config::ServiceConfig;
use crate::render;

/// App state for the benchmark routes
#[derive(Clone)]
pub struct AppState {
    endpoints: Arc<Endpoints>,
    service_path: Arc<String>,
}

/// Build the full router: the benchmark endpoint plus the welcome form the
/// result page links back to.
pub fn routes(config: &ServiceConfig) -> Router {
    let state = AppState {
        endpoints: Arc::new(config.endpoints()),
        service_path: Arc::new(config.service_path.clone()),
    };

    Router::new()
        .route(&config.service_path, get(perform))
        .route("/", get(welcome))
        .route("/index.html", get(welcome))
        .with_state(state)
}

/// Raw query parameters; flags count as set only when literally "on"
#[derive(Debug, Deserialize)]
pub struct BenchParams {
    case: Option<String>,
    magnitude: Option<String>,
    warmup: Option<String>,
    garbage: Option<String>,
    sleep: Option<String>,
    microcall: Option<String>,
}

impl BenchParams {
    fn flag(value: &Option<String>) -> bool {
        value.as_deref() == Some("on")
    }

    /// Magnitude as parsed, with -1 standing in for absent or non-numeric
    fn magnitude(&self) -> i64 {
        self.magnitude
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(-1)
    }
}

/// GET handler for the benchmark endpoint
pub async fn perform(
    State(state): State<AppState>,
    Query(params): Query<BenchParams>,
) -> Response {
    // a microcall gets the bare timestamp, nothing else happens
    if params.microcall.is_some() {
        return timestamp_now().into_response();
    }

    let case = params
        .case
        .as_deref()
        .and_then(|name| name.parse::<Case>().ok());
    let magnitude = params.magnitude();

    let case = match case {
        Some(case) if (MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&magnitude) => case,
        _ => {
            tracing::debug!(
                case = params.case.as_deref().unwrap_or("<absent>"),
                magnitude,
                "rejecting run parameters"
            );
            return Html(render::error_page()).into_response();
        }
    };

    let config = RunConfig {
        case,
        magnitude: magnitude as u32,
        warmup: BenchParams::flag(&params.warmup),
        garbage: BenchParams::flag(&params.garbage),
        sleep: BenchParams::flag(&params.sleep),
    };

    tracing::info!(
        case = %config.case,
        magnitude = config.magnitude,
        warmup = config.warmup,
        garbage = config.garbage,
        sleep = config.sleep,
        "benchmark starting"
    );

    // the loop may run for minutes; keep it off the async runtime so this
    // instance can still answer the microcalls the self-call cases issue
    let endpoints = state.endpoints.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let caller = HttpMicroCaller::new();
        let ctx = WorkloadCtx::new(config.sleep, endpoints.as_ref(), &caller);
        let routine = config.case.routine();
        harness::measure(&config, |iterations| routine(&ctx, iterations))
    })
    .await;

    match outcome {
        Ok(run) => {
            tracing::info!(case = %config.case, elapsed_ms = run.millis(), "benchmark finished");
            Html(render::result_page(&config, &run)).into_response()
        }
        Err(e) => {
            tracing::error!("benchmark task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET handler for `/` and `/index.html`
pub async fn welcome(State(state): State<AppState>) -> Html<String> {
    Html(render::welcome_page(&state.service_path))
}
