use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use flashgen_core::{Flashcard, RequestController, SubmitOutcome};

use crate::api::dto::{ErrorOut, GenerateIn, SessionOut};

#[derive(Clone)]
pub struct AppState {
    pub ctl: RequestController,
}

type ApiError = (StatusCode, Json<ErrorOut>);

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    (status, Json(ErrorOut { error: msg.into() }))
}

pub async fn get_session(State(st): State<Arc<AppState>>) -> Json<SessionOut> {
    Json(st.ctl.snapshot().into())
}

pub async fn generate(State(st): State<Arc<AppState>>, Json(body): Json<GenerateIn>)
    -> Result<Json<Vec<Flashcard>>, ApiError>
{
    match st.ctl.submit(&body.topic).await {
        SubmitOutcome::Generated { cards } => Ok(Json(cards)),
        SubmitOutcome::Ignored => Err(api_error(StatusCode::BAD_REQUEST, "topic must not be blank")),
        SubmitOutcome::Busy => Err(api_error(StatusCode::CONFLICT, "a generation is already running")),
        SubmitOutcome::Failed { notice } => Err(api_error(StatusCode::BAD_GATEWAY, notice)),
    }
}
