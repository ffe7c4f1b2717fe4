use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::GenerateError;
use crate::models::{GenerationRequest, GenerationResult};
use crate::startup::AppState;

/// `POST /api/generate`: one prompt in, one provider call, one JSON answer out.
///
/// Body decoding, validation and provider failures all surface as
/// [`GenerateError`], which renders the failure body and status code.
#[tracing::instrument(skip(state, payload))]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, GenerateError> {
    let Json(request) = payload?;
    let call = request.into_call()?;

    let text = state.text_provider.generate(&call).await?;

    tracing::info!(
        model = %call.model,
        response_len = text.len(),
        "Generation completed"
    );

    Ok(Json(GenerationResult::success(text)))
}
