//! Lambda handler for the prompt generator.

use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

use crate::appsync::BackendError;
use crate::generation::generator::{GenerationRequest, PIPELINE};
use crate::state::Services;
use crate::workflow::Outcome;

/// Generates a meta-prompt for `request` and records it on the prompt.
pub async fn generate_prompt(
    services: &Services,
    request: &GenerationRequest,
) -> Result<Outcome, BackendError> {
    PIPELINE
        .run(
            services.llm.as_ref(),
            services.records.as_ref(),
            request.invocation(),
        )
        .await
}

/// Entry point wired into `lambda_runtime`.
///
/// Succeeds once a terminal status is recorded; fails only when the `ERROR`
/// update could not be delivered.
pub async fn handle_generation(
    services: &Services,
    event: LambdaEvent<GenerationRequest>,
) -> Result<(), Error> {
    let (request, context) = event.into_parts();
    info!(
        request_id = %context.request_id,
        prompt_id = %request.prompt_id,
        variables = request.variables.len(),
        "Received generation request"
    );

    match generate_prompt(services, &request).await? {
        Outcome::Completed(prompt) => info!(
            prompt_id = %request.prompt_id,
            "Generated prompt ({} chars)",
            prompt.len()
        ),
        Outcome::Failed(err) => info!(
            prompt_id = %request.prompt_id,
            error_kind = err.kind(),
            "Prompt marked as ERROR"
        ),
    }
    Ok(())
}
