//! Lambda handler for the task distiller.

use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

use crate::appsync::BackendError;
use crate::distillation::distiller::{DistillationRequest, PIPELINE};
use crate::state::Services;
use crate::workflow::Outcome;

pub async fn distill_task(
    services: &Services,
    request: &DistillationRequest,
) -> Result<Outcome, BackendError> {
    PIPELINE
        .run(
            services.llm.as_ref(),
            services.records.as_ref(),
            request.invocation(),
        )
        .await
}

pub async fn handle_distillation(
    services: &Services,
    event: LambdaEvent<DistillationRequest>,
) -> Result<(), Error> {
    let (request, context) = event.into_parts();
    info!(
        request_id = %context.request_id,
        task_id = %request.task_id,
        "Received distillation request"
    );

    match distill_task(services, &request).await? {
        Outcome::Completed(task) => info!(task_id = %request.task_id, "Distilled task: {task}"),
        Outcome::Failed(err) => info!(
            task_id = %request.task_id,
            error_kind = err.kind(),
            "Task marked as ERROR"
        ),
    }
    Ok(())
}
