use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::running_in_lambda;

/// Initializes structured logging for a binary.
///
/// `RUST_LOG` wins when set as a filter directive; otherwise the library and
/// the calling binary (`target`, usually `module_path!()`) log at `level`.
/// Inside Lambda timestamps and targets are dropped since CloudWatch
/// records its own.
pub fn init(target: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level},{target}={level}",
            env!("CARGO_PKG_NAME")
        ))
    });

    let lambda = running_in_lambda();
    tracing_subscriber::registry()
        .with(filter)
        .with(lambda.then(|| fmt::layer().without_time().with_target(false)))
        .with((!lambda).then(fmt::layer))
        .init();
}
