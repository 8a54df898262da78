use std::{path::Path, time::Duration};

use crate::{
    infra::{
        self, clock::SystemClock, config::FileConfigAdapter, contracts::ConfigAdapter,
        error::AppError, logging::LoggingGuard, seed::BuiltinSeed,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        seed::build_shell_state,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads config and installs logging. The returned guard must outlive the
/// shell so buffered log lines are flushed on exit.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, LoggingGuard), AppError> {
    let context = build_context(config_path)?;
    let guard = infra::logging::init(&context.config.logging)?;

    tracing::info!(
        log_file = %infra::logging::resolve_log_path(&context.config.logging).display(),
        "logging initialized"
    );

    Ok((context, guard))
}

pub fn compose_shell(context: &AppContext) -> Result<ShellComposition, AppError> {
    let state = build_shell_state(&BuiltinSeed, &context.config.profile, &context.config.ui)?;
    let tick_rate = Duration::from_millis(context.config.ui.tick_rate_ms);

    Ok(ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(tick_rate)),
        orchestrator: Box::new(DefaultShellOrchestrator::with_state(state, SystemClock)),
    })
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter
        .load()
        .map_err(|error| match error.downcast::<AppError>() {
            Ok(app_error) => app_error,
            Err(other) => AppError::Other(other),
        })?;

    Ok(AppContext::new(config))
}
