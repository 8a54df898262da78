use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        tick_rate_ms = context.config.ui.tick_rate_ms,
        emoji_columns = context.config.ui.emoji_columns,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |orchestrator| {
        terminal.draw(|frame| view::render(frame, orchestrator.state_mut()))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draws, then waits for one event, until the orchestrator stops running.
/// An exhausted event source also ends the loop.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut dyn ShellOrchestrator) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(&mut *orchestrator)?;

        match event_source.next_event()? {
            Some(event) => orchestrator.handle_event(event)?,
            None if event_source.is_exhausted() => break,
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            events::{AppEvent, KeyInput},
            shell_state::{Panel, ShellState},
        },
        infra::stubs::FixedClock,
        ui::event_source::MockEventSource,
        usecases::shell::DefaultShellOrchestrator,
    };

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn loop_draws_until_quit() {
        let mut source = MockEventSource::from(vec![key("2"), key("3"), key("q")]);
        let mut orchestrator =
            DefaultShellOrchestrator::with_state(ShellState::default(), FixedClock("10:00"));
        let mut draws = 0;

        run_loop(&mut source, &mut orchestrator, |_| {
            draws += 1;
            Ok(())
        })
        .expect("loop must finish");

        assert_eq!(draws, 3);
        assert!(!orchestrator.state().is_running());
        assert_eq!(orchestrator.state().panel(), Panel::Settings);
    }

    #[test]
    fn loop_ends_when_source_is_exhausted() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick]);
        let mut orchestrator =
            DefaultShellOrchestrator::with_state(ShellState::default(), FixedClock("10:00"));

        run_loop(&mut source, &mut orchestrator, |_| Ok(())).expect("loop must finish");

        assert!(orchestrator.state().is_running());
    }
}
