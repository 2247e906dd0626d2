//! The host loop: a fixed-rate clock plus terminal input.
//!
//! Each interval pulse calls [`SimulationController::tick`] exactly once.
//! Terminal events are applied as they arrive, between pulses, so every
//! command is fully visible to the next tick. A frame is drawn only when
//! something changed.

use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures::StreamExt as _;
use life_core::config::pulse_period;
use life_core::{SimulationController, TickOutcome};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::input::{self, HostCommand};
use crate::render::{self, ClockReadout};

/// Totals reported when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Clock pulses delivered to the controller.
    pub pulses: u64,
    /// Generation count at exit.
    pub final_generation: u64,
}

/// Measures delivered pulses per second over one-second windows.
#[derive(Debug)]
pub struct RateMeter {
    window_start: Instant,
    pulses: u32,
    rate: f64,
}

impl RateMeter {
    /// Start measuring from `now`.
    pub const fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            pulses: 0,
            rate: 0.0,
        }
    }

    /// Record one pulse at `now`. Returns `true` when a window closed and
    /// the rate changed.
    pub fn pulse(&mut self, now: Instant) -> bool {
        self.pulses = self.pulses.saturating_add(1);
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return false;
        }
        self.rate = f64::from(self.pulses) / elapsed.as_secs_f64();
        self.pulses = 0;
        self.window_start = now;
        true
    }

    /// Last measured rate.
    pub const fn rate(&self) -> f64 {
        self.rate
    }
}

/// Apply a non-quit command to the controller.
///
/// Out-of-range edits are logged and dropped; they cannot come from the
/// input mapper, which only emits coordinates inside the grid.
pub fn apply(controller: &mut SimulationController, command: HostCommand) {
    match command {
        HostCommand::ToggleRun => {
            controller.toggle_run_state();
        }
        HostCommand::Reset => controller.reset(),
        HostCommand::ToggleTheme => {
            controller.toggle_theme();
        }
        HostCommand::Edit { col, row } => {
            if let Err(e) = controller.edit_cell(col, row) {
                warn!(error = %e, "Edit rejected");
            }
        }
        HostCommand::Quit => {}
    }
}

/// Run the interactive session until the user quits or input closes.
///
/// # Errors
///
/// Returns [`EngineError`] if the terminal fails or a tick fails.
pub async fn run<W: Write>(
    controller: &mut SimulationController,
    ticks_per_second: u32,
    out: &mut W,
) -> Result<SessionSummary, EngineError> {
    let period = pulse_period(ticks_per_second)?;
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut events = EventStream::new();
    let mut meter = RateMeter::new(Instant::now());
    let mut viewport = crossterm::terminal::size()?;
    let mut pulses: u64 = 0;
    let mut dirty = true;

    let columns = controller.grid().columns();
    let rows = controller.grid().rows();

    info!(ticks_per_second, period_us = period.as_micros(), "Host loop starting");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                pulses = pulses.saturating_add(1);
                if let TickOutcome::Advanced { .. } = controller.tick()? {
                    dirty = true;
                }
                dirty |= meter.pulse(Instant::now());
            }
            event = events.next() => match event {
                Some(Ok(Event::Resize(width, height))) => {
                    debug!(width, height, "Terminal resized");
                    viewport = (width, height);
                    dirty = true;
                }
                Some(Ok(event)) => match input::command_for(&event, columns, rows) {
                    Some(HostCommand::Quit) => break,
                    Some(command) => {
                        apply(controller, command);
                        dirty = true;
                    }
                    None => {}
                },
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }

        if dirty {
            let clock = ClockReadout {
                actual_tps: meter.rate(),
                target_tps: ticks_per_second,
            };
            render::draw(out, controller, clock, viewport)?;
            dirty = false;
        }
    }

    Ok(SessionSummary {
        pulses,
        final_generation: controller.generation(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use life_core::LifeGrid;
    use life_types::{RunState, ThemeId};

    fn controller() -> SimulationController {
        let grid = LifeGrid::new(10, 100, 100).unwrap();
        SimulationController::from_parts(grid, 3, ThemeId::Dark).unwrap()
    }

    #[test]
    fn apply_routes_each_command() {
        let mut ctl = controller();
        apply(&mut ctl, HostCommand::ToggleRun);
        assert_eq!(ctl.run_state(), RunState::Running);

        apply(&mut ctl, HostCommand::Edit { col: 1, row: 2 });
        assert_eq!(ctl.run_state(), RunState::Paused);
        assert!(ctl.grid().is_alive(1, 2).unwrap());

        apply(&mut ctl, HostCommand::ToggleTheme);
        assert_eq!(ctl.theme_id(), ThemeId::Light);

        apply(&mut ctl, HostCommand::Reset);
        assert!(ctl.grid().is_empty());
    }

    #[test]
    fn apply_drops_out_of_range_edit() {
        let mut ctl = controller();
        apply(&mut ctl, HostCommand::Edit { col: 50, row: 0 });
        assert!(ctl.grid().is_empty());
    }

    #[test]
    fn rate_meter_reports_after_one_second() {
        let start = Instant::now();
        let mut meter = RateMeter::new(start);
        for i in 1..60_u64 {
            assert!(!meter.pulse(start + Duration::from_millis(i * 16)));
        }
        assert!(meter.pulse(start + Duration::from_secs(1)));
        assert!((meter.rate() - 60.0).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_delivers_one_tick_per_pulse() {
        // Mirrors the host clock without a terminal: N pulses, N ticks.
        let mut ctl = controller();
        ctl.toggle_run_state();
        let mut interval = tokio::time::interval(Duration::from_millis(16));
        for _ in 0..9 {
            interval.tick().await;
            ctl.tick().unwrap();
        }
        assert_eq!(ctl.generation(), 3);
    }

    #[tokio::test]
    async fn run_rejects_rate_without_pulse_period() {
        let mut ctl = controller();
        let mut out = Vec::new();
        for rate in [0, u32::MAX] {
            let result = run(&mut ctl, rate, &mut out).await;
            assert!(matches!(
                result,
                Err(EngineError::Simulation {
                    source: life_core::LifeError::InvalidConfiguration { .. }
                })
            ));
        }
        assert!(out.is_empty());
    }
}
