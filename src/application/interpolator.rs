use crate::domain::interpolation::{InterpolationRun, RunId, RunState, Sample};
use crate::domain::ports::Clock;
use rust_decimal::Decimal;
use std::time::Duration;

/// Tracks one displayed value and the single run animating it.
///
/// Starting a run supersedes the previous one, so two runs never write the
/// same value. Time comes from the injected clock; ticks come from whoever
/// calls [`ValueInterpolator::tick`].
pub struct ValueInterpolator<C: Clock> {
    clock: C,
    displayed: Decimal,
    current: Option<InterpolationRun>,
    next_id: u64,
}

impl<C: Clock> ValueInterpolator<C> {
    pub fn new(clock: C, initial: Decimal) -> Self {
        Self {
            clock,
            displayed: initial,
            current: None,
            next_id: 1,
        }
    }

    /// The last value emitted, or the initial/start value before any tick.
    pub fn displayed(&self) -> Decimal {
        self.displayed
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|run| run.state() == RunState::Running)
    }

    pub fn current_run(&self) -> Option<&InterpolationRun> {
        self.current.as_ref()
    }

    /// Starts a run from `start_value` to `end_value`, superseding any run in
    /// flight.
    pub fn start(&mut self, start_value: Decimal, end_value: Decimal, duration: Duration) -> RunId {
        if let Some(previous) = self.current.as_mut()
            && previous.state() == RunState::Running
        {
            previous.supersede();
            tracing::debug!(run = %previous.id(), "interpolation superseded");
        }

        let id = RunId(self.next_id);
        self.next_id += 1;
        self.displayed = start_value;
        self.current = Some(InterpolationRun::new(
            id,
            start_value,
            end_value,
            duration,
            self.clock.now(),
        ));
        tracing::debug!(run = %id, %start_value, %end_value, ?duration, "interpolation started");
        id
    }

    /// Starts a run from whatever is currently displayed.
    pub fn retarget(&mut self, end_value: Decimal, duration: Duration) -> RunId {
        self.start(self.displayed, end_value, duration)
    }

    /// Samples the active run. Returns `None` when nothing is running.
    pub fn tick(&mut self) -> Option<Sample> {
        let now = self.clock.now();
        let run = self.current.as_mut()?;
        let sample = run.sample(now)?;
        self.displayed = sample.value;
        if sample.is_final {
            tracing::debug!(run = %sample.run, value = %sample.value, "interpolation completed");
        }
        Some(sample)
    }

    /// Cancels the active run. Returns whether a running run was stopped.
    pub fn cancel(&mut self) -> bool {
        match self.current.as_mut() {
            Some(run) if run.state() == RunState::Running => {
                run.cancel();
                tracing::debug!(run = %run.id(), "interpolation cancelled");
                true
            }
            _ => false,
        }
    }
}
