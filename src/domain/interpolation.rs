use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Completed,
    Superseded,
    Cancelled,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

/// One emitted value of an interpolation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub run: RunId,
    pub value: Decimal,
    /// Set on the exact `end_value` emission that completes the run.
    pub is_final: bool,
}

/// One timed transition of a displayed number from `start_value` to
/// `end_value`.
///
/// A run only moves forward: once it leaves `Running` it never emits again.
#[derive(Debug, Clone)]
pub struct InterpolationRun {
    id: RunId,
    start_value: Decimal,
    end_value: Decimal,
    duration: Duration,
    started_at: Instant,
    state: RunState,
}

impl InterpolationRun {
    pub fn new(
        id: RunId,
        start_value: Decimal,
        end_value: Decimal,
        duration: Duration,
        started_at: Instant,
    ) -> Self {
        Self {
            id,
            start_value,
            end_value,
            duration,
            started_at,
            state: RunState::Running,
        }
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn end_value(&self) -> Decimal {
        self.end_value
    }

    /// Samples the run at `now`.
    ///
    /// Returns `None` once the run is terminal. The first sample at or past
    /// the deadline is exactly `end_value` and completes the run, however late
    /// it arrives. A span too wide to interpolate also completes on `end_value`.
    pub fn sample(&mut self, now: Instant) -> Option<Sample> {
        if self.state.is_terminal() {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return Some(self.complete());
        }

        let progress = micros(elapsed) / micros(self.duration);
        let Some(value) = self
            .end_value
            .checked_sub(self.start_value)
            .and_then(|span| span.checked_mul(progress))
            .and_then(|step| self.start_value.checked_add(step))
        else {
            tracing::warn!(run = %self.id, "interpolation span out of range, jumping to end value");
            return Some(self.complete());
        };
        Some(Sample {
            run: self.id,
            value: value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            is_final: false,
        })
    }

    fn complete(&mut self) -> Sample {
        self.state = RunState::Completed;
        Sample {
            run: self.id,
            value: self.end_value,
            is_final: true,
        }
    }

    /// Abandons a running run in favour of a newer one.
    pub fn supersede(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Superseded;
        }
    }

    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Cancelled;
        }
    }
}

fn micros(duration: Duration) -> Decimal {
    Decimal::try_from_i128_with_scale(duration.as_micros() as i128, 0).unwrap_or(Decimal::MAX)
}
