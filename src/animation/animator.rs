use std::time::Duration;

/// What happens when one sweep cycle ends and another is due.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to the start value.
    #[default]
    Restart,
    /// Play every other cycle backwards (ping-pong).
    Reverse,
}

/// Number of extra cycles after the first one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatCount {
    /// Repeat forever.
    #[default]
    Infinite,
    /// Repeat `n` times, for `n + 1` cycles in total.
    Finite(u32),
}

impl RepeatCount {
    /// Total number of cycles played, `None` when unbounded.
    pub fn total_cycles(self) -> Option<u64> {
        match self {
            Self::Infinite => None,
            Self::Finite(n) => Some(u64::from(n) + 1),
        }
    }
}

/// Timing parameters of one [`WaveAnimator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorTiming {
    /// Length of the active sweep.
    pub sweep: Duration,
    /// Pause appended after every sweep.
    pub repeat_delay: Duration,
    /// How consecutive cycles are played.
    pub repeat_mode: RepeatMode,
    /// Extra cycles after the first one.
    pub repeat_count: RepeatCount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Running,
    Finished,
}

/// Time-driven value running from `0` to `1 + repeat_delay / sweep` over one cycle.
///
/// The span past `1` is the pause segment. Values are only advanced by [`WaveAnimator::advance`];
/// the host's frame clock decides how much time passed.
#[derive(Clone, Debug)]
pub struct WaveAnimator {
    timing: AnimatorTiming,
    state: State,
    play_time: Duration,
    value: f64,
}

impl WaveAnimator {
    /// Create an idle animator sitting at value `0`.
    pub fn new(timing: AnimatorTiming) -> Self {
        Self {
            timing,
            state: State::Idle,
            play_time: Duration::ZERO,
            value: 0.0,
        }
    }

    /// Timing this animator was created with.
    pub fn timing(&self) -> AnimatorTiming {
        self.timing
    }

    /// Upper bound of the animated value: `1 + repeat_delay / sweep`.
    pub fn end_value(&self) -> f64 {
        let sweep = self.timing.sweep.as_secs_f64();
        if sweep <= 0.0 {
            return 1.0;
        }
        1.0 + self.timing.repeat_delay.as_secs_f64() / sweep
    }

    /// Length of one full cycle, sweep plus pause.
    pub fn cycle_duration(&self) -> Duration {
        self.timing.sweep + self.timing.repeat_delay
    }

    /// Start from the beginning. No-op while already running.
    pub fn start(&mut self) {
        if self.state == State::Running {
            return;
        }
        self.state = State::Running;
        self.play_time = Duration::ZERO;
        self.value = 0.0;
        tracing::debug!(
            cycle_ms = self.cycle_duration().as_millis() as u64,
            "wave animator started"
        );
    }

    /// Stop where it is; the current value is kept. No-op unless running.
    pub fn cancel(&mut self) {
        if self.state != State::Running {
            return;
        }
        self.state = State::Idle;
        tracing::debug!(value = self.value, "wave animator cancelled");
    }

    /// `true` while ticks advance the value.
    pub fn is_started(&self) -> bool {
        self.state == State::Running
    }

    /// `true` once a finite repeat count ran out.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Time played since the last [`WaveAnimator::start`].
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    /// Current value in `[0, end_value]`.
    pub fn animated_value(&self) -> f64 {
        self.value
    }

    /// Advance by `dt`. Returns `true` when a tick was delivered (the animator was running).
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != State::Running {
            return false;
        }
        self.play_time = self.play_time.saturating_add(dt);
        self.value = self.value_at(self.play_time);
        true
    }

    /// Evaluate the value at `play_time`, updating the finished state when the last cycle ends.
    fn value_at(&mut self, play_time: Duration) -> f64 {
        let end = self.end_value();
        let cycle = self.cycle_duration().as_secs_f64();
        if cycle <= 0.0 {
            return end;
        }

        let t = play_time.as_secs_f64() / cycle;
        if let Some(total) = self.timing.repeat_count.total_cycles()
            && t >= total as f64
        {
            // Freeze on the final value of the last cycle.
            self.state = State::Finished;
            tracing::debug!(cycles = total, "wave animator finished");
            let last = total - 1;
            return if self.is_reversed_cycle(last) { 0.0 } else { end };
        }

        let cycle_index = t.floor();
        let mut frac = t - cycle_index;
        if self.is_reversed_cycle(cycle_index as u64) {
            frac = 1.0 - frac;
        }
        frac * end
    }

    fn is_reversed_cycle(&self, cycle_index: u64) -> bool {
        self.timing.repeat_mode == RepeatMode::Reverse && cycle_index % 2 == 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
