use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{StoryError, StoryResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A keyframe track over normalized progress `0..=1`.
///
/// `times[i]` is the progress at which `values[i]` is reached; the ease is applied
/// within each segment.
#[derive(Clone, Debug)]
pub struct Track<T> {
    values: Vec<T>,
    times: Vec<f64>,
    ease: Ease,
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Keyframes spread evenly over the track.
    pub fn even(values: Vec<T>, ease: Ease) -> StoryResult<Self> {
        let n = values.len();
        let times = match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        };
        Self::with_times(values, times, ease)
    }

    pub fn with_times(values: Vec<T>, times: Vec<f64>, ease: Ease) -> StoryResult<Self> {
        let track = Self {
            values,
            times,
            ease,
        };
        track.validate()?;
        Ok(track)
    }

    pub fn validate(&self) -> StoryResult<()> {
        if self.values.is_empty() {
            return Err(StoryError::animation("track must have at least one keyframe"));
        }
        if self.values.len() != self.times.len() {
            return Err(StoryError::animation(format!(
                "track has {} values but {} times",
                self.values.len(),
                self.times.len()
            )));
        }
        if !self.times.iter().all(|t| (0.0..=1.0).contains(t)) {
            return Err(StoryError::animation("track times must lie in [0, 1]"));
        }
        if !self.times.windows(2).all(|w| w[0] <= w[1]) {
            return Err(StoryError::animation("track times must be sorted"));
        }
        self.ease.validate()
    }

    pub fn sample(&self, progress: f64) -> T {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let idx = self.times.partition_point(|t| *t <= p);

        if idx == 0 {
            return self.values[0].clone();
        }
        if idx >= self.values.len() {
            return self.values[self.values.len() - 1].clone();
        }

        let (ta, tb) = (self.times[idx - 1], self.times[idx]);
        let a = &self.values[idx - 1];
        let b = &self.values[idx];
        let span = tb - ta;
        if span <= 0.0 {
            return a.clone();
        }
        let t = self.ease.apply((p - ta) / span);
        T::lerp(a, b, t)
    }
}

/// Where a looping animation is at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopPhase {
    /// Still inside the initial start delay.
    Waiting,
    Running { iteration: u64, progress: f64 },
}

/// Start delay followed by an infinitely repeating period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoopClock {
    pub delay: Millis,
    pub period: Millis,
}

impl LoopClock {
    pub fn phase_at(self, now: Millis) -> LoopPhase {
        if now < self.delay {
            return LoopPhase::Waiting;
        }
        let local = now.since(self.delay).0;
        if self.period.0 == 0 {
            return LoopPhase::Running {
                iteration: 0,
                progress: 1.0,
            };
        }
        LoopPhase::Running {
            iteration: local / self.period.0,
            progress: (local % self.period.0) as f64 / self.period.0 as f64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
