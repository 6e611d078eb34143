// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Truncated [exponential backoff].
//!
//! The delay after attempt `n` is `initial * scaling^(n-1)`, capped at the
//! maximum delay. [ExponentialBackoff] waits exactly that long between LRO
//! polls ([PollingBackoffPolicy]), and a uniformly random fraction of it
//! between retries ([BackoffPolicy]).
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff
//! [BackoffPolicy]: crate::backoff_policy::BackoffPolicy
//! [PollingBackoffPolicy]: crate::polling_backoff_policy::PollingBackoffPolicy

use std::time::{Duration, Instant};

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(60);
const DEFAULT_SCALING: f64 = 2.0;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor must be at least 1.0, got {0}")]
    ScalingBelowOne(f64),
    #[error("the initial delay must be positive")]
    ZeroInitialDelay,
    #[error("the maximum delay ({maximum:?}) is shorter than the initial delay ({initial:?})")]
    MaximumBelowInitial { maximum: Duration, initial: Duration },
}

/// Builds [ExponentialBackoff] policies.
///
/// The defaults are a one second initial delay, a one minute maximum delay,
/// and a scaling factor of 2.0.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    params: ExponentialBackoff,
}

impl ExponentialBackoffBuilder {
    pub fn new() -> Self {
        Self {
            params: ExponentialBackoff {
                initial_delay: DEFAULT_INITIAL_DELAY,
                maximum_delay: DEFAULT_MAXIMUM_DELAY,
                scaling: DEFAULT_SCALING,
            },
        }
    }

    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.params.initial_delay = v.into();
        self
    }

    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.params.maximum_delay = v.into();
        self
    }

    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.params.scaling = v.into();
        self
    }

    /// Creates the policy, rejecting parameters outside their valid ranges.
    ///
    /// # Example
    /// ```
    /// # use vertexai_gax::exponential_backoff::*;
    /// # use vertexai_gax::polling_backoff_policy::PollingBackoffPolicy;
    /// use std::time::{Duration, Instant};
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(5))
    ///     .with_maximum_delay(Duration::from_secs(50))
    ///     .build()?;
    /// assert_eq!(backoff.wait_period(Instant::now(), 2), Duration::from_secs(10));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        let p = self.params;
        if p.scaling < 1.0 {
            return Err(Error::ScalingBelowOne(p.scaling));
        }
        if p.initial_delay.is_zero() {
            return Err(Error::ZeroInitialDelay);
        }
        if p.maximum_delay < p.initial_delay {
            return Err(Error::MaximumBelowInitial {
                maximum: p.maximum_delay,
                initial: p.initial_delay,
            });
        }
        Ok(p)
    }

    /// Creates the policy, clamping each parameter into its useful range.
    ///
    /// The maximum delay is clamped to `[1s, 1d]`, then the initial delay to
    /// `[1ms, maximum]`, and the scaling factor to `[1.0, 32.0]`.
    pub fn clamp(self) -> ExponentialBackoff {
        let p = self.params;
        let maximum_delay = p
            .maximum_delay
            .clamp(Duration::from_secs(1), Duration::from_secs(24 * 60 * 60));
        ExponentialBackoff {
            initial_delay: p.initial_delay.clamp(Duration::from_millis(1), maximum_delay),
            maximum_delay,
            scaling: p.scaling.clamp(1.0, 32.0),
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements truncated exponential backoff.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    fn delay(&self, attempt_count: u32) -> Duration {
        let exponent = i32::try_from(attempt_count.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.scaling.powi(exponent);
        // The ratio bounds `factor`, so the product below cannot overflow.
        let ratio = self.maximum_delay.div_duration_f64(self.initial_delay);
        if factor.is_finite() && factor < ratio {
            self.initial_delay.mul_f64(factor)
        } else {
            self.maximum_delay
        }
    }

    fn delay_with_jitter(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        rng.random_range(Duration::ZERO..=self.delay(attempt_count))
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl crate::polling_backoff_policy::PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        self.delay(attempt_count)
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        self.delay_with_jitter(attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use crate::polling_backoff_policy::PollingBackoffPolicy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn build_errors() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .build();
        assert!(matches!(b, Err(Error::ZeroInitialDelay)), "{b:?}");
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::MaximumBelowInitial { .. })), "{b:?}");
        let b = ExponentialBackoffBuilder::new().with_scaling(0.5).build();
        assert!(matches!(b, Err(Error::ScalingBelowOne(_))), "{b:?}");
    }

    #[test]
    fn polling_defaults() {
        let b = ExponentialBackoff::default();
        let now = Instant::now();
        let got = (1..=8)
            .map(|n| b.wait_period(now, n).as_secs())
            .collect::<Vec<_>>();
        assert_eq!(got, vec![1, 2, 4, 8, 16, 32, 60, 60]);
        assert_eq!(b.wait_period(now, u32::MAX), Duration::from_secs(60));
    }

    #[test]
    fn clamp() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .with_maximum_delay(Duration::from_secs(7 * 24 * 3600))
            .with_scaling(1024.0)
            .clamp();
        assert_eq!(b.initial_delay, Duration::from_millis(1));
        assert_eq!(b.maximum_delay, Duration::from_secs(24 * 3600));
        assert_eq!(b.scaling, 32.0);
    }

    #[test]
    fn jitter_in_range() {
        let b = ExponentialBackoff::default();
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..10 {
            let got = b.delay_with_jitter(n, &mut rng);
            assert!(got <= b.delay(n), "{n} {got:?}");
        }
        let got = b.on_failure(Instant::now(), 3);
        assert!(got <= Duration::from_secs(4), "{got:?}");
    }
}
