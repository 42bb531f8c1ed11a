//! Simulation time model.
//!
//! # Design
//!
//! Two notions of time coexist:
//!
//! - [`Tick`] counts iterations of the driver loop.  It is exact and only
//!   advanced by the driver.
//! - [`Millis`] is a timestamp read from a [`Clock`].  Pheromone decay and
//!   trip timing are defined in milliseconds, so they read a clock rather
//!   than the tick counter.
//!
//! The clock is injected.  Production runs use [`SystemClock`]; tests use
//! [`ManualClock`] and advance it explicitly, so pause/resume logic can be
//! verified without real sleeps.  Both are shared between the pheromone
//! trail, the statistics aggregator and the driver as a [`SharedClock`].

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute driver-loop iteration counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Millis ───────────────────────────────────────────────────────────────────

/// A clock reading in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Step back `ms` milliseconds, saturating at zero.
    #[inline]
    pub fn saturating_sub(self, ms: u64) -> Millis {
        Millis(self.0.saturating_sub(ms))
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

/// Signed difference, so clock anomalies show up as negative durations
/// instead of wrapping.
impl std::ops::Sub for Millis {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Millis) -> i64 {
        self.0 as i64 - rhs.0 as i64
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Clock ────────────────────────────────────────────────────────────────────

/// A monotonic millisecond source.
///
/// `advance` is how the driver paces itself between ticks: a wall clock
/// waits, a manual clock just moves forward.
pub trait Clock: Send + Sync {
    /// Current reading.
    fn now(&self) -> Millis;

    /// Let `step` of time pass.
    fn advance(&self, step: Duration);
}

/// A clock handle shared by every time-sensitive component of one run.
pub type SharedClock = Arc<dyn Clock>;

/// Wall-clock time, measured from construction.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    pub fn shared() -> SharedClock {
        Arc::new(Self::new())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis(self.origin.elapsed().as_millis() as u64)
    }

    fn advance(&self, step: Duration) {
        std::thread::sleep(step);
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now_ms: AtomicU64::new(start.0) }
    }

    /// Convenience constructor returning both the concrete handle (for the
    /// test or driver that moves time) and the shared trait object.
    pub fn shared(start: Millis) -> (Arc<ManualClock>, SharedClock) {
        let clock = Arc::new(Self::new(start));
        let shared: SharedClock = clock.clone();
        (clock, shared)
    }

    /// Move forward by `ms` milliseconds.
    #[inline]
    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Millis {
        Millis(self.now_ms.load(Ordering::SeqCst))
    }

    fn advance(&self, step: Duration) {
        self.advance_ms(step.as_millis() as u64);
    }
}
