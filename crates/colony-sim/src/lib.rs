//! `colony-sim`: the simulation driver.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   (paused → run_ticks skips but the clock advances; run stops)
//!   ① Update    : AntBehavior::update for every ant against the
//!                  tick-start Environment (parallel with `parallel`).
//!   ② Deposit   : ascending AgentId: pheromone at the snapped start cell
//!                  when the ant's deposit interval has elapsed.
//!   ③ Decay     : PheromoneTrail::decay.
//!   ④ Statistics: ascending AgentId: target switch → completed trip.
//!   observer.on_tick_end(summary); clock.advance(tick_interval)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the update phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use colony_core::{ManualClock, Millis};
//! use colony_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let (_handle, clock) = ManualClock::shared(Millis::ZERO);
//! let mut sim = SimBuilder::foraging(SimConfig::default())?
//!     .clock(clock)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! println!("{} trips", sim.stats.get_trips_count());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{DecisionWeights, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
