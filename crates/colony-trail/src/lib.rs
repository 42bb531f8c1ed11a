//! `colony-trail`: the shared pheromone trail.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`pheromone`] | `Pheromone`: one scent marker                         |
//! | [`trail`]     | `PheromoneTrail`: the live set plus its decay clock   |
//!
//! # Decay model
//!
//! Strength is a pure function of age: `max(0, 1 - age / decay_time)`.
//! Age is measured on the trail's *effective* clock, which is the injected
//! clock minus every millisecond spent paused, so pausing freezes every
//! marker exactly where it was.

pub mod pheromone;
pub mod trail;

#[cfg(test)]
mod tests;

pub use pheromone::Pheromone;
pub use trail::{DEFAULT_DECAY_TIME_MS, PheromoneTrail};
