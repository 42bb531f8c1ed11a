//! `colony-behavior`: how an ant decides where to go next.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`context`]   | `Grid`, `Environment<'a>`: read-only tick snapshot             |
//! | [`obstacles`] | `ObstacleMap`: blocked grid cells                              |
//! | [`avoidance`] | angular-range obstacle avoidance                                |
//! | [`sensing`]   | field-of-view tests, `PheromoneInfo`, `analyze_pheromones`      |
//! | [`decision`]  | `PheromoneDecisionConfig`: the stochastic following policy     |
//! | [`engine`]    | `update_ant_position`: the per-tick update                     |
//! | [`model`]     | `AntBehavior` trait, `ForagingBehavior`                         |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The update is a pure function `(ant, environment, rng) -> ant`.  All
//! reads go through `&Environment`, which the driver builds once per tick
//! from the tick-start state, so no ant can observe another ant's
//! same-tick result and the update can run on any number of threads.

pub mod avoidance;
pub mod context;
pub mod decision;
pub mod engine;
pub mod error;
pub mod model;
pub mod obstacles;
pub mod sensing;


pub use context::{Environment, Grid};
pub use decision::{PheromoneChoice, PheromoneDecisionConfig};
pub use engine::{EDGE_THRESHOLD, STUCK_TOLERANCE, is_near_edge, update_ant_position};
pub use error::{BehaviorError, BehaviorResult};
pub use model::{AntBehavior, ForagingBehavior};
pub use obstacles::ObstacleMap;
pub use sensing::{PheromoneInfo, WEAKEST_MIN_STRENGTH, analyze_pheromones};
