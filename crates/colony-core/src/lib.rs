//! `colony-core`: foundational types for the ant colony simulation.
//!
//! This crate is a dependency of every other `colony-*` crate.  It has no
//! `colony-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`geo`]     | `Vec2`, distance, clamping, reflection                        |
//! | [`angle`]   | `Angle`, `AngleRange`, heading ↔ vector conversion, steering  |
//! | [`ids`]     | `AgentId`                                                     |
//! | [`target`]  | `Target`, `TargetType`                                        |
//! | [`time`]    | `Millis`, `Tick`, `Clock`, `SystemClock`, `ManualClock`       |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)                     |
//! | [`error`]   | `ColonyError`                                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod angle;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod target;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{
    Angle, AngleRange, angle_is_in_range, angle_to_direction, angular_distance,
    direction_to_angle, get_offset, normalize_angle,
};
pub use error::ColonyError;
pub use geo::{Vec2, calculate_distance, reflect, reflect_direction};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use target::{Target, TargetType};
pub use time::{Clock, ManualClock, Millis, SharedClock, SystemClock, Tick};
