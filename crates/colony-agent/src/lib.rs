//! `colony-agent`: ant state and colony construction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`ant`]      | `Ant` (immutable per-tick snapshot), `AntParams`             |
//! | [`history`]  | `DirectionHistory`: bounded FIFO of recent headings         |
//! | [`rngs`]     | `AgentRngs` (per-ant RNG, kept apart from the ants)          |
//! | [`builder`]  | `ColonyBuilder` (spawn N ants at the nest)                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `AntParams`.          |

pub mod ant;
pub mod builder;
pub mod history;
pub mod rngs;


pub use ant::{Ant, AntParams};
pub use builder::ColonyBuilder;
pub use history::{DirectionHistory, HISTORY_CAPACITY};
pub use rngs::AgentRngs;
