//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only a handful of external ones (`rand`,
//! `rand_distr`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`                                         |
//! | [`floor`]       | `Floor` and floor-distance helpers                    |
//! | [`passenger`]   | `Passenger` request record                            |
//! | [`rng`]         | `SimRng`, `TrialSeeds`                                |
//! | [`stream`]      | `StreamConfig`, `PassengerStream` (demand generator)  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod floor;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod stream;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use floor::Floor;
pub use ids::PassengerId;
pub use passenger::Passenger;
pub use rng::{SimRng, TrialSeeds};
pub use stream::{PassengerStream, StreamConfig};
