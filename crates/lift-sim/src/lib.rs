//! `lift-sim` — the elevator driver loop and the policy comparison built on
//! it.
//!
//! # Driver loop
//!
//! ```text
//! state = Running
//! while state == Running:
//!   ① Load      — board waiting passengers on this floor, up to capacity
//!   ② Dispatch  — DispatchPolicy::decide (may idle the clock forward)
//!   ③ Move      — jump to the target, or step floor by floor loading
//!                 en route (policies with picks_up_en_route)
//!   ④ Unload    — drop off, record wait times
//!   moves += 1
//!   if pending and roster are both empty: state = Terminated
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs comparison trials on Rayon's thread pool.         |
//! | `serde`    | Serde derives on configuration and report types.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_dispatch::PolicyKind;
//! use lift_sim::{CompareConfig, PolicyPair, compare};
//!
//! let report = compare(
//!     &CompareConfig::default(),
//!     PolicyPair::new(PolicyKind::LookaheadOptimal, PolicyKind::NearestDestination),
//! )?;
//! println!("{} wins", report.first.wait_wins);
//! ```

pub mod builder;
pub mod chart;
pub mod compare;
pub mod elevator;
pub mod error;
pub mod observer;
pub mod result;
pub mod sim;


pub use builder::{DEFAULT_CAPACITY, SimBuilder};
pub use chart::Chart;
pub use compare::{
    CompareConfig, ComparisonReport, PolicyPair, PolicyStats, TrialOutcome, compare, run_trial,
};
pub use elevator::{Boarding, Elevator, Unloading, round_wait};
pub use error::{SimError, SimResult};
pub use observer::{LoadRecord, MoveRecord, NoopObserver, SimObserver, UnloadRecord};
pub use result::RunResult;
pub use sim::{RunState, Simulation};
