//! `lift-dispatch` — choosing where the elevator goes next.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`context`]   | `DispatchContext<'a>`: read-only view of the elevator state    |
//! | [`decision`]  | `Decision` enum (`MoveTo`, `WaitThenMoveTo`, `Idle`)           |
//! | [`model`]     | `DispatchPolicy` trait and its shared three-branch `decide`    |
//! | [`select`]    | Floor-selection helpers shared by the policies                 |
//! | [`random`]    | `RandomPolicy`                                                 |
//! | [`nearest`]   | `NearestDestinationPolicy`                                     |
//! | [`lookahead`] | `LookaheadOptimalPolicy`                                       |
//! | [`kind`]      | `PolicyKind`: the closed set of policies, parseable by name    |
//! | [`error`]     | `DispatchError`                                                |
//!
//! # Design notes
//!
//! Every policy answers the same three questions, in this order:
//!
//! 1. Someone is onboard: which destination next?  ([`DispatchPolicy::deliver`])
//! 2. Nobody onboard, someone waiting: which floor to fetch from?
//!    ([`DispatchPolicy::fetch`])
//! 3. Nobody onboard or waiting: let time pass one second at a time until
//!    someone arrives, then stay put if they are here, otherwise pick a floor
//!    ([`DispatchPolicy::fetch_after_wait`]).
//!
//! The branching lives once in [`DispatchPolicy::decide`]; policies override
//! the three selectors plus two flags (`discards_degenerate`,
//! `picks_up_en_route`) that the driver consults.
//!
//! Tie-breaking differs between policies *and* between branches of the same
//! policy (uniform random in some places, first-in-enumeration-order in
//! others).  Those differences change simulation outcomes and are kept
//! exactly.

pub mod context;
pub mod decision;
pub mod error;
pub mod kind;
pub mod lookahead;
pub mod model;
pub mod nearest;
pub mod random;
pub mod select;


pub use context::DispatchContext;
pub use decision::Decision;
pub use error::DispatchError;
pub use kind::PolicyKind;
pub use lookahead::LookaheadOptimalPolicy;
pub use model::DispatchPolicy;
pub use nearest::NearestDestinationPolicy;
pub use random::RandomPolicy;
