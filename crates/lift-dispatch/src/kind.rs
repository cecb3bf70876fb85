//! `PolicyKind`: the closed set of built-in policies.

use std::fmt;
use std::str::FromStr;

use lift_core::{Floor, Passenger, SimRng};

use crate::{
    DispatchContext, DispatchError, DispatchPolicy, LookaheadOptimalPolicy,
    NearestDestinationPolicy, RandomPolicy,
};

/// One of the three built-in policies.
///
/// `PolicyKind` itself implements [`DispatchPolicy`] by delegating, so the
/// driver and aggregator can hold any of them by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    Random,
    NearestDestination,
    LookaheadOptimal,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::Random,
        PolicyKind::NearestDestination,
        PolicyKind::LookaheadOptimal,
    ];

    /// Human-readable label used in reports and charts.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Random             => "Random Elevator",
            PolicyKind::NearestDestination => "Strategy Elevator",
            PolicyKind::LookaheadOptimal   => "Optimal Elevator",
        }
    }

    fn policy(self) -> &'static dyn DispatchPolicy {
        match self {
            PolicyKind::Random             => &RandomPolicy,
            PolicyKind::NearestDestination => &NearestDestinationPolicy,
            PolicyKind::LookaheadOptimal   => &LookaheadOptimalPolicy,
        }
    }
}

impl DispatchPolicy for PolicyKind {
    fn name(&self) -> &'static str {
        self.policy().name()
    }

    fn deliver(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Floor {
        self.policy().deliver(ctx, rng)
    }

    fn fetch(&self, ctx: &DispatchContext<'_>, visible: &[&Passenger], rng: &mut SimRng) -> Floor {
        self.policy().fetch(ctx, visible, rng)
    }

    fn fetch_after_wait(&self, floor: Floor, arrived: &[&Passenger], rng: &mut SimRng) -> Floor {
        self.policy().fetch_after_wait(floor, arrived, rng)
    }

    fn discards_degenerate(&self) -> bool {
        self.policy().discards_degenerate()
    }

    fn picks_up_en_route(&self) -> bool {
        self.policy().picks_up_en_route()
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = DispatchError;

    /// Accepts the policy name or its report alias, case-insensitively, with
    /// `-` or `_` as separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "random"                                       => Ok(PolicyKind::Random),
            "nearest-destination" | "nearest" | "strategy" => Ok(PolicyKind::NearestDestination),
            "lookahead-optimal" | "lookahead" | "optimal"  => Ok(PolicyKind::LookaheadOptimal),
            _ => Err(DispatchError::UnknownPolicy(s.to_owned())),
        }
    }
}
