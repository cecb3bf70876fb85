//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::PassengerId;

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "PassengerId(7)");
    }
}

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(11)), 8);
        assert_eq!(Floor(11).distance(Floor(3)), 8);
        assert_eq!(Floor(5).distance(Floor(5)), 0);
    }

    #[test]
    fn step_toward_moves_one_floor() {
        assert_eq!(Floor(3).step_toward(Floor(7)), Floor(4));
        assert_eq!(Floor(3).step_toward(Floor(0)), Floor(2));
        assert_eq!(Floor(3).step_toward(Floor(3)), Floor(3));
    }
}

#[cfg(test)]
mod passenger {
    use crate::{Floor, Passenger, PassengerId};

    #[test]
    fn degenerate_when_source_equals_destination() {
        let p = Passenger::new(PassengerId(0), 0.0, Floor(3), Floor(3));
        assert!(p.is_degenerate());
        let q = Passenger::new(PassengerId(1), 0.0, Floor(3), Floor(4));
        assert!(!q.is_degenerate());
    }

    #[test]
    fn visibility_is_inclusive() {
        let p = Passenger::new(PassengerId(0), 4.0, Floor(0), Floor(1));
        assert!(!p.is_visible_at(3.9));
        assert!(p.is_visible_at(4.0));
    }

    #[test]
    fn direction_relative_to_floor() {
        let p = Passenger::new(PassengerId(0), 0.0, Floor(0), Floor(6));
        assert!(p.rides_up_from(Floor(2)));
        assert!(!p.rides_up_from(Floor(6)));
        assert!(!p.rides_up_from(Floor(9)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, TrialSeeds};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1_000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1_000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn trial_seeds_differ_between_trials() {
        let a = TrialSeeds::new(42, 0);
        let b = TrialSeeds::new(42, 1);
        assert_ne!(a.stream, b.stream);
        assert_ne!(a.shuffle, b.shuffle);
        assert_ne!(a.stream, a.shuffle);
    }

    #[test]
    fn policy_seed_is_round_index() {
        assert_eq!(TrialSeeds::new(42, 3).policy, 3);
        assert_eq!(TrialSeeds::new(99, 3).policy, 3);
    }

    #[test]
    fn slot_zero_is_identity() {
        let s = TrialSeeds::new(5, 2);
        assert_eq!(s.with_slot(0), s);
        let other = s.with_slot(1);
        assert_ne!(other.stream, s.stream);
        assert_eq!(other.policy, s.policy);
    }
}

#[cfg(test)]
mod stream {
    use crate::stream::{DEFAULT_LOADING_RATES, DEFAULT_SPEEDS};
    use crate::{CoreError, Floor, PassengerStream, StreamConfig, TrialSeeds};

    fn generate(seed: u64, trial: u32) -> PassengerStream {
        PassengerStream::generate(&StreamConfig::default(), TrialSeeds::new(seed, trial)).unwrap()
    }

    #[test]
    fn default_shape() {
        let s = generate(42, 0);
        assert_eq!(s.len(), 1_000);
        assert!(DEFAULT_SPEEDS.contains(&s.speed));
        assert!(DEFAULT_LOADING_RATES.contains(&s.loading_rate));
    }

    #[test]
    fn arrivals_non_decreasing_and_integral() {
        let s = generate(42, 0);
        assert!(s.passengers.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time));
        assert!(s.passengers[0].arrival_time >= 0.0);
        // Poisson increments are whole numbers.
        assert!(s.passengers.iter().all(|p| p.arrival_time.fract() == 0.0));
    }

    #[test]
    fn floors_within_inclusive_range() {
        let s = generate(42, 0);
        let top = StreamConfig::default().top_floor();
        assert!(s.passengers.iter().all(|p| p.source <= top && p.destination <= top));
        // With 2000 draws over 21 values both ends of the range show up.
        assert!(s.passengers.iter().any(|p| p.source == Floor(0)));
        assert!(s.passengers.iter().any(|p| p.source == top));
    }

    #[test]
    fn ids_follow_stream_order() {
        let s = generate(1, 0);
        assert!(s.passengers.iter().enumerate().all(|(i, p)| p.id.index() == i));
    }

    #[test]
    fn deterministic_for_same_seed_and_trial() {
        assert_eq!(generate(42, 3), generate(42, 3));
    }

    #[test]
    fn trials_differ() {
        assert_ne!(generate(42, 0).passengers, generate(42, 1).passengers);
    }

    #[test]
    fn mean_increment_close_to_rate() {
        let s = generate(7, 0);
        let last = s.passengers.last().unwrap().arrival_time;
        let mean = last / s.len() as f64;
        approx::assert_relative_eq!(mean, 1.0, max_relative = 0.15);
    }

    #[test]
    fn empty_candidates_rejected() {
        let config = StreamConfig { speeds: vec![], ..StreamConfig::default() };
        let err = PassengerStream::generate(&config, TrialSeeds::new(0, 0)).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn non_positive_rate_rejected() {
        let config = StreamConfig { arrival_rate: 0.0, ..StreamConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_requests_assigns_ids() {
        let s = PassengerStream::from_requests(&[(0.0, 0, 5), (1.0, 5, 5)], 1.0, 0.0);
        assert_eq!(s.len(), 2);
        assert_eq!(s.passengers[1].id.index(), 1);
        assert_eq!(s.degenerate_count(), 1);
    }
}
