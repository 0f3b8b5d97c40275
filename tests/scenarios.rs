//! End-to-end scenarios for u-delivery.

use u_delivery::config::{LocalSearchConfig, RouteConfig};
use u_delivery::local_search::{
    cross_exchange, cross_exchange_until_stable, two_opt_until_stable, SegmentExchange,
};
use u_delivery::models::{Coordinate, Route};

fn c(i: f64, j: f64) -> Coordinate {
    Coordinate::new(i, j)
}

fn route_of(points: &[(f64, f64)]) -> Route {
    let mut r = Route::new();
    for &(i, j) in points {
        assert!(r.add(c(i, j)).is_added());
    }
    r
}

mod square_tests {
    use super::*;

    #[test]
    fn test_square_in_insertion_order() {
        let r = route_of(&[(0.0, 5.0), (5.0, 0.0), (5.0, 5.0)]);
        assert_eq!(r.size(), 5);
        let expected = 10.0 + 10.0 * 2.0_f64.sqrt();
        assert!((r.length() - expected).abs() < 1e-10, "length = {}", r.length());
    }

    #[test]
    fn test_square_greedy_tour() {
        let r = route_of(&[(0.0, 5.0), (5.0, 0.0), (5.0, 5.0)]);
        let tour = r.greedy_tour();
        assert_eq!(tour.size(), 5);
        assert_eq!(
            tour.to_string(),
            "(0.000000,0.000000)(0.000000,5.000000)(5.000000,5.000000)\
             (5.000000,0.000000)(0.000000,0.000000)"
        );
        assert!((tour.length() - 20.0).abs() < 1e-10);
    }
}

mod exchange_tests {
    use super::*;

    #[test]
    fn test_single_element_swap_round_trip() {
        let mut a = route_of(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0)]);
        let mut b = route_of(&[(-1.0, -2.0), (-3.0, -4.0), (-5.0, -6.0), (-7.0, -8.0)]);
        let orig_a: Vec<Coordinate> = a.interior().to_vec();
        let orig_b: Vec<Coordinate> = b.interior().to_vec();

        let mv = SegmentExchange::new(1, 1, 1, 1);
        a.exchange_segments(&mut b, &mv).expect("interior bounds");
        assert_eq!(a.interior()[0], c(-1.0, -2.0));
        assert_eq!(b.interior()[0], c(1.0, 2.0));

        a.invert_exchange(&mut b, &mv).expect("interior bounds");
        assert_eq!(a.interior(), orig_a.as_slice());
        assert_eq!(b.interior(), orig_b.as_slice());
    }

    #[test]
    fn test_protected_addresses_block_improving_move() {
        // Swapping the east tail of `a` with the west tail of `b` is the
        // obvious improvement; protecting one of them forbids it.
        let mut a = route_of(&[(-10.0, 1.0), (-11.0, 1.0), (10.0, 1.0), (11.0, 1.0)]);
        let mut b = route_of(&[(10.0, -1.0), (11.0, -1.0), (-10.0, -1.0), (-11.0, -1.0)]);
        let protected = [c(10.0, 1.0), c(-10.0, 1.0), c(10.0, -1.0), c(-10.0, -1.0)];

        let before = a.length() + b.length();
        let applied = cross_exchange(&mut a, &mut b, &protected).expect("search succeeds");
        for p in &protected[..2] {
            assert!(a.contains(p));
        }
        for p in &protected[2..] {
            assert!(b.contains(p));
        }
        let after = a.length() + b.length();
        assert_eq!(applied.is_some(), after < before);
    }
}

mod daily_tests {
    use super::*;

    /// Routes are cleared, refilled and re-optimised each day.
    #[test]
    fn test_multi_day_cycle() {
        let config = RouteConfig::default();
        let search = LocalSearchConfig::default().with_max_passes(20);
        let days: [&[(f64, f64)]; 3] = [
            &[(1.0, 9.0), (8.0, -2.0), (-4.0, 6.0), (7.0, 7.0), (-6.0, -3.0), (2.0, -8.0)],
            &[(3.0, 3.0), (-3.0, 3.0), (3.0, -3.0), (-3.0, -3.0), (6.0, 0.0), (0.0, 6.0)],
            &[(9.0, 1.0), (-9.0, 1.0), (9.0, -1.0), (-9.0, -1.0)],
        ];
        let prime = c(1.0, 9.0);

        let mut a = Route::with_config(&config).expect("valid config");
        let mut b = Route::with_config(&config).expect("valid config");
        for stops in days {
            a.clear();
            b.clear();
            for (k, &(i, j)) in stops.iter().enumerate() {
                let target = if k % 2 == 0 { &mut a } else { &mut b };
                assert!(target.add(c(i, j)).is_added());
            }
            let mut a_tour = a.greedy_tour();
            let mut b_tour = b.greedy_tour();
            two_opt_until_stable(&mut a_tour, &search);
            two_opt_until_stable(&mut b_tour, &search);

            let prime_in_a = a_tour.contains(&prime);
            let summary = cross_exchange_until_stable(&mut a_tour, &mut b_tour, &[prime], &search)
                .expect("search succeeds");
            assert!(summary.final_length <= summary.initial_length);
            assert_eq!(a_tour.num_stops() + b_tour.num_stops(), stops.len());
            assert_eq!(a_tour.contains(&prime), prime_in_a);

            a = a_tour;
            b = b_tour;
        }
    }
}
