//! Property tests for time windows, lifespans and entity references.

use proptest::prelude::*;

use tessera_core::{EntityKind, EntityRef, Lifespan, Window};

fn window_strategy() -> impl Strategy<Value = Window> {
    (-50_i64..50, 0_i64..30).prop_map(|(start, len)| Window::new(start, start + len).unwrap())
}

proptest! {
    #[test]
    fn windows_exist_only_when_ordered(start in -100_i64..100, end in -100_i64..100) {
        prop_assert_eq!(Window::new(start, end).is_ok(), start <= end);
    }

    #[test]
    fn contains_matches_half_open_bounds(window in window_strategy(), t in -100_i64..100) {
        prop_assert_eq!(window.contains(t), window.start() <= t && t < window.end());
        if window.is_empty() {
            prop_assert!(!window.contains(t));
        }
    }

    #[test]
    fn overlap_is_symmetric(a in window_strategy(), b in window_strategy()) {
        prop_assert_eq!(
            a.overlaps(b.start(), b.end()),
            b.overlaps(a.start(), a.end())
        );
    }

    #[test]
    fn interval_overlap_means_a_shared_instant(
        window in window_strategy(),
        (start, end) in (-60_i64..60, -60_i64..60).prop_map(|(a, b)| (a.min(b), a.max(b))),
    ) {
        let shared = (start..end).any(|t| window.contains(t));
        prop_assert_eq!(Lifespan::Interval { start, end }.overlaps(&window), shared);
    }

    #[test]
    fn events_overlap_where_the_window_contains_them(window in window_strategy(), time in -100_i64..100) {
        prop_assert_eq!(Lifespan::Event { time }.overlaps(&window), window.contains(time));
        prop_assert!(Lifespan::Inherited.overlaps(&window));
    }

    #[test]
    fn nodes_order_before_edges(name in "[a-z]{1,6}", src in "[a-z]{1,6}", dst in "[a-z]{1,6}") {
        let node = EntityRef::node(name.as_str());
        let edge = EntityRef::edge(src.as_str(), dst.as_str());
        prop_assert!(node < edge);
        prop_assert_eq!(node.kind(), EntityKind::Node);
        prop_assert_eq!(edge.to_string(), format!("{src}->{dst}"));
    }
}
