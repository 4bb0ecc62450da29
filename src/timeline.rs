//! Hero map geometry and the entrance timeline.
//!
//! The illustration plays a single forward-only sequence on first display:
//! three route lines draw in, six location markers pop in, then the logo badge
//! spins in. The schedule is fixed data so the rendering side only has to flip
//! classes at the right moments; CSS transitions do the interpolation.

/// Offset of the first route draw from mount, in milliseconds.
pub const ROUTE_BASE_DELAY_MS: u32 = 500;
/// Gap between consecutive route draws.
pub const ROUTE_STAGGER_MS: u32 = 500;
/// How long one route takes to draw from 0% to 100% of its length.
pub const ROUTE_DRAW_MS: u32 = 2000;

/// Offset of the first marker pop from mount.
pub const MARKER_BASE_DELAY_MS: u32 = 2000;
/// Gap between consecutive marker pops.
pub const MARKER_STAGGER_MS: u32 = 100;
/// Duration of a single marker pop.
pub const MARKER_POP_MS: u32 = 300;

/// Offset of the logo badge reveal. Must stay the largest offset in the
/// schedule so the badge always appears last.
pub const LOGO_DELAY_MS: u32 = 2800;
/// Duration of the logo scale-and-rotate reveal.
pub const LOGO_SPIN_MS: u32 = 600;

/// An optimized delivery route drawn across the map. `length` is the stroke
/// length of `d`, precomputed for the dashoffset draw-on transition.
#[derive(Clone, Copy, PartialEq)]
pub struct RouteLine {
    pub d: &'static str,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub length: f32,
}

/// A depot location on the map, tied to the route it terminates.
#[derive(Clone, Copy, PartialEq)]
pub struct MapMarker {
    pub x: f32,
    pub y: f32,
    /// Index into [`ROUTES`]; the marker never pops before this route starts
    /// drawing.
    pub route: usize,
}

/// Static background clutter: the "before Avara" tangle of routes.
pub const CHAOS_PATHS: [&str; 5] = [
    "M 50 100 L 150 80 L 200 150 L 300 120 L 350 200",
    "M 80 300 L 120 250 L 220 280 L 280 220 L 320 260",
    "M 100 50 L 180 90 L 250 60 L 320 100 L 380 150",
    "M 60 350 L 140 320 L 220 360 L 300 340 L 360 380",
    "M 20 200 L 100 180 L 180 220 L 260 200 L 340 240",
];

pub const ROUTES: [RouteLine; 3] = [
    RouteLine {
        d: "M 50 100 L 350 200",
        x1: 50.0,
        y1: 100.0,
        x2: 350.0,
        y2: 200.0,
        length: 316.23,
    },
    RouteLine {
        d: "M 80 300 L 320 260",
        x1: 80.0,
        y1: 300.0,
        x2: 320.0,
        y2: 260.0,
        length: 243.31,
    },
    RouteLine {
        d: "M 100 50 L 380 150",
        x1: 100.0,
        y1: 50.0,
        x2: 380.0,
        y2: 150.0,
        length: 297.32,
    },
];

/// Authored pop-in order; each marker sits on an endpoint of its route.
pub const MARKERS: [MapMarker; 6] = [
    MapMarker { x: 50.0, y: 100.0, route: 0 },
    MapMarker { x: 350.0, y: 200.0, route: 0 },
    MapMarker { x: 80.0, y: 300.0, route: 1 },
    MapMarker { x: 320.0, y: 260.0, route: 1 },
    MapMarker { x: 100.0, y: 50.0, route: 2 },
    MapMarker { x: 380.0, y: 150.0, route: 2 },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Target {
    Route(usize),
    Marker(usize),
    Logo,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TimelineEvent {
    pub target: Target,
    pub start_ms: u32,
    pub duration_ms: u32,
}

impl TimelineEvent {
    pub fn end_ms(&self) -> u32 {
        self.start_ms + self.duration_ms
    }
}

/// The full entrance schedule, in nondecreasing start order.
pub fn entrance_timeline() -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(ROUTES.len() + MARKERS.len() + 1);
    for index in 0..ROUTES.len() {
        events.push(TimelineEvent {
            target: Target::Route(index),
            start_ms: ROUTE_BASE_DELAY_MS + index as u32 * ROUTE_STAGGER_MS,
            duration_ms: ROUTE_DRAW_MS,
        });
    }
    for index in 0..MARKERS.len() {
        events.push(TimelineEvent {
            target: Target::Marker(index),
            start_ms: MARKER_BASE_DELAY_MS + index as u32 * MARKER_STAGGER_MS,
            duration_ms: MARKER_POP_MS,
        });
    }
    events.push(TimelineEvent {
        target: Target::Logo,
        start_ms: LOGO_DELAY_MS,
        duration_ms: LOGO_SPIN_MS,
    });
    events.sort_by_key(|event| event.start_ms);
    events
}

/// Which reveals have been triggered so far. Purely forward: applying an event
/// twice is a no-op and nothing ever un-reveals.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct TimelineState {
    pub routes: [bool; 3],
    pub markers: [bool; 6],
    pub logo: bool,
}

impl TimelineState {
    /// End state of the timeline, used when motion is skipped entirely.
    pub fn completed() -> Self {
        Self {
            routes: [true; 3],
            markers: [true; 6],
            logo: true,
        }
    }

    pub fn apply(&mut self, target: &Target) {
        match *target {
            Target::Route(index) => self.routes[index] = true,
            Target::Marker(index) => self.markers[index] = true,
            Target::Logo => self.logo = true,
        }
    }

    pub fn is_complete(&self) -> bool {
        *self == Self::completed()
    }
}

/// State after every event with `start_ms <= at_ms` has been triggered.
pub fn state_at(at_ms: u32) -> TimelineState {
    let mut state = TimelineState::default();
    for event in entrance_timeline() {
        if event.start_ms <= at_ms {
            state.apply(&event.target);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_for(target: Target) -> TimelineEvent {
        entrance_timeline()
            .into_iter()
            .find(|event| event.target == target)
            .expect("target missing from schedule")
    }

    #[test]
    fn schedule_has_one_event_per_element() {
        let events = entrance_timeline();
        assert_eq!(events.len(), 10);
        let routes = events
            .iter()
            .filter(|e| matches!(e.target, Target::Route(_)))
            .count();
        let markers = events
            .iter()
            .filter(|e| matches!(e.target, Target::Marker(_)))
            .count();
        assert_eq!(routes, 3);
        assert_eq!(markers, 6);
    }

    #[test]
    fn schedule_is_sorted_by_start() {
        let events = entrance_timeline();
        for pair in events.windows(2) {
            assert!(pair[0].start_ms <= pair[1].start_ms);
        }
    }

    #[test]
    fn markers_never_precede_their_route() {
        for (index, marker) in MARKERS.iter().enumerate() {
            let pop = event_for(Target::Marker(index));
            let draw = event_for(Target::Route(marker.route));
            assert!(
                pop.start_ms >= draw.start_ms,
                "marker {} pops at {}ms before route {} starts at {}ms",
                index,
                pop.start_ms,
                marker.route,
                draw.start_ms
            );
        }
    }

    #[test]
    fn markers_pop_in_authored_order() {
        let starts: Vec<u32> = (0..MARKERS.len())
            .map(|index| event_for(Target::Marker(index)).start_ms)
            .collect();
        for pair in starts.windows(2) {
            assert_eq!(pair[1] - pair[0], MARKER_STAGGER_MS);
        }
    }

    #[test]
    fn logo_starts_last() {
        let logo = event_for(Target::Logo);
        for event in entrance_timeline() {
            assert!(logo.start_ms >= event.start_ms);
        }
    }

    #[test]
    fn end_state_around_three_seconds() {
        // All markers have finished popping by 3.0s and every route has begun
        // drawing, but the logo reveal has not finished yet.
        let markers_done = MARKERS
            .iter()
            .enumerate()
            .all(|(index, _)| event_for(Target::Marker(index)).end_ms() <= 3000);
        assert!(markers_done);
        let routes_started = (0..ROUTES.len()).all(|i| event_for(Target::Route(i)).start_ms < 3000);
        assert!(routes_started);
        assert!(event_for(Target::Logo).end_ms() > 3000);
        // At 3.4s the logo reveal is over and no event starts afterwards.
        assert_eq!(event_for(Target::Logo).end_ms(), 3400);
        let last_start = entrance_timeline()
            .iter()
            .map(|e| e.start_ms)
            .max()
            .unwrap();
        assert!(last_start < 3400);
    }

    #[test]
    fn state_at_follows_the_schedule() {
        assert_eq!(state_at(0), TimelineState::default());
        let mid = state_at(1000);
        assert_eq!(mid.routes, [true, true, false]);
        assert_eq!(mid.markers, [false; 6]);
        assert!(!mid.logo);
        assert!(state_at(LOGO_DELAY_MS).is_complete());
        assert!(!state_at(LOGO_DELAY_MS - 1).is_complete());
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut state = TimelineState::default();
        state.apply(&Target::Marker(3));
        let once = state;
        state.apply(&Target::Marker(3));
        assert_eq!(state, once);
    }

    #[test]
    fn route_lengths_match_their_geometry() {
        for route in &ROUTES {
            let dx = route.x2 - route.x1;
            let dy = route.y2 - route.y1;
            let expected = (dx * dx + dy * dy).sqrt();
            assert!(
                (route.length - expected).abs() < 0.05,
                "stored length {} vs computed {}",
                route.length,
                expected
            );
        }
    }

    #[test]
    fn markers_sit_on_route_endpoints() {
        for marker in &MARKERS {
            let route = ROUTES[marker.route];
            let on_start = marker.x == route.x1 && marker.y == route.y1;
            let on_end = marker.x == route.x2 && marker.y == route.y2;
            assert!(on_start || on_end);
        }
    }
}
