//! Built-in per-route cycle limits.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use tlog_normalize::normalize_route_key;

/// Maximum cycle duration allowed on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RouteLimit {
    pub hours: u32,
    pub minutes: u32,
}

impl RouteLimit {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn as_minutes(&self) -> f64 {
        f64::from(self.hours * 60 + self.minutes)
    }
}

impl fmt::Display for RouteLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// Routes as they are written on the dispatch sheets.
const ROUTE_LIMITS: &[(&str, RouteLimit)] = &[
    ("T1 - Playita", RouteLimit::new(0, 30)),
    ("T2 - Centro", RouteLimit::new(0, 45)),
    ("T3 - Aeropuerto", RouteLimit::new(1, 10)),
    ("T4 - Terminal Norte", RouteLimit::new(0, 55)),
    ("T5 - Universidad", RouteLimit::new(0, 50)),
    ("T6 - Hospital General", RouteLimit::new(0, 40)),
    ("T7 - Malecón", RouteLimit::new(0, 35)),
    ("A1 - Alimentador Sur", RouteLimit::new(0, 25)),
    ("A2 - Alimentador Oriente", RouteLimit::new(0, 25)),
    ("Expreso Centro", RouteLimit::new(0, 40)),
    ("Troncal Norte - Sur", RouteLimit::new(1, 30)),
];

static ROUTE_CYCLE_LIMITS: LazyLock<BTreeMap<String, RouteLimit>> = LazyLock::new(|| {
    ROUTE_LIMITS
        .iter()
        .map(|(route, limit)| (normalize_route_key(route), *limit))
        .collect()
});

/// The limit table keyed by normalized route key.
pub fn route_cycle_limits() -> &'static BTreeMap<String, RouteLimit> {
    &ROUTE_CYCLE_LIMITS
}

/// Look up the limit for an already-normalized route key.
///
/// An exact key wins. Otherwise the longest registered key contained in
/// `route_key` is used, so "t1-playita (ida)" still resolves to "t1-playita".
pub fn route_limit(route_key: &str) -> Option<RouteLimit> {
    if route_key.is_empty() {
        return None;
    }
    if let Some(limit) = ROUTE_CYCLE_LIMITS.get(route_key) {
        return Some(*limit);
    }
    let mut best: Option<(&str, RouteLimit)> = None;
    for (key, limit) in ROUTE_CYCLE_LIMITS.iter() {
        if key.is_empty() || !route_key.contains(key.as_str()) {
            continue;
        }
        if best.is_none_or(|(current, _)| key.len() > current.len()) {
            best = Some((key.as_str(), *limit));
        }
    }
    best.map(|(_, limit)| limit)
}
