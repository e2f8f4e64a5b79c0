use std::collections::HashMap;

/// Allowed average cycle duration per route, keyed by raw route text.
///
/// Keys are matched exactly (after trimming the row's value); no route-key
/// normalization is applied here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleAverages {
    inner: HashMap<String, f64>,
}

impl CycleAverages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the average for a route. Returns the previous value.
    pub fn insert(&mut self, route: impl Into<String>, average: f64) -> Option<f64> {
        self.inner.insert(route.into(), average)
    }

    pub fn get(&self, route: &str) -> Option<f64> {
        self.inner.get(route).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.inner.iter().map(|(route, avg)| (route.as_str(), *avg))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CycleAverages {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut averages = CycleAverages::new();
        for (route, average) in iter {
            averages.insert(route, average);
        }
        averages
    }
}
