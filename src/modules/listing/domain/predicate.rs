//! Predicate Builder
//!
//! Turns optional criteria into a single AND-composed test over a record.
//! Every clause is skipped when its criterion is unset, so an empty builder
//! matches everything. Missing record fields never match a set criterion.

use std::sync::Arc;

type Clause<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Boolean test over a single record
pub struct Predicate<R> {
    test: Arc<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> Clone for Predicate<R> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<R: 'static> Predicate<R> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Matches every record
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    pub fn and(self, other: Predicate<R>) -> Self {
        Self::new(move |record| self.matches(record) && other.matches(record))
    }
}

impl<R> Predicate<R> {
    pub fn matches(&self, record: &R) -> bool {
        (self.test)(record)
    }
}

/// Normalize a substring criterion: trimmed, lower-cased, `None` when blank
pub fn normalize_needle(needle: Option<&str>) -> Option<String> {
    needle
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase)
}

pub struct PredicateBuilder<R> {
    clauses: Vec<Clause<R>>,
}

impl<R: 'static> Default for PredicateBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> PredicateBuilder<R> {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Exact equality on a field
    pub fn exact<V, F>(mut self, expected: Option<V>, field: F) -> Self
    where
        V: PartialEq + Send + Sync + 'static,
        F: Fn(&R) -> Option<V> + Send + Sync + 'static,
    {
        if let Some(expected) = expected {
            self.clauses
                .push(Box::new(move |record: &R| field(record).as_ref() == Some(&expected)));
        }
        self
    }

    /// Case-insensitive "contains" on a text field
    pub fn contains<F>(mut self, needle: Option<&str>, field: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Option<&'a str> + Send + Sync + 'static,
    {
        if let Some(needle) = normalize_needle(needle) {
            self.clauses.push(Box::new(move |record: &R| {
                field(record)
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            }));
        }
        self
    }

    /// Inclusive numeric range; either bound may be unset
    pub fn range<N, F>(mut self, min: Option<N>, max: Option<N>, field: F) -> Self
    where
        N: PartialOrd + Copy + Send + Sync + 'static,
        F: Fn(&R) -> Option<N> + Send + Sync + 'static,
    {
        if min.is_none() && max.is_none() {
            return self;
        }
        self.clauses.push(Box::new(move |record: &R| match field(record) {
            Some(value) => {
                min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
            }
            None => false,
        }));
        self
    }

    /// When `enabled`, only records whose flag is true pass; `false` filters nothing
    pub fn gate<F>(mut self, enabled: bool, flag: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        if enabled {
            self.clauses.push(Box::new(flag));
        }
        self
    }

    /// Arbitrary clause, applied only when `active`
    pub fn custom<F>(mut self, active: bool, test: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        if active {
            self.clauses.push(Box::new(test));
        }
        self
    }

    pub fn build(self) -> Predicate<R> {
        if self.clauses.is_empty() {
            return Predicate::always();
        }
        let clauses = self.clauses;
        Predicate::new(move |record| clauses.iter().all(|clause| clause(record)))
    }
}
