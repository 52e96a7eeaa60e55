//! Streaming extremum tracking.

/// Default comparator: `candidate` is more extreme when strictly greater.
#[inline]
pub fn greater_than<T: PartialOrd>(candidate: &T, current: &T) -> bool {
    candidate > current
}

/// Comparator for minimum tracking: `candidate` is more extreme when strictly less.
#[inline]
pub fn less_than<T: PartialOrd>(candidate: &T, current: &T) -> bool {
    candidate < current
}

/// Single-pass tracker of the most extreme value in a sequence and the
/// 0-based position at which it arrived.
///
/// The comparator `F(candidate, current)` decides whether a new value
/// replaces the running extremum. Because the default comparator is strict,
/// ties keep the first occurrence.
///
/// # Example
///
/// ```
/// use fit_core::analysis::ExtremumTracker;
///
/// let mut worst = ExtremumTracker::new();
/// for value in [3.0, 9.0, 1.0, 9.0, 2.0] {
///     worst.add(value);
/// }
/// assert_eq!(worst.get(), Some(9.0));
/// assert_eq!(worst.get_index(), Some(1));
/// ```
#[derive(Clone)]
pub struct ExtremumTracker<T, F = fn(&T, &T) -> bool> {
    current: Option<T>,
    index: usize,
    seen: usize,
    more_extreme: F,
}

impl<T: PartialOrd + Copy> ExtremumTracker<T> {
    /// Tracker of the maximum ("greater than" comparator).
    pub fn new() -> Self {
        Self::with_comparator(greater_than::<T>)
    }

    /// Tracker of the minimum ("less than" comparator).
    pub fn minimum() -> Self {
        Self::with_comparator(less_than::<T>)
    }
}

impl<T: PartialOrd + Copy> Default for ExtremumTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, F: Fn(&T, &T) -> bool> ExtremumTracker<T, F> {
    /// Tracker using a custom comparator `more_extreme(candidate, current)`.
    ///
    /// # Example
    ///
    /// ```
    /// use fit_core::analysis::ExtremumTracker;
    ///
    /// let mut furthest = ExtremumTracker::with_comparator(|a: &f64, b: &f64| a.abs() > b.abs());
    /// furthest.extend([1.0, -4.0, 3.0]);
    /// assert_eq!(furthest.get(), Some(-4.0));
    /// ```
    pub fn with_comparator(more_extreme: F) -> Self {
        Self {
            current: None,
            index: 0,
            seen: 0,
            more_extreme,
        }
    }

    /// Feed the next value of the sequence.
    ///
    /// The first value always becomes the extremum; later values replace it
    /// only when the comparator says they are more extreme. The arrival
    /// counter advances on every call.
    pub fn add(&mut self, value: T) {
        let replace = match &self.current {
            None => true,
            Some(current) => (self.more_extreme)(&value, current),
        };
        if replace {
            self.current = Some(value);
            self.index = self.seen;
        }
        self.seen += 1;
    }

    /// Current extremum, or `None` before the first [`add`](Self::add).
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.current
    }

    /// Position of the current extremum, or `None` before the first [`add`](Self::add).
    #[inline]
    pub fn get_index(&self) -> Option<usize> {
        self.current.as_ref().map(|_| self.index)
    }

    /// Number of values seen since creation or the last [`clear`](Self::clear).
    #[inline]
    pub fn count(&self) -> usize {
        self.seen
    }

    /// Returns true if no value has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }

    /// Reset value, index and counter to the initial state.
    pub fn clear(&mut self) {
        self.current = None;
        self.index = 0;
        self.seen = 0;
    }
}

impl<T: Copy, F: Fn(&T, &T) -> bool> Extend<T> for ExtremumTracker<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for ExtremumTracker<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtremumTracker")
            .field("current", &self.current)
            .field("index", &self.index)
            .field("seen", &self.seen)
            .finish()
    }
}
