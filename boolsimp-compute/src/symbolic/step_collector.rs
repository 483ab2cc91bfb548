/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is useful when you only want the final result of a simplification.
///
/// [`Option<S>`] keeps only the most recent step, which is all that is needed to label a single
/// rewrite.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Option<S> {
    #[inline]
    fn push(&mut self, step: S) {
        *self = Some(step);
    }
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
