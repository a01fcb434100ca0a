use crate::element::Element;
use std::fmt;
use std::sync::Arc;

type Step<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// A transform type that can be registered without a value
///
/// Implement this on a stateless (usually unit) struct to register it with
/// [`TriList::modify_only_default`](crate::TriList::modify_only_default);
/// the list builds it with `Default::default()`.
pub trait Modifier<T>: Default + Send + Sync + 'static {
    fn modify(&self, value: T) -> T;
}

/// The composed read-time transform for one payload type
///
/// A chain is an ordered list of transforms applied oldest first, so a value
/// read through a chain built from `f1` then `f2` comes out as `f2(f1(v))`.
/// An empty chain is the identity transform.
///
/// Cloning a chain shares the registered closures; it never clones a `T`.
pub struct Chain<T> {
    steps: Vec<Step<T>>,
}

impl<T> Chain<T> {
    /// Creates the identity chain
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a transform that runs after everything already registered
    pub fn push<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(f));
    }

    /// Collapses the chain back to identity
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Runs `value` through every registered transform in registration order
    pub fn apply(&self, value: T) -> T {
        self.steps.iter().fold(value, |acc, step| step(acc))
    }

    /// Number of registered transforms
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no transform is registered, i.e. the chain is the identity
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("steps", &self.steps.len()).finish()
    }
}

/// The transform registry of a `TriList`: one chain per payload type
pub struct Chains<A, B, C> {
    pub(crate) first: Chain<A>,
    pub(crate) second: Chain<B>,
    pub(crate) third: Chain<C>,
}

impl<A, B, C> Chains<A, B, C> {
    /// Creates a registry with all three chains at identity
    pub fn new() -> Self {
        Self {
            first: Chain::identity(),
            second: Chain::identity(),
            third: Chain::identity(),
        }
    }

    /// Transforms an element with the chain matching its tag
    pub fn apply(&self, element: Element<A, B, C>) -> Element<A, B, C> {
        let position = element.position();
        let transformed = match element {
            Element::First(value) => Element::First(self.first.apply(value)),
            Element::Second(value) => Element::Second(self.second.apply(value)),
            Element::Third(value) => Element::Third(self.third.apply(value)),
        };
        debug_assert_eq!(transformed.position(), position);
        transformed
    }

    /// Transforms a borrowed element, cloning its payload first
    pub fn apply_ref(&self, element: &Element<A, B, C>) -> Element<A, B, C>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        let transformed = match element {
            Element::First(value) => Element::First(self.first.apply(value.clone())),
            Element::Second(value) => Element::Second(self.second.apply(value.clone())),
            Element::Third(value) => Element::Third(self.third.apply(value.clone())),
        };
        debug_assert_eq!(transformed.position(), element.position());
        transformed
    }

    /// Collapses all three chains back to identity
    pub fn reset_all(&mut self) {
        self.first.clear();
        self.second.clear();
        self.third.clear();
    }
}

impl<A, B, C> Clone for Chains<A, B, C> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            third: self.third.clone(),
        }
    }
}

impl<A, B, C> Default for Chains<A, B, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, C> fmt::Debug for Chains<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chains")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("third", &self.third)
            .finish()
    }
}
