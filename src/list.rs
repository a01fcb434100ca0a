use crate::chain::{Chains, Modifier};
use crate::element::Element;
use crate::error::TriListError;
use crate::iter::{IntoIter, Iter, RangeOver};
use crate::member::{OneOf, Select};
use std::any::type_name;
use std::fmt;
use tracing::trace;

/// An ordered list over exactly three payload types with per-type read transforms
///
/// `TriList` keeps values of types `A`, `B` and `C` in insertion order. Each
/// payload type has its own transform chain which is applied when values are
/// read; stored values are never rewritten.
///
/// # Examples
///
/// ```
/// use tri_list::{Element, TriList};
///
/// let mut list: TriList<i32, String, f64> = TriList::from([
///     Element::First(1),
///     Element::Second("a".to_string()),
///     Element::Third(2.5),
///     Element::First(2),
/// ]);
///
/// list.modify_only(|x: i32| x + 1);
/// list.modify_only(|x: i32| x * 10);
/// assert_eq!(list.range_over::<i32, _>().collect::<Vec<_>>(), vec![20, 30]);
///
/// list.reset::<i32, _>();
/// assert_eq!(list.range_over::<i32, _>().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub struct TriList<A, B, C> {
    items: Vec<Element<A, B, C>>,
    chains: Chains<A, B, C>,
}

impl<A, B, C> TriList<A, B, C> {
    /// Creates a new, empty TriList with identity transforms
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            chains: Chains::new(),
        }
    }

    /// Creates an empty TriList with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            chains: Chains::new(),
        }
    }

    /// Appends a value at the end of the list
    ///
    /// The value's type selects the variant it is stored under. Transform
    /// chains are untouched.
    ///
    /// ```
    /// use tri_list::TriList;
    ///
    /// let mut list = TriList::<u32, &str, bool>::new();
    /// list.push_back(7u32);
    /// list.push_back("seven");
    /// list.push_back(true);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push_back<X, I>(&mut self, value: X)
    where
        Element<A, B, C>: OneOf<X, I>,
    {
        let element = <Element<A, B, C> as OneOf<X, I>>::wrap(value);
        debug_assert!(
            <Element<A, B, C> as OneOf<X, I>>::peek(&element).is_some(),
            "wrapped {} is not readable back as {}",
            element.type_name(),
            type_name::<X>()
        );
        self.items.push(element);
    }

    /// Builder form of [`push_back`](Self::push_back)
    ///
    /// ```
    /// use tri_list::TriList;
    ///
    /// let list = TriList::<u32, &str, bool>::new().with(1u32).with("a").with(false);
    /// assert_eq!(list.count::<u32, _>(), 1);
    /// ```
    pub fn with<X, I>(mut self, value: X) -> Self
    where
        Element<A, B, C>: OneOf<X, I>,
    {
        self.push_back(value);
        self
    }

    /// Registers a transform for payload type `X`
    ///
    /// The new transform runs after every transform already registered for
    /// `X`: after `modify_only(f1)` and `modify_only(f2)`, an `X` stored as
    /// `v` reads as `f2(f1(v))`. The other two chains and the stored values
    /// are not affected.
    pub fn modify_only<X, I, F>(&mut self, f: F)
    where
        Chains<A, B, C>: Select<X, I>,
        F: Fn(X) -> X + Send + Sync + 'static,
    {
        let chain = <Chains<A, B, C> as Select<X, I>>::chain_mut(&mut self.chains);
        chain.push(f);
        let payload = type_name::<X>();
        trace!(payload, steps = chain.len(), "transform registered");
    }

    /// Registers a default-constructed [`Modifier`] for payload type `X`
    ///
    /// ```
    /// use tri_list::{Modifier, TriList};
    ///
    /// #[derive(Default)]
    /// struct Negate;
    ///
    /// impl Modifier<i32> for Negate {
    ///     fn modify(&self, value: i32) -> i32 {
    ///         -value
    ///     }
    /// }
    ///
    /// let mut list = TriList::<i32, char, bool>::new().with(3i32);
    /// list.modify_only_default::<i32, _, Negate>();
    /// assert_eq!(list.range_over::<i32, _>().next(), Some(-3));
    /// ```
    pub fn modify_only_default<X, I, M>(&mut self)
    where
        Chains<A, B, C>: Select<X, I>,
        M: Modifier<X>,
    {
        let modifier = M::default();
        self.modify_only::<X, I, _>(move |value: X| modifier.modify(value));
    }

    /// Sets the chain for payload type `X` back to identity
    ///
    /// Idempotent. The other two chains and the stored values are not affected.
    pub fn reset<X, I>(&mut self)
    where
        Chains<A, B, C>: Select<X, I>,
    {
        let chain = <Chains<A, B, C> as Select<X, I>>::chain_mut(&mut self.chains);
        let discarded = chain.len();
        chain.clear();
        let payload = type_name::<X>();
        trace!(payload, discarded, "transform chain reset");
    }

    /// Sets all three chains back to identity
    pub fn reset_all(&mut self) {
        self.chains.reset_all();
        trace!("all transform chains reset");
    }

    /// Number of transforms currently registered for payload type `X`
    pub fn transform_count<X, I>(&self) -> usize
    where
        Chains<A, B, C>: Select<X, I>,
    {
        <Chains<A, B, C> as Select<X, I>>::chain(&self.chains).len()
    }

    /// Returns a lazy view of the `X` elements, in order, transformed
    ///
    /// Elements of the other two types are skipped. Calling this again after
    /// further `modify_only` or `reset` calls starts a fresh view that uses
    /// the current chain.
    ///
    /// ```
    /// use tri_list::TriList;
    ///
    /// let mut list = TriList::<i32, char, bool>::new().with(1i32).with('x').with(2i32);
    /// list.modify_only(|c: char| c.to_ascii_uppercase());
    ///
    /// let ints: Vec<i32> = list.range_over::<i32, _>().collect();
    /// let chars: Vec<char> = list.range_over::<char, _>().collect();
    /// assert_eq!(ints, vec![1, 2]);
    /// assert_eq!(chars, vec!['X']);
    /// ```
    pub fn range_over<X, I>(&self) -> RangeOver<'_, A, B, C, X, I>
    where
        Element<A, B, C>: OneOf<X, I>,
        Chains<A, B, C>: Select<X, I>,
    {
        RangeOver::new(&self.items, &self.chains)
    }

    /// Returns a traversal over every element, each transformed by its own chain
    pub fn iter(&self) -> Iter<'_, A, B, C> {
        Iter::new(&self.items, &self.chains)
    }

    /// Number of `X` elements in the list
    pub fn count<X, I>(&self) -> usize
    where
        Element<A, B, C>: OneOf<X, I>,
    {
        self.items
            .iter()
            .filter(|element| <Element<A, B, C> as OneOf<X, I>>::peek(*element).is_some())
            .count()
    }

    /// Returns the transformed element at `index`, if any
    pub fn get(&self, index: usize) -> Option<Element<A, B, C>>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        self.items
            .get(index)
            .map(|element| self.chains.apply_ref(element))
    }

    /// Returns the transformed `X` at `index`
    ///
    /// # Errors
    ///
    /// - Returns `TriListError::IndexOutOfBounds` if `index >= len()`
    /// - Returns `TriListError::TypeMismatch` if the element there is not an `X`
    pub fn get_as<X, I>(&self, index: usize) -> Result<X, TriListError>
    where
        Element<A, B, C>: OneOf<X, I>,
        Chains<A, B, C>: Select<X, I>,
        X: Clone,
    {
        let element = self
            .items
            .get(index)
            .ok_or(TriListError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })?;
        let value = <Element<A, B, C> as OneOf<X, I>>::peek(element).ok_or_else(|| {
            TriListError::TypeMismatch {
                index,
                expected: type_name::<X>(),
                found: element.type_name(),
            }
        })?;
        Ok(<Chains<A, B, C> as Select<X, I>>::chain(&self.chains).apply(value.clone()))
    }

    /// The stored elements, without any transform applied
    pub fn raw(&self) -> &[Element<A, B, C>] {
        &self.items
    }

    /// Returns the number of elements in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list contains no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<A, B, C> Default for TriList<A, B, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone, B: Clone, C: Clone> Clone for TriList<A, B, C> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            chains: self.chains.clone(),
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug, C: fmt::Debug> fmt::Debug for TriList<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriList")
            .field("items", &self.items)
            .field("chains", &self.chains)
            .finish()
    }
}

impl<A, B, C> From<Vec<Element<A, B, C>>> for TriList<A, B, C> {
    fn from(items: Vec<Element<A, B, C>>) -> Self {
        Self {
            items,
            chains: Chains::new(),
        }
    }
}

impl<A, B, C, const N: usize> From<[Element<A, B, C>; N]> for TriList<A, B, C> {
    fn from(items: [Element<A, B, C>; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<A, B, C> FromIterator<Element<A, B, C>> for TriList<A, B, C> {
    fn from_iter<T: IntoIterator<Item = Element<A, B, C>>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<A, B, C> Extend<Element<A, B, C>> for TriList<A, B, C> {
    fn extend<T: IntoIterator<Item = Element<A, B, C>>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl<'a, A: Clone, B: Clone, C: Clone> IntoIterator for &'a TriList<A, B, C> {
    type Item = Element<A, B, C>;
    type IntoIter = Iter<'a, A, B, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, B, C> IntoIterator for TriList<A, B, C> {
    type Item = Element<A, B, C>;
    type IntoIter = IntoIter<A, B, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items, self.chains)
    }
}
