use crate::chain::{Chain, Chains};
use crate::element::Element;
use crate::member::{OneOf, Select};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::{slice, vec};

/// A lazy view over the elements of one payload type, transformed
///
/// Created by [`TriList::range_over`](crate::TriList::range_over). The view
/// borrows the list, so the chain it applies cannot change while it exists.
/// Cloning the view gives an independent cursor starting at the same point,
/// which is how a traversal is restarted without going back to the list.
pub struct RangeOver<'a, A, B, C, X, I> {
    elements: slice::Iter<'a, Element<A, B, C>>,
    chain: &'a Chain<X>,
    _marker: PhantomData<fn() -> I>,
}

impl<'a, A, B, C, X, I> RangeOver<'a, A, B, C, X, I>
where
    Chains<A, B, C>: Select<X, I>,
{
    pub(crate) fn new(elements: &'a [Element<A, B, C>], chains: &'a Chains<A, B, C>) -> Self {
        Self {
            elements: elements.iter(),
            chain: <Chains<A, B, C> as Select<X, I>>::chain(chains),
            _marker: PhantomData,
        }
    }
}

impl<'a, A, B, C, X, I> Iterator for RangeOver<'a, A, B, C, X, I>
where
    Element<A, B, C>: OneOf<X, I>,
    X: Clone + 'a,
{
    type Item = X;

    fn next(&mut self) -> Option<X> {
        let chain = self.chain;
        self.elements
            .by_ref()
            .find_map(|element| <Element<A, B, C> as OneOf<X, I>>::peek(element))
            .map(|value| chain.apply(value.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.elements.size_hint().1)
    }
}

impl<'a, A, B, C, X, I> DoubleEndedIterator for RangeOver<'a, A, B, C, X, I>
where
    Element<A, B, C>: OneOf<X, I>,
    X: Clone + 'a,
{
    fn next_back(&mut self) -> Option<X> {
        let chain = self.chain;
        self.elements
            .by_ref()
            .rev()
            .find_map(|element| <Element<A, B, C> as OneOf<X, I>>::peek(element))
            .map(|value| chain.apply(value.clone()))
    }
}

impl<'a, A, B, C, X, I> FusedIterator for RangeOver<'a, A, B, C, X, I>
where
    Element<A, B, C>: OneOf<X, I>,
    X: Clone + 'a,
{
}

impl<A, B, C, X, I> Clone for RangeOver<'_, A, B, C, X, I> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            chain: self.chain,
            _marker: PhantomData,
        }
    }
}

/// Borrowing traversal over every element, each transformed by its own chain
///
/// Created by [`TriList::iter`](crate::TriList::iter). The chains in effect
/// when the handle was created are the ones applied for its whole lifetime;
/// the list cannot be mutated until the handle is dropped.
pub struct Iter<'a, A, B, C> {
    elements: slice::Iter<'a, Element<A, B, C>>,
    chains: &'a Chains<A, B, C>,
}

impl<'a, A, B, C> Iter<'a, A, B, C> {
    pub(crate) fn new(elements: &'a [Element<A, B, C>], chains: &'a Chains<A, B, C>) -> Self {
        Self {
            elements: elements.iter(),
            chains,
        }
    }
}

impl<A, B, C> Iterator for Iter<'_, A, B, C>
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    type Item = Element<A, B, C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements
            .next()
            .map(|element| self.chains.apply_ref(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<A, B, C> DoubleEndedIterator for Iter<'_, A, B, C>
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements
            .next_back()
            .map(|element| self.chains.apply_ref(element))
    }
}

impl<A: Clone, B: Clone, C: Clone> ExactSizeIterator for Iter<'_, A, B, C> {}

impl<A: Clone, B: Clone, C: Clone> FusedIterator for Iter<'_, A, B, C> {}

impl<A, B, C> Clone for Iter<'_, A, B, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            chains: self.chains,
        }
    }
}

/// Consuming traversal; payloads move through their chains without cloning
pub struct IntoIter<A, B, C> {
    elements: vec::IntoIter<Element<A, B, C>>,
    chains: Chains<A, B, C>,
}

impl<A, B, C> IntoIter<A, B, C> {
    pub(crate) fn new(elements: Vec<Element<A, B, C>>, chains: Chains<A, B, C>) -> Self {
        Self {
            elements: elements.into_iter(),
            chains,
        }
    }
}

impl<A, B, C> Iterator for IntoIter<A, B, C> {
    type Item = Element<A, B, C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements
            .next()
            .map(|element| self.chains.apply(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<A, B, C> DoubleEndedIterator for IntoIter<A, B, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements
            .next_back()
            .map(|element| self.chains.apply(element))
    }
}

impl<A, B, C> ExactSizeIterator for IntoIter<A, B, C> {}

impl<A, B, C> FusedIterator for IntoIter<A, B, C> {}
