//! Type-level membership: "`X` is one of the three payload types".
//!
//! Typed `TriList` operations carry the bounds
//! `Element<A, B, C>: OneOf<X, I>` and, where a transform is involved,
//! `Chains<A, B, C>: Select<X, I>`. The index marker `I` is inferred by the
//! compiler, so callers normally write `list.push_back(1u8)` or
//! `list.reset::<u8, _>()` and never name a marker. Asking for a type that
//! is not one of `A`, `B`, `C` fails to compile.
//!
//! If two payload types are the same type the marker cannot be inferred and
//! the caller has to spell it out, e.g. `list.push_back::<u8, Second>(1)`.

use crate::chain::{Chain, Chains};
use crate::element::Element;

/// Marker selecting the first payload type
#[derive(Debug, Clone, Copy)]
pub enum First {}

/// Marker selecting the second payload type
#[derive(Debug, Clone, Copy)]
pub enum Second {}

/// Marker selecting the third payload type
#[derive(Debug, Clone, Copy)]
pub enum Third {}

mod sealed {
    pub trait Sealed {}

    impl<A, B, C> Sealed for crate::element::Element<A, B, C> {}
    impl<A, B, C> Sealed for crate::chain::Chains<A, B, C> {}
}

/// Implemented for `Element<A, B, C>` once per payload type, at the index
/// `I` where that type sits.
pub trait OneOf<X, I>: sealed::Sealed + Sized {
    /// Wraps `value` in the variant at position `I`
    fn wrap(value: X) -> Self;

    /// Borrows the payload if the element is tagged `X`
    fn peek(&self) -> Option<&X>;

    /// Moves the payload out if the element is tagged `X`; returns the
    /// element unchanged otherwise
    fn take(self) -> Result<X, Self>;
}

/// Implemented for `Chains<A, B, C>` once per payload type; picks that
/// type's chain out of the registry.
pub trait Select<X, I>: sealed::Sealed {
    /// The transform chain for payload type `X`
    fn chain(&self) -> &Chain<X>;

    /// Mutable access to the transform chain for payload type `X`
    fn chain_mut(&mut self) -> &mut Chain<X>;
}

impl<A, B, C> OneOf<A, First> for Element<A, B, C> {
    fn wrap(value: A) -> Self {
        Element::First(value)
    }

    fn peek(&self) -> Option<&A> {
        match self {
            Element::First(value) => Some(value),
            _ => None,
        }
    }

    fn take(self) -> Result<A, Self> {
        match self {
            Element::First(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl<A, B, C> OneOf<B, Second> for Element<A, B, C> {
    fn wrap(value: B) -> Self {
        Element::Second(value)
    }

    fn peek(&self) -> Option<&B> {
        match self {
            Element::Second(value) => Some(value),
            _ => None,
        }
    }

    fn take(self) -> Result<B, Self> {
        match self {
            Element::Second(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl<A, B, C> OneOf<C, Third> for Element<A, B, C> {
    fn wrap(value: C) -> Self {
        Element::Third(value)
    }

    fn peek(&self) -> Option<&C> {
        match self {
            Element::Third(value) => Some(value),
            _ => None,
        }
    }

    fn take(self) -> Result<C, Self> {
        match self {
            Element::Third(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl<A, B, C> Select<A, First> for Chains<A, B, C> {
    fn chain(&self) -> &Chain<A> {
        &self.first
    }

    fn chain_mut(&mut self) -> &mut Chain<A> {
        &mut self.first
    }
}

impl<A, B, C> Select<B, Second> for Chains<A, B, C> {
    fn chain(&self) -> &Chain<B> {
        &self.second
    }

    fn chain_mut(&mut self) -> &mut Chain<B> {
        &mut self.second
    }
}

impl<A, B, C> Select<C, Third> for Chains<A, B, C> {
    fn chain(&self) -> &Chain<C> {
        &self.third
    }

    fn chain_mut(&mut self) -> &mut Chain<C> {
        &mut self.third
    }
}
