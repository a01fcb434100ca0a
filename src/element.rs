use crate::member::OneOf;
use std::any::type_name;

/// A stored value tagged with which of the three payload types it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

impl<A, B, C> Element<A, B, C> {
    /// Wraps a value in the variant matching its type
    ///
    /// ```
    /// use tri_list::Element;
    ///
    /// let e: Element<u8, String, f32> = Element::new("hi".to_string());
    /// assert_eq!(e, Element::Second("hi".to_string()));
    /// ```
    pub fn new<X, I>(value: X) -> Self
    where
        Self: OneOf<X, I>,
    {
        <Self as OneOf<X, I>>::wrap(value)
    }

    /// Check if the element holds an `X`
    pub fn is<X, I>(&self) -> bool
    where
        Self: OneOf<X, I>,
    {
        <Self as OneOf<X, I>>::peek(self).is_some()
    }

    /// Get a reference to the payload if it is an `X`
    pub fn get<X, I>(&self) -> Option<&X>
    where
        Self: OneOf<X, I>,
    {
        <Self as OneOf<X, I>>::peek(self)
    }

    /// Take the payload out if it is an `X`, handing the element back otherwise
    pub fn into_inner<X, I>(self) -> Result<X, Self>
    where
        Self: OneOf<X, I>,
    {
        <Self as OneOf<X, I>>::take(self)
    }

    /// Zero-based index of the active variant
    pub fn position(&self) -> usize {
        match self {
            Element::First(_) => 0,
            Element::Second(_) => 1,
            Element::Third(_) => 2,
        }
    }

    /// Name of the payload type held by this element
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::First(_) => type_name::<A>(),
            Element::Second(_) => type_name::<B>(),
            Element::Third(_) => type_name::<C>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::{First, Third};

    type Token = Element<i64, String, char>;

    #[test]
    fn test_new_picks_variant_by_type() {
        assert_eq!(Token::new(5i64), Element::First(5));
        assert_eq!(Token::new("x".to_string()), Element::Second("x".to_string()));
        assert_eq!(Token::new(';'), Element::Third(';'));
    }

    #[test]
    fn test_is_and_get() {
        let token = Token::new(42i64);

        assert!(token.is::<i64, _>());
        assert!(!token.is::<String, _>());
        assert!(!token.is::<char, _>());
        assert_eq!(token.get::<i64, _>(), Some(&42));
        assert_eq!(token.get::<char, _>(), None);
    }

    #[test]
    fn test_into_inner_returns_element_on_mismatch() {
        let token = Token::new('+');

        let token = match token.into_inner::<String, _>() {
            Ok(_) => panic!("Should not extract a String from a char element"),
            Err(original) => original,
        };
        assert_eq!(token.into_inner::<char, _>(), Ok('+'));
    }

    #[test]
    fn test_position_and_type_name() {
        let token = Token::new("word".to_string());
        assert_eq!(token.position(), 1);
        assert_eq!(token.type_name(), type_name::<String>());
        assert_eq!(Token::new(1i64).position(), 0);
        assert_eq!(Token::new('!').type_name(), "char");
    }

    #[test]
    fn test_explicit_marker_for_repeated_types() {
        // Both payloads are u8, so the marker must be named
        let first: Element<u8, u8, bool> = Element::new::<u8, First>(1);
        let flag: Element<u8, u8, bool> = Element::new::<bool, Third>(true);

        assert_eq!(first, Element::First(1));
        assert_eq!(flag.position(), 2);
    }
}
