//! # tri-list
//!
//! An ordered, type-safe container over exactly three payload types.
//!
//! `tri-list` stores values of three distinct types in a single sequence,
//! keeps their insertion order, and lets you attach independent read-time
//! transforms to each payload type. Transforms never rewrite stored values;
//! they only change what is read.
//!
//! ## Key Features
//!
//! - **Compile-time membership**: pushing, transforming or viewing a type that
//!   is not one of the three payload types does not compile
//! - **Composable transforms**: transforms for a type accumulate and run in
//!   registration order, and can be reset to identity at any time
//! - **Two read surfaces**: a full ordered traversal and a filtered per-type view
//! - **Borrow-checked iteration**: read surfaces borrow the list, so it cannot be
//!   mutated while a traversal is in flight
//! - **Shareable**: `Send + Sync` whenever the payload types are
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use tri_list::{Element, TriList};
//!
//! // A stream of tokens classified as numbers, words or punctuation
//! let mut tokens = TriList::<i64, String, char>::new();
//!
//! tokens.push_back(12i64);
//! tokens.push_back("apples".to_string());
//! tokens.push_back(',');
//! tokens.push_back(3i64);
//! tokens.push_back("pears".to_string());
//!
//! // Only the numbers, in order
//! let numbers: Vec<i64> = tokens.range_over::<i64, _>().collect();
//! assert_eq!(numbers, vec![12, 3]);
//!
//! // Everything, in insertion order
//! for token in &tokens {
//!     match token {
//!         Element::First(n) => println!("number {}", n),
//!         Element::Second(w) => println!("word {}", w),
//!         Element::Third(p) => println!("punct {}", p),
//!     }
//! }
//! ```
//!
//! ### Composing Transforms
//!
//! ```rust
//! use tri_list::{Element, TriList};
//!
//! let mut list: TriList<i32, String, f64> = TriList::from([
//!     Element::First(1),
//!     Element::Second("a".to_string()),
//!     Element::Third(2.5),
//!     Element::First(2),
//! ]);
//!
//! // Registered transforms run oldest first: (x + 1) * 10
//! list.modify_only(|x: i32| x + 1);
//! list.modify_only(|x: i32| x * 10);
//!
//! let all: Vec<_> = list.iter().collect();
//! assert_eq!(
//!     all,
//!     vec![
//!         Element::First(20),
//!         Element::Second("a".to_string()),
//!         Element::Third(2.5),
//!         Element::First(30),
//!     ]
//! );
//!
//! // Back to the stored values
//! list.reset::<i32, _>();
//! assert_eq!(list.range_over::<i32, _>().collect::<Vec<_>>(), vec![1, 2]);
//! ```
//!
//! ### Positional Access and Errors
//!
//! ```rust
//! use tri_list::{TriList, TriListError};
//!
//! let list = TriList::<u8, &str, bool>::new().with(4u8).with("four");
//!
//! match list.get_as::<bool, _>(1) {
//!     Ok(flag) => println!("Flag: {}", flag),
//!     Err(TriListError::TypeMismatch { found, .. }) => println!("Index 1 holds a {}", found),
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! assert!(matches!(
//!     list.get_as::<u8, _>(9),
//!     Err(TriListError::IndexOutOfBounds { index: 9, len: 2 })
//! ));
//! ```
//!
//! ### Repeated Payload Types
//!
//! When two payload types are the same type, name the position marker:
//!
//! ```rust
//! use tri_list::{First, Second, TriList};
//!
//! let mut pair = TriList::<f32, f32, ()>::new();
//! pair.push_back::<f32, First>(1.0);
//! pair.push_back::<f32, Second>(2.0);
//! pair.modify_only::<f32, Second, _>(|y| -y);
//!
//! assert_eq!(pair.range_over::<f32, Second>().collect::<Vec<_>>(), vec![-2.0]);
//! ```
//!
//! ## Compile-Time Enforcement
//!
//! Pushing a type that is not one of the payload types fails to compile:
//! ```compile_fail
//! use tri_list::TriList;
//! TriList::<u8, String, bool>::new().push_back(1.5f64); // ERROR: f64 is not a payload type
//! ```
//!
//! So does viewing one:
//! ```compile_fail
//! use tri_list::TriList;
//! let list = TriList::<u8, String, bool>::new();
//! let _ = list.range_over::<char, _>(); // ERROR: char is not a payload type
//! ```
//!
//! Or transforming one:
//! ```compile_fail
//! use tri_list::TriList;
//! let mut list = TriList::<u8, String, bool>::new();
//! list.modify_only(|x: i64| x); // ERROR: i64 is not a payload type
//! ```
//!
//! Or resetting one:
//! ```compile_fail
//! use tri_list::TriList;
//! let mut list = TriList::<u8, String, bool>::new();
//! list.reset::<u16, _>(); // ERROR: u16 is not a payload type
//! ```
//!
//! A traversal handle cannot outlive a mutation of the list:
//! ```compile_fail
//! use tri_list::TriList;
//! let mut list = TriList::<u8, String, bool>::new().with(1u8);
//! let handle = list.iter();
//! list.push_back(2u8); // ERROR: list is borrowed by `handle`
//! let _ = handle.count();
//! ```
//!
//! Nor can a per-type view outlive a new transform:
//! ```compile_fail
//! use tri_list::TriList;
//! let mut list = TriList::<u8, String, bool>::new().with(1u8);
//! let view = list.range_over::<u8, _>();
//! list.modify_only(|x: u8| x + 1); // ERROR: list is borrowed by `view`
//! let _ = view.count();
//! ```
//!
//! Or a reset:
//! ```compile_fail
//! use tri_list::TriList;
//! let mut list = TriList::<u8, String, bool>::new().with(1u8);
//! let handle = list.iter();
//! list.reset::<u8, _>(); // ERROR: list is borrowed by `handle`
//! let _ = handle.count();
//! ```
//!
//! Repeated payload types need the position marker named:
//! ```compile_fail
//! use tri_list::TriList;
//! let mut pair = TriList::<f32, f32, ()>::new();
//! pair.push_back(1.0f32); // ERROR: ambiguous between First and Second
//! ```

mod chain;
mod element;
mod error;
mod iter;
mod list;
mod member;

pub use chain::{Chain, Chains, Modifier};
pub use element::Element;
pub use error::TriListError;
pub use iter::{IntoIter, Iter, RangeOver};
pub use list::TriList;
pub use member::{First, OneOf, Second, Select, Third};
