//! Tuples whose slots are addressed by tag types instead of positions.
//!
//! A tagged tuple is an ordinary flat tuple of values, relabelled with one
//! zero-sized tag type per slot. Every lookup is resolved by the type
//! system while the program compiles: a duplicated tag rejects the record
//! definition, a tag the record does not carry rejects the access, and a
//! successful access is a direct field reference on the underlying tuple.
//!
//! ```
//! use tagged_tuple::{tagged_tuple, tags};
//!
//! tags! {
//!     struct Width;
//!     struct Height;
//!     struct Label;
//! }
//!
//! tagged_tuple! {
//!     type Extent { Width => u32, Height => u32, Label => String }
//! }
//!
//! let mut e = Extent::new((640, 480, "page one".to_string()));
//! assert_eq!(*e.get::<Width>(), 640);
//! *e.get_mut::<Height>() += 20;
//! assert_eq!(e.into_values(), (640, 500, "page one".to_string()));
//! ```
//!
//! Duplicating a tag inside one record does not compile:
//!
//! ```compile_fail
//! use tagged_tuple::{tagged_tuple, tags};
//!
//! tags! {
//!     struct A;
//!     struct B;
//! }
//!
//! tagged_tuple! {
//!     type Broken { A => u32, B => u16, A => u64 }
//! }
//! ```
//!
//! Neither does accessing through a tag the record does not carry:
//!
//! ```compile_fail
//! use tagged_tuple::{tagged_tuple, tags};
//!
//! tags! {
//!     struct A;
//!     struct B;
//!     struct D;
//! }
//!
//! tagged_tuple! {
//!     type Point { A => i32, B => i32 }
//! }
//!
//! let p = Point::new((1, 2));
//! let _ = p.get::<D>();
//! ```

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod slot;

pub use slot::*;
pub use tag_macros::tagged_tuple;

use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A fixed-arity tuple of `Values`, relabelled with one tag type per slot.
///
/// `Tags` and `Values` are tuples of the same arity: slot `i` holds a value
/// of the i-th type in `Values` and is addressed by the i-th type in
/// `Tags`. Slot order is declaration order for the life of the type. The
/// tags contribute no storage; a `TaggedTuple` is layout-identical to its
/// `Values` tuple and inherits its whole-value behavior (clone, copy,
/// compare, hash, default) from it.
///
/// Concrete records are declared through the `tagged_tuple!` macro, which
/// rejects duplicated tags and wires each tag to its slot.
#[repr(transparent)]
pub struct TaggedTuple<Tags, Values> {
    values: Values,
    tags: PhantomData<Tags>,
}

impl<Tags: TagList, Values> TaggedTuple<Tags, Values> {
    /// Number of slots.
    pub const ARITY: usize = Tags::LEN;

    /// Wraps an untagged tuple of the slot values, in declaration order.
    pub fn new(values: Values) -> Self {
        TaggedTuple {
            values,
            tags: PhantomData,
        }
    }

    pub fn arity(&self) -> usize {
        Self::ARITY
    }

    /// The untagged view of the record.
    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Values {
        &mut self.values
    }

    /// Unwraps the record into its untagged tuple.
    pub fn into_values(self) -> Values {
        self.values
    }

    /// Swaps the whole contents of two records.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.values, &mut other.values);
    }

    /// Shared reference to the slot addressed by `T`.
    ///
    /// Does not compile when `T` is not one of the record's tags.
    pub fn get<T>(&self) -> &<Self as Slot<T>>::Value
    where
        T: Tag,
        Self: Slot<T>,
    {
        Slot::<T>::slot(self)
    }

    /// Mutable reference to the slot addressed by `T`.
    pub fn get_mut<T>(&mut self) -> &mut <Self as Slot<T>>::Value
    where
        T: Tag,
        Self: Slot<T>,
    {
        Slot::<T>::slot_mut(self)
    }

    /// Consumes the record and moves the slot addressed by `T` out of it.
    pub fn into_value<T>(self) -> <Self as Slot<T>>::Value
    where
        T: Tag,
        Self: Slot<T>,
    {
        Slot::<T>::into_slot(self)
    }
}

impl<Tags: TagList, Values> From<Values> for TaggedTuple<Tags, Values> {
    fn from(values: Values) -> Self {
        TaggedTuple::new(values)
    }
}

impl<Tags, Values: Clone> Clone for TaggedTuple<Tags, Values> {
    fn clone(&self) -> Self {
        TaggedTuple {
            values: self.values.clone(),
            tags: PhantomData,
        }
    }
}

impl<Tags, Values: Copy> Copy for TaggedTuple<Tags, Values> {}

impl<Tags, Values: Default> Default for TaggedTuple<Tags, Values> {
    fn default() -> Self {
        TaggedTuple {
            values: Values::default(),
            tags: PhantomData,
        }
    }
}

impl<Tags, Values: Debug> Debug for TaggedTuple<Tags, Values> {
    fn fmt(&self, fmt: &mut Formatter) -> core::fmt::Result {
        self.values.fmt(fmt)
    }
}

impl<Tags, Values: PartialEq> PartialEq for TaggedTuple<Tags, Values> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<Tags, Values: Eq> Eq for TaggedTuple<Tags, Values> {}

/// Records compare equal to the untagged tuple they relabel.
impl<Tags, Values: PartialEq> PartialEq<Values> for TaggedTuple<Tags, Values> {
    fn eq(&self, other: &Values) -> bool {
        self.values == *other
    }
}

impl<Tags, Values: PartialOrd> PartialOrd for TaggedTuple<Tags, Values> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values.partial_cmp(&other.values)
    }
}

impl<Tags, Values: Ord> Ord for TaggedTuple<Tags, Values> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

impl<Tags, Values: Hash> Hash for TaggedTuple<Tags, Values> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}
