//! Tag-to-slot resolution.

/// Marker for tag types.
///
/// Tags are zero-sized nominal identities: two tags address the same slot
/// iff they are the same type. Declared with the `tags!` macro.
pub trait Tag {}

/// A tuple of tag types, one per slot of a record.
///
/// Implemented for tag tuples up to arity 12, matching the arities the
/// standard library covers for plain tuples.
pub trait TagList {
    /// Number of tags, which is also the record arity.
    const LEN: usize;
}

/// Resolves one tag to one slot of a record.
///
/// Implementations are generated by `tagged_tuple!`; `INDEX` is the
/// position of `T` in the record's declaration order, fixed when the record
/// type is defined. A record implements `Slot<T>` for exactly its own tags,
/// so an access through a foreign tag is rejected by the trait system, not
/// at run time.
pub trait Slot<T: Tag> {
    /// Declared value type of the slot.
    type Value;

    /// Declaration position of the slot.
    const INDEX: usize;

    fn slot(&self) -> &Self::Value;
    fn slot_mut(&mut self) -> &mut Self::Value;
    fn into_slot(self) -> Self::Value;
}

/// Shared-reference accessor: `get::<T, _>(&record)`.
pub fn get<T, R>(record: &R) -> &R::Value
where
    T: Tag,
    R: Slot<T>,
{
    record.slot()
}

/// Mutable-reference accessor: `get_mut::<T, _>(&mut record)`.
pub fn get_mut<T, R>(record: &mut R) -> &mut R::Value
where
    T: Tag,
    R: Slot<T>,
{
    record.slot_mut()
}

/// By-value accessor: consumes the record and moves one slot out of it.
pub fn take<T, R>(record: R) -> R::Value
where
    T: Tag,
    R: Slot<T>,
{
    record.into_slot()
}

macro_rules! tag_count {
    () => { 0 };
    ($head:ident $(, $tail:ident)*) => { 1 + tag_count!($($tail),*) };
}

macro_rules! tag_list {
    () => {
        impl TagList for () {
            const LEN: usize = 0;
        }
    };
    ($($t:ident),+) => {
        impl<$($t: Tag),+> TagList for ($($t,)+) {
            const LEN: usize = tag_count!($($t),+);
        }
    };
}

tag_list!();
tag_list!(T0);
tag_list!(T0, T1);
tag_list!(T0, T1, T2);
tag_list!(T0, T1, T2, T3);
tag_list!(T0, T1, T2, T3, T4);
tag_list!(T0, T1, T2, T3, T4, T5);
tag_list!(T0, T1, T2, T3, T4, T5, T6);
tag_list!(T0, T1, T2, T3, T4, T5, T6, T7);
tag_list!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
tag_list!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
tag_list!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
tag_list!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
