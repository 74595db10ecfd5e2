/// Declares tag marker types.
///
/// Each declaration expands to a zero-sized unit struct implementing
/// [`Tag`](crate::Tag). Tags carry no state; they exist only to address
/// record slots by type identity.
///
/// ```
/// use tagged_tuple::tags;
///
/// tags! {
///     /// Horizontal position.
///     pub struct X;
///     pub struct Y;
/// }
/// ```
#[macro_export]
macro_rules! tags {
    ($( $(#[$meta:meta])* $vis:vis struct $name:ident; )*) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::Tag for $name {}
        )*
    };
}
