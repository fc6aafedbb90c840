/// Invoke a macro once for the given identifier list and once for each of its suffixes.
#[doc(hidden)]
#[macro_export]
macro_rules! for_every_tuple {
    ($m:ident !! $head_ty:ident) => {
        $m!($head_ty);
    };
    ($m:ident !! $head_ty:ident, $($tail_ty:ident),*) => (
        $m!($head_ty, $( $tail_ty ),*);
        $crate::for_every_tuple!($m !! $( $tail_ty ),*);
    );
}

/// Apply a macro to every tuple arity from 1 to 26, using the type names `A` to `Z`.
#[doc(hidden)]
#[macro_export]
macro_rules! all_tuples {
    ($m:ident) => {
        $crate::for_every_tuple!($m !! A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z);
    };
}

/// Count a list of identifiers as a `usize` constant expression.
#[doc(hidden)]
#[macro_export]
macro_rules! count_idents {
    () => { 0usize };
    ($head:ident $(, $tail:ident)*) => { 1usize + $crate::count_idents!($($tail),*) };
}

#[cfg(test)]
mod tests {
    use std::marker::PhantomData;

    struct Arity<Params>(PhantomData<Params>);

    macro_rules! arity_of {
        ($($name: ident),*) => {
            impl<$($name),*> Arity<($($name,)*)> {
                const LEN: usize = $crate::count_idents!($($name),*);
            }
        }
    }

    all_tuples!(arity_of);

    #[test]
    fn every_arity_is_generated() {
        // Then
        assert_eq!(Arity::<(u8,)>::LEN, 1);
        assert_eq!(Arity::<(u8, u16, u32)>::LEN, 3);
        assert_eq!(
            Arity::<(
                u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
                u8, u8, u8, u8, u8, u8,
            )>::LEN,
            26
        );
    }

    #[test]
    fn count_empty_list() {
        assert_eq!(count_idents!(), 0);
    }
}
