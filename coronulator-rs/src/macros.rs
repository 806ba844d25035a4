/// Implement per-dimension access for a record that stores one field per risk
/// dimension. Fields must be named after the dimension keys and listed in
/// dimension order.
macro_rules! per_dimension {
    ($ty:ident: $t:ty { $($field:ident),* $(,)? }) => {
        paste::paste! {
            impl $crate::prelude::ForDimension<$t> for $ty {
                fn for_dimension(&self, dim: $crate::catalog::Dimension) -> $t {
                    match dim {
                        $($crate::catalog::Dimension::[<$field:camel>] => self.$field,)*
                    }
                }
            }

            impl $ty {
                /// Set the entry of a single dimension.
                pub fn set(&mut self, dim: $crate::catalog::Dimension, value: $t) -> &mut Self {
                    match dim {
                        $($crate::catalog::Dimension::[<$field:camel>] => self.$field = value,)*
                    }
                    self
                }

                /// Build record calling f(dim) for each dimension, in order.
                pub fn from_fn(mut f: impl FnMut($crate::catalog::Dimension) -> $t) -> Self {
                    $ty {
                        $($field: f($crate::catalog::Dimension::[<$field:camel>]),)*
                    }
                }

                /// Like from_fn, but stops at the first error.
                pub fn try_from_fn<E>(
                    mut f: impl FnMut($crate::catalog::Dimension) -> Result<$t, E>,
                ) -> Result<Self, E> {
                    Ok($ty {
                        $($field: f($crate::catalog::Dimension::[<$field:camel>])?,)*
                    })
                }

                /// Entries as an array in dimension order.
                pub fn to_array(&self) -> [$t; $crate::prelude::NUM_DIMENSIONS] {
                    [$(self.$field),*]
                }
            }
        }
    };
}
