// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Declaration macro for configuration shapes.
//!
//! ```rust,ignore
//! // A record whose listed fields may lead to counted lists.
//! counted_schema!(ForwardedValues { cookies, headers, query_string_cache_keys });
//!
//! // A record that is itself counted (`quantity` + `items`) and has further
//! // counted children.
//! counted_schema!(counted AllowedMethods { cached_methods });
//!
//! // Element types that never contain counted lists.
//! counted_schema!(leaf String, i32);
//! ```
//!
//! Every listed field must be an `Option<_>` of a type implementing
//! `CountedTree`. The declared field names are exposed as `COUNTED_FIELDS`.

macro_rules! counted_schema {
    (leaf $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::quantities::CountedTree for $ty {
                fn for_each_counted(
                    &mut self,
                    _visit: &mut dyn FnMut(&mut dyn $crate::quantities::Quantified),
                ) {
                }

                fn inspect_counted(
                    &self,
                    _visit: &mut dyn FnMut(&dyn $crate::quantities::Quantified),
                ) {
                }
            }
        )+
    };

    (counted $ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::quantities::Quantified for $ty {
            fn quantity(&self) -> Option<i32> {
                self.quantity
            }

            fn set_quantity(&mut self, quantity: i32) {
                self.quantity = Some(quantity);
            }

            fn item_count(&self) -> Option<usize> {
                self.items.as_ref().map(Vec::len)
            }
        }

        impl $ty {
            /// Child fields that may lead to counted lists.
            pub const COUNTED_FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];
        }

        impl $crate::quantities::CountedTree for $ty {
            fn for_each_counted(
                &mut self,
                visit: &mut dyn FnMut(&mut dyn $crate::quantities::Quantified),
            ) {
                visit(self);
                $(
                    if let Some(child) = self.$field.as_mut() {
                        $crate::quantities::CountedTree::for_each_counted(child, visit);
                    }
                )*
            }

            fn inspect_counted(
                &self,
                visit: &mut dyn FnMut(&dyn $crate::quantities::Quantified),
            ) {
                visit(self);
                $(
                    if let Some(child) = self.$field.as_ref() {
                        $crate::quantities::CountedTree::inspect_counted(child, visit);
                    }
                )*
            }
        }
    };

    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $ty {
            /// Child fields that may lead to counted lists.
            pub const COUNTED_FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];
        }

        impl $crate::quantities::CountedTree for $ty {
            fn for_each_counted(
                &mut self,
                visit: &mut dyn FnMut(&mut dyn $crate::quantities::Quantified),
            ) {
                $(
                    if let Some(child) = self.$field.as_mut() {
                        $crate::quantities::CountedTree::for_each_counted(child, visit);
                    }
                )*
            }

            fn inspect_counted(
                &self,
                visit: &mut dyn FnMut(&dyn $crate::quantities::Quantified),
            ) {
                $(
                    if let Some(child) = self.$field.as_ref() {
                        $crate::quantities::CountedTree::inspect_counted(child, visit);
                    }
                )*
            }
        }
    };
}
