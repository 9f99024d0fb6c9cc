// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Small declarative macros for reducing boilerplate across the sweep crates.
//!
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals.

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// ```ignore
/// sweep_core::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}
