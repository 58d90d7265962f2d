//! Macros for declaring state identifiers.

/// Declare a fieldless enum of states and implement [`State`] and `Display`
/// for it.
///
/// Variants listed under `terminal:` report `is_final() == true`, variants
/// listed under `error:` report `is_error() == true`. Both lists are
/// optional. The generated type also gets an associated `VARIANTS` slice in
/// declaration order.
///
/// [`State`]: crate::core::State
///
/// # Example
///
/// ```
/// use stagehand::core::State;
/// use stagehand::define_states;
///
/// define_states! {
///     pub enum Order {
///         Cart,
///         Paid,
///         Shipped,
///         Refunded,
///     }
///     terminal: [Shipped, Refunded]
///     error: [Refunded]
/// }
///
/// assert_eq!(Order::Paid.name(), "Paid");
/// assert_eq!(Order::Shipped.to_string(), "Shipped");
/// assert!(Order::Refunded.is_error());
/// assert_eq!(Order::VARIANTS.len(), 4);
/// ```
#[macro_export]
macro_rules! define_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(terminal: [$($terminal:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const VARIANTS: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$terminal => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
