//! Macro for implementing Display and FromStr for label enums
//!
//! Range modes, date components and failure kinds all render to a fixed
//! human-readable label that also appears inside failure messages. This macro
//! keeps both directions of that mapping in one place.
//!
//! # Example
//!
//! ```rust
//! use chronassert_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Before,
//!     After,
//! }
//!
//! impl_label_conversions!(Direction {
//!     Before => "before",
//!     After => "after",
//! });
//!
//! assert_eq!(Direction::Before.to_string(), "before");
//! assert_eq!("AFTER".parse::<Direction>().unwrap(), Direction::After);
//! ```

/// Implements Display and FromStr traits for label enums
///
/// This macro generates:
/// - Display trait: writes the label of the variant
/// - FromStr trait: parses a trimmed, case-insensitive label back into the
///   variant, failing with [`DomainError::InvalidInput`]
///
/// [`DomainError::InvalidInput`]: crate::errors::DomainError::InvalidInput
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::DomainError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
