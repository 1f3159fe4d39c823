//! Macro for implementing Display and FromStr for lowercase domain enums
//!
//! Keeps the wire spelling of small enums such as weekdays in one place and
//! gives case-insensitive parsing for free.
//!
//! # Example
//!
//! ```rust
//! use linkup_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Looking,
//!     Hidden,
//! }
//!
//! impl_domain_enum_conversions!(Visibility {
//!     Looking => "looking",
//!     Hidden => "hidden",
//! });
//!
//! assert_eq!(Visibility::Looking.to_string(), "looking");
//! assert_eq!("HIDDEN".parse::<Visibility>().unwrap(), Visibility::Hidden);
//! ```

/// Implements Display and FromStr traits for lowercase domain enums
///
/// This macro generates:
/// - Display trait: writes the mapped lowercase string
/// - FromStr trait: trims and parses case-insensitive strings to variants
///
/// The mapped strings must already be lowercase.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
