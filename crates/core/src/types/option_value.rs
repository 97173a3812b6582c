//! Product option values (size and color).

use core::fmt;

/// Errors that can occur when parsing a [`Size`] or [`Color`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The input is empty or only whitespace.
    #[error("option value cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("option value must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Maximum length of an option value, in characters.
pub const MAX_OPTION_LENGTH: usize = 32;

fn validate(s: &str) -> Result<String, ValueError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty);
    }
    if trimmed.chars().count() > MAX_OPTION_LENGTH {
        return Err(ValueError::TooLong {
            max: MAX_OPTION_LENGTH,
        });
    }
    Ok(trimmed.to_owned())
}

macro_rules! define_option_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse a value, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the trimmed input is empty or longer than
            /// [`MAX_OPTION_LENGTH`] characters.
            pub fn parse(s: &str) -> Result<Self, ValueError> {
                validate(s).map(Self)
            }

            /// Returns the value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValueError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_option_value!(
    /// A garment size as listed on the product (e.g. `"M"`, `"XXL"`).
    Size
);

define_option_value!(
    /// A color name as listed on the product (e.g. `"Черный"`).
    Color
);
