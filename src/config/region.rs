//! Marketplace regions and their service hosts.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A marketplace served by the Product Advertising API.
///
/// Each region maps to exactly one host. The mapping is fixed at compile
/// time and never changes at runtime.
///
/// # Example
///
/// ```rust
/// use amazon_product_api::Region;
///
/// let region: Region = "uk".parse().unwrap();
/// assert_eq!(region, Region::Uk);
/// assert_eq!(region.host(), "ecs.amazonaws.co.uk");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Canada.
    Ca,
    /// China.
    Cn,
    /// Germany.
    De,
    /// Spain.
    Es,
    /// France.
    Fr,
    /// Italy.
    It,
    /// Japan.
    Jp,
    /// United Kingdom.
    Uk,
    /// United States.
    Us,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Self; 9] = [
        Self::Ca,
        Self::Cn,
        Self::De,
        Self::Es,
        Self::Fr,
        Self::It,
        Self::Jp,
        Self::Uk,
        Self::Us,
    ];

    /// Returns the service host for this region.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::Ca => "ecs.amazonaws.ca",
            Self::Cn => "webservices.amazon.cn",
            Self::De => "ecs.amazonaws.de",
            Self::Es => "webservices.amazon.es",
            Self::Fr => "ecs.amazonaws.fr",
            Self::It => "webservices.amazon.it",
            Self::Jp => "ecs.amazonaws.jp",
            Self::Uk => "ecs.amazonaws.co.uk",
            Self::Us => "ecs.amazonaws.com",
        }
    }

    /// Returns the two-letter region code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ca => "CA",
            Self::Cn => "CN",
            Self::De => "DE",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Jp => "JP",
            Self::Uk => "UK",
            Self::Us => "US",
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ConfigError::UnknownRegion {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
