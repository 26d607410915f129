//! Domain value objects: ApiContext, ChannelCode, ProductCode, CatalogPromotionScope.
//!
//! Pure value types with equality-by-value and no identity. This file
//! defines the types, their string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ApiContext ───────────────────────────────────────────────────────────────

/// Which external API surface issued the current request.
///
/// Only shop-facing vs. everything else is distinguished by the scope
/// rules; `Other` covers requests resolved to neither API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiContext {
    #[serde(rename = "shop")]
    ShopFacing,
    #[serde(rename = "admin")]
    ManagementFacing,
    #[serde(rename = "other")]
    Other,
}

impl ApiContext {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShopFacing => "shop",
            Self::ManagementFacing => "admin",
            Self::Other => "other",
        }
    }

    pub const fn is_shop_facing(self) -> bool {
        matches!(self, Self::ShopFacing)
    }
}

impl fmt::Display for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiContext {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shop" | "shop-api" | "shop-facing" => Ok(Self::ShopFacing),
            "admin" | "admin-api" | "management" | "management-facing" => {
                Ok(Self::ManagementFacing)
            }
            "other" | "none" => Ok(Self::Other),
            other => Err(DomainError::UnknownSection(other.to_string())),
        }
    }
}

// ── Codes ─────────────────────────────────────────────────────────────────────

fn check_code(kind: &'static str, value: &str) -> Result<(), DomainError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidCode {
            kind,
            value: value.to_string(),
        })
    }
}

/// Code of a sales channel.
///
/// Statistics only hold the code; the channel entity itself is owned
/// elsewhere and looked up on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelCode(String);

impl ChannelCode {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        check_code("channel", &code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChannelCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ChannelCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChannelCode> for String {
    fn from(code: ChannelCode) -> Self {
        code.0
    }
}

/// Code of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        check_code("product", &code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.0
    }
}

// ── CatalogPromotionScope ─────────────────────────────────────────────────────

/// Constraint marker identifying the catalog promotion scope rule.
///
/// Carries no data; validators pass it through unchanged to whatever they
/// delegate to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CatalogPromotionScope;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_context_parses_aliases() {
        assert_eq!("shop".parse::<ApiContext>().unwrap(), ApiContext::ShopFacing);
        assert_eq!(
            "ADMIN".parse::<ApiContext>().unwrap(),
            ApiContext::ManagementFacing
        );
        assert_eq!(
            "management".parse::<ApiContext>().unwrap(),
            ApiContext::ManagementFacing
        );
        assert_eq!("none".parse::<ApiContext>().unwrap(), ApiContext::Other);
        assert!("storefront".parse::<ApiContext>().is_err());
    }

    #[test]
    fn api_context_display_round_trips_through_parse() {
        for ctx in [
            ApiContext::ShopFacing,
            ApiContext::ManagementFacing,
            ApiContext::Other,
        ] {
            assert_eq!(ctx.to_string().parse::<ApiContext>().unwrap(), ctx);
        }
    }

    #[test]
    fn api_context_serializes_like_display() {
        for ctx in [
            ApiContext::ShopFacing,
            ApiContext::ManagementFacing,
            ApiContext::Other,
        ] {
            assert_eq!(serde_json::to_value(ctx).unwrap(), ctx.as_str());
        }
        assert_eq!(
            serde_json::from_str::<ApiContext>("\"admin\"").unwrap(),
            ApiContext::ManagementFacing
        );
    }

    #[test]
    fn only_shop_is_shop_facing() {
        assert!(ApiContext::ShopFacing.is_shop_facing());
        assert!(!ApiContext::ManagementFacing.is_shop_facing());
        assert!(!ApiContext::Other.is_shop_facing());
    }

    #[test]
    fn channel_code_rejects_blank_and_spaces() {
        assert!(ChannelCode::new("WEB_US").is_ok());
        assert!(ChannelCode::new("").is_err());
        assert!(ChannelCode::new("web us").is_err());
    }

    #[test]
    fn product_code_deserializes_with_validation() {
        let code: ProductCode = serde_json::from_str("\"MUG-01\"").unwrap();
        assert_eq!(code.as_str(), "MUG-01");

        let bad: Result<ProductCode, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
