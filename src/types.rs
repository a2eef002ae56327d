//! Core types shared by the tables, rule compiler and stream engine.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the two modding toolchains whose mappings we translate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Forge,
    Fabric,
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Forge => write!(f, "Forge"),
            Platform::Fabric => write!(f, "Fabric"),
        }
    }
}

/// Which way a source file is being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forge names in, Fabric names out.
    ToFabric,
    /// Fabric names in, Forge names out.
    ToForge,
}

impl Direction {
    /// The platform whose names the output uses.
    pub fn target(self) -> Platform {
        match self {
            Direction::ToFabric => Platform::Fabric,
            Direction::ToForge => Platform::Forge,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::ToFabric => Direction::ToForge,
            Direction::ToForge => Direction::ToFabric,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('-') {
            "to_fabric" => Ok(Direction::ToFabric),
            "to_forge" => Ok(Direction::ToForge),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::ToFabric => write!(f, "to_fabric"),
            Direction::ToForge => write!(f, "to_forge"),
        }
    }
}

/// A symbol's name under Forge mappings and its counterpart under Fabric mappings.
///
/// Class pairs hold fully-qualified dotted names. Member pairs hold bare
/// identifiers, `receiver.method` chains, or quoted field ids such as `"f_95573_"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NamePair {
    pub forge: String,
    pub fabric: String,
}

impl NamePair {
    pub fn new(forge: impl Into<String>, fabric: impl Into<String>) -> Self {
        NamePair {
            forge: forge.into(),
            fabric: fabric.into(),
        }
    }

    /// The name as it appears in the input for `direction`.
    pub fn before(&self, direction: Direction) -> &str {
        match direction {
            Direction::ToFabric => &self.forge,
            Direction::ToForge => &self.fabric,
        }
    }

    /// The name the input is rewritten to for `direction`.
    pub fn after(&self, direction: Direction) -> &str {
        match direction {
            Direction::ToFabric => &self.fabric,
            Direction::ToForge => &self.forge,
        }
    }

    /// Trailing segments of both qualified names, e.g. `Minecraft` and `MinecraftClient`.
    pub fn simple_names(&self) -> NamePair {
        NamePair::new(simple_name(&self.forge), simple_name(&self.fabric))
    }

    /// Whether the name is a quoted string literal rather than an identifier.
    pub fn is_quoted(name: &str) -> bool {
        name.starts_with('"')
    }
}

impl Display for NamePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.forge, self.fabric)
    }
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("--to_fabric".parse::<Direction>().unwrap(), Direction::ToFabric);
        assert_eq!("to_forge".parse::<Direction>().unwrap(), Direction::ToForge);
        assert!(matches!(
            "--to_quilt".parse::<Direction>(),
            Err(Error::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_direction_reverse_and_target() {
        assert_eq!(Direction::ToFabric.reverse(), Direction::ToForge);
        assert_eq!(Direction::ToForge.target(), Platform::Forge);
        assert_eq!(Direction::ToFabric.to_string(), "to_fabric");
    }

    #[test]
    fn test_before_after() {
        let pair = NamePair::new("entity.getXRot", "entity.getPitch");
        assert_eq!(pair.before(Direction::ToFabric), "entity.getXRot");
        assert_eq!(pair.after(Direction::ToFabric), "entity.getPitch");
        assert_eq!(pair.before(Direction::ToForge), "entity.getPitch");
        assert_eq!(pair.after(Direction::ToForge), "entity.getXRot");
    }

    #[test]
    fn test_simple_names() {
        let pair = NamePair::new(
            "net.minecraft.client.Minecraft",
            "net.minecraft.client.MinecraftClient",
        );
        assert_eq!(
            pair.simple_names(),
            NamePair::new("Minecraft", "MinecraftClient")
        );
        assert_eq!(NamePair::new("Foo", "Bar").simple_names().forge, "Foo");
    }

    #[test]
    fn test_is_quoted() {
        assert!(NamePair::is_quoted("\"input\""));
        assert!(!NamePair::is_quoted("input"));
    }
}
