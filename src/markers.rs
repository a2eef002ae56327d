//! Platform-only markers.
//!
//! Forge-only code is written in one of two shapes, and each direction
//! converts it into the other:
//!
//! - blocks wrapped in `/* Begin Forge only */ ... /* End Forge only */` are
//!   live on Forge; on Fabric the delimiters become `/* Begin Forge only ...
//!   End Forge only */`, turning the whole block into one comment;
//! - a single line ending in ` // Forge only` is live on Forge; on Fabric it
//!   becomes `// Forge only: <code>`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{rules::RewriteRule, types::Direction};

pub const BEGIN_FORGE_ONLY_LIVE: &str = "/* Begin Forge only */";
pub const BEGIN_FORGE_ONLY_DISABLED: &str = "/* Begin Forge only";
pub const END_FORGE_ONLY_LIVE: &str = "/* End Forge only */";
pub const END_FORGE_ONLY_DISABLED: &str = "End Forge only */";

lazy_static! {
    static ref TRAILING_FORGE_ONLY: Regex = Regex::new(r"^( *)(.*) // Forge only$").unwrap();
    static ref LEADING_FORGE_ONLY: Regex = Regex::new(r"^( *)// Forge only: (.*)$").unwrap();
}

/// The two delimiter rules for `direction`, begin marker first.
pub fn block_marker_rules(direction: Direction) -> [RewriteRule; 2] {
    let (begin_from, begin_to, end_from, end_to) = match direction {
        Direction::ToFabric => (
            BEGIN_FORGE_ONLY_LIVE,
            BEGIN_FORGE_ONLY_DISABLED,
            END_FORGE_ONLY_LIVE,
            END_FORGE_ONLY_DISABLED,
        ),
        Direction::ToForge => (
            BEGIN_FORGE_ONLY_DISABLED,
            BEGIN_FORGE_ONLY_LIVE,
            END_FORGE_ONLY_DISABLED,
            END_FORGE_ONLY_LIVE,
        ),
    };
    [
        RewriteRule::literal(begin_from, begin_to),
        RewriteRule::literal(end_from, end_to),
    ]
}

/// Moves the ` // Forge only` marker between the end of a line and a leading `// Forge only: ` prefix.
/// Indentation stays in front of the marker either way.
pub fn line_marker_rule(direction: Direction) -> RewriteRule {
    match direction {
        Direction::ToFabric => {
            RewriteRule::line_pattern(TRAILING_FORGE_ONLY.clone(), "${1}// Forge only: ${2}")
        }
        Direction::ToForge => {
            RewriteRule::line_pattern(LEADING_FORGE_ONLY.clone(), "${1}${2} // Forge only")
        }
    }
}
