#![forbid(unsafe_code)]
//! Rewrites Minecraft mod sources between Forge and Fabric symbol mappings.
//!
//! Source text is filtered line by line through an ordered list of rewrite
//! rules compiled from two symbol tables, one for fully-qualified class names
//! and one for member names. Forge-only code markers are toggled between their
//! live and disabled forms, and imports disabled by the rewrite are grouped
//! and sorted at the end of their import block.
//!
//! Matching is purely textual. A name that happens to appear inside a string
//! literal or an unrelated comment is rewritten as well.
//!
//! # Quick Start
//!
//! ```rust
//! use mcrename::{Direction, RewriteOptions, Rewriter, SymbolTables};
//!
//! let rewriter = Rewriter::new(
//!     Direction::ToFabric,
//!     &SymbolTables::builtin(),
//!     RewriteOptions::default(),
//! )?;
//! let output = rewriter.rewrite_str("import net.minecraft.client.Minecraft;\n")?;
//! assert_eq!(output, "import net.minecraft.client.MinecraftClient;\n");
//! # Ok::<(), mcrename::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod formats;
pub mod markers;
pub mod rules;
pub mod tables;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    engine::{ImportConsolidation, NO_REWRITE_MARKER, RewriteOptions, RewriteStats, Rewriter},
    error::Error,
    formats::{TableFormat, read_table, write_table},
    rules::{RewriteRule, compile_rules},
    tables::{NameTable, SymbolTables},
    types::{Direction, NamePair, Platform},
};
