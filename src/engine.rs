//! The stream engine: applies the compiled rules line by line and keeps
//! disabled imports grouped together.

use std::{
    borrow::Cow,
    collections::BTreeSet,
    io::{BufRead, Write},
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    rules::{RewriteRule, compile_rules, is_import_line},
    tables::SymbolTables,
    types::Direction,
};

/// Lines whose trimmed content ends with this are passed through untouched.
pub const NO_REWRITE_MARKER: &str = "[norewrite]";

lazy_static! {
    static ref IMPORT_BLOCK_LINE: Regex =
        Regex::new(r"^(import |// (Fabric|Forge) only: import )").unwrap();
    static ref PLATFORM_ONLY_IMPORT: Regex =
        Regex::new(r"^// (Fabric|Forge) only: import ").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Emit platform-only imports still pending when the input ends.
    ///
    /// When `false`, an import block that runs to the very end of the input
    /// loses its platform-only imports.
    pub flush_pending_at_eof: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        RewriteOptions {
            flush_pending_at_eof: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines_read: usize,
    pub lines_changed: usize,
    pub imports_consolidated: usize,
    pub imports_dropped: usize,
}

/// Tracks the current import block and the platform-only imports collected in it.
///
/// Platform-only imports are held back and released, sorted and deduplicated,
/// right before the first line that ends the block.
#[derive(Debug, Default)]
pub struct ImportConsolidation {
    in_import_block: bool,
    pending: BTreeSet<String>,
    released: usize,
}

impl ImportConsolidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_import_block(&self) -> bool {
        self.in_import_block
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of held-back lines released so far.
    pub fn released(&self) -> usize {
        self.released
    }

    /// Looks at a line as read, before any rule has run on it.
    pub fn observe_input(&mut self, line: &str) {
        if is_import_line(line) {
            self.in_import_block = true;
        }
    }

    /// Takes a rewritten line and returns the lines to emit now, in order.
    pub fn push(&mut self, line: String) -> Vec<String> {
        let mut emitted = Vec::new();
        if self.in_import_block && !IMPORT_BLOCK_LINE.is_match(&line) {
            self.in_import_block = false;
            emitted.extend(self.take_pending());
        }

        if PLATFORM_ONLY_IMPORT.is_match(&line) {
            self.pending.insert(line);
        } else {
            emitted.push(line);
        }
        emitted
    }

    /// Ends the input, returning whatever is still held back.
    pub fn finish(&mut self) -> Vec<String> {
        self.in_import_block = false;
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    fn take_pending(&mut self) -> Vec<String> {
        let lines: Vec<String> = std::mem::take(&mut self.pending).into_iter().collect();
        if !lines.is_empty() {
            log::debug!("releasing {} platform-only imports", lines.len());
        }
        self.released += lines.len();
        lines
    }
}

/// Rewrites source text for one direction.
#[derive(Debug, Clone)]
pub struct Rewriter {
    direction: Direction,
    rules: Vec<RewriteRule>,
    options: RewriteOptions,
}

impl Rewriter {
    pub fn new(
        direction: Direction,
        tables: &SymbolTables,
        options: RewriteOptions,
    ) -> Result<Self, Error> {
        Ok(Rewriter {
            direction,
            rules: compile_rules(direction, tables)?,
            options,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn options(&self) -> RewriteOptions {
        self.options
    }

    /// Runs every rule over one line. The line terminator, if any, is kept as is.
    pub fn rewrite_line(&self, line: &str) -> String {
        let (body, terminator) = split_terminator(line);
        if body.trim().ends_with(NO_REWRITE_MARKER) {
            return line.to_string();
        }

        let mut current = body.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            current = rewritten;
        }
        current.push_str(terminator);
        current
    }

    /// Rewrites `reader` into `writer` one line at a time.
    pub fn process<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<RewriteStats, Error> {
        let mut state = ImportConsolidation::new();
        let mut stats = RewriteStats::default();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            stats.lines_read += 1;
            state.observe_input(&line);

            let rewritten = self.rewrite_line(&line);
            if rewritten != line {
                stats.lines_changed += 1;
                log::trace!("{}: {:?} -> {:?}", stats.lines_read, line, rewritten);
            }
            for out in state.push(rewritten) {
                writer.write_all(out.as_bytes())?;
            }
        }

        let remaining = state.finish();
        if self.options.flush_pending_at_eof {
            stats.imports_consolidated = state.released() + remaining.len();
            for out in remaining {
                writer.write_all(out.as_bytes())?;
            }
        } else {
            stats.imports_consolidated = state.released();
            stats.imports_dropped = remaining.len();
            if !remaining.is_empty() {
                log::warn!(
                    "dropping {} platform-only imports pending at end of input",
                    remaining.len()
                );
            }
        }
        writer.flush()?;

        log::debug!(
            "{}: {} lines read, {} changed",
            self.direction,
            stats.lines_read,
            stats.lines_changed
        );
        Ok(stats)
    }

    /// Rewrites a whole string.
    pub fn rewrite_str(&self, input: &str) -> Result<String, Error> {
        let mut output = Vec::with_capacity(input.len());
        self.process(input.as_bytes(), &mut output)?;
        String::from_utf8(output)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

fn split_terminator(line: &str) -> (&str, &str) {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    line.split_at(body.len())
}
