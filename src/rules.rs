//! The rule compiler.
//!
//! A direction and a pair of symbol tables compile into an ordered list of
//! [`RewriteRule`]s. Each rule is a total function from a line to a line;
//! the stream engine folds the whole list over every line, in order.
//!
//! Order, for one direction:
//!
//! 1. one simple-name rule per member pair;
//! 2. per class pair, the qualified import rule, followed by a simple-name
//!    rule for the trailing segments when they differ;
//! 3. the two block-marker rules;
//! 4. the line-marker rule.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::{
    error::Error,
    markers,
    tables::SymbolTables,
    types::{Direction, NamePair},
};

const IMPORT_KEYWORD: &str = "import ";

/// Lines starting with the import keyword are only touched by qualified import rules.
pub fn is_import_line(line: &str) -> bool {
    line.starts_with(IMPORT_KEYWORD)
}

#[derive(Debug, Clone)]
pub enum RewriteRule {
    /// Replace every occurrence of a literal string.
    Literal {
        from: String,
        to: String,
        skip_imports: bool,
    },
    /// Replace every whole-identifier occurrence of a name. Never fires on import lines.
    Identifier { pattern: Regex, to: String },
    /// Rewrite `import <before>;` at the start of a line to `import <after>;`.
    QualifiedImport { pattern: Regex, to: String },
    /// Rewrite a line matching an anchored pattern, expanding capture groups in `template`.
    LinePattern { pattern: Regex, template: String },
}

impl RewriteRule {
    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        RewriteRule::Literal {
            from: from.into(),
            to: to.into(),
            skip_imports: false,
        }
    }

    /// Rule for an unqualified name: quoted field ids are replaced as plain
    /// substrings, anything else only as a complete identifier.
    pub fn simple_name(before: &str, after: &str) -> Result<Self, Error> {
        if NamePair::is_quoted(before) {
            return Ok(RewriteRule::Literal {
                from: before.to_string(),
                to: after.to_string(),
                skip_imports: true,
            });
        }
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(before)))?;
        Ok(RewriteRule::Identifier {
            pattern,
            to: after.to_string(),
        })
    }

    pub fn qualified_import(before: &str, after: &str) -> Result<Self, Error> {
        let pattern = Regex::new(&format!(
            r"^{}{};",
            IMPORT_KEYWORD,
            regex::escape(before)
        ))?;
        Ok(RewriteRule::QualifiedImport {
            pattern,
            to: format!("{}{};", IMPORT_KEYWORD, after),
        })
    }

    pub fn line_pattern(pattern: Regex, template: impl Into<String>) -> Self {
        RewriteRule::LinePattern {
            pattern,
            template: template.into(),
        }
    }

    /// Applies the rule to one line, without its terminator.
    /// Returns the input borrowed when nothing changed.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            RewriteRule::Literal {
                from,
                to,
                skip_imports,
            } => {
                if (*skip_imports && is_import_line(line)) || !line.contains(from.as_str()) {
                    Cow::Borrowed(line)
                } else {
                    Cow::Owned(line.replace(from.as_str(), to))
                }
            }
            RewriteRule::Identifier { pattern, to } => {
                if is_import_line(line) {
                    Cow::Borrowed(line)
                } else {
                    pattern.replace_all(line, NoExpand(to))
                }
            }
            RewriteRule::QualifiedImport { pattern, to } => pattern.replace(line, NoExpand(to)),
            RewriteRule::LinePattern { pattern, template } => {
                pattern.replace(line, template.as_str())
            }
        }
    }
}

/// Builds the ordered rule list for `direction`.
pub fn compile_rules(
    direction: Direction,
    tables: &SymbolTables,
) -> Result<Vec<RewriteRule>, Error> {
    let mut rules = Vec::with_capacity(tables.members.len() + 2 * tables.classes.len() + 3);

    for pair in &tables.members {
        rules.push(RewriteRule::simple_name(
            pair.before(direction),
            pair.after(direction),
        )?);
    }

    for pair in &tables.classes {
        rules.push(RewriteRule::qualified_import(
            pair.before(direction),
            pair.after(direction),
        )?);

        let simple = pair.simple_names();
        if simple.forge != simple.fabric {
            rules.push(RewriteRule::simple_name(
                simple.before(direction),
                simple.after(direction),
            )?);
        }
    }

    rules.extend(markers::block_marker_rules(direction));
    rules.push(markers::line_marker_rule(direction));

    log::debug!(
        "compiled {} rewrite rules for {} ({} classes, {} members)",
        rules.len(),
        direction,
        tables.classes.len(),
        tables.members.len()
    );
    Ok(rules)
}
