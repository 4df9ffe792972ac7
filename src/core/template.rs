//! Per-level line templates and the rendering rule
//!
//! A template is a plain string with one `%s` payload slot and the optional
//! literal tokens `{{prefix}}` and `{{suffix}}`, which splice in decorator
//! output at render time.

use super::level::Level;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Literal token replaced by the prefix decorator's output.
pub const PREFIX_TOKEN: &str = "{{prefix}}";

/// Literal token replaced by the suffix decorator's output.
pub const SUFFIX_TOKEN: &str = "{{suffix}}";

/// Marker emitted for `%s` slots beyond the first.
pub(crate) const MISSING_ARG: &str = "%!s(MISSING)";

/// A per-level table of line templates.
///
/// The table may be partial; levels without an entry fall back to their
/// built-in template at render time. Serializes transparently as a
/// level-to-string map so hosts can carry one in a config file.
///
/// # Example
///
/// ```
/// use templog::{Level, TemplateTable};
///
/// let table = TemplateTable::new().with(Level::Warn, "W: %s\n");
/// assert_eq!(table.resolve(Level::Warn), "W: %s\n");
/// assert_eq!(table.resolve(Level::Error), "[err] %s {{suffix}}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateTable {
    templates: HashMap<Level, String>,
}

impl TemplateTable {
    /// Create an empty table; every lookup falls through to the built-ins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-populated with the built-in template of every level.
    #[must_use]
    pub fn builtin() -> Self {
        let mut templates = HashMap::with_capacity(Level::ALL.len());
        for level in Level::ALL {
            templates.insert(level, level.default_template().to_string());
        }
        Self { templates }
    }

    /// Set the template for a level, builder-style.
    #[must_use]
    pub fn with(mut self, level: Level, template: impl Into<String>) -> Self {
        self.insert(level, template);
        self
    }

    /// Set the template for a level.
    pub fn insert(&mut self, level: Level, template: impl Into<String>) {
        self.templates.insert(level, template.into());
    }

    /// Remove the template for a level, returning it if present.
    pub fn remove(&mut self, level: Level) -> Option<String> {
        self.templates.remove(&level)
    }

    /// The template stored for a level, if any.
    pub fn get(&self, level: Level) -> Option<&str> {
        self.templates.get(&level).map(String::as_str)
    }

    /// The template used for a level: this table's entry, else the built-in.
    pub fn resolve(&self, level: Level) -> &str {
        self.get(level).unwrap_or_else(|| level.default_template())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl From<HashMap<Level, String>> for TemplateTable {
    fn from(templates: HashMap<Level, String>) -> Self {
        Self { templates }
    }
}

/// Render one line: interpolate the payload into the template's `%s` slot,
/// then splice decorator output into the `{{prefix}}`/`{{suffix}}` tokens.
///
/// Substitution is a single left-to-right pass over the interpolated line.
/// Each decorator runs at most once; its full result replaces every
/// occurrence of its token. Spliced output is never rescanned, so tokens
/// inside decorator output are not expanded.
pub(crate) fn render(
    template: &str,
    payload: &str,
    prefix: &dyn Fn() -> String,
    suffix: &dyn Fn() -> String,
) -> String {
    let line = interpolate(template, payload);
    substitute(&line, prefix, suffix)
}

/// Splice the payload into the first `%s` slot. Further `%s` slots receive
/// the missing-argument marker, `%%` is an escaped `%`, and any other
/// `%`-sequence is copied verbatim. A template with no slot drops the
/// payload.
fn interpolate(template: &str, payload: &str) -> String {
    let mut out = String::with_capacity(template.len() + payload.len());
    let mut rest = template;
    let mut consumed = false;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        match rest.as_bytes().get(pos + 1) {
            Some(b's') => {
                if consumed {
                    out.push_str(MISSING_ARG);
                } else {
                    out.push_str(payload);
                    consumed = true;
                }
                rest = &rest[pos + 2..];
            }
            Some(b'%') => {
                out.push('%');
                rest = &rest[pos + 2..];
            }
            _ => {
                out.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn substitute(line: &str, prefix: &dyn Fn() -> String, suffix: &dyn Fn() -> String) -> String {
    let mut out = String::with_capacity(line.len() + 16);
    let mut rest = line;
    let mut prefix_text: Option<String> = None;
    let mut suffix_text: Option<String> = None;
    loop {
        let (pos, token, is_prefix) = match (rest.find(PREFIX_TOKEN), rest.find(SUFFIX_TOKEN)) {
            (None, None) => break,
            (Some(p), None) => (p, PREFIX_TOKEN, true),
            (None, Some(s)) => (s, SUFFIX_TOKEN, false),
            (Some(p), Some(s)) if p < s => (p, PREFIX_TOKEN, true),
            (_, Some(s)) => (s, SUFFIX_TOKEN, false),
        };
        out.push_str(&rest[..pos]);
        let text = if is_prefix {
            prefix_text.get_or_insert_with(prefix)
        } else {
            suffix_text.get_or_insert_with(suffix)
        };
        out.push_str(text);
        rest = &rest[pos + token.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fixed(text: &'static str) -> impl Fn() -> String {
        move || text.to_string()
    }

    #[test]
    fn test_interpolate_single_slot() {
        assert_eq!(interpolate("[inf] %s \n", "hello"), "[inf] hello \n");
    }

    #[test]
    fn test_interpolate_no_slot_drops_payload() {
        assert_eq!(interpolate("static line\n", "ignored"), "static line\n");
    }

    #[test]
    fn test_interpolate_extra_slots_get_marker() {
        assert_eq!(interpolate("%s and %s", "x"), "x and %!s(MISSING)");
    }

    #[test]
    fn test_interpolate_percent_escape() {
        assert_eq!(interpolate("100%% %s", "done"), "100% done");
    }

    #[test]
    fn test_interpolate_unknown_directive_passes_through() {
        assert_eq!(interpolate("%d %s", "x"), "%d x");
        assert_eq!(interpolate("trailing %", "x"), "trailing %");
    }

    #[test]
    fn test_render_replaces_all_occurrences() {
        let line = render(
            "{{suffix}}%s{{suffix}}",
            "mid",
            &fixed(""),
            &fixed("S"),
        );
        assert_eq!(line, "SmidS");
    }

    #[test]
    fn test_render_prefix_and_suffix() {
        let line = render(
            "<<{{prefix}}|%s|{{suffix}}>>",
            "m",
            &fixed("P"),
            &fixed("S"),
        );
        assert_eq!(line, "<<P|m|S>>");
    }

    #[test]
    fn test_render_decorator_output_not_rescanned() {
        // A suffix that emits the prefix token must land verbatim.
        let line = render("%s {{suffix}}", "x", &fixed("P"), &fixed("{{prefix}}"));
        assert_eq!(line, "x {{prefix}}");
    }

    #[test]
    fn test_render_payload_tokens_are_substituted() {
        // Substitution runs over the interpolated line, payload included.
        let line = render("%s\n", "see {{suffix}}", &fixed(""), &fixed("S"));
        assert_eq!(line, "see S\n");
    }

    #[test]
    fn test_render_invokes_each_decorator_at_most_once() {
        let calls = Cell::new(0u32);
        let counting = || {
            calls.set(calls.get() + 1);
            "S".to_string()
        };
        let line = render("{{suffix}} %s {{suffix}}", "x", &fixed(""), &counting);
        assert_eq!(line, "S x S");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_render_skips_unused_decorators() {
        let calls = Cell::new(0u32);
        let counting = || {
            calls.set(calls.get() + 1);
            "P".to_string()
        };
        let line = render("[wrn] %s \n", "x", &counting, &fixed("S"));
        assert_eq!(line, "[wrn] x \n");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let table = TemplateTable::new().with(Level::Warn, "custom %s");
        assert_eq!(table.resolve(Level::Warn), "custom %s");
        assert_eq!(table.resolve(Level::Debug), "[dbg] %s \n");
    }

    #[test]
    fn test_builtin_covers_every_level() {
        let table = TemplateTable::builtin();
        assert_eq!(table.len(), 4);
        for level in Level::ALL {
            assert_eq!(table.get(level), Some(level.default_template()));
        }
    }

    #[test]
    fn test_remove_restores_fallback() {
        let mut table = TemplateTable::builtin();
        assert!(table.remove(Level::Info).is_some());
        assert_eq!(table.resolve(Level::Info), "[inf] %s {{suffix}}\n");
    }
}
