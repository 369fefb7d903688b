//! Builder that composes snippets and field tables into one script

use super::{FieldTable, GenerationContext};

/// Accumulates generated text against a [`GenerationContext`]
///
/// Snippets that are absent or empty are skipped; every emitted snippet is
/// followed by the configured line break.
#[derive(Debug, Clone)]
pub struct ScriptWriter<'a> {
    ctx: GenerationContext<'a>,
    out: String,
}

impl<'a> ScriptWriter<'a> {
    pub fn new(ctx: GenerationContext<'a>) -> Self {
        Self {
            ctx,
            out: String::new(),
        }
    }

    /// Append snippets in the given order
    pub fn snippets(self, keys: &[&str]) -> Self {
        self.indented_snippets(0, keys)
    }

    /// Append snippets, each prefixed with `depth` indentation units
    pub fn indented_snippets(mut self, depth: usize, keys: &[&str]) -> Self {
        let prefix = self.ctx.indent_by(depth);
        for key in keys {
            let snippet = self.ctx.snippet_or_empty(key);
            if snippet.is_empty() {
                continue;
            }
            self.out.push_str(&prefix);
            self.out.push_str(snippet);
            self.out.push_str(self.ctx.line_break());
        }
        self
    }

    /// Append a field table, each line indented `depth` units
    pub fn fields(mut self, depth: usize, table: &FieldTable) -> Self {
        let prefix = self.ctx.indent_by(depth);
        self.out.push_str(&table.render(&prefix, self.ctx.line_break()));
        self
    }

    /// Append text verbatim
    pub fn text(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
