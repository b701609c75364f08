// Imports
use std::io::Write;

/// A context shapes are drawn onto.
///
/// Drawing is line based: every visual effect of a shape or a decorator is one line of text.
pub trait DrawContext {
    /// Emit a single line describing a visual effect.
    fn draw_line(&mut self, line: &str);
}

/// Draws onto the standard output.
///
/// Drawing can't fail, so write errors are logged and the line is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutContext;

impl DrawContext for StdoutContext {
    fn draw_line(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::error!("Writing line to stdout failed, Err: {e:?}");
        }
    }
}

/// Records all drawn lines in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingContext {
    lines: Vec<String>,
}

impl DrawContext for RecordingContext {
    fn draw_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

impl RecordingContext {
    /// A new, empty recording context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded lines, in drawing order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the context, returning the recorded lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order() {
        let mut cx = RecordingContext::new();
        cx.draw_line("first");
        cx.draw_line("second");

        assert_eq!(cx.lines(), ["first", "second"]);
    }
}
