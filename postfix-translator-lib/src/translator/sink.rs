use anyhow::{Context, Result};
use string_builder::Builder;

/// A write-only stream of characters.
///
/// The translator emits letters and operators through this interface in
/// postfix order, then terminates the line when translation completes.
/// Writes are infallible; flushing is the caller's responsibility.
pub trait Sink {
    fn write_char(&mut self, character: char);
    fn write_line(&mut self);
}

/// A sink that accumulates the emitted characters in memory.
pub struct StringSink {
    builder: Builder,
}

impl StringSink {
    pub fn new() -> Self {
        Self {
            builder: Builder::new(16),
        }
    }

    /// Finalizes the sink into everything written to it, in call order.
    pub fn into_string(self) -> Result<String> {
        self.builder
            .string()
            .context("Failed to build the emitted output")
    }
}

impl Default for StringSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StringSink {
    fn write_char(&mut self, character: char) {
        self.builder.append(character.to_string());
    }

    fn write_line(&mut self) {
        self.builder.append("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn characters_arrive_in_call_order() {
        let mut sink = StringSink::new();
        sink.write_char('a');
        sink.write_char('b');
        sink.write_char('+');
        sink.write_line();

        assert_eq!(sink.into_string().unwrap(), "ab+\n");
    }

    #[test]
    fn empty_sink_finalizes_to_an_empty_string() {
        let sink = StringSink::new();
        assert_eq!(sink.into_string().unwrap(), "");
    }
}
