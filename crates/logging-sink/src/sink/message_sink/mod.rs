mod writing;

/// Writer wrapper that emits whole diagnostic records.
///
/// The sink is generic so tests can capture records in a [`Vec<u8>`] while
/// production code wraps the locked process stderr (see
/// [`emit_to_stderr`](crate::emit_to_stderr)).
#[derive(Clone, Debug, Default)]
pub struct MessageSink<W> {
    writer: W,
    records: u64,
}

impl<W> MessageSink<W> {
    /// Creates a sink that writes into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    /// Returns how many records were written successfully.
    #[must_use]
    pub const fn records_written(&self) -> u64 {
        self.records
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
