use super::MessageSink;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes one complete record and flushes the writer.
    ///
    /// The record is passed to [`Write::write_all`] as a single slice; the
    /// sink adds nothing of its own, so the caller supplies the line
    /// terminator.
    pub fn write_record(&mut self, record: &[u8]) -> io::Result<()> {
        self.writer.write_all(record)?;
        self.writer.flush()?;
        self.records += 1;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
