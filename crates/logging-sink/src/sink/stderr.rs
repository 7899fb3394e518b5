use super::MessageSink;
use std::io;

/// Writes `record` to the process's standard error stream and flushes it.
///
/// The stderr lock is held across the write and the flush, so a record
/// emitted here is never interleaved with output from another thread of
/// this process.
pub fn emit_to_stderr(record: &[u8]) -> io::Result<()> {
    let stderr = io::stderr();
    let mut sink = MessageSink::new(stderr.lock());
    sink.write_record(record)
}
