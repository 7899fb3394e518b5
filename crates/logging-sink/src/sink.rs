mod message_sink;
mod stderr;

pub use message_sink::MessageSink;
pub use stderr::emit_to_stderr;
