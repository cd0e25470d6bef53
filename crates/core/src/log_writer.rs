//! Shared diagnostic sink handed to providers

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable handle over a `Write` sink
///
/// Clones share the same sink. Two handles are [`same_as`](LogWriter::same_as)
/// each other when they were cloned from one another.
#[derive(Clone)]
pub struct LogWriter {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl LogWriter {
    /// Wrap a sink
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    /// Write one line and flush
    pub fn println(&self, line: &str) -> io::Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()
    }

    /// Identity comparison
    pub fn same_as(&self, other: &LogWriter) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWriter")
            .field("sink", &Arc::as_ptr(&self.sink))
            .finish()
    }
}
