use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn buffer() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Activate buffering. While active, log lines are stored
/// instead of printed to stderr.
pub fn activate() {
    *buffer() = Some(Vec::new());
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    buffer().take().unwrap_or_default()
}

/// Write a message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    let mut guard = buffer();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// `io::Write` sink for the tracing subscriber. Collects one formatted
/// event and hands it to `warn` when dropped.
#[derive(Default)]
pub struct BufferedStderr {
    pending: Vec<u8>,
}

impl Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferedStderr {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending);
        warn(text.trim_end_matches('\n').to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the buffer is process-global
    #[test]
    fn test_buffering_lifecycle() {
        activate();
        warn("first".to_string());
        {
            let mut writer = BufferedStderr::default();
            writer.write_all(b"second line\n").unwrap();
        }
        warn(format!("third {}", 3));

        let drained = drain();
        assert_eq!(drained, vec!["first", "second line", "third 3"]);
        assert!(drain().is_empty());
    }
}
