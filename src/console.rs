use std::fmt::Display;
use std::io::Write;
use std::sync::{Arc, Mutex};

pub(crate) const RULE_WIDTH: usize = 50;
pub(crate) const BANNER_WIDTH: usize = 60;

/// Where status lines go: stdout for the binary, a shared buffer in tests.
#[derive(Debug, Clone, Default)]
pub struct Console {
    buffer: Option<Arc<Mutex<String>>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self { buffer: None }
    }

    pub fn buffered() -> Self {
        Self {
            buffer: Some(Arc::new(Mutex::new(String::new()))),
        }
    }

    pub fn line<T: Display>(&self, text: T) {
        match self.buffer.as_ref() {
            Some(buffer) => {
                let mut buffer = buffer.lock().unwrap_or_else(|e| e.into_inner());
                buffer.push_str(&text.to_string());
                buffer.push('\n');
            }
            None => {
                let mut out = std::io::stdout().lock();
                // stdout may already be closed by a pipe.
                let _ = writeln!(out, "{text}");
            }
        }
    }

    pub fn rule(&self, width: usize) {
        self.line("=".repeat(width));
    }

    /// Everything written so far. Always empty for the stdout console.
    pub fn contents(&self) -> String {
        self.buffer
            .as_ref()
            .map(|b| b.lock().unwrap_or_else(|e| e.into_inner()).clone())
            .unwrap_or_default()
    }
}
