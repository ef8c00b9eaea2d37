//! Diagnostic sink for non-fatal resolution warnings.
//!
//! Resolvers never fail on unknown names; they report through a sink and
//! carry on. Injecting the sink keeps the resolvers pure and lets tests
//! capture what was reported instead of scraping log output.

use std::sync::{Arc, Mutex};

pub trait Diagnostics: Send + Sync {
    fn warning(&self, message: &str);

    fn debug(&self, _message: &str) {}
}

/// Default sink: forwards to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Sink that records warnings in memory.
#[derive(Default, Clone)]
pub struct CollectingDiagnostics {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.warnings.lock().unwrap())
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_records_in_order() {
        let sink = CollectingDiagnostics::new();
        sink.warning("first");
        sink.warning("second");
        assert_eq!(sink.warnings(), vec!["first", "second"]);
    }

    #[test]
    fn drain_empties_the_sink() {
        let sink = CollectingDiagnostics::new();
        sink.warning("only");
        assert_eq!(sink.drain(), vec!["only"]);
        assert!(sink.warnings().is_empty());
    }
}
