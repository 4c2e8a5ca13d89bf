//! The status log aggregator.

use crate::{StatusLogConfig, StatusSource};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Aggregates the status lines of registered sources into one line.
///
/// Registration and rendering may happen concurrently from different threads.
pub struct StatusLog {
    config: StatusLogConfig,
    sources: RwLock<Vec<Arc<dyn StatusSource>>>,
}

impl StatusLog {
    pub fn new(config: StatusLogConfig) -> Self {
        Self {
            config,
            sources: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &StatusLogConfig {
        &self.config
    }

    /// Registers a source. Sources that are disabled at registration time,
    /// or that share this log's id, are ignored and `false` is returned.
    pub fn register(&self, source: Arc<dyn StatusSource>) -> bool {
        if !source.is_enabled() || source.id() == self.config.id {
            debug!(source = %source.id(), "Status source not registered");
            return false;
        }
        let mut sources = self.sources.write().unwrap_or_else(PoisonError::into_inner);
        debug!(source = %source.id(), "Status source registered");
        sources.push(source);
        true
    }

    /// Removes every source with the given id. Returns whether any was removed.
    pub fn unregister(&self, id: &str) -> bool {
        let mut sources = self.sources.write().unwrap_or_else(PoisonError::into_inner);
        let before = sources.len();
        sources.retain(|source| source.id() != id);
        before != sources.len()
    }

    pub fn len(&self) -> usize {
        self.sources.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders `id[status] ` for every enabled source with a status line,
    /// ordered by id.
    pub fn render(&self) -> String {
        let mut sources: Vec<Arc<dyn StatusSource>> = self
            .sources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        sources.retain(|source| source.is_enabled());
        sources.sort_by(|a, b| a.id().cmp(b.id()));

        let mut line = String::new();
        for source in sources {
            if let Some(status) = source.status_line() {
                line.push_str(source.id());
                line.push('[');
                line.push_str(&status);
                line.push_str("] ");
            }
        }
        line
    }

    /// Renders the line and logs it. Returns `None` without rendering when
    /// this log is disabled.
    pub fn run(&self) -> Option<String> {
        if !self.config.enabled {
            return None;
        }
        let line = self.render();
        info!(id = %self.config.id, "{}", line);
        Some(line)
    }
}
