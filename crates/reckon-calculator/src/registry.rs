//! Fixed mapping from calculation kind to handler.

use std::collections::HashMap;

use crate::handler::ToolHandler;
use crate::ops::arithmetic::ArithmeticHandler;
use crate::ops::growth::{MomHandler, YoyHandler};
use crate::ops::percentage::PercentageHandler;
use crate::ops::proportion::ProportionHandler;

/// Registry of calculation handlers, keyed by kind.
///
/// Built once at startup and shared read-only afterwards; lookups for unknown
/// kinds yield `None`, never a panic.
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn ToolHandler>>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Creates a registry holding the five built-in handlers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ArithmeticHandler));
        registry.register(Box::new(YoyHandler));
        registry.register(Box::new(MomHandler));
        registry.register(Box::new(PercentageHandler));
        registry.register(Box::new(ProportionHandler));
        registry
    }

    /// Registers a handler under its own kind.
    pub fn register(&mut self, handler: Box<dyn ToolHandler>) {
        self.handlers.insert(handler.kind().to_string(), handler);
    }

    /// Looks up the handler for a kind.
    pub fn get(&self, kind: &str) -> Option<&dyn ToolHandler> {
        self.handlers.get(kind).map(|h| h.as_ref())
    }

    /// The registered kinds, sorted for stable enumeration.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_covers_the_five_kinds() {
        let registry = HandlerRegistry::with_builtins();
        assert_eq!(
            registry.kinds(),
            vec!["arithmetic", "mom", "percentage", "proportion", "yoy"]
        );
        for kind in registry.kinds() {
            let handler = registry.get(kind).unwrap();
            assert_eq!(handler.kind(), kind);
            assert!(!handler.description().is_empty());
            assert!(!handler.fields().is_empty());
        }
    }

    #[test]
    fn unknown_kind_lookup_is_none() {
        let registry = HandlerRegistry::with_builtins();
        assert!(registry.get("modulo").is_none());
        assert!(registry.get("").is_none());
    }
}
