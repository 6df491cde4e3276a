use std::{
    collections::HashMap,
    fmt,
    hash::BuildHasher,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use dashmap::DashMap;
use tracing::debug;

/// A named, mutable value cell.
///
/// Cells are created by a [`Registry`] and shared by every expression node
/// that refers to the same name. The value is stored as the bit pattern of an
/// `f64` inside an atomic, so it can be read and written through a shared
/// handle from any thread.
#[derive(Debug)]
pub struct Variable {
    name: String,
    bits: AtomicU64,
}

impl Variable {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(),
               bits: AtomicU64::new(0.0f64.to_bits()) }
    }

    /// The name the variable was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Replaces the current value. Every tree referencing this variable sees
    /// the new value on its next evaluation.
    pub fn set_value(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Owns the variables of one evaluation context.
///
/// Within a registry a name denotes exactly one [`Variable`] for the
/// registry's whole lifetime, so every tree parsed against it shares cells by
/// name. Two registries never share cells.
///
/// Lookups and refreshes may run concurrently from several threads. Writing a
/// value while another thread evaluates a tree that reads it is not
/// coordinated; give each concurrent evaluation its own registry.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use scorexpr::interpreter::registry::Registry;
///
/// let registry = Registry::new();
/// let x = registry.lookup_or_create("x");
/// x.set_value(2.5);
///
/// assert_eq!(registry.lookup_or_create("x").value(), 2.5);
///
/// registry.refresh(&HashMap::from([("y".to_string(), 1.0)]));
/// assert_eq!(x.value(), 0.0);
/// assert!(registry.find_variable("y").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    variables: DashMap<String, Arc<Variable>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variable called `name`, creating it with value `0.0` if it
    /// does not exist yet.
    ///
    /// Insertion is atomic: concurrent callers asking for the same new name
    /// all receive the same cell.
    ///
    /// # Parameters
    /// - `name`: Variable name. The parser only passes names free of
    ///   whitespace and parentheses.
    ///
    /// # Returns
    /// A shared handle to the registry-owned cell.
    pub fn lookup_or_create(&self, name: &str) -> Arc<Variable> {
        if let Some(existing) = self.variables.get(name) {
            return Arc::clone(existing.value());
        }

        let entry = self.variables.entry(name.to_string()).or_insert_with(|| {
                                                               debug!(name, "registering variable");
                                                               Arc::new(Variable::new(name))
                                                           });
        Arc::clone(entry.value())
    }

    /// Returns the variable called `name` without creating it.
    #[must_use]
    pub fn find_variable(&self, name: &str) -> Option<Arc<Variable>> {
        self.variables.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns `true` if a variable called `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Sets the value of an existing variable.
    ///
    /// # Returns
    /// `false` if no variable called `name` exists; nothing is created.
    pub fn set(&self, name: &str, value: f64) -> bool {
        let Some(entry) = self.variables.get(name) else {
            return false;
        };
        entry.value().set_value(value);
        true
    }

    /// Updates every registered variable from a name to value map.
    ///
    /// Variables named in `values` take the mapped value. Variables missing
    /// from `values` are reset to `0.0` so that nothing carries over from a
    /// previous refresh. Names in `values` that were never registered are
    /// ignored.
    pub fn refresh<S: BuildHasher>(&self, values: &HashMap<String, f64, S>) {
        let mut updated = 0usize;
        let mut reset = 0usize;

        for entry in self.variables.iter() {
            if let Some(value) = values.get(entry.key()) {
                entry.value().set_value(*value);
                updated += 1;
            } else {
                entry.value().set_value(0.0);
                reset += 1;
            }
        }

        debug!(updated, reset, "registry refreshed");
    }

    /// Number of registered variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Names of all registered variables, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names = self.variables
                            .iter()
                            .map(|entry| entry.key().clone())
                            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}
