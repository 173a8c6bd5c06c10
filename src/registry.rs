//! Function registry - the fixed list of plottable functions.
//!
//! Entries keep their insertion order, which is also the order shown in the
//! selector. Exactly one entry is selected at a time.

use std::fmt;

use crate::error::{FuncplotError, Result};

/// Unary real-valued function.
pub type Evaluator = Box<dyn Fn(f64) -> f64>;

/// Listener notified with the new index after a successful selection.
pub type Listener = Box<dyn FnMut(usize)>;

/// A named function that can be plotted.
pub struct FunctionEntry {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name shown in the selector.
    pub name: String,
    evaluator: Evaluator,
}

impl FunctionEntry {
    /// Create a new entry.
    pub fn new(
        id: &'static str,
        name: impl Into<String>,
        f: impl Fn(f64) -> f64 + 'static,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            evaluator: Box::new(f),
        }
    }

    /// Evaluate the function at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.evaluator)(x)
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered function list with a current selection.
pub struct Registry {
    entries: Vec<FunctionEntry>,
    selected: usize,
    listeners: Vec<Listener>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: 0,
            listeners: Vec::new(),
        }
    }

    /// Registry holding the functions shipped with funcplot.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("sin", "sin(x)", f64::sin);
        registry.register("square", "x^2", |x| x * x);
        registry.register("cos", "cos(x)", f64::cos);
        registry.register("cube", "x^3", |x| x * x * x);
        registry.register("reciprocal", "1/x", |x| 1.0 / x);
        registry.register("sqrt", "sqrt(x)", f64::sqrt);
        registry
    }

    /// Append a function. Names are not required to be unique.
    pub fn register(
        &mut self,
        id: &'static str,
        name: impl Into<String>,
        f: impl Fn(f64) -> f64 + 'static,
    ) {
        self.entries.push(FunctionEntry::new(id, name, f));
    }

    /// Select the entry at `index` and notify listeners.
    ///
    /// An out-of-range index is rejected and the previous selection is kept.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(FuncplotError::out_of_range(index, self.entries.len()));
        }

        self.selected = index;
        tracing::info!("Selected function {} ({})", index, self.entries[index].name);

        for listener in &mut self.listeners {
            listener(index);
        }
        Ok(())
    }

    /// Currently selected entry, `None` only while the registry is empty.
    pub fn current(&self) -> Option<&FunctionEntry> {
        self.entries.get(self.selected)
    }

    /// Subscribe to selection changes.
    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Index of the selected entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Display names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no function is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries)
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
