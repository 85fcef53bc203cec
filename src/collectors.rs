use serde_json::{Map, Value};

use crate::traits::Collector;

/// Key under which [`ListCollector`] records each document's disk name.
pub const NAME_KEY: &str = "_name";

/// Key holding a non-mapping document once [`ListCollector`] wraps it.
pub const VALUE_KEY: &str = "value";

// ---------------------------------------------------------------------------
// MapCollector
// ---------------------------------------------------------------------------

/// Collects children into a mapping keyed by disk-entry name.
///
/// Keys come out sorted. Adding a name twice keeps the later document.
#[derive(Debug, Default)]
pub struct MapCollector {
    entries: Map<String, Value>,
}

impl MapCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for MapCollector {
    fn add(&mut self, name: &str, document: Value) {
        self.entries.insert(name.to_string(), document);
    }

    fn get(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    fn reset(&mut self) {
        self.entries.clear();
    }

    fn take(&mut self) -> Value {
        Value::Object(std::mem::take(&mut self.entries))
    }
}

// ---------------------------------------------------------------------------
// ListCollector
// ---------------------------------------------------------------------------

/// Collects children into a list, in the order they were added.
///
/// Each document records where it came from under [`NAME_KEY`]. Documents
/// that are not mappings (a bare string from
/// [`parsers::text`](crate::parsers::text), a JSON array, ...) are wrapped
/// first, so `"hi"` from `notes.txt` becomes
/// `{"value": "hi", "_name": "notes.txt"}`.
#[derive(Debug, Default)]
pub struct ListCollector {
    items: Vec<Value>,
}

impl ListCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for ListCollector {
    fn add(&mut self, name: &str, document: Value) {
        let mut object = match document {
            Value::Object(object) => object,
            other => {
                let mut wrapped = Map::new();
                wrapped.insert(VALUE_KEY.to_string(), other);
                wrapped
            }
        };
        object.insert(NAME_KEY.to_string(), Value::String(name.to_string()));
        self.items.push(Value::Object(object));
    }

    fn get(&self) -> Value {
        Value::Array(self.items.clone())
    }

    fn reset(&mut self) {
        self.items.clear();
    }

    fn take(&mut self) -> Value {
        Value::Array(std::mem::take(&mut self.items))
    }
}
