use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Read access to variable bindings, as needed while converting an expression.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<&BigDecimal>;
}

impl Lookup for HashMap<String, BigDecimal> {
    fn lookup(&self, name: &str) -> Option<&BigDecimal> {
        self.get(name)
    }
}

/// Variable bindings kept in the order they were first assigned.
#[derive(Default)]
pub struct Variables {
    bindings: IndexMap<String, BigDecimal>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebinding keeps the name's original position.
    pub fn set(&mut self, name: &str, value: BigDecimal) {
        self.bindings.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&BigDecimal> {
        self.bindings.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigDecimal)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Lookup for Variables {
    fn lookup(&self, name: &str) -> Option<&BigDecimal> {
        self.get(name)
    }
}
