use std::collections::HashMap;

/// Variables of one session. Values live until the session ends.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name` and returns the value it replaced.
    pub fn set(&mut self, name: &str, value: f64) -> Option<f64> {
        self.variables.insert(name.to_string(), value)
    }
}
