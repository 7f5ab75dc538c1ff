use crate::{InitialConditions, Parameters, Symbol};
use std::convert::TryFrom;

impl Parameters {
    pub fn new() -> Parameters {
        Parameters::default()
    }

    /// Set the numeric value of the given symbol, returning the previous value
    /// if there was one.
    pub fn set(&mut self, symbol: Symbol, value: f64) -> Option<f64> {
        self.values.insert(symbol, value)
    }

    /// Set the value of a symbol given in its string form (`c_3`, `k_2`, ...).
    pub fn set_by_name(&mut self, symbol: &str, value: f64) -> Result<Option<f64>, String> {
        Ok(self.set(Symbol::try_from(symbol)?, value))
    }

    /// The value of the given symbol; `1.0` when it was never set.
    pub fn get(&self, symbol: Symbol) -> f64 {
        self.values.get(&symbol).cloned().unwrap_or(1.0)
    }

    /// The number of explicitly set values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl InitialConditions {
    pub fn new() -> InitialConditions {
        InitialConditions::default()
    }

    /// Set the initial value of the named variable, returning the previous
    /// value if there was one.
    pub fn set(&mut self, variable: &str, value: f64) -> Option<f64> {
        self.values.insert(variable.to_string(), value)
    }

    /// The initial value of the named variable; `1.0` when it was never set.
    pub fn get(&self, variable: &str) -> f64 {
        self.values.get(variable).cloned().unwrap_or(1.0)
    }
}
