//! Named typed placeholders with increment rules
//!
//! Variables are substituted into label text alongside merge fields. A
//! variable can step its value per output item, copy, or page; string and
//! color variables never increment.

use indexmap::IndexMap;

/// Variable value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableType {
    #[default]
    String,
    Integer,
    Numeric,
    Color,
}

impl VariableType {
    pub fn name(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Integer => "integer",
            VariableType::Numeric => "numeric",
            VariableType::Color => "color",
        }
    }

    pub fn from_name(name: &str) -> Option<VariableType> {
        match name {
            "string" => Some(VariableType::String),
            "integer" => Some(VariableType::Integer),
            "numeric" => Some(VariableType::Numeric),
            "color" => Some(VariableType::Color),
            _ => None,
        }
    }
}

/// When a variable's value advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Increment {
    #[default]
    Never,
    PerItem,
    PerCopy,
    PerPage,
}

impl Increment {
    pub fn name(&self) -> &'static str {
        match self {
            Increment::Never => "never",
            Increment::PerItem => "per_item",
            Increment::PerCopy => "per_copy",
            Increment::PerPage => "per_page",
        }
    }

    pub fn from_name(name: &str) -> Option<Increment> {
        match name {
            "never" => Some(Increment::Never),
            "per_item" => Some(Increment::PerItem),
            "per_copy" => Some(Increment::PerCopy),
            "per_page" => Some(Increment::PerPage),
            _ => None,
        }
    }
}

/// A typed named placeholder.
///
/// The step size is kept as the author's original string so documents
/// round-trip byte-for-byte; it is parsed on use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variable {
    var_type: VariableType,
    name: String,
    initial_value: String,
    increment: Increment,
    step_size: String,

    value: String,
}

impl Variable {
    pub fn new(
        var_type: VariableType,
        name: impl Into<String>,
        initial_value: impl Into<String>,
        increment: Increment,
        step_size: impl Into<String>,
    ) -> Self {
        let initial_value = initial_value.into();
        Variable {
            var_type,
            name: name.into(),
            value: initial_value.clone(),
            initial_value,
            increment,
            step_size: step_size.into(),
        }
    }

    pub fn var_type(&self) -> VariableType {
        self.var_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    pub fn increment(&self) -> Increment {
        self.increment
    }

    pub fn step_size(&self) -> &str {
        &self.step_size
    }

    /// Current value during an output run.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Reset the current value to the initial value.
    pub fn reset_value(&mut self) {
        self.value = self.initial_value.clone();
    }

    fn step(&mut self) {
        match self.var_type {
            VariableType::Integer => {
                let value = self.value.parse::<i64>().unwrap_or(0);
                let step = self.step_size.parse::<i64>().unwrap_or(0);
                self.value = (value + step).to_string();
            }
            VariableType::Numeric => {
                let value = self.value.parse::<f64>().unwrap_or(0.0);
                let step = self.step_size.parse::<f64>().unwrap_or(0.0);
                self.value = (value + step).to_string();
            }
            // String and color values have nothing to step
            VariableType::String | VariableType::Color => {}
        }
    }

    /// Advance the value at an item boundary.
    pub fn increment_on_item(&mut self) {
        if self.increment == Increment::PerItem {
            self.step();
        }
    }

    /// Advance the value at a copy boundary.
    pub fn increment_on_copy(&mut self) {
        if self.increment == Increment::PerCopy {
            self.step();
        }
    }

    /// Advance the value at a page boundary.
    pub fn increment_on_page(&mut self) {
        if self.increment == Increment::PerPage {
            self.step();
        }
    }
}

/// Variable collection keyed by name, insertion order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variables {
    items: IndexMap<String, Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Variables::default()
    }

    /// Add or replace a variable, keyed by its name.
    pub fn add_variable(&mut self, variable: Variable) {
        self.items.insert(variable.name.clone(), variable);
    }

    /// Remove a variable by name.
    pub fn delete_variable(&mut self, name: &str) -> Option<Variable> {
        self.items.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion (display) order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.items.values()
    }

    /// Reset every variable to its initial value.
    pub fn reset_values(&mut self) {
        self.items.values_mut().for_each(Variable::reset_value);
    }

    /// Advance every per-item variable.
    pub fn increment_on_item(&mut self) {
        self.items.values_mut().for_each(Variable::increment_on_item);
    }

    /// Advance every per-copy variable.
    pub fn increment_on_copy(&mut self) {
        self.items.values_mut().for_each(Variable::increment_on_copy);
    }

    /// Advance every per-page variable.
    pub fn increment_on_page(&mut self) {
        self.items.values_mut().for_each(Variable::increment_on_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_increment() {
        let mut v = Variable::new(
            VariableType::Integer,
            "i",
            "123",
            Increment::PerItem,
            "2",
        );
        assert_eq!(v.value(), "123");
        v.increment_on_item();
        assert_eq!(v.value(), "125");
        v.increment_on_copy(); // wrong boundary, no change
        assert_eq!(v.value(), "125");
        v.reset_value();
        assert_eq!(v.value(), "123");
    }

    #[test]
    fn test_string_never_increments() {
        let mut v = Variable::new(VariableType::String, "s", "x", Increment::PerItem, "1");
        v.increment_on_item();
        assert_eq!(v.value(), "x");
    }

    #[test]
    fn test_unparseable_value_defaults_to_zero() {
        let mut v = Variable::new(VariableType::Integer, "i", "abc", Increment::PerItem, "3");
        v.increment_on_item();
        assert_eq!(v.value(), "3");
    }

    #[test]
    fn test_collection_order_and_replace() {
        let mut vars = Variables::new();
        vars.add_variable(Variable::new(
            VariableType::String,
            "b",
            "1",
            Increment::Never,
            "0",
        ));
        vars.add_variable(Variable::new(
            VariableType::String,
            "a",
            "2",
            Increment::Never,
            "0",
        ));
        assert_eq!(vars.len(), 2);
        let names: Vec<&str> = vars.iter().map(Variable::name).collect();
        assert_eq!(names, vec!["b", "a"]);

        vars.add_variable(Variable::new(
            VariableType::String,
            "b",
            "9",
            Increment::Never,
            "0",
        ));
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("b").unwrap().initial_value(), "9");
    }
}
