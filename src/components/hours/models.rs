use std::collections::HashMap;

/// Name used for entries whose employee name is empty or missing
pub const UNNAMED_EMPLOYEE: &str = "null";

/// Total hours per employee, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeHours {
    totals: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl EmployeeHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `hours` to `name`, appending the name if it has not been seen yet
    pub fn with_hours(mut self, name: &str, hours: f64) -> Self {
        match self.index.get(name) {
            Some(&slot) => self.totals[slot].1 += hours,
            None => {
                self.index.insert(name.to_string(), self.totals.len());
                self.totals.push((name.to_string(), hours));
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&slot| self.totals[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.totals.iter().map(|(name, hours)| (name.as_str(), *hours))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of hours across all employees
    pub fn total(&self) -> f64 {
        self.totals.iter().map(|(_, hours)| hours).sum()
    }
}

/// One row of the ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub hours: f64,
}

impl RankedEntry {
    pub fn new(name: &str, hours: f64) -> Self {
        Self {
            name: name.to_string(),
            hours,
        }
    }
}

/// Replace an empty or missing employee name with [`UNNAMED_EMPLOYEE`]
pub fn normalize_name(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => UNNAMED_EMPLOYEE,
    }
}
