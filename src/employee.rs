//! Employee identity: names and issued employee records.

use std::fmt;

/// A person's name, treated as an opaque value with a textual rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A person occupying a position.
///
/// Ids are issued by the owning [`Organization`](crate::Organization) at hire
/// time, start at 1, and are unique for that organization's lifetime. An
/// employee record is never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: u32,
    name: Name,
}

impl Employee {
    pub fn new(id: u32, name: Name) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_employee_when_displayed_then_shows_name_and_id() {
        let employee = Employee::new(7, Name::new("Grace Hopper"));
        assert_eq!(employee.to_string(), "Grace Hopper (7)");
    }

    #[test]
    fn given_str_when_converted_then_yields_name() {
        let name: Name = "Ada".into();
        assert_eq!(name.as_str(), "Ada");
    }
}
