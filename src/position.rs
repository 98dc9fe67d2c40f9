//! Position payload: a titled role and its occupancy state.

use std::fmt;

use crate::employee::Employee;

/// One role in an org chart: an immutable title plus an optional occupant.
///
/// Occupancy has exactly two states. A vacant position becomes filled only
/// through a successful [`Organization::hire`](crate::Organization::hire);
/// a filled one becomes vacant only through an explicit
/// [`set_occupant`](Position::set_occupant) / `vacate` call.
#[derive(Debug, Clone)]
pub struct Position {
    title: String,
    occupant: Option<Employee>,
}

impl Position {
    /// A vacant position with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            occupant: None,
        }
    }

    /// A position already filled by the given employee.
    pub fn occupied(title: impl Into<String>, employee: Employee) -> Self {
        Self {
            title: title.into(),
            occupant: Some(employee),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn occupant(&self) -> Option<&Employee> {
        self.occupant.as_ref()
    }

    /// Replaces the occupant (set or clear), returning the previous one.
    /// No validation is done on the outgoing occupant.
    pub fn set_occupant(&mut self, occupant: Option<Employee>) -> Option<Employee> {
        std::mem::replace(&mut self.occupant, occupant)
    }

    pub fn is_filled(&self) -> bool {
        self.occupant.is_some()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(employee) => write!(f, "{}: {}", self.title, employee),
            None => write!(f, "{}", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Name;

    #[test]
    fn given_vacant_position_when_displayed_then_shows_title_only() {
        let position = Position::new("CEO");
        assert!(!position.is_filled());
        assert_eq!(position.to_string(), "CEO");
    }

    #[test]
    fn given_filled_position_when_displayed_then_shows_title_and_occupant() {
        let employee = Employee::new(1, Name::new("Alice"));
        let position = Position::occupied("CTO", employee);
        assert!(position.is_filled());
        assert_eq!(position.to_string(), "CTO: Alice (1)");
    }

    #[test]
    fn given_filled_position_when_occupant_cleared_then_previous_is_returned() {
        let mut position = Position::occupied("CTO", Employee::new(1, Name::new("Alice")));

        let previous = position.set_occupant(None);

        assert_eq!(previous.map(|e| e.id()), Some(1));
        assert!(!position.is_filled());
    }
}
