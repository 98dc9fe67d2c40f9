//! In-memory organization charts.
//!
//! A chart is a strict tree of [`Position`]s, each optionally filled by an
//! [`Employee`]. An [`Organization`] owns one tree, issues unique employee
//! ids, and supports title search, hiring into the first vacant match, and
//! an indented textual rendering.
//!
//! ```
//! use orgchart::{Name, Organization, Position};
//!
//! let mut org = Organization::new(|chart| {
//!     let ceo = chart.insert_node(Position::new("CEO"), None)?;
//!     chart.insert_node(Position::new("CTO"), Some(ceo))?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let filled = org.hire(Name::new("Alice"), "CTO").unwrap();
//! assert_eq!(org.position(filled).unwrap().to_string(), "CTO: Alice (1)");
//! ```

pub mod employee;
pub mod errors;
pub mod organization;
pub mod position;
pub mod tree;
pub mod util;

pub use employee::{Employee, Name};
pub use errors::{OrgError, OrgResult};
pub use organization::Organization;
pub use position::Position;
pub use tree::OrgTree;
