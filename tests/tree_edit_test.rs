//! Tests for structural edits through an organization's tree

use orgchart::{Name, Organization, Position};

fn org_with_two_teams() -> Organization {
    Organization::new(|chart| {
        let head = chart.insert_node(Position::new("Head"), None)?;
        let lead_a = chart.insert_node(Position::new("Team Lead"), Some(head))?;
        chart.insert_node(Position::new("Analyst"), Some(lead_a))?;
        let lead_b = chart.insert_node(Position::new("Team Lead"), Some(head))?;
        chart.insert_node(Position::new("Analyst"), Some(lead_b))?;
        Ok(())
    })
    .expect("build org")
}

#[test]
fn given_foreign_child_when_removing_then_tree_is_structurally_unchanged() {
    // Arrange
    let mut org = org_with_two_teams();
    let head = org.tree().root().unwrap();
    let analysts = org.find_position("Analyst");
    let before = org.to_string();

    // Act: analysts report to leads, not to the head
    let removed = org.tree_mut().remove_direct_report(head, analysts[0]);

    // Assert
    assert!(!removed);
    assert_eq!(org.to_string(), before);
}

#[test]
fn given_removed_subtree_when_searching_then_its_positions_are_gone() {
    // Arrange
    let mut org = org_with_two_teams();
    let head = org.tree().root().unwrap();
    let leads = org.find_position("Team Lead");

    // Act
    let removed = org.tree_mut().remove_direct_report(head, leads[0]);

    // Assert: the lead and its analyst both left the chart
    assert!(removed);
    assert_eq!(org.find_position("Team Lead").len(), 1);
    assert_eq!(org.find_position("Analyst").len(), 1);
}

#[test]
fn given_grown_chart_when_hiring_then_new_positions_are_reachable() {
    // Arrange
    let mut org = org_with_two_teams();
    let leads = org.find_position("Team Lead");

    // Act
    org.tree_mut()
        .insert_node(Position::new("Intern"), Some(leads[1]))
        .unwrap();
    let hired = org.hire(Name::new("Ida"), "Intern");

    // Assert
    let idx = hired.expect("freshly added position is vacant");
    assert_eq!(org.position(idx).unwrap().title(), "Intern");
}

#[test]
fn given_filled_positions_when_subtree_removed_then_search_order_stays_preorder() {
    // Arrange
    let mut org = org_with_two_teams();
    org.hire(Name::new("Lena"), "Team Lead").unwrap();
    let head = org.tree().root().unwrap();
    let leads = org.find_position("Team Lead");

    // Act: drop the filled first team; the vacant second team remains
    org.tree_mut().remove_direct_report(head, leads[0]);
    let hired = org.hire(Name::new("Mara"), "Team Lead").unwrap();

    // Assert
    assert_eq!(hired, leads[1]);
    assert_eq!(org.position(hired).unwrap().occupant().unwrap().id(), 2);
}
