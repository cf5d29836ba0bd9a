//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::builder::TraversalReport;
use crate::invite::{Invitation, InvitationEntry};

/// Prints a traversal report in plain text format.
///
/// With `by_circle`, names are grouped under their circle depth.
pub fn print_plain(report: &TraversalReport, by_circle: bool) {
    if report.is_empty() {
        println!("Nobody to invite (filter: {}).", report.filter);
        return;
    }

    println!("INVITED ({}, filter: {}):", report.emitted.len(), report.filter);
    if by_circle {
        for (depth, circle) in report.circles.iter().enumerate() {
            println!("circle {}: {}", depth, circle.join(", "));
        }
    } else {
        for name in &report.emitted {
            println!("- {}", name);
        }
    }
}

/// Prints the people no traversal can reach.
pub fn print_unreached(report: &TraversalReport) {
    if report.unreached.is_empty() {
        println!("Everybody is reachable from a best friend.");
    } else {
        println!("UNREACHED ({}):", report.unreached.len());
        for name in &report.unreached {
            println!("- {}", name);
        }
    }
}

/// Prints a traversal report in JSON format.
pub fn print_json(report: &TraversalReport) {
    print_value(&json!(report));
}

/// Prints an invitation list, one entry per line.
pub fn print_invitations_plain(list: &[Invitation<'_>]) {
    println!("INVITATIONS ({}):", list.len());
    for inv in list {
        println!("- {}", inv.names().join(" & "));
    }
}

/// Prints an invitation list as a JSON array of pairs and singles.
pub fn print_invitations_json(list: &[Invitation<'_>]) {
    let entries: Vec<InvitationEntry> = list.iter().map(InvitationEntry::from).collect();
    print_value(&json!({ "invitations": entries }));
}

fn print_value(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{}", value);
        }
    }
}
