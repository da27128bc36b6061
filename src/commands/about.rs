//! Static informational view: system features and technology stack.

const FEATURES: &[&str] = &[
    "Product management",
    "Inventory tracking",
    "Batch number tracking",
    "CSV export functionality",
    "Real-time autocomplete suggestions",
    "Advanced search and filtering",
    "Material type classification",
];

const BACKEND_STACK: &[&str] = &[
    "Java 17",
    "Spring Boot 3.2",
    "Spring Data JPA",
    "MySQL Database",
    "Spring Security",
];

const CLIENT_STACK: &[&str] = &["Rust", "Tokio", "Reqwest", "Clap"];

/// Render the about view.
///
/// Fixed content, no inputs, no state; the only output is the text itself.
pub fn render() -> String {
    let mut out = String::new();
    out.push_str("About the Warehouse Management System\n");
    out.push_str(
        "This system helps you manage inventory, track products, and streamline warehouse operations.\n",
    );

    out.push_str("\nSystem Features\n");
    for feature in FEATURES {
        out.push_str(&format!("  - {}\n", feature));
    }

    out.push_str("\nTechnology Stack\n");
    out.push_str("  Backend:\n");
    for item in BACKEND_STACK {
        out.push_str(&format!("    - {}\n", item));
    }
    out.push_str("  Client:\n");
    for item in CLIENT_STACK {
        out.push_str(&format!("    - {}\n", item));
    }

    out
}

pub fn execute() {
    print!("{}", render());
}
