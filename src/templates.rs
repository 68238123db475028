//! Read-only library of common automation scenario templates.
//!
//! Templates are inspiration material, not wizard state: the host shows them
//! alongside the wizard, and the user copies a template's steps as plain text
//! or feeds its selector payload to the import parser. Nothing here mutates
//! the configuration.

use std::fmt;

/// Rough grouping of a template's subject matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    /// Authentication and access control flows.
    Security,
    /// Shopping and checkout flows.
    Commerce,
    /// Form filling and persistence flows.
    Forms,
    /// Menu and routing flows.
    Navigation,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateCategory::Security => "Security",
            TemplateCategory::Commerce => "Commerce",
            TemplateCategory::Forms => "Forms",
            TemplateCategory::Navigation => "Navigation",
        };
        f.write_str(name)
    }
}

/// One ready-made automation scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioTemplate {
    /// Stable identifier, unique within [`TEMPLATES`].
    pub id: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// One-sentence summary of what the scenario covers.
    pub description: &'static str,
    /// Subject-matter grouping.
    pub category: TemplateCategory,
    /// Plain-text steps, in execution order.
    pub steps: &'static [&'static str],
    /// Pretty-printed JSON selector map, consumable by the import parser.
    pub selectors_json: &'static str,
}

/// The built-in template catalog.
pub const TEMPLATES: [ScenarioTemplate; 3] = [
    ScenarioTemplate {
        id: "login-auth",
        title: "Secure Login Workflow",
        description:
            "Standard authentication test covering valid credentials and dashboard redirection.",
        category: TemplateCategory::Security,
        steps: &[
            "Navigate to /login",
            "Enter valid username and password",
            "Click the 'Sign In' button",
            "Verify the 'Dashboard' header is visible",
            "Verify the URL contains '/dashboard'",
        ],
        selectors_json: r##"{
  "userInput": "#username",
  "passInput": "#password",
  "submitBtn": "button[type='submit']",
  "header": "h1.dashboard-title"
}"##,
    },
    ScenarioTemplate {
        id: "ecom-cart",
        title: "Add to Cart & Checkout",
        description:
            "Complex flow involving product selection, cart updates, and navigation to checkout.",
        category: TemplateCategory::Commerce,
        steps: &[
            "Search for 'Premium Headphones'",
            "Select the first product result",
            "Click 'Add to Cart'",
            "Open the cart drawer",
            "Verify product price and quantity",
            "Click 'Proceed to Checkout'",
        ],
        selectors_json: r##"{
  "searchBar": "input[name='q']",
  "firstProduct": ".product-card:first-child",
  "addBtn": ".add-to-cart-action",
  "cartIcon": "#mini-cart-trigger"
}"##,
    },
    ScenarioTemplate {
        id: "user-profile",
        title: "Profile Information Update",
        description: "Testing form data persistence after editing user profile details.",
        category: TemplateCategory::Forms,
        steps: &[
            "Navigate to /settings/profile",
            "Update display name and bio",
            "Upload a new profile picture placeholder",
            "Save changes",
            "Refresh page and verify updated data",
        ],
        selectors_json: r##"{
  "nameField": "#display-name",
  "bioField": "textarea#bio",
  "uploadInput": "input[type='file']",
  "saveBtn": ".btn-save-settings"
}"##,
    },
];

/// Look up a template by its id.
pub fn find(id: &str) -> Option<&'static ScenarioTemplate> {
    TEMPLATES.iter().find(|template| template.id == id)
}

/// Render a template's steps as pasteable plain text:
/// `Scenario: <title>`, `Steps:`, then one numbered line per step.
pub fn steps_text(template: &ScenarioTemplate) -> String {
    let lines: Vec<String> = template
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {step}", index.saturating_add(1)))
        .collect();
    format!("Scenario: {}\nSteps:\n{}", template.title, lines.join("\n"))
}
