//! Static reference data: synthetic-data word lists and the per-framework
//! demo scenario catalog.
//!
//! Everything here is read-only. Demo scenarios are fixtures that the wizard
//! copies into the live configuration on request; they never become user
//! state by themselves.

use crate::model::{Framework, Selector, TestStep};

/// First names for synthetic full names and email addresses.
pub const FIRST_NAMES: [&str; 8] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
];

/// Last names for synthetic full names and email addresses.
pub const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];

/// Domains for synthetic email addresses.
pub const EMAIL_DOMAINS: [&str; 4] = ["example.com", "testmail.org", "demo.io", "automation.net"];

/// Street names for synthetic postal addresses.
pub const STREETS: [&str; 5] = [
    "Maple Ave",
    "Oak St",
    "Washington Blvd",
    "Lakeview Dr",
    "Parkway Dr",
];

/// City names for synthetic postal addresses.
pub const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

/// A pre-configured example scenario for one framework.
///
/// Immutable fixture used to bulk-populate the wizard with a finished
/// example. Step and selector ids are freshly generated on every lookup so
/// loading the same demo twice never reuses ids.
#[derive(Debug, Clone)]
pub struct DemoScenario {
    /// Target base URL of the example.
    pub url: String,
    /// Example test case name.
    pub test_name: String,
    /// Example scenario description.
    pub description: String,
    /// Example test steps, in execution order.
    pub steps: Vec<TestStep>,
    /// Example element selectors.
    pub selectors: Vec<Selector>,
    /// Framework-appropriate coding standards text.
    pub coding_standards: String,
}

fn steps(entries: &[(&str, &str)]) -> Vec<TestStep> {
    entries
        .iter()
        .map(|(action, expected)| TestStep::new(action, expected))
        .collect()
}

fn selectors(entries: &[(&str, &str)]) -> Vec<Selector> {
    entries
        .iter()
        .map(|(name, selector)| Selector::new(name, selector))
        .collect()
}

fn scenario(
    url: &str,
    test_name: &str,
    description: &str,
    step_entries: &[(&str, &str)],
    selector_entries: &[(&str, &str)],
    coding_standards: &str,
) -> DemoScenario {
    DemoScenario {
        url: url.to_string(),
        test_name: test_name.to_string(),
        description: description.to_string(),
        steps: steps(step_entries),
        selectors: selectors(selector_entries),
        coding_standards: coding_standards.to_string(),
    }
}

/// Look up the demo scenario for `framework`. Every framework has exactly one.
pub fn demo_scenario(framework: Framework) -> DemoScenario {
    match framework {
        Framework::PlaywrightJavaScript => scenario(
            "https://demo.playwright.dev/todomvc",
            "Standard Todo Management",
            "Verify that a user can add, toggle, and clear todos from the list.",
            &[
                ("Navigate to the TodoMVC page", "Header 'todos' is visible"),
                ("Add 'Buy Milk' to the list", "List contains 1 item"),
                (
                    "Toggle the checkbox for 'Buy Milk'",
                    "Item is marked as completed",
                ),
            ],
            &[("newTodo", ".new-todo"), ("todoItems", ".todo-list li")],
            "Use modern async/await and Playwright's expect assertions with locators.",
        ),
        Framework::PlaywrightPython => scenario(
            "https://saucedemo.com",
            "End-to-End E-commerce Checkout",
            "Login as a standard user, add a product to the cart, and complete the checkout process.",
            &[
                (
                    "Login with 'standard_user' and 'secret_sauce'",
                    "Product page is visible",
                ),
                (
                    "Add 'Sauce Labs Backpack' to the cart",
                    "Cart badge shows '1'",
                ),
                (
                    "Go to checkout and finish order",
                    "Thank you message is displayed",
                ),
            ],
            &[
                ("userField", "#user-name"),
                ("passField", "#password"),
                ("loginBtn", "#login-button"),
            ],
            "Follow PEP 8, use the Page Object Model, and utilize Playwright's built-in auto-waiting.",
        ),
        Framework::PlaywrightJava => scenario(
            "https://github.com/login",
            "GitHub Login Validation",
            "Verify that the login form handles invalid credentials correctly.",
            &[
                ("Navigate to login page", "Sign in form is present"),
                (
                    "Enter invalid email and password",
                    "Error message 'Incorrect username or password' appears",
                ),
            ],
            &[
                ("loginInput", "#login_field"),
                ("passwordInput", "#password"),
                ("errorFlash", ".flash-error"),
            ],
            "Use JUnit 5, follow Java naming conventions, and implement a robust Page Object Model.",
        ),
        Framework::CypressJavaScript => scenario(
            "https://example.cypress.io/commands/actions",
            "UI Actions & Interactions",
            "Test various user actions like typing, clearing, and submitting a form.",
            &[
                (
                    "Type 'Hello World' into the email input",
                    "Input value matches 'Hello World'",
                ),
                ("Clear the input field", "Input is empty"),
                ("Click the action button", "Verification message appears"),
            ],
            &[("emailField", ".action-email"), ("actionBtn", ".action-btn")],
            "Use Cypress custom commands where applicable and prioritize data-cy selectors.",
        ),
        Framework::SeleniumJavaScript => scenario(
            "https://www.google.com",
            "Google Search Functionality",
            "Perform a search query and verify that results are displayed.",
            &[
                ("Accept cookie consent if visible", "Consent dialog is gone"),
                (
                    "Type 'ArchiTest' into the search bar",
                    "Search suggestions appear",
                ),
                ("Press Enter", "Results page contains 'ArchiTest'"),
            ],
            &[
                ("searchBar", "textarea[name='q']"),
                ("resultsContainer", "#search"),
            ],
            "Use Selenium WebDriver with async/await and the official javascript bindings.",
        ),
        Framework::SeleniumPython => scenario(
            "https://the-internet.herokuapp.com/login",
            "Form Authentication Test",
            "Standard login test using a secure demo application.",
            &[
                ("Enter 'tomsmith' as username", "Username field contains text"),
                (
                    "Enter 'SuperSecretPassword!' as password",
                    "Password field contains text",
                ),
                (
                    "Click Login button",
                    "Flash message 'You logged into a secure area!' is visible",
                ),
            ],
            &[
                ("username", "#username"),
                ("password", "#password"),
                ("loginBtn", "button[type='submit']"),
            ],
            "Use pytest framework, webdriver_manager for driver setup, and explicit waits.",
        ),
        Framework::SeleniumCSharp => scenario(
            "https://demoqa.com/text-box",
            "Text Box Form Submission",
            "Verify that a complex form can be filled and submitted correctly.",
            &[
                (
                    "Enter Full Name, Email, and Address",
                    "Fields are populated",
                ),
                ("Click Submit", "Output area displays the submitted data"),
            ],
            &[
                ("fullName", "#userName"),
                ("submitBtn", "#submit"),
                ("output", "#output"),
            ],
            "Use NUnit or xUnit, follow C# PascalCase naming conventions, and implement POM.",
        ),
        Framework::SeleniumJava => scenario(
            "https://opensource-demo.orangehrmlive.com/",
            "Admin Dashboard Navigation",
            "Login and navigate through the admin panel of an HRM system.",
            &[
                ("Login with admin credentials", "Dashboard is shown"),
                (
                    "Click on 'Admin' tab",
                    "User Management header is visible",
                ),
                ("Search for a specific user", "Search result matches query"),
            ],
            &[
                ("username", "input[name='username']"),
                ("adminTab", ".oxd-main-menu-item:contains('Admin')"),
            ],
            "Use TestNG or JUnit 5, Maven/Gradle for dependencies, and Selenium 4 features.",
        ),
        Framework::SelenideJava => scenario(
            "https://duckduckgo.com",
            "Privacy-Focused Search Test",
            "Verify search results on DuckDuckGo using Selenide's concise syntax.",
            &[
                (
                    "Type 'Selenide vs Selenium' in search input",
                    "Input field is not empty",
                ),
                (
                    "Click search icon",
                    "First result title contains 'Selenide'",
                ),
            ],
            &[
                ("searchBox", "#searchbox_input"),
                ("searchBtn", "button[type='submit']"),
            ],
            "Leverage Selenide's concise API ($ instead of findElement) and automatic waiting.",
        ),
    }
}
