//! The mutable `TestConfiguration` aggregate and its closed option sets.
//!
//! One configuration exists per session. Every other module either reads it
//! (the prompt compiler) or writes into it (the wizard, the import parser,
//! the data generator). The option sets are tagged enums so that an
//! out-of-set value is unrepresentable rather than silently ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default coding-standards text for a fresh configuration.
pub const DEFAULT_CODING_STANDARDS: &str = "Use descriptive variable names and clear assertions.";

/// Automation library half of a [`Framework`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Library {
    /// Selenium WebDriver.
    Selenium,
    /// Selenide (Selenium wrapper).
    Selenide,
    /// Playwright.
    Playwright,
    /// Cypress.
    Cypress,
}

/// Target programming language half of a [`Framework`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Java.
    Java,
    /// Python.
    Python,
    /// JavaScript.
    JavaScript,
    /// C#.
    CSharp,
}

/// One of the nine supported automation library × language combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    /// Playwright with JavaScript.
    #[serde(rename = "Playwright JavaScript")]
    PlaywrightJavaScript,
    /// Playwright with Python.
    #[serde(rename = "Playwright Python")]
    PlaywrightPython,
    /// Playwright with Java.
    #[serde(rename = "Playwright Java")]
    PlaywrightJava,
    /// Cypress with JavaScript.
    #[serde(rename = "Cypress JavaScript")]
    CypressJavaScript,
    /// Selenium with JavaScript.
    #[serde(rename = "Selenium JavaScript")]
    SeleniumJavaScript,
    /// Selenium with Python.
    #[serde(rename = "Selenium Python")]
    SeleniumPython,
    /// Selenium with C#.
    #[serde(rename = "Selenium C#")]
    SeleniumCSharp,
    /// Selenium with Java.
    #[serde(rename = "Selenium Java")]
    SeleniumJava,
    /// Selenide with Java.
    #[serde(rename = "Selenide Java")]
    SelenideJava,
}

impl Framework {
    /// Every supported framework, in presentation order.
    pub const ALL: [Framework; 9] = [
        Framework::PlaywrightJavaScript,
        Framework::PlaywrightPython,
        Framework::PlaywrightJava,
        Framework::CypressJavaScript,
        Framework::SeleniumJavaScript,
        Framework::SeleniumPython,
        Framework::SeleniumCSharp,
        Framework::SeleniumJava,
        Framework::SelenideJava,
    ];

    /// The automation library of this combination.
    pub fn library(self) -> Library {
        match self {
            Framework::PlaywrightJavaScript
            | Framework::PlaywrightPython
            | Framework::PlaywrightJava => Library::Playwright,
            Framework::CypressJavaScript => Library::Cypress,
            Framework::SeleniumJavaScript
            | Framework::SeleniumPython
            | Framework::SeleniumCSharp
            | Framework::SeleniumJava => Library::Selenium,
            Framework::SelenideJava => Library::Selenide,
        }
    }

    /// The target language of this combination.
    pub fn language(self) -> Language {
        match self {
            Framework::PlaywrightJava | Framework::SeleniumJava | Framework::SelenideJava => {
                Language::Java
            }
            Framework::PlaywrightPython | Framework::SeleniumPython => Language::Python,
            Framework::PlaywrightJavaScript
            | Framework::CypressJavaScript
            | Framework::SeleniumJavaScript => Language::JavaScript,
            Framework::SeleniumCSharp => Language::CSharp,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Framework::PlaywrightJavaScript => "Playwright JavaScript",
            Framework::PlaywrightPython => "Playwright Python",
            Framework::PlaywrightJava => "Playwright Java",
            Framework::CypressJavaScript => "Cypress JavaScript",
            Framework::SeleniumJavaScript => "Selenium JavaScript",
            Framework::SeleniumPython => "Selenium Python",
            Framework::SeleniumCSharp => "Selenium C#",
            Framework::SeleniumJava => "Selenium Java",
            Framework::SelenideJava => "Selenide Java",
        };
        f.write_str(name)
    }
}

/// Target browser for the generated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Browser {
    /// Chromium (Chrome/Edge).
    Chromium,
    /// Firefox.
    Firefox,
    /// WebKit (Safari).
    WebKit,
    /// Run against all browsers.
    #[serde(rename = "Cross-Browser")]
    CrossBrowser,
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Browser::Chromium => "Chromium",
            Browser::Firefox => "Firefox",
            Browser::WebKit => "WebKit",
            Browser::CrossBrowser => "Cross-Browser",
        };
        f.write_str(name)
    }
}

/// Viewport / device preset for the generated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewport {
    /// Desktop at 1280x720.
    #[serde(rename = "Desktop (1280x720)")]
    Desktop1280,
    /// Desktop at 1920x1080.
    #[serde(rename = "Desktop (1920x1080)")]
    Desktop1920,
    /// iPhone 13 mobile emulation.
    #[serde(rename = "iPhone 13 (Mobile)")]
    IPhone13,
    /// iPad Air tablet emulation.
    #[serde(rename = "iPad Air (Tablet)")]
    IPadAir,
    /// Responsive testing across custom sizes.
    #[serde(rename = "Responsive (Custom)")]
    Responsive,
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Viewport::Desktop1280 => "Desktop (1280x720)",
            Viewport::Desktop1920 => "Desktop (1920x1080)",
            Viewport::IPhone13 => "iPhone 13 (Mobile)",
            Viewport::IPadAir => "iPad Air (Tablet)",
            Viewport::Responsive => "Responsive (Custom)",
        };
        f.write_str(name)
    }
}

/// Network throttling profile for the generated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkProfile {
    /// Full speed, no throttling.
    #[serde(rename = "No Throttling")]
    NoThrottling,
    /// Fast 3G emulation.
    #[serde(rename = "Fast 3G")]
    Fast3G,
    /// Slow 3G emulation.
    #[serde(rename = "Slow 3G")]
    Slow3G,
    /// Offline mode.
    Offline,
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkProfile::NoThrottling => "No Throttling",
            NetworkProfile::Fast3G => "Fast 3G",
            NetworkProfile::Slow3G => "Slow 3G",
            NetworkProfile::Offline => "Offline",
        };
        f.write_str(name)
    }
}

/// Test runner for Java-family frameworks. Ignored by the compiler for every
/// other language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestRunner {
    /// JUnit 5.
    #[serde(rename = "JUnit 5")]
    JUnit5,
    /// TestNG.
    TestNG,
}

impl fmt::Display for TestRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestRunner::JUnit5 => "JUnit 5",
            TestRunner::TestNG => "TestNG",
        };
        f.write_str(name)
    }
}

/// A single test step in the scenario builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    /// Generation-time unique token; never rendered into output.
    pub id: String,
    /// The user action to automate.
    pub action: String,
    /// Optional assertion checked after the action. Empty means none.
    pub expected: String,
}

impl TestStep {
    /// Create a step with a freshly generated id.
    pub fn new(action: &str, expected: &str) -> Self {
        Self {
            id: entry_id(),
            action: action.to_string(),
            expected: expected.to_string(),
        }
    }
}

/// A named element selector in the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// Generation-time unique token; never rendered into output.
    pub id: String,
    /// Descriptive element name (e.g. "loginBtn").
    pub name: String,
    /// CSS or XPath selector string.
    pub selector: String,
}

impl Selector {
    /// Create a selector with a freshly generated id.
    pub fn new(name: &str, selector: &str) -> Self {
        Self {
            id: entry_id(),
            name: name.to_string(),
            selector: selector.to_string(),
        }
    }
}

/// Which field of a [`TestStep`] an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    /// The action text.
    Action,
    /// The assertion text.
    Expected,
}

/// Which field of a [`Selector`] an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    /// The element name.
    Name,
    /// The selector string.
    Selector,
}

/// The complete test configuration for one wizard session.
///
/// Mutated in place by user edits, demo loads, imports, and the data
/// generator; read in full by the prompt compiler on every compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfiguration {
    /// Selected automation framework.
    pub framework: Framework,
    /// Target base URL. Empty renders as "N/A".
    pub url: String,
    /// Test case name. Empty renders as "Automated Test".
    pub test_name: String,
    /// Short scenario description. Empty is omitted from output.
    pub description: String,
    /// Ordered test steps. Never empty after initialization.
    pub steps: Vec<TestStep>,
    /// Ordered element selectors. May be empty.
    pub selectors: Vec<Selector>,
    /// Target browser.
    pub browser: Browser,
    /// Viewport preset.
    pub viewport: Viewport,
    /// Network profile.
    pub network: NetworkProfile,
    /// Whether to request the Page Object Model pattern.
    pub use_page_objects: bool,
    /// Whether to request BDD/Gherkin output.
    pub is_bdd: bool,
    /// Java test runner; rendered only for Java-family frameworks.
    pub test_runner: TestRunner,
    /// Free-text coding standards, rendered verbatim.
    pub coding_standards: String,
    /// Newline-delimited test data buffer.
    pub test_data: String,
}

impl Default for TestConfiguration {
    fn default() -> Self {
        Self {
            framework: Framework::PlaywrightPython,
            url: String::new(),
            test_name: String::new(),
            description: String::new(),
            steps: vec![TestStep::new("Navigate to the home page", "")],
            selectors: vec![Selector::new("loginBtn", "#login-button")],
            browser: Browser::Chromium,
            viewport: Viewport::Desktop1280,
            network: NetworkProfile::NoThrottling,
            use_page_objects: true,
            is_bdd: false,
            test_runner: TestRunner::JUnit5,
            coding_standards: DEFAULT_CODING_STANDARDS.to_string(),
            test_data: String::new(),
        }
    }
}

impl TestConfiguration {
    /// Append a blank step and return its id.
    pub fn add_step(&mut self) -> String {
        let step = TestStep::new("", "");
        let id = step.id.clone();
        self.steps.push(step);
        id
    }

    /// Replace one field of the step matching `id`. Unknown ids are a no-op.
    pub fn update_step(&mut self, id: &str, field: StepField, value: &str) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.id == id) {
            match field {
                StepField::Action => step.action = value.to_string(),
                StepField::Expected => step.expected = value.to_string(),
            }
        }
    }

    /// Remove the step matching `id`. Refused (returns `false`) when only one
    /// step remains; the step list never becomes empty.
    pub fn remove_step(&mut self, id: &str) -> bool {
        if self.steps.len() <= 1 {
            return false;
        }
        let before = self.steps.len();
        self.steps.retain(|s| s.id != id);
        self.steps.len() < before
    }

    /// Append a blank selector and return its id.
    pub fn add_selector(&mut self) -> String {
        let selector = Selector::new("", "");
        let id = selector.id.clone();
        self.selectors.push(selector);
        id
    }

    /// Replace one field of the selector matching `id`. Unknown ids are a
    /// no-op.
    pub fn update_selector(&mut self, id: &str, field: SelectorField, value: &str) {
        if let Some(entry) = self.selectors.iter_mut().find(|s| s.id == id) {
            match field {
                SelectorField::Name => entry.name = value.to_string(),
                SelectorField::Selector => entry.selector = value.to_string(),
            }
        }
    }

    /// Remove the selector matching `id`. Returns `true` when an entry was
    /// removed. The selector list may become empty.
    pub fn remove_selector(&mut self, id: &str) -> bool {
        let before = self.selectors.len();
        self.selectors.retain(|s| s.id != id);
        self.selectors.len() < before
    }

    /// Append `value` to the test-data buffer as a new line, or as the sole
    /// content when the buffer is empty. Existing content is never touched.
    pub fn append_test_data(&mut self, value: &str) {
        if !self.test_data.is_empty() {
            self.test_data.push('\n');
        }
        self.test_data.push_str(value);
    }
}

fn entry_id() -> String {
    Uuid::new_v4().to_string()
}
