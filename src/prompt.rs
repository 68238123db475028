//! The prompt compiler: a pure function from [`TestConfiguration`] to a
//! Markdown document.
//!
//! The document is recomputed in full on every call; there is no caching and
//! no incremental assembly. Compilation is deterministic, so an unchanged
//! configuration always yields byte-identical output.

use crate::model::{Framework, Language, Library, TestConfiguration};

/// Compile `config` into the Markdown prompt handed to the LLM.
///
/// Section order is fixed: title, project context, environment, scenario,
/// optional selector table, optional test-data block, requirements. Optional
/// sections are omitted entirely rather than rendered empty.
pub fn compile(config: &TestConfiguration) -> String {
    let mut doc = String::new();

    doc.push_str(&format!(
        "Generate a precise automated web UI test using {}.\n",
        config.framework
    ));

    doc.push('\n');
    doc.push_str("## Project Context\n");
    doc.push_str(&format!(
        "- **Base URL**: {}\n",
        or_default(&config.url, "N/A")
    ));
    doc.push_str(&format!(
        "- **Test Name**: {}\n",
        or_default(&config.test_name, "Automated Test")
    ));
    doc.push_str(&format!(
        "- **Page Object Model**: {}\n",
        if config.use_page_objects {
            "Yes, please follow POM pattern"
        } else {
            "No, keep it simple"
        }
    ));
    doc.push_str(&format!(
        "- **BDD/Gherkin Support**: {}\n",
        if config.is_bdd {
            "Yes, generate a Gherkin .feature file and step definitions"
        } else {
            "No"
        }
    ));
    if config.framework.language() == Language::Java {
        doc.push_str(&format!("- **Test Runner**: {}\n", config.test_runner));
    }
    doc.push_str(&format!(
        "- **Coding Standards**: {}\n",
        config.coding_standards
    ));

    doc.push('\n');
    doc.push_str("## Environment & Browser Configuration\n");
    doc.push_str(&format!("- **Browser**: {}\n", config.browser));
    doc.push_str(&format!("- **Viewport**: {}\n", config.viewport));
    doc.push_str(&format!("- **Network Profile**: {}\n", config.network));

    doc.push('\n');
    doc.push_str("## Test Scenario\n");
    if !config.description.is_empty() {
        doc.push_str(&format!("**Description**: {}\n", config.description));
        doc.push('\n');
    }
    doc.push_str("### Steps to Automate:\n");
    for (index, step) in config.steps.iter().enumerate() {
        let number = index.saturating_add(1);
        if step.expected.is_empty() {
            doc.push_str(&format!("{number}. {}\n", step.action));
        } else {
            doc.push_str(&format!(
                "{number}. {} (Assertion: {})\n",
                step.action, step.expected
            ));
        }
    }

    if !config.selectors.is_empty() {
        doc.push('\n');
        doc.push_str("### Element Selectors Reference:\n");
        doc.push_str("| Element Name | Selector |\n");
        doc.push_str("|--------------|----------|\n");
        for entry in &config.selectors {
            doc.push_str(&format!(
                "| {} | {} |\n",
                or_default(&entry.name, "N/A"),
                or_default(&entry.selector, "N/A")
            ));
        }
    }

    if !config.test_data.is_empty() {
        doc.push('\n');
        doc.push_str("### Test Data:\n");
        doc.push_str("```\n");
        doc.push_str(&config.test_data);
        doc.push_str("\n```\n");
    }

    doc.push('\n');
    doc.push_str("## Requirements:\n");
    doc.push_str("1. Use reliable selectors (prioritize ID, Name, Data-Test-ID, then CSS/XPath).\n");
    doc.push_str("2. Include necessary imports and setup.\n");
    doc.push_str(&format!("3. {}\n", requirement_three(config.framework)));
    doc.push_str("4. Provide clean, well-commented code.\n");
    if let Some(line) = requirement_five(config.framework) {
        doc.push_str(&format!("5. {line}\n"));
    }

    doc
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

// Java is checked before Cypress and C#; the order mirrors the runner line
// gating above.
fn requirement_three(framework: Framework) -> &'static str {
    if framework.language() == Language::Java {
        "Ensure thread-safety and proper teardown."
    } else if framework.library() == Library::Cypress {
        "Use Cypress best practices and custom commands if needed."
    } else if framework.language() == Language::CSharp {
        "Follow C# coding conventions and use NUnit or xUnit assertions."
    } else {
        "Use async/await where applicable."
    }
}

fn requirement_five(framework: Framework) -> Option<&'static str> {
    match framework.library() {
        Library::Cypress => Some("Utilize Cypress's built-in assertions and auto-retry logic."),
        Library::Playwright => Some("Utilize built-in auto-waiting features."),
        Library::Selenium | Library::Selenide => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Selector, TestStep};

    use super::*;

    fn config() -> TestConfiguration {
        TestConfiguration::default()
    }

    #[test]
    fn test_default_document_layout() {
        let doc = compile(&config());
        assert!(doc.starts_with("Generate a precise automated web UI test using Playwright Python.\n"));
        assert!(doc.contains("\n## Project Context\n"));
        assert!(doc.contains("- **Base URL**: N/A\n"));
        assert!(doc.contains("- **Test Name**: Automated Test\n"));
        assert!(doc.contains("- **Page Object Model**: Yes, please follow POM pattern\n"));
        assert!(doc.contains("- **BDD/Gherkin Support**: No\n"));
        assert!(doc.contains("- **Browser**: Chromium\n"));
        assert!(doc.contains("- **Viewport**: Desktop (1280x720)\n"));
        assert!(doc.contains("- **Network Profile**: No Throttling\n"));
        assert!(doc.contains("### Steps to Automate:\n1. Navigate to the home page\n"));
        assert!(doc.contains("| loginBtn | #login-button |\n"));
        assert!(doc.contains("## Requirements:\n"));
        assert!(doc.ends_with("5. Utilize built-in auto-waiting features.\n"));
    }

    #[test]
    fn test_compile_is_idempotent() {
        let config = config();
        assert_eq!(compile(&config), compile(&config));
    }

    #[test]
    fn test_runner_line_only_for_java() {
        let mut config = config();
        config.framework = Framework::SeleniumJava;
        assert!(compile(&config).contains("- **Test Runner**: JUnit 5\n"));

        config.framework = Framework::SeleniumCSharp;
        assert!(!compile(&config).contains("Test Runner"));

        config.framework = Framework::PlaywrightJava;
        config.test_runner = crate::model::TestRunner::TestNG;
        assert!(compile(&config).contains("- **Test Runner**: TestNG\n"));
    }

    #[test]
    fn test_description_omitted_when_empty() {
        let mut config = config();
        assert!(!compile(&config).contains("**Description**"));
        config.description = "Checks the login flow.".to_string();
        assert!(compile(&config).contains("**Description**: Checks the login flow.\n"));
    }

    #[test]
    fn test_assertion_suffix_only_when_expected_set() {
        let mut config = config();
        config.steps = vec![
            TestStep::new("Open the page", ""),
            TestStep::new("Click login", "Dashboard appears"),
        ];
        let doc = compile(&config);
        assert!(doc.contains("1. Open the page\n"));
        assert!(doc.contains("2. Click login (Assertion: Dashboard appears)\n"));
    }

    #[test]
    fn test_selector_table_omitted_when_empty() {
        let mut config = config();
        config.selectors.clear();
        let doc = compile(&config);
        assert!(!doc.contains("Element Selectors Reference"));
        assert!(!doc.contains("| Element Name | Selector |"));
    }

    #[test]
    fn test_selector_table_rows_in_insertion_order() {
        let mut config = config();
        config.selectors = vec![
            Selector::new("second", ".b"),
            Selector::new("first", ".a"),
            Selector::new("", ""),
        ];
        let doc = compile(&config);
        let header = doc.find("| Element Name | Selector |").expect("table header");
        let second = doc.find("| second | .b |").expect("row for 'second'");
        let first = doc.find("| first | .a |").expect("row for 'first'");
        let blank = doc.find("| N/A | N/A |").expect("row with N/A defaults");
        assert!(header < second && second < first && first < blank);
    }

    #[test]
    fn test_test_data_block_omitted_when_empty() {
        let mut config = config();
        assert!(!compile(&config).contains("### Test Data:"));
        config.test_data = "user1, pass123\nuser2, pass456".to_string();
        let doc = compile(&config);
        assert!(doc.contains("### Test Data:\n```\nuser1, pass123\nuser2, pass456\n```\n"));
    }

    #[test]
    fn test_requirement_three_per_family() {
        let mut config = config();

        config.framework = Framework::SeleniumJava;
        assert!(compile(&config).contains("3. Ensure thread-safety and proper teardown.\n"));

        config.framework = Framework::CypressJavaScript;
        assert!(compile(&config)
            .contains("3. Use Cypress best practices and custom commands if needed.\n"));

        config.framework = Framework::SeleniumCSharp;
        assert!(compile(&config)
            .contains("3. Follow C# coding conventions and use NUnit or xUnit assertions.\n"));

        config.framework = Framework::SeleniumPython;
        assert!(compile(&config).contains("3. Use async/await where applicable.\n"));
    }

    #[test]
    fn test_requirement_five_per_family() {
        let mut config = config();

        config.framework = Framework::PlaywrightJavaScript;
        assert!(compile(&config).contains("5. Utilize built-in auto-waiting features.\n"));

        config.framework = Framework::CypressJavaScript;
        assert!(compile(&config)
            .contains("5. Utilize Cypress's built-in assertions and auto-retry logic.\n"));

        config.framework = Framework::SeleniumPython;
        assert!(!compile(&config).contains("\n5. "));

        config.framework = Framework::SelenideJava;
        assert!(!compile(&config).contains("\n5. "));
    }
}
