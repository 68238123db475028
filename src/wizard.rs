//! The wizard stage controller.
//!
//! Owns the [`TestConfiguration`] for one session, tracks the current stage,
//! and applies every bulk operation: demo loading, resetting, data
//! generation, file imports, and prompt copying. Operations return the side
//! effects they request ([`Effect`] values) instead of performing them; the
//! host executes notifications and clipboard writes fire-and-forget.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::datagen::{self, DataKind};
use crate::import::{self, ImportError, ImportEvent, ImportTarget, SelectorImport};
use crate::model::{Framework, TestConfiguration};
use crate::templates::{self, ScenarioTemplate};
use crate::{corpus, prompt};

/// First wizard stage.
pub const STAGE_MIN: u8 = 1;
/// Last wizard stage.
pub const STAGE_MAX: u8 = 6;

/// How long [`Wizard::is_copied`] reports true after a copy.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// How a notice should be presented by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine confirmation.
    Info,
    /// Something went wrong; the user should look.
    Error,
}

/// Human-readable notification for the host's toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short headline.
    pub title: String,
    /// One-sentence body.
    pub body: String,
    /// Presentation severity.
    pub severity: Severity,
}

impl Notice {
    fn info(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
            severity: Severity::Info,
        }
    }

    fn error(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
            severity: Severity::Error,
        }
    }
}

/// A side-effect request emitted by a wizard operation.
///
/// The core never waits on or inspects the outcome of an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a notification.
    Notify(Notice),
    /// Write text to the clipboard.
    CopyToClipboard(String),
}

/// One wizard session: the current stage, the live configuration, and the
/// transient copied flag.
#[derive(Debug)]
pub struct Wizard {
    stage: u8,
    config: TestConfiguration,
    copied_at: Option<Instant>,
}

impl Wizard {
    /// Create a session at stage 1 with the default configuration.
    pub fn new() -> Self {
        Self {
            stage: STAGE_MIN,
            config: TestConfiguration::default(),
            copied_at: None,
        }
    }

    /// The current stage, always within `[STAGE_MIN, STAGE_MAX]`.
    pub fn stage(&self) -> u8 {
        self.stage
    }

    /// Move one stage forward, clamping at [`STAGE_MAX`].
    pub fn advance(&mut self) {
        self.stage = self.stage.saturating_add(1).min(STAGE_MAX);
    }

    /// Move one stage back, clamping at [`STAGE_MIN`].
    pub fn retreat(&mut self) {
        self.stage = self.stage.saturating_sub(1).max(STAGE_MIN);
    }

    /// Read access to the live configuration.
    pub fn config(&self) -> &TestConfiguration {
        &self.config
    }

    /// Mutable access for direct field edits. The stage gates what the host
    /// presents for editing, never what is stored or compiled.
    pub fn config_mut(&mut self) -> &mut TestConfiguration {
        &mut self.config
    }

    /// Overwrite the scenario fields (`framework`, `url`, `test_name`,
    /// `description`, `steps`, `selectors`, `coding_standards`) from the demo
    /// catalog. Environment, advanced options, test data, and the current
    /// stage are untouched.
    pub fn load_demo(&mut self, framework: Framework) -> Vec<Effect> {
        let demo = corpus::demo_scenario(framework);
        self.config.framework = framework;
        self.config.url = demo.url;
        self.config.test_name = demo.test_name;
        self.config.description = demo.description;
        self.config.steps = demo.steps;
        self.config.selectors = demo.selectors;
        self.config.coding_standards = demo.coding_standards;
        info!(framework = %framework, "demo scenario loaded");
        vec![Effect::Notify(Notice::info(
            "Demo Scenario Loaded",
            format!("Successfully loaded a finished example for {framework}."),
        ))]
    }

    /// Restore every configuration field to its default and force the stage
    /// back to 1.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.config = TestConfiguration::default();
        self.stage = STAGE_MIN;
        self.copied_at = None;
        info!("wizard reset to defaults");
        vec![Effect::Notify(Notice::info(
            "Wizard Reset",
            "All inputs have been cleared.".to_string(),
        ))]
    }

    /// Generate one synthetic value of `kind` and append it to the test-data
    /// buffer.
    pub fn generate_data(&mut self, kind: DataKind) -> Vec<Effect> {
        let value = datagen::generate(kind);
        self.config.append_test_data(&value);
        debug!(kind = %kind, "synthetic test data appended");
        vec![Effect::Notify(Notice::info(
            "Data Generated",
            format!("Added a random {kind} to test data."),
        ))]
    }

    /// Apply an upload delivered by the host.
    ///
    /// Data uploads replace the test-data buffer verbatim. Selector uploads
    /// replace the selector list when the document decodes to an object or
    /// array, raise a format-error notice when it is malformed, and are
    /// ignored for any other decoded shape.
    pub fn apply_import(&mut self, event: &ImportEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event.target {
            ImportTarget::Data => {
                self.config.test_data = event.content.clone();
                info!(file = %event.file_name, "test data replaced from upload");
            }
            ImportTarget::Selectors => match import::parse_selectors(&event.content) {
                Ok(SelectorImport::Replace(selectors)) => {
                    info!(
                        file = %event.file_name,
                        count = selectors.len(),
                        "selector list replaced from upload"
                    );
                    self.config.selectors = selectors;
                }
                Ok(SelectorImport::Unsupported) => {
                    debug!(file = %event.file_name, "selector upload had an unsupported shape; ignored");
                }
                Err(error @ ImportError::Malformed(_)) => {
                    warn!(file = %event.file_name, %error, "selector upload rejected");
                    effects.push(Effect::Notify(Notice::error(
                        "Format Error",
                        "Could not parse selector file as JSON. Switching to manual input."
                            .to_string(),
                    )));
                }
            },
        }
        // The processed notice fires on every completion, including the
        // malformed path. Documented inconsistency; see DESIGN.md.
        effects.push(Effect::Notify(Notice::info(
            "File Uploaded",
            format!("{} has been processed successfully.", event.file_name),
        )));
        effects
    }

    /// Compile the current configuration into the Markdown prompt.
    pub fn prompt(&self) -> String {
        prompt::compile(&self.config)
    }

    /// Compile the prompt, request a clipboard write, and start the transient
    /// copied feedback window.
    pub fn copy_prompt(&mut self) -> Vec<Effect> {
        let document = prompt::compile(&self.config);
        debug!(bytes = document.len(), "prompt copied to clipboard");
        self.copied_at = Some(Instant::now());
        vec![
            Effect::CopyToClipboard(document),
            Effect::Notify(Notice::info(
                "Prompt Copied!",
                "The LLM prompt has been copied to your clipboard.".to_string(),
            )),
        ]
    }

    /// Render a template's steps as text, request a clipboard write, and
    /// start the transient copied feedback window.
    pub fn copy_template_steps(&mut self, template: &ScenarioTemplate) -> Vec<Effect> {
        let text = templates::steps_text(template);
        debug!(template = template.id, "template steps copied to clipboard");
        self.copied_at = Some(Instant::now());
        vec![
            Effect::CopyToClipboard(text),
            Effect::Notify(Notice::info(
                "Steps Copied",
                "You can now paste these into the Automation Wizard.".to_string(),
            )),
        ]
    }

    /// Whether a copy happened within the last two seconds. Transient user
    /// feedback only; nothing reads this for correctness.
    pub fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_FEEDBACK)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Browser, NetworkProfile, TestRunner, Viewport};

    use super::*;

    fn notice_titles(effects: &[Effect]) -> Vec<String> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Notify(notice) => Some(notice.title.clone()),
                Effect::CopyToClipboard(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_stage_clamps_at_both_ends() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.stage(), 1);
        wizard.retreat();
        assert_eq!(wizard.stage(), 1);
        for _ in 0..10 {
            wizard.advance();
        }
        assert_eq!(wizard.stage(), 6);
        wizard.retreat();
        assert_eq!(wizard.stage(), 5);
    }

    #[test]
    fn test_load_demo_overwrites_scenario_fields_only() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.config_mut().browser = Browser::Firefox;
        wizard.config_mut().viewport = Viewport::IPhone13;
        wizard.config_mut().network = NetworkProfile::Slow3G;
        wizard.config_mut().is_bdd = true;
        wizard.config_mut().test_runner = TestRunner::TestNG;
        wizard.config_mut().test_data = "kept".to_string();

        let effects = wizard.load_demo(Framework::SeleniumJava);

        let config = wizard.config();
        assert_eq!(config.framework, Framework::SeleniumJava);
        assert_eq!(config.url, "https://opensource-demo.orangehrmlive.com/");
        assert_eq!(config.test_name, "Admin Dashboard Navigation");
        assert_eq!(config.steps.len(), 3);
        assert_eq!(config.selectors.len(), 2);
        // Untouched by a demo load.
        assert_eq!(config.browser, Browser::Firefox);
        assert_eq!(config.viewport, Viewport::IPhone13);
        assert_eq!(config.network, NetworkProfile::Slow3G);
        assert!(config.is_bdd);
        assert_eq!(config.test_runner, TestRunner::TestNG);
        assert_eq!(config.test_data, "kept");
        assert_eq!(wizard.stage(), 2);

        assert_eq!(notice_titles(&effects), vec!["Demo Scenario Loaded"]);
    }

    #[test]
    fn test_reset_restores_every_field_and_stage() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.advance();
        wizard.load_demo(Framework::CypressJavaScript);
        wizard.config_mut().test_data = "scratch".to_string();

        let effects = wizard.reset();

        assert_eq!(wizard.stage(), 1);
        assert_eq!(wizard.config().framework, Framework::PlaywrightPython);
        assert!(wizard.config().test_data.is_empty());
        assert_eq!(wizard.config().steps.len(), 1);
        assert_eq!(notice_titles(&effects), vec!["Wizard Reset"]);
    }

    #[test]
    fn test_reset_yields_the_default_prompt() {
        let mut wizard = Wizard::new();
        wizard.load_demo(Framework::SelenideJava);
        wizard.config_mut().is_bdd = true;
        wizard.reset();
        assert_eq!(wizard.prompt(), Wizard::new().prompt());
    }

    #[test]
    fn test_generate_data_appends_lines() {
        let mut wizard = Wizard::new();
        let effects = wizard.generate_data(DataKind::Name);
        assert_eq!(notice_titles(&effects), vec!["Data Generated"]);
        let first = wizard.config().test_data.clone();
        assert!(!first.is_empty());
        assert!(!first.contains('\n'));

        wizard.generate_data(DataKind::Email);
        let buffer = &wizard.config().test_data;
        assert!(buffer.starts_with(&first));
        assert_eq!(buffer.lines().count(), 2);
    }

    #[test]
    fn test_data_import_replaces_buffer() {
        let mut wizard = Wizard::new();
        wizard.config_mut().test_data = "old".to_string();
        let event = ImportEvent {
            file_name: "users.csv".to_string(),
            target: ImportTarget::Data,
            content: "user1, pass123\nuser2, pass456".to_string(),
        };
        let effects = wizard.apply_import(&event);
        assert_eq!(wizard.config().test_data, "user1, pass123\nuser2, pass456");
        assert_eq!(notice_titles(&effects), vec!["File Uploaded"]);
    }

    #[test]
    fn test_selector_import_replaces_list() {
        let mut wizard = Wizard::new();
        let event = ImportEvent {
            file_name: "selectors.json".to_string(),
            target: ImportTarget::Selectors,
            content: r##"{"a": "#a", "b": "#b"}"##.to_string(),
        };
        let effects = wizard.apply_import(&event);
        let selectors = &wizard.config().selectors;
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].name, "a");
        assert_eq!(selectors[0].selector, "#a");
        assert_eq!(selectors[1].name, "b");
        assert_eq!(selectors[1].selector, "#b");
        assert_eq!(notice_titles(&effects), vec!["File Uploaded"]);
    }

    #[test]
    fn test_malformed_selector_import_keeps_state() {
        let mut wizard = Wizard::new();
        let before = wizard.config().selectors.clone();
        let event = ImportEvent {
            file_name: "broken.json".to_string(),
            target: ImportTarget::Selectors,
            content: "not json".to_string(),
        };
        let effects = wizard.apply_import(&event);
        assert_eq!(wizard.config().selectors, before);
        assert_eq!(notice_titles(&effects), vec!["Format Error", "File Uploaded"]);
        let format_errors = effects
            .iter()
            .filter(|effect| {
                matches!(
                    effect,
                    Effect::Notify(notice) if notice.severity == Severity::Error
                )
            })
            .count();
        assert_eq!(format_errors, 1);
    }

    #[test]
    fn test_scalar_selector_import_is_ignored() {
        let mut wizard = Wizard::new();
        let before = wizard.config().selectors.clone();
        let event = ImportEvent {
            file_name: "scalar.json".to_string(),
            target: ImportTarget::Selectors,
            content: "42".to_string(),
        };
        let effects = wizard.apply_import(&event);
        assert_eq!(wizard.config().selectors, before);
        assert_eq!(notice_titles(&effects), vec!["File Uploaded"]);
    }

    #[test]
    fn test_copy_prompt_effects_and_flag() {
        let mut wizard = Wizard::new();
        assert!(!wizard.is_copied());
        let effects = wizard.copy_prompt();
        assert!(wizard.is_copied());
        assert_eq!(effects.len(), 2);
        match &effects[0] {
            Effect::CopyToClipboard(text) => assert_eq!(*text, wizard.prompt()),
            Effect::Notify(_) => panic!("expected the clipboard request first"),
        }
        assert_eq!(notice_titles(&effects), vec!["Prompt Copied!"]);
    }

    #[test]
    fn test_copy_template_steps() {
        let mut wizard = Wizard::new();
        let template = crate::templates::find("login-auth").expect("known template");
        let effects = wizard.copy_template_steps(template);
        assert!(wizard.is_copied());
        match &effects[0] {
            Effect::CopyToClipboard(text) => {
                assert!(text.starts_with("Scenario: Secure Login Workflow\n"));
            }
            Effect::Notify(_) => panic!("expected the clipboard request first"),
        }
        assert_eq!(notice_titles(&effects), vec!["Steps Copied"]);
    }

    #[test]
    fn test_import_applies_regardless_of_stage() {
        let mut wizard = Wizard::new();
        for _ in 0..5 {
            wizard.advance();
        }
        let event = ImportEvent {
            file_name: "late.json".to_string(),
            target: ImportTarget::Data,
            content: "arrived late".to_string(),
        };
        wizard.apply_import(&event);
        assert_eq!(wizard.config().test_data, "arrived late");
        assert_eq!(wizard.stage(), 6);
    }
}
