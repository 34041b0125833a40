//! Walkthrough of the validation pipeline against a signup form

use std::collections::HashMap;

use greenlight::{
    Config, Engine, EngineResult, Field, Mode, Output, Renderer, Target, TriggerEvent,
};

/// Renderer that prints the presentation requests it receives.
#[derive(Default)]
struct ConsoleRenderer {
    panels: HashMap<String, bool>,
    labels: HashMap<String, String>,
}

impl ConsoleRenderer {
    fn with_label(mut self, field_id: &str, label: &str) -> Self {
        self.labels.insert(field_id.to_string(), label.to_string());
        self
    }
}

impl Renderer for ConsoleRenderer {
    fn has_panel(&self, anchor: &str) -> bool {
        self.panels.get(anchor).copied().unwrap_or(false)
    }

    fn create_panel(&mut self, anchor: &str) {
        println!("  [render] create error panel under #{}", anchor);
        self.panels.insert(anchor.to_string(), true);
    }

    fn remove_panel(&mut self, anchor: &str) {
        if self.panels.remove(anchor).is_some() {
            println!("  [render] remove error panel under #{}", anchor);
        }
    }

    fn add_panel_class(&mut self, anchor: &str, class: &str) {
        println!("  [render] panel #{} gets class `{}`", anchor, class);
    }

    fn set_message(&mut self, anchor: &str, message: &str) {
        println!("  [render] panel #{} message: {}", anchor, message);
    }

    fn create_list(&mut self, anchor: &str) {
        println!("  [render] panel #{} gets an error list", anchor);
    }

    fn append_list_item(&mut self, anchor: &str, label: &str) {
        println!("  [render] panel #{} list item: {}", anchor, label);
    }

    fn remove_list(&mut self, anchor: &str) {
        println!("  [render] panel #{} error list removed", anchor);
    }

    fn add_container_class(&mut self, field_id: &str, class: &str) {
        println!("  [render] field `{}` container gets class `{}`", field_id, class);
    }

    fn remove_container_class(&mut self, _field_id: &str, _class: &str) {}

    fn label_for(&self, field_id: &str) -> Option<String> {
        self.labels.get(field_id).cloned()
    }
}

/// Submit event stub.
#[derive(Default)]
struct SubmitEvent {
    cancelled: bool,
}

impl TriggerEvent for SubmitEvent {
    fn prevent_default(&mut self) {
        self.cancelled = true;
        println!("  [event] default action cancelled");
    }
}

fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("greenlight demo");
    println!("===============\n");

    demo_data_mode()?;
    demo_render_mode()?;
    demo_single_stage()?;

    Ok(())
}

fn signup_form() -> Vec<Field> {
    vec![
        Field::text("name").required().label("Name"),
        Field::email("email").required().value("ada@@example").label("Email"),
        Field::tel("phone").value("(555) 867-5309 x42").label("Phone"),
        Field::password("password").value("hunter2").label("Password"),
        Field::password("confirm")
            .value("hunter3")
            .match_field("password")
            .label("Confirm password"),
    ]
}

fn demo_data_mode() -> EngineResult<()> {
    println!("1. Data mode, full pipeline");
    println!("---------------------------");

    let engine = Engine::new(Config::default());
    let mut fields = signup_form();
    let feedback = engine.validate(Target::Container(&mut fields), None, None)?;
    println!(
        "  missing required name -> {}",
        serde_json::to_string(&feedback).expect("feedback serializes")
    );

    fields[0].value = "Ada Lovelace".to_string();
    let feedback = engine.validate(Target::Container(&mut fields), None, None)?;
    println!(
        "  bad email format      -> status {}, fields {:?}\n",
        feedback.status,
        feedback.error_fields.values().map(|f| f.id.as_str()).collect::<Vec<_>>()
    );
    Ok(())
}

fn demo_render_mode() -> EngineResult<()> {
    println!("2. Render mode with field listing and event cancellation");
    println!("---------------------------------------------------------");

    let engine = Engine::new(
        Config::default()
            .output(Output::Render)
            .anchor("signup")
            .list_fields(true)
            .stop_on_fail(true)
            .match_message("Password and confirmation must match."),
    );

    let mut renderer = ConsoleRenderer::default()
        .with_label("password", "Password")
        .with_label("confirm", "Confirm password");
    let mut event = SubmitEvent::default();

    let mut fields = signup_form();
    fields[0].value = "Ada Lovelace".to_string();
    fields[1].value = "ada@example.com".to_string();

    let feedback = engine.validate(
        Target::Container(&mut fields),
        Some(&mut renderer),
        Some(&mut event),
    )?;
    println!("  -> status {}, cancelled {}\n", feedback.status, event.cancelled);
    Ok(())
}

fn demo_single_stage() -> EngineResult<()> {
    println!("3. Standalone stage via a mode string");
    println!("-------------------------------------");

    let mode = Mode::parse("format")?;
    let engine = Engine::new(Config::default().mode(mode));

    let mut card = Field::text("card")
        .class("credit-card-number")
        .value("4532 0151 1283 0367");
    let feedback = engine.validate(Target::Input(&mut card), None, None)?;
    println!("  luhn check on a bad card number -> success {}", feedback.success);

    match Mode::parse("bogus") {
        Ok(_) => println!("  mode `bogus` unexpectedly parsed"),
        Err(error) => println!("  mode `bogus` -> {}", error),
    }
    Ok(())
}
