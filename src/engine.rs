//! Validation engine: mode dispatch, the rule pipeline and the fail
//! handler

use tracing::debug;

use crate::config::{Config, Mode, Output};
use crate::error::{EngineError, EngineResult};
use crate::feedback::{Feedback, RenderRequest};
use crate::field::Field;
use crate::render::{self, CleanupScope, Renderer, TriggerEvent};
use crate::selector::{self, Target};
use crate::stages;

/// The validation engine. Holds a [`Config`] and runs the pipeline —
/// or a single named stage — against a target, producing a
/// [`Feedback`].
///
/// Each call builds its own accumulator, so concurrent runs over
/// disjoint targets are independent; runs sharing a rendering anchor
/// must not overlap.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the configured mode against `target`.
    ///
    /// `renderer` is required when the output shape is
    /// [`Output::Render`] or the mode is presentation-only (markup,
    /// cleanup). `event` is required only when `stop_on_fail` is set
    /// and the fail handler fires.
    ///
    /// Rule failures are not errors; they come back in the
    /// [`Feedback`]. `Err` means the caller broke the contract
    /// (missing collaborator, invalid explicit pattern).
    pub fn validate<'a>(
        &'a self,
        target: Target<'a>,
        renderer: Option<&'a mut dyn Renderer>,
        event: Option<&'a mut dyn TriggerEvent>,
    ) -> EngineResult<Feedback> {
        let needs_renderer = self.config.output == Output::Render
            || matches!(self.config.mode, Mode::Markup | Mode::Cleanup);
        if needs_renderer && renderer.is_none() {
            return Err(EngineError::MissingRenderer);
        }

        let (fields, single) = target.into_parts();
        let selected = selector::select(fields, single);
        debug!(mode = ?self.config.mode, fields = selected.len(), "starting validation run");

        let mut run = Run {
            config: &self.config,
            fields,
            selected,
            feedback: Feedback::new(),
            renderer,
            event,
        };
        run.dispatch(self.config.mode)?;
        Ok(run.feedback)
    }
}

/// State of one validation run: the field list, the scan-ordered
/// selection, and the shared feedback accumulator every stage writes
/// into.
struct Run<'a> {
    config: &'a Config,
    fields: &'a mut [Field],
    selected: Vec<usize>,
    feedback: Feedback,
    renderer: Option<&'a mut dyn Renderer>,
    event: Option<&'a mut dyn TriggerEvent>,
}

impl Run<'_> {
    fn dispatch(&mut self, mode: Mode) -> EngineResult<()> {
        match mode {
            Mode::Full => self.full(),
            Mode::Required => self.required(),
            Mode::Format => self.format(),
            Mode::Match => self.matches(),
            Mode::Fail => self.fail(),
            Mode::Markup => {
                self.markup();
                Ok(())
            }
            Mode::Cleanup => {
                self.cleanup(CleanupScope::All);
                Ok(())
            }
        }
    }

    /// Full pipeline. Each stage runs only if every earlier stage
    /// passed; a fully successful run ends in a full cleanup.
    fn full(&mut self) -> EngineResult<()> {
        self.required()?;
        if !self.feedback.success {
            return Ok(());
        }
        self.format()?;
        if !self.feedback.success {
            return Ok(());
        }
        self.matches()?;
        if self.feedback.success {
            self.cleanup(CleanupScope::All);
        }
        Ok(())
    }

    fn required(&mut self) -> EngineResult<()> {
        stages::required::run(self.fields, &self.selected, &mut self.feedback);
        self.fail_if_needed()
    }

    fn format(&mut self) -> EngineResult<()> {
        stages::format::run(self.fields, &self.selected, &mut self.feedback)?;
        self.fail_if_needed()
    }

    fn matches(&mut self) -> EngineResult<()> {
        stages::matching::run(self.fields, &self.selected, &mut self.feedback);
        self.fail_if_needed()
    }

    fn fail_if_needed(&mut self) -> EngineResult<()> {
        if self.feedback.success {
            Ok(())
        } else {
            self.fail()
        }
    }

    /// Fail handler: cancel the triggering event when configured to,
    /// and in render output strip any stale error list before building
    /// fresh markup.
    fn fail(&mut self) -> EngineResult<()> {
        if self.config.stop_on_fail {
            match self.event.as_deref_mut() {
                Some(event) => event.prevent_default(),
                None => return Err(EngineError::MissingEvent),
            }
        }
        if self.config.output == Output::Render {
            self.cleanup(CleanupScope::Fields);
            self.markup();
        }
        Ok(())
    }

    fn markup(&mut self) {
        if let Some(renderer) = self.renderer.as_deref_mut() {
            let request = RenderRequest {
                status: self.feedback.status,
                fields: &self.feedback.error_fields,
            };
            render::markup(renderer, self.config, &request);
        }
    }

    fn cleanup(&mut self, scope: CleanupScope) {
        if let Some(renderer) = self.renderer.as_deref_mut() {
            render::cleanup(renderer, self.config, scope, self.fields, &self.selected);
        }
    }
}
