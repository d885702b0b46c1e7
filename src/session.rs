//! Per-field text state for a presentation layer.

use indexmap::IndexMap;
use serde::Serialize;

use crate::engine;
use crate::error::{XlateError, Result};
use crate::transform::Registry;
use crate::types::DecodePolicy;

/// Text placed in the reference field when a session starts.
pub const INITIAL_TEXT: &str = "Hello, World!";

pub const MSG_TRANSLATED: &str = "Translated to all formats";
pub const MSG_EMPTY: &str = "Please enter some text first";

/// Transient message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub id: &'static str,
    pub message: String,
    pub is_error: bool,
}

impl Status {
    fn ok(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            is_error: false,
        }
    }

    fn error(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            is_error: true,
        }
    }
}

/// The current text of every field, one per transform.
#[derive(Debug)]
pub struct Session<'a> {
    registry: &'a Registry,
    policy: DecodePolicy,
    fields: IndexMap<&'static str, String>,
}

impl<'a> Session<'a> {
    /// Starts a session with [`INITIAL_TEXT`] in the reference field,
    /// already broadcast to every other field.
    pub fn new(registry: &'a Registry) -> Result<Self> {
        Self::with_policy(registry, DecodePolicy::default())
    }

    pub fn with_policy(registry: &'a Registry, policy: DecodePolicy) -> Result<Self> {
        let mut session = Self::empty(registry, policy);
        let reference = registry.reference().id();
        session.fields.insert(reference, INITIAL_TEXT.to_string());
        let result = engine::broadcast_with(registry, reference, INITIAL_TEXT, policy)?;
        session.fields.extend(result.outputs);
        Ok(session)
    }

    /// A session with every field blank.
    pub fn empty(registry: &'a Registry, policy: DecodePolicy) -> Self {
        let fields = registry.iter().map(|t| (t.id(), String::new())).collect();
        Self {
            registry,
            policy,
            fields,
        }
    }

    pub fn field(&self, id: &str) -> Result<&str> {
        let transform = self.registry.get(id)?;
        Ok(self.fields.get(transform.id()).map(String::as_str).unwrap_or_default())
    }

    /// Replaces a field's text. Fields of encode-only transforms are read-only.
    pub fn set_field(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let transform = self.registry.get(id)?;
        if !transform.supports_decode_source() {
            return Err(XlateError::not_decode_source(transform.id()));
        }
        self.fields.insert(transform.id(), text.into());
        Ok(())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(id, text)| (*id, text.as_str()))
    }

    /// Broadcasts the current text of `id` into every other field.
    ///
    /// Empty input and halted decodes come back as an error status with no
    /// field written; using an encode-only field as the source is an error.
    pub fn translate_from(&mut self, id: &str) -> Result<Status> {
        let source = self.registry.get(id)?.id();
        let text = self.field(source)?.to_string();

        match engine::broadcast_with(self.registry, source, &text, self.policy) {
            Ok(result) => {
                self.fields.extend(result.outputs);
                Ok(Status::ok(source, MSG_TRANSLATED))
            }
            Err(XlateError::EmptyInput) => Ok(Status::error(source, MSG_EMPTY)),
            Err(XlateError::DecodeFailed { placeholder, .. }) => Ok(Status::error(source, placeholder)),
            Err(e) => Err(e),
        }
    }
}
