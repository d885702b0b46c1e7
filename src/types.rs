use serde::Serialize;
use std::path::PathBuf;

use crate::transform::Registry;

pub struct Context {
    pub registry: &'static Registry,
    pub verbosity: Verbosity,
    pub policy: DecodePolicy,
}

impl Context {
    pub fn new(registry: &'static Registry, verbosity: Verbosity, policy: DecodePolicy) -> Self {
        Self {
            registry,
            verbosity,
            policy,
        }
    }
}

/// What a broadcast does when the source field fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// The decode placeholder becomes the plain text and is encoded everywhere.
    #[default]
    Propagate,
    /// Stop and report the failure without producing any outputs.
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => InputSource::Literal(s.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub is_reference: bool,
    pub supports_decode_source: bool,
    pub description: &'static str,
}
