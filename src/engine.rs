//! Broadcast propagation: decode one field to plain text, re-encode it into
//! every other transform.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{XlateError, Result};
use crate::transform::{Registry, Transform};
use crate::types::DecodePolicy;

/// Outcome of one broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Broadcast {
    pub source: &'static str,
    /// Text every target was encoded from.
    pub plain_text: String,
    /// True when `plain_text` is the source's decode placeholder.
    pub decode_failed: bool,
    /// One entry per transform except the source, in catalog order.
    pub outputs: IndexMap<&'static str, String>,
}

/// Broadcasts `source_text` from `source_id` to every other transform,
/// propagating decode placeholders as plain text.
pub fn broadcast_from(registry: &Registry, source_id: &str, source_text: &str) -> Result<Broadcast> {
    broadcast_with(registry, source_id, source_text, DecodePolicy::Propagate)
}

pub fn broadcast_with(
    registry: &Registry,
    source_id: &str,
    source_text: &str,
    policy: DecodePolicy,
) -> Result<Broadcast> {
    let source = registry.get(source_id)?;
    if !source.supports_decode_source() {
        return Err(XlateError::not_decode_source(source.id()));
    }
    if source_text.trim().is_empty() {
        return Err(XlateError::EmptyInput);
    }

    let (plain_text, decode_failed) = canonicalize(source, source_text);
    if decode_failed && policy == DecodePolicy::Halt {
        return Err(XlateError::DecodeFailed {
            id: source.id().to_string(),
            placeholder: plain_text,
        });
    }

    let outputs = registry
        .iter()
        .filter(|target| target.id() != source.id())
        .map(|target| (target.id(), target.encode_text(&plain_text)))
        .collect();

    Ok(Broadcast {
        source: source.id(),
        plain_text,
        decode_failed,
        outputs,
    })
}

fn canonicalize(source: &dyn Transform, text: &str) -> (String, bool) {
    if source.is_reference() {
        return (text.to_string(), false);
    }
    match source.decode(text) {
        Ok(plain) => (plain, false),
        Err(e) => (e.placeholder().to_string(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ENCODE_FAILED;
    use crate::transform::{PlainText, Rot13};
    use crate::types::TransformMeta;
    use proptest::prelude::*;

    fn global() -> &'static Registry {
        Registry::global()
    }

    #[test]
    fn test_broadcast_hello_world_from_text() {
        let result = broadcast_from(global(), "text", "Hello, World!").unwrap();
        assert_eq!(result.source, "text");
        assert_eq!(result.plain_text, "Hello, World!");
        assert!(!result.decode_failed);
        assert_eq!(result.outputs["urlEncode"], "Hello%2C%20World!");
        assert_eq!(result.outputs["base64"], "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(result.outputs["hex"], "48 65 6c 6c 6f 2c 20 57 6f 72 6c 64 21");
        assert_eq!(result.outputs["rot13"], "Uryyb, Jbeyq!");
        assert_eq!(result.outputs["htmlEntities"], "Hello, World!");
        assert!(result.outputs["hashes"].starts_with("MD5: 65a8e27d8879283831b664bd8b7f0ad4"));
    }

    #[test]
    fn test_broadcast_from_base64() {
        let result = broadcast_from(global(), "base64", "SGVsbG8=").unwrap();
        assert_eq!(result.plain_text, "Hello");
        assert_eq!(result.outputs["text"], "Hello");
        assert_eq!(result.outputs["hex"], "48 65 6c 6c 6f");
        assert_eq!(result.outputs["decimal"], "72 101 108 108 111");
        assert_eq!(result.outputs["binary"], "01001000 01100101 01101100 01101100 01101111");
    }

    #[test]
    fn test_broadcast_propagates_decode_placeholder() {
        let result = broadcast_from(global(), "hex", "zz zz").unwrap();
        assert!(result.decode_failed);
        assert_eq!(result.plain_text, "Invalid hex");
        assert_eq!(result.outputs["text"], "Invalid hex");
        assert_eq!(result.outputs["urlEncode"], "Invalid%20hex");
        assert_eq!(result.outputs["base64"], "SW52YWxpZCBoZXg=");
        assert_eq!(result.outputs["rot13"], "Vainyvq urk");
    }

    #[test]
    fn test_broadcast_halt_policy_stops_on_decode_failure() {
        let err = broadcast_with(global(), "hex", "zz zz", DecodePolicy::Halt).unwrap_err();
        match err {
            XlateError::DecodeFailed { id, placeholder } => {
                assert_eq!(id, "hex");
                assert_eq!(placeholder, "Invalid hex");
            }
            other => panic!("expected DecodeFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_broadcast_halt_policy_passes_valid_input() {
        let result = broadcast_with(global(), "hex", "48 69", DecodePolicy::Halt).unwrap();
        assert_eq!(result.plain_text, "Hi");
    }

    #[test]
    fn test_broadcast_rejects_hashes_source() {
        assert!(matches!(
            broadcast_from(global(), "hashes", "anything"),
            Err(XlateError::NotDecodeSource { .. })
        ));
    }

    #[test]
    fn test_broadcast_rejects_unknown_source() {
        assert!(matches!(
            broadcast_from(global(), "base58", "abc"),
            Err(XlateError::UnknownTransform { .. })
        ));
    }

    #[test]
    fn test_broadcast_rejects_empty_input() {
        for id in ["text", "base64", "hex", "rot13"] {
            for text in ["", "   ", "\n\t "] {
                assert!(
                    matches!(broadcast_from(global(), id, text), Err(XlateError::EmptyInput)),
                    "{} {:?}",
                    id,
                    text
                );
            }
        }
    }

    #[test]
    fn test_broadcast_reference_is_verbatim() {
        // Would be decoded by every other transform, but text is taken as-is.
        let result = broadcast_from(global(), "text", "%zz &amp;").unwrap();
        assert_eq!(result.plain_text, "%zz &amp;");
        assert_eq!(result.outputs["htmlEntities"], "%zz &amp;amp;");
    }

    #[test]
    fn test_broadcast_accepts_alias() {
        let result = broadcast_from(global(), "b64", "SGk=").unwrap();
        assert_eq!(result.source, "base64");
        assert!(!result.outputs.contains_key("base64"));
    }

    #[test]
    fn test_fan_out_completeness() {
        let registry = global();
        for meta in registry.list().into_iter().filter(|m| m.supports_decode_source) {
            let source_text = registry.get(meta.id).unwrap().encode_text("Hello");
            let result = broadcast_from(registry, meta.id, &source_text).unwrap();
            let expected: Vec<&str> = registry.iter().map(|t| t.id()).filter(|id| *id != meta.id).collect();
            let actual: Vec<&str> = result.outputs.keys().copied().collect();
            assert_eq!(actual, expected);
            assert_eq!(result.plain_text, "Hello", "source {}", meta.id);
        }
    }

    struct Faulty;

    impl Transform for Faulty {
        fn meta(&self) -> TransformMeta {
            TransformMeta {
                id: "faulty",
                name: "Faulty",
                aliases: &[],
                is_reference: false,
                supports_decode_source: true,
                description: "always fails to encode",
            }
        }

        fn encode(&self, _text: &str) -> Result<String> {
            Err(XlateError::encode_failed("refusing to encode"))
        }

        fn decode(&self, text: &str) -> Result<String> {
            Ok(text.to_string())
        }
    }

    #[test]
    fn test_encode_fault_is_isolated() {
        let registry = Registry::new(vec![
            Box::new(PlainText),
            Box::new(Faulty),
            Box::new(Rot13),
        ])
        .unwrap();

        let result = broadcast_from(&registry, "text", "Hello").unwrap();
        assert_eq!(result.outputs["faulty"], ENCODE_FAILED);
        assert_eq!(result.outputs["rot13"], "Uryyb");
    }

    struct Picky;

    impl Transform for Picky {
        fn meta(&self) -> TransformMeta {
            TransformMeta {
                id: "picky",
                name: "Picky",
                aliases: &[],
                is_reference: false,
                supports_decode_source: true,
                description: "encode fails with a decode-style placeholder",
            }
        }

        fn encode(&self, _text: &str) -> Result<String> {
            Err(XlateError::invalid_encoding("Invalid picky", "cannot encode"))
        }

        fn decode(&self, _text: &str) -> Result<String> {
            Err(XlateError::invalid_encoding("Invalid picky", "cannot decode"))
        }
    }

    #[test]
    fn test_encode_failure_never_leaks_decode_placeholder() {
        assert_eq!(Picky.encode_text("Hello"), ENCODE_FAILED);
        assert_eq!(Picky.decode_text("Hello"), "Invalid picky");

        let registry = Registry::new(vec![Box::new(PlainText), Box::new(Picky)]).unwrap();
        let result = broadcast_from(&registry, "text", "Hello").unwrap();
        assert_eq!(result.outputs["picky"], ENCODE_FAILED);
    }

    proptest! {
        #[test]
        fn roundtrip_every_decode_source(s in "[ -~]{0,40}|\\PC{0,20}") {
            for t in global().iter().filter(|t| t.supports_decode_source() && !t.is_reference()) {
                let encoded = t.encode(&s).unwrap();
                prop_assert_eq!(t.decode(&encoded).unwrap(), s.clone(), "transform {}", t.id());
            }
        }

        #[test]
        fn reference_is_identity(s in "\\PC{0,40}") {
            let reference = global().reference();
            prop_assert_eq!(reference.encode(&s).unwrap(), s.clone());
            prop_assert_eq!(reference.decode(&s).unwrap(), s.clone());
        }

        #[test]
        fn rot13_is_involution(s in "[A-Za-z]{0,40}") {
            let rot = global().get("rot13").unwrap();
            let twice = rot.encode(&rot.encode(&s).unwrap()).unwrap();
            prop_assert_eq!(twice, s);
        }

        #[test]
        fn broadcast_from_text_then_back(s in "[ -~]{1,40}") {
            prop_assume!(!s.trim().is_empty());
            let forward = broadcast_from(global(), "text", &s).unwrap();
            for (id, encoded) in &forward.outputs {
                if *id == "hashes" {
                    continue;
                }
                let back = broadcast_from(global(), id, encoded).unwrap();
                prop_assert_eq!(&back.outputs["text"], &s);
            }
        }
    }
}
