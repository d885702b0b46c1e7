use std::collections::HashMap;
use std::sync::OnceLock;

use super::Transform;
use crate::error::{XlateError, Result};
use crate::types::TransformMeta;

macro_rules! register_transforms {
    ($($module:ident :: $transform:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let transforms: Vec<Box<dyn Transform>> = vec![
                $(Box::new(super::$module::$transform)),*
            ];

            match Registry::new(transforms) {
                Ok(registry) => registry,
                Err(e) => panic!("built-in transform catalog is inconsistent: {}", e),
            }
        }

        // Public for testing - the catalog ids in registration order
        pub fn expected_transform_ids() -> Vec<&'static str> {
            vec![
                $(super::$module::$transform.id(),)*
            ]
        }
    };
}

register_transforms! {
    plain::PlainText,
    urlencoding::UrlEncode,
    base64::Base64,
    bytes::Hex,
    bytes::Decimal,
    bytes::Binary,
    html::HtmlEntities,
    rot::Rot13,
    hashes::Hashes,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Ordered, immutable catalog of transforms.
pub struct Registry {
    transforms: Vec<Box<dyn Transform>>,
    name_map: HashMap<String, usize>,
    reference: usize,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.transforms.iter().map(|t| t.id())).finish()
    }
}

impl Registry {
    /// Builds a registry from `transforms`, kept in the given order.
    ///
    /// Fails unless ids and aliases are unique (case-insensitively) and
    /// exactly one transform is the reference.
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Result<Self> {
        let mut name_map = HashMap::new();
        let mut reference = None;

        for (idx, transform) in transforms.iter().enumerate() {
            let meta = transform.meta();
            for name in std::iter::once(meta.id).chain(meta.aliases.iter().copied()) {
                if let Some(existing) = name_map.insert(name.to_lowercase(), idx) {
                    return Err(XlateError::invalid_registry(format!(
                        "name '{}' used by both '{}' and '{}'",
                        name,
                        transforms[existing].id(),
                        meta.id
                    )));
                }
            }

            if meta.is_reference {
                if let Some(existing) = reference.replace(idx) {
                    return Err(XlateError::invalid_registry(format!(
                        "'{}' and '{}' are both marked as the reference",
                        transforms[existing].id(),
                        meta.id
                    )));
                }
            }
        }

        let reference = reference.ok_or_else(|| XlateError::invalid_registry("no reference transform"))?;

        Ok(Self {
            transforms,
            name_map,
            reference,
        })
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(build_registry)
    }

    /// Looks up a transform by id or alias, ignoring case.
    pub fn get(&self, name: &str) -> Result<&dyn Transform> {
        self.name_map
            .get(name.to_lowercase().as_str())
            .map(|&idx| self.transforms[idx].as_ref())
            .ok_or_else(|| XlateError::unknown_transform(name))
    }

    pub fn reference(&self) -> &dyn Transform {
        self.transforms[self.reference].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Transform> {
        self.transforms.iter().map(|t| t.as_ref())
    }

    pub fn list(&self) -> Vec<TransformMeta> {
        self.transforms.iter().map(|t| t.meta()).collect()
    }
}
