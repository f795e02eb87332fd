// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Attribute list validation

use std::collections::{BTreeSet, HashSet};

use super::node::Attribute;
use crate::error::ValidationError;

/// Which attributes besides the required ones may appear
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Allowed {
    /// No restriction
    #[default]
    Any,
    /// Only these names (plus the required ones)
    Only(BTreeSet<String>),
}

impl Allowed {
    /// Build an `Only` set from names
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Allowed::Only(names.into_iter().map(Into::into).collect())
    }
}

/// Validate an attribute list
///
/// Checks run in order: duplicates, then missing required names, then
/// names outside `required` and `allowed`. The first failing check wins.
pub fn validate_attributes(
    attrs: &[Attribute],
    required: &[&str],
    allowed: &Allowed,
) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(attrs.len());
    for attr in attrs {
        if !seen.insert(attr.name.as_str()) {
            return Err(ValidationError::DuplicateAttribute(attr.name.clone()));
        }
    }

    let missing: BTreeSet<String> = required
        .iter()
        .filter(|name| !seen.contains(**name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingAttributes(missing));
    }

    if let Allowed::Only(allowed) = allowed {
        let unexpected: BTreeSet<String> = attrs
            .iter()
            .map(|a| a.name.as_str())
            .filter(|name| !required.contains(name) && !allowed.contains(*name))
            .map(String::from)
            .collect();
        if !unexpected.is_empty() {
            return Err(ValidationError::UnexpectedAttributes(unexpected));
        }
    }

    Ok(())
}
