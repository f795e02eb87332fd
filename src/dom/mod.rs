// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document tree and its utilities
//!
//! Parsing and serialization are delegated to html5ever; everything else
//! works on the owned [`Node`] tree.

pub mod builders;
mod node;
mod parser;
mod query;
mod serialize;
mod transform;
mod validate;

pub use node::{descendants, Attribute, Descendants, Document, Element, Node};
pub use parser::{parse, parse_single, parse_with, ParseConfig, ParseMode, DEFAULT_MAX_DEPTH};
pub use query::{collect_attribute_names, find_all, get_body_children, is_named, is_nested};
pub use serialize::{serialize, serialize_with_doctype};
pub use transform::{
    filter_whitespace, fold, print_outline, try_fold, write_outline, OutlineOptions,
};
pub use validate::{validate_attributes, Allowed};
