// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # htmltree - HTML document tree utilities
//!
//! Small helpers for scripts that generate or audit HTML documents. Parsing
//! and serialization go through html5ever; the parsed document is converted
//! into a plain owned tree of [`Node`]s that the rest of the crate queries,
//! filters, validates and prints.
//!
//! ## Features
//!
//! - Parse: full documents or fragments, lenient or strict
//! - Query: top-most matches by tag, self-nesting checks, attribute inventory
//! - Transform: whitespace filtering, pre-order folds, indented outlines
//! - Validate: duplicate, required and allowed attribute checks
//! - Build: one constructor per common tag
//!
//! ## Example
//!
//! ```rust
//! use htmltree::{find_all, is_nested, parse};
//!
//! let doc = parse("<div><div>x</div></div><p>y</p>")?;
//!
//! assert_eq!(find_all(&doc, "div").len(), 1);
//! assert!(is_nested("div", &doc));
//! # Ok::<(), htmltree::Error>(())
//! ```

pub mod dom;
pub mod error;
pub mod files;

// Re-exports for convenience

// Tree
pub use dom::{descendants, Attribute, Document, Element, Node};

// Parsing and serialization
pub use dom::{parse, parse_single, parse_with, serialize, serialize_with_doctype};
pub use dom::{ParseConfig, ParseMode, DEFAULT_MAX_DEPTH};

// Queries
pub use dom::{collect_attribute_names, find_all, get_body_children, is_named, is_nested};

// Transformations
pub use dom::{filter_whitespace, fold, print_outline, try_fold, write_outline, OutlineOptions};

// Validation
pub use dom::{validate_attributes, Allowed};

// Files
pub use files::{list_html_files, read_html_file, read_html_single};

// Errors
pub use error::{Error, ErrorContext, Result, ValidationError};

/// htmltree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
