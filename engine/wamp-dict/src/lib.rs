/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! wamp-dict: access to loosely-typed WAMP details and options dictionaries.
//!
//! Session details, message options and negotiated role features travel as
//! nested maps whose shape is only known at runtime. This crate normalizes
//! decoded maps into one canonical string-keyed [`Dict`], walks them by key
//! path, and reads scalar options with defaults.
//!
//! # Examples
//! ```
//! use wamp_dict::{bool_at, int_option, normalize, Value};
//!
//! let details = Value::Map(vec![(
//!     Value::from("roles"),
//!     Value::Map(vec![(
//!         Value::from("callee"),
//!         Value::Map(vec![(
//!             Value::from("features"),
//!             Value::Map(vec![(Value::from("call_timeout"), Value::Bool(true))]),
//!         )]),
//!     )]),
//! )]);
//!
//! let details = normalize(&details).expect("details are a map");
//! let path = "roles.callee.features.call_timeout".split('.').collect::<Vec<_>>();
//! assert_eq!(bool_at(&details, &path), Ok(true));
//! assert_eq!(int_option(&details, "timeout"), 0);
//! ```

mod error;
pub mod lookup;
pub mod normalize;
pub mod options;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use error::{DictError, DictResult};
pub use lookup::{bool_at, child, dict_at, lookup, lookup_dotted, string_at};
pub use normalize::{key_string, normalize};
pub use options::{bool_option, int_option, set_option, string_option};
pub use value::{Annotation, Dict, Keyword, Symbol, TaggedValue, Value};

#[cfg(feature = "json")]
pub use json::{dict_to_json, to_json};
