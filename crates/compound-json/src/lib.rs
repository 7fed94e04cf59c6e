//! # compound-json
//!
//! A self-contained JSON value model with a strict recursive-descent parser, a
//! serializer, and schema-checked typed accessors for reading parsed documents.
//!
//! Values form a closed set of seven variants ([`Value`]). Objects are
//! [`Compound`]s and arrays are [`List`]s; both validate what they store and
//! both expose the same five typed getters, which differ only in how they
//! treat a missing entry and an entry of the wrong type.
//!
//! ## Quick start
//!
//! ```rust
//! use compound_json::{deserialize, serialize, Value};
//!
//! let doc = deserialize(r#"{"name": "probe", "enabled": true, "gain": 2}"#).unwrap();
//! let Value::Compound(config) = &doc else { panic!("expected a compound") };
//!
//! // Required and type-checked.
//! assert_eq!(config.get_verified::<&str>("name").unwrap(), "probe");
//! // Tolerant: wrong type reads as "not found".
//! assert_eq!(config.get::<f64>("gain"), None);
//! // Defaults for optional settings.
//! assert_eq!(config.get_verified_or_default("retries", 3i64).unwrap(), 3);
//!
//! assert_eq!(
//!     serialize(&doc, false).unwrap(),
//!     r#"{"name":"probe","enabled":true,"gain":2}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the [`Value`] enum and [`coerce_to_double`]
//! - [`compound`] / [`list`]: the two containers
//! - [`accessor`]: the [`FromValue`] trait behind the typed getters
//! - [`deserializer`]: text → value, with [`DeserializeOptions`]
//! - [`serializer`]: value → text, compact or pretty
//! - [`interop`]: serde and `serde_json` bridges
//! - [`error`]: error types

pub mod accessor;
pub mod compound;
pub mod deserializer;
pub mod error;
pub mod interop;
pub mod list;
pub mod serializer;
pub mod value;

pub use accessor::FromValue;
pub use compound::Compound;
pub use deserializer::{deserialize, DeserializeOptions, Deserializer};
pub use error::{EntryRef, JsonError, Result, SchemaError};
pub use list::List;
pub use serializer::serialize;
pub use value::{coerce_to_double, Value};
