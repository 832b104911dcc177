//! # typekey-map
//!
//! A heterogeneous container that stores at most one value of each type.
//!
//! `typekey-map` lets unrelated parts of a program park values of any type in a
//! single [`TypeMap`] and get them back by naming the type alone. There are no
//! key strings to agree on: the type *is* the key, so each type has exactly one
//! slot.
//!
//! ## Key Features
//!
//! - **Type is the key**: lookups take a generic parameter, never a key value
//! - **Statically typed**: values come back as `&T`/`&mut T`/`T`, no casting at call sites
//! - **Two insertion contracts**: [`TypeMap::insert`] replaces and hands back
//!   the old value, [`TypeMap::emplace`] only fills an empty slot
//! - **Owned storage**: removal moves the value out, clearing drops everything
//! - **Any `'static` type**: values need not be `Send`, `Sync`, `Clone` or `Debug`
//!
//! `TypeMap` is a plain single-threaded container, much like `HashMap`. Wrap
//! it in a lock to share it.
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use typekey_map::TypeMap;
//!
//! let mut map = TypeMap::new();
//!
//! // Nothing is stored yet
//! assert!(map.get::<i32>().is_none());
//! assert!(!map.contains::<i32>());
//!
//! // Store values of different types
//! assert_eq!(map.insert(1i32), None);
//! assert_eq!(map.insert('a'), None);
//! assert_eq!(map.get::<i32>(), Some(&1));
//! assert_eq!(map.get::<char>(), Some(&'a'));
//!
//! // Replacing hands back the previous value
//! assert_eq!(map.insert('b'), Some('a'));
//!
//! // Removing moves the value out
//! assert_eq!(map.remove::<char>(), Some('b'));
//! assert!(!map.contains::<char>());
//! assert_eq!(map.get::<i32>(), Some(&1));
//! ```
//!
//! ### Modifying Values In Place
//!
//! ```rust
//! use typekey_map::TypeMap;
//! use std::collections::HashMap;
//!
//! #[derive(Default)]
//! struct Counters(HashMap<&'static str, u32>);
//!
//! let mut map = TypeMap::new();
//!
//! // Created on first use
//! *map.get_or_default::<Counters>().0.entry("visits").or_insert(0) += 1;
//! *map.get_or_default::<Counters>().0.entry("visits").or_insert(0) += 1;
//!
//! if let Some(counters) = map.get_mut::<Counters>() {
//!     counters.0.insert("api_calls", 1);
//! }
//!
//! let counters = map.get::<Counters>().map(|c| &c.0);
//! assert_eq!(counters.and_then(|c| c.get("visits")), Some(&2));
//! ```
//!
//! ### Insert Only When Absent
//!
//! ```rust
//! use typekey_map::TypeMap;
//!
//! struct Settings {
//!     verbose: bool,
//! }
//!
//! let mut map = TypeMap::new();
//!
//! let (settings, inserted) = map.emplace_with(|| Settings { verbose: true });
//! assert!(inserted && settings.verbose);
//!
//! // An existing value is never overwritten, and the closure does not run
//! let (settings, inserted) = map.emplace_with(|| Settings { verbose: false });
//! assert!(!inserted && settings.verbose);
//! ```
//!
//! ### Error Handling
//!
//! Absence is normally an `Option`. The closure accessors and `require`
//! report it as [`MapError`] instead, for code that wants `?`:
//!
//! ```rust
//! use typekey_map::{MapError, TypeMap};
//!
//! struct Database {
//!     url: String,
//! }
//!
//! fn connection_string(services: &TypeMap) -> Result<String, MapError> {
//!     services.with(|db: &Database| db.url.clone())
//! }
//!
//! let mut services = TypeMap::new();
//!
//! match connection_string(&services) {
//!     Ok(url) => println!("Connecting to {}", url),
//!     Err(MapError::NotFound(type_name)) => println!("{} is not registered", type_name),
//! }
//!
//! services.insert(Database { url: "postgres://localhost".to_string() });
//! assert_eq!(connection_string(&services).as_deref(), Ok("postgres://localhost"));
//! ```

mod entry;
mod error;
mod key;
mod map;

pub use error::MapError;
pub use key::{TypeKey, TypeKeyHasher};
pub use map::TypeMap;
