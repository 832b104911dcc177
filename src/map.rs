use crate::entry::Entry;
use crate::error::MapError;
use crate::key::{BuildTypeKeyHasher, TypeKey};
use log::trace;
use std::any;
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::mem;

/// A heterogeneous container holding at most one value of each type
///
/// The type of a value is its key: every operation names the type it works on
/// as a generic parameter and never takes a key value. Storing a second value
/// of a type that is already present either replaces the stored one
/// ([`insert`](Self::insert)) or leaves it alone ([`emplace`](Self::emplace)).
///
/// `TypeMap` does no internal locking. Mutation goes through `&mut self`, and
/// sharing a map across threads needs an outer lock (the map itself is neither
/// `Send` nor `Sync`, since stored values need not be).
///
/// # Examples
///
/// ```
/// use typekey_map::TypeMap;
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// let mut map = TypeMap::new();
/// assert_eq!(map.insert(Port(8080)), None);
/// assert_eq!(map.insert("localhost"), None);
///
/// assert_eq!(map.get::<Port>(), Some(&Port(8080)));
/// assert_eq!(map.insert(Port(9090)), Some(Port(8080)));
/// assert_eq!(map.remove::<&str>(), Some("localhost"));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Default)]
pub struct TypeMap {
    // INVARIANT: the entry stored under `TypeKey::of::<T>()` holds a `T`.
    entries: HashMap<TypeKey, Entry, BuildTypeKeyHasher>,
}

impl TypeMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for at least `capacity` types
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, BuildTypeKeyHasher::default()),
        }
    }

    /// Returns a reference to the stored `T`, if any
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.entries
            .get(&TypeKey::of::<T>())
            .and_then(Entry::downcast_ref::<T>)
    }

    /// Returns a mutable reference to the stored `T`, if any
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.entries
            .get_mut(&TypeKey::of::<T>())
            .and_then(Entry::downcast_mut::<T>)
    }

    /// Returns true if a `T` is stored
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeKey::of::<T>())
    }

    /// Returns the stored `T`, storing `T::default()` first if there is none
    ///
    /// An existing value is returned as is; it is never rebuilt.
    ///
    /// Only types with a [`Default`] implementation are accepted:
    ///
    /// ```compile_fail
    /// use typekey_map::TypeMap;
    ///
    /// struct NoDefault(u8);
    ///
    /// let mut map = TypeMap::new();
    /// map.get_or_default::<NoDefault>();
    /// ```
    pub fn get_or_default<T: Default + 'static>(&mut self) -> &mut T {
        self.get_or_insert_with(T::default)
    }

    /// Returns the stored `T`, storing the result of `f` first if there is none
    pub fn get_or_insert_with<T: 'static, F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.emplace_with(f).0
    }

    /// Stores `value`, returning the `T` it displaced
    ///
    /// This always writes. When a `T` is already stored the new value is moved
    /// into the existing slot and the old one is handed back to the caller.
    pub fn insert<T: 'static>(&mut self, value: T) -> Option<T> {
        let key = TypeKey::of::<T>();
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(mut slot) => {
                trace!("replacing value of type {}", key);
                Some(mem::replace(stored_mut(slot.get_mut()), value))
            }
            hash_map::Entry::Vacant(slot) => {
                trace!("inserting value of type {}", key);
                slot.insert(Entry::new(value));
                None
            }
        }
    }

    /// Stores the value built by `f`, returning the `T` it displaced
    ///
    /// `f` is always called. See [`insert`](Self::insert).
    pub fn insert_with<T: 'static, F>(&mut self, f: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        self.insert(f())
    }

    /// Stores `value` only if no `T` is present
    ///
    /// Returns the stored value and whether `value` was inserted. When a `T`
    /// is already present it is left untouched and `value` is dropped.
    ///
    /// ```
    /// use typekey_map::TypeMap;
    ///
    /// let mut map = TypeMap::new();
    /// assert_eq!(map.emplace('a'), (&mut 'a', true));
    /// assert_eq!(map.emplace('b'), (&mut 'a', false));
    /// ```
    pub fn emplace<T: 'static>(&mut self, value: T) -> (&mut T, bool) {
        self.emplace_with(|| value)
    }

    /// Stores the value built by `f` only if no `T` is present
    ///
    /// `f` runs only when the value is actually inserted. Returns the stored
    /// value and whether insertion happened.
    pub fn emplace_with<T: 'static, F>(&mut self, f: F) -> (&mut T, bool)
    where
        F: FnOnce() -> T,
    {
        let key = TypeKey::of::<T>();
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(slot) => (stored_mut(slot.into_mut()), false),
            hash_map::Entry::Vacant(slot) => {
                trace!("inserting value of type {}", key);
                (stored_mut(slot.insert(Entry::new(f()))), true)
            }
        }
    }

    /// Removes the stored `T` and returns it
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        let key = TypeKey::of::<T>();
        let entry = self.entries.remove(&key)?;
        trace!("removed value of type {}", key);
        entry.into_inner::<T>()
    }

    /// Drops every stored value
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            trace!("clearing {} values", self.entries.len());
        }
        self.entries.clear();
    }

    /// Returns true if no values are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of stored values, one per type
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reserves room for at least `additional` more types
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Shrinks the internal table as much as possible
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Calls `f` with the stored `T`
    ///
    /// # Errors
    ///
    /// Returns `MapError::NotFound` if no `T` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use typekey_map::{MapError, TypeMap};
    ///
    /// let mut map = TypeMap::new();
    /// map.insert(vec![1, 2, 3]);
    ///
    /// let total = map.with(|v: &Vec<i32>| v.iter().sum::<i32>())?;
    /// assert_eq!(total, 6);
    ///
    /// assert!(map.with(|_: &String| ()).is_err());
    /// # Ok::<(), MapError>(())
    /// ```
    pub fn with<T: 'static, F, R>(&self, f: F) -> Result<R, MapError>
    where
        F: FnOnce(&T) -> R,
    {
        self.require::<T>().map(f)
    }

    /// Calls `f` with a mutable reference to the stored `T`
    ///
    /// # Errors
    ///
    /// Returns `MapError::NotFound` if no `T` is stored.
    pub fn with_mut<T: 'static, F, R>(&mut self, f: F) -> Result<R, MapError>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.require_mut::<T>().map(f)
    }

    /// Returns the stored `T`, treating absence as an error
    ///
    /// # Errors
    ///
    /// Returns `MapError::NotFound` if no `T` is stored.
    pub fn require<T: 'static>(&self) -> Result<&T, MapError> {
        self.get::<T>()
            .ok_or(MapError::NotFound(any::type_name::<T>()))
    }

    /// Mutable counterpart of [`require`](Self::require)
    ///
    /// # Errors
    ///
    /// Returns `MapError::NotFound` if no `T` is stored.
    pub fn require_mut<T: 'static>(&mut self) -> Result<&mut T, MapError> {
        self.get_mut::<T>()
            .ok_or(MapError::NotFound(any::type_name::<T>()))
    }
}

impl fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut types: Vec<&str> = self.entries.values().map(Entry::type_name).collect();
        types.sort_unstable();
        f.debug_struct("TypeMap").field("types", &types).finish()
    }
}

/// Downcasts an entry taken out of the table by the key of `T`
fn stored_mut<T: 'static>(entry: &mut Entry) -> &mut T {
    let type_name = entry.type_name();
    match entry.downcast_mut::<T>() {
        Some(value) => value,
        None => unreachable!(
            "entry keyed by {} holds a {}",
            any::type_name::<T>(),
            type_name
        ),
    }
}
