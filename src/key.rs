use std::any::{self, TypeId};
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};

/// Identifies a single Rust type for the lifetime of the process
///
/// Two keys compare equal exactly when they were built from the same type.
/// The type name is carried along for diagnostics only and never takes part
/// in comparisons or hashing.
///
/// # Examples
///
/// ```
/// use typekey_map::TypeKey;
///
/// assert_eq!(TypeKey::of::<u32>(), TypeKey::of::<u32>());
/// assert_ne!(TypeKey::of::<u32>(), TypeKey::of::<i32>());
/// assert_eq!(TypeKey::of::<String>().name(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the key for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The name of the type, as reported by `std::any::type_name`
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A hasher for tables keyed by [`TypeKey`]
///
/// `TypeId` is already a well-distributed hash, so the bits it writes are kept
/// as they are. Writes of any other shape are folded in with FNV-1a so the
/// hasher stays correct if the layout of `TypeId` changes.
#[derive(Default)]
pub struct TypeKeyHasher {
    hash: u64,
}

const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl Hasher for TypeKeyHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= u64::from(*byte);
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.hash ^= n;
    }

    // Tolerate TypeId being either u64 or u128.
    fn write_u128(&mut self, n: u128) {
        self.hash ^= (n as u64) ^ ((n >> 64) as u64);
    }
}

pub(crate) type BuildTypeKeyHasher = BuildHasherDefault<TypeKeyHasher>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Marker;

    #[test]
    fn test_same_type_same_key() {
        assert_eq!(TypeKey::of::<Marker>(), TypeKey::of::<Marker>());
        assert_eq!(TypeKey::of::<Vec<u8>>(), TypeKey::of::<Vec<u8>>());
    }

    #[test]
    fn test_distinct_types_distinct_keys() {
        let keys = [
            TypeKey::of::<i32>(),
            TypeKey::of::<u32>(),
            TypeKey::of::<char>(),
            TypeKey::of::<String>(),
            TypeKey::of::<&'static str>(),
            TypeKey::of::<Vec<i32>>(),
            TypeKey::of::<Vec<u32>>(),
            TypeKey::of::<Marker>(),
        ];

        let unique: HashSet<TypeKey> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_name_and_display() {
        let key = TypeKey::of::<Marker>();
        assert!(key.name().ends_with("Marker"));
        assert_eq!(format!("{}", key), key.name());
        assert_eq!(format!("{:?}", TypeKey::of::<u8>()), "TypeKey(u8)");
    }

    #[test]
    fn test_type_id_matches_std() {
        assert_eq!(TypeKey::of::<char>().type_id(), TypeId::of::<char>());
    }

    #[test]
    fn test_hasher_passes_u64_through() {
        let mut hasher = TypeKeyHasher::default();
        hasher.write_u64(0xdead_beef);
        assert_eq!(hasher.finish(), 0xdead_beef);
    }

    #[test]
    fn test_hasher_accepts_arbitrary_bytes() {
        let mut a = TypeKeyHasher::default();
        let mut b = TypeKeyHasher::default();
        a.write(b"left");
        b.write(b"right");
        assert_ne!(a.finish(), b.finish());
    }
}
