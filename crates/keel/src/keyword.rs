//! Canonical symbolic identifiers ("keywords") backed by a string interner.
//!
//! A [`Keyword`] is a compact `u32` handle into an interner's table. Interning
//! uppercases the input first, so any two spellings that differ only by case
//! map to the same handle and can be compared by integer identity instead of
//! string equality. Whitespace is significant: `"foo "` and `"foo"` intern to
//! different keywords.
//!
//! The interner is an explicit object ([`KeywordInterner`]) so a host can own
//! its own canonical namespace; [`keyword`] and [`global`] additionally expose
//! one process-wide table for code with no better lifecycle hook.
//!
//! # Thread Safety
//!
//! The table uses an `RwLock` with a double-checked insert: lookups never
//! observe a partially inserted entry, and concurrent interning of equal text
//! converges on one handle (the first successful insert wins; later duplicate
//! attempts return the existing entry).

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Interned canonical identifier.
///
/// Equality of two `Keyword`s produced by the same interner is exactly the
/// identity comparison of their canonical text. Keywords from different
/// interners share no namespace and must not be mixed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Keyword(u32);

impl Keyword {
    /// Create from a raw table index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Keyword(raw)
    }

    /// Raw table index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword({})", self.0)
    }
}

/// Error when the keyword table runs out of `u32` indices.
///
/// Practically unreachable; hitting it means the process interned over four
/// billion distinct keywords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("keyword table exceeded capacity: {count} entries, max is {}", u32::MAX)]
pub struct KeywordOverflow {
    /// Number of entries already in the table.
    pub count: usize,
}

struct Table {
    /// Map from canonical (uppercased) text to table index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for canonical text, indexed by `Keyword`.
    entries: Vec<&'static str>,
}

impl Table {
    fn new() -> Self {
        Table {
            map: FxHashMap::default(),
            entries: Vec::with_capacity(64),
        }
    }
}

/// Append-only interner mapping string-like input to [`Keyword`]s.
///
/// Input is uppercased before lookup, so `"foo"`, `"Foo"` and `"FOO"` all
/// yield the same keyword. Entries live until the interner is dropped; the
/// process-wide table behind [`global`] is never dropped, so its entries live
/// for the process lifetime.
pub struct KeywordInterner {
    table: RwLock<Table>,
}

impl KeywordInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        KeywordInterner {
            table: RwLock::new(Table::new()),
        }
    }

    /// Try to intern `text`, returning its keyword or an error on overflow.
    ///
    /// This is the fallible version of [`keyword`](Self::keyword).
    pub fn try_keyword(&self, text: impl AsRef<str>) -> Result<Keyword, KeywordOverflow> {
        let canonical = text.as_ref().to_uppercase();

        // Fast path: already interned.
        {
            let guard = self.table.read();
            if let Some(&idx) = guard.map.get(canonical.as_str()) {
                return Ok(Keyword(idx));
            }
        }

        // Slow path: need to insert.
        let mut guard = self.table.write();

        // Double-check after acquiring the write lock; a racing thread may
        // have inserted the same text first, and its entry wins.
        if let Some(&idx) = guard.map.get(canonical.as_str()) {
            return Ok(Keyword(idx));
        }

        let idx = u32::try_from(guard.entries.len()).map_err(|_| KeywordOverflow {
            count: guard.entries.len(),
        })?;

        // Leak the canonical text to get a 'static entry.
        let leaked: &'static str = Box::leak(canonical.into_boxed_str());
        guard.entries.push(leaked);
        guard.map.insert(leaked, idx);

        Ok(Keyword(idx))
    }

    /// Intern `text`, returning its keyword.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries. Use
    /// [`try_keyword`](Self::try_keyword) for fallible interning.
    #[inline]
    pub fn keyword(&self, text: impl AsRef<str>) -> Keyword {
        self.try_keyword(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Canonical (uppercased) text for a keyword.
    ///
    /// The returned reference is `'static` because interned entries are
    /// leaked and never deallocated.
    ///
    /// # Panics
    /// Panics if `kw` was not produced by this interner.
    pub fn resolve(&self, kw: Keyword) -> &'static str {
        let guard = self.table.read();
        guard.entries[kw.index()]
    }

    /// Number of distinct keywords interned so far.
    pub fn len(&self) -> usize {
        self.table.read().entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeywordInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clonable, thread-safe handle to a shared [`KeywordInterner`].
///
/// Use this when an interner must be owned by several components at once;
/// pass `&KeywordInterner` when a plain borrow suffices.
#[derive(Clone)]
pub struct SharedKeywords(Arc<KeywordInterner>);

impl SharedKeywords {
    /// Create a new shared interner with an empty table.
    pub fn new() -> Self {
        SharedKeywords(Arc::new(KeywordInterner::new()))
    }
}

impl Default for SharedKeywords {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedKeywords {
    type Target = KeywordInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

static GLOBAL: OnceLock<KeywordInterner> = OnceLock::new();

/// The process-wide keyword table.
///
/// Initialized once on first use and never cleared; it only grows, and its
/// entries live for the process lifetime. Safe to call from any thread.
pub fn global() -> &'static KeywordInterner {
    GLOBAL.get_or_init(KeywordInterner::new)
}

/// Intern `text` into the process-wide table (see [`global`]).
///
/// ```
/// use keel::keyword::{global, keyword};
///
/// assert_eq!(keyword("foo"), keyword("FOO"));
/// assert_ne!(keyword("foo "), keyword("foo"));
/// assert_eq!(global().resolve(keyword("foo")), "FOO");
/// ```
#[inline]
pub fn keyword(text: impl AsRef<str>) -> Keyword {
    global().keyword(text)
}

#[cfg(test)]
mod tests;
