//! A generic memoizer for pure functions.
//!
//! `Memoized` caches the result of a function for every argument value it is
//! called with. The cache is unbounded and lives as long as the `Memoized`
//! instance. It uses a `RefCell` internally, so a memoizer can not be shared
//! between threads.
//!
//! Plain functions are wrapped with `memoize`. Recursive functions are
//! wrapped with `Memoized::recursive`, which hands the function a callback
//! through which it recurses into the memoized version of itself.
//!
//! Methods are memoized by closing over the receiver:
//! ```
//! use edit_match::memoize;
//! struct Ruler { unit: u64 }
//! let ruler = Ruler { unit: 12 };
//! let inches = memoize(|feet: u64| ruler.unit * feet);
//! assert_eq!(inches.call(3), 36);
//! assert_eq!(inches.call(3), 36);
//! assert_eq!(inches.stats().hits, 1);
//! ```
use std::{
    cell::{Cell, RefCell},
    fmt,
    hash::Hash,
    marker::PhantomData,
};

use derive_more::AddAssign;

use crate::prelude::*;

/// Conversion of an argument value into a cache key.
///
/// Returns `None` when the value can not be used as a key. Such calls are
/// computed directly and never stored.
pub trait MemoKey {
    type Key: Eq + Hash;
    fn memo_key(&self) -> Option<Self::Key>;
}

macro_rules! impl_memo_key_copy {
    ($($t:ty),*) => {
        $(
            impl MemoKey for $t {
                type Key = $t;
                fn memo_key(&self) -> Option<$t> {
                    Some(*self)
                }
            }
        )*
    };
}

impl_memo_key_copy!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, ()
);

// NaN is not equal to itself, so it can never be found again in the cache.
macro_rules! impl_memo_key_float {
    ($($t:ty => $bits:ty),*) => {
        $(
            impl MemoKey for $t {
                type Key = $bits;
                fn memo_key(&self) -> Option<$bits> {
                    if self.is_nan() {
                        None
                    } else {
                        Some(self.to_bits())
                    }
                }
            }
        )*
    };
}

impl_memo_key_float!(f32 => u32, f64 => u64);

impl MemoKey for str {
    type Key = String;
    fn memo_key(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl MemoKey for String {
    type Key = String;
    fn memo_key(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: MemoKey> MemoKey for [T] {
    type Key = Vec<T::Key>;
    fn memo_key(&self) -> Option<Self::Key> {
        self.iter().map(MemoKey::memo_key).collect()
    }
}

impl<T: MemoKey> MemoKey for Vec<T> {
    type Key = Vec<T::Key>;
    fn memo_key(&self) -> Option<Self::Key> {
        self.as_slice().memo_key()
    }
}

impl<T: MemoKey> MemoKey for Option<T> {
    type Key = Option<T::Key>;
    fn memo_key(&self) -> Option<Self::Key> {
        match self {
            None => Some(None),
            Some(x) => x.memo_key().map(Some),
        }
    }
}

impl<T: MemoKey + ?Sized> MemoKey for &T {
    type Key = T::Key;
    fn memo_key(&self) -> Option<T::Key> {
        (**self).memo_key()
    }
}

macro_rules! impl_memo_key_tuple {
    ($($t:ident $v:ident),+) => {
        impl<$($t: MemoKey),+> MemoKey for ($($t,)+) {
            type Key = ($($t::Key,)+);
            fn memo_key(&self) -> Option<Self::Key> {
                let ($($v,)+) = self;
                Some(($($v.memo_key()?,)+))
            }
        }
    };
}

impl_memo_key_tuple!(A a);
impl_memo_key_tuple!(A a, B b);
impl_memo_key_tuple!(A a, B b, C c);
impl_memo_key_tuple!(A a, B b, C c, D d);

#[derive(Default, Clone, Copy, AddAssign, Debug, PartialEq, Eq)]
pub struct MemoStats {
    /// Calls answered from the cache.
    pub hits: usize,
    /// Calls that were computed and stored.
    pub misses: usize,
    /// Calls whose arguments had no cache key.
    pub uncached: usize,
}

impl MemoStats {
    /// Number of times the wrapped function was invoked.
    pub fn evaluations(&self) -> usize {
        self.misses + self.uncached
    }
}

impl fmt::Display for MemoStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>9} hits {:>9} misses {:>9} uncached",
            self.hits, self.misses, self.uncached
        )
    }
}

/// A memoized function from `A` to `V`.
///
/// `F` receives a callback for recursive calls and the arguments.
pub struct Memoized<A: MemoKey, V, F> {
    f: F,
    cache: RefCell<HashMap<A::Key, V>>,
    stats: Cell<MemoStats>,
    _args: PhantomData<fn(A) -> V>,
}

/// Wrap a plain function.
pub fn memoize<A: MemoKey, V: Clone>(
    f: impl Fn(A) -> V,
) -> Memoized<A, V, impl Fn(&dyn Fn(A) -> V, A) -> V> {
    Memoized::recursive(move |_: &dyn Fn(A) -> V, args: A| f(args))
}

impl<A: MemoKey, V: Clone, F: Fn(&dyn Fn(A) -> V, A) -> V> Memoized<A, V, F> {
    /// Wrap a recursive function. Recursive calls must go through the
    /// callback passed as first argument to be cached.
    pub fn recursive(f: F) -> Self {
        Self {
            f,
            cache: RefCell::new(HashMap::default()),
            stats: Cell::new(MemoStats::default()),
            _args: PhantomData,
        }
    }

    pub fn call(&self, args: A) -> V {
        let Some(key) = args.memo_key() else {
            self.count(|s| s.uncached += 1);
            return (self.f)(&|a: A| self.call(a), args);
        };

        let cached = self.cache.borrow().get(&key).cloned();
        if let Some(v) = cached {
            self.count(|s| s.hits += 1);
            return v;
        }

        self.count(|s| s.misses += 1);
        // The borrow is released while `f` runs, since `f` may recurse.
        let v = (self.f)(&|a: A| self.call(a), args);
        self.cache.borrow_mut().insert(key, v.clone());
        v
    }

    fn count(&self, update: impl FnOnce(&mut MemoStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    pub fn stats(&self) -> MemoStats {
        self.stats.get()
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached values and reset the statistics.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
        self.stats.set(MemoStats::default());
    }
}
