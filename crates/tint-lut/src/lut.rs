//! 256-entry lookup table for 8-bit samples.
//!
//! A [`Lut`] maps every possible input sample to an output sample. Indexing
//! replaces per-sample arithmetic, which is what makes channel balance and
//! gamma cheap on large frames.

use crate::{LutError, LutResult};

/// Number of entries in an 8-bit LUT.
pub const LUT_SIZE: usize = 256;

/// A lookup table with exactly [`LUT_SIZE`] entries.
///
/// Index is the input sample, value is the output sample. The fixed-size
/// array makes the length invariant a type-level fact.
///
/// # Example
///
/// ```rust
/// use tint_lut::Lut;
///
/// let invert = Lut::from_fn(|v| 255 - v);
/// assert_eq!(invert.lookup(0), 255);
///
/// let mut samples = vec![0u8, 128, 255];
/// invert.apply_in_place(&mut samples);
/// assert_eq!(samples, vec![255, 127, 0]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Lut {
    table: [u8; LUT_SIZE],
}

impl Lut {
    /// Creates the pass-through LUT.
    pub fn identity() -> Self {
        Self::from_fn(|v| v)
    }

    /// Creates a LUT by evaluating `f` for every input sample.
    pub fn from_fn(f: impl Fn(u8) -> u8) -> Self {
        let mut table = [0u8; LUT_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i as u8);
        }
        Self { table }
    }

    /// Wraps an existing table.
    #[inline]
    pub const fn from_table(table: [u8; LUT_SIZE]) -> Self {
        Self { table }
    }

    /// Creates a LUT from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::InvalidSize`] unless `entries.len() == 256`.
    pub fn from_slice(entries: &[u8]) -> LutResult<Self> {
        let table: [u8; LUT_SIZE] = entries
            .try_into()
            .map_err(|_| LutError::InvalidSize(entries.len()))?;
        Ok(Self { table })
    }

    /// Returns the output for input sample `value`.
    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// Returns the entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }

    /// Returns `true` if every entry maps to itself.
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| i == v as usize)
    }

    /// Composes two LUTs: the result applies `self` first, then `next`.
    ///
    /// ```rust
    /// use tint_lut::Lut;
    ///
    /// let double = Lut::from_fn(|v| v.saturating_mul(2));
    /// let plus_one = Lut::from_fn(|v| v.saturating_add(1));
    /// assert_eq!(double.then(&plus_one).lookup(10), 21);
    /// assert_eq!(plus_one.then(&double).lookup(10), 22);
    /// ```
    pub fn then(&self, next: &Lut) -> Lut {
        Lut::from_fn(|v| next.lookup(self.lookup(v)))
    }

    /// Remaps every sample in `samples`.
    #[inline]
    pub fn apply_in_place(&self, samples: &mut [u8]) {
        for s in samples.iter_mut() {
            *s = self.table[*s as usize];
        }
    }

    /// Returns a remapped copy of `samples`.
    pub fn apply_slice(&self, samples: &[u8]) -> Vec<u8> {
        samples.iter().map(|&s| self.table[s as usize]).collect()
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for Lut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lut")
            .field("first", &self.table[0])
            .field("mid", &self.table[128])
            .field("last", &self.table[LUT_SIZE - 1])
            .field("identity", &self.is_identity())
            .finish()
    }
}

impl std::ops::Index<u8> for Lut {
    type Output = u8;

    #[inline]
    fn index(&self, value: u8) -> &u8 {
        &self.table[value as usize]
    }
}
