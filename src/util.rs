//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [CandidateSet] used for
//! storing the remaining feasible values of cells during propagation-based
//! solving.

use crate::error::{FutoshikiError, FutoshikiResult};

const WORD_BITS: usize = 64;

/// A set of cell values in the range `[1, size]`, implemented as a bit
/// vector. Each value is represented by one bit, which generally has better
/// performance than a `HashSet`. During solving, one `CandidateSet` per cell
/// tracks the values not yet ruled out for that cell: a set of length 1
/// means the cell is determined, while an empty set signals a contradiction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateSet {
    size: usize,
    len: usize,
    words: Vec<u64>
}

/// An iterator over the values contained in a [CandidateSet] in ascending
/// order.
pub struct CandidateSetIter<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64
}

impl<'a> CandidateSetIter<'a> {
    fn new(set: &'a CandidateSet) -> CandidateSetIter<'a> {
        let current = set.words.first().copied().unwrap_or(0);

        CandidateSetIter {
            words: &set.words,
            word_index: 0,
            current
        }
    }
}

impl<'a> Iterator for CandidateSetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit + 1);
            }

            self.word_index += 1;

            if self.word_index >= self.words.len() {
                return None;
            }

            self.current = self.words[self.word_index];
        }
    }
}

fn required_words(size: usize) -> usize {
    (size + WORD_BITS - 1) / WORD_BITS
}

impl CandidateSet {

    /// Creates a new, empty `CandidateSet` for values in the range
    /// `[1, size]`.
    pub fn new(size: usize) -> CandidateSet {
        CandidateSet {
            size,
            len: 0,
            words: vec![0u64; required_words(size)]
        }
    }

    /// Creates a new `CandidateSet` that contains all values in the range
    /// `[1, size]`.
    pub fn full(size: usize) -> CandidateSet {
        let mut words = vec![!0u64; required_words(size)];
        let remainder = size % WORD_BITS;

        if remainder > 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << remainder) - 1;
            }
        }

        CandidateSet {
            size,
            len: size,
            words
        }
    }

    /// Creates a new `CandidateSet` for values in the range `[1, size]` that
    /// contains exactly the given `value`.
    ///
    /// # Errors
    ///
    /// If `value` is not in the range `[1, size]`. In that case,
    /// `FutoshikiError::InvalidNumber` is returned.
    pub fn singleton(size: usize, value: usize)
            -> FutoshikiResult<CandidateSet> {
        let mut set = CandidateSet::new(size);
        set.insert(value)?;
        Ok(set)
    }

    fn compute_index(&self, value: usize) -> FutoshikiResult<(usize, u64)> {
        if value == 0 || value > self.size {
            Err(FutoshikiError::InvalidNumber)
        }
        else {
            let index = value - 1;
            Ok((index / WORD_BITS, 1u64 << (index % WORD_BITS)))
        }
    }

    /// Returns the maximum value that this set can contain, which is the
    /// size of the grid it was created for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Indicates whether this set contains the given value. Values outside
    /// the range `[1, size]` are never contained.
    pub fn contains(&self, value: usize) -> bool {
        if let Ok((word_index, mask)) = self.compute_index(value) {
            self.words[word_index] & mask != 0
        }
        else {
            false
        }
    }

    /// Inserts the given value into this set, such that
    /// [CandidateSet::contains] returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the value was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `value` is not in the range `[1, size]`. In that case,
    /// `FutoshikiError::InvalidNumber` is returned.
    pub fn insert(&mut self, value: usize) -> FutoshikiResult<bool> {
        let (word_index, mask) = self.compute_index(value)?;
        let word = &mut self.words[word_index];

        if *word & mask == 0 {
            *word |= mask;
            self.len += 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the given value from this set, such that
    /// [CandidateSet::contains] returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the value was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `value` is not in the range `[1, size]`. In that case,
    /// `FutoshikiError::InvalidNumber` is returned.
    pub fn remove(&mut self, value: usize) -> FutoshikiResult<bool> {
        let (word_index, mask) = self.compute_index(value)?;
        let word = &mut self.words[word_index];

        if *word & mask != 0 {
            *word &= !mask;
            self.len -= 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    fn count(&self) -> usize {
        self.words.iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    /// Removes all values less than or equal to `bound` from this set.
    /// Bounds greater than the size are clamped, so the call never fails.
    ///
    /// This method returns `true` if the set has changed and `false`
    /// otherwise.
    pub fn remove_at_most(&mut self, bound: usize) -> bool {
        let bound = bound.min(self.size);

        if bound == 0 {
            return false;
        }

        let mut changed = false;
        let full_words = bound / WORD_BITS;

        for word in &mut self.words[..full_words] {
            changed |= *word != 0;
            *word = 0;
        }

        let remainder = bound % WORD_BITS;

        if remainder > 0 {
            let mask = (1u64 << remainder) - 1;
            let word = &mut self.words[full_words];
            changed |= *word & mask != 0;
            *word &= !mask;
        }

        if changed {
            self.len = self.count();
        }

        changed
    }

    /// Removes all values greater than or equal to `bound` from this set. A
    /// bound of 0 or 1 clears the set, and bounds greater than the size are
    /// no-ops, so the call never fails.
    ///
    /// This method returns `true` if the set has changed and `false`
    /// otherwise.
    pub fn remove_at_least(&mut self, bound: usize) -> bool {
        if bound > self.size || self.words.is_empty() {
            return false;
        }

        let bound = bound.max(1);
        let first_cleared = bound - 1;
        let start_word = first_cleared / WORD_BITS;
        let start_bit = first_cleared % WORD_BITS;
        let mut changed = false;
        let keep_mask = (1u64 << start_bit) - 1;
        let word = &mut self.words[start_word];
        changed |= *word & !keep_mask != 0;
        *word &= keep_mask;

        for word in &mut self.words[(start_word + 1)..] {
            changed |= *word != 0;
            *word = 0;
        }

        if changed {
            self.len = self.count();
        }

        changed
    }

    /// Removes all values contained in `other` from this set.
    ///
    /// This method returns `true` if the set has changed and `false`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this set and `other` are different. In that case,
    /// `FutoshikiError::InvalidDimensions` is returned.
    pub fn remove_all(&mut self, other: &CandidateSet)
            -> FutoshikiResult<bool> {
        if self.size != other.size {
            return Err(FutoshikiError::InvalidDimensions);
        }

        let mut changed = false;

        for (word, &other_word) in
                self.words.iter_mut().zip(other.words.iter()) {
            changed |= *word & other_word != 0;
            *word &= !other_word;
        }

        if changed {
            self.len = self.count();
        }

        Ok(changed)
    }

    /// Removes all values from this set, such that [CandidateSet::is_empty]
    /// will return `true` afterwards.
    pub fn clear(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }

        self.len = 0;
    }

    /// Returns the smallest value contained in this set, or `None` if it is
    /// empty.
    pub fn min(&self) -> Option<usize> {
        for (word_index, &word) in self.words.iter().enumerate() {
            if word != 0 {
                let bit = word.trailing_zeros() as usize;
                return Some(word_index * WORD_BITS + bit + 1);
            }
        }

        None
    }

    /// Returns the largest value contained in this set, or `None` if it is
    /// empty.
    pub fn max(&self) -> Option<usize> {
        for (word_index, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                let bit = WORD_BITS - 1 - word.leading_zeros() as usize;
                return Some(word_index * WORD_BITS + bit + 1);
            }
        }

        None
    }

    /// Returns an iterator over the values contained in this set in
    /// ascending order.
    pub fn iter(&self) -> CandidateSetIter<'_> {
        CandidateSetIter::new(self)
    }

    /// Indicates whether this set is empty, i.e. contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Creates a new [CandidateSet] that contains the specified values. First,
/// the size must be specified. Then, after a semicolon, a comma-separated
/// list of the contained values must be provided. For empty sets,
/// [CandidateSet::new] can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use futoshiki::candidates;
///
/// let set = candidates!(5; 2, 4);
/// assert_eq!(5, set.size());
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// ```
#[macro_export]
macro_rules! candidates {
    (@insert $set:expr; $e:expr) => {
        ($set).insert($e).unwrap()
    };

    (@insert $set:expr; $e:expr, $($es:expr),+) => {
        candidates!(@insert $set; $e);
        candidates!(@insert $set; $($es),+)
    };

    ($size:expr; $($es:expr),+) => {
        {
            let mut set = $crate::util::CandidateSet::new($size);
            candidates!(@insert set; $($es),+);
            set
        }
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = CandidateSet::new(9);
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(5));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn full_set_contains_all_values() {
        let set = CandidateSet::full(9);
        assert!(!set.is_empty());
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
        assert!(!set.contains(10));
        assert_eq!(9, set.len());
    }

    #[test]
    fn singleton_set_contains_only_given_value() {
        let set = CandidateSet::singleton(9, 3).unwrap();
        assert!(!set.is_empty());
        assert!(!set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(9));
        assert_eq!(1, set.len());
    }

    #[test]
    fn candidates_macro_contains_specified_values() {
        let set = candidates!(8; 3, 7, 8);
        assert_eq!(8, set.size());
        assert_eq!(3, set.len());
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(set.contains(8));
        assert!(!set.contains(5));
    }

    #[test]
    fn insertion_error() {
        let mut set = CandidateSet::new(5);
        assert_eq!(Err(FutoshikiError::InvalidNumber), set.insert(0));
        assert_eq!(Err(FutoshikiError::InvalidNumber), set.insert(6));
    }

    #[test]
    fn removal_error() {
        let mut set = CandidateSet::full(5);
        assert_eq!(Err(FutoshikiError::InvalidNumber), set.remove(0));
        assert_eq!(Err(FutoshikiError::InvalidNumber), set.remove(6));
    }

    #[test]
    fn manipulation() {
        let mut set = CandidateSet::new(9);
        set.insert(2).unwrap();
        set.insert(4).unwrap();
        set.insert(6).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(set.contains(6));
        assert_eq!(3, set.len());

        set.remove(4).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(!set.contains(4));
        assert!(set.contains(6));
        assert_eq!(2, set.len());

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(2));
        assert_eq!(0, set.len());
    }

    #[test]
    fn double_insert() {
        let mut set = CandidateSet::new(9);
        assert!(set.insert(3).unwrap());
        assert!(set.insert(4).unwrap());
        assert!(!set.insert(3).unwrap());

        assert!(set.contains(3));
        assert_eq!(2, set.len());
    }

    #[test]
    fn double_remove() {
        let mut set = CandidateSet::full(9);
        assert!(set.remove(3).unwrap());
        assert!(set.remove(5).unwrap());
        assert!(!set.remove(3).unwrap());

        assert!(!set.contains(3));
        assert_eq!(7, set.len());
    }

    #[test]
    fn iteration_crosses_word_boundaries() {
        let mut set = CandidateSet::new(100);
        set.insert(1).unwrap();
        set.insert(12).unwrap();
        set.insert(64).unwrap();
        set.insert(65).unwrap();
        set.insert(97).unwrap();
        set.insert(100).unwrap();

        let values: Vec<usize> = set.iter().collect();

        assert_eq!(vec![1, 12, 64, 65, 97, 100], values);
    }

    #[test]
    fn min_and_max() {
        let set = candidates!(100; 12, 64, 65, 97);
        assert_eq!(Some(12), set.min());
        assert_eq!(Some(97), set.max());

        let empty = CandidateSet::new(100);
        assert_eq!(None, empty.min());
        assert_eq!(None, empty.max());
    }

    #[test]
    fn remove_at_most_truncates_lower_values() {
        let mut set = CandidateSet::full(9);
        assert!(set.remove_at_most(3));

        let values: Vec<usize> = set.iter().collect();
        assert_eq!(vec![4, 5, 6, 7, 8, 9], values);

        assert!(!set.remove_at_most(3));
        assert!(!set.remove_at_most(0));
    }

    #[test]
    fn remove_at_least_truncates_upper_values() {
        let mut set = CandidateSet::full(9);
        assert!(set.remove_at_least(7));

        let values: Vec<usize> = set.iter().collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6], values);

        assert!(!set.remove_at_least(7));
        assert!(!set.remove_at_least(10));
    }

    #[test]
    fn remove_bounds_cross_word_boundaries() {
        let mut lower = CandidateSet::full(70);
        assert!(lower.remove_at_most(66));
        assert_eq!(vec![67, 68, 69, 70], lower.iter().collect::<Vec<_>>());

        let mut upper = CandidateSet::full(70);
        assert!(upper.remove_at_least(64));
        assert_eq!(63, upper.len());
        assert_eq!(Some(63), upper.max());
    }

    #[test]
    fn remove_at_least_of_zero_clears() {
        let mut set = CandidateSet::full(9);
        assert!(set.remove_at_least(0));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_all_computes_difference() {
        let mut set = candidates!(9; 2, 4, 6);
        let other = candidates!(9; 4, 5);

        assert!(set.remove_all(&other).unwrap());
        assert_eq!(vec![2, 6], set.iter().collect::<Vec<_>>());
        assert!(!set.remove_all(&other).unwrap());
    }

    #[test]
    fn remove_all_different_sizes_error() {
        let mut set = CandidateSet::full(9);
        let other = CandidateSet::full(6);
        assert_eq!(Err(FutoshikiError::InvalidDimensions),
            set.remove_all(&other));
    }
}
