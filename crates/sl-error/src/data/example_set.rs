use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::TrainingExample;

/// Ordered, immutable collection of [`TrainingExample`]s.
///
/// The engine folds over examples in exactly this order. The storage is an
/// `Arc<[_]>` and nothing in the public API yields `&mut` access, so once a set
/// exists its elements cannot be changed in place. The only way to "edit" the
/// examples an engine sees is to build a new set and hand it to
/// [`ErrorEngine::set_training_examples`](crate::ErrorEngine::set_training_examples).
///
/// The guarantee is shallow: element types with interior mutability (`Cell`,
/// `Mutex` and the like) can still change through a shared reference.
///
/// Cloning is cheap and shares storage. A clone taken before a replacement
/// keeps observing the old examples:
///
/// ```
/// use sl_error::TrainingExampleSet;
///
/// let set = TrainingExampleSet::from(vec![(1, 2), (2, 4)]);
/// let snapshot = set.clone();
/// assert!(set.ptr_eq(&snapshot));
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot[1].expected, 4);
/// ```
pub struct TrainingExampleSet<I, O> {
    examples: Arc<[TrainingExample<I, O>]>,
}

impl<I, O> TrainingExampleSet<I, O> {
    pub fn new(examples: Vec<TrainingExample<I, O>>) -> Self {
        Self {
            examples: examples.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn as_slice(&self) -> &[TrainingExample<I, O>] {
        &self.examples
    }

    /// Returns `true` if both handles point at the same installed storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.examples, &other.examples)
    }
}

impl<I, O> Clone for TrainingExampleSet<I, O> {
    fn clone(&self) -> Self {
        Self {
            examples: Arc::clone(&self.examples),
        }
    }
}

impl<I, O> Default for TrainingExampleSet<I, O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I, O> Deref for TrainingExampleSet<I, O> {
    type Target = [TrainingExample<I, O>];

    fn deref(&self) -> &Self::Target {
        &self.examples
    }
}

impl<I: fmt::Debug, O: fmt::Debug> fmt::Debug for TrainingExampleSet<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.examples.iter()).finish()
    }
}

impl<I: PartialEq, O: PartialEq> PartialEq for TrainingExampleSet<I, O> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.examples[..] == other.examples[..]
    }
}

impl<I, O> From<Vec<TrainingExample<I, O>>> for TrainingExampleSet<I, O> {
    fn from(examples: Vec<TrainingExample<I, O>>) -> Self {
        Self::new(examples)
    }
}

impl<I, O> From<Vec<(I, O)>> for TrainingExampleSet<I, O> {
    fn from(pairs: Vec<(I, O)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<I, O> FromIterator<TrainingExample<I, O>> for TrainingExampleSet<I, O> {
    fn from_iter<T: IntoIterator<Item = TrainingExample<I, O>>>(iter: T) -> Self {
        Self {
            examples: iter.into_iter().collect(),
        }
    }
}

impl<I, O> FromIterator<(I, O)> for TrainingExampleSet<I, O> {
    fn from_iter<T: IntoIterator<Item = (I, O)>>(iter: T) -> Self {
        iter.into_iter().map(TrainingExample::from).collect()
    }
}

impl<'a, I, O> IntoIterator for &'a TrainingExampleSet<I, O> {
    type Item = &'a TrainingExample<I, O>;
    type IntoIter = std::slice::Iter<'a, TrainingExample<I, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

impl<I: Serialize, O: Serialize> Serialize for TrainingExampleSet<I, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.examples.iter())
    }
}

impl<'de, I, O> Deserialize<'de> for TrainingExampleSet<I, O>
where
    I: Deserialize<'de>,
    O: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<TrainingExample<I, O>>::deserialize(deserializer).map(Self::new)
    }
}
