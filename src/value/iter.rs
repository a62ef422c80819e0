//! Iterating a `Scalar` produces a single-use, single-element, non-restartable
//! sequence. The iterator holds a share of its source so the object outlives any
//! pending iteration, and drops that share as soon as it is exhausted.

use std::rc::Rc;

use crate::value::ScalarRef;

pub struct ScalarIter {
    source: Option<ScalarRef>,
}

impl ScalarIter {
    /// Create a new iterator bound to the given object, taking a share of it
    pub fn new(source: &ScalarRef) -> ScalarIter {
        ScalarIter {
            source: Some(Rc::clone(source)),
        }
    }
}

impl Iterator for ScalarIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // Taking the source both yields the one element and releases the share
        self.source.take().map(|s| s.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.source {
            Some(_) => (1, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl std::iter::FusedIterator for ScalarIter {}
