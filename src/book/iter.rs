//! Iterators over an [`AddressBook`](super::AddressBook).
//!
//! Each call on the book builds a fresh iterator holding its own position, so
//! two iterations never interfere with each other.

use crate::models::Record;
use indexmap::map::Values;
use std::iter::FusedIterator;

/// Records in key insertion order.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    values: Values<'a, String, Record>,
}

impl<'a> Records<'a> {
    pub(super) fn new(values: Values<'a, String, Record>) -> Self {
        Self { values }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}

/// Records yielded one at a time for a requested page size.
///
/// The page size is recorded but does not group the output.
// TODO: yield `&[&Record]` chunks of `page_size` once callers can take pages.
#[derive(Debug, Clone)]
pub struct Paged<'a> {
    inner: Records<'a>,
    page_size: usize,
}

impl<'a> Paged<'a> {
    pub(super) fn new(inner: Records<'a>, page_size: usize) -> Self {
        Self { inner, page_size }
    }

    /// The page size this iterator was requested with.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<'a> Iterator for Paged<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl FusedIterator for Paged<'_> {}
