use crate::base::Enumeration;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Iterator over one instance per declared constant, in declaration order.
///
/// Returned by [`Enumeration::all`].
#[derive(Debug, Clone)]
pub struct Variants<E> {
    front: usize,
    back: usize,
    _enum: PhantomData<fn() -> E>,
}

impl<E: Enumeration> Variants<E> {
    pub(crate) fn new() -> Self {
        Self { front: 0, back: E::definition().len(), _enum: PhantomData }
    }
}

impl<E: Enumeration> Iterator for Variants<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.front >= self.back {
            return None;
        }
        let ordinal = self.front;
        self.front += 1;
        E::from_ordinal(ordinal)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E: Enumeration> DoubleEndedIterator for Variants<E> {
    fn next_back(&mut self) -> Option<E> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        E::from_ordinal(self.back)
    }
}

impl<E: Enumeration> ExactSizeIterator for Variants<E> {}

impl<E: Enumeration> FusedIterator for Variants<E> {}
