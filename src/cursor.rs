//! Random-access cursors over a [`CBuffer`](crate::CBuffer)'s live range.
//!
//! Both cursor types are thin `(base, position, len)` triples handed out by
//! the owning buffer's `begin`/`end` family — there is no public way to
//! build one from a raw position. They cover the classic random-access
//! set: checked dereference, relative indexing, offset arithmetic,
//! absolute distance and full ordering. [`CursorMut`] additionally writes
//! through [`DerefMut`](core::ops::DerefMut) and converts into a read-only
//! [`Cursor`]; the reverse conversion does not exist.
//!
//! Movement past `end` is allowed (only dereference is bounds-checked);
//! movement before position 0 panics. Cursor comparisons and distance are
//! positional, so they are only meaningful between cursors of the same
//! buffer.
//!
//! A cursor borrows its buffer for its whole lifetime, so the storage can
//! neither shift nor be freed underneath it; what the original interface
//! documented as caller-obligation invalidation is a compile error here.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};
use core::ptr::NonNull;

/// A read-only position inside a buffer's live range `[0, len)`.
///
/// `Copy`, freely duplicable; see the [module docs](self) for the
/// operation set.
pub struct Cursor<'a, T> {
    base: NonNull<T>,
    pos: usize,
    len: usize,
    _marker: PhantomData<&'a T>,
}

/// A write-capable position inside a buffer's live range.
///
/// Created by [`begin_mut`](crate::CBuffer::begin_mut)/
/// [`end_mut`](crate::CBuffer::end_mut), which borrow the buffer mutably —
/// at most one mutable cursor per buffer exists at a time. Element access
/// goes through `&mut self` (or [`DerefMut`]), so no two live `&mut T`
/// can alias.
pub struct CursorMut<'a, T> {
    base: NonNull<T>,
    pos: usize,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

// Same rules as the std slice iterators: a cursor is a borrow in disguise.
unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(base: NonNull<T>, pos: usize, len: usize) -> Self {
        Self {
            base,
            pos,
            len,
            _marker: PhantomData,
        }
    }

    /// Returns the element under the cursor, or `None` at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        // SAFETY: pos < len, and slots [0, len) stay initialized for 'a.
        (self.pos < self.len).then(|| unsafe { &*self.base.as_ptr().add(self.pos) })
    }

    /// Returns the element `offset` positions ahead of the cursor, or
    /// `None` when that falls outside the live range.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<&'a T> {
        let at = self.pos.checked_add(offset)?;
        // SAFETY: at < len, see `get`.
        (at < self.len).then(|| unsafe { &*self.base.as_ptr().add(at) })
    }

    /// Logical position of the cursor; `begin()` is 0, `end()` is `len`.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute distance between two cursors, always non-negative
    /// regardless of which one comes first.
    #[inline]
    pub fn distance(&self, other: &Self) -> usize {
        self.pos.abs_diff(other.pos)
    }
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(base: NonNull<T>, pos: usize, len: usize) -> Self {
        Self {
            base,
            pos,
            len,
            _marker: PhantomData,
        }
    }

    /// Returns the element under the cursor, or `None` at or past the end.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: pos < len; the shared borrow of self keeps writes out.
        (self.pos < self.len).then(|| unsafe { &*self.base.as_ptr().add(self.pos) })
    }

    /// Mutable counterpart of [`get`](CursorMut::get). The borrow is tied
    /// to `&mut self`, so two live references can never alias.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: pos < len; exclusive through &mut self.
        (self.pos < self.len).then(|| unsafe { &mut *self.base.as_ptr().add(self.pos) })
    }

    /// Returns the element `offset` positions ahead, or `None` out of
    /// range.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<&T> {
        let at = self.pos.checked_add(offset)?;
        // SAFETY: at < len, see `get`.
        (at < self.len).then(|| unsafe { &*self.base.as_ptr().add(at) })
    }

    /// Mutable counterpart of [`peek`](CursorMut::peek).
    #[inline]
    pub fn peek_mut(&mut self, offset: usize) -> Option<&mut T> {
        let at = self.pos.checked_add(offset)?;
        // SAFETY: at < len; exclusive through &mut self.
        (at < self.len).then(|| unsafe { &mut *self.base.as_ptr().add(at) })
    }

    /// Logical position of the cursor; `begin_mut()` is 0, `end_mut()` is
    /// `len`.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute distance between two cursors, always non-negative.
    #[inline]
    pub fn distance(&self, other: &Self) -> usize {
        self.pos.abs_diff(other.pos)
    }

    /// Reborrows this cursor as a read-only [`Cursor`] at the same
    /// position. This is the only direction a conversion exists in.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.base, self.pos, self.len)
    }
}

/// Consuming mutable → read-only conversion.
impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    #[inline]
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.base, cursor.pos, cursor.len)
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    /// Panics when the cursor sits at or past the end of the live range.
    #[inline]
    fn deref(&self) -> &T {
        self.get()
            .expect("cursor dereferenced at or past the end of the buffer")
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    /// Panics when the cursor sits at or past the end of the live range.
    #[inline]
    fn deref(&self) -> &T {
        self.get()
            .expect("cursor dereferenced at or past the end of the buffer")
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
            .expect("cursor dereferenced at or past the end of the buffer")
    }
}

impl<T> Index<usize> for Cursor<'_, T> {
    type Output = T;

    /// Panicking relative read, `cursor[i]` is the element `i` positions
    /// ahead.
    #[inline]
    fn index(&self, offset: usize) -> &T {
        self.peek(offset).expect("cursor offset out of range")
    }
}

impl<T> Index<usize> for CursorMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, offset: usize) -> &T {
        self.peek(offset).expect("cursor offset out of range")
    }
}

impl<T> IndexMut<usize> for CursorMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut T {
        self.peek_mut(offset).expect("cursor offset out of range")
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, offset: usize) {
        self.pos += offset;
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    /// Panics when the move would land before position 0.
    #[inline]
    fn sub_assign(&mut self, offset: usize) {
        self.pos = self
            .pos
            .checked_sub(offset)
            .expect("cursor moved before the start of the buffer");
    }
}

impl<'a, T> Add<usize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline]
    fn add(mut self, offset: usize) -> Self {
        self += offset;
        self
    }
}

impl<'a, T> Sub<usize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    /// Panics when the move would land before position 0.
    #[inline]
    fn sub(mut self, offset: usize) -> Self {
        self -= offset;
        self
    }
}

/// `a - b` between two cursors is their absolute distance, mirroring
/// [`distance`](Cursor::distance); it is a `usize`, never negative.
impl<T> Sub for Cursor<'_, T> {
    type Output = usize;

    #[inline]
    fn sub(self, other: Self) -> usize {
        self.distance(&other)
    }
}

impl<T> AddAssign<usize> for CursorMut<'_, T> {
    #[inline]
    fn add_assign(&mut self, offset: usize) {
        self.pos += offset;
    }
}

impl<T> SubAssign<usize> for CursorMut<'_, T> {
    /// Panics when the move would land before position 0.
    #[inline]
    fn sub_assign(&mut self, offset: usize) {
        self.pos = self
            .pos
            .checked_sub(offset)
            .expect("cursor moved before the start of the buffer");
    }
}

impl<'a, T> Add<usize> for CursorMut<'a, T> {
    type Output = CursorMut<'a, T>;

    #[inline]
    fn add(mut self, offset: usize) -> Self {
        self += offset;
        self
    }
}

impl<'a, T> Sub<usize> for CursorMut<'a, T> {
    type Output = CursorMut<'a, T>;

    /// Panics when the move would land before position 0.
    #[inline]
    fn sub(mut self, offset: usize) -> Self {
        self -= offset;
        self
    }
}

// Comparisons are (buffer, position) pairs so that same-buffer cursors
// order exactly by position and cursors of distinct buffers never compare
// equal.

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.base, self.pos).cmp(&(other.base, other.pos))
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.pos == other.pos
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialOrd for CursorMut<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CursorMut<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.base, self.pos).cmp(&(other.base, other.pos))
    }
}

// Mixed mutable/read-only comparisons, both directions.

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.base == other.base && self.pos == other.pos
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.base == other.base && self.pos == other.pos
    }
}

impl<'b, T> PartialOrd<CursorMut<'b, T>> for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &CursorMut<'b, T>) -> Option<core::cmp::Ordering> {
        Some((self.base, self.pos).cmp(&(other.base, other.pos)))
    }
}

impl<'b, T> PartialOrd<Cursor<'b, T>> for CursorMut<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Cursor<'b, T>) -> Option<core::cmp::Ordering> {
        Some((self.base, self.pos).cmp(&(other.base, other.pos)))
    }
}

/// Advancing a cursor is iteration: `next` yields the element under the
/// cursor and moves one position forward, `None` at or past the end.
impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let item = self.get()?;
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Cursor<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.pos >= self.len {
            return None;
        }
        self.len -= 1;
        // SAFETY: pos <= len holds after the decrement, so slot `len` is
        // inside the original live range.
        Some(unsafe { &*self.base.as_ptr().add(self.len) })
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> core::iter::FusedIterator for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
