//! The storage core: a fixed-capacity, overwrite-on-full sequence buffer.

use core::fmt;
use core::mem;
use core::ops;
use core::ptr::{self, NonNull};
use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::sync::Arc;

use crate::cursor::{Cursor, CursorMut};
use crate::error::Error;
use crate::observer::{Event, Observer};

/// A sequence container with a capacity fixed at construction.
///
/// Elements are stored contiguously in insertion order: logical position 0
/// is the oldest element, `len() - 1` the newest. Once `len()` reaches the
/// capacity, every further [`insert`](CBuffer::insert) evicts the oldest
/// element by shifting the survivors one slot toward the front and writing
/// the new value at the tail. The backing block is allocated exactly once
/// and never resized.
///
/// See the [crate-level docs](crate) for an overview and examples.
pub struct CBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    observer: Option<Arc<dyn Observer>>,
}

// The buffer exclusively owns its allocation, so it moves between threads
// exactly like the `T`s it holds. The observer is `Send + Sync` by trait
// bound.
unsafe impl<T: Send> Send for CBuffer<T> {}
unsafe impl<T: Sync> Sync for CBuffer<T> {}

impl<T> CBuffer<T> {
    /// Creates a zero-capacity buffer. It never holds elements and never
    /// allocates; every `insert` is rejected.
    #[inline]
    pub fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            observer: None,
        }
    }

    /// Creates an empty buffer with room for exactly `cap` elements.
    ///
    /// The block is allocated here and freed on drop; slots beyond `len()`
    /// stay uninitialized and are never read.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            ptr: Self::allocate(cap),
            cap,
            len: 0,
            observer: None,
        }
    }

    /// Creates a buffer of capacity `cap` with every slot set to a clone of
    /// `value`; the result starts out full.
    ///
    /// If a clone panics partway through, the elements written so far are
    /// dropped and the block is freed before the panic propagates.
    pub fn filled(cap: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut buf = Self::with_capacity(cap);
        for i in 0..cap {
            let elem = value.clone();
            // SAFETY: i < cap, so the slot is in bounds and uninitialized.
            unsafe { ptr::write(buf.ptr.as_ptr().add(i), elem) };
            // Keep len in step so a panicking clone drops what's written.
            buf.len = i + 1;
        }
        buf
    }

    /// Creates a buffer of capacity `cap` and feeds every element of
    /// `source` through [`insert`](CBuffer::insert), in order.
    ///
    /// A source longer than `cap` therefore overwrites its own earlier
    /// elements, exactly as the equivalent sequence of manual `insert`
    /// calls would:
    ///
    /// ```
    /// use cbuffer::CBuffer;
    ///
    /// let buf = CBuffer::from_iter_bounded(3, 1..=5);
    /// assert_eq!(buf.as_slice(), &[3, 4, 5]);
    /// ```
    pub fn from_iter_bounded<I>(cap: usize, source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut buf = Self::with_capacity(cap);
        for value in source {
            buf.insert(value);
        }
        buf
    }

    /// Attaches an observer at construction time. See [`Observer`].
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Attaches (or replaces) the observer notified on insert/remove.
    pub fn set_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observer = Some(observer);
    }

    /// Inserts `value` at the newest end of the buffer.
    ///
    /// Three cases:
    /// - capacity 0: the value is discarded and the buffer is untouched
    ///   ([`Event::InsertRejected`] is emitted);
    /// - not yet full: the value lands at position `len()`;
    /// - full: the oldest element is dropped, the survivors shift one slot
    ///   toward the front, and the value lands at the tail. `len()` stays
    ///   equal to the capacity.
    pub fn insert(&mut self, value: T) {
        if self.cap == 0 {
            self.emit(Event::InsertRejected);
            return;
        }
        if self.len < self.cap {
            // SAFETY: len < cap, so slot `len` is in bounds and free.
            unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
            self.len += 1;
        } else {
            // SAFETY: the buffer is full (len == cap >= 1). Drop the head,
            // slide the remaining len-1 initialized slots down one, then
            // write the new tail. Only initialized slots are touched.
            unsafe {
                ptr::drop_in_place(self.ptr.as_ptr());
                ptr::copy(self.ptr.as_ptr().add(1), self.ptr.as_ptr(), self.len - 1);
                ptr::write(self.ptr.as_ptr().add(self.len - 1), value);
            }
        }
        self.emit(Event::Inserted { len: self.len });
    }

    /// Removes the oldest element (logical position 0).
    ///
    /// On an empty buffer this is a no-op and emits
    /// [`Event::RemoveRejected`].
    pub fn remove(&mut self) {
        if self.len == 0 {
            self.emit(Event::RemoveRejected);
            return;
        }
        // SAFETY: len >= 1; slots [0, len) are initialized. Drop the head,
        // slide the survivors down one slot.
        unsafe {
            ptr::drop_in_place(self.ptr.as_ptr());
            ptr::copy(self.ptr.as_ptr().add(1), self.ptr.as_ptr(), self.len - 1);
        }
        self.len -= 1;
        self.emit(Event::Removed { len: self.len });
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied. A zero-capacity buffer is
    /// never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.cap && self.cap > 0
    }

    /// Returns the **capacity**, not the element count.
    ///
    /// This is a deliberately preserved quirk of the historical interface:
    /// `size()` has always meant "number of slots". Use
    /// [`len`](CBuffer::len) for the number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.cap
    }

    /// Returns the fixed number of slots. Same value as
    /// [`size`](CBuffer::size), under the conventional name.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of live elements, `0 <= len <= capacity`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a reference to the element at logical position `index`
    /// (0 = oldest), or [`Error::IndexOutOfRange`] when `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// Mutable counterpart of [`at`](CBuffer::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { &mut *self.ptr.as_ptr().add(index) })
    }

    /// Views the live elements `[0, len)` as a slice, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and exclusively owned.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable counterpart of [`as_slice`](CBuffer::as_slice).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized and exclusively owned.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Iterates the live elements oldest to newest.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable counterpart of [`iter`](CBuffer::iter).
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a read-only cursor at the oldest element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.ptr, 0, self.len)
    }

    /// Returns a read-only cursor one past the newest element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.ptr, self.len, self.len)
    }

    /// Returns a mutable cursor at the oldest element.
    ///
    /// The cursor borrows the buffer mutably, so at most one mutable cursor
    /// exists at a time and no mutation can invalidate it while it lives.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.ptr, 0, self.len)
    }

    /// Returns a mutable cursor one past the newest element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.ptr, self.len, self.len)
    }

    /// Exchanges capacity, storage and element count with `other`.
    /// Never fails and moves no elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    #[inline]
    fn emit(&self, event: Event) {
        if let Some(observer) = &self.observer {
            observer.on_event(event);
        }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        if cap == 0 || size_of::<T>() == 0 {
            return NonNull::dangling();
        }
        let layout = Layout::array::<T>(cap).expect("capacity overflow");
        // SAFETY: layout has non-zero size (cap > 0, sized T).
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    fn release(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap).expect("capacity overflow");
            // SAFETY: ptr was allocated by `allocate` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

impl<T> Drop for CBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the slots [0, len) are initialized; the block is
        // freed exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
        }
        self.release();
    }
}

impl<T> Default for CBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CBuffer<T> {
    /// Deep copy: a fresh block of the same capacity holding clones of the
    /// live elements. Panic-safe like [`CBuffer::filled`].
    fn clone(&self) -> Self {
        let mut buf = Self {
            ptr: Self::allocate(self.cap),
            cap: self.cap,
            len: 0,
            observer: self.observer.clone(),
        };
        for (i, elem) in self.as_slice().iter().enumerate() {
            let elem = elem.clone();
            // SAFETY: i < len <= cap, slot is in bounds and uninitialized.
            unsafe { ptr::write(buf.ptr.as_ptr().add(i), elem) };
            buf.len = i + 1;
        }
        buf
    }

    /// Copy-and-swap: builds a full clone of `source`, then exchanges
    /// fields with it. The old contents are released when the temporary
    /// drops, and a panicking clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        mem::swap(self, &mut tmp);
    }
}

impl<T> Extend<T> for CBuffer<T> {
    /// Feeds every element through [`insert`](CBuffer::insert), overwrite
    /// semantics included.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a CBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> ops::Index<usize> for CBuffer<T> {
    type Output = T;

    /// Panicking sugar over [`at`](CBuffer::at).
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> ops::IndexMut<usize> for CBuffer<T> {
    /// Panicking sugar over [`at_mut`](CBuffer::at_mut).
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.at_mut(index) {
            Ok(elem) => elem,
            Err(_) => panic!(
                "{}",
                Error::IndexOutOfRange { index, len }
            ),
        }
    }
}

/// Element-wise equality over the live range; capacity and observer do not
/// participate.
impl<T: PartialEq> PartialEq for CBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for CBuffer<T> {}

impl<T: fmt::Debug> fmt::Debug for CBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CBuffer")
            .field("capacity", &self.cap)
            .field("elements", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod buffer_test;
