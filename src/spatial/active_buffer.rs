//! Active set storage
//!
//! Indices of disturbed particles, kept in a buffer that is allocated once
//! and refilled every tick. Logical length and capacity are tracked
//! separately: `reset` only rewinds the length, and growth doubles the
//! backing store, keeping existing entries in place.
//!
//! Reads through [`ActiveBuffer::at`] are bounds-by-convention. The engine
//! only ever walks `0..len()`, so the hot loop carries no release-mode check.

/// Index into the grid's particle storage.
pub type ParticleIndex = u32;

pub struct ActiveBuffer {
    data: Vec<ParticleIndex>,
    len: usize,
    capacity: usize,
}

impl ActiveBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity], // single allocation up front
            len: 0,
            capacity,
        }
    }

    #[inline(always)]
    fn grow_to(&mut self, min_capacity: usize) {
        let mut new_capacity = self.capacity;
        while new_capacity < min_capacity {
            new_capacity = new_capacity.saturating_mul(2).max(new_capacity.saturating_add(1));
        }
        if new_capacity != self.capacity {
            self.data.resize(new_capacity, 0);
            self.capacity = new_capacity;
        }
    }

    /// Append an index, doubling the backing store when full.
    #[inline(always)]
    pub fn push(&mut self, index: ParticleIndex) {
        if self.len == self.capacity {
            self.grow_to(self.len + 1);
        }
        debug_assert_eq!(self.data.len(), self.capacity);
        fast!(self.data, [self.len] = index);
        self.len += 1;
    }

    /// Make room for `additional` pushes without further reallocation.
    pub fn reserve(&mut self, additional: usize) {
        self.grow_to(self.len.saturating_add(additional));
    }

    /// Read the `i`-th pushed index.
    ///
    /// # Safety
    ///
    /// `i` must be below [`capacity`](Self::capacity). Indices in
    /// `len()..capacity()` return whatever was stored there before the last
    /// [`reset`](Self::reset), so callers are expected to stay below `len()`.
    /// Debug builds assert `i < len()`; release builds do not check at all.
    #[inline(always)]
    pub unsafe fn at(&self, i: usize) -> ParticleIndex {
        debug_assert!(i < self.len, "ActiveBuffer::at({}) past len {}", i, self.len);
        *self.data.get_unchecked(i)
    }

    /// Rewind to empty. Storage stays allocated and is not cleared.
    #[inline(always)]
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Drop the backing store entirely.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.len = 0;
        self.capacity = 0;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[ParticleIndex] {
        debug_assert!(self.len <= self.capacity);
        &self.data[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_keeps_entries_at_their_indices() {
        let mut buf = ActiveBuffer::new(4);
        for i in 0..37u32 {
            buf.push(i * 3);
        }
        assert_eq!(buf.len(), 37);
        assert!(buf.capacity() >= 37);
        for i in 0..37usize {
            assert_eq!(unsafe { buf.at(i) }, i as u32 * 3);
        }
    }

    #[test]
    fn capacity_doubles_on_overflow() {
        let mut buf = ActiveBuffer::new(4);
        for i in 0..5 {
            buf.push(i);
        }
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn zero_capacity_buffer_still_grows() {
        let mut buf = ActiveBuffer::new(0);
        buf.push(9);
        buf.push(10);
        assert_eq!(buf.as_slice(), &[9, 10]);
    }

    #[test]
    fn reset_rewinds_without_releasing() {
        let mut buf = ActiveBuffer::new(2);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        let cap = buf.capacity();

        buf.reset();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
        assert!(buf.as_slice().is_empty());

        buf.push(77);
        assert_eq!(unsafe { buf.at(0) }, 77);
        assert_eq!(buf.as_slice(), &[77]);
    }

    #[test]
    fn reserve_preallocates() {
        let mut buf = ActiveBuffer::new(1);
        buf.push(5);
        buf.reserve(100);
        let cap = buf.capacity();
        assert!(cap >= 101);
        for i in 0..100 {
            buf.push(i);
        }
        assert_eq!(buf.capacity(), cap);
        assert_eq!(unsafe { buf.at(0) }, 5);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut current = ActiveBuffer::new(4);
        let mut next = ActiveBuffer::new(4);
        current.push(1);
        next.push(2);
        next.push(3);
        std::mem::swap(&mut current, &mut next);
        assert_eq!(current.as_slice(), &[2, 3]);
        assert_eq!(next.as_slice(), &[1]);
    }

    #[test]
    fn release_frees_storage() {
        let mut buf = ActiveBuffer::new(64);
        buf.push(1);
        buf.release();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.is_empty());
        buf.push(4);
        assert_eq!(buf.as_slice(), &[4]);
    }
}
