/// A step-persistent scratch buffer that only ever grows.
///
/// The pipeline's two buffers (offset table and record buffer) are sized for
/// the largest step seen so far, so the steady state allocates nothing. When
/// a step needs more room, the buffer is discarded and reallocated to the
/// next power of two above the required length; previous contents are not
/// preserved (every step rewrites the prefix it uses).
pub struct ScratchBuffer<T> {
    data: Vec<T>,
}

impl<T: Copy + Default> ScratchBuffer<T> {
    /// Creates a zero-length buffer.
    pub fn new() -> Self {
        ScratchBuffer { data: Vec::new() }
    }

    /// Makes room for `len` entries and returns the prefix of exactly that
    /// length.
    pub fn prepare(&mut self, len: usize) -> &mut [T] {
        if self.data.len() < len {
            let capacity = len.next_power_of_two();
            log::trace!("scratch buffer regrown to {} entries", capacity);
            self.data = vec![T::default(); capacity];
        }
        &mut self.data[..len]
    }

    /// The first `len` entries, previously filled through
    /// [`prepare`](Self::prepare).
    #[inline]
    pub fn filled(&self, len: usize) -> &[T] {
        &self.data[..len]
    }

    /// Current capacity, in entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl<T: Copy + Default> Default for ScratchBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
