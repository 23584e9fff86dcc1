/// Tiles flipped this turn and not yet resolved. Holds at most two indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionBuffer {
    indices: Vec<usize>,
}

impl SelectionBuffer {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self {
            indices: Vec::with_capacity(Self::CAPACITY),
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.indices.len() >= Self::CAPACITY
    }

    /// Appends `index`. Returns `false` and leaves the buffer untouched when full.
    pub fn push(&mut self, index: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.indices.push(index);
        true
    }

    /// Both indices, once the buffer is full.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.indices.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.indices)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_fills_to_two() {
        let mut buffer = SelectionBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pair(), None);

        assert!(buffer.push(3));
        assert_eq!(buffer.pair(), None);
        assert!(buffer.push(7));
        assert!(buffer.is_full());
        assert_eq!(buffer.pair(), Some((3, 7)));

        assert!(!buffer.push(9));
        assert_eq!(buffer.as_slice(), &[3, 7]);
    }

    #[test]
    fn test_take_empties_the_buffer() {
        let mut buffer = SelectionBuffer::new();
        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.take(), vec![1, 2]);
        assert!(buffer.is_empty());
        assert!(buffer.push(5));
        assert_eq!(buffer.len(), 1);
    }
}
