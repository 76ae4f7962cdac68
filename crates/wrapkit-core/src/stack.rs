/// Last-in, first-out stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Creates a stack holding `initial`, or an empty one.
    pub fn new(initial: Option<T>) -> Self {
        Self {
            items: initial.into_iter().collect(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes `item`; `None` is ignored.
    pub fn set(&mut self, item: Option<T>) {
        if let Some(item) = item {
            self.push(item);
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Sample {
        value: i32,
    }

    fn sample(value: i32) -> Sample {
        Sample { value }
    }

    #[test]
    fn test_initial_value() {
        let stack = Stack::new(Some(sample(0)));
        assert_eq!(stack.peek(), Some(&sample(0)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_initial() {
        let mut stack: Stack<Sample> = Stack::new(None);
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new(Some(sample(0)));
        stack.push(sample(1));
        assert_eq!(stack.pop(), Some(sample(1)));
        assert_eq!(stack.peek(), Some(&sample(0)));
        assert_eq!(stack.pop(), Some(sample(0)));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_set_none_is_ignored() {
        let mut stack = Stack::new(Some(sample(0)));
        stack.set(None);
        assert_eq!(stack.len(), 1);
        stack.set(Some(sample(1)));
        assert_eq!(stack.peek(), Some(&sample(1)));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::default();
        stack.push(sample(1));
        assert_eq!(stack.peek(), Some(&sample(1)));
        assert_eq!(stack.peek(), Some(&sample(1)));
        assert_eq!(stack.len(), 1);
    }
}
