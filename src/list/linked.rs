use super::SequentialList;
use std::collections::LinkedList;

impl<T: PartialEq> SequentialList<T> for LinkedList<T> {
    /// Nodes are allocated one at a time, so the hint is ignored.
    fn with_capacity(_capacity: usize) -> Self {
        LinkedList::new()
    }

    fn append(&mut self, value: T) {
        self.push_back(value);
    }

    fn append_all(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.extend(values.iter().cloned());
    }

    fn remove_first(&mut self, value: &T) -> bool {
        let Some(index) = self.iter().position(|v| v == value) else {
            return false;
        };

        // Unlink the matching node by splitting around it
        let mut tail = self.split_off(index);
        tail.pop_front();
        LinkedList::append(self, &mut tail);
        true
    }

    fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
