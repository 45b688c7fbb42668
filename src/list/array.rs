use super::SequentialList;

impl<T: PartialEq> SequentialList<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn append(&mut self, value: T) {
        self.push(value);
    }

    fn append_all(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.extend_from_slice(values);
    }

    fn remove_first(&mut self, value: &T) -> bool {
        match self.iter().position(|v| v == value) {
            Some(index) => {
                // Shifts the tail left; order is part of the contract
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone()
    }
}
