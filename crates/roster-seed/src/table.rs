/// A named, non-empty list of seed values.
///
/// Values are picked by index arithmetic only, so the same index always
/// yields the same value and indices past the end wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTable<T: 'static> {
    name: &'static str,
    values: &'static [T],
}

impl<T: 'static> SeedTable<T> {
    /// Panics at compile time when used in a `const` with an empty slice.
    pub const fn new(name: &'static str, values: &'static [T]) -> Self {
        assert!(!values.is_empty(), "seed table must not be empty");
        Self { name, values }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn values(&self) -> &'static [T] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `values[(index * stride + offset) % len]`.
    pub fn pick(&self, index: usize, stride: usize, offset: usize) -> &'static T {
        &self.values[slot(index, stride, offset, self.values.len())]
    }

    /// Plain cycling: `values[index % len]`.
    pub fn cycle(&self, index: usize) -> &'static T {
        self.pick(index, 1, 0)
    }
}

/// `(index * stride + offset) % modulus`, computed wide so it cannot overflow.
// The remainder is below `modulus`, which came from a usize.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn slot(index: usize, stride: usize, offset: usize, modulus: usize) -> usize {
    let modulus = modulus.max(1) as u128;
    let wide = index as u128 * stride as u128 + offset as u128;
    (wide % modulus) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: SeedTable<&str> = SeedTable::new("grades", &["10", "11", "12"]);

    #[test]
    fn pick_wraps_past_the_end() {
        assert_eq!(*GRADES.cycle(0), "10");
        assert_eq!(*GRADES.cycle(3), "10");
        assert_eq!(*GRADES.cycle(5), "12");
        assert_eq!(*GRADES.pick(4, 2, 1), "10");
    }

    #[test]
    fn slot_does_not_overflow() {
        assert!(slot(usize::MAX, usize::MAX, usize::MAX, 7) < 7);
    }
}
