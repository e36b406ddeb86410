/// A pair of sequences, addressed by suffix start positions.
///
/// State `(i, j)` stands for the suffix pair `(a[i..], b[j..])`.
#[derive(Clone, Copy, Debug)]
pub struct Suffixes<'a, T> {
    pub a: &'a [T],
    pub b: &'a [T],
}

impl<'a, T: Eq> Suffixes<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self { a, b }
    }

    /// Remaining lengths of the suffixes starting at `(i, j)`.
    #[inline]
    pub fn remaining(&self, i: usize, j: usize) -> (usize, usize) {
        (self.a.len() - i, self.b.len() - j)
    }

    /// Whether the two suffixes are identical as a whole.
    #[inline]
    pub fn same_tail(&self, i: usize, j: usize) -> bool {
        self.a[i..] == self.b[j..]
    }

    /// Whether the first symbols of both (non-empty) suffixes are equal.
    #[inline]
    pub fn first_eq(&self, i: usize, j: usize) -> bool {
        self.a[i] == self.b[j]
    }

    /// Run `f` on every state, ordered such that `(i+1, j)`, `(i, j+1)` and
    /// `(i+1, j+1)` come before `(i, j)`. `f` gets the row below (`i+1`) and
    /// the row being filled (`i`), both of length `|b|+1`.
    pub fn fill_table<V: Clone + Default>(
        &self,
        mut f: impl FnMut(usize, usize, &[V], &[V]) -> V,
    ) -> V {
        let m = self.b.len();
        let mut below = vec![V::default(); m + 1];
        let mut row = vec![V::default(); m + 1];
        for i in (0..=self.a.len()).rev() {
            for j in (0..=m).rev() {
                let v = f(i, j, &below, &row);
                row[j] = v;
            }
            std::mem::swap(&mut below, &mut row);
        }
        below[0].clone()
    }
}
