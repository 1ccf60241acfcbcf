#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    pub(crate) const ALT_BASIS: u64 = 0x9ae1_6a3b_2f90_404f;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Solve the 4x4 system `m * x = rhs` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when the matrix is singular within `eps`.
pub(crate) fn solve4(mut m: [[f64; 4]; 4], mut rhs: [f64; 4], eps: f64) -> Option<[f64; 4]> {
    for col in 0..4 {
        let pivot = (col..4).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
        if m[pivot][col].abs() <= eps {
            return None;
        }
        m.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in (col + 1)..4 {
            let f = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= f * m[col][k];
            }
            rhs[row] -= f * rhs[col];
        }
    }

    let mut x = [0.0f64; 4];
    for row in (0..4).rev() {
        let mut acc = rhs[row];
        for k in (row + 1)..4 {
            acc -= m[row][k] * x[k];
        }
        x[row] = acc / m[row][row];
    }
    Some(x)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
