use crate::DecodeError;

/// The number of 4-pixel blocks needed to cover `pixels` pixels.
pub(crate) const fn blocks_for(pixels: u32) -> u32 {
    // written this way so u32::MAX doesn't overflow
    pixels / 4 + (pixels % 4 != 0) as u32
}

/// Integer square root, rounded down.
pub(crate) fn isqrt(n: u64) -> u64 {
    // the float estimate is off by at most a few for large inputs
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// Allocates a vector of `len` copies of `value` without aborting on
/// allocation failure.
pub(crate) fn try_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>, DecodeError> {
    let mut vec = Vec::new();
    if vec.try_reserve_exact(len).is_err() {
        return Err(DecodeError::AllocationFailure {
            bytes: (len as u64).saturating_mul(std::mem::size_of::<T>() as u64),
        });
    }
    vec.resize(len, value);
    Ok(vec)
}
