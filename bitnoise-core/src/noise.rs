use crate::hash::squirrel_noise5;

// Large primes with non-boring bit patterns, one per extra axis. Folding is
// deliberately non-injective: distinct tuples may share a combined index.
const PRIME_Y: u32 = 198_491_317;
const PRIME_Z: u32 = 6_542_989;
const PRIME_T: u32 = 357_239;

/// Raw 1D noise: the position indexes the scrambled table directly.
#[inline]
pub fn noise_1d(position: i32, seed: i32) -> u32 {
    squirrel_noise5(position, seed)
}

/// Raw 2D noise: folds both coordinates into one index, then hashes.
#[inline]
pub fn noise_2d(x: i32, y: i32, seed: i32) -> u32 {
    let folded = (x as u32).wrapping_add(PRIME_Y.wrapping_mul(y as u32));
    squirrel_noise5(folded as i32, seed)
}

/// Raw 3D noise.
#[inline]
pub fn noise_3d(x: i32, y: i32, z: i32, seed: i32) -> u32 {
    let folded = (x as u32)
        .wrapping_add(PRIME_Y.wrapping_mul(y as u32))
        .wrapping_add(PRIME_Z.wrapping_mul(z as u32));
    squirrel_noise5(folded as i32, seed)
}

/// Raw 4D noise.
#[inline]
pub fn noise_4d(x: i32, y: i32, z: i32, t: i32, seed: i32) -> u32 {
    let folded = (x as u32)
        .wrapping_add(PRIME_Y.wrapping_mul(y as u32))
        .wrapping_add(PRIME_Z.wrapping_mul(z as u32))
        .wrapping_add(PRIME_T.wrapping_mul(t as u32));
    squirrel_noise5(folded as i32, seed)
}
