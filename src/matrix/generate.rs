//! Random matrix generation.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Matrix;
use crate::error::{LocalityError, Result};

/// Build an N×N matrix with every element drawn uniformly from `[low, high)`.
///
/// Does a single allocation of N×N elements. Overflow of N×N or a refused
/// allocation comes back as `AllocationFailure` instead of aborting.
pub fn generate<R: Rng + ?Sized>(n: usize, low: i32, high: i32, rng: &mut R) -> Result<Matrix> {
    if n == 0 {
        return Err(LocalityError::InvalidArgument {
            name: "size",
            value: 0,
        });
    }
    if low >= high {
        return Err(LocalityError::InvalidRange { low, high });
    }

    let len = n
        .checked_mul(n)
        .ok_or(LocalityError::AllocationFailure { size: n })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| LocalityError::AllocationFailure { size: n })?;

    let dist = Uniform::new(low, high);
    data.extend(dist.sample_iter(rng).take(len));

    Ok(Matrix { n, data })
}

/// Same as [`generate`], seeding a `StdRng` from `seed` or from OS entropy.
pub fn generate_seeded(n: usize, low: i32, high: i32, seed: Option<u64>) -> Result<Matrix> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(n, low, high, &mut rng)
}
