//! OS CSPRNG source backed by a small locked pool.

use log::{debug, warn};
use zeroize::Zeroize;

use super::RandomSource;
use crate::Result;

const POOL_SIZE: usize = 256;
const DRAW: usize = 4;

/// Draws from the operating system CSPRNG via `getrandom`.
///
/// Bytes are fetched `POOL_SIZE` at a time. Each draw is wiped from the pool
/// as soon as it is consumed and the whole pool is wiped on drop.
pub struct OsRandom {
    pool: Box<[u8; POOL_SIZE]>,
    pos: usize,
    locked: bool,
}

impl OsRandom {
    pub fn new() -> Self {
        let pool = Box::new([0u8; POOL_SIZE]);
        let locked = lock(pool.as_ptr());
        if !locked {
            warn!("mlock failed, random pool may be swapped to disk");
        }
        Self {
            pool,
            pos: POOL_SIZE,
            locked,
        }
    }

    fn refill(&mut self) -> Result<()> {
        getrandom::fill(&mut self.pool[..])?;
        self.pos = 0;
        debug!("refilled {} byte random pool", POOL_SIZE);
        Ok(())
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> Result<u32> {
        if self.pos + DRAW > POOL_SIZE {
            self.refill()?;
        }
        let chunk = &mut self.pool[self.pos..self.pos + DRAW];
        let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        chunk.zeroize();
        self.pos += DRAW;
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "OS CSPRNG (getrandom)"
    }
}

impl Drop for OsRandom {
    fn drop(&mut self) {
        self.pool.zeroize();
        if self.locked {
            unlock(self.pool.as_ptr());
        }
    }
}

#[cfg(unix)]
fn lock(ptr: *const u8) -> bool {
    unsafe { libc::mlock(ptr as *const libc::c_void, POOL_SIZE) == 0 }
}

#[cfg(unix)]
fn unlock(ptr: *const u8) {
    unsafe {
        libc::munlock(ptr as *const libc::c_void, POOL_SIZE);
    }
}

#[cfg(not(unix))]
fn lock(_: *const u8) -> bool {
    false
}

#[cfg(not(unix))]
fn unlock(_: *const u8) {}
