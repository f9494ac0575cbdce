//! The parallel array driver: a static partition of `[1, N-1)` into `p`
//! disjoint slices, each swept by its own rayon task with a purely naive
//! chain walk (no two-probe find-PSS — a slice-local run is short enough
//! that run-extension/lookahead alone keep it amortised linear), a linear
//! leftward scan when the chain walk would cross into a sibling slice's
//! not-yet-written territory, and a final sequential drain that fixes up
//! NSS/Lyndon at slice boundaries.
//!
//! Grounded on `pss_and_x_array_parallel` in the reference's
//! `include/array/parallel/algorithm.hpp`, `amortized_lookahead.hpp`, and
//! `run_extension.hpp`. The reference's nested closures (`auto_lce`,
//! `next_j`) are expressed here as plain functions taking explicit `&mut`
//! indices — Rust closures that call each other while each holding a unique
//! borrow of the same locals don't compose the way the C++ lambdas-by-
//! reference do, so this is the natural translation rather than a deviation.
//!
//! Every task only ever touches the shared array/aux buffers through
//! [`RawSlice::get`]/[`RawSlice::set`], never through a `&mut [u32]` — the
//! same discipline `SyncCDictPtr` (`src/io/compress_mt.rs`) uses for its
//! cross-thread dictionary pointer, which wraps a `*const` and never
//! reconstitutes a Rust reference over a range another thread can also
//! reach.

use super::context::{Ctx, Secondary};
use crate::anchor::get_anchor;
use crate::config::fix_threshold;
use crate::error::XssError;
use crate::text::validate;

/// A raw, `Send + Sync` handle to a `u32` buffer shared across rayon tasks.
///
/// No method here ever constructs a `&[u32]`/`&mut [u32]` over the backing
/// buffer: every access is a single-element `ptr::add(idx).read()/write()`.
/// That is load-bearing, not stylistic — distinct tasks hold copies of the
/// same `RawSlice` at once, each writing only inside its own disjoint
/// `[lower, upper)` range but occasionally *reading* cells outside it (a
/// cell is either still the scratch marker or already a finished value, and
/// the algorithm tolerates observing either). A `&mut [u32]` spanning the
/// whole buffer, materialized from one task while a sibling task holds
/// another such reference over an overlapping range, is instant undefined
/// behaviour under Rust's aliasing model regardless of whether the writes
/// themselves are disjoint; plain pointer arithmetic has no such rule.
#[derive(Clone, Copy)]
struct RawSlice {
    ptr: *mut u32,
    len: usize,
}
unsafe impl Send for RawSlice {}
unsafe impl Sync for RawSlice {}

impl RawSlice {
    #[inline]
    fn new(slice: &mut [u32]) -> Self {
        RawSlice {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
        }
    }

    /// # Safety
    /// `idx` must be in bounds. The caller is responsible for ensuring this
    /// read does not race a concurrent write to the same index.
    #[inline]
    unsafe fn get(&self, idx: u32) -> u32 {
        debug_assert!((idx as usize) < self.len);
        self.ptr.add(idx as usize).read()
    }

    /// # Safety
    /// `idx` must be in bounds. The caller is responsible for ensuring no
    /// other task writes (or reads, beyond what the algorithm tolerates)
    /// this same index concurrently.
    #[inline]
    unsafe fn set(&self, idx: u32, value: u32) {
        debug_assert!((idx as usize) < self.len);
        self.ptr.add(idx as usize).write(value)
    }

    /// Reconstruct a genuine slice once no other task can observe `self`
    /// concurrently — i.e. after the `rayon::scope` that spawned the tasks
    /// holding copies of it has returned.
    ///
    /// # Safety
    /// The caller must ensure exclusive access has actually been restored.
    #[inline]
    unsafe fn into_exclusive_slice<'a>(self) -> &'a mut [u32] {
        std::slice::from_raw_parts_mut(self.ptr, self.len)
    }
}

/// Write a secondary value for a position `m` popped off the PSS chain while
/// processing `i`, through a shared [`RawSlice`] rather than a `&mut [u32]`.
///
/// # Safety
/// See [`RawSlice::set`].
#[inline]
unsafe fn write_secondary_raw(secondary: Secondary, aux: RawSlice, m: u32, i: u32) {
    match secondary {
        Secondary::None => {}
        Secondary::Nss => aux.set(m, i),
        Secondary::Lyndon => aux.set(m, i - m),
    }
}

/// Recompute `lce` for `(j, i)`; if it exceeds `threshold`, finish the whole
/// escape inline: walk the chain until a true predecessor or the slice's
/// scratch boundary is found, then apply lookahead/run-extension bounded by
/// `upper` (possibly advancing `i` past several further positions). Returns
/// early (leaving `array[i]` unset) if it hits the boundary — the caller's
/// linear scan in [`next_j`] takes over from there.
fn auto_lce(
    ctx: &Ctx,
    array: RawSlice,
    aux: Option<RawSlice>,
    lower: u32,
    upper: u32,
    threshold: u32,
    i: &mut u32,
    j: &mut u32,
    lce: &mut u32,
) {
    *lce = ctx.lce_without_bounds(*j, *i, 0);
    if *lce <= threshold {
        return;
    }

    let mut max_lce = *lce;
    let mut max_lce_j = *j;

    while ctx.byte(*j + *lce) > ctx.byte(*i + *lce) {
        if unsafe { array.get(*j) } > *j {
            return;
        }
        if let Some(aux) = aux {
            unsafe { write_secondary_raw(ctx.secondary, aux, *j, *i) };
        }
        *j = unsafe { array.get(*j) };
        *lce = ctx.lce_without_bounds(*j, *i, 0);
        if *lce >= max_lce {
            max_lce = *lce;
            max_lce_j = *j;
        }
    }
    unsafe { array.set(*i, *j) };

    if max_lce_j > lower {
        let distance = *i - max_lce_j;
        if max_lce >= 2 * distance {
            run_extension(ctx, array, aux, max_lce_j, i, max_lce, distance, upper);
        } else {
            amortized_lookahead(ctx, array, aux, max_lce_j, i, max_lce, upper);
        }
        *j = unsafe { array.get(*i) };
        *lce = ctx.lce_without_bounds(*j, *i, 0);
    }
}

/// Advance `j` one step along the chain: either hop to `array[j]` (refreshing
/// via [`auto_lce`]), or, if that cell is still the scratch marker, recover
/// a valid predecessor by scanning left character-by-character — the probe
/// is diverted to a linear leftward scan within the slice.
fn next_j(
    ctx: &Ctx,
    array: RawSlice,
    aux: Option<RawSlice>,
    lower: u32,
    upper: u32,
    threshold: u32,
    i: &mut u32,
    j: &mut u32,
    lce: &mut u32,
) {
    if unsafe { array.get(*j) } > *j {
        let mut k = *j - 1;
        *lce = ctx.lce_without_bounds(k, *j, 0);
        while ctx.byte(k + *lce) > ctx.byte(*j + *lce) {
            k -= 1;
            *lce = ctx.lce_without_bounds(k, *j, 0);
        }
        *j = k;
        *lce = ctx.lce_without_bounds(*j, *i, 0);
    } else {
        *j = unsafe { array.get(*j) };
        auto_lce(ctx, array, aux, lower, upper, threshold, i, j, lce);
    }
}

/// Parallel amortised lookahead, clipped to the slice's `upper` bound.
/// Unlike the sequential combined driver's direct offset-copy, this mirrors
/// the reference's parallel variant, which re-walks each copied position's
/// own chain down to its (already known) PSS to write secondary values —
/// necessary here because a position's chain may bottom out before reaching
/// `j`'s chain root within the slice.
fn amortized_lookahead(
    ctx: &Ctx,
    array: RawSlice,
    aux: Option<RawSlice>,
    j: u32,
    i: &mut u32,
    max_lce: u32,
    upper: u32,
) {
    let distance = *i - j;
    let window = &ctx.text[*i as usize..];
    let anchor = get_anchor(window, max_lce).min(upper - *i);

    for k in 1..anchor {
        let copied = unsafe { array.get(j + k) } + distance;
        unsafe { array.set(*i + k, copied) };
        if ctx.secondary != Secondary::None {
            let cur_i = *i + k;
            let cur_i_pss = unsafe { array.get(cur_i) };
            let mut cur_j = *i + k - 1;
            while cur_j > cur_i_pss {
                if let Some(aux) = aux {
                    unsafe { write_secondary_raw(ctx.secondary, aux, cur_j, cur_i) };
                }
                cur_j = unsafe { array.get(cur_j) };
            }
        }
    }
    *i += anchor - 1;
}

/// Parallel run extension, clipped to the slice's `upper` bound.
fn run_extension(
    ctx: &Ctx,
    array: RawSlice,
    aux: Option<RawSlice>,
    j: u32,
    i: &mut u32,
    max_lce: u32,
    period: u32,
    upper: u32,
) {
    let repetitions = (max_lce / period - 1).min((upper - *i) / period);
    let new_i = *i + repetitions * period;

    if let Some(aux) = aux {
        for k in (*i + 1)..new_i {
            match ctx.secondary {
                Secondary::Nss => unsafe { aux.set(k, aux.get(k - period) + period) },
                Secondary::Lyndon => unsafe { aux.set(k, aux.get(k - period)) },
                Secondary::None => {}
            }
        }
    }
    for k in (*i + 1)..new_i {
        let copied = unsafe { array.get(k - period) } + period;
        unsafe { array.set(k, copied) };
    }

    if ctx.byte(j + max_lce) < ctx.byte(*i + max_lce) {
        // Increasing run.
        for _ in 0..repetitions {
            *i += period;
            let pred = *i - period;
            unsafe { array.set(*i, pred) };
        }
    } else {
        // Decreasing run.
        let pss_of_new_i = unsafe { array.get(*i) };
        for _ in 0..repetitions {
            if let Some(aux) = aux {
                match ctx.secondary {
                    Secondary::Nss => unsafe { aux.set(*i, *i + period) },
                    Secondary::Lyndon => unsafe { aux.set(*i, period) },
                    Secondary::None => {}
                }
            }
            *i += period;
            unsafe { array.set(*i, pss_of_new_i) };
        }
    }
}

/// Sweep one thread's slice `[lower, upper)`.
fn process_slice(ctx: &Ctx, array: RawSlice, aux: Option<RawSlice>, threshold: u32, lower: u32, upper: u32) {
    let mut i = lower;
    while i < upper {
        let mut j = i - 1;
        let mut lce = 0u32;
        auto_lce(ctx, array, aux, lower, upper, threshold, &mut i, &mut j, &mut lce);
        while ctx.byte(j + lce) > ctx.byte(i + lce) {
            if let Some(aux) = aux {
                unsafe { write_secondary_raw(ctx.secondary, aux, j, i) };
            }
            next_j(ctx, array, aux, lower, upper, threshold, &mut i, &mut j, &mut lce);
        }
        unsafe { array.set(i, j) };
        i += 1;
    }
}

/// Clamp the requested thread count to `[1, min(available cores, N/2)]`.
pub fn clamp_parallel_p(requested: usize, n: usize) -> usize {
    let cap = (n / 2).max(1);
    requested.max(1).min(cap).min(num_cpus::get().max(1))
}

fn drive_parallel(
    text: &[u8],
    array: &mut [u32],
    aux: Option<&mut [u32]>,
    secondary: Secondary,
    threshold: u32,
    requested_threads: usize,
) {
    let n = text.len() as u32;
    let ctx = Ctx::new(text, secondary, threshold);

    for cell in array.iter_mut() {
        *cell = n + 1;
    }
    array[0] = 0;

    let aux_raw = aux.map(|a| {
        for cell in a.iter_mut() {
            *cell = 0;
        }
        RawSlice::new(a)
    });

    let p = clamp_parallel_p(requested_threads, n as usize);
    let slice_size = (n as usize + p - 1) / p;
    let array_raw = RawSlice::new(array);

    rayon::scope(|scope| {
        for t in 0..p {
            let lower = (1usize).max(t * slice_size) as u32;
            let upper = ((n as usize - 1).min((t + 1) * slice_size)) as u32;
            if lower >= upper {
                continue;
            }
            let ctx_ref = &ctx;
            scope.spawn(move |_| {
                // Every task holds only a `RawSlice` copy here, never a
                // `&mut [u32]` — see the `RawSlice` doc comment. Distinct
                // tasks' [lower, upper) ranges are disjoint for writes;
                // reads outside a task's own range are tolerated by the
                // algorithm regardless of which sibling has reached them.
                process_slice(ctx_ref, array_raw, aux_raw, threshold, lower, upper);
            });
        }
    });

    // The scope above has joined: no other thread can observe `array`/`aux`
    // concurrently any more, so it is sound to go back to plain slices.
    array[0] = n;
    array[(n - 1) as usize] = n;

    if secondary != Secondary::None {
        let aux = unsafe { aux_raw.unwrap().into_exclusive_slice() };
        aux[(n - 1) as usize] = match secondary {
            Secondary::Nss => n,
            Secondary::Lyndon => 1,
            Secondary::None => unreachable!(),
        };
        aux[0] = n - 1;
        let mut j = n - 2;
        while j > 0 {
            super::context::write_secondary(secondary, aux, j, n - 1);
            j = array[j as usize];
        }
    }
}

fn prepare(text: &[u8]) -> Result<u32, XssError> {
    validate(text)?;
    Ok(text.len() as u32)
}

/// PSS array only, computed with a static `p`-way partition.
pub fn pss_array_parallel(text: &[u8], p: usize, threshold: Option<u32>) -> Result<Vec<u32>, XssError> {
    let n = prepare(text)? as usize;
    let mut array = vec![0u32; n];
    drive_parallel(text, &mut array, None, Secondary::None, fix_threshold(threshold), p);
    Ok(array)
}

/// PSS and NSS arrays jointly, computed with a static `p`-way partition.
pub fn pss_and_nss_array_parallel(
    text: &[u8],
    p: usize,
    threshold: Option<u32>,
) -> Result<(Vec<u32>, Vec<u32>), XssError> {
    let n = prepare(text)? as usize;
    let mut array = vec![0u32; n];
    let mut aux = vec![0u32; n];
    drive_parallel(text, &mut array, Some(&mut aux), Secondary::Nss, fix_threshold(threshold), p);
    Ok((array, aux))
}

/// PSS and Lyndon arrays jointly, computed with a static `p`-way partition.
pub fn pss_and_lyndon_array_parallel(
    text: &[u8],
    p: usize,
    threshold: Option<u32>,
) -> Result<(Vec<u32>, Vec<u32>), XssError> {
    let n = prepare(text)? as usize;
    let mut array = vec![0u32; n];
    let mut aux = vec![0u32; n];
    drive_parallel(text, &mut array, Some(&mut aux), Secondary::Lyndon, fix_threshold(threshold), p);
    Ok((array, aux))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::sequential;
    use crate::text::sentinel_wrap;

    fn random_text(seed: u64, n: usize, sigma: u8) -> Vec<u8> {
        let mut state = seed ^ 0x9E3779B97F4A7C15;
        let mut body = Vec::with_capacity(n);
        for _ in 0..n {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            body.push(1 + (state % sigma as u64) as u8);
        }
        sentinel_wrap(&body)
    }

    #[test]
    fn matches_sequential_on_small_random_text() {
        for p in [1usize, 2, 4, 8] {
            let t = random_text(p as u64 + 1, 500, 4);
            let seq = sequential::pss_array(&t, None).unwrap();
            let par = pss_array_parallel(&t, p, None).unwrap();
            assert_eq!(seq, par, "p={p}");
        }
    }

    #[test]
    fn matches_sequential_with_nss_on_periodic_text() {
        let body: Vec<u8> = (0..2000).map(|i| b"ab"[i % 2]).collect();
        let t = sentinel_wrap(&body);
        let (seq_pss, seq_nss) = sequential::pss_and_nss_array(&t, None).unwrap();
        let (par_pss, par_nss) = pss_and_nss_array_parallel(&t, 4, None).unwrap();
        assert_eq!(seq_pss, par_pss);
        assert_eq!(seq_nss, par_nss);
    }

    #[test]
    fn clamp_respects_n_over_two() {
        assert_eq!(clamp_parallel_p(1000, 10), 5);
    }
}
