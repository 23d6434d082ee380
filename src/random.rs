//! Draw base values at random.
use std::ops::Range;

use rand::{Rng, RngCore};
use tracing::trace;

/// the base values a listing can be renumbered from
pub const BASE_RANGE: Range<i64> = 2..15;

/// draw a base value uniformly in [`BASE_RANGE`], different from `prior`
///
/// this is a rejection loop: values equal to `prior` are drawn again. because
/// [`BASE_RANGE`] holds more than one value, it always terminates.
pub fn draw_base(prior: i64, rng: &mut impl RngCore) -> i64 {
    loop {
        let base = rng.gen_range(BASE_RANGE);
        if base != prior {
            return base;
        }
        trace!("rejected base {}, same as the prior value", base);
    }
}
