//! Track geometry: where each slide sits and how far to shift the track.
//!
//! Pure arithmetic over widths measured by the view. Nothing here is cached;
//! callers pass fresh widths on every pass because widths depend on the
//! viewport and on each slide's active/inactive state.

/// Left edge of the slide at `index` within the track.
///
/// Sum of the widths of all slides strictly before `index`, plus one `gap`
/// per preceding slide.
pub fn preceding_offset<F>(index: usize, gap: u32, width_of: F) -> i64
where
    F: Fn(usize) -> u32,
{
    let widths: i64 = (0..index).map(|i| i64::from(width_of(i))).sum();
    widths + i64::from(gap) * index as i64
}

/// Horizontal translation that centers the active slide in the viewport.
///
/// `translation = -(preceding - round((viewport - active) / 2))`, rounding
/// halves towards positive infinity. Negative values shift the track left.
pub fn centering_translation(preceding: i64, active_width: u32, viewport_width: u32) -> i64 {
    let slack = i64::from(viewport_width) - i64::from(active_width);
    let target = half_rounded_up(slack);
    -(preceding - target)
}

/// `n / 2` rounded half-up; e.g. `5 -> 3`, `-5 -> -2`.
fn half_rounded_up(n: i64) -> i64 {
    (n + 1).div_euclid(2)
}

/// Left edges of every slide within the track, in order.
pub fn slide_offsets<F>(count: usize, gap: u32, width_of: F) -> Vec<i64>
where
    F: Fn(usize) -> u32,
{
    let mut offsets = Vec::with_capacity(count);
    let mut x = 0i64;
    for i in 0..count {
        offsets.push(x);
        x += i64::from(width_of(i)) + i64::from(gap);
    }
    offsets
}
