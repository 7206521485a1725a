//! Dividing a span between weighted bands and dragging the boundaries between them.

/// Dragging never shrinks a band below this many pixels.
const MIN_BAND_LEN: i32 = 1;

/// Weights are derived from pixel lengths and stored as `f32`; this absorbs the noise so a
/// span split by those weights lands on the same pixels again.
const ROUNDING_SLACK: f64 = 1e-3;

/// Divide `len` pixels starting at `start` into one band per weight, `gap` apart.
///
/// Every band except the last gets its share of the length left after the gaps, rounded down.
/// The last band takes whatever remains so the bands always reach the end of the span.
/// Non-positive weights count as zero; if no weight is positive the bands are equal.
/// Returns `(start, len)` for each band.
pub(crate) fn split_weighted(start: i32, len: i32, weights: &[f32], gap: i32) -> Vec<(i32, i32)> {
    let Some(last) = weights.len().checked_sub(1) else {
        return vec![];
    };
    let end = start + len;
    let available = (len - gap * last as i32).max(0);
    let total: f64 = weights.iter().map(|w| f64::from(w.max(0.0))).sum();
    let share = |weight: f32| {
        if total > 0.0 {
            f64::from(weight.max(0.0)) / total
        } else {
            1.0 / weights.len() as f64
        }
    };

    let mut bands = Vec::with_capacity(weights.len());
    let mut pos = start;
    let mut used = 0;
    for (i, weight) in weights.iter().enumerate() {
        let band = if i == last {
            available - used
        } else {
            let wanted = (f64::from(available) * share(*weight) + ROUNDING_SLACK).floor() as i32;
            wanted.clamp(0, available - used)
        };
        bands.push((pos, band));
        pos = (pos + band + gap).min(end);
        used += band;
    }
    bands
}

/// Move the boundaries around band `target` and return the weights that reproduce the result.
///
/// `leading` grows the band towards its previous neighbour, `trailing` towards its next
/// neighbour; negative values shrink it. Only the two neighbouring boundaries move and no band
/// ends up smaller than [`MIN_BAND_LEN`] through the drag. The returned weights average to 1.
pub(crate) fn adjust_weights(
    len: i32,
    weights: &[f32],
    gap: i32,
    target: usize,
    leading: i32,
    trailing: i32,
) -> Vec<f32> {
    let mut lens: Vec<i32> = split_weighted(0, len, weights, gap)
        .into_iter()
        .map(|(_, band)| band)
        .collect();
    if target >= lens.len() {
        return weights.to_vec();
    }

    if target > 0 && leading != 0 {
        move_boundary(&mut lens, target - 1, -leading);
    }
    if target + 1 < lens.len() && trailing != 0 {
        move_boundary(&mut lens, target, trailing);
    }

    let total: i32 = lens.iter().sum();
    if total <= 0 {
        return weights.to_vec();
    }
    let count = lens.len() as f64;
    lens.iter()
        .map(|band| (f64::from(*band) * count / f64::from(total)) as f32)
        .collect()
}

/// Move the boundary after band `index` forward by `amount` pixels.
fn move_boundary(lens: &mut [i32], index: usize, amount: i32) {
    let lowest = MIN_BAND_LEN - lens[index];
    let highest = lens[index + 1] - MIN_BAND_LEN;
    if lowest > highest {
        return;
    }
    let amount = amount.clamp(lowest, highest);
    lens[index] += amount;
    lens[index + 1] -= amount;
}
