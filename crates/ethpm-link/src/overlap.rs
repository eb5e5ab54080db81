//! Overlap detection for link offsets

use ethpm_core::{ManifestError, ManifestResult};

/// Check that no two offsets claim overlapping `[offset, offset + length)` ranges.
///
/// Offsets `a <= b` collide when `b <= a + length`, so ranges that merely
/// touch end-to-start are rejected too. The first offset (in list order) that
/// collides with any earlier one is reported together with the earliest
/// offset it collides with.
pub fn check_no_overlap(offsets: &[usize], length: usize) -> ManifestResult<()> {
    for (index, &offset) in offsets.iter().enumerate() {
        let claimed = offsets[..index]
            .iter()
            .copied()
            .find(|&earlier| collides(earlier, offset, length));

        if let Some(claimed_start) = claimed {
            return Err(ManifestError::Overlap {
                offset,
                index,
                claimed_start,
                claimed_end: claimed_start.saturating_add(length),
            });
        }
    }
    Ok(())
}

fn collides(a: usize, b: usize, length: usize) -> bool {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    high <= low.saturating_add(length)
}
