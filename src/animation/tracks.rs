use std::sync::Arc;

use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

/// Per-consumer sampling cursor.
///
/// Playback usually advances time by small steps, so the keyframe interval
/// containing `time` is almost always at or next to the one found last frame.
/// The cursor remembers that index; sequential sampling stays O(1) with a
/// binary-search fallback for scrubbing and loop resets.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// A time-ordered sequence of values for one animatable property.
///
/// `times` is strictly increasing and `values` holds exactly one sample per
/// entry in `times`. The time buffer is shared, so sibling tracks sampled
/// from the same document reuse one allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Arc<[f32]>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(
        times: impl Into<Arc<[f32]>>,
        values: Vec<T>,
        interpolation: InterpolationMode,
    ) -> Self {
        Self {
            times: times.into(),
            values,
            interpolation,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// End time of the track, or 0 when it has no keys.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples the track at `time` without cursor acceleration.
    ///
    /// Returns `None` for an empty track. Times outside the keyframe range
    /// clamp to the first/last value.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.times.is_empty() {
            return None;
        }

        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= time);
        let idx = next_idx.saturating_sub(1);

        Some(self.sample_at_frame(idx, time))
    }

    /// Samples with a caller-held cursor, updated in place.
    ///
    /// Returns `None` for an empty track.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        if self.times.is_empty() {
            return None;
        }

        let len = self.times.len();
        // Fast path: static data (single keyframe)
        if len == 1 {
            return Some(self.values[0]);
        }

        // A cursor carried over from a longer track (e.g. the clip was
        // switched) can be out of bounds; clamp the scan origin into range.
        let i = cursor.last_index.min(len - 1);

        let t_curr = self.times[i];

        let found_index = if time >= t_curr {
            // Time moved forward: linear scan up to MAX_SCAN_OFFSET intervals,
            // checking [times[idx], times[idx+1]) from the cursor onward.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.times[len - 1] {
                        res = Some(len - 1); // Clamp to end
                    }
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Time moved backward (reverse playback or loop reset): scan the
            // other way, looking for the first key at or before `time`.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = if let Some(idx) = found_index {
            cursor.last_index = idx;
            idx
        } else {
            // Large jump (scrubbing): global binary search, O(log N).
            let next_idx = self.times.partition_point(|&t| t <= time);
            let idx = next_idx.saturating_sub(1);
            cursor.last_index = idx;
            idx
        };

        Some(self.sample_at_frame(final_index, time))
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        // No next frame available: hold the last value.
        if index >= len - 1 {
            return self.values[len - 1];
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[next_idx], t)
            }
        }
    }
}
