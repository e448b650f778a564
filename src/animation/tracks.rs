use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last keyframe interval a track was sampled in.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// Keyframed values over time. `times` is sorted ascending.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// # Panics
    /// If `times` is empty or its length differs from `values`.
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        assert!(!times.is_empty(), "Track is empty");
        assert_eq!(times.len(), values.len(), "Track times/values length mismatch");
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples without a cursor (binary search).
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        let next_idx = self.times.partition_point(|&t| t <= time);
        self.sample_at_frame(next_idx.saturating_sub(1), time)
    }

    /// Samples using `cursor` as a hint; sequential playback is O(1).
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> T {
        let len = self.times.len();
        if len == 1 {
            return self.values[0];
        }

        let i = cursor.last_index.min(len - 1);
        let found = if time >= self.times[i] {
            // Forward: check the next few intervals.
            (i..len.min(i + MAX_SCAN_OFFSET + 1))
                .find(|&idx| idx == len - 1 || time < self.times[idx + 1])
        } else {
            // Backward: short scan toward the start.
            (i.saturating_sub(MAX_SCAN_OFFSET)..i)
                .rev()
                .find(|&idx| time >= self.times[idx])
        };

        let index = found.unwrap_or_else(|| {
            self.times
                .partition_point(|&t| t <= time)
                .saturating_sub(1)
        });
        cursor.last_index = index;

        self.sample_at_frame(index, time)
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();
        if index >= len - 1 {
            return self.values[len - 1];
        }
        if time <= self.times[0] {
            return self.values[0];
        }

        let t0 = self.times[index];
        let t1 = self.times[index + 1];
        let dt = t1 - t0;
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[index + 1], t)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_time_of_empty_track_is_zero() {
        let track: KeyframeTrack<f32> = KeyframeTrack {
            times: Vec::new(),
            values: Vec::new(),
            interpolation: InterpolationMode::Linear,
        };
        assert_eq!(track.end_time(), 0.0);
    }
}
