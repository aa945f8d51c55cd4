use std::sync::Arc;

use crate::animation::clip::{AnimationClip, TrackData};
use crate::animation::tracks::KeyframeCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// An in-flight weight ramp toward `target`, in weight units per second.
#[derive(Debug, Clone, Copy)]
struct Fade {
    target: f32,
    rate: f32,
}

/// Playback state for one clip.
///
/// Fading is explicit per-action state driven by [`AnimationAction::update`];
/// there is no hidden "active/previous action" registry. Transitions between
/// two actions are the caller's job, see [`crossfade`].
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    fade: Option<Fade>,
    track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            fade: None,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Rewinds to the start and re-enables the action.
    pub fn reset(&mut self) -> &mut Self {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self
    }

    /// Ramps the weight from 0 to 1 over `duration` seconds.
    pub fn fade_in(&mut self, duration: f32) -> &mut Self {
        self.enabled = true;
        if duration > 0.0 {
            self.weight = 0.0;
            self.fade = Some(Fade {
                target: 1.0,
                rate: 1.0 / duration,
            });
        } else {
            self.weight = 1.0;
            self.fade = None;
        }
        self
    }

    /// Ramps the weight from its current value to 0 over `duration` seconds,
    /// then disables the action.
    pub fn fade_out(&mut self, duration: f32) -> &mut Self {
        if duration > 0.0 && self.weight > 0.0 {
            self.fade = Some(Fade {
                target: 0.0,
                rate: self.weight / duration,
            });
        } else {
            self.weight = 0.0;
            self.enabled = false;
            self.fade = None;
        }
        self
    }

    /// Advances playback by `dt` seconds (unscaled for fades, scaled by
    /// `time_scale` for the clip time).
    pub fn update(&mut self, dt: f32) {
        self.update_fade(dt);

        if self.paused || !self.enabled {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                // Play once, stop at either end
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Reverse playback wraps from the end
                    self.time = duration + (self.time % duration);
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                // Normalize time into a [0, 2*duration) cycle, second half
                // plays backward
                let mut t = self.time % double_duration;
                if t < 0.0 {
                    t += double_duration;
                }
                if t > duration {
                    t = double_duration - t;
                }
                self.time = t;
            }
        }
    }

    fn update_fade(&mut self, dt: f32) {
        let Some(fade) = self.fade else { return };

        let step = fade.rate * dt;
        if self.weight < fade.target {
            self.weight = (self.weight + step).min(fade.target);
        } else {
            self.weight = (self.weight - step).max(fade.target);
        }

        if (self.weight - fade.target).abs() < f32::EPSILON {
            self.weight = fade.target;
            self.fade = None;
            if self.weight <= 0.0 {
                self.enabled = false;
            }
        }
    }

    /// Samples the value of the given track at the current time.
    ///
    /// Returns `None` for an out-of-range index or a track with no keys.
    pub fn sample_track(&mut self, track_index: usize) -> Option<TrackValue> {
        let track = self.clip.tracks.get(track_index)?;
        let cursor = self.track_cursors.get_mut(track_index)?;

        match &track.data {
            TrackData::Vector3(t) => t
                .sample_with_cursor(self.time, cursor)
                .map(TrackValue::Vector3),
            TrackData::Quaternion(t) => t
                .sample_with_cursor(self.time, cursor)
                .map(TrackValue::Quaternion),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Vector3(glam::Vec3),
    Quaternion(glam::Quat),
}

/// Smooth transition from `previous` (if any) to `next`.
///
/// The caller owns both actions; nothing here is remembered between calls.
/// `previous` fades out over `duration` while `next` is rewound, restored to
/// normal speed, and faded in. Passing the same action as both sides is ruled
/// out by the two mutable borrows.
pub fn crossfade(previous: Option<&mut AnimationAction>, next: &mut AnimationAction, duration: f32) {
    if let Some(prev) = previous {
        prev.fade_out(duration);
    }

    next.reset();
    next.time_scale = 1.0;
    next.fade_in(duration);
}
