use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::tracks::KeyframeTrack;

/// The transform property a track animates on its target bone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Translation,
    Rotation,
    Scale,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [
        ChannelKind::Translation,
        ChannelKind::Rotation,
        ChannelKind::Scale,
    ];

    fn slot(self) -> usize {
        match self {
            ChannelKind::Translation => 0,
            ChannelKind::Rotation => 1,
            ChannelKind::Scale => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMeta {
    pub bone_name: String,
    pub channel: ChannelKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    /// Number of keyframes in the track.
    #[must_use]
    pub fn key_count(&self) -> usize {
        match self {
            TrackData::Vector3(track) => track.times.len(),
            TrackData::Quaternion(track) => track.times.len(),
        }
    }

    fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
        }
    }
}

/// A complete track definition: target metadata plus keyframe data.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

/// A named, immutable bundle of keyframe tracks.
///
/// Built once per successfully decoded document; the playback side binds
/// tracks to a live skeleton by bone name via [`AnimationClip::track`].
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub frame_rate: f32,
    pub tracks: Vec<Track>,
    bone_index: FxHashMap<String, [Option<usize>; 3]>,
}

impl AnimationClip {
    /// Builds a clip, deriving `duration` from the latest keyframe across all
    /// tracks (0 when every track is empty).
    ///
    /// When the same bone name occurs on several tracks of the same channel
    /// kind, the later track wins name lookups; iteration over `tracks` still
    /// sees every track.
    #[must_use]
    pub fn new(name: String, frame_rate: f32, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        let mut bone_index: FxHashMap<String, [Option<usize>; 3]> = FxHashMap::default();
        for (idx, track) in tracks.iter().enumerate() {
            let slots = bone_index.entry(track.meta.bone_name.clone()).or_default();
            slots[track.meta.channel.slot()] = Some(idx);
        }

        Self {
            name,
            duration,
            frame_rate,
            tracks,
            bone_index,
        }
    }

    /// Looks up the track animating `channel` of the bone named `bone_name`.
    ///
    /// Unknown bone names simply yield `None`; binding against a skeleton
    /// that lacks some bones is the consumer's concern, not an error here.
    #[must_use]
    pub fn track(&self, bone_name: &str, channel: ChannelKind) -> Option<&Track> {
        let slots = self.bone_index.get(bone_name)?;
        // The index is built at construction; if a caller mutated `tracks`
        // out from under it, lookups degrade to None rather than panicking.
        slots[channel.slot()].and_then(|idx| self.tracks.get(idx))
    }

    /// All tracks targeting the bone named `bone_name`, in track order.
    pub fn tracks_for_bone<'a>(&'a self, bone_name: &'a str) -> impl Iterator<Item = &'a Track> {
        self.tracks
            .iter()
            .filter(move |t| t.meta.bone_name == bone_name)
    }
}
