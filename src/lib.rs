#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod rts;

pub use animation::{
    AnimationAction, AnimationClip, ChannelKind, Interpolatable, InterpolationMode, KeyframeCursor,
    KeyframeTrack, LoopMode, Track, TrackData, TrackMeta, TrackValue, crossfade,
};
pub use errors::{Result, RtsError};
pub use rts::{
    CHANNELS_PER_BONE, FramePolicy, ParseOptions, RtsHeader, parse_clip, parse_clip_with,
    parse_header,
};
