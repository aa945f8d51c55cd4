mod values;
pub mod tracks;
pub mod clip;
pub mod action;

pub use clip::{AnimationClip, ChannelKind, Track, TrackData, TrackMeta};
pub use action::{AnimationAction, LoopMode, TrackValue, crossfade};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
