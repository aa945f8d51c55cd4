//! RTS (Rotation-Translation-Scale) document decoding.
//!
//! An RTS file is a newline-delimited, comma-field text dump of a sampled
//! skeletal animation:
//!
//! ```text
//! 30
//! Root_jnt.tx,Root_jnt.ty,Root_jnt.tz,Root_jnt.rx, ... ,Root_jnt.sz,Hip_jnt.tx, ...
//! 0.0,1.62,0.0,0.0,0.0,0.0,1.0,1.0,1.0, ...
//! 0.0,1.63,0.0,4.5,0.0,0.0,1.0,1.0,1.0, ...
//! ```
//!
//! Line 1 is the frame rate, line 2 names every bone channel in fixed
//! 9-token groups (`tx,ty,tz,rx,ry,rz,sx,sy,sz` per bone), and every line
//! after that is one animation frame with one decimal value per header
//! token. [`parse_header`] decodes the two leading lines; [`parse_clip`]
//! decodes the whole document into an
//! [`AnimationClip`](crate::animation::AnimationClip) with one keyframe
//! track per bone channel group.
//!
//! Decoding is a pure transformation of the input text; acquiring the text
//! (file, network, drag-and-drop) is the caller's concern.

mod builder;
mod header;

pub use builder::{FramePolicy, ParseOptions, parse_clip, parse_clip_with};
pub use header::{CHANNELS_PER_BONE, RtsHeader, parse_header};
