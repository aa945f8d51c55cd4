use std::sync::Arc;

use glam::{EulerRot, Quat, Vec3};
use log::{debug, warn};

use crate::animation::clip::{AnimationClip, ChannelKind, Track, TrackData, TrackMeta};
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::errors::{Result, RtsError};
use crate::rts::header::{CHANNELS_PER_BONE, parse_header_lines, split_lines};

/// What to do with a frame line that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePolicy {
    /// Abort the whole parse on the first bad frame. A silently shortened
    /// clip is a worse failure mode for animation correctness than an
    /// explicit error, so this is the default.
    #[default]
    Strict,
    /// Drop the bad frame with a warning and keep decoding. Surviving frames
    /// keep the times derived from their original frame index.
    SkipMalformed,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub frame_policy: FramePolicy,
    /// Fail fast with [`RtsError::DocumentTooLarge`] when the document has
    /// more lines than this, before any decoding.
    pub max_lines: Option<usize>,
}

/// Per-bone sample accumulator across frames.
struct BoneSamples {
    translations: Vec<Vec3>,
    rotations: Vec<Quat>,
    scales: Vec<Vec3>,
}

impl BoneSamples {
    fn with_capacity(frames: usize) -> Self {
        Self {
            translations: Vec::with_capacity(frames),
            rotations: Vec::with_capacity(frames),
            scales: Vec::with_capacity(frames),
        }
    }
}

/// Decodes a full RTS document into an [`AnimationClip`] with default
/// (strict) options.
pub fn parse_clip(text: &str, name: &str) -> Result<AnimationClip> {
    parse_clip_with(text, name, &ParseOptions::default())
}

/// Decodes a full RTS document into an [`AnimationClip`].
///
/// Rotation samples are Euler angles in degrees, intrinsic XYZ order, and are
/// converted to quaternions; every emitted rotation track carries 4
/// components per key. Translation and scale stay as 3-component vectors.
/// The result always holds exactly `3 * bone_count` tracks, one per
/// (bone, channel kind) pair, all linearly interpolated. A document with no
/// frame lines yields a clip with empty tracks and zero duration.
pub fn parse_clip_with(text: &str, name: &str, options: &ParseOptions) -> Result<AnimationClip> {
    let mut lines = split_lines(text);

    if let Some(limit) = options.max_lines
        && lines.len() > limit
    {
        return Err(RtsError::DocumentTooLarge {
            lines: lines.len(),
            limit,
        });
    }

    // A file ending in a newline splits into a final empty line; ignore it
    // (and any further blank padding at the end).
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let header = parse_header_lines(&lines)?;
    let field_count = header.field_count();
    let bone_count = header.bone_count();
    let frame_lines = &lines[2..];

    let mut times: Vec<f32> = Vec::with_capacity(frame_lines.len());
    let mut samples: Vec<BoneSamples> = (0..bone_count)
        .map(|_| BoneSamples::with_capacity(frame_lines.len()))
        .collect();
    let mut fields: Vec<f32> = Vec::with_capacity(field_count);

    for (frame, line) in frame_lines.iter().enumerate() {
        // 1-based line number in the source text; frames start at line 3.
        let line_no = frame + 3;

        match decode_frame_fields(line, line_no, field_count, &mut fields) {
            Ok(()) => {}
            Err(err) => match options.frame_policy {
                FramePolicy::Strict => return Err(err),
                FramePolicy::SkipMalformed => {
                    warn!("skipping malformed frame at line {line_no}: {err}");
                    continue;
                }
            },
        }

        times.push(frame as f32 / header.frame_rate);

        for (bone_idx, accum) in samples.iter_mut().enumerate() {
            let base = bone_idx * CHANNELS_PER_BONE;
            let chunk = &fields[base..base + CHANNELS_PER_BONE];

            accum
                .translations
                .push(Vec3::new(chunk[0], chunk[1], chunk[2]));
            accum
                .rotations
                .push(euler_degrees_to_quat(chunk[3], chunk[4], chunk[5]));
            accum.scales.push(Vec3::new(chunk[6], chunk[7], chunk[8]));
        }
    }

    // Every track of the clip shares one time buffer.
    let frame_count = times.len();
    let times: Arc<[f32]> = times.into();

    let mut tracks = Vec::with_capacity(bone_count * 3);
    for (bone_name, accum) in header.bones.iter().zip(samples) {
        tracks.push(Track {
            meta: TrackMeta {
                bone_name: bone_name.clone(),
                channel: ChannelKind::Translation,
            },
            data: TrackData::Vector3(KeyframeTrack::new(
                Arc::clone(&times),
                accum.translations,
                InterpolationMode::Linear,
            )),
        });
        tracks.push(Track {
            meta: TrackMeta {
                bone_name: bone_name.clone(),
                channel: ChannelKind::Rotation,
            },
            data: TrackData::Quaternion(KeyframeTrack::new(
                Arc::clone(&times),
                accum.rotations,
                InterpolationMode::Linear,
            )),
        });
        tracks.push(Track {
            meta: TrackMeta {
                bone_name: bone_name.clone(),
                channel: ChannelKind::Scale,
            },
            data: TrackData::Vector3(KeyframeTrack::new(
                Arc::clone(&times),
                accum.scales,
                InterpolationMode::Linear,
            )),
        });
    }

    debug!(
        "decoded RTS clip {name:?}: {bone_count} bones, {frame_count} frames at {} fps",
        header.frame_rate
    );

    Ok(AnimationClip::new(
        name.to_string(),
        header.frame_rate,
        tracks,
    ))
}

/// Splits one frame line into exactly `expected` decimal fields.
fn decode_frame_fields(
    line: &str,
    line_no: usize,
    expected: usize,
    out: &mut Vec<f32>,
) -> Result<()> {
    let raw_fields: Vec<&str> = line.split(',').collect();

    if raw_fields.len() != expected {
        return Err(RtsError::FrameFieldCountMismatch {
            line: line_no,
            expected,
            found: raw_fields.len(),
        });
    }

    out.clear();
    for (idx, raw) in raw_fields.iter().enumerate() {
        let value: f32 = raw.trim().parse().map_err(|_| RtsError::InvalidSample {
            line: line_no,
            column: idx + 1,
        })?;
        out.push(value);
    }

    Ok(())
}

/// Rotation convention for RTS samples: Euler angles in degrees, applied in
/// intrinsic X-then-Y-then-Z order.
fn euler_degrees_to_quat(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        x.to_radians(),
        y.to_radians(),
        z.to_radians(),
    )
}
