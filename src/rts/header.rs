use crate::errors::{Result, RtsError};

/// Channels per bone in an RTS document: 3 translation + 3 rotation + 3 scale.
pub const CHANNELS_PER_BONE: usize = 9;

/// Positional channel codes of one bone group, in fixed file order.
const CHANNEL_CODES: [&str; CHANNELS_PER_BONE] =
    ["tx", "ty", "tz", "rx", "ry", "rz", "sx", "sy", "sz"];

/// Decoded document header: frame rate (line 1) and bone channel layout
/// (line 2).
#[derive(Debug, Clone, PartialEq)]
pub struct RtsHeader {
    /// Sampling rate in frames per second. Finite and strictly positive.
    pub frame_rate: f32,
    /// Bone names in header encounter order. Every bone contributes the full
    /// 9-channel group; duplicate names are preserved as independent entries.
    pub bones: Vec<String>,
}

impl RtsHeader {
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Number of numeric fields every frame line must carry.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.bones.len() * CHANNELS_PER_BONE
    }

    /// Bone names with duplicates removed, first occurrence wins the order.
    #[must_use]
    pub fn unique_bone_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.bones.len());
        for bone in &self.bones {
            if !names.contains(&bone.as_str()) {
                names.push(bone);
            }
        }
        names
    }
}

/// Splits a document into lines, accepting both `\r\n` and `\n`.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Parses the two mandatory leading lines of an RTS document.
pub fn parse_header(text: &str) -> Result<RtsHeader> {
    let lines = split_lines(text);
    parse_header_lines(&lines)
}

pub(crate) fn parse_header_lines(lines: &[&str]) -> Result<RtsHeader> {
    if lines.len() < 2 {
        return Err(RtsError::EmptyDocument);
    }

    let frame_rate = parse_frame_rate(lines[0])?;
    let bones = parse_channel_tokens(lines[1])?;

    Ok(RtsHeader { frame_rate, bones })
}

fn parse_frame_rate(line: &str) -> Result<f32> {
    let raw = line.trim();
    let rate: f32 = raw
        .parse()
        .map_err(|_| RtsError::InvalidFrameRate(raw.to_string()))?;

    // Frame times are derived as index / rate, so zero is as unusable as a
    // negative or non-finite rate.
    if !rate.is_finite() || rate <= 0.0 {
        return Err(RtsError::InvalidFrameRate(raw.to_string()));
    }

    Ok(rate)
}

fn parse_channel_tokens(line: &str) -> Result<Vec<String>> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();

    if line.trim().is_empty() || tokens.len() % CHANNELS_PER_BONE != 0 {
        return Err(RtsError::MalformedHeader {
            reason: format!(
                "token count {} is not a positive multiple of {CHANNELS_PER_BONE}",
                if line.trim().is_empty() { 0 } else { tokens.len() }
            ),
        });
    }

    let mut bones = Vec::with_capacity(tokens.len() / CHANNELS_PER_BONE);

    for group in tokens.chunks_exact(CHANNELS_PER_BONE) {
        for (pos, token) in group.iter().enumerate() {
            // Bone names may themselves contain dots, so the channel code is
            // whatever follows the last separator.
            let Some((name, code)) = token.rsplit_once('.') else {
                return Err(RtsError::MalformedHeader {
                    reason: format!("token {token:?} has no '.' bone/channel separator"),
                });
            };

            if code != CHANNEL_CODES[pos] {
                return Err(RtsError::MalformedHeader {
                    reason: format!(
                        "unexpected channel code {code:?} in token {token:?}, expected {:?}",
                        CHANNEL_CODES[pos]
                    ),
                });
            }

            // The bone name is taken from the group's first token only; names
            // on the remaining 8 tokens are not cross-checked. A corrupt file
            // can therefore mismatch names within one group undetected.
            if pos == 0 {
                bones.push(name.to_string());
            }
        }
    }

    Ok(bones)
}
