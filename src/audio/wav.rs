use crate::error::TranscodeError;

/// Size of the canonical RIFF/WAVE header for a single PCM stream.
pub const WAV_HEADER_LEN: usize = 44;

/// Sample layout of a headerless PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Layout produced by the speech backend: mono, 16-bit, 24 kHz.
    pub const SPEECH: WavSpec = WavSpec {
        sample_rate: 24_000,
        channels: 1,
        bits_per_sample: 16,
    };

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.channels) * u32::from(self.bits_per_sample / 8)
    }

    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }
}

impl Default for WavSpec {
    fn default() -> Self {
        Self::SPEECH
    }
}

/// WAV file header (44 bytes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    pub chunk_size: u32,
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    pub fn new(spec: &WavSpec, data_size: u32) -> Self {
        Self {
            chunk_size: 36 + data_size,
            fmt_size: 16,
            audio_format: 1, // PCM
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            byte_rate: spec.byte_rate(),
            block_align: spec.block_align(),
            bits_per_sample: spec.bits_per_sample,
            data_size,
        }
    }

    /// Serialize to the fixed little-endian layout.
    pub fn to_bytes(&self) -> [u8; WAV_HEADER_LEN] {
        let mut out = [0u8; WAV_HEADER_LEN];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&self.fmt_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Parse WAV header from bytes
    pub fn parse(bytes: &[u8]) -> Result<Self, TranscodeError> {
        if bytes.len() < WAV_HEADER_LEN {
            return Err(TranscodeError::InvalidHeader("file too short"));
        }
        if &bytes[0..4] != b"RIFF" {
            return Err(TranscodeError::InvalidHeader("missing RIFF identifier"));
        }
        if &bytes[8..12] != b"WAVE" {
            return Err(TranscodeError::InvalidHeader("missing WAVE identifier"));
        }
        if &bytes[12..16] != b"fmt " {
            return Err(TranscodeError::InvalidHeader("missing fmt chunk"));
        }
        if &bytes[36..40] != b"data" {
            return Err(TranscodeError::InvalidHeader("missing data chunk"));
        }

        let u16_at = |i: usize| u16::from_le_bytes([bytes[i], bytes[i + 1]]);
        let u32_at =
            |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);

        Ok(Self {
            chunk_size: u32_at(4),
            fmt_size: u32_at(16),
            audio_format: u16_at(20),
            channels: u16_at(22),
            sample_rate: u32_at(24),
            byte_rate: u32_at(28),
            block_align: u16_at(32),
            bits_per_sample: u16_at(34),
            data_size: u32_at(40),
        })
    }

    /// Playback length of the data chunk in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.byte_rate == 0 {
            return 0.0;
        }
        f64::from(self.data_size) / f64::from(self.byte_rate)
    }
}

/// Wrap a headerless PCM payload in a WAV container.
///
/// The payload must hold whole samples; an odd byte count is rejected
/// rather than truncated.
pub fn pcm_to_wav(pcm: &[u8], spec: WavSpec) -> Result<Vec<u8>, TranscodeError> {
    let sample_bytes = usize::from(spec.block_align().max(1));
    if pcm.len() % sample_bytes != 0 {
        return Err(TranscodeError::OddLength(pcm.len()));
    }

    let data_size = u32::try_from(pcm.len())
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or(TranscodeError::PayloadTooLarge(pcm.len()))?;

    let header = WavHeader::new(&spec, data_size);
    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    wav.extend_from_slice(&header.to_bytes());
    wav.extend_from_slice(pcm);
    Ok(wav)
}
