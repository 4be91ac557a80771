//! 16-bit PCM WAV encoding of rendered buffers.

use std::io::Cursor;

use crate::buffer::AudioBuffer;
use crate::error::RenderResult;

/// Encoded WAV file plus a content hash of its PCM payload.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the interleaved PCM bytes only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// Frames per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes a buffer as 16-bit integer PCM.
    ///
    /// Samples are clipped to [-1, 1] before conversion.
    pub fn from_buffer(buffer: &AudioBuffer) -> RenderResult<Self> {
        let channels = buffer.channel_count() as u16;
        let spec = hound::WavSpec {
            channels,
            sample_rate: buffer.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let interleaved = buffer.interleave();
        let mut pcm = Vec::with_capacity(interleaved.len() * 2);
        let mut cursor = Cursor::new(Vec::with_capacity(44 + interleaved.len() * 2));
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            for &sample in &interleaved {
                let value = to_pcm16(sample);
                pcm.extend_from_slice(&value.to_le_bytes());
                writer.write_sample(value)?;
            }
            writer.finalize()?;
        }

        Ok(Self {
            wav_data: cursor.into_inner(),
            pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
            sample_rate: buffer.sample_rate(),
            channels,
            num_frames: buffer.frame_count(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}

impl AudioBuffer {
    /// Encodes the buffer as a 16-bit WAV file.
    pub fn to_wav(&self) -> RenderResult<WavResult> {
        WavResult::from_buffer(self)
    }
}

#[inline]
fn to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pcm_conversion() {
        assert_eq!(to_pcm16(0.0), 0);
        assert_eq!(to_pcm16(1.0), 32767);
        assert_eq!(to_pcm16(-1.0), -32767);
        assert_eq!(to_pcm16(2.0), 32767);
        assert_eq!(to_pcm16(0.5), 16384);
    }

    #[test]
    fn test_header_and_size() {
        let buffer = AudioBuffer::from_channels(vec![vec![0.0, 0.5, -0.5], vec![0.0, 0.5, -0.5]], 22050);
        let wav = buffer.to_wav().unwrap();

        assert_eq!(&wav.wav_data[0..4], b"RIFF");
        assert_eq!(&wav.wav_data[8..12], b"WAVE");
        assert!(wav.wav_data.len() >= 44 + 3 * 2 * 2);
        assert_eq!(wav.channels, 2);
        assert_eq!(wav.num_frames, 3);
    }

    #[test]
    fn test_roundtrip_through_reader() {
        let buffer = AudioBuffer::from_channels(vec![vec![1.0, -1.0], vec![0.25, 0.0]], 8000);
        let wav = buffer.to_wav().unwrap();

        let reader = hound::WavReader::new(Cursor::new(wav.wav_data)).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.spec().sample_rate, 8000);
        let samples: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![32767, 8192, -32767, 0]);
    }

    #[test]
    fn test_hash_tracks_content() {
        let a = AudioBuffer::from_channels(vec![vec![0.1, 0.2]], 8000).to_wav().unwrap();
        let b = AudioBuffer::from_channels(vec![vec![0.1, 0.2]], 8000).to_wav().unwrap();
        let c = AudioBuffer::from_channels(vec![vec![0.2, 0.1]], 8000).to_wav().unwrap();

        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_ne!(a.pcm_hash, c.pcm_hash);
        assert_eq!(a.pcm_hash.len(), 64);
    }
}
