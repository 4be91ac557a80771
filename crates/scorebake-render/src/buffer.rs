//! Multi-channel sample buffer.

/// A fixed number of equally long channels of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f64>>,
}

impl AudioBuffer {
    /// Creates a silent buffer.
    pub fn new(channel_count: usize, frame_count: usize, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: vec![vec![0.0; frame_count]; channel_count],
        }
    }

    /// Builds a buffer from existing channels. Channels are truncated to the
    /// shortest one.
    pub fn from_channels(mut channels: Vec<Vec<f64>>, sample_rate: u32) -> Self {
        let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
        for channel in channels.iter_mut() {
            channel.truncate(frames);
        }
        Self {
            sample_rate,
            channels,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels.
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    pub(crate) fn channels_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.channels
    }

    /// Adds `samples` into `channel` starting at `offset`. Samples past the
    /// end of the buffer are dropped.
    pub fn accumulate(&mut self, channel: usize, offset: usize, samples: &[f64]) {
        let Some(target) = self.channels.get_mut(channel) else {
            return;
        };
        if offset >= target.len() {
            return;
        }
        for (out, sample) in target[offset..].iter_mut().zip(samples) {
            *out += sample;
        }
    }

    /// Largest absolute sample over all channels.
    pub fn peak(&self) -> f64 {
        self.channels
            .iter()
            .flatten()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    /// Returns true if every sample is zero.
    pub fn is_silent(&self) -> bool {
        self.peak() == 0.0
    }

    /// Returns true if all channels carry identical samples.
    pub fn is_dual_mono(&self) -> bool {
        match self.channels.split_first() {
            Some((first, rest)) => rest.iter().all(|channel| channel == first),
            None => true,
        }
    }

    /// Frame-interleaved samples (`L0 R0 L1 R1 ...` for stereo).
    pub fn interleave(&self) -> Vec<f64> {
        let frames = self.frame_count();
        let mut output = Vec::with_capacity(frames * self.channel_count());
        for frame in 0..frames {
            for channel in &self.channels {
                output.push(channel[frame]);
            }
        }
        output
    }
}
