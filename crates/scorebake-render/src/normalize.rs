//! Global peak normalization.

use tracing::warn;

use crate::buffer::AudioBuffer;

/// Divides every sample by the global peak so the loudest sample becomes ±1.0.
///
/// One factor is applied to all channels, keeping their relative levels. A
/// silent buffer is left untouched. Returns the peak measured before scaling.
pub fn normalize_peak(buffer: &mut AudioBuffer) -> f64 {
    let peak = buffer.peak();

    if peak > 0.0 {
        for channel in buffer.channels_mut() {
            for sample in channel.iter_mut() {
                *sample /= peak;
            }
        }
    } else {
        warn!("rendered buffer is silent; skipping normalization");
    }

    peak
}
