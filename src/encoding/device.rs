//! Compute device selection for encoder inference.

use candle_core::Device;
use tracing::debug;

/// Picks the device encoder inference runs on.
///
/// GPU backends compiled in via the `metal`/`cuda` features are probed in
/// that order; one that fails to initialize is skipped with a warning. The
/// CPU needs no probe and is the fallback for every build, so selection
/// itself cannot fail.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Encoder inference on Metal");
            return device;
        }
        Err(error) => {
            tracing::warn!(error = %error, "Metal backend failed to initialize, skipping");
        }
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Encoder inference on CUDA");
            return device;
        }
        Err(error) => {
            tracing::warn!(error = %error, "CUDA backend failed to initialize, skipping");
        }
    }

    debug!("Encoder inference on CPU");
    Device::Cpu
}
