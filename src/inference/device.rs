use candle_core::Device;
use tracing::warn;

use super::error::InferenceError;

/// Selects the compute device based on enabled features (falls back to CPU).
///
/// With neither `metal` nor `cuda` compiled in this always returns
/// [`Device::Cpu`]. GPU probing failures are logged, never fatal.
pub fn select_device() -> Result<Device, InferenceError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Using Metal GPU acceleration");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Using CUDA GPU acceleration");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        warn!("No GPU device available, falling back to CPU");
    } else {
        tracing::debug!("No GPU backend compiled, using CPU");
    }

    Ok(Device::Cpu)
}
