//! Termination signals
//!
//! The interactive UI runs in raw mode on the alternate screen. Being killed
//! outright would leave the user's terminal unusable, so SIGINT, SIGTERM and
//! SIGHUP only raise a flag that the event loop checks every iteration.

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tracing::debug;

/// Register the shutdown flag for SIGINT, SIGTERM and SIGHUP
pub fn install_shutdown_flag() -> std::io::Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM, SIGHUP] {
        signal_hook::flag::register(signal, Arc::clone(&flag))?;
    }
    debug!("Shutdown signal handlers registered");
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_sighup_raises_flag() {
        let flag = install_shutdown_flag().unwrap();
        assert!(!flag.load(Ordering::SeqCst));
        signal_hook::low_level::raise(SIGHUP).unwrap();
        assert!(flag.load(Ordering::SeqCst));
    }
}
