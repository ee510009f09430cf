use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum RingError {
    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },

    #[error("Failed to allocate {capacity} bytes for ring buffer storage")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
