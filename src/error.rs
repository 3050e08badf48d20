/// Reasons a scene can fail to mount. Everything after mount is best-effort
/// and only logged.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("drawing surface not found: no element matches {0:?}")]
    SurfaceNotFound(String),
    #[error("element matching {0:?} is not a <canvas>")]
    NotACanvas(String),
    #[error("a scene is already mounted")]
    AlreadyMounted,
    #[error("WebGPU init failed: {0:#}")]
    Gpu(anyhow::Error),
}
