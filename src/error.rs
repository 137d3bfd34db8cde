/*
 * Error types shared by the portable chrome core and the Win32 layer.
 * The chrome components themselves degrade to defaults instead of failing, so
 * these errors surface mostly from host mutations (logged, then ignored) and
 * from class registration / window creation (returned to the caller).
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform initialization failed: {0}")]
    InitializationFailed(String),
    #[error("platform operation failed: {0}")]
    OperationFailed(String),
    #[error("invalid window handle: {0}")]
    InvalidHandle(String),
    #[cfg(target_os = "windows")]
    #[error("Win32 call failed: {0}")]
    Win32(#[from] windows::core::Error),
}

pub type Result<T> = std::result::Result<T, PlatformError>;
