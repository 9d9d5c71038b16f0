//! libsrt Module
//!
//! Loads libsrt at runtime and exposes the handful of entry points the
//! configuration engine needs: library start-up and clean-up, socket
//! creation and closing, and `srt_setsockopt`.

use std::ffi::{c_char, c_int, c_void, CStr};
use std::path::{Path, PathBuf};

use entities_srt_options::SocketOptionId;
use libloading::{Library, Symbol};
use thiserror::Error;
use usecases_srt_configure::{SetOptionError, SocketHandle, SocketOptionSetter};

/// `SRT_ERROR`
const SRT_ERROR: c_int = -1;

type SrtStartupFn = unsafe extern "C" fn() -> c_int;
type SrtCleanupFn = unsafe extern "C" fn() -> c_int;
type SrtCreateSocketFn = unsafe extern "C" fn() -> c_int;
type SrtCloseFn = unsafe extern "C" fn(c_int) -> c_int;
type SrtSetSockOptFn = unsafe extern "C" fn(c_int, c_int, c_int, *const c_void, c_int) -> c_int;
type SrtGetLastErrorStrFn = unsafe extern "C" fn() -> *const c_char;

/// libsrt loading and socket errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibSrtError {
    /// Library file not found
    #[error("libsrt not found: {}", .0.display())]
    LibraryNotFound(PathBuf),
    /// Library load failed (OS error)
    #[error("failed to load libsrt: {0}")]
    LoadFailed(String),
    /// A required entry point is missing
    #[error("libsrt symbol not found: {0}")]
    SymbolNotFound(String),
    /// `srt_startup` failed
    #[error("srt_startup failed: {0}")]
    StartupFailed(String),
    /// `srt_create_socket` failed
    #[error("cannot create SRT socket: {0}")]
    SocketCreateFailed(String),
    /// `srt_close` failed
    #[error("cannot close SRT socket {socket}: {reason}")]
    CloseFailed { socket: SocketHandle, reason: String },
}

/// Entry points resolved from the loaded library
#[derive(Clone, Copy)]
struct SrtApi {
    startup: SrtStartupFn,
    cleanup: SrtCleanupFn,
    create_socket: SrtCreateSocketFn,
    close: SrtCloseFn,
    setsockopt: SrtSetSockOptFn,
    getlasterror_str: SrtGetLastErrorStrFn,
}

/// A started libsrt instance
///
/// `srt_cleanup` runs when the value is dropped.
pub struct LibSrt {
    api: SrtApi,
    path: PathBuf,
    // Declared last: the function pointers above must not outlive it.
    _library: Library,
}

impl LibSrt {
    /// Load libsrt from `path` and call `srt_startup`
    ///
    /// # Arguments
    ///
    /// * `path` - Library file, or a bare name resolved by the dynamic loader
    ///
    /// # Returns
    ///
    /// * `Ok(LibSrt)` - Loaded and started library
    /// * `Err(LibSrtError)` - Load, symbol lookup or start-up failed
    pub fn load(path: &Path) -> Result<Self, LibSrtError> {
        if path.components().count() > 1 && !path.exists() {
            return Err(LibSrtError::LibraryNotFound(path.to_path_buf()));
        }

        let library = unsafe {
            Library::new(path).map_err(|e| LibSrtError::LoadFailed(e.to_string()))?
        };
        let api = Self::resolve(&library)?;

        let libsrt = Self {
            api,
            path: path.to_path_buf(),
            _library: library,
        };

        if unsafe { (libsrt.api.startup)() } < 0 {
            return Err(LibSrtError::StartupFailed(libsrt.last_error()));
        }

        tracing::info!(path = %libsrt.path.display(), "libsrt loaded");
        Ok(libsrt)
    }

    /// Load libsrt by its platform library name
    pub fn load_default() -> Result<Self, LibSrtError> {
        let mut candidates = vec![PathBuf::from(libloading::library_filename("srt"))];
        if cfg!(target_os = "linux") {
            candidates.push(PathBuf::from("libsrt.so.1.5"));
            candidates.push(PathBuf::from("libsrt.so.1.4"));
        }

        let mut last_error = LibSrtError::LoadFailed("no candidate library names".to_string());
        for candidate in &candidates {
            match Self::load(candidate) {
                Ok(libsrt) => return Ok(libsrt),
                Err(e) => {
                    tracing::debug!(candidate = %candidate.display(), error = %e, "libsrt candidate rejected");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    fn resolve(library: &Library) -> Result<SrtApi, LibSrtError> {
        unsafe {
            Ok(SrtApi {
                startup: *symbol::<SrtStartupFn>(library, b"srt_startup\0")?,
                cleanup: *symbol::<SrtCleanupFn>(library, b"srt_cleanup\0")?,
                create_socket: *symbol::<SrtCreateSocketFn>(library, b"srt_create_socket\0")?,
                close: *symbol::<SrtCloseFn>(library, b"srt_close\0")?,
                setsockopt: *symbol::<SrtSetSockOptFn>(library, b"srt_setsockopt\0")?,
                getlasterror_str: *symbol::<SrtGetLastErrorStrFn>(library, b"srt_getlasterror_str\0")?,
            })
        }
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text of the calling thread's last libsrt error
    pub fn last_error(&self) -> String {
        let ptr = unsafe { (self.api.getlasterror_str)() };
        if ptr.is_null() {
            return "unknown error".to_string();
        }
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    /// Create an unconnected SRT socket
    pub fn create_socket(&self) -> Result<SocketHandle, LibSrtError> {
        let raw = unsafe { (self.api.create_socket)() };
        if raw == SRT_ERROR {
            return Err(LibSrtError::SocketCreateFailed(self.last_error()));
        }
        Ok(SocketHandle(raw))
    }

    /// Close a socket created by [`create_socket`](Self::create_socket)
    pub fn close(&self, socket: SocketHandle) -> Result<(), LibSrtError> {
        if unsafe { (self.api.close)(socket.as_raw()) } == SRT_ERROR {
            return Err(LibSrtError::CloseFailed {
                socket,
                reason: self.last_error(),
            });
        }
        Ok(())
    }
}

impl SocketOptionSetter for LibSrt {
    fn set_option(
        &self,
        socket: SocketHandle,
        option: SocketOptionId,
        value: &[u8],
    ) -> Result<(), SetOptionError> {
        let len = c_int::try_from(value.len())
            .map_err(|_| SetOptionError::new(socket, option, "value too large"))?;

        // Level is ignored by libsrt; 0 matches its own tools.
        let result = unsafe {
            (self.api.setsockopt)(
                socket.as_raw(),
                0,
                option.as_raw(),
                value.as_ptr().cast::<c_void>(),
                len,
            )
        };

        if result == SRT_ERROR {
            return Err(SetOptionError::new(socket, option, self.last_error()));
        }
        Ok(())
    }
}

impl Drop for LibSrt {
    fn drop(&mut self) {
        unsafe {
            (self.api.cleanup)();
        }
    }
}

impl std::fmt::Debug for LibSrt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibSrt").field("path", &self.path).finish()
    }
}

/// Look up one symbol, mapping the error
///
/// # Safety
///
/// `T` must match the symbol's real signature.
unsafe fn symbol<'lib, T>(library: &'lib Library, name: &[u8]) -> Result<Symbol<'lib, T>, LibSrtError> {
    library.get(name).map_err(|e| {
        let printable = String::from_utf8_lossy(name.strip_suffix(b"\0").unwrap_or(name)).into_owned();
        LibSrtError::SymbolNotFound(format!("{}: {}", printable, e))
    })
}
