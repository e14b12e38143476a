//! I/O helper utilities.
//!
//! Small adapters that turn io::Error into an [`SmvError`] carrying the operation,
//! the path, and a platform-aware hint, for use with `map_err`.
//!
//! Usage:
//!   fs::rename(from, to).map_err(mutation_error(from, to))?;
//!   fs::metadata(p).map_err(io_error_with_help("inspect", p))?;

use std::io;
use std::path::Path;

use crate::errors::SmvError;

/// Describe an io::Error with a short hint keyed off the raw OS code (or kind).
pub fn describe_io_error(e: &io::Error) -> String {
    let mut msg = e.to_string();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions");
                }
                libc::EXDEV => {
                    msg.push_str("; source and target are on different filesystems, smv only renames");
                }
                libc::EBUSY => {
                    msg.push_str("; resource busy, ensure no other process is using it");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, verify the target directory exists");
                }
                libc::EISDIR => {
                    msg.push_str("; destination is a directory");
                }
                libc::ENOTDIR => {
                    msg.push_str("; a path component is not a directory");
                }
                libc::ENOSPC => {
                    msg.push_str("; insufficient space on device");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem, cannot write here");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; filename or path too long");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions"), // ERROR_ACCESS_DENIED
                17 => msg.push_str("; not same device, smv only renames"), // ERROR_NOT_SAME_DEVICE
                32 => msg.push_str("; sharing violation, file is in use"), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str("; path not found, verify it exists"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found, verify it exists");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for the rename primitive: io::Error -> SmvError::Mutation.
pub fn mutation_error<'a>(from: &'a Path, to: &'a Path) -> impl FnOnce(io::Error) -> SmvError + 'a {
    move |e: io::Error| SmvError::Mutation {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: describe_io_error(&e),
        source: e,
    }
}

/// Adapter for read-only queries: io::Error -> SmvError::Io with "<op> '<path>'" context.
pub fn io_error_with_help<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> SmvError + 'a {
    move |e: io::Error| SmvError::Io {
        context: format!("{} '{}' ({})", op, path.display(), describe_io_error(&e)),
        source: e,
    }
}
