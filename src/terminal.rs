//! Rendering surface geometry.
//!
//! The converter asks a [`SurfaceQuery`] for the current surface size once per
//! call. [`TerminalSurface`] reads it from the controlling terminal;
//! [`FixedSurface`] is a constant size for library use and tests.

use std::io;

/// Column/row count of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    pub width: u32,
    pub height: u32,
}

impl SurfaceGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Widest grid that fits without wrapping (one column is kept free).
    pub fn usable_width(&self) -> u32 {
        self.width.saturating_sub(1)
    }

    /// Tallest grid that leaves room for the prompt line.
    pub fn usable_height(&self) -> u32 {
        self.height.saturating_sub(1)
    }
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Source of the current surface size.
pub trait SurfaceQuery {
    /// Query the surface size. Fails when there is no interactive surface.
    fn surface_geometry(&self) -> io::Result<SurfaceGeometry>;
}

/// The controlling terminal.
///
/// Tries stdout, stderr and stdin in that order, then `/dev/tty`, so the
/// size is still known when stdout is piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

#[cfg(unix)]
fn window_size(fd: libc::c_int) -> io::Result<SurfaceGeometry> {
    // SAFETY: winsize is plain old data and TIOCGWINSZ only writes into it.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    if ws.ws_col == 0 || ws.ws_row == 0 {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "terminal reported a zero-sized window",
        ));
    }
    Ok(SurfaceGeometry::new(ws.ws_col as u32, ws.ws_row as u32))
}

impl SurfaceQuery for TerminalSurface {
    #[cfg(unix)]
    fn surface_geometry(&self) -> io::Result<SurfaceGeometry> {
        use std::os::unix::io::AsRawFd;

        let mut first_err = None;
        for fd in [libc::STDOUT_FILENO, libc::STDERR_FILENO, libc::STDIN_FILENO] {
            match window_size(fd) {
                Ok(geometry) => return Ok(geometry),
                Err(e) => {
                    log::debug!("no window size on fd {}: {}", fd, e);
                    first_err.get_or_insert(e);
                }
            }
        }

        match std::fs::File::open("/dev/tty") {
            Ok(tty) => window_size(tty.as_raw_fd()),
            Err(e) => Err(first_err.unwrap_or(e)),
        }
    }

    #[cfg(not(unix))]
    fn surface_geometry(&self) -> io::Result<SurfaceGeometry> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "terminal size query is only supported on unix",
        ))
    }
}

/// A surface of constant size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSurface(pub SurfaceGeometry);

impl FixedSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self(SurfaceGeometry::new(width, height))
    }
}

impl SurfaceQuery for FixedSurface {
    fn surface_geometry(&self) -> io::Result<SurfaceGeometry> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_default() {
        let geometry = SurfaceGeometry::default();
        assert_eq!(geometry.width, 80);
        assert_eq!(geometry.height, 24);
    }

    #[test]
    fn test_usable_extent_keeps_one_cell_free() {
        let geometry = SurfaceGeometry::new(80, 24);
        assert_eq!(geometry.usable_width(), 79);
        assert_eq!(geometry.usable_height(), 23);
    }

    #[test]
    fn test_usable_extent_saturates() {
        let geometry = SurfaceGeometry::new(0, 0);
        assert_eq!(geometry.usable_width(), 0);
        assert_eq!(geometry.usable_height(), 0);
    }

    #[test]
    fn test_fixed_surface_reports_its_size() {
        let surface = FixedSurface::new(120, 40);
        let geometry = surface.surface_geometry().unwrap();
        assert_eq!(geometry, SurfaceGeometry::new(120, 40));
    }

    #[cfg(unix)]
    #[test]
    fn test_window_size_of_regular_file_fails() {
        use std::os::unix::io::AsRawFd;

        let file = tempfile::tempfile().unwrap();
        assert!(window_size(file.as_raw_fd()).is_err());
    }
}
