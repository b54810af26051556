//! One-call conversion from a decoded image to a pixel grid.

use super::dimensions::{resolve, ResolveOptions};
use super::error::ConvertError;
use super::sampler::{sample, PixelGrid};
use super::sizing::SizingRequest;
use super::source::SourceImage;
use crate::terminal::SurfaceQuery;

/// Everything a conversion needs besides the image and the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConvertOptions {
    pub sizing: SizingRequest,
    pub resolve: ResolveOptions,
    pub mirror_x: bool,
    pub mirror_y: bool,
}

/// Size `image` for `surface`, resample it and sample every pixel.
///
/// The surface is queried once. Nothing is produced if any step fails.
pub fn convert_to_ascii_pixels<I, S>(
    image: &I,
    surface: &S,
    options: &ConvertOptions,
) -> Result<PixelGrid, ConvertError>
where
    I: SourceImage + ?Sized,
    S: SurfaceQuery + ?Sized,
{
    let geometry = surface
        .surface_geometry()
        .map_err(ConvertError::GeometryUnavailable)?;

    let resolved = resolve(image, geometry, options.sizing, &options.resolve)?;
    let grid = sample(&resolved.image, options.mirror_x, options.mirror_y);

    log::debug!("sampled {}x{} grid", grid.width(), grid.height());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{FixedSurface, SurfaceGeometry};
    use image::{Rgba, RgbaImage};
    use std::io;

    struct NoTerminal;

    impl SurfaceQuery for NoTerminal {
        fn surface_geometry(&self) -> io::Result<SurfaceGeometry> {
            Err(io::Error::new(io::ErrorKind::Other, "not a terminal"))
        }
    }

    #[test]
    fn test_convert_default_is_auto() {
        let img = RgbaImage::from_pixel(400, 200, Rgba([255, 255, 255, 255]));
        let grid =
            convert_to_ascii_pixels(&img, &FixedSurface::new(80, 24), &ConvertOptions::default())
                .unwrap();
        assert_eq!((grid.width(), grid.height()), (79, 20));
        assert!(grid.pixels().all(|p| p.intensity == 255));
    }

    #[test]
    fn test_geometry_failure_propagates() {
        let img = RgbaImage::new(4, 4);
        let err = convert_to_ascii_pixels(&img, &NoTerminal, &ConvertOptions::default())
            .unwrap_err();
        match err {
            ConvertError::GeometryUnavailable(e) => assert_eq!(e.to_string(), "not a terminal"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_constraint_violation_aborts() {
        let img = RgbaImage::new(4, 4);
        let options = ConvertOptions {
            sizing: SizingRequest::ByWidth(100),
            ..ConvertOptions::default()
        };
        let err = convert_to_ascii_pixels(&img, &FixedSurface::new(80, 24), &options).unwrap_err();
        assert!(err.to_string().contains("100"));
    }
}
