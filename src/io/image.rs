//! PNG maps: pixel classification on load and overlay rendering on export

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{
    EXPANDED_CHAR, EXPANDED_COLOR, GOAL_CHAR, GOAL_COLOR, MARKER_COLOR, MAX_MAP_DIMENSION,
    OPEN_COLOR, OPEN_PIXEL_THRESHOLD, PATH_CHAR, PATH_COLOR, START_CHAR, START_COLOR,
    TRANSPARENT_ALPHA, WALL_COLOR,
};
use crate::io::error::{GridError, Result, WithPath, invalid_parameter};
use crate::io::map::Tile;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// Build a grid with one cell per pixel
pub fn grid_from_image<T>(image: &RgbaImage, mut classify: impl FnMut(Rgba<u8>) -> T) -> Grid<T> {
    Grid::from_fn(image.width() as i32, image.height() as i32, |p| {
        let pixel = image
            .get_pixel_checked(p.x as u32, p.y as u32)
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0]));
        classify(pixel)
    })
}

/// Transparent or near-white pixels are open, anything else is a wall
pub fn classify_pixel(pixel: Rgba<u8>) -> Tile {
    let Rgba([r, g, b, a]) = pixel;
    if a <= TRANSPARENT_ALPHA
        || (r >= OPEN_PIXEL_THRESHOLD && g >= OPEN_PIXEL_THRESHOLD && b >= OPEN_PIXEL_THRESHOLD)
    {
        Tile::Open
    } else {
        Tile::Wall
    }
}

/// Load a PNG map
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or exceeds the
/// dimension limit
pub fn load_image_map(path: &Path) -> Result<Grid<Tile>> {
    let image = image::open(path).with_path(path, "load image")?.to_rgba8();
    let (width, height) = image.dimensions();
    if width as usize > MAX_MAP_DIMENSION || height as usize > MAX_MAP_DIMENSION {
        return Err(invalid_parameter(
            "map",
            &format!("{width}x{height}"),
            &format!("dimensions must not exceed {MAX_MAP_DIMENSION}"),
        ));
    }

    log::debug!("loaded {width}x{height} image map from {}", path.display());
    Ok(grid_from_image(&image, classify_pixel))
}

/// Colour of a map tile
pub const fn tile_color(tile: Tile) -> Rgba<u8> {
    match tile {
        Tile::Open => Rgba(OPEN_COLOR),
        Tile::Wall => Rgba(WALL_COLOR),
        Tile::Marker(_) => Rgba(MARKER_COLOR),
    }
}

/// Colour of an overlay glyph, if it has one
pub const fn overlay_color(glyph: char) -> Option<Rgba<u8>> {
    match glyph {
        PATH_CHAR => Some(Rgba(PATH_COLOR)),
        START_CHAR => Some(Rgba(START_COLOR)),
        GOAL_CHAR => Some(Rgba(GOAL_COLOR)),
        EXPANDED_CHAR => Some(Rgba(EXPANDED_COLOR)),
        _ => None,
    }
}

/// Render a map with overlays, one pixel per cell
pub fn render_image(grid: &Grid<Tile>, overlay: &[(Position, char)]) -> RgbaImage {
    let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);
    for (position, &tile) in grid.iter() {
        img.put_pixel(position.x as u32, position.y as u32, tile_color(tile));
    }
    for &(position, glyph) in overlay {
        if let Some(color) = overlay_color(glyph)
            && grid.is_valid_position(position)
        {
            img.put_pixel(position.x as u32, position.y as u32, color);
        }
    }
    img
}

/// Export a map with overlays as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The map has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_png(
    grid: &Grid<Tile>,
    overlay: &[(Position, char)],
    output_path: &Path,
) -> Result<()> {
    if grid.is_empty() {
        return Err(invalid_parameter(
            "map",
            &format!("{}x{}", grid.width(), grid.height()),
            &"cannot export an empty map",
        ));
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    render_image(grid, overlay)
        .save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
#[path = "../../tests/unit/io/image.rs"]
mod unit;
