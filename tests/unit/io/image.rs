//! Tests for PNG map classification, loading and overlay export

#[cfg(test)]
mod tests {
    use crate::io::configuration::{PATH_COLOR, START_COLOR, WALL_COLOR};
    use crate::io::image::{
        classify_pixel, export_map_png, grid_from_image, load_image_map, overlay_color,
        render_image, tile_color,
    };
    use crate::io::map::{Tile, load_map, parse_map};
    use crate::spatial::grid::Grid;
    use crate::spatial::position::Position;
    use image::{Rgba, RgbaImage};

    // Tests transparent and near-white pixels are open
    // Verified by ignoring the alpha channel
    #[test]
    fn test_classify_pixel() {
        assert_eq!(classify_pixel(Rgba([0, 0, 0, 0])), Tile::Open);
        assert_eq!(classify_pixel(Rgba([250, 245, 255, 255])), Tile::Open);
        assert_eq!(classify_pixel(Rgba([0, 0, 0, 255])), Tile::Wall);
        assert_eq!(classify_pixel(Rgba([255, 255, 10, 255])), Tile::Wall);
    }

    // Tests one cell per pixel with matching coordinates
    // Verified by swapping x and y when reading pixels
    #[test]
    fn test_grid_from_image() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 1, Rgba([0, 0, 0, 255]));
        let grid = grid_from_image(&img, classify_pixel);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.non_empty_positions(), vec![Position::new(2, 1)]);

        let alpha: Grid<u8> = grid_from_image(&img, |Rgba([_, _, _, a])| a);
        assert!(alpha.cells().iter().all(|&a| a == 255));
    }

    // Tests overlays are painted over tiles and unknown glyphs are skipped
    // Verified by painting overlays before tiles
    #[test]
    fn test_render_image() {
        let grid = parse_map(".#\n..").expect("Failed to parse map");
        let overlay = [
            (Position::new(0, 0), 'S'),
            (Position::new(0, 1), '*'),
            (Position::new(1, 1), '?'),
            (Position::new(5, 5), '*'),
        ];
        let img = render_image(&grid, &overlay);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgba(START_COLOR));
        assert_eq!(img.get_pixel(1, 0), &Rgba(WALL_COLOR));
        assert_eq!(img.get_pixel(0, 1), &Rgba(PATH_COLOR));
        assert_eq!(img.get_pixel(1, 1), &tile_color(Tile::Open));
        assert_eq!(overlay_color('?'), None);
    }

    // Tests exported maps load back with the same walls
    // Verified by exporting overlay colours for tiles
    #[test]
    fn test_export_and_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("map.png");
        let grid = parse_map("#..\n.#.\n..#").expect("Failed to parse map");

        export_map_png(&grid, &[], &path).expect("Failed to export map");
        let reloaded = load_image_map(&path).expect("Failed to reload map");
        assert_eq!(reloaded, grid);
        assert_eq!(load_map(&path).expect("Failed to load by extension"), grid);
    }

    // Tests empty maps and unreadable images are errors
    // Verified by exporting a zero-sized image
    #[test]
    fn test_export_and_load_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let empty: Grid<Tile> = Grid::default();
        assert!(export_map_png(&empty, &[], &dir.path().join("empty.png")).is_err());

        let bogus = dir.path().join("bogus.png");
        std::fs::write(&bogus, b"not a png").expect("Failed to write file");
        assert!(load_image_map(&bogus).is_err());
    }
}
