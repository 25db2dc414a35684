//! Round trips through real image files.

use pixelate_raster::{Bitmap, Color, RasterError};

#[test]
fn test_png_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    let mut bmp = Bitmap::new(40, 30).unwrap();
    bmp.draw_circle(20, 15, 10, Color::BLUE);
    bmp.put_pixel(0, 0, Color::rgb(12, 34, 56));
    bmp.save(&path).unwrap();

    let loaded = Bitmap::load(&path).unwrap();
    assert_eq!(loaded, bmp);
}

#[test]
fn test_bmp_texture_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("earth.bmp");

    let texture = Bitmap::filled(8, 4, Color::rgb(10, 120, 30)).unwrap();
    texture.save(&path).unwrap();

    let loaded = Bitmap::load(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (8, 4));
    assert_eq!(loaded.get_pixel(7, 3), Some(Color::rgb(10, 120, 30)));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bmp");

    let err = Bitmap::load(&path).unwrap_err();
    assert!(matches!(err, RasterError::Load { .. }));
    assert!(err.to_string().contains("missing.bmp"));
}

#[test]
fn test_garbage_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    assert!(matches!(Bitmap::load(&path), Err(RasterError::Load { .. })));
}
