//! # Planet Texture Quality Tests
//!
//! A texture should look like a planet: oceans and land, ice at the poles,
//! no seam at the date line.

use pixelate_procedural::{graticule, PlanetTexture, Terrain, TextureSeed};
use pixelate_raster::Color;

fn share(texture: &pixelate_raster::Bitmap, pred: impl Fn(Color) -> bool) -> f64 {
    let total = f64::from(texture.width() * texture.height());
    texture.count_pixels(pred) as f64 / total
}

#[test]
fn test_texture_has_land_and_water() {
    let texture = PlanetTexture::new(TextureSeed::new(42)).generate(256, 128).unwrap();

    let water = share(&texture, |c| {
        c == Terrain::Ocean.color() || c == Terrain::DeepOcean.color()
    });
    println!("water share: {:.1}%", water * 100.0);
    assert!(water > 0.1 && water < 0.9, "water share {water}");
}

#[test]
fn test_texture_has_ice_caps() {
    let texture = PlanetTexture::new(TextureSeed::new(42)).generate(128, 64).unwrap();
    let ice = Terrain::Ice.color();
    for x in 0..128 {
        assert_eq!(texture.get_pixel(x, 0), Some(ice));
        assert_eq!(texture.get_pixel(x, 63), Some(ice));
    }
}

#[test]
fn test_same_seed_same_texture() {
    let a = PlanetTexture::new(TextureSeed::new(9)).generate(64, 32).unwrap();
    let b = PlanetTexture::new(TextureSeed::new(9)).generate(64, 32).unwrap();
    let c = PlanetTexture::new(TextureSeed::new(10)).generate(64, 32).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_zero_size_rejected() {
    let planet = PlanetTexture::new(TextureSeed::default());
    assert!(planet.generate(0, 16).is_err());
    assert!(graticule(16, 0, 4).is_err());
}
