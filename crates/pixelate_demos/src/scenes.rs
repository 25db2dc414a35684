//! # Demo Scenes
//!
//! Full-screen arrangements of the mapping and lighting routines, sized
//! from the target bitmap:
//!
//! | scene | layout |
//! |---|---|
//! | cylinder | one cylinder, centered, 10 px margin top and bottom |
//! | sphere | one sphere, centered |
//! | sphere rotations | 8 x 6 grid: rows spin, tilt about x, tilt about z |
//! | lit spheres | 4 x 3 grid of gray spheres, light moving per cell |
//! | lit planets | 4 x 3 grid of spinning globes, light as above |
//! | lit projection | the flat map, lit from one side |

use pixelate_fixed::{Fixed, FixedMatrix};
use pixelate_raster::Bitmap;

use crate::cylinder::mapped_cylinder;
use crate::layout::Grid;
use crate::lighting::{lit_projection, lit_sphere, mapped_lit_sphere, LightSource};
use crate::sphere::{mapped_sphere, mapped_sphere_ex};

/// Angle step between neighbouring globes.
const ROTATION_STEP: i32 = 16;

/// Light above longitude 128, latitude -20.
pub const PROJECTION_LIGHT: LightSource = LightSource::new(128, -20);

/// One textured cylinder filling most of the screen height.
pub fn cylinder_scene(target: &mut Bitmap, map: &Bitmap) {
    let (w, h) = (target.w(), target.h());
    mapped_cylinder(target, w / 2, 10, 100 * w / 320, h - 20, map);
}

/// One textured sphere in the middle of the screen.
pub fn sphere_scene(target: &mut Bitmap, map: &Bitmap) {
    let (w, h) = (target.w(), target.h());
    mapped_sphere(target, w / 2, h / 2, 110 * h / 240, map);
}

/// Rotation for cell `(column, row)` of the 8 x 6 rotation grid.
///
/// Each pair of rows sweeps one axis through a full turn in steps of 16:
/// rows 0-1 spin around the poles, rows 2-3 tilt about x, rows 4-5 about z.
#[must_use]
pub fn grid_rotation(column: i32, row: i32) -> FixedMatrix {
    let angle = Fixed::from_int((column + 8 * (row % 2)) * ROTATION_STEP);
    match row / 2 {
        0 => FixedMatrix::planet_rotation(angle, Fixed::ZERO, Fixed::ZERO),
        1 => FixedMatrix::planet_rotation(Fixed::ZERO, angle, Fixed::ZERO),
        _ => FixedMatrix::planet_rotation(Fixed::ZERO, Fixed::ZERO, angle),
    }
}

/// 48 globes showing rotations around each axis.
pub fn sphere_rotations_scene(target: &mut Bitmap, map: &Bitmap) {
    let grid = Grid::new(target.w(), target.h(), 8, 6);
    let radius = grid.radius();
    for (column, row) in grid.cells() {
        let (cx, cy) = grid.cell_center(column, row);
        mapped_sphere_ex(target, cx, cy, radius, map, &grid_rotation(column, row));
    }
}

/// Light for cell `(column, row)` of a 4 x 3 grid.
#[must_use]
pub const fn grid_light(column: i32, row: i32) -> LightSource {
    LightSource::new(column * 32, (row + 1) * 16)
}

/// Twelve gray spheres lit from different directions.
pub fn lit_spheres_scene(target: &mut Bitmap) {
    let grid = Grid::new(target.w(), target.h(), 4, 3);
    let radius = grid.radius();
    for (column, row) in grid.cells() {
        let (cx, cy) = grid.cell_center(column, row);
        lit_sphere(target, cx, cy, radius, grid_light(column, row));
    }
}

/// Twelve lit globes, each spun a further 16 units.
pub fn lit_planets_scene(target: &mut Bitmap, map: &Bitmap) {
    let grid = Grid::new(target.w(), target.h(), 4, 3);
    let radius = grid.radius();
    for (column, row) in grid.cells() {
        let (cx, cy) = grid.cell_center(column, row);
        let spin = Fixed::from_int((row * 4 + column) * ROTATION_STEP);
        let rotation = FixedMatrix::planet_rotation(spin, Fixed::ZERO, Fixed::ZERO);
        mapped_lit_sphere(target, cx, cy, radius, map, &rotation, grid_light(column, row));
    }
}

/// The whole map, lit as a globe.
pub fn lit_projection_scene(target: &mut Bitmap, map: &Bitmap) {
    lit_projection(target, map, PROJECTION_LIGHT);
}
