/// Procedurally generated stand-ins for globe textures that fail to load.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f32::consts::{PI, TAU};

use constants::palette::{INNER_OCEAN, NIGHT_TINT, OUTER_OCEAN};

const CLOUD_BLOTCHES: usize = 90;
const CLOUD_SEED: u64 = 0x434C4F55;
const CITY_LIGHT_SEED: u64 = 0x4C495445;
const CITY_LIGHTS: usize = 900;

/// Which look the generated albedo should approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Day,
    Night,
}

fn image_from_pixels(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Image {
    debug_assert_eq!(pixels.len(), (width * height) as usize);
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        bytemuck::cast_slice(&pixels).to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// Low-frequency trig continents over an ocean gradient, an equirectangular
/// echo of the real day/night maps.
pub fn placeholder_albedo(width: u32, height: u32, kind: PlaceholderKind) -> Image {
    let inner = INNER_OCEAN.to_srgba();
    let outer = OUTER_OCEAN.to_srgba();
    let night = NIGHT_TINT.to_srgba();

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        let lat = (y as f32 / height as f32) * PI - PI / 2.0;
        for x in 0..width {
            let lon = (x as f32 / width as f32) * TAU;
            let pattern = 0.6 * (2.0 * lon).sin() * (lat * 1.2).cos()
                + 0.3 * (3.5 * lon + 0.5).sin()
                + 0.2 * (1.5 * lon - 1.0).cos() * (lat * 0.8).cos();
            // The three terms bound the pattern to [-1.1, 1.1].
            let land = ((pattern + 1.1) / 2.2).powf(1.4);

            // Oceans darken toward the poles.
            let polar = (lat.abs() / (PI / 2.0)).clamp(0.0, 1.0);
            let ocean_r = inner.red + (outer.red - inner.red) * polar;
            let ocean_g = inner.green + (outer.green - inner.green) * polar;
            let ocean_b = inner.blue + (outer.blue - inner.blue) * polar;

            let (r, g, b) = match kind {
                PlaceholderKind::Day => (
                    ocean_r + (0.75 - ocean_r) * land,
                    ocean_g + (0.82 - ocean_g) * land,
                    ocean_b + (0.67 - ocean_b) * land,
                ),
                PlaceholderKind::Night => (
                    night.red + land * 0.04,
                    night.green + land * 0.05,
                    night.blue + land * 0.10,
                ),
            };
            pixels.push([
                (r.clamp(0.0, 1.0) * 255.0) as u8,
                (g.clamp(0.0, 1.0) * 255.0) as u8,
                (b.clamp(0.0, 1.0) * 255.0) as u8,
                255,
            ]);
        }
    }

    if kind == PlaceholderKind::Night {
        scatter_city_lights(width, height, &mut pixels);
    }
    image_from_pixels(width, height, pixels)
}

fn scatter_city_lights(width: u32, height: u32, pixels: &mut [[u8; 4]]) {
    let mut rng = StdRng::seed_from_u64(CITY_LIGHT_SEED);
    for _ in 0..CITY_LIGHTS {
        let x = rng.gen_range(0..width);
        // Cluster toward the mid-latitudes.
        let y = ((rng.gen_range(0.0..1.0_f32) + rng.gen_range(0.0..1.0_f32)) / 2.0
            * height as f32) as u32;
        let index = (y.min(height - 1) * width + x) as usize;
        let warm = rng.gen_range(180..255u16) as u8;
        pixels[index] = [warm, (warm as f32 * 0.85) as u8, (warm as f32 * 0.55) as u8, 255];
    }
}

/// Soft additive blotches on a transparent sheet, like the real cloud map's
/// alpha coverage.
pub fn placeholder_clouds(width: u32, height: u32) -> Image {
    let mut coverage = vec![0.0_f32; (width * height) as usize];
    let mut rng = StdRng::seed_from_u64(CLOUD_SEED);

    for _ in 0..CLOUD_BLOTCHES {
        let cx = rng.gen_range(0.0..width as f32);
        let cy = rng.gen_range(0.0..height as f32);
        let radius = rng.gen_range(18.0..(height as f32 / 5.0));
        let strength = rng.gen_range(0.08..0.2);

        let min_y = (cy - radius).max(0.0) as u32;
        let max_y = ((cy + radius) as u32).min(height - 1);
        for y in min_y..=max_y {
            let min_x = cx - radius;
            let max_x = cx + radius;
            let mut x = min_x;
            while x <= max_x {
                let dx = x - cx;
                let dy = y as f32 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if d < radius {
                    // Blotches wrap across the date line.
                    let px = (x.rem_euclid(width as f32)) as u32 % width;
                    let index = (y * width + px) as usize;
                    coverage[index] += (1.0 - d / radius) * strength;
                }
                x += 1.0;
            }
        }
    }

    let pixels: Vec<[u8; 4]> = coverage
        .into_iter()
        .map(|c| {
            let v = (c.clamp(0.0, 1.0) * 255.0) as u8;
            [v, v, v, 255]
        })
        .collect();
    image_from_pixels(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::texture::{PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};

    #[test]
    fn albedo_has_configured_dimensions_and_layout() {
        let image = placeholder_albedo(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, PlaceholderKind::Day);
        assert_eq!(image.texture_descriptor.size.width, PLACEHOLDER_WIDTH);
        assert_eq!(image.texture_descriptor.size.height, PLACEHOLDER_HEIGHT);
        assert_eq!(
            image.texture_descriptor.format,
            TextureFormat::Rgba8UnormSrgb
        );
        assert_eq!(
            image.data.as_ref().map(|d| d.len()),
            Some((PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize)
        );
    }

    #[test]
    fn night_albedo_is_darker_than_day() {
        let day = placeholder_albedo(64, 32, PlaceholderKind::Day);
        let night = placeholder_albedo(64, 32, PlaceholderKind::Night);
        let sum = |img: &Image| -> u64 {
            img.data
                .as_ref()
                .unwrap()
                .iter()
                .map(|&b| b as u64)
                .sum()
        };
        assert!(sum(&night) < sum(&day));
    }

    #[test]
    fn clouds_stay_grayscale() {
        let image = placeholder_clouds(64, 32);
        let data = image.data.as_ref().unwrap();
        for px in data.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = placeholder_clouds(32, 16);
        let b = placeholder_clouds(32, 16);
        assert_eq!(a.data, b.data);
    }
}
