/// Row-major RGBA8 bitmap of a disc with a contrasting rim.
///
/// The disc has radius `size / 2` centred on pixel `(size/2, size/2)`; the
/// rim is `size / 20` pixels wide. Pixels outside the disc are fully
/// transparent. Colors are linear RGBA in `[0, 1]`.
#[must_use]
pub fn circle_sprite(
    size: u32,
    fill: [f32; 4],
    border: [f32; 4],
) -> Vec<[u8; 4]> {
    let radius = size as f32 / 2.0;
    let border_width = size as f32 / 20.0;
    let fill = to_rgba8(fill);
    let border = to_rgba8(border);

    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            let dx = x as f32 - radius;
            let dy = y as f32 - radius;
            let distance = dx.hypot(dy);
            if distance > radius {
                [0; 4]
            } else if distance > radius - border_width {
                border
            } else {
                fill
            }
        })
        .collect()
}

fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn sprite_has_fill_rim_and_clear_corners() {
        let size = 128;
        let pixels = circle_sprite(size, BLUE, WHITE);
        assert_eq!(pixels.len(), 128 * 128);

        let at = |x: u32, y: u32| pixels[(y * size + x) as usize];
        assert_eq!(at(64, 64), [0, 0, 255, 255]);
        assert_eq!(at(0, 0), [0, 0, 0, 0]);
        // 2 pixels in from the left edge on the center row is inside the
        // 6.4 pixel rim.
        assert_eq!(at(2, 64), [255, 255, 255, 255]);
        assert_eq!(at(10, 64), [0, 0, 255, 255]);
    }

    #[test]
    fn out_of_range_colors_saturate() {
        let pixels = circle_sprite(20, [2.0, -1.0, 0.5, 1.0], WHITE);
        assert_eq!(pixels[10 * 20 + 10], [255, 0, 128, 255]);
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(circle_sprite(0, BLUE, WHITE).is_empty());
    }
}
