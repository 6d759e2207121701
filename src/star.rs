/*
 * Star Module
 *
 * This module defines the Star struct and its perspective projection.
 * A star keeps a fixed lateral position on the plane at depth 1 and moves
 * only along the viewing axis. Projecting divides the position by the depth,
 * so stars grow and brighten as they approach the viewer.
 */

use nannou::prelude::*;

use crate::params::StarfieldParams;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub depth: f32,
}

// Screen-space description of one star, relative to the window centre
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub position: Vec2,
    pub radius: f32,
    pub brightness: u8,
}

impl Star {
    pub fn new(x: f32, y: f32, depth: f32) -> Self {
        Self {
            position: vec2(x, y),
            depth,
        }
    }

    // Perspective-project the star into screen space
    pub fn project(&self, params: &StarfieldParams) -> DrawCommand {
        let scale = 1.0 / self.depth;

        let depth_ratio = (self.depth - params.near_distance) / params.depth_range();
        let color_ratio = 1.0 - depth_ratio;
        let brightness = (color_ratio * 255.0).round().clamp(0.0, 255.0) as u8;

        DrawCommand {
            position: self.position * scale,
            radius: params.star_radius * scale,
            brightness,
        }
    }
}

impl DrawCommand {
    // Grayscale colour shared by every vertex of the star
    pub fn color(&self) -> Rgb<u8> {
        rgb(self.brightness, self.brightness, self.brightness)
    }

    // Quad corners, counter-clockwise from the bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let p = self.position;
        let r = self.radius;
        [
            vec2(p.x - r, p.y - r),
            vec2(p.x + r, p.y - r),
            vec2(p.x + r, p.y + r),
            vec2(p.x - r, p.y + r),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closer_star_is_larger_and_brighter() {
        let params = StarfieldParams::default();
        let near = Star::new(30.0, -12.0, 1.0).project(&params);
        let far = Star::new(30.0, -12.0, 4.0).project(&params);

        assert!(near.radius > far.radius);
        assert!(near.brightness > far.brightness);
        assert!(near.position.length() > far.position.length());
    }

    #[test]
    fn projection_divides_by_depth() {
        let params = StarfieldParams::default();
        let cmd = Star::new(100.0, 50.0, 2.0).project(&params);

        assert_relative_eq!(cmd.position.x, 50.0);
        assert_relative_eq!(cmd.position.y, 25.0);
        assert_relative_eq!(cmd.radius, params.star_radius / 2.0);
    }

    #[test]
    fn brightness_spans_full_range_at_depth_bounds() {
        let params = StarfieldParams::default();
        let at_near = Star::new(0.0, 0.0, params.near_distance).project(&params);
        let at_far = Star::new(0.0, 0.0, params.far_distance).project(&params);

        assert_eq!(at_near.brightness, 255);
        assert_eq!(at_far.brightness, 0);
    }

    #[test]
    fn brightness_is_rounded() {
        let params = StarfieldParams::default();
        // depth_ratio = 0.5, color_ratio * 255 = 127.5
        let midpoint = params.near_distance + params.depth_range() * 0.5;
        let cmd = Star::new(0.0, 0.0, midpoint).project(&params);
        assert!(cmd.brightness == 127 || cmd.brightness == 128);
    }

    #[test]
    fn corners_surround_the_centre() {
        let cmd = DrawCommand {
            position: vec2(10.0, 20.0),
            radius: 2.0,
            brightness: 200,
        };
        let corners = cmd.corners();

        assert_eq!(corners[0], vec2(8.0, 18.0));
        assert_eq!(corners[2], vec2(12.0, 22.0));
        assert_eq!(cmd.color(), rgb(200u8, 200, 200));
    }
}
