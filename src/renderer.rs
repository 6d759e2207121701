/*
 * Renderer Module
 *
 * This module turns the projected draw commands into nannou drawing calls.
 * Two strategies are available behind the Renderer trait:
 * - QuadRenderer batches every star into a single coloured mesh of quads
 * - CircleRenderer draws each star as its own filled ellipse
 *
 * Both produce the same picture; the quad batch is much cheaper for large fields.
 * Commands arrive in paint order and positions are relative to the window
 * centre, so each renderer translates to `origin` before drawing.
 */

use nannou::prelude::*;

use crate::params::RendererKind;
use crate::star::DrawCommand;

pub trait Renderer {
    fn name(&self) -> &'static str;

    fn render(&self, draw: &Draw, origin: Vec2, commands: &[DrawCommand]);
}

// Build the renderer selected in the params
pub fn make_renderer(kind: RendererKind) -> Box<dyn Renderer> {
    match kind {
        RendererKind::VertexArray => Box::new(QuadRenderer),
        RendererKind::Circles => Box::new(CircleRenderer),
    }
}

pub struct QuadRenderer;

impl QuadRenderer {
    // Vertices (four per star) and triangle indices (six per star) for the batch
    pub fn build_mesh(commands: &[DrawCommand]) -> (Vec<(Vec3, Rgb<u8>)>, Vec<usize>) {
        let mut vertices = Vec::with_capacity(commands.len() * 4);
        let mut indices = Vec::with_capacity(commands.len() * 6);

        for (i, cmd) in commands.iter().enumerate() {
            let color = cmd.color();
            for corner in cmd.corners() {
                vertices.push((pt3(corner.x, corner.y, 0.0), color));
            }

            let j = i * 4;
            indices.extend_from_slice(&[j, j + 1, j + 2, j, j + 2, j + 3]);
        }

        (vertices, indices)
    }
}

impl Renderer for QuadRenderer {
    fn name(&self) -> &'static str {
        "vertex array"
    }

    fn render(&self, draw: &Draw, origin: Vec2, commands: &[DrawCommand]) {
        if commands.is_empty() {
            return;
        }

        let (vertices, indices) = Self::build_mesh(commands);
        draw.xy(origin).mesh().indexed_colored(vertices, indices);
    }
}

pub struct CircleRenderer;

impl Renderer for CircleRenderer {
    fn name(&self) -> &'static str {
        "circles"
    }

    fn render(&self, draw: &Draw, origin: Vec2, commands: &[DrawCommand]) {
        let draw = draw.xy(origin);
        for cmd in commands {
            draw.ellipse()
                .xy(cmd.position)
                .radius(cmd.radius)
                .color(cmd.color());
        }
    }
}
