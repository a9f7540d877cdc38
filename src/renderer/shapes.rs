//! Triangle tessellation for frame instructions
//!
//! Lowers a [`Frame`] into one flat triangle list: circles become fans around
//! the center, lines become oriented quads. Output is plain geometry; buffer
//! upload and pipeline setup stay with the host.

use glam::Vec2;
use std::f32::consts::TAU;

use super::draw::{CircleCmd, Frame, LineCmd};
use super::vertex::Vertex;

/// Fan segments used per circle by [`tessellate`]
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Tessellate a whole frame, lines first so circles draw on top.
pub fn tessellate(frame: &Frame) -> Vec<Vertex> {
    let capacity = frame.lines.len() * 6 + frame.circles.len() * (CIRCLE_SEGMENTS as usize * 3);
    let mut vertices = Vec::with_capacity(capacity);

    for line in &frame.lines {
        line_quad(line, &mut vertices);
    }
    for circle in &frame.circles {
        circle_fan(circle, CIRCLE_SEGMENTS, &mut vertices);
    }

    vertices
}

/// Append a triangle fan approximating a filled circle.
pub fn circle_fan(cmd: &CircleCmd, segments: u32, out: &mut Vec<Vertex>) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::from_vec(cmd.center, cmd.color));
        out.push(Vertex::from_vec(
            cmd.center + cmd.radius * Vec2::new(theta1.cos(), theta1.sin()),
            cmd.color,
        ));
        out.push(Vertex::from_vec(
            cmd.center + cmd.radius * Vec2::new(theta2.cos(), theta2.sin()),
            cmd.color,
        ));
    }
}

/// Append a stroke-width quad (two triangles) for a line instruction.
pub fn line_quad(cmd: &LineCmd, out: &mut Vec<Vertex>) {
    let dir = (cmd.end - cmd.start).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (cmd.stroke_width / 2.0);

    let a1 = cmd.start + perp;
    let a2 = cmd.start - perp;
    let b1 = cmd.end + perp;
    let b2 = cmd.end - perp;

    out.push(Vertex::from_vec(a1, cmd.color));
    out.push(Vertex::from_vec(a2, cmd.color));
    out.push(Vertex::from_vec(b1, cmd.color));

    out.push(Vertex::from_vec(b1, cmd.color));
    out.push(Vertex::from_vec(a2, cmd.color));
    out.push(Vertex::from_vec(b2, cmd.color));
}
