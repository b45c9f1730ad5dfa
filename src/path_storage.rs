//! Path storage, the input container for generator pipelines.
//!
//! Stores vertices with their commands in one `Vec`. Several paths can live
//! in the same storage: [`PathStorage::start_new_path`] returns the id that
//! later selects the path through [`VertexSource::rewind`].

use crate::basics::{PathCommand, PointD, Vertex, VertexSource};

/// Vertex container implementing [`VertexSource`].
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<Vertex>,
    iterator: usize,
}

impl PathStorage {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            iterator: 0,
        }
    }

    /// Remove all vertices (keeps allocated memory).
    pub fn remove_all(&mut self) {
        self.vertices.clear();
        self.iterator = 0;
    }

    /// Begin a new path. A `STOP` separates it from the previous one.
    /// Returns the id to pass to `rewind`.
    pub fn start_new_path(&mut self) -> u32 {
        if !self.last_command().is_stop() {
            self.vertices.push(Vertex::stop());
        }
        self.vertices.len() as u32
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::move_to(x, y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::line_to(x, y));
    }

    /// Quadratic curve: control point, then end point.
    pub fn curve3(&mut self, x_ctrl: f64, y_ctrl: f64, x_to: f64, y_to: f64) {
        self.vertices
            .push(Vertex::new(x_ctrl, y_ctrl, PathCommand::CURVE3));
        self.vertices.push(Vertex::new(x_to, y_to, PathCommand::CURVE3));
    }

    /// Cubic curve: two control points, then end point.
    pub fn curve4(
        &mut self,
        x_ctrl1: f64,
        y_ctrl1: f64,
        x_ctrl2: f64,
        y_ctrl2: f64,
        x_to: f64,
        y_to: f64,
    ) {
        self.vertices
            .push(Vertex::new(x_ctrl1, y_ctrl1, PathCommand::CURVE4));
        self.vertices
            .push(Vertex::new(x_ctrl2, y_ctrl2, PathCommand::CURVE4));
        self.vertices.push(Vertex::new(x_to, y_to, PathCommand::CURVE4));
    }

    /// Add an `END_POLY` with the given flags. Ignored unless the last
    /// command is a vertex.
    pub fn end_poly(&mut self, flags: u32) {
        if self.last_command().is_vertex() {
            self.vertices.push(Vertex::end_poly(flags));
        }
    }

    pub fn close_polygon(&mut self) {
        self.end_poly(PathCommand::FLAG_CLOSE);
    }

    /// Append `points` as one sub-path, closed if requested.
    pub fn concat_poly(&mut self, points: &[PointD], closed: bool) {
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.move_to(first.x, first.y);
            for p in iter {
                self.line_to(p.x, p.y);
            }
            if closed {
                self.close_polygon();
            }
        }
    }

    /// Append every vertex of `source`'s path `path_id` as-is.
    pub fn concat_path<VS: VertexSource + ?Sized>(&mut self, source: &mut VS, path_id: u32) {
        source.rewind(path_id);
        loop {
            let v = source.vertex();
            if v.cmd.is_stop() {
                break;
            }
            self.vertices.push(v);
        }
    }

    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex_at(&self, idx: usize) -> Option<&Vertex> {
        self.vertices.get(idx)
    }

    /// Command of the last vertex, `STOP` when empty.
    pub fn last_command(&self) -> PathCommand {
        self.vertices
            .last()
            .map_or(PathCommand::STOP, |v| v.cmd)
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self) -> Vertex {
        match self.vertices.get(self.iterator) {
            Some(v) => {
                self.iterator += 1;
                *v
            }
            None => Vertex::stop(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
