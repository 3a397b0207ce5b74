//! Wireframe polyhedra
//!
//! Shapes are pure geometry: vertices in local space plus the edge list used
//! for wireframe rendering. No colours or materials live here.

use crate::Vec3;

/// A small convex solid drawn as a wireframe
#[derive(Clone, Debug, PartialEq)]
pub struct Polyhedron {
    vertices: Vec<Vec3>,
    edges: Vec<[usize; 2]>,
}

impl Polyhedron {
    /// Axis-aligned cube with the given edge length
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let mut vertices = Vec::with_capacity(8);
        for &x in &[-h, h] {
            for &y in &[-h, h] {
                for &z in &[-h, h] {
                    vertices.push(Vec3::new(x, y, z));
                }
            }
        }
        Self::from_vertices(vertices)
    }

    /// Regular octahedron inscribed in a sphere of `radius`
    pub fn octahedron(radius: f32) -> Self {
        Self::from_vertices(vec![
            Vec3::new(radius, 0.0, 0.0),
            Vec3::new(-radius, 0.0, 0.0),
            Vec3::new(0.0, radius, 0.0),
            Vec3::new(0.0, -radius, 0.0),
            Vec3::new(0.0, 0.0, radius),
            Vec3::new(0.0, 0.0, -radius),
        ])
    }

    /// Regular tetrahedron inscribed in a sphere of `radius`
    pub fn tetrahedron(radius: f32) -> Self {
        let corners = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
        ];
        Self::from_vertices(corners.iter().map(|c| c.normalized() * radius).collect())
    }

    /// Regular icosahedron inscribed in a sphere of `radius`
    pub fn icosahedron(radius: f32) -> Self {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let corners = [
            Vec3::new(-1.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(-1.0, -t, 0.0),
            Vec3::new(1.0, -t, 0.0),
            Vec3::new(0.0, -1.0, t),
            Vec3::new(0.0, 1.0, t),
            Vec3::new(0.0, -1.0, -t),
            Vec3::new(0.0, 1.0, -t),
            Vec3::new(t, 0.0, -1.0),
            Vec3::new(t, 0.0, 1.0),
            Vec3::new(-t, 0.0, -1.0),
            Vec3::new(-t, 0.0, 1.0),
        ];
        Self::from_vertices(corners.iter().map(|c| c.normalized() * radius).collect())
    }

    /// Build a regular solid from its vertices
    ///
    /// Every vertex pair at the minimum pairwise distance becomes an edge, which
    /// is exactly the edge set for the regular solids above.
    fn from_vertices(vertices: Vec<Vec3>) -> Self {
        let mut min_dist = f32::MAX;
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                min_dist = min_dist.min(vertices[i].distance(vertices[j]));
            }
        }

        let tolerance = min_dist * 1e-3;
        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if (vertices[i].distance(vertices[j]) - min_dist).abs() <= tolerance {
                    edges.push([i, j]);
                }
            }
        }

        Self { vertices, edges }
    }

    /// Local-space vertices
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Edge list as vertex index pairs
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
