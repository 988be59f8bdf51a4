use crate::math::{Matrix4, Point3, Vector3};

/// An oriented box: a corner point and three independent edge vectors.
///
/// Everything else, from the change-of-basis matrices between world space
/// and the box's local unit-cube space to the center, the unit face normals
/// and the half-extents along them, is derived once at construction and never
/// changes. Dependent edge vectors make the local basis singular and the
/// derived fields non-finite.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parallelepiped {
    point: Point3,
    edge_a: Vector3,
    edge_b: Vector3,
    edge_c: Vector3,

    convert_from: Matrix4,
    convert_to: Matrix4,

    center: Point3,
    extents: Vector3,
    normal_a: Vector3,
    normal_b: Vector3,
    normal_c: Vector3,
}

impl Parallelepiped {
    /// Creates the box anchored at `point` and spanned by the three edges.
    pub fn new(point: Point3, edge_a: Vector3, edge_b: Vector3, edge_c: Vector3) -> Parallelepiped {
        let convert_from = Matrix4::from_columns(&edge_a, &edge_b, &edge_c);
        let convert_to = convert_from.inverted();

        let normal_a = edge_b.cross(&edge_c).normalized();
        let normal_b = edge_c.cross(&edge_a).normalized();
        let normal_c = edge_a.cross(&edge_b).normalized();

        let half_a = edge_a * 0.5;
        let half_b = edge_b * 0.5;
        let half_c = edge_c * 0.5;

        let center = point + half_a + half_b + half_c;

        let mut extents = Vector3::zeros();
        for half_edge in [half_a, half_b, half_c] {
            extents.x = extents.x.max(half_edge.dot(&normal_a).abs());
            extents.y = extents.y.max(half_edge.dot(&normal_b).abs());
            extents.z = extents.z.max(half_edge.dot(&normal_c).abs());
        }

        Parallelepiped {
            point,
            edge_a,
            edge_b,
            edge_c,
            convert_from,
            convert_to,
            center,
            extents,
            normal_a,
            normal_b,
            normal_c,
        }
    }

    /// The anchor corner.
    #[inline]
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// The first edge vector.
    #[inline]
    pub fn edge_a(&self) -> Vector3 {
        self.edge_a
    }

    /// The second edge vector.
    #[inline]
    pub fn edge_b(&self) -> Vector3 {
        self.edge_b
    }

    /// The third edge vector.
    #[inline]
    pub fn edge_c(&self) -> Vector3 {
        self.edge_c
    }

    /// Maps local unit-cube coordinates to a world-space offset from the
    /// anchor corner.
    #[inline]
    pub fn convert_from(&self) -> Matrix4 {
        self.convert_from
    }

    /// Maps a world-space offset from the anchor corner to local unit-cube
    /// coordinates.
    #[inline]
    pub fn convert_to(&self) -> Matrix4 {
        self.convert_to
    }

    /// The centroid.
    #[inline]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// The half-extents projected onto the three face normals.
    #[inline]
    pub fn extents(&self) -> Vector3 {
        self.extents
    }

    /// The unit normal of the faces spanned by `edge_b` and `edge_c`.
    #[inline]
    pub fn normal_a(&self) -> Vector3 {
        self.normal_a
    }

    /// The unit normal of the faces spanned by `edge_c` and `edge_a`.
    #[inline]
    pub fn normal_b(&self) -> Vector3 {
        self.normal_b
    }

    /// The unit normal of the faces spanned by `edge_a` and `edge_b`.
    #[inline]
    pub fn normal_c(&self) -> Vector3 {
        self.normal_c
    }

    /// The three face normals, in order.
    #[inline]
    pub fn normals(&self) -> [Vector3; 3] {
        [self.normal_a, self.normal_b, self.normal_c]
    }
}
