use super::Vec2;

/// Column-major 3x3 matrix used for 2D affine transforms.
///
/// `cols[i]` is column `i`, matching GLSL `mat3` layout. Points are treated
/// as `vec3(x, y, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub cols: [[f32; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self { cols }
    }

    #[inline]
    pub const fn translation(t: Vec2) -> Self {
        Self::from_cols([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [t.x, t.y, 1.0]])
    }

    #[inline]
    pub const fn scale(s: Vec2) -> Self {
        Self::from_cols([[s.x, 0.0, 0.0], [0.0, s.y, 0.0], [0.0, 0.0, 1.0]])
    }

    /// `self * rhs`.
    pub fn mul_mat(self, rhs: Mat3) -> Mat3 {
        let mut out = [[0.0f32; 3]; 3];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Mat3 { cols: out }
    }

    /// Transforms a point (`w = 1`). No perspective divide.
    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        let c = &self.cols;
        Vec2::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1],
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.5, -2.0);
        assert_eq!(Mat3::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn scale_then_translate() {
        let m = Mat3::translation(Vec2::new(10.0, 20.0)).mul_mat(Mat3::scale(Vec2::splat(2.0)));
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 22.0));
    }
}
