use crate::Point;
use serde_derive::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A vector
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Vector {
    /// The x component of the Vector
    pub x: f64,
    /// The y component of the Vector
    pub y: f64,
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Self::Output) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Self::Output) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl Vector {
    /// Calculates the cross product of itself and another vector
    /// # Examples
    /// ```
    /// use overlap2d::Vector;
    /// // a × b = c
    /// let a = Vector { x: 2.0, y: 3.0 };
    /// let b = Vector { x: -4.0, y: 10.0 };
    /// let c = a.cross_product(b);
    /// assert_eq!(32.0, c);
    /// ```
    pub fn cross_product(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the magnitude of the vector, i.e. its length if viewed as a line
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearly_eq::assert_nearly_eq;

    #[test]
    fn adds_other_vector() {
        let original_vector = Vector { x: 12.0, y: 43.0 };
        let vector_to_add = Vector { x: 3.0, y: 1.0 };
        let expected_vector = Vector { x: 15.0, y: 44.0 };
        assert_eq!(expected_vector, original_vector + vector_to_add);
    }

    #[test]
    fn subtracts_other_vector() {
        let original_vector = Vector { x: 12.0, y: 43.0 };
        let vector_to_subtract = Vector { x: 3.0, y: 1.0 };
        let expected_vector = Vector { x: 9.0, y: 42.0 };
        assert_eq!(expected_vector, original_vector - vector_to_subtract);
    }

    #[test]
    fn calculates_cross_product() {
        let a = Vector { x: 2.0, y: 3.0 };
        let b = Vector { x: -4.0, y: 10.0 };
        let expected_cross_product = 32.0;
        assert_nearly_eq!(expected_cross_product, a.cross_product(b));
    }

    #[test]
    fn calculates_negative_cross_product() {
        let a = Vector { x: 2.0, y: 3.0 };
        let b = Vector { x: 40.0, y: 10.0 };
        let expected_cross_product = -100.0;
        assert_nearly_eq!(expected_cross_product, a.cross_product(b));
    }

    #[test]
    fn cross_product_of_self_is_zero() {
        let vector = Vector { x: 40.0, y: 10.0 };
        assert_nearly_eq!(0.0, vector.cross_product(vector));
    }

    #[test]
    fn magnitude_of_zero_vector_is_zero() {
        let vector = Vector::default();
        assert_nearly_eq!(0.0, vector.magnitude());
    }

    #[test]
    fn magnitude_of_horizontal_vector_is_correct() {
        let vector = Vector { x: 5.0, y: 0.0 };
        assert_nearly_eq!(5.0, vector.magnitude());
    }

    #[test]
    fn magnitude_of_rotated_vector_is_correct() {
        let vector = Vector { x: 9.0, y: 3.0 };
        let expected_magnitude = 9.486_832_980_505_138;
        assert_nearly_eq!(expected_magnitude, vector.magnitude());
    }

    #[test]
    fn magnitude_of_negative_vector_is_correct() {
        let vector = Vector { x: -5.0, y: -2.0 };
        let expected_magnitude = 5.385_164_807_134_504;
        assert_nearly_eq!(expected_magnitude, vector.magnitude());
    }

    #[test]
    fn can_be_created_from_point() {
        let point = Point { x: 4.0, y: -2.0 };
        let expected_vector = Vector { x: 4.0, y: -2.0 };
        assert_eq!(expected_vector, Vector::from(point));
    }
}
