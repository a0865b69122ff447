use std::ops::Add;

/// Outer corner radius that keeps a padded inner box concentric.
///
/// Set the inner radius first, add the padding, and the outer radius follows.
pub fn outer_radius<T: Add<Output = T>>(inner_radius: T, padding: T) -> T {
    inner_radius + padding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_radius_adds_padding() {
        assert_eq!(outer_radius(20, 16), 36);
        assert_eq!(outer_radius(0, 0), 0);
        assert_eq!(outer_radius(50u32, 0), 50);
    }

    #[test]
    fn test_outer_radius_over_integer_grid() {
        for i in 0..=50u32 {
            for p in 0..=190u32 {
                assert_eq!(outer_radius(i, p), i + p);
                assert_eq!(outer_radius(i, p), outer_radius(p, i));
            }
        }
    }

    #[test]
    fn test_outer_radius_is_not_rounded() {
        assert_eq!(outer_radius(12.5, 0.25), 12.75);
        assert_eq!(outer_radius(-4.0, 4.0), 0.0);
    }
}
