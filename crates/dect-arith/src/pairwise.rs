use dect_core::{Error, Image, Sample};

/// Sums index-matched samples of two images of the same rank.
///
/// The two inputs may hold different sample types. Extents must be equal;
/// the output takes its geometry from `a`.
pub fn add_images<A: Sample, B: Sample, const D: usize>(
    a: &Image<A, D>,
    b: &Image<B, D>,
) -> Result<Image<f64, D>, Error> {
    a.zip_map(b, |&x, &y| x.to_f64() + y.to_f64())
}

#[cfg(test)]
mod tests {
    use dect_core::{Error, Geometry, Image};

    use crate::add_images;

    #[test]
    fn mixed_sample_types_sum_in_f64() {
        let a = Image::from_vec([2, 2], vec![250u8, 1, 2, 3]).expect("valid image");
        let b = Image::from_vec([2, 2], vec![10i16, -1, -2, -1000]).expect("valid image");

        let out = add_images(&a, &b).expect("same extent");
        assert_eq!(out.data(), &[260.0, 0.0, 0.0, -997.0]);
    }

    #[test]
    fn extent_mismatch_produces_no_output() {
        let a = Image::<f64, 3>::gradient([2, 2, 2]);
        let b = Image::<f64, 3>::gradient([2, 2, 3]);

        let err = add_images(&a, &b).expect_err("extent differs");
        assert_eq!(
            err,
            Error::ExtentMismatch {
                left: vec![2, 2, 2],
                right: vec![2, 2, 3]
            }
        );
    }

    #[test]
    fn output_geometry_comes_from_first_input() {
        let ga = Geometry::<1>::default().with_origin([5.0]);
        let gb = Geometry::<1>::default().with_origin([-5.0]);
        let a = Image::<f64, 1>::gradient([3]).with_geometry(ga);
        let b = Image::<f64, 1>::gradient([3]).with_geometry(gb);

        let out = add_images(&a, &b).expect("same extent");
        assert_eq!(out.geometry(), &ga);
        assert_eq!(out.data(), &[0.0, 2.0, 4.0]);
    }
}
