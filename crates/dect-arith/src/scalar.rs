use dect_core::{Image, Sample};

pub fn add_scalar<T: Sample, const D: usize>(src: &Image<T, D>, v: f64) -> Image<f64, D> {
    src.map(|&s| s.to_f64() + v)
}

pub fn multiply_scalar<T: Sample, const D: usize>(src: &Image<T, D>, v: f64) -> Image<f64, D> {
    src.map(|&s| s.to_f64() * v)
}

pub fn divide_scalar<T: Sample, const D: usize>(src: &Image<T, D>, v: f64) -> Image<f64, D> {
    src.map(|&s| s.to_f64() / v)
}
