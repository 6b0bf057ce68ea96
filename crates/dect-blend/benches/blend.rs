use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dect_blend::{alpha_blend, convert_to_relative_density};
use dect_core::{DynImage, Image};

fn ct_volume_i16(extent: [usize; 3], phase: usize) -> DynImage {
    let len = extent.iter().product::<usize>();
    let mut data = Vec::with_capacity(len);
    for i in 0..len {
        data.push((((i + phase) % 2048) as i16) - 1024);
    }
    DynImage::from(Image::from_vec(extent, data).expect("valid image"))
}

fn bench_alpha_blend(c: &mut Criterion) {
    let high = ct_volume_i16([256, 256, 64], 0);
    let low = ct_volume_i16([256, 256, 64], 37);

    c.bench_function("alpha_blend_i16_256x256x64", |b| {
        b.iter(|| {
            let out = alpha_blend(black_box(&high), black_box(&low), black_box(0.6))
                .expect("same shape");
            black_box(out);
        });
    });
}

fn bench_relative_density(c: &mut Criterion) {
    let hu = ct_volume_i16([256, 256, 64], 0);

    c.bench_function("convert_to_relative_density_i16_256x256x64", |b| {
        b.iter(|| {
            let out = convert_to_relative_density(black_box(&hu));
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_alpha_blend, bench_relative_density);
criterion_main!(benches);
