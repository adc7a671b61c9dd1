use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pillarbox::palette::PaletteKey;
use pillarbox::renderer::pillar_mesh::PillarMesh;
use pillarbox::scene::grid::GridSpec;
use pillarbox::scene::wave;

fn wave_benchmark(c: &mut Criterion) {
    c.bench_function("squish_evaluation", |b| {
        b.iter(|| {
            let a = wave::activation(black_box(12.5), black_box(3.2));
            black_box(wave::height_scale(wave::squish(a)))
        })
    });
}

fn palette_sample_benchmark(c: &mut Criterion) {
    let params = PaletteKey::Black.params();
    c.bench_function("cosine_palette_sample", |b| {
        b.iter(|| black_box(params.sample(black_box(0.37))))
    });
}

fn grid_offsets_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_offsets");

    for cells in [10, 20, 40, 64].iter() {
        let grid = GridSpec::new(*cells, 1.66);
        group.bench_function(format!("{}x{}", cells, cells), |b| {
            b.iter(|| black_box(grid.instance_offsets()))
        });
    }
    group.finish();
}

fn mesh_generation_benchmark(c: &mut Criterion) {
    c.bench_function("pillar_mesh_generate", |b| {
        b.iter(|| {
            black_box(PillarMesh::generate(
                black_box(2.0 / 3.0),
                black_box(8),
                black_box(2),
            ))
        })
    });
}

criterion_group!(
    benches,
    wave_benchmark,
    palette_sample_benchmark,
    grid_offsets_benchmark,
    mesh_generation_benchmark
);
criterion_main!(benches);
