use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qbts_core::{ScaffoldConfig, Variant};

fn bench_build_manifest(c: &mut Criterion) {
    let toml_text = r#"
[project]
name = "bench-demo"
namespace = "BenchDemo"

[output]
variant = "full"

[database]
name = "bench_demo"
"#;
    let cfg: ScaffoldConfig = toml::from_str(toml_text).unwrap();

    c.bench_function("build_manifest_full", |b| {
        b.iter(|| qbts_templates::build_manifest(black_box(Variant::Full), &cfg).unwrap())
    });

    c.bench_function("build_manifest_simple", |b| {
        b.iter(|| qbts_templates::build_manifest(black_box(Variant::Simple), &cfg).unwrap())
    });
}

criterion_group!(benches, bench_build_manifest);
criterion_main!(benches);
