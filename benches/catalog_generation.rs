#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use restdoc::{
    build_catalog, build_resource_document, FieldDescriptor, GeneratorConfig, PrimitiveType,
    RegistryBuilder, RequestContext, ResourceDefinition, ResourceRegistry,
};
use std::hint::black_box;

/// `count` resources with a dozen fields each; every other resource nests the next one
fn registry(count: usize) -> ResourceRegistry {
    let mut builder = RegistryBuilder::new();
    for i in 0..count {
        let mut resource = ResourceDefinition::new(format!("thing{i}"));
        for f in 0..12 {
            let primitive = match f % 4 {
                0 => PrimitiveType::Text,
                1 => PrimitiveType::Numeric,
                2 => PrimitiveType::array_of(PrimitiveType::ObjectId),
                _ => PrimitiveType::Boolean,
            };
            let mut field = FieldDescriptor::new(format!("field{f}"), primitive);
            if f == 11 {
                field = field.hidden();
            }
            resource = resource.with_field(field);
        }
        if i % 2 == 0 && i + 1 < count {
            resource = resource.with_child(format!("thing{}", i + 1));
        }
        builder.register(resource);
    }
    builder.build().expect("bench registry")
}

fn bench_catalog(c: &mut Criterion) {
    let config = GeneratorConfig::default();
    let ctx = RequestContext::new("http", "localhost:8012", "/api/documentation");
    let mut group = c.benchmark_group("catalog");
    for count in [4usize, 32, 128] {
        let registry = registry(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &registry, |b, registry| {
            b.iter(|| build_catalog(black_box(registry), &ctx, &config))
        });
    }
    group.finish();
}

fn bench_resource_document(c: &mut Criterion) {
    let config = GeneratorConfig::default();
    let registry = registry(8);
    let ctx = RequestContext::new("http", "localhost:8012", "/api/documentation/thing0s");
    c.bench_function("resource_document_nested", |b| {
        b.iter(|| {
            let doc = build_resource_document(black_box(&registry), "thing0s", &ctx, &config);
            serde_json::to_string(&doc.ok()).map(|s| s.len()).unwrap_or(0)
        })
    });
}

criterion_group!(benches, bench_catalog, bench_resource_document);
criterion_main!(benches);
