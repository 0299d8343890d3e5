use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coverline_automation::{AutomationError, DetailDeriver, TitleCaseFields, humanize_label};
use coverline_core::{Data, ErrorCode, Status, Value};

const PROVIDER_FAILED: ErrorCode = ErrorCode::new("automation.providers.request.failed");

fn bag(entries: usize) -> Data {
    let mut data = Data::new();
    for i in 0..entries {
        let value = match i % 4 {
            0 => Value::from("production"),
            1 => Value::from(i as u64),
            2 => Value::Null,
            _ => Value::from(format!("POL-{i:05}")),
        };
        let key = if i % 4 == 0 {
            "environment".to_string()
        } else {
            format!("policyNumber{i}Id")
        };
        data.insert(key, value);
    }
    data
}

fn bench_humanize_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("humanize_label");

    for key in ["id", "organisationId", "entityEnvironment", "HTMLParserConfigurationId"] {
        group.bench_with_input(BenchmarkId::from_parameter(key), key, |b, key| {
            b.iter(|| humanize_label(black_box(key)));
        });
    }

    group.finish();
}

fn bench_derive_details(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_details");
    let fields = TitleCaseFields::builtin();
    let deriver = DetailDeriver::new(&fields);

    for entries in [1usize, 8, 32, 128].iter() {
        let data = bag(*entries);
        group.bench_with_input(BenchmarkId::new("entries", entries), &data, |b, data| {
            b.iter(|| deriver.derive(black_box(data)));
        });
    }

    group.finish();
}

fn bench_generate_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_error");
    let data = bag(8);

    group.bench_function("verbatim", |b| {
        b.iter(|| {
            AutomationError::generate_error(
                PROVIDER_FAILED,
                "Provider request failed",
                "The provider rejected the request.",
                Status::BadGateway,
                Some(black_box(data.clone())),
                None,
            )
        });
    });

    group.bench_function("with_details_from_data", |b| {
        b.iter(|| {
            AutomationError::generate_error_with_additional_details_from_data(
                PROVIDER_FAILED,
                "Provider request failed",
                "The provider rejected the request.",
                Status::BadGateway,
                Some(black_box(data.clone())),
                None,
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_humanize_label,
    bench_derive_details,
    bench_generate_error
);
criterion_main!(benches);
