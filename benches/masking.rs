use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use currency_mask::{
    caret_position, mask, unmask, CurrencyField, Edit, FieldOptions, FormatOptions, Locale,
};

fn benchmark_unmask(c: &mut Criterion) {
    let usd = FormatOptions::new("USD");

    c.bench_function("unmask_grouped_amount", |b| {
        b.iter(|| unmask(black_box("$12,345,678.90"), &usd))
    });
}

fn benchmark_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask");

    for locale in [Locale::EN_US, Locale::DE_DE, Locale::FR_FR, Locale::SV_SE] {
        let options = FormatOptions::new("EUR").with_locale(locale);
        group.bench_with_input(
            BenchmarkId::from_parameter(locale.tag()),
            &options,
            |b, options| b.iter(|| mask(black_box(12_345_678.9), options, false, 1)),
        );
    }

    group.finish();
}

fn benchmark_caret(c: &mut Criterion) {
    let options = FormatOptions::new("SEK").with_locale(Locale::SV_SE);

    c.bench_function("caret_before_suffix", |b| {
        b.iter(|| caret_position(black_box("12\u{a0}345\u{a0}678,90\u{a0}kr"), &options))
    });
}

fn benchmark_keystrokes(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystrokes");

    for len in [4usize, 8, 12].iter() {
        let keys: Vec<String> = "123456789.12"
            .chars()
            .take(*len)
            .map(|c| c.to_string())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &keys, |b, keys| {
            b.iter(|| {
                let mut field = CurrencyField::new(FieldOptions::default(), "$0").unwrap();
                for key in keys {
                    let caret = field.caret();
                    field.apply(&Edit::insert(caret, key));
                }
                field
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_unmask,
    benchmark_mask,
    benchmark_caret,
    benchmark_keystrokes
);
criterion_main!(benches);
