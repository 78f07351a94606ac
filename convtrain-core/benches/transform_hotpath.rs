use convtrain_core::{
    build_entities, build_intents, read_entity_rows, read_intent_rows, TransformOptions,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn intent_csv(intents: usize, examples: usize) -> String {
    let mut out = String::new();
    for e in 0..examples {
        for i in 0..intents {
            out.push_str(&format!("\"utterance {} for intent {}\",\"intent_{}\"\n", e, i, i));
        }
    }
    out
}

fn entity_csv(entities: usize, values: usize) -> String {
    let mut out = String::new();
    for e in 0..entities {
        for v in 0..values {
            if v % 3 == 0 {
                out.push_str(&format!("\"entity_{}\",\"value_{}\",\"/v{}[0-9]+/\"\n", e, v, v));
            } else {
                out.push_str(&format!(
                    "\"entity_{}\",\"value_{}\",\"syn_a_{}\",\"syn_b_{}\",\"syn_c_{}\"\n",
                    e, v, v, v, v
                ));
            }
        }
    }
    out
}

fn bench_transform(c: &mut Criterion) {
    let intents = intent_csv(50, 40);
    let entities = entity_csv(30, 60);
    let options = TransformOptions::default();

    c.bench_function("transform/intents_50x40", |b| {
        b.iter(|| {
            let rows = read_intent_rows(black_box(intents.as_bytes())).expect("read intents");
            black_box(build_intents(rows).len());
        });
    });

    c.bench_function("transform/entities_30x60", |b| {
        b.iter(|| {
            let rows = read_entity_rows(black_box(entities.as_bytes())).expect("read entities");
            black_box(build_entities(rows, &options).len());
        });
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
