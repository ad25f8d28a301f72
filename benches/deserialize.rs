use criterion::{criterion_group, criterion_main, Criterion};
use dota_webapi::api::parse;

fn criterion_benchmark(c: &mut Criterion) {
    let match_details = include_bytes!("../src/api/fixtures/get_match_details.json");
    let game_items = include_bytes!("../src/api/fixtures/get_game_items.json");

    c.bench_function("parses match details", |b| b.iter(|| {
        parse::match_details(4176987886, match_details).ok();
    }));

    c.bench_function("parses game items", |b| b.iter(|| {
        parse::game_items(game_items).ok();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
