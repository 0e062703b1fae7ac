use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use odds_bands::derive::{InvalidRowPolicy, derive_dataset};
use odds_bands::loader::{NormalizedTable, parse_csv};
use odds_bands::query::Selection;
use odds_bands::record::odds_bucket;

const TEAMS: [&str; 8] = [
    "Atalanta", "Bologna", "Genoa", "Inter", "Lazio", "Milan", "Napoli", "Roma",
];

fn synthetic_csv(rows: usize) -> String {
    let mut out = String::from(
        "Div,Date,HomeTeam,AwayTeam,FTHG,FTAG,HTHG,HTAG,HST,AST,PSH,PSCH,PSCD,PSCA\n",
    );
    for idx in 0..rows {
        let home = TEAMS[idx % TEAMS.len()];
        let away = TEAMS[(idx + 3) % TEAMS.len()];
        let fthg = idx % 4;
        let ftag = (idx / 3) % 3;
        let psh = 1.05 + (idx % 70) as f64 * 0.1;
        out.push_str(&format!(
            "I1,01/01/2024,{home},{away},{fthg},{ftag},{},{},{},{},{psh:.2},{:.2},3.40,3.10\n",
            fthg.min(1),
            ftag.min(1),
            fthg + 3,
            ftag + 2,
            psh + 0.03,
        ));
    }
    out
}

fn sample_table(rows: usize) -> NormalizedTable {
    let raw = synthetic_csv(rows);
    let table = parse_csv("bench", raw.as_bytes()).expect("synthetic csv parses");
    NormalizedTable::new(vec![table])
}

fn bench_parse(c: &mut Criterion) {
    let raw = synthetic_csv(5_000);
    c.bench_function("parse_csv_5k", |b| {
        b.iter(|| {
            let table = parse_csv("bench", black_box(raw.as_bytes())).unwrap();
            black_box(table.len());
        })
    });
}

fn bench_derive(c: &mut Criterion) {
    let table = sample_table(5_000);
    c.bench_function("derive_5k", |b| {
        b.iter(|| {
            let derived = derive_dataset(black_box(&table), InvalidRowPolicy::Abort).unwrap();
            black_box(derived.dataset.len());
        })
    });
}

fn bench_bucket(c: &mut Criterion) {
    c.bench_function("odds_bucket_sweep", |b| {
        b.iter(|| {
            let mut odd = 0.95;
            while odd < 7.5 {
                black_box(odds_bucket(black_box(odd)));
                odd += 0.01;
            }
        })
    });
}

fn bench_query(c: &mut Criterion) {
    let dataset = derive_dataset(&sample_table(20_000), InvalidRowPolicy::Abort)
        .unwrap()
        .dataset;
    let selection = Selection::new("Inter", odds_bucket(1.55));
    c.bench_function("query_20k", |b| {
        b.iter(|| {
            let result = dataset.query(black_box(&selection));
            black_box(result.summary.total);
        })
    });
}

criterion_group!(benches, bench_parse, bench_derive, bench_bucket, bench_query);
criterion_main!(benches);
