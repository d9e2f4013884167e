use criterion::{criterion_group, criterion_main, Criterion};
use hand_strength::core::parse_cards;
use hand_strength::holdem::EquityCalculator;

fn calculate(c: &mut Criterion) {
    let hole = parse_cards(["QH", "QD"]).unwrap();
    let board = parse_cards(["2S", "7C", "9D", "JS", "KH"]).unwrap();
    let calc = EquityCalculator::new(&hole, &board).unwrap();

    c.bench_function("equity_990_holdings", |b| b.iter(|| calc.calculate()));
}

fn new_and_calculate(c: &mut Criterion) {
    let hole = parse_cards(["6H", "4H"]).unwrap();
    let board = parse_cards(["5H", "KH", "8C", "2S", "JD"]).unwrap();

    c.bench_function("equity_from_cards", |b| {
        b.iter(|| EquityCalculator::new(&hole, &board).unwrap().calculate())
    });
}

criterion_group!(benches, calculate, new_and_calculate);
criterion_main!(benches);
