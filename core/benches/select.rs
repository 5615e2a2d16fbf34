use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evaluation::MaterialEvaluator;
use search::{Engine, EngineConfig, WorstMoveEngine};
use utils::Game;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_positions(c: &mut Criterion) {
    let mut engine = WorstMoveEngine::new(Box::new(MaterialEvaluator), &EngineConfig::default());
    let mut group = c.benchmark_group("choose_worst_move");

    for fen in POSITIONS {
        let game = Game::from_fen(fen).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &game, |b, game| {
            let mut game = game.clone();
            b.iter(|| black_box(engine.choose_worst_move(&mut game)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
