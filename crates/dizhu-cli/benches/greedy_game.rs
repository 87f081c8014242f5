use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dizhu_bot::{Agent, GreedyAgent};
use dizhu_cli::table;
use dizhu_core::game::session::Session;

fn play_one_game(seed: u64) {
    let mut session = Session::with_seed(seed).unwrap();
    let mut agents: [Box<dyn Agent>; 3] = [
        Box::new(GreedyAgent::new()),
        Box::new(GreedyAgent::new()),
        Box::new(GreedyAgent::new()),
    ];
    let winner = table::run_game(&mut session, &mut agents, false).unwrap();
    black_box(winner);
}

fn greedy_game_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_game");
    for seed in [11u64, 47, 90] {
        group.bench_function(format!("full_game_{seed}"), |b| {
            b.iter(|| play_one_game(seed))
        });
    }
    group.finish();
}

criterion_group!(benches, greedy_game_bench);
criterion_main!(benches);
