// Demonstration: print the reflex features of every legal action.
//
// Build/run from this repo root:
//   cargo run --example feature_demo -- --layout path/to/maze.lay --scared 20
//   cargo run --example feature_demo -- --random 12x8 --seed 7

use std::env;
use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;

use pacfeat::game::RandomLayoutParams;
use pacfeat::{
    FeatureExtractor, FeatureVector, GameState, Layout, SimpleExtractor, SimpleFeature,
};

const DEFAULT_LAYOUT: &str = "\
%%%%%%%%%%
%o....%..%
%.%%%.%.%%
%P..G....%
%%%%%%%%%%
";

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let scared: u32 = arg_value(&args, "--scared")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let layout = if let Some(dims) = arg_value(&args, "--random") {
        let Some((w, h)): Option<(usize, usize)> = dims
            .split_once('x')
            .and_then(|(w, h)| Some((w.parse().ok()?, h.parse().ok()?)))
        else {
            eprintln!("Invalid --random '{}'; expected WIDTHxHEIGHT.", dims);
            std::process::exit(2);
        };
        Layout::random(w, h, &RandomLayoutParams::default(), &mut StdRng::seed_from_u64(seed))
    } else if let Some(path) = arg_value(&args, "--layout") {
        match fs::read_to_string(path) {
            Ok(text) => Layout::parse(&text),
            Err(e) => {
                eprintln!("Cannot read layout '{}': {}", path, e);
                std::process::exit(2);
            }
        }
    } else {
        Layout::parse(DEFAULT_LAYOUT)
    };

    let layout = match layout {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Invalid layout: {}", e);
            std::process::exit(2);
        }
    };

    let state = GameState::from_layout(&layout).with_scared_ghosts(scared);
    let extractor = SimpleExtractor::default();
    println!(
        "Pacman at {} ({} food, {} capsules, {} scared ghosts)",
        state.pacman_position(),
        state.food().count(),
        state.capsules().len(),
        state.scared_ghost_count()
    );

    for action in state.legal_actions() {
        match extractor.features(&state, action) {
            Ok(features) => println!("{:>5}: {}", action, render(&features)),
            Err(e) => eprintln!("{:>5}: {}", action, e),
        }
    }
}

fn render(features: &FeatureVector<SimpleFeature>) -> String {
    SimpleFeature::all()
        .iter()
        .filter(|k| features.contains(*k))
        .map(|k| format!("{}={:.3}", k, features.get(k)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
