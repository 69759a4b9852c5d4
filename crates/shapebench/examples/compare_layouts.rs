//! Quick side-by-side of the three layouts on one random scene.
//!
//! Usage:
//!   cargo run -p shapebench --example compare_layouts -- 200000 4
//!
//! Prints occupation and elapsed time per layout for the given shape count and
//! thread count (0 = pipelined).

use shapebench::api;
use shapebench::random::{generate, GenCfg};
use shapebench::repr::encode_all;
use shapebench::{ComposedShape, ExecCfg, FlatShape, GenericShape};

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let threads = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let cfg = ExecCfg::parallel(threads);

    let shapes = match generate(&GenCfg { count, ..GenCfg::default() }, 2025) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let flat: Vec<FlatShape> = encode_all(&shapes);
    let composed: Vec<ComposedShape> = encode_all(&shapes);
    let generic: Vec<GenericShape> = encode_all(&shapes);

    let runs = [
        ("flat", api::occupation(&flat, cfg)),
        ("composed", api::occupation(&composed, cfg)),
        ("generic", api::occupation(&generic, cfg)),
    ];
    for (name, res) in runs {
        match res {
            Ok(r) => println!(
                "{name:>9}: occupation={:.1} colors={} elapsed={:.3}ms",
                r.occupation,
                r.colors.len(),
                r.elapsed_ms
            ),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
