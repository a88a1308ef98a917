use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use board_polynomials::decompose::{
    bishop_polynomial_via_diagonal, placement_multinomial, rook_polynomial,
};
use board_polynomials::loader;
use board_polynomials::render;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: boardpoly <board-file>");
    };

    let board = loader::load_board(&path).with_context(|| format!("loading board from {path}"))?;

    print!("{}", render::board_diagram(&board));
    println!("rook polynomial:   {}", rook_polynomial(&board));
    println!(
        "bishop polynomial: {}",
        bishop_polynomial_via_diagonal(&board)
    );
    println!("joint placements:  {}", placement_multinomial(&board));
    Ok(())
}
