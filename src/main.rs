use clap::Parser;
use minesweeper::{Board, Game, GameError};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "minesweeper", about = "Flag every mine or clear every safe cell", version)]
struct Args {
    /// Board height
    #[arg(long, default_value_t = 9)]
    height: usize,
    /// Board width
    #[arg(long, default_value_t = 9)]
    width: usize,
    /// Number of mines; asked for interactively when omitted
    #[arg(long)]
    mines: Option<usize>,
    /// Seed for reproducible mine placement
    #[arg(long)]
    seed: Option<u64>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run_game(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Game error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run_game(args: &Args) -> Result<(), GameError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map_while(Result::ok);

    let mines = match args.mines {
        Some(mines) => mines,
        None => match prompt_mines(&mut lines) {
            Some(mines) => mines,
            None => return Ok(()),
        },
    };

    let board = match args.seed {
        Some(seed) => Board::with_seed(args.height, args.width, mines, seed)?,
        None => Board::new(args.height, args.width, mines)?,
    };
    let mut game = Game::new(board);
    println!("{}", game.render());

    while !game.status().is_finished() {
        prompt("Set/unset mines marks or claim a cell as free (row column reveal|flag):");
        let Some(line) = lines.next() else { break };

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["q" | "quit" | "exit"] => break,
            [row, column, action] => {
                let (Some(row), Some(column)) = (parse_coordinate(row), parse_coordinate(column))
                else {
                    println!("Row and column must be positive numbers");
                    continue;
                };
                match game.make_move(row, column, action) {
                    Ok(()) => {
                        println!("{}", game.render());
                        println!("Mines left: {}", game.board().mines_remaining());
                    }
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Expected three values: <row> <column> <reveal|flag>"),
        }
    }

    let status = game.status();
    if status.is_finished() {
        println!("{}", status.message());
    }
    Ok(())
}

fn prompt(text: &str) {
    println!("{}", text);
    let _ = io::stdout().flush();
}

fn prompt_mines(lines: &mut impl Iterator<Item = String>) -> Option<usize> {
    loop {
        prompt("How many mines do you want on the field?");
        let line = lines.next()?;
        match line.trim().parse() {
            Ok(mines) => return Some(mines),
            Err(_) => println!("'{}' is not a valid mine count", line.trim()),
        }
    }
}

fn parse_coordinate(token: &str) -> Option<usize> {
    token.parse().ok()
}
