use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use memory_match::{Game, GameConfig, GameError, Position, SelectOutcome, Session};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about = "Find all the matching pairs", long_about = None)]
struct Args {
    /// Number of rows in the grid
    #[arg(long, default_value_t = 4)]
    rows: i32,

    /// Number of columns in the grid
    #[arg(long, default_value_t = 4)]
    cols: i32,

    /// How long a mismatched pair stays face up, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Pick(Position),
    Restart,
    Quit,
    Invalid,
}

fn main() {
    let args = Args::parse();

    let log_config = ConfigBuilder::new()
        .add_filter_allow_str("memory_match")
        .build();
    if let Err(e) = TermLogger::init(
        args.verbose.log_level_filter(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not initialize logger: {}", e);
    }

    match run_game(&args) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Game error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_game(args: &Args) -> Result<(), GameError> {
    let config = GameConfig::new(args.rows, args.cols)
        .with_mismatch_delay(Duration::from_millis(args.delay_ms));
    let game = match args.seed {
        Some(seed) => Game::with_seed(config, seed)?,
        None => Game::new(config)?,
    };
    log::debug!("seed: {:?}", args.seed);
    let mut session = Session::from_game(game);

    loop {
        print_board(session.game());
        if session.is_success() {
            println!("Success! Cleared in {} moves.", session.game().moves());
            println!("Enter 'r' to play again or 'q' to quit.");
        }

        match get_user_input() {
            Command::Pick(pos) => match session.select_cell(pos) {
                Ok(SelectOutcome::Ignored) => println!("That card can't be picked right now"),
                Ok(SelectOutcome::Revealed { .. }) => {}
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            },
            Command::Restart => session.restart_with_config()?,
            Command::Quit => return Ok(()),
            Command::Invalid => continue,
        }

        // Show the mismatched pair, then flip it back
        if let Some(remaining) = session.reversal_remaining() {
            print_board(session.game());
            io::stdout().flush().ok();
            thread::sleep(remaining);
            session.tick(remaining);
        }
    }
}

fn print_board(game: &Game) {
    let (rows, cols) = game.dimensions();

    // Print column numbers
    print!("   ");
    for col in 0..cols {
        print!("{:>3}", col);
    }
    println!();

    for row in 0..rows {
        print!("{:>3}", row);
        for col in 0..cols {
            let pos = Position::new(row as i32, col as i32);
            match game.cell_display(pos).ok().flatten() {
                Some(value) => print!("{:>3}", value),
                None => print!("  □"),
            }
        }
        println!();
    }
}

fn get_user_input() -> Command {
    print!("Enter command (row col / r / q): ");
    io::stdout().flush().ok();

    read_command(&mut io::stdin().lock())
}

/// Reads one command. End of input and read errors both quit.
fn read_command<R: BufRead>(reader: &mut R) -> Command {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return Command::Quit,
        Ok(_) => {}
        Err(e) => {
            log::error!("could not read input: {}", e);
            eprintln!("Error reading input: {}", e);
            return Command::Quit;
        }
    }

    let mut parts = input.split_whitespace();
    let Some(first) = parts.next() else {
        return Command::Invalid;
    };
    match first {
        "q" | "quit" => return Command::Quit,
        "r" | "restart" => return Command::Restart,
        _ => {}
    }

    let (Ok(row), Some(Ok(col))) = (first.parse::<i32>(), parts.next().map(str::parse::<i32>)) else {
        println!("Invalid command. Use 'row col' to pick a card, 'r' to restart, 'q' to quit");
        return Command::Invalid;
    };

    Command::Pick(Position::new(row, col))
}
