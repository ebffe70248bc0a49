#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::anyhow;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{
    auto_play, init_logging, play_out, print_player_view, render_merged, AiPlayer, CliPlayer,
    Difficulty, Game, GameError, Player, Seat,
};

#[derive(Parser)]
#[command(author, version, about = "Battleship in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Naive,
    Informed,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Naive => Difficulty::Naive,
            Level::Informed => Difficulty::Informed,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Pve {
        #[arg(long, value_enum, default_value_t = Level::Informed)]
        difficulty: Level,
        #[arg(long, help = "Let the computer move first without asking")]
        cpu_first: bool,
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Two players sharing one terminal.
    Pvp {
        #[arg(long, default_value = "Player 1")]
        player1: String,
        #[arg(long, default_value = "Player 2")]
        player2: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Computer against computer, reporting how many guesses each win took.
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long, value_enum, default_value_t = Level::Informed)]
        difficulty: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pve {
            difficulty,
            cpu_first,
            name,
            seed,
        } => run_pve(difficulty.into(), cpu_first, &name, make_rng(seed)),
        Commands::Pvp {
            player1,
            player2,
            seed,
        } => run_pvp(&player1, &player2, make_rng(seed)),
        Commands::Sim {
            games,
            difficulty,
            seed,
        } => run_sim(games, difficulty.into(), make_rng(seed)),
    }
}

#[cfg(feature = "std")]
fn run_pve(difficulty: Difficulty, cpu_first: bool, name: &str, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut human = CliPlayer::stdio(name);
    let mut cpu = AiPlayer::new(difficulty).map_err(|e| anyhow!(e))?;
    loop {
        let first = if cpu_first || !human.confirm("Do you want to go first?") {
            Seat::Two
        } else {
            Seat::One
        };
        let mut game = Game::new(first);
        cpu.reset();
        game.setup(Seat::One, &mut human, &mut rng)
            .map_err(|e| anyhow!(e))?;
        game.setup(Seat::Two, &mut cpu, &mut rng)
            .map_err(|e| anyhow!(e))?;

        let winner = match play_out(&mut game, [&mut human, &mut cpu], &mut rng) {
            Ok(winner) => winner,
            Err(GameError::Aborted) => return Ok(()),
            Err(e) => return Err(anyhow!(e)),
        };
        println!("\nGAME OVER");
        print_player_view(&game, Seat::One);
        match winner {
            Seat::One => println!("\n{} wins! All enemy ships have been sunk.", human.name()),
            Seat::Two => println!("\n{} wins. All your ships have been destroyed.", cpu.name()),
        }
        if !human.confirm("Play again?") {
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
fn run_pvp(name1: &str, name2: &str, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut one = CliPlayer::stdio(name1);
    let mut two = CliPlayer::stdio(name2);
    loop {
        let mut game = Game::new(Seat::One);
        game.setup(Seat::One, &mut one, &mut rng)
            .map_err(|e| anyhow!(e))?;
        one.wait_for_enter(&format!("Press enter to let {} place their ships...", two.name()));
        game.setup(Seat::Two, &mut two, &mut rng)
            .map_err(|e| anyhow!(e))?;
        two.wait_for_enter(&format!("Press enter to let {} play...", one.name()));

        let winner = loop {
            let seat = game.current();
            let (player, waiting) = match seat {
                Seat::One => (&mut one, &two),
                Seat::Two => (&mut two, &one),
            };
            println!("\n{}'s turn. Your board:", player.name());
            print!("{}", render_merged(game.board(seat), game.board(seat.other())));
            let report = match game.play_turn(&mut *player, &mut rng) {
                Ok(report) => report,
                Err(GameError::Aborted) => return Ok(()),
                Err(e) => return Err(anyhow!(e)),
            };
            if let Some(winner) = report.winner {
                break winner;
            }
            player.wait_for_enter(&format!("Press enter to let {} play...", waiting.name()));
        };

        let name = match winner {
            Seat::One => one.name(),
            Seat::Two => two.name(),
        };
        println!("\nGAME OVER\n{} sunk every ship and wins!", name);
        if !one.confirm("Play again?") {
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
fn run_sim(games: u32, difficulty: Difficulty, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut one = AiPlayer::new(difficulty).map_err(|e| anyhow!(e))?;
    let mut two = AiPlayer::new(difficulty).map_err(|e| anyhow!(e))?;
    let mut total = 0usize;
    for n in 1..=games {
        let first = if n % 2 == 1 { Seat::One } else { Seat::Two };
        let (game, winner) = auto_play(first, [&mut one, &mut two], &mut rng).map_err(|e| anyhow!(e))?;
        let guesses = game.guess_count(winner);
        println!("game {}: {:?} won after {} guesses", n, winner, guesses);
        total += guesses;
    }
    println!(
        "{:?} play, {} games, mean guesses to win: {:.2}",
        difficulty,
        games,
        total as f64 / games as f64
    );
    Ok(())
}
