use clap::Parser;
use dice_roll::roll::{AnyStringifier, Stringify};
use dice_roll::RollResult;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "roll",
    about = "Roll some dice",
    long_about = "Roll some dice. Supports chained dice expressions such as:\n\n    roll 2d6+1d4+2",
    version
)]
struct Cli {
    /// Dice expression to roll
    #[arg(default_value = "1d20")]
    expression: String,

    /// Print only the total
    #[arg(short, long)]
    plain: bool,

    /// Seed for the random number generator (default: seeded from the OS)
    #[arg(long, env = "DICE_SEED")]
    seed: Option<u64>,

    /// Maximum number of dice rolled per expression
    #[arg(
        long,
        default_value_t = dice_roll::DEFAULT_MAX_ROLLS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_rolls: u64,

    /// Read expressions from stdin, one per line
    #[arg(short, long)]
    interactive: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn roll(rng: &mut StdRng, expression: &str, max_rolls: usize) -> dice_roll::Result<RollResult> {
    dice_roll::roll_bounded(rng, expression, max_rolls)
}

fn repl(
    rng: &mut StdRng,
    max_rolls: usize,
    out: &mut AnyStringifier,
) -> io::Result<()> {
    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let expression = line.trim();
        if !expression.is_empty() {
            match roll(rng, expression, max_rolls) {
                Ok(result) => println!("{}", out.str_result(&result)),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    tracing::debug!(seed = ?cli.seed, max_rolls = cli.max_rolls, "starting");
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let max_rolls = usize::try_from(cli.max_rolls).unwrap_or(usize::MAX);
    let mut out = AnyStringifier::plain(cli.plain);

    if cli.interactive {
        return match repl(&mut rng, max_rolls, &mut out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(why) => {
                eprintln!("Error: {}", why);
                ExitCode::FAILURE
            }
        };
    }

    if !cli.plain {
        println!();
        println!("Rolling: {}", cli.expression);
        println!();
    }

    match roll(&mut rng, &cli.expression, max_rolls) {
        Ok(result) => {
            println!("{}", out.str_result(&result));
            ExitCode::SUCCESS
        }
        Err(why) => {
            eprintln!("Error: {}", why);
            ExitCode::FAILURE
        }
    }
}
