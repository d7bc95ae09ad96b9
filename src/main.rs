//! Pica Centro - CLI
//!
//! Guess the secret number. Clues: P = right digit, wrong place;
//! C = right digit, right place; X = digit not in the secret.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pica_centro::{
    commands::{PlayOptions, run_play, score_guess},
    config::{ConfigError, DEFAULT_MAX_DIGIT, DEFAULT_SECRET_LENGTH, GameConfig, MAX_GUESS_COUNT},
    core::SecretGenerator,
    logging::init_logging,
    output::write_score_result,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pica_centro",
    about = "Pica Centro: guess the secret number from pica/centro clues",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the console, one clue line per guess (default)
    Play(GameArgs),

    /// Play on a full-screen board
    Tui(GameArgs),

    /// Score a single guess against a given secret
    Score {
        /// The secret number, e.g. 0443
        secret: String,

        /// The guess, same length as the secret
        guess: String,
    },
}

#[derive(Args, Clone, Copy)]
struct GameArgs {
    /// Number of digits in the secret (1-10)
    #[arg(default_value_t = DEFAULT_SECRET_LENGTH)]
    length: usize,

    /// Guesses allowed before the secret is revealed
    #[arg(short = 'a', long, default_value_t = MAX_GUESS_COUNT)]
    max_attempts: u32,

    /// Largest digit the secret may contain (0-9)
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DIGIT)]
    max_digit: u8,

    /// Seed for a reproducible secret
    #[arg(long)]
    seed: Option<u64>,

    /// Show the secret at the start (for testing)
    #[arg(long, hide = true)]
    reveal: bool,
}

impl GameArgs {
    fn config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.length)?
            .with_max_attempts(self.max_attempts)?
            .with_max_digit(self.max_digit)
    }

    fn generator(&self) -> SecretGenerator {
        self.seed
            .map_or_else(SecretGenerator::from_os_rng, SecretGenerator::seeded)
    }
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(cli.game));

    match command {
        Commands::Play(args) => run_play_command(&args),
        Commands::Tui(args) => {
            run_tui_command(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Score { secret, guess } => {
            run_score_command(&secret, &guess)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_play_command(args: &GameArgs) -> Result<ExitCode> {
    let mut options = PlayOptions::new(args.config()?);
    options.reveal = args.reveal;
    run_play(options, args.generator())
}

fn run_tui_command(args: &GameArgs) -> Result<()> {
    use pica_centro::interactive::{App, run_tui};

    let app = App::new(args.config()?, args.generator());
    run_tui(app)
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    let mut stdout = io::stdout();
    let styled = stdout.is_terminal();
    write_score_result(&mut stdout, &result, styled)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["pica_centro"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.game.config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn positional_length() {
        let cli = Cli::try_parse_from(["pica_centro", "7"]).unwrap();
        assert_eq!(cli.game.config().unwrap().secret_length(), 7);
    }

    #[test]
    fn out_of_range_length_is_config_error() {
        for length in ["0", "11"] {
            let cli = Cli::try_parse_from(["pica_centro", length]).unwrap();
            assert!(matches!(
                cli.game.config(),
                Err(ConfigError::SecretLength(_))
            ));
        }
    }

    #[test]
    fn non_integer_length_rejected() {
        assert!(Cli::try_parse_from(["pica_centro", "four"]).is_err());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["pica_centro", "score", "0443", "4034"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Score { ref secret, ref guess }) if secret == "0443" && guess == "4034"
        ));

        let cli = Cli::try_parse_from(["pica_centro", "tui", "5", "--max-attempts", "8"]).unwrap();
        let Some(Commands::Tui(args)) = cli.command else {
            panic!("expected tui command");
        };
        let config = args.config().unwrap();
        assert_eq!(config.secret_length(), 5);
        assert_eq!(config.max_attempts(), 8);
    }

    #[test]
    fn seed_makes_play_and_tui_secrets_match() {
        let secret_for = |argv: &[&str]| {
            let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
            let args = match cli.command {
                Some(Commands::Play(args) | Commands::Tui(args)) => args,
                _ => cli.game,
            };
            let config = args.config().unwrap();
            args.generator()
                .generate(config.secret_length(), config.digit_range())
        };

        let play = secret_for(&["pica_centro", "play", "6", "--seed", "42"]);
        let tui = secret_for(&["pica_centro", "tui", "6", "--seed", "42"]);
        let bare = secret_for(&["pica_centro", "6", "--seed", "42"]);
        assert_eq!(play, tui);
        assert_eq!(play, bare);
        assert_eq!(
            play,
            SecretGenerator::seeded(42).generate(6, GameConfig::new(6).unwrap().digit_range())
        );
    }

    #[test]
    fn max_digit_validated() {
        let cli = Cli::try_parse_from(["pica_centro", "--max-digit", "12"]).unwrap();
        assert_eq!(cli.game.config(), Err(ConfigError::MaxDigit(12)));
    }
}
