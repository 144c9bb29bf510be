// src/bin/craps_cli.rs
//
// Интерактивный терминальный крэпс поверх api::execute_command.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use craps_engine::api::{
    build_session_view, execute_command, Command, CommandResponse, SessionViewDto,
};
use craps_engine::domain::{Chips, Phase, RoundStatus, RULES};
use craps_engine::engine::{DiceSource, GameController};
use craps_engine::infra::{CrapsConfig, DeterministicRng, SystemRng};

const SEPARATOR: &str = "====================";

#[derive(Parser, Debug)]
#[command(name = "craps", author, version, about = "Play a game of Craps from the command line")]
struct Args {
    /// Имя игрока (иначе CRAPS_PLAYER или "Player").
    #[arg(short, long)]
    player: Option<String>,

    /// Стартовый банкролл (иначе CRAPS_BANKROLL или 100).
    #[arg(short, long)]
    bankroll: Option<u64>,

    /// Минимальная ставка (иначе CRAPS_MIN_BET или 5).
    #[arg(long)]
    min_bet: Option<u64>,

    /// Банкролл для победы в сессии (иначе CRAPS_WINNING_BALANCE или 1000).
    #[arg(long)]
    target: Option<u64>,

    /// Seed для воспроизводимых бросков.
    #[arg(long)]
    seed: Option<u64>,

    /// Уровень логов, если RUST_LOG не задан.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// В конце напечатать состояние сессии в JSON.
    #[arg(long)]
    json: bool,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            error!("[CLI] некорректная конфигурация: {e}");
            eprintln!("Invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };
    debug!(?config, "[CLI] конфигурация собрана");

    let source: Box<dyn DiceSource> = match args.seed {
        Some(seed) => Box::new(DeterministicRng::from_seed(seed)),
        None => Box::new(SystemRng),
    };
    let mut controller = GameController::from_config(&config, source);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    show_welcome();
    play_session(&mut controller, &mut input);

    if args.json {
        match serde_json::to_string_pretty(&build_session_view(&controller)) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("[CLI] не удалось сериализовать состояние: {e}"),
        }
    }

    ExitCode::SUCCESS
}

/// Флаги CLI поверх окружения поверх дефолтов.
fn build_config(args: &Args) -> Result<CrapsConfig, craps_engine::infra::ConfigError> {
    let mut config = CrapsConfig::from_env()?;
    if let Some(name) = &args.player {
        config.player_name = name.clone();
    }
    if let Some(b) = args.bankroll {
        config.starting_balance = Chips(b);
    }
    if let Some(m) = args.min_bet {
        config.minimum_bet = Chips(m);
    }
    if let Some(t) = args.target {
        config.winning_balance = Chips(t);
    }
    config.validate()?;
    Ok(config)
}

fn play_session<S: DiceSource>(controller: &mut GameController<S>, input: &mut impl BufRead) {
    loop {
        if controller.is_game_session_over() {
            let view = build_session_view(controller);
            show_game_outcome(view.has_won, view.balance);
            break;
        }
        if !controller.can_afford_minimum_bet() {
            debug!(
                balance = %controller.player().balance(),
                minimum = %controller.minimum_bet(),
                "[CLI] банкролла не хватает на минимальную ставку"
            );
            show_game_outcome(false, controller.player().balance());
            break;
        }
        if let Flow::Quit = play_round(controller, input) {
            break;
        }
        if controller.is_game_session_over() || !controller.can_afford_minimum_bet() {
            continue;
        }
        if !ask_play_again(input) {
            break;
        }
        controller.reset_round();
    }
}

fn play_round<S: DiceSource>(controller: &mut GameController<S>, input: &mut impl BufRead) -> Flow {
    display_state(&build_session_view(controller));

    let bet = match read_bet(input, controller.minimum_bet(), controller.player().balance()) {
        Some(b) => b,
        None => return Flow::Quit,
    };

    if let Err(e) = execute_command(controller, Command::StartRound { bet }) {
        println!("{e}");
        return Flow::Continue;
    }

    while !controller.is_round_over() {
        if !prompt_for_roll(input) {
            return Flow::Quit;
        }

        match execute_command(controller, Command::Roll) {
            Ok(CommandResponse::Rolled { roll, view }) => {
                println!(
                    "You rolled a {} and a {} ({} total)",
                    roll.die1, roll.die2, roll.total
                );
                if view.round_over {
                    show_round_outcome(view.round_status == RoundStatus::Win, bet);
                } else if view.phase == Phase::Point {
                    display_state(&view);
                }
            }
            Ok(other) => debug!(?other, "[CLI] неожиданный ответ на Roll"),
            Err(e) => {
                error!("[CLI] ошибка броска: {e}");
                return Flow::Quit;
            }
        }
    }

    Flow::Continue
}

fn show_welcome() {
    println!("{SEPARATOR}");
    println!("Welcome to Craps!");
    println!("Type 'rules' at any time to view game rules, or 'quit' to exit.");
    println!("{SEPARATOR}");
}

fn show_rules() {
    println!("{SEPARATOR}");
    println!("{RULES}");
    println!("{SEPARATOR}");
}

fn display_state(view: &SessionViewDto) {
    println!("{SEPARATOR}");
    println!("Balance: {}", view.balance);
    println!("Current Phase: {}", view.phase);
    if view.phase == Phase::Point {
        println!("Point is: {}", view.point);
    }
    println!("{SEPARATOR}");
}

fn show_round_outcome(won: bool, amount: Chips) {
    if won {
        println!("You win {amount}!");
    } else {
        println!("You lose {amount}!");
    }
}

fn show_game_outcome(has_won: bool, final_balance: Chips) {
    println!("{SEPARATOR}");
    if has_won {
        println!("Congratulations! You've won the game!");
    } else {
        println!("Game Over! Better luck next time!");
    }
    println!("Final balance: {final_balance}");
    println!("{SEPARATOR}");
}

/// Строка ввода в нижнем регистре; `None` на EOF/ошибке.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

/// Ставка в пределах [minimum, balance] или `None` на quit.
fn read_bet(input: &mut impl BufRead, minimum: Chips, balance: Chips) -> Option<Chips> {
    loop {
        print!("Enter your bet (minimum {minimum}, maximum {balance}): ");
        let line = read_line(input)?;
        match line.as_str() {
            "quit" => return None,
            "rules" => {
                show_rules();
                continue;
            }
            _ => {}
        }
        match line.parse::<u64>() {
            Ok(v) if Chips(v) >= minimum && Chips(v) <= balance => return Some(Chips(v)),
            Ok(_) => println!("Invalid bet amount. Please try again."),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

fn prompt_for_roll(input: &mut impl BufRead) -> bool {
    loop {
        print!("Press Enter to roll the dice (or type 'quit' to exit): ");
        let Some(line) = read_line(input) else {
            return false;
        };
        match line.as_str() {
            "quit" => return false,
            "rules" => show_rules(),
            "" => return true,
            _ => {}
        }
    }
}

fn ask_play_again(input: &mut impl BufRead) -> bool {
    loop {
        print!("Would you like to play another round? (yes/no): ");
        let Some(line) = read_line(input) else {
            return false;
        };
        match line.as_str() {
            "yes" | "y" => return true,
            "no" | "n" => return false,
            _ => println!("Please answer 'yes' or 'no'."),
        }
    }
}
