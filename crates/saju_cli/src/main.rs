use std::path::PathBuf;

use clap::{Parser, Subcommand};
use saju_base::hidden_stems::resolve;
use saju_base::{Branch, HarmonyPriority, Resolution, Stem, ten_god_for_chars};
use saju_rs::{
    BirthInput, BirthInstant, CalendarType, ChartConfig, Gender, SajuConfig, SolarOnly,
    analyze_with, annual, chart_with, init, luck_with, pillars, surrounding_terms,
};
use saju_search::MAX_LUCK_PILLAR_COUNT;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Sexagenary birth chart CLI")]
struct Cli {
    /// Path to the solar-term index JSON
    #[arg(long, global = true, env = "SAJU__SOLAR_TERMS_PATH")]
    terms: Option<PathBuf>,
    /// Log at debug level to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart analysis for a birth
    Chart {
        /// Local birth time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        date: String,
        /// male | female | m | f | 남 | 여
        #[arg(long)]
        gender: String,
        /// Only solar is supported; convert lunar dates to solar first
        #[arg(long, default_value = "solar")]
        calendar: String,
        /// six-first or triple-first (default from SAJU__HARMONY_PRIORITY)
        #[arg(long)]
        priority: Option<String>,
        /// Number of luck pillars, 1-12 (default from SAJU__LUCK_PILLAR_COUNT)
        #[arg(long)]
        luck_count: Option<u8>,
        /// Omit the luck pillar section
        #[arg(long)]
        no_luck: bool,
        /// Include natal interactions of each luck pillar
        #[arg(long)]
        interactions: bool,
        /// First year of annual pillars to list
        #[arg(long, requires = "annual_to")]
        annual_from: Option<i32>,
        /// Last year of annual pillars to list
        #[arg(long, requires = "annual_from")]
        annual_to: Option<i32>,
    },
    /// Four pillars only
    Pillars {
        /// Local birth time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        date: String,
    },
    /// Luck pillar sequence
    Luck {
        /// Local birth time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        date: String,
        /// male | female
        #[arg(long)]
        gender: String,
        /// Number of luck pillars, 1-12 (default from SAJU__LUCK_PILLAR_COUNT)
        #[arg(long)]
        count: Option<u8>,
        /// Only report the pillar active at this age
        #[arg(long)]
        age: Option<u32>,
    },
    /// Analyze a chart given as four pillars, e.g. "庚辰 乙酉 癸未 庚申"
    Analyze {
        chart: String,
        /// six-first or triple-first
        #[arg(long)]
        priority: Option<String>,
    },
    /// Annual pillars for a year range
    Annual {
        #[arg(long)]
        from: i32,
        #[arg(long)]
        to: i32,
        /// Day stem the ten gods are taken against (Hanja or Hangul)
        #[arg(long)]
        day_stem: String,
    },
    /// Month-opening terms around an instant
    Terms {
        /// Local time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        date: String,
    },
    /// Ten god of a character relative to a day stem
    TenGod {
        /// Day stem character
        day: char,
        /// Target stem or branch character
        target: char,
    },
    /// Hidden stems of a branch
    HiddenStems {
        /// Branch (Hanja or Hangul)
        branch: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> SajuConfig {
    let config = SajuConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }
    config
}

/// Install the global index from `--terms` (or `SAJU__SOLAR_TERMS_PATH`,
/// including one set in `.env`).
fn load_index(terms: Option<PathBuf>, config: &SajuConfig) {
    let path = terms
        .or_else(|| config.solar_terms_path.clone())
        .unwrap_or_else(|| {
            eprintln!("No solar-term index: pass --terms or set SAJU__SOLAR_TERMS_PATH");
            std::process::exit(1);
        });
    if let Err(e) = init(&path) {
        eprintln!("Failed to load solar-term index {}: {e}", path.display());
        std::process::exit(1);
    }
    tracing::debug!(path = %path.display(), "solar-term index ready");
}

fn parse_instant(s: &str) -> BirthInstant {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn parse_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid gender: {s}");
        eprintln!("Valid: male, female, m, f, 남, 여");
        std::process::exit(1);
    })
}

/// The CLI has no lunar converter, so lunar input is refused up front.
fn parse_calendar(s: &str) -> CalendarType {
    match s.parse::<CalendarType>() {
        Ok(CalendarType::Solar) => CalendarType::Solar,
        Ok(CalendarType::Lunar { .. }) => {
            eprintln!("Lunar input is not supported here: convert the date to solar first");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("Invalid calendar: {s}");
            eprintln!("Valid: solar");
            std::process::exit(1);
        }
    }
}

fn parse_priority(s: &str) -> HarmonyPriority {
    match s.to_lowercase().replace('_', "-").as_str() {
        "six-first" | "six" => HarmonyPriority::SixFirst,
        "triple-first" | "triple" => HarmonyPriority::TripleFirst,
        _ => {
            eprintln!("Invalid priority: {s}");
            eprintln!("Valid: six-first, triple-first");
            std::process::exit(1);
        }
    }
}

fn require_luck_count(n: u8) -> u8 {
    if n == 0 || n > MAX_LUCK_PILLAR_COUNT {
        eprintln!("Invalid luck count: {n} (1-{MAX_LUCK_PILLAR_COUNT})");
        std::process::exit(1);
    }
    n
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config();

    match cli.command {
        Commands::Chart {
            date,
            gender,
            calendar,
            priority,
            luck_count,
            no_luck,
            interactions,
            annual_from,
            annual_to,
        } => {
            let calendar = parse_calendar(&calendar);
            load_index(cli.terms, &config);
            let at = parse_instant(&date);
            let input = BirthInput {
                year: at.year(),
                month: at.month(),
                day: at.day(),
                hour: at.hour(),
                minute: at.minute(),
                gender: parse_gender(&gender),
                calendar,
            };
            let chart_config = ChartConfig {
                include_luck: !no_luck,
                include_period_interactions: interactions,
                annual_years: annual_from.zip(annual_to).map(|(a, b)| a..=b),
                harmony_priority: priority
                    .as_deref()
                    .map_or(config.harmony_priority, parse_priority),
                luck_pillar_count: require_luck_count(
                    luck_count.unwrap_or(config.luck_pillar_count),
                ),
                ..ChartConfig::default()
            };
            match chart_with(&input, &SolarOnly, &chart_config) {
                Ok(analysis) => print_json(&analysis),
                Err(e) => fail(e),
            }
        }

        Commands::Pillars { date } => {
            load_index(cli.terms, &config);
            match pillars(parse_instant(&date)) {
                Ok(p) => {
                    println!("{p}");
                    let hangul: Vec<String> = p.iter().map(|(_, pillar)| pillar.hangul()).collect();
                    println!("{}", hangul.join(" "));
                }
                Err(e) => fail(e),
            }
        }

        Commands::Luck {
            date,
            gender,
            count,
            age,
        } => {
            load_index(cli.terms, &config);
            let count = require_luck_count(count.unwrap_or(config.luck_pillar_count));
            let sequence = luck_with(parse_instant(&date), parse_gender(&gender), count)
                .unwrap_or_else(|e| fail(e));
            match age {
                Some(age) => match sequence.active_at(age) {
                    Some(entry) => print_json(entry),
                    None => println!(
                        "No luck pillar active at age {age} (sequence starts at {})",
                        sequence.start_age
                    ),
                },
                None => print_json(&sequence),
            }
        }

        Commands::Analyze { chart, priority } => {
            let chart_config = ChartConfig {
                harmony_priority: priority
                    .as_deref()
                    .map_or(config.harmony_priority, parse_priority),
                ..config.chart_config()
            };
            match analyze_with(&chart, &chart_config) {
                Ok(a) => print_json(&a),
                Err(e) => fail(e),
            }
        }

        Commands::Annual { from, to, day_stem } => {
            let stem: Stem = day_stem.parse().unwrap_or_else(|e| fail(e));
            match annual(from..=to, stem) {
                Ok(years) => print_json(&years),
                Err(e) => fail(e),
            }
        }

        Commands::Terms { date } => {
            load_index(cli.terms, &config);
            match surrounding_terms(parse_instant(&date)) {
                Ok(t) => print_json(&t),
                Err(e) => fail(e),
            }
        }

        Commands::TenGod { day, target } => match ten_god_for_chars(day, target) {
            Resolution::Resolved(god) => println!("{} ({})", god.korean(), god.name()),
            Resolution::Unresolved(c) => fail(format!("unresolved character {c}")),
        },

        Commands::HiddenStems { branch } => {
            let b: Branch = branch.parse().unwrap_or_else(|e| fail(e));
            for h in resolve(b) {
                println!("{} {} {}", h.stem, h.stem.hangul(), h.element.korean());
            }
        }
    }
}
