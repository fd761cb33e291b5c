use anyhow::{bail, Context};
use log::{error, info, LevelFilter};
use std::env;
use std::process;

use commander_core::{effective_score, resolve, tier_table, CommanderRank, Locale, Plan};

const USAGE: &str =
    "usage: rank-cli <score> [--boosted] [--plan <name>] [--locale <code>] [--json]";

#[derive(Debug, PartialEq)]
struct Options {
    raw_score: f64,
    boosted: bool,
    plan: Option<Plan>,
    locale: Option<Locale>,
    json: bool,
}

fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn resolve_log_level() -> LevelFilter {
    env::var("RANK_LOG_LEVEL")
        .ok()
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(LevelFilter::Info)
}

fn parse_log_file(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn resolve_log_file() -> Option<String> {
    parse_log_file(env::var("RANK_LOG_FILE").ok().as_deref())
}

fn resolve_locale() -> Locale {
    env::var("RANK_LOCALE")
        .map(|code| Locale::from_code(&code))
        .unwrap_or_default()
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let mut raw_score: Option<f64> = None;
    let mut options = Options {
        raw_score: 0.0,
        boosted: false,
        plan: None,
        locale: None,
        json: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--boosted" => options.boosted = true,
            "--json" => options.json = true,
            "--plan" => {
                let name = iter.next().context("--plan needs a plan name")?;
                options.plan = Some(Plan::from_name(name));
            }
            "--locale" => {
                let code = iter.next().context("--locale needs a language code")?;
                options.locale = Some(Locale::from_code(code));
            }
            other if other.starts_with("--") => bail!("unknown flag {}", other),
            value => {
                if raw_score.is_some() {
                    bail!("unexpected argument {}", value);
                }
                let parsed = value
                    .parse::<f64>()
                    .with_context(|| format!("score '{}' is not a number", value))?;
                raw_score = Some(parsed);
            }
        }
    }

    options.raw_score = raw_score.context("missing score")?;
    Ok(options)
}

fn print_rank(rank: &CommanderRank, locale: Locale) {
    println!(
        "Level {} - {} {} {}",
        rank.level,
        rank.tier.token,
        rank.title(locale),
        rank.rank.stars
    );
    println!(
        "Score {} (rank reached at {}, next at {})",
        rank.score, rank.current_threshold, rank.next_threshold
    );
    println!("Progress {}%", rank.progress_percent);

    match rank.next_title(locale) {
        Some(next) => println!("Next: {} in {} days", next, rank.days_to_next()),
        None => println!("Max rank reached"),
    }
}

/// JSON document for the presentation layer: the descriptor plus titles
/// rendered in the requested locale.
fn rank_json(rank: &CommanderRank, locale: Locale) -> serde_json::Value {
    serde_json::json!({
        "locale": locale.code(),
        "title": rank.title(locale),
        "next_title": rank.next_title(locale),
        "rank": rank,
    })
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let options = parse_args(args)?;
    let locale = options.locale.unwrap_or_else(resolve_locale);
    let boosted = options.boosted || options.plan.is_some_and(|plan| plan.is_boosted());

    let score = effective_score(options.raw_score, boosted);
    info!(
        "Resolving raw score {} (boosted: {}) as {}",
        options.raw_score, boosted, score
    );

    let rank = resolve(score);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&rank_json(&rank, locale))?);
    } else {
        print_rank(&rank, locale);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let log_file = resolve_log_file();
    commander_core::initialize_logger(resolve_log_level(), log_file.as_deref()).unwrap_or_else(
        |e| {
            eprintln!("Failed to initialize logger: {}. Exiting.", e);
            process::exit(1);
        },
    );

    log::debug!(
        "Rank lattice ready: {} levels, max score {}",
        tier_table().len(),
        tier_table().max_score()
    );

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        eprintln!("{}", USAGE);
        process::exit(1);
    }
}
