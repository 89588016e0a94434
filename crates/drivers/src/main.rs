mod config;
mod logging;
mod views;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use config::AppConfig;
use serde::Serialize;
use stylepocket_adapters::{
    present_thumbnail, BackgroundAnalysisPipeline, InMemoryWardrobe, PlaceholderThumbnailRenderer,
    RandomStyleAnalyzer, SystemClock,
};
use stylepocket_application::{
    AddDetectedItemCommand, ApplicationError, ApplicationService, BeginUploadCommand,
    CancelUploadCommand, DashboardQuery, EditCandidateTagCommand, GroupShoppingListQuery,
    ListOutfitsQuery, PollUploadCommand, RenderThumbnailCommand, SaveUploadCommand,
    ToggleItemStatusCommand, UploadStep,
};
use stylepocket_domain::{GroupMode, ItemCategory, ItemId, OutfitId, StyleTag};
use views::UploadOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const ANALYSIS_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Parser)]
#[command(
    name = "stylepocket",
    version,
    about = "Track outfits, plan purchases and see your style mix"
)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the simulated style analysis
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show saved outfits; uploads are listed ahead of the sample looks
    Gallery,
    /// Show the shopping list grouped by category or style
    Shopping {
        #[arg(long = "by", default_value = "category", value_parser = GroupMode::from_str)]
        mode: GroupMode,
        /// Flip an item between to-buy and bought before listing
        #[arg(long = "toggle")]
        toggles: Vec<String>,
    },
    /// Show the style statistics dashboard
    Stats {
        #[arg(long)]
        top: Option<usize>,
    },
    /// Simulate uploading and analysing an outfit photo
    Upload {
        #[arg(long = "add-tag", value_parser = StyleTag::from_str)]
        add_tags: Vec<StyleTag>,
        #[arg(long = "remove-tag", value_parser = StyleTag::from_str)]
        remove_tags: Vec<StyleTag>,
        /// Send a detected item to the shopping list, as INDEX:CATEGORY
        #[arg(long = "shop", value_parser = parse_shop_target)]
        shop: Vec<ShopTarget>,
        /// Discard the analysed outfit instead of saving it
        #[arg(long)]
        cancel: bool,
    },
    /// Write a placeholder thumbnail PNG for an outfit
    Thumbnail {
        outfit_id: String,
        path: PathBuf,
        #[arg(long)]
        size: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShopTarget {
    detected_index: usize,
    category: ItemCategory,
}

fn parse_shop_target(value: &str) -> Result<ShopTarget, String> {
    let (index, category) = value
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:CATEGORY, got {value}"))?;
    let detected_index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid detected item index: {index}"))?;
    let category = category.parse::<ItemCategory>().map_err(|error| error.to_string())?;
    Ok(ShopTarget {
        detected_index,
        category,
    })
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Application(#[from] ApplicationError),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(error.exit_code().clamp(0, 255) as u8);
        }
    };

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load config: {error:#}");
            return ExitCode::from(1);
        }
    };
    logging::init_logging(&config.log_level);

    match run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(
    config: &AppConfig,
    seed: Option<u64>,
) -> Result<ApplicationService, ApplicationError> {
    let analyzer = match seed {
        Some(seed) => RandomStyleAnalyzer::seeded(seed),
        None => RandomStyleAnalyzer::from_entropy(),
    };
    Ok(ApplicationService::new(
        Box::new(InMemoryWardrobe::with_sample_data()?),
        Box::new(BackgroundAnalysisPipeline::new(
            config.analysis_delay(),
            Box::new(analyzer),
        )),
        Box::new(PlaceholderThumbnailRenderer),
        Box::new(SystemClock),
    ))
}

fn run(cli: &Cli, config: &AppConfig) -> Result<String, CommandError> {
    let mut service = build_application_service(config, cli.seed)?;
    let command = cli.command.clone().unwrap_or(Command::Gallery);

    match command {
        Command::Gallery => {
            let outfits = service.list_outfits(ListOutfitsQuery)?;
            render(cli.json, &outfits, || views::render_gallery(&outfits))
        }
        Command::Shopping { mode, toggles } => {
            for raw_id in toggles {
                let item_id = ItemId::new(raw_id)
                    .map_err(|error| CommandError::Usage(format!("invalid item id: {error}")))?;
                service.toggle_item_status(ToggleItemStatusCommand { item_id })?;
            }
            let groups = service.group_shopping_list(GroupShoppingListQuery { mode })?;
            render(cli.json, &views::group_views(&groups), || {
                views::render_shopping(&groups, mode)
            })
        }
        Command::Stats { top } => {
            let dashboard = service.dashboard(DashboardQuery {
                top_n: top.unwrap_or(config.dashboard_top_n),
                monthly_budget: config.monthly_budget,
            })?;
            render(cli.json, &dashboard, || views::render_dashboard(&dashboard))
        }
        Command::Upload {
            add_tags,
            remove_tags,
            shop,
            cancel,
        } => {
            let outcome = run_upload(&mut service, config, &add_tags, &remove_tags, &shop, cancel)?;
            render(cli.json, &outcome, || views::render_upload(&outcome))
        }
        Command::Thumbnail {
            outfit_id,
            path,
            size,
        } => {
            let outfit_id = OutfitId::new(outfit_id)
                .map_err(|error| CommandError::Usage(format!("invalid outfit id: {error}")))?;
            let artifact = service.render_thumbnail(RenderThumbnailCommand {
                outfit_id,
                target: path,
                max_edge: size.unwrap_or(config.thumbnail_size),
            })?;
            Ok(present_thumbnail(&artifact))
        }
    }
}

fn run_upload(
    service: &mut ApplicationService,
    config: &AppConfig,
    add_tags: &[StyleTag],
    remove_tags: &[StyleTag],
    shop: &[ShopTarget],
    cancel: bool,
) -> Result<UploadOutcome, CommandError> {
    service.begin_upload(BeginUploadCommand)?;
    eprintln!("AI is analysing your style...");

    let deadline = Instant::now() + config.analysis_delay() + ANALYSIS_GRACE;
    let mut candidate = loop {
        if let UploadStep::Result { candidate } = service.poll_upload(PollUploadCommand)? {
            break candidate.clone();
        }
        if Instant::now() >= deadline {
            return Err(ApplicationError::Analysis(
                "analysis did not finish in time".to_string(),
            )
            .into());
        }
        thread::sleep(POLL_INTERVAL);
    };

    for tag in add_tags {
        candidate = service
            .add_candidate_tag(EditCandidateTagCommand { tag: *tag })?
            .clone();
    }
    for tag in remove_tags {
        candidate = service
            .remove_candidate_tag(EditCandidateTagCommand { tag: *tag })?
            .clone();
    }

    let mut added_items = Vec::new();
    for target in shop {
        added_items.push(service.add_detected_item_to_list(AddDetectedItemCommand {
            detected_index: target.detected_index,
            category: target.category,
        })?);
    }

    let saved = !cancel;
    if saved {
        candidate = service.save_upload(SaveUploadCommand)?;
    } else {
        service.cancel_upload(CancelUploadCommand)?;
    }

    Ok(UploadOutcome {
        candidate,
        added_items,
        saved,
        outfit_count: service.list_outfits(ListOutfitsQuery)?.len(),
    })
}

fn render<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<String, CommandError> {
    if json {
        return Ok(serde_json::to_string_pretty(value)?);
    }
    Ok(text())
}
