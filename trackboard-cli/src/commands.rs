//! Subcommand implementations. Each returns the rendered output so the
//! binary only has to print it.

use crate::cli::{Cli, Commands};
use crate::config::{CliConfig, OutputFormat};
use crate::script::{GestureEvent, GestureScript};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use trackboard_dnd::{
    select_overlay, Board, DragSession, DragState, EntryModel, Identifier, MoveOutcome,
    MoveRecord, Overlay, RecordingListener, RoleDetection,
};

/// Result of replaying a gesture script.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub board: EntryModel,
    pub moves: Vec<MoveRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepReport>,
}

/// What a single event did, for `replay --steps`.
#[derive(Debug, Serialize)]
pub struct StepReport {
    #[serde(with = "serde_yaml_ng::with::singleton_map")]
    pub event: GestureEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MoveOutcome>,
    pub overlay: Option<Overlay>,
}

/// Summary printed by `validate`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub containers: usize,
    pub items: usize,
    /// Whether every id carries its role tag, as substring detection needs
    pub role_tagged: bool,
}

/// Dispatch the parsed command line.
pub fn run(cli: &Cli, config: &CliConfig) -> Result<String> {
    match &cli.command {
        Commands::Replay {
            board,
            script,
            format,
            roles,
            steps,
        } => {
            let model = load_board(board)?;
            let script: GestureScript = load_document(script)?;
            let report = replay(model, &script, config.detection_or(*roles), *steps)?;
            render(&report, config.format_or(*format))
        }
        Commands::Validate {
            board,
            roles,
            format,
        } => {
            let report = validate(load_board(board)?, config.detection_or(*roles))?;
            render(&report, config.format_or(*format))
        }
        Commands::Overlay {
            board,
            active,
            roles,
            format,
        } => {
            let active = parse_identifier(active)?;
            let overlay = overlay(load_board(board)?, active, config.detection_or(*roles))?;
            render(&overlay, config.format_or(*format))
        }
    }
}

/// Drive a [`DragSession`] through every event and collect the committed moves.
pub fn replay(
    model: EntryModel,
    script: &GestureScript,
    detection: RoleDetection,
    with_steps: bool,
) -> Result<ReplayReport> {
    let board = Board::from_entries(model).context("invalid board")?;
    let listener = Arc::new(RecordingListener::new());
    let mut session = DragSession::new(board).with_detection(detection);
    session.subscribe(listener.clone());

    let mut steps = Vec::new();
    for (index, event) in script.events.iter().enumerate() {
        let outcome = match event {
            GestureEvent::Start(active) => {
                if !session.start(active.clone()) {
                    tracing::debug!("event {}: start of {} ignored", index, active);
                }
                None
            }
            GestureEvent::Over(target) => Some(session.over(target.clone())),
            GestureEvent::End(target) => {
                session.end(target.clone());
                None
            }
            GestureEvent::Cancel => {
                session.cancel();
                None
            }
        };

        if with_steps {
            steps.push(StepReport {
                event: event.clone(),
                outcome,
                overlay: session.overlay(),
            });
        }
    }

    if session.is_dragging() {
        tracing::warn!("script ended mid-drag; uncommitted moves are kept");
    }

    let moves = listener.take();
    tracing::info!("replayed {} events, {} moves", script.len(), moves.len());
    Ok(ReplayReport {
        board: session.into_board().to_entries(),
        moves,
        steps,
    })
}

/// Build the board and report its shape. Under substring detection a
/// board whose ids lack role tags is rejected.
pub fn validate(model: EntryModel, detection: RoleDetection) -> Result<ValidationReport> {
    let board = Board::from_entries(model).context("invalid board")?;
    let tags = board.check_role_tags();
    let role_tagged = tags.is_ok();

    if detection == RoleDetection::Substring {
        tags.context("board cannot be used with substring role detection")?;
    }

    Ok(ValidationReport {
        containers: board.len(),
        items: board.item_count(),
        role_tagged,
    })
}

/// Overlay shown while `active` is being dragged.
pub fn overlay(
    model: EntryModel,
    active: Identifier,
    detection: RoleDetection,
) -> Result<Option<Overlay>> {
    let board = Board::from_entries(model).context("invalid board")?;
    Ok(select_overlay(
        &board,
        &DragState::dragging(active),
        detection,
    ))
}

/// Read an id from the command line the way board documents read it:
/// `7` is numeric, `item-7` is text.
pub fn parse_identifier(raw: &str) -> Result<Identifier> {
    if raw.is_empty() {
        bail!("id must not be empty");
    }
    Ok(match raw.parse::<i64>() {
        Ok(number) => Identifier::Number(number),
        Err(_) => Identifier::Text(raw.to_string()),
    })
}

/// Load a board document, picking the format from the extension.
pub fn load_board(path: &Path) -> Result<EntryModel> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board {}", path.display()))?;
    EntryModel::from_str_with_extension(&text, extension_of(path))
        .with_context(|| format!("failed to parse board {}", path.display()))
}

/// Load any YAML or JSON document, picking the format from the extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    match extension_of(path).to_ascii_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display())),
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display())),
        other => bail!(
            "unsupported format '{}' for {}, expected yaml or json",
            other,
            path.display()
        ),
    }
}

/// Serialize command output.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(value)?),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(value)?;
            text.push('\n');
            Ok(text)
        }
    }
}

fn extension_of(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}
