use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rj_content::JourneySummary;
use rj_core::ContentProvider;
use rj_engine::{
    EngineConfig, EngineError, GameEvent, GameSession, ResourceDisplay, SessionStatus,
};

use crate::render;

pub fn run(
    dir: &Path,
    journey: Option<&str>,
    inline_resources: bool,
    dev: bool,
    entry: Option<&str>,
) -> Result<(), String> {
    let provider = super::open_dir(dir)?;
    let root = provider.root().to_path_buf();

    let display = if inline_resources {
        ResourceDisplay::Inline
    } else {
        ResourceDisplay::Popup
    };
    let mut config = EngineConfig::default()
        .with_resource_display(display)
        .with_dev_tools(dev);
    if let Some(scene) = entry {
        config = config.with_entry_scene(scene);
    }

    let mut session = GameSession::new(provider, config);
    if let Some(e) = session.catalog_error() {
        println!("  {} {e}", "Toolkit unavailable:".yellow());
    }

    println!("  Type 'help' for commands, 'quit' to exit.");

    let mut journeys = Vec::new();
    match journey {
        Some(journey) => {
            begin(&mut session, journey);
            if session.status() == SessionStatus::Failed {
                let reason = session.failure().unwrap_or("unknown error");
                return Err(format!("could not start journey: {reason}"));
            }
        }
        None => journeys = list_journeys(&root),
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let command = input.to_ascii_lowercase();

        if session.status() == SessionStatus::SelectingJourney {
            match command.as_str() {
                "q" | "quit" | "exit" => break,
                "help" | "h" | "?" => render::selection_help(),
                "l" | "list" => journeys = list_journeys(&root),
                _ => {
                    let id = pick(&journeys, input);
                    begin(&mut session, &id);
                }
            }
            continue;
        }

        match command.as_str() {
            "q" | "quit" | "exit" => {
                session.exit();
                println!("  Back to journey selection.");
                journeys = list_journeys(&root);
            }
            command => {
                if let Err(e) = dispatch(&mut session, command) {
                    println!("{}\n", e.yellow());
                }
            }
        }
    }

    println!("  Goodbye.");
    Ok(())
}

/// Discover the journeys under `root` and print them as a numbered list.
fn list_journeys(root: &Path) -> Vec<JourneySummary> {
    let journeys = rj_content::discover_journeys(root);
    render::journeys(&journeys);
    journeys
}

/// Map a selection entry to a journey id: a list number or the id itself.
fn pick(journeys: &[JourneySummary], input: &str) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| journeys.get(i))
        .map_or_else(|| input.to_string(), |journey| journey.id.clone())
}

fn begin<P: ContentProvider>(session: &mut GameSession<P>, journey: &str) {
    println!("  {} {journey}", "Starting".bold());
    let events = session.start(journey);
    show(session, &events);
}

/// Render events, adding the replay hint once the journey is over.
fn show<P: ContentProvider>(session: &GameSession<P>, events: &[GameEvent]) {
    render::events(events, session.config());
    if events.iter().any(GameEvent::is_outcome) {
        render::outcome_hint(session.status());
    }
}

/// Run one REPL command against the session.
fn dispatch<P: ContentProvider>(
    session: &mut GameSession<P>,
    command: &str,
) -> Result<(), String> {
    tracing::debug!(command, "repl command");

    match command {
        "help" | "h" | "?" => render::help(),
        "c" | "continue" => {
            ensure_unresolved(session)?;
            let events = session.confirm_pending().map_err(describe)?;
            show(session, &events);
        }
        "t" | "toolkit" => {
            let state = session.state().ok_or_else(|| describe(EngineError::NotPlaying))?;
            render::toolkit(state.available_tools());
        }
        "s" | "stats" => {
            let state = session.state().ok_or_else(|| describe(EngineError::NotPlaying))?;
            render::stats(state.stats());
            println!();
        }
        "ok" => match session.acknowledge_unlock() {
            Some(tool) => println!("  {} added to your toolkit.\n", tool.title),
            None => println!("  Nothing to acknowledge.\n"),
        },
        "r" | "restart" => {
            let events = session.restart().map_err(describe)?;
            show(session, &events);
        }
        other => {
            if let Some(arg) = other.strip_prefix("use ") {
                ensure_unresolved(session)?;
                let tool_id = tool_at(session, arg.trim())?;
                let events = session.use_tool(&tool_id).map_err(describe)?;
                show(session, &events);
            } else if let Ok(n) = other.parse::<usize>() {
                ensure_unresolved(session)?;
                let invalid = || describe(EngineError::InvalidChoice(n));
                let index = n.checked_sub(1).ok_or_else(invalid)?;
                let events = session.select_choice(index).map_err(|e| match e {
                    EngineError::InvalidChoice(_) => invalid(),
                    other => describe(other),
                })?;
                show(session, &events);
                println!("  Type 'c' to continue.\n");
            } else {
                return Err(format!("unknown command '{other}', type 'help' for commands"));
            }
        }
    }

    Ok(())
}

/// Refuse play commands once the journey has been won, lost or failed.
fn ensure_unresolved<P: ContentProvider>(session: &GameSession<P>) -> Result<(), String> {
    if session.status().is_resolved() {
        return Err(
            "The journey has ended. Type 'r' to restart or 'q' to choose another journey.".into(),
        );
    }
    Ok(())
}

/// Resolve a 1-based toolkit position to a tool id.
fn tool_at<P: ContentProvider>(session: &GameSession<P>, arg: &str) -> Result<String, String> {
    let state = session.state().ok_or_else(|| describe(EngineError::NotPlaying))?;
    let tools = state.available_tools();
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| tools.get(i))
        .map(|tool| tool.id.clone())
        .ok_or_else(|| format!("no tool numbered '{arg}', type 't' to see your toolkit"))
}

fn describe(e: EngineError) -> String {
    match e {
        EngineError::InsufficientResistance { tool, .. } => {
            format!("You don't have enough resistance to use {tool}")
        }
        other => other.to_string(),
    }
}
