//! Terminal rendering of engine events.

use colored::{ColoredString, Colorize};
use rj_content::JourneySummary;
use rj_core::ResourceLink;
use rj_engine::{
    EngineConfig, GameEvent, OutcomeKind, ResourceDisplay, SessionStatus, StatTrack, Stats,
    ToolInstance,
};

/// Print every event in order.
pub fn events(events: &[GameEvent], config: &EngineConfig) {
    for event in events {
        render(event, config);
    }
}

fn render(event: &GameEvent, config: &EngineConfig) {
    match event {
        GameEvent::StatsChanged { resist, urge, time } => {
            stats(&Stats::new(*resist, *urge, *time));
        }
        GameEvent::SceneRendered {
            scene_id,
            scene,
            path,
            available_tools,
        } => {
            println!();
            println!("  {}", scene.title.bold());
            if config.show_dev_tools {
                println!("  {}", format!("[{scene_id}] {}", path.join(" → ")).dimmed());
            }
            println!();
            println!("  {}", scene.narration);
            println!();

            if scene.choices.is_empty() {
                println!("  {}", "There are no choices here. Type 'r' to restart.".dimmed());
            }
            for (i, choice) in scene.choices.iter().enumerate() {
                println!("  {}. {}", (i + 1).to_string().cyan(), choice.label);
            }

            if !available_tools.is_empty() {
                println!();
                println!(
                    "  {} tool{} available. Type 't' to open your toolkit.",
                    available_tools.len(),
                    if available_tools.len() == 1 { "" } else { "s" }
                );
            }
            println!();
        }
        GameEvent::ToolUnlocked { tool } => {
            println!("  {} {}", "New tool unlocked:".green().bold(), tool.title.bold());
            if !tool.description.is_empty() {
                println!("  {}", tool.description);
            }
            println!(
                "  Resistance cost: {} | Urge reduction: {}",
                tool.resist_cost, tool.use_benefit
            );
            println!("  Type 'ok' to dismiss.");
            println!();
        }
        GameEvent::ResourceFeedbackRequested { link, display } => resource(link, *display),
        GameEvent::ToolUsed { tool, .. } => {
            println!("  {} {}", "Tool used:".bold(), tool.title);
            if !tool.description.is_empty() {
                println!("  {}", tool.description);
            }
            println!(
                "  {} | {}",
                format!("Resistance: -{}", tool.resist_cost).red(),
                format!("Urge to Use: -{}", tool.use_benefit).green()
            );
            println!();
        }
        GameEvent::OutcomeReached { kind, message } => {
            let text = match kind {
                OutcomeKind::Win => message.green().bold(),
                OutcomeKind::Loss => message.red().bold(),
                OutcomeKind::Error => message.yellow().bold(),
            };
            println!();
            println!("  {text}");
        }
    }
}

/// Print the stats bar, highlighting scores in the danger zone.
pub fn stats(stats: &Stats) {
    let resist = score(&stats.resist, stats.resist_critical());
    let urge = score(&stats.urge, stats.urge_critical());
    println!(
        "  Resist {resist} | Use {urge} | Time {}",
        stats.time_display()
    );
}

fn score(track: &StatTrack, danger: bool) -> ColoredString {
    let text = track.to_string();
    if danger { text.red().bold() } else { text.normal() }
}

/// Print what the player can do once a journey has ended.
pub fn outcome_hint(status: SessionStatus) {
    let again = if status == SessionStatus::Won {
        "play again"
    } else {
        "try again"
    };
    println!("  Type 'r' to {again} or 'q' to choose another journey.");
    println!();
}

/// Print the journey selection list.
pub fn journeys(journeys: &[JourneySummary]) {
    println!();
    if journeys.is_empty() {
        println!("  No journeys found.\n");
        return;
    }
    println!("  {}", "Choose a journey".bold());
    for (i, journey) in journeys.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().cyan(),
            journey.title,
            format!("({})", journey.id).dimmed()
        );
        println!("     {}", journey.description);
    }
    println!("  Type a number or a journey id, or 'q' to quit.");
    println!();
}

fn resource(link: &ResourceLink, display: ResourceDisplay) {
    match display {
        ResourceDisplay::Popup => {
            let rule = "─".repeat(40);
            println!("  {rule}");
            println!("  {}", "Support resource".bold());
            println!("  {}", link.description);
            println!("  {} {}", link.text.cyan(), link.url.underline());
            println!("  {rule}");
        }
        ResourceDisplay::Inline => {
            println!("  {}", link.description);
            println!("  {}: {}", link.text, link.url);
        }
    }
}

/// Print the tools usable in the current scene.
pub fn toolkit(tools: &[ToolInstance]) {
    if tools.is_empty() {
        println!("  No toolkit items available in this scene.\n");
        return;
    }
    println!("  {}", "Your toolkit".bold());
    for (i, tool) in tools.iter().enumerate() {
        println!(
            "  {}. {}  ({}, {})",
            (i + 1).to_string().cyan(),
            tool.title,
            format!("Resist: -{}", tool.resist_cost).red(),
            format!("Use: -{}", tool.use_benefit).green()
        );
        if !tool.description.is_empty() {
            println!("     {}", tool.description);
        }
    }
    println!("  Type 'use N' to use a tool.\n");
}

/// Print the command summary.
pub fn help() {
    println!("  Commands:");
    println!("    <number>          select a choice");
    println!("    c, continue       confirm the selected choice");
    println!("    t, toolkit        list the tools usable here");
    println!("    use <number>      use a tool from the toolkit");
    println!("    ok                dismiss a tool unlock notice");
    println!("    s, stats          show your stats");
    println!("    r, restart        start the journey again");
    println!("    q, quit, exit     leave the journey and choose another");
    println!();
}

/// Print the command summary for journey selection.
pub fn selection_help() {
    println!("  Commands:");
    println!("    <number>          start a journey from the list");
    println!("    <journey id>      start a journey by id");
    println!("    l, list           show the journeys again");
    println!("    q, quit, exit     quit");
    println!();
}
