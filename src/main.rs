//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pitch_stats::{
    cli::{Commands, PitchStats},
    commands::{
        import::handle_import, injury_risk::handle_injury_risk, rankings::handle_rankings,
        sports::handle_sports, standings::handle_standings, team_stats::handle_team_stats,
        CommandContext,
    },
    logging::init_logging,
    medical::WorkloadProfile,
    Result, SportTable,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = PitchStats::parse();
    init_logging(app.verbose)?;

    match app.command {
        Commands::Import {
            matches,
            players,
            clear,
        } => handle_import(app.db, matches, players, clear)?,

        Commands::TeamStats {
            selection,
            limit,
            json,
        } => {
            let ctx = CommandContext::new(app.db)?;
            handle_team_stats(&ctx, &selection.team, selection.sport, limit, json)?
        }

        Commands::Rankings {
            selection,
            top,
            keep_zero,
            json,
        } => {
            let ctx = CommandContext::new(app.db)?;
            handle_rankings(&ctx, &selection.team, selection.sport, top, keep_zero, json)?
        }

        Commands::Standings { sport, json } => {
            let ctx = CommandContext::new(app.db)?;
            handle_standings(&ctx, sport, json)?
        }

        Commands::Sports { json } => handle_sports(&SportTable::load()?, json)?,

        Commands::InjuryRisk {
            risk,
            training_load,
            sleep_hours,
            previous_injuries,
            json,
        } => {
            let profile = WorkloadProfile {
                training_load,
                sleep_hours,
                previous_injuries,
            };
            handle_injury_risk(&profile, risk, json)?
        }
    }

    Ok(())
}
