//! Subcommand execution

use crate::config::EngineConfig;
use anyhow::{bail, Context};
use clap::ArgMatches;
use discovery_model::{IdeaId, IdeaRecord, IdeaStatus, ScoreDefaults, Snapshot};
use discovery_scoring::{
    effort_label, impact_label, rank_ideas, PriorityBand, QuadrantClassifier, QuickStats,
    RankOptions, RiceScorer, ScoringInput, SortKey, SortOrder, ValidationAggregator,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ScoreOutput {
    input: ScoringInput,
    score: u64,
    band: PriorityBand,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StaleScore<'a> {
    idea_id: IdeaId,
    title: &'a str,
    stored: Option<i64>,
    recomputed: u64,
}

/// Run the selected subcommand, writing results to `out`
///
/// # Errors
/// Snapshot load failures, invalid score inputs, or corrupt hypothesis
/// statuses, each with context naming what was being done
pub fn execute<W: Write>(matches: &ArgMatches, config: &EngineConfig, out: &mut W) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("score", args)) => score(args, &config.defaults, out),
        Some(("matrix", args)) => matrix(&load_snapshot(args)?, args.get_flag("json"), out),
        Some(("progress", args)) => progress(&load_snapshot(args)?, args.get_flag("json"), out),
        Some(("rank", args)) => {
            let mut options = RankOptions::new();
            if let Some(key) = args.get_one::<SortKey>("by") {
                options = options.by(*key);
            }
            if args.get_flag("asc") {
                options = options.order(SortOrder::Ascending);
            }
            if let Some(status) = args.get_one::<IdeaStatus>("status") {
                options = options.with_status(*status);
            }
            rank(&load_snapshot(args)?, &options, out)
        }
        Some(("stats", args)) => stats(&load_snapshot(args)?, args.get_flag("json"), out),
        Some(("reconcile", args)) => reconcile(&load_snapshot(args)?, args.get_flag("json"), out),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given, see --help"),
    }
}

fn load_snapshot(args: &ArgMatches) -> anyhow::Result<Snapshot> {
    let Some(path) = args.get_one::<PathBuf>("snapshot") else {
        bail!("--snapshot is required");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        ideas = snapshot.ideas.len(),
        hypotheses = snapshot.hypotheses.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn score<W: Write>(args: &ArgMatches, defaults: &ScoreDefaults, out: &mut W) -> anyhow::Result<()> {
    let field = |name: &str, default: i64| args.get_one::<i64>(name).copied().unwrap_or(default);
    let input = ScoringInput::new(
        field("reach", defaults.reach),
        field("impact", defaults.impact),
        field("confidence", defaults.confidence),
        field("effort", defaults.effort),
    );

    let score = RiceScorer::new().score(&input).context("cannot score these inputs")?;
    let band = PriorityBand::for_score(score);

    if args.get_flag("json") {
        return write_json(out, &ScoreOutput { input, score, band });
    }

    writeln!(out, "RICE score: {score} ({band})")?;
    writeln!(out, "  reach:      {}", input.reach)?;
    writeln!(out, "  impact:     {} ({})", input.impact, impact_label(input.impact))?;
    writeln!(out, "  confidence: {}%", input.confidence)?;
    writeln!(out, "  effort:     {} {}", input.effort, effort_label(input.effort))?;
    Ok(())
}

fn matrix<W: Write>(snapshot: &Snapshot, json: bool, out: &mut W) -> anyhow::Result<()> {
    let matrix = QuadrantClassifier::new().classify(&snapshot.ideas);
    if json {
        return write_json(out, &matrix);
    }

    for bucket in matrix.buckets() {
        let quadrant = bucket.quadrant();
        writeln!(out, "{} ({}): {}", quadrant.title(), bucket.count(), quadrant.description())?;
        for idea in bucket.items() {
            writeln!(
                out,
                "  [{}] {} (impact {}, effort {})",
                idea.id,
                idea.title,
                idea.impact_score.unwrap_or_default(),
                idea.effort_score.unwrap_or_default()
            )?;
        }
    }
    if matrix.excluded > 0 {
        writeln!(out, "Not scored: {}", matrix.excluded)?;
    }
    Ok(())
}

fn progress<W: Write>(snapshot: &Snapshot, json: bool, out: &mut W) -> anyhow::Result<()> {
    let report = ValidationAggregator::new()
        .aggregate_rows(&snapshot.ideas, &snapshot.hypotheses)
        .context("cannot aggregate validation progress")?;
    if json {
        return write_json(out, &report);
    }

    let overall = &report.overall;
    writeln!(
        out,
        "Overall: {}% validated, {}% successful ({} hypotheses)",
        overall.rates.validation_rate, overall.rates.success_rate, overall.counts.total
    )?;
    for idea in &report.per_idea {
        writeln!(
            out,
            "  [{}] {}: {}% validated, {}% successful, {}/{} resolved ({})",
            idea.idea_id,
            idea.title,
            idea.rates.validation_rate,
            idea.rates.success_rate,
            idea.counts.resolved(),
            idea.counts.total,
            idea.band.label()
        )?;
    }
    Ok(())
}

fn rank<W: Write>(snapshot: &Snapshot, options: &RankOptions, out: &mut W) -> anyhow::Result<()> {
    let ranked = rank_ideas(&snapshot.ideas, options);
    if ranked.is_empty() {
        writeln!(out, "No ideas match")?;
        return Ok(());
    }

    let optional = |value: Option<i64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    for (position, idea) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. [{}] {} | rice {} | impact {} | effort {} | {}",
            position + 1,
            idea.id,
            idea.title,
            optional(idea.rice_score),
            optional(idea.impact_score),
            optional(idea.effort_score),
            idea.status
        )?;
    }
    Ok(())
}

fn stats<W: Write>(snapshot: &Snapshot, json: bool, out: &mut W) -> anyhow::Result<()> {
    let hypotheses = snapshot
        .typed_hypotheses()
        .context("cannot read hypothesis statuses")?;
    let stats = QuickStats::compute(&snapshot.ideas, &hypotheses);
    if json {
        return write_json(out, &stats);
    }

    writeln!(out, "Total ideas:        {}", stats.total_ideas)?;
    writeln!(out, "Validated ideas:    {}", stats.validated_ideas)?;
    writeln!(out, "In discovery:       {}", stats.in_discovery)?;
    writeln!(out, "Validation rate:    {}%", stats.idea_validation_rate)?;
    match stats.avg_days_to_resolve {
        Some(days) => writeln!(out, "Avg days to resolve: {days:.1}")?,
        None => writeln!(out, "Avg days to resolve: -")?,
    }
    Ok(())
}

fn reconcile<W: Write>(snapshot: &Snapshot, json: bool, out: &mut W) -> anyhow::Result<()> {
    let scorer = RiceScorer::new();
    let mut stale = Vec::new();
    for idea in &snapshot.ideas {
        if let Some(recomputed) = scorer
            .reconcile(idea)
            .with_context(|| format!("cannot rescore idea {}", idea.id))?
        {
            stale.push(stale_entry(idea, recomputed));
        }
    }

    if json {
        return write_json(out, &stale);
    }
    if stale.is_empty() {
        writeln!(out, "All stored scores are current")?;
        return Ok(());
    }
    for entry in &stale {
        let stored = entry.stored.map_or_else(|| "none".to_string(), |s| s.to_string());
        writeln!(
            out,
            "[{}] {}: stored {}, recomputed {}",
            entry.idea_id, entry.title, stored, entry.recomputed
        )?;
    }
    Ok(())
}

fn stale_entry(idea: &IdeaRecord, recomputed: u64) -> StaleScore<'_> {
    StaleScore {
        idea_id: idea.id,
        title: &idea.title,
        stored: idea.rice_score,
        recomputed,
    }
}
