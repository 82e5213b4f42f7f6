use castpath_core::{MovieRatio, RatioSummary, Separation, SeparationReport, UnreachableReason};
use std::path::Path;

use crate::colors::ColorScheme;
use crate::utils::{format_number, format_percentage};

pub fn format_dataset_summary(path: &Path, movies: usize, actors: usize, colors: &ColorScheme) -> String {
    format!(
        "{} Loaded {} movies and {} actors from {}",
        colors.stats("📊"),
        colors.number(&format_number(movies)),
        colors.number(&format_number(actors)),
        path.display()
    )
}

pub fn display_bechdel_results(
    ratios: &[MovieRatio],
    summary: &RatioSummary,
    threshold: f64,
    failing_only: bool,
    colors: &ColorScheme,
) {
    println!(
        "🎬 Checking female share of cast (must exceed {}%)\n",
        colors.number(&format!("{:.1}", threshold))
    );

    for ratio in ratios.iter().filter(|ratio| !failing_only || !ratio.passes) {
        println!("{}", format_ratio_line(ratio, colors));
    }

    println!("\n---\n");
    println!(
        "{} {} pass, {} fail, {} undefined",
        colors.stats("📊"),
        colors.number(&format_number(summary.passing)),
        colors.number(&format_number(summary.failing)),
        colors.number(&format_number(summary.undefined))
    );
}

pub fn format_ratio_line(ratio: &MovieRatio, colors: &ColorScheme) -> String {
    let verdict = if ratio.passes {
        colors.success("passes")
    } else {
        colors.error("fails")
    };

    format!(
        "{}: {} ({}/{} female) {}",
        colors.movie_name(&ratio.movie),
        colors.number(&format_percentage(ratio.percentage)),
        ratio.female_count,
        ratio.total,
        verdict
    )
}

pub fn display_filmography(actor: &str, movies: &[&str], colors: &ColorScheme) {
    if movies.is_empty() {
        println!(
            "{} {}",
            colors.error("❌ No movies found for"),
            colors.actor_name(&format!("\"{}\"", actor))
        );
        return;
    }

    println!(
        "🎬 Movies with {} ({}):\n",
        colors.actor_name(&format!("\"{}\"", actor)),
        colors.number(&movies.len().to_string())
    );
    for (position, movie) in movies.iter().enumerate() {
        println!(
            "{:3} {}",
            colors.step_number(&format!("{}.", position + 1)),
            colors.movie_name(movie)
        );
    }
}

pub fn display_cast(movie: &str, actors: &[&str], colors: &ColorScheme) {
    if actors.is_empty() {
        println!(
            "{} {}",
            colors.error("❌ No cast found for"),
            colors.movie_name(&format!("\"{}\"", movie))
        );
        return;
    }

    println!(
        "🎭 Cast of {} ({}):\n",
        colors.movie_name(&format!("\"{}\"", movie)),
        colors.number(&actors.len().to_string())
    );
    for (position, actor) in actors.iter().enumerate() {
        println!(
            "{:3} {}",
            colors.step_number(&format!("{}.", position + 1)),
            colors.actor_name(actor)
        );
    }
}

pub fn display_separation(
    from: &str,
    to: &str,
    report: &SeparationReport,
    verbose: bool,
    colors: &ColorScheme,
) {
    if verbose {
        println!(
            "🔍 Searching for a path from {} to {}",
            colors.actor_name(&format!("\"{}\"", from)),
            colors.actor_name(&format!("\"{}\"", to))
        );
        println!("\n---\n");
    }

    match &report.separation {
        Separation::SameActor => {
            println!(
                "{} {} is the same actor: degree of separation {}",
                colors.success("✅"),
                colors.actor_name(&format!("\"{}\"", from)),
                colors.number("0")
            );
        }
        Separation::Connected { degree, path } => {
            println!(
                "{} Degree of separation: {}\n",
                colors.success("✅"),
                colors.number(&degree.to_string())
            );
            println!("{}", format_path_flow(path, colors));
        }
        Separation::Unreachable { reason } => {
            println!(
                "{} {} and {} ({})",
                colors.error("❌ No path found between"),
                colors.actor_name(&format!("\"{}\"", from)),
                colors.actor_name(&format!("\"{}\"", to)),
                describe_unreachable(reason)
            );
        }
    }

    if verbose {
        println!("\n---\n");
        println!(
            "{} Explored {} movies and actors in {} sec",
            colors.stats("📊"),
            colors.number(&format_number(report.vertices_visited)),
            colors.number(&format!("{:.3}", report.search_duration))
        );
    }
}

/// Actors and movies alternate along a path, starting with an actor.
pub fn format_path_flow(path: &[String], colors: &ColorScheme) -> String {
    path.iter()
        .enumerate()
        .map(|(position, name)| {
            let quoted = format!("\"{}\"", name);
            if position % 2 == 0 {
                colors.actor_name(&quoted).to_string()
            } else {
                colors.movie_name(&quoted).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn describe_unreachable(reason: &UnreachableReason) -> String {
    match reason {
        UnreachableReason::UnknownActor { name } => format!("no actor named \"{}\"", name),
        UnreachableReason::Disconnected => "they share no chain of movies".to_string(),
        UnreachableReason::SearchLimit { visited } => {
            format!("gave up after {} movies and actors", format_number(*visited))
        }
    }
}

pub fn display_export(path: &Path, vertices: usize, edges: usize, colors: &ColorScheme) {
    println!(
        "{} Wrote {} vertices and {} edges to {}",
        colors.success("✅"),
        colors.number(&format_number(vertices)),
        colors.number(&format_number(edges)),
        path.display()
    );
}
