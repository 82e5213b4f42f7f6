use castpath::colors::ColorScheme;
use castpath::display::{
    display_bechdel_results, display_cast, display_export, display_filmography, display_separation,
    format_dataset_summary,
};
use castpath::json_output::{create_separation_output, print_json_output, JsonBechdel, JsonNeighbors};
use castpath::logging::init_tracing;
use castpath::*;
use castpath_core::{
    cast_of, degree_of_separation, movies_of, summarize, CastIndex, GenderRatioEvaluator,
    SearchConfig,
};
use clap::Parser;
use std::{error::Error, path::Path};
use tracing::{info, warn};

struct OutputOptions {
    json: bool,
    verbose: bool,
    colors: ColorScheme,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = OutputOptions {
        json: args.json,
        verbose: args.verbose,
        colors: ColorScheme::new(!args.no_color),
    };

    if let Err(error) = run(args, &options) {
        eprintln!("{} {}", options.colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, options: &OutputOptions) -> Result<(), Box<dyn Error>> {
    let app = CastPathApp::new(args.data)?;
    let index = app.load_index()?;

    if options.verbose && !options.json {
        println!(
            "{}\n",
            format_dataset_summary(
                &app.dataset_path,
                index.movie_count(),
                index.actor_count(),
                &options.colors
            )
        );
    }

    match args.command {
        Command::Bechdel {
            threshold,
            failing_only,
        } => execute_bechdel(&index, threshold, failing_only, options),
        Command::Movies { actor } => execute_movies(&index, &actor, options),
        Command::Cast { movie } => execute_cast(&index, &movie, options),
        Command::Separation {
            actor1,
            actor2,
            max_visited,
        } => execute_separation(&index, &actor1, &actor2, max_visited, options),
        Command::Export { output } => execute_export(&index, &output, options)?,
    }

    Ok(())
}

fn execute_bechdel(index: &CastIndex, threshold: f64, failing_only: bool, options: &OutputOptions) {
    let evaluator = GenderRatioEvaluator::new(threshold);
    let ratios = evaluator.evaluate(index);
    let summary = summarize(&ratios);

    if options.json {
        let movies = ratios
            .into_iter()
            .filter(|ratio| !failing_only || !ratio.passes)
            .collect();
        print_json_output(&JsonBechdel {
            threshold,
            summary,
            movies,
        });
    } else {
        display_bechdel_results(&ratios, &summary, threshold, failing_only, &options.colors);
    }
}

fn execute_movies(index: &CastIndex, actor: &str, options: &OutputOptions) {
    let actor = resolve_name(index.find_actor(actor), actor);
    let movies = movies_of(index, actor);

    if options.json {
        print_json_output(&neighbors_output(index.is_actor(actor), actor, &movies));
    } else {
        display_filmography(actor, &movies, &options.colors);
    }
}

fn execute_cast(index: &CastIndex, movie: &str, options: &OutputOptions) {
    let movie = resolve_name(index.find_movie(movie), movie);
    let actors = cast_of(index, movie);

    if options.json {
        print_json_output(&neighbors_output(index.is_movie(movie), movie, &actors));
    } else {
        display_cast(movie, &actors, &options.colors);
    }
}

fn execute_separation(
    index: &CastIndex,
    actor1: &str,
    actor2: &str,
    max_visited: Option<usize>,
    options: &OutputOptions,
) {
    let from = resolve_name(index.find_actor(actor1), actor1);
    let to = resolve_name(index.find_actor(actor2), actor2);

    let config = SearchConfig::new(max_visited);
    let report = degree_of_separation(index, from, to, &config);
    info!(
        from,
        to,
        vertices_visited = report.vertices_visited,
        "separation search done"
    );

    if options.json {
        let output = create_separation_output(from.to_string(), to.to_string(), max_visited, report);
        print_json_output(&output);
    } else {
        display_separation(from, to, &report, options.verbose, &options.colors);
    }
}

fn execute_export(index: &CastIndex, output: &Path, options: &OutputOptions) -> Result<(), Box<dyn Error>> {
    let graph = index.graph();
    save_tgf(graph, output)?;
    info!(path = %output.display(), "graph exported");

    if !options.json {
        display_export(output, graph.vertex_count(), graph.edge_count(), &options.colors);
    }
    Ok(())
}

/// Canonical dataset spelling of a user-typed name, or the input unchanged
/// when nothing matches.
fn resolve_name<'a, E: std::fmt::Display>(lookup: Result<&'a str, E>, input: &'a str) -> &'a str {
    match lookup {
        Ok(name) => name,
        Err(error) => {
            warn!("{}", error);
            input
        }
    }
}

fn neighbors_output(found: bool, query: &str, results: &[&str]) -> JsonNeighbors {
    JsonNeighbors {
        query: query.to_string(),
        found,
        results: results.iter().map(|name| name.to_string()).collect(),
    }
}
