use castpath_core::BipartiteGraph;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Writes `graph` in Trivial Graph Format: `<n> <name>` per vertex (1-based,
/// first-seen order), a `#` line, then `<movie n> <actor n>` per edge.
pub fn write_tgf<W: Write>(graph: &BipartiteGraph, writer: &mut W) -> io::Result<()> {
    for (id, name, _) in graph.vertices() {
        writeln!(writer, "{} {}", id + 1, name)?;
    }

    writeln!(writer, "#")?;

    for (movie, actor) in graph.edges() {
        writeln!(writer, "{} {}", movie + 1, actor + 1)?;
    }

    Ok(())
}

pub fn save_tgf(graph: &BipartiteGraph, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tgf(graph, &mut writer)?;
    writer.flush()
}
