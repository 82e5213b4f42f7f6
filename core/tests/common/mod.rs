#![allow(dead_code)]

use castpath_core::{CastIndex, CastRecord};

pub fn records(rows: &[(&str, &str, &str)]) -> Vec<CastRecord> {
    rows.iter()
        .map(|&(movie, actor, gender)| CastRecord::new(movie, actor, gender))
        .collect()
}

pub fn index_of(rows: &[(&str, &str, &str)]) -> CastIndex {
    CastIndex::from_records(records(rows)).unwrap()
}

/// M1 = {A1, A2}, M2 = {A2}.
pub fn small_index() -> CastIndex {
    index_of(&[
        ("M1", "A1", "Female"),
        ("M1", "A2", "Male"),
        ("M2", "A2", "Female"),
    ])
}

/// Megan Fox reaches Tyler Perry through four intermediate actors. Jennifer
/// Lawrence and Nick Arapoglou sit in components of their own.
pub fn hollywood_index() -> CastIndex {
    index_of(&[
        ("Transformers", "Megan Fox", "Female"),
        ("Transformers", "Shia LaBeouf", "Male"),
        ("Eagle Eye", "Shia LaBeouf", "Male"),
        ("Eagle Eye", "Michelle Monaghan", "Female"),
        ("Eagle Eye", "Rosario Dawson", "Female"),
        ("Gone Baby Gone", "Michelle Monaghan", "Female"),
        ("Gone Baby Gone", "Casey Affleck", "Male"),
        ("Gone Girl", "Tyler Perry", "Male"),
        ("Gone Girl", "Rosamund Pike", "Female"),
        ("Gone Girl", "Neil Patrick Harris", "Male"),
        ("Jack Reacher", "Rosamund Pike", "Female"),
        ("Jack Reacher", "Tom Cruise", "Male"),
        ("Mission: Impossible III", "Tom Cruise", "Male"),
        ("Mission: Impossible III", "Michelle Monaghan", "Female"),
        ("Winter's Bone", "Jennifer Lawrence", "Female"),
        ("Winter's Bone", "John Hawkes", "Male"),
        ("Dark Tide", "Nick Arapoglou", "Unknown"),
    ])
}
