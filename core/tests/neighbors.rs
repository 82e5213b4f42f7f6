mod common;

use castpath_core::{cast_of, movies_of};
use common::{hollywood_index, small_index};

#[test]
fn test_cast_and_movies_small_dataset() {
    let index = small_index();

    assert_eq!(cast_of(&index, "M1"), vec!["A1", "A2"]);
    assert_eq!(cast_of(&index, "M2"), vec!["A2"]);
    assert_eq!(movies_of(&index, "A2"), vec!["M1", "M2"]);
    assert_eq!(movies_of(&index, "A1"), vec!["M1"]);
}

#[test]
fn test_unknown_names_give_empty_results() {
    let index = small_index();

    assert!(cast_of(&index, "M9").is_empty());
    assert!(movies_of(&index, "A9").is_empty());
}

#[test]
fn test_wrong_kind_gives_empty_results() {
    let index = small_index();

    assert!(cast_of(&index, "A1").is_empty());
    assert!(movies_of(&index, "M1").is_empty());
}

#[test]
fn test_results_follow_first_seen_order() {
    let index = common::index_of(&[
        ("Prequel", "Late Actor", "Male"),
        ("Sequel", "Early Actor", "Female"),
        ("Prequel", "Early Actor", "Female"),
    ]);

    // Early Actor's first row is for Sequel, but Prequel was seen earlier.
    assert_eq!(cast_of(&index, "Prequel"), vec!["Late Actor", "Early Actor"]);
    assert_eq!(movies_of(&index, "Early Actor"), vec!["Prequel", "Sequel"]);
}

#[test]
fn test_cast_members_list_the_movie() {
    let index = hollywood_index();

    for movie in index.movies() {
        for actor in cast_of(&index, movie) {
            assert!(
                movies_of(&index, actor).contains(&movie),
                "{actor} should list {movie}"
            );
        }
    }
}
