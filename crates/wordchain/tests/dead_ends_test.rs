use wordchain::dead_ends::{find_dead_ends, is_dead_end};
use wordchain::graph::{ChainGraph, Entity};

fn graph(names: &[&str]) -> ChainGraph {
    let entities = names
        .iter()
        .enumerate()
        .map(|(i, name)| Entity::new(i as u32 + 1, *name, 1).expect("valid entity"))
        .collect();
    ChainGraph::new(entities).expect("unique ids")
}

fn dead_end_names(g: &ChainGraph) -> Vec<&str> {
    find_dead_ends(g).into_iter().map(Entity::name).collect()
}

#[test]
fn an_entity_is_a_dead_end_iff_nothing_else_can_follow_it() {
    // Nothing starts with `나`; `가나` follows `다가`.
    let g = graph(&["가나", "다가"]);
    assert_eq!(dead_end_names(&g), vec!["가나"]);

    let a = g.find_by_name("가나").unwrap();
    let b = g.find_by_name("다가").unwrap();
    assert!(is_dead_end(&g, a));
    assert!(!is_dead_end(&g, b));
}

#[test]
fn a_self_match_is_no_escape() {
    let g = graph(&["가가"]);
    assert_eq!(dead_end_names(&g), vec!["가가"]);

    let g = graph(&["가가", "가나"]);
    assert_eq!(dead_end_names(&g), vec!["가나"]);
}

#[test]
fn the_initial_sound_law_opens_an_escape() {
    let g = graph(&["파이리", "이브이", "피카츄"]);
    // `이브이` only matches itself.
    assert_eq!(dead_end_names(&g), vec!["이브이", "피카츄"]);
}

#[test]
fn dead_ends_agree_with_the_filtered_successor_set() {
    let g = graph(&["가나", "나다", "다가", "가가", "마바", "바바", "사리", "이사"]);
    for e in g.entities() {
        let escapes = g.successors(e).filter(|f| f.id() != e.id()).count();
        assert_eq!(is_dead_end(&g, e), escapes == 0, "{}", e.name());
    }
    assert_eq!(dead_end_names(&g), vec!["바바"]);
}

#[test]
fn dead_ends_keep_load_order() {
    let g = graph(&["다마", "가나", "나바", "사자"]);
    assert_eq!(dead_end_names(&g), vec!["다마", "나바", "사자"]);
}
