use wordchain::graph::{ChainGraph, Entity};
use wordchain::longest_chain::{
    DEFAULT_BRANCH_WIDTH, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITERATIONS, longest_chain_from,
    longest_chain_with_limits,
};
use wordchain::{Chain, SearchLimits};

fn graph(names: &[&str]) -> ChainGraph {
    let entities = names
        .iter()
        .enumerate()
        .map(|(i, name)| Entity::new(i as u32 + 1, *name, 1).expect("valid entity"))
        .collect();
    ChainGraph::new(entities).expect("unique ids")
}

fn start<'g>(g: &'g ChainGraph, name: &str) -> &'g Entity {
    g.find_by_name(name).expect("start in vocabulary")
}

fn assert_valid(chain: &Chain<'_>) {
    assert!(!chain.is_empty());
    assert!(chain.is_linked(), "broken link in {:?}", chain.names());
    assert!(chain.is_simple(), "repeated entity in {:?}", chain.names());
}

#[test]
fn default_limits_are_the_documented_constants() {
    let limits = SearchLimits::default();
    assert_eq!(limits.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(limits.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(limits.branch_width, DEFAULT_BRANCH_WIDTH);
    assert_eq!((DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITERATIONS, DEFAULT_BRANCH_WIDTH), (20, 1000, 3));
}

#[test]
fn follows_a_linear_chain_to_its_end() {
    let g = graph(&["가나", "나다", "다마", "마바"]);
    let chain = longest_chain_from(&g, start(&g, "가나"));
    assert_eq!(chain.names(), vec!["가나", "나다", "다마", "마바"]);
    assert_valid(&chain);
}

#[test]
fn a_start_without_successors_yields_the_singleton_chain() {
    let g = graph(&["가나", "다마"]);
    let chain = longest_chain_from(&g, start(&g, "가나"));
    assert_eq!(chain.names(), vec!["가나"]);
    assert_eq!(chain.first().id(), chain.last().id());
}

#[test]
fn a_self_loop_is_not_revisited() {
    let g = graph(&["가가"]);
    let chain = longest_chain_from(&g, start(&g, "가가"));
    assert_eq!(chain.names(), vec!["가가"]);
}

#[test]
fn max_depth_caps_the_chain_length() {
    let g = graph(&["가나", "나다", "다마", "마바"]);
    let limits = SearchLimits::default().with_max_depth(2);
    let chain = longest_chain_with_limits(&g, start(&g, "가나"), limits);
    assert_eq!(chain.names(), vec!["가나", "나다"]);
}

#[test]
fn successors_with_more_continuations_are_explored_first() {
    // `나다` ends the game, `나마` keeps going.
    let g = graph(&["가나", "나다", "나마", "마바", "바사"]);
    let limits = SearchLimits {
        branch_width: 1,
        ..SearchLimits::default()
    };
    let chain = longest_chain_with_limits(&g, start(&g, "가나"), limits);
    assert_eq!(chain.names(), vec!["가나", "나마", "마바", "바사"]);
}

#[test]
fn equal_out_degrees_keep_load_order() {
    let g = graph(&["가나", "나다", "나사"]);
    let limits = SearchLimits {
        branch_width: 1,
        ..SearchLimits::default()
    };
    let chain = longest_chain_with_limits(&g, start(&g, "가나"), limits);
    assert_eq!(chain.names(), vec!["가나", "나다"]);
}

#[test]
fn only_the_top_ranked_successors_are_expanded() {
    // Four dead-end successors load before the one that continues.
    let g = graph(&["가나", "나다", "나사", "나아", "나자", "나마", "마바"]);
    let chain = longest_chain_from(&g, start(&g, "가나"));
    assert_eq!(chain.names(), vec!["가나", "나마", "마바"]);
}

#[test]
fn the_iteration_cap_returns_the_best_chain_so_far() {
    let g = graph(&["가나", "나다", "다마", "마바"]);
    let s = start(&g, "가나");

    let limits = SearchLimits {
        max_iterations: 1,
        ..SearchLimits::default()
    };
    assert_eq!(longest_chain_with_limits(&g, s, limits).len(), 1);

    let limits = SearchLimits {
        max_iterations: 3,
        ..SearchLimits::default()
    };
    assert_eq!(longest_chain_with_limits(&g, s, limits).len(), 3);

    let limits = SearchLimits {
        max_iterations: 0,
        ..SearchLimits::default()
    };
    assert_eq!(longest_chain_with_limits(&g, s, limits).names(), vec!["가나"]);
}

#[test]
fn follows_the_initial_sound_law() {
    let g = graph(&["파이리", "이브이", "이상해씨", "피카츄"]);
    let chain = longest_chain_from(&g, start(&g, "파이리"));
    assert_eq!(chain.names(), vec!["파이리", "이브이", "이상해씨"]);
    assert_valid(&chain);
}

#[test]
fn terminates_on_a_fully_connected_vocabulary() {
    let names: Vec<String> = ('가'..='힣')
        .step_by(97)
        .take(60)
        .map(|mid| format!("가{mid}가"))
        .collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let g = graph(&refs);
    assert_eq!(g.out_degree(&g.entities()[0]), g.len());

    for e in g.entities().iter().take(10) {
        let chain = longest_chain_from(&g, e);
        assert!(chain.len() >= 2);
        assert!(chain.len() <= DEFAULT_MAX_DEPTH);
        assert_eq!(chain.first().id(), e.id());
        assert_valid(&chain);
    }
}
