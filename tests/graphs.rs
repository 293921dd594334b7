//! Digraph, ancestry and social network scenarios.

mod common;

use common::init_logging;
use marga::graph::{Digraph, SocialGraph, UserId, earliest_ancestor};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Undirected digraph mirroring a social graph's friendships.
fn friendship_digraph(social: &SocialGraph) -> Digraph<UserId> {
    let mut graph = Digraph::new();
    for id in 1..=social.user_count() as u32 {
        graph.add_vertex(UserId(id));
    }
    for id in 1..=social.user_count() as u32 {
        for &friend in social.friends(UserId(id)).unwrap() {
            graph.add_edge(UserId(id), friend).unwrap();
        }
    }
    graph
}

#[test]
fn test_social_paths_are_shortest_friend_chains() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(10);
    let mut social = SocialGraph::new();
    social.populate(60, 3, &mut rng).unwrap();
    let graph = friendship_digraph(&social);

    let paths = social.all_social_paths(UserId(1)).unwrap();
    for (&target, path) in &paths {
        assert_eq!(path.first(), Some(&UserId(1)));
        assert_eq!(path.last(), Some(&target));
        for pair in path.windows(2) {
            assert!(social.are_friends(pair[0], pair[1]));
        }
        let shortest = graph.bfs(UserId(1), target).unwrap();
        assert_eq!(path.len(), shortest.len());
    }

    // Everyone reachable in the digraph is in the extended network
    let reachable = graph.bft(UserId(1)).unwrap();
    assert_eq!(reachable.len(), paths.len());
}

#[test]
fn test_populate_variants_agree_on_size() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(4);
    let mut shuffled = SocialGraph::new();
    shuffled.populate(100, 10, &mut rng).unwrap();
    let mut linear = SocialGraph::new();
    linear.populate_linear(100, 10, &mut rng).unwrap();

    assert_eq!(shuffled.friendship_count(), 500);
    assert_eq!(linear.friendship_count(), 500);

    let separation = shuffled.average_separation(UserId(1)).unwrap();
    assert!(separation > 1.0 && separation < 5.0);
    assert!(shuffled.network_coverage(UserId(1)).unwrap() > 0.9);
}

#[test]
fn test_traversals_cover_component() {
    let mut graph = Digraph::new();
    for v in 0..10u32 {
        graph.add_vertex(v);
    }
    for v in 0..9u32 {
        graph.add_undirected_edge(v, v + 1).unwrap();
    }

    let bft = graph.bft(5).unwrap();
    assert_eq!(bft.len(), 10);
    assert_eq!(&bft[..3], &[5, 4, 6]);

    let dft = graph.dft(5).unwrap();
    assert_eq!(dft, vec![5, 4, 3, 2, 1, 0, 6, 7, 8, 9]);
    assert_eq!(graph.dft_recursive(5).unwrap(), dft);

    assert_eq!(graph.bfs(0, 9).map(|p| p.len()), Some(10));
    assert_eq!(graph.dfs(9, 0).map(|p| p.len()), Some(10));
}

#[test]
fn test_earliest_ancestor_string_labels() {
    let pairs = [("ada", "bo"), ("bo", "cy"), ("al", "cy"), ("cy", "di")];
    assert_eq!(earliest_ancestor(&pairs, "di"), Some("ada"));
    assert_eq!(earliest_ancestor(&pairs, "al"), None);
}
