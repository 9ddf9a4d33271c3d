use std::collections::HashSet;

use dense_graph_enumeration::{
    FixedWordGraph, Graph, Orientation, PackedBitsetGraph, RowArrayGraph, candidate_edges,
    expected_count, generate, generate_undirected, new_graph,
};

#[test]
fn rank_two_counts() {
    let seed = new_graph(2).unwrap();
    assert_eq!(generate(seed.clone()).len(), 16);
    assert_eq!(generate_undirected(seed).len(), 8);
}

#[test]
fn counts_match_the_number_of_edge_subsets() {
    for rank in 0..=3 {
        let directed = generate(FixedWordGraph::new(rank).unwrap());
        assert_eq!(Some(directed.len()), expected_count(rank, Orientation::Directed));
        assert_eq!(directed.len(), 1 << (rank * rank));

        let undirected = generate_undirected(RowArrayGraph::new(rank).unwrap());
        assert_eq!(Some(undirected.len()), expected_count(rank, Orientation::Undirected));
        assert_eq!(undirected.len(), 1 << (rank * (rank + 1) / 2));
    }
}

#[test]
fn first_graph_is_the_empty_seed() {
    let graphs = generate(PackedBitsetGraph::new(2).unwrap());
    assert_eq!(graphs[0], PackedBitsetGraph::new(2).unwrap());
    assert_eq!(graphs[0].edge_count(), 0);
    assert_eq!(graphs.last().unwrap().edge_count(), 4);
}

#[test]
fn every_subset_appears_once() {
    let graphs = generate(FixedWordGraph::new(3).unwrap());
    let distinct: HashSet<u64> = graphs.iter().map(|g| g.bits()).collect();
    assert_eq!(distinct.len(), 512);

    let graphs = generate_undirected(FixedWordGraph::new(3).unwrap());
    let distinct: HashSet<u64> = graphs.iter().map(|g| g.bits()).collect();
    assert_eq!(distinct.len(), 64);
}

#[test]
fn all_representations_enumerate_in_the_same_order() {
    let a = generate_undirected(FixedWordGraph::new(3).unwrap());
    let b = generate_undirected(RowArrayGraph::new(3).unwrap());
    let c = generate_undirected(PackedBitsetGraph::new(3).unwrap());
    for ((a, b), c) in a.iter().zip(&b).zip(&c) {
        assert_eq!(a.edges(), b.edges());
        assert_eq!(b.edges(), c.edges());
    }
}

#[test]
fn undirected_order_is_by_candidate_bits() {
    let graphs = generate_undirected(new_graph(2).unwrap());
    let rendered: Vec<String> = graphs.iter().map(|g| g.to_string()).collect();
    assert_eq!(
        rendered,
        [
            "[]",
            "[(0 0)]",
            "[(0 1) (1 0)]",
            "[(0 0) (0 1) (1 0)]",
            "[(1 1)]",
            "[(0 0) (1 1)]",
            "[(0 1) (1 0) (1 1)]",
            "[(0 0) (0 1) (1 0) (1 1)]",
        ]
    );
    assert_eq!(candidate_edges(2, Orientation::Undirected), [(0, 0), (0, 1), (1, 1)]);
}

#[test]
fn results_share_no_storage() {
    let seed = RowArrayGraph::new(2).unwrap();
    let mut graphs = generate(seed.clone());
    graphs[1].clear(0, 0);
    assert_eq!(graphs[0], seed);
    assert!(graphs[3].has(0, 0));
}
