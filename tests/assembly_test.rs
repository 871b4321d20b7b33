use lexigraph::graph::{AssemblyPlan, GraphAssembler, GraphLink, GraphSnapshot, RecordPage, RegistryOptions};
use serde_json::json;

fn page(value: serde_json::Value) -> RecordPage {
    serde_json::from_value(value).unwrap()
}

fn root_word_plan() -> AssemblyPlan {
    AssemblyPlan::new()
        .node("r", "root_id", Some("Root"))
        .node("w", "word_id", Some("Word"))
        .link("rel", "RELATED")
}

#[test]
fn test_root_word_end_to_end() {
    let page = page(json!({"rows": [{
        "r": {"identity": "n1", "labels": ["Root"], "properties": {"root_id": 5}},
        "w": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 10}},
        "rel": {"type": "HAS_WORD", "start": "n1", "end": "n2"}
    }]}));

    let snapshot = GraphAssembler::new().build(&page, &root_word_plan());

    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({
            "nodes": [
                {"id": "root-5", "type": "root", "root_id": 5},
                {"id": "word-10", "type": "word", "word_id": 10}
            ],
            "links": [
                {"source": "root-5", "target": "word-10", "type": "HAS_WORD"}
            ]
        })
    );
}

#[test]
fn test_unregistered_start_produces_no_links() {
    // Root was filtered out upstream; only the word and the relationship arrive
    let page = page(json!({"rows": [{
        "r": null,
        "w": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 10}},
        "rel": {"type": "HAS_WORD", "start": "n1", "end": "n2"}
    }]}));

    let (snapshot, stats) = GraphAssembler::new().build_with_stats(&page, &root_word_plan());
    assert_eq!(snapshot.node_count(), 1);
    assert!(snapshot.links.is_empty());
    assert_eq!(stats.links_dangling, 1);
}

#[test]
fn test_two_word_integers_normalized_in_ids_and_properties() {
    let page = page(json!([{
        "r": {
            "identity": {"low": 1, "high": 0},
            "labels": ["Root"],
            "properties": {"root_id": {"low": 7, "high": 0}, "arabic": "ك ت ب"}
        },
        "w": {
            "identity": {"low": 2, "high": 0},
            "labels": ["Word"],
            "properties": {"word_id": {"low": 0, "high": 1}, "frequency": {"low": 42, "high": 0}}
        },
        "rel": {"type": "HAS_WORD", "start": {"low": 1, "high": 0}, "end": {"low": 2, "high": 0}}
    }]));

    let snapshot = GraphAssembler::new().build(&page, &root_word_plan());
    let word = snapshot.node("word-4294967296").unwrap();
    assert_eq!(word.get_property("frequency"), Some(&json!(42)));
    assert_eq!(snapshot.node("root-7").unwrap().get_property("arabic"), Some(&json!("ك ت ب")));
    assert_eq!(snapshot.links, vec![GraphLink::new("root-7", "word-4294967296", "HAS_WORD")]);
}

#[test]
fn test_zero_id_is_skipped_with_its_links() {
    let page = page(json!([{
        "r": {"identity": "n1", "labels": ["Root"], "properties": {"root_id": 0}},
        "w": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 10}},
        "rel": {"type": "HAS_WORD", "start": "n1", "end": "n2"}
    }]));

    let (snapshot, stats) = GraphAssembler::new().build_with_stats(&page, &root_word_plan());
    assert_eq!(snapshot.node_count(), 1);
    assert_eq!(stats.nodes_missing_id, 1);
    assert!(snapshot.links.is_empty());

    let lenient = GraphAssembler::with_options(RegistryOptions {
        accept_zero_id: true,
        ..Default::default()
    });
    let snapshot = lenient.build(&page, &root_word_plan());
    assert_eq!(snapshot.links, vec![GraphLink::new("root-0", "word-10", "HAS_WORD")]);
}

#[test]
fn test_repeated_root_across_rows() {
    // A root with two words comes back as two rows repeating the root
    let root = json!({"identity": "n1", "labels": ["Root"], "properties": {"root_id": 5}});
    let page = page(json!([
        {
            "r": root.clone(),
            "w": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 10}},
            "rel": {"type": "HAS_WORD", "start": "n1", "end": "n2"}
        },
        {
            "r": root.clone(),
            "w": {"identity": "n3", "labels": ["Word"], "properties": {"word_id": 11}},
            "rel": {"type": "HAS_WORD", "start": "n1", "end": "n3"}
        }
    ]));

    // Default policy keeps the repeat
    let snapshot = GraphAssembler::new().build(&page, &root_word_plan());
    assert_eq!(snapshot.nodes_of_type("root").count(), 2);
    assert_eq!(snapshot.link_count(), 2);

    // Strict identity deduplicates
    let strict = GraphAssembler::with_options(RegistryOptions {
        strict_identity: true,
        ..Default::default()
    });
    let (snapshot, stats) = strict.build_with_stats(&page, &root_word_plan());
    assert_eq!(snapshot.nodes_of_type("root").count(), 1);
    assert_eq!(stats.nodes_duplicate, 1);
    assert_eq!(snapshot.link_count(), 2);
    assert!(snapshot.links_resolve());
}

#[test]
fn test_corpus_items_and_default_link_type() {
    let page = page(json!([{
        "w": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 10}},
        "item": {"identity": "n9", "labels": ["CorpusItem"], "properties": {"item_id": "2:255"}},
        "rel": {"start": "n2", "end": "n9"}
    }]));
    let plan = AssemblyPlan::new()
        .node("w", "word_id", Some("Word"))
        .node("item", "item_id", None)
        .link("rel", "APPEARS_IN");

    let snapshot = GraphAssembler::new().build(&page, &plan);
    assert_eq!(snapshot.nodes[1].id, "name-2:255");
    assert_eq!(snapshot.nodes[1].node_type, "name");
    assert_eq!(snapshot.links[0].link_type, "APPEARS_IN");
}

#[test]
fn test_links_never_dangle() {
    let page = page(json!([
        {"r": {"identity": "a", "labels": ["Root"], "properties": {"root_id": 1}},
         "rel": [
            {"type": "HAS_WORD", "start": "a", "end": "b"},
            {"type": "HAS_WORD", "start": "a", "end": "ghost"},
            {"type": "HAS_WORD", "start": "ghost", "end": "b"},
            {"type": "HAS_WORD", "end": "b"}
         ]},
        {"w": {"identity": "b", "labels": ["Word"], "properties": {"word_id": 2}}}
    ]));

    let (snapshot, stats) = GraphAssembler::new().build_with_stats(&page, &root_word_plan());
    assert_eq!(snapshot.link_count(), 1);
    assert!(snapshot.links_resolve());
    assert_eq!(stats.links_dangling, 2);
    assert_eq!(stats.links_missing_endpoint, 1);
}

#[test]
fn test_snapshot_accepts_wrapped_link_endpoints() {
    // Rendering surfaces hand links back with node objects as endpoints
    let snapshot: GraphSnapshot = serde_json::from_value(json!({
        "nodes": [
            {"id": "root-5", "type": "root", "fx": 400.0, "fy": 300.0},
            {"id": "word-10", "type": "word"}
        ],
        "links": [
            {"source": {"id": "root-5", "type": "root"}, "target": "word-10", "type": "HAS_WORD"}
        ]
    }))
    .unwrap();

    assert!(snapshot.links_resolve());
    assert_eq!(snapshot.links[0], GraphLink::new("root-5", "word-10", "HAS_WORD"));
}

#[test]
fn test_whole_float_id_renders_as_integer() {
    let page = page(json!([{
        "r": {"identity": "n1", "labels": ["Root"], "properties": {"root_id": 5.0}},
        "w": {"identity": "n2", "labels": ["Word"], "properties": {"word_id": 2.5}},
        "rel": {"type": "HAS_WORD", "start": "n1", "end": "n2"}
    }]));
    let snapshot = GraphAssembler::new().build(&page, &root_word_plan());
    assert_eq!(snapshot.nodes[0].id, "root-5");
    assert_eq!(snapshot.nodes[1].id, "word-2.5");
    assert_eq!(snapshot.links[0].source, "root-5");
}
