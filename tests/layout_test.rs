use lexigraph::graph::{GraphNode, GraphSnapshot, PropertyMap};
use lexigraph::layout::{golden_angle, RadialLayoutConfig, StaticRadialLayout};
use lexigraph::render::RenderAdapter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn node(id: &str, node_type: &str) -> GraphNode {
    GraphNode::new(id, node_type, PropertyMap::new())
}

fn word(i: usize, frequency: u64) -> GraphNode {
    let mut props = PropertyMap::new();
    props.insert("word_id".to_string(), json!(i));
    props.insert("frequency".to_string(), json!(frequency));
    GraphNode::new(format!("word-{}", i), "word", props)
}

fn root_with_words(count: usize) -> Vec<GraphNode> {
    let mut nodes = vec![node("root-1", "root")];
    nodes.extend((1..=count).map(|i| word(i, i as u64)));
    nodes
}

#[test]
fn test_anchor_centered_for_any_satellite_count() {
    let layout = StaticRadialLayout::new();
    for count in [0, 1, 2, 7, 50] {
        let mut nodes = root_with_words(count);
        let placed = layout.layout(&mut nodes, 640.0, 480.0);
        assert_eq!(placed, count + 1);
        assert_eq!(nodes[0].position(), Some((320.0, 240.0)));
    }
}

#[test]
fn test_anchor_found_anywhere_in_list() {
    let mut nodes = vec![word(1, 1), node("form-1", "form"), node("root-9", "root")];
    StaticRadialLayout::new().layout(&mut nodes, 1000.0, 1000.0);
    assert_eq!(nodes[2].position(), Some((500.0, 500.0)));
    assert!(nodes[0].position().is_some());
    assert!(nodes[1].position().is_none());
}

#[test]
fn test_satellite_radii_within_bounds() {
    // Without pixel offsets the distance from the anchor is the radius itself
    let layout = StaticRadialLayout::with_config(RadialLayoutConfig {
        pixel_jitter: 0.0,
        ..Default::default()
    });
    let (width, height) = (900.0, 600.0);
    let base = 0.35 * 600.0;

    for seed in 0..20 {
        let mut nodes = root_with_words(30);
        layout.layout_with_rng(&mut nodes, width, height, &mut StdRng::seed_from_u64(seed));
        for n in &nodes[1..] {
            let (x, y) = n.position().unwrap();
            let r = ((x - 450.0).powi(2) + (y - 300.0).powi(2)).sqrt();
            assert!(r >= 0.8 * base - 1e-9 && r <= 1.2 * base + 1e-9, "radius {} out of bounds", r);
        }
    }
}

#[test]
fn test_pixel_offsets_bounded() {
    let layout = StaticRadialLayout::new();
    let base = 0.35 * 800.0;
    let slack = 10.0 * 2f64.sqrt();

    let mut nodes = root_with_words(100);
    layout.layout(&mut nodes, 800.0, 800.0);
    for n in &nodes[1..] {
        let (x, y) = n.position().unwrap();
        let r = ((x - 400.0).powi(2) + (y - 400.0).powi(2)).sqrt();
        assert!(r >= 0.8 * base - slack && r <= 1.2 * base + slack);
    }
}

#[test]
fn test_satellites_follow_golden_angle() {
    let layout = StaticRadialLayout::with_config(RadialLayoutConfig {
        pixel_jitter: 0.0,
        ..Default::default()
    });
    let mut nodes = root_with_words(12);
    layout.layout(&mut nodes, 800.0, 600.0);

    for (i, n) in nodes[1..].iter().enumerate() {
        let (x, y) = n.position().unwrap();
        let actual = (y - 300.0).atan2(x - 400.0);
        let expected = i as f64 * golden_angle();
        let diff = (actual - expected).rem_euclid(std::f64::consts::TAU);
        assert!(diff < 1e-9 || (std::f64::consts::TAU - diff) < 1e-9);
    }
}

#[test]
fn test_unseeded_layouts_vary() {
    let layout = StaticRadialLayout::new();
    let mut a = root_with_words(20);
    let mut b = root_with_words(20);
    layout.layout(&mut a, 800.0, 600.0);
    layout.layout(&mut b, 800.0, 600.0);
    assert_eq!(a[0].position(), b[0].position());
    assert!(a[1..].iter().zip(&b[1..]).any(|(p, q)| p.position() != q.position()));
}

#[test]
fn test_render_after_layout() {
    let mut nodes = root_with_words(3);
    nodes.push(node("form-1", "form"));
    nodes.push(node("name-1", "name"));
    let mut snapshot = GraphSnapshot { nodes, links: Vec::new() };
    StaticRadialLayout::new().layout(&mut snapshot.nodes, 800.0, 600.0);

    let visuals = RenderAdapter::new(&snapshot.nodes).encode_snapshot(&snapshot);
    assert_eq!(visuals.len(), 6);
    assert_eq!((visuals[0].color, visuals[0].radius), ("green", 12.0));
    assert_eq!(visuals[0].x, Some(400.0));

    // frequency 1 -> low end, frequency 3 (the observed maximum) -> high end
    assert_eq!(visuals[1].radius, 3.0);
    assert_eq!(visuals[3].radius, 8.0);
    assert!(visuals[2].radius > 3.0 && visuals[2].radius < 8.0);

    assert_eq!((visuals[4].color, visuals[4].radius), ("blue", 5.0));
    assert_eq!((visuals[5].color, visuals[5].radius), ("gold", 5.0));
    assert!(visuals[4].x.is_none());
}
