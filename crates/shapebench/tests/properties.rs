//! Property tests for the engine: layout round trips, filter/mutate laws, and
//! invariance of every operation under thread count and layout.

use proptest::prelude::*;
use shapebench::api;
use shapebench::ops::{filter, mutate, occupation};
use shapebench::repr::{decode_all, encode_all};
use shapebench::{
    Circle, ComposedShape, Encoding, ExecCfg, FlatShape, GenericShape, Rectangle, Shape, ShapeKind,
};

const COLORS: [&str; 4] = ["#ff0000", "#00ff00", "#0000ff", "#fff"];

fn arb_shape() -> impl Strategy<Value = Shape> {
    let color = prop::sample::select(COLORS.to_vec());
    prop_oneof![
        (-1e4..1e4f64, -1e4..1e4f64, color.clone(), 0.01..500f64)
            .prop_map(|(x, y, c, r)| Shape::from(Circle::new(x, y, c, r))),
        (-1e4..1e4f64, -1e4..1e4f64, color, 0.01..500f64, 0.01..500f64)
            .prop_map(|(x, y, c, w, h)| Shape::from(Rectangle::new(x, y, c, w, h))),
    ]
}

/// Integer-valued geometry keeps `x - r + 2r == x + r` exact.
fn arb_grid_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (-1000i32..1000, -1000i32..1000, 1i32..100).prop_map(|(x, y, r)| Shape::from(
            Circle::new(f64::from(x), f64::from(y), "g", f64::from(r))
        )),
        (-1000i32..1000, -1000i32..1000, 1i32..100, 1i32..100).prop_map(|(x, y, w, h)| {
            Shape::from(Rectangle::new(
                f64::from(x),
                f64::from(y),
                "g",
                f64::from(w),
                f64::from(h),
            ))
        }),
    ]
}

fn arb_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

const THREADS: [usize; 5] = [0, 1, 2, 5, 100];

fn check_parallel_invariance<E: Encoding>(shapes: &[Shape], kind: ShapeKind) {
    let encoded: Vec<E> = encode_all(shapes);
    let f0 = api::filter(&encoded, kind, ExecCfg::pipelined()).unwrap();
    let m0 = api::mutation(&encoded, ExecCfg::pipelined()).unwrap();
    let o0 = api::occupation(&encoded, ExecCfg::pipelined()).unwrap();
    for threads in THREADS {
        let cfg = ExecCfg::parallel(threads);
        assert_eq!(api::filter(&encoded, kind, cfg).unwrap().filtered, f0.filtered);
        assert_eq!(api::mutation(&encoded, cfg).unwrap().values, m0.values);
        let o = api::occupation(&encoded, cfg).unwrap();
        assert_eq!(o.occupation.to_bits(), o0.occupation.to_bits());
        assert_eq!(o.region, o0.region);
        assert_eq!(o.colors, o0.colors);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_layout_round_trips(s in arb_shape()) {
        prop_assert_eq!(FlatShape::encode(&s).decode().unwrap(), s.clone());
        prop_assert_eq!(ComposedShape::encode(&s).decode().unwrap(), s.clone());
        prop_assert_eq!(GenericShape::encode(&s).decode().unwrap(), s.clone());

        let wire = serde_json::to_string(&GenericShape::encode(&s)).unwrap();
        let back: GenericShape = serde_json::from_str(&wire).unwrap();
        prop_assert_eq!(back.decode().unwrap(), s);
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving(
        shapes in prop::collection::vec(arb_shape(), 0..60),
        kind in arb_kind(),
    ) {
        let once = filter(&shapes, kind);
        prop_assert_eq!(filter(&once, kind), once.clone());
        prop_assert!(once.iter().all(|s| s.kind() == kind));

        // Indices of selected shapes within the input are strictly increasing.
        let picked: Vec<usize> = shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind() == kind)
            .map(|(i, _)| i)
            .collect();
        prop_assert!(picked.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(picked.len(), once.len());
        for (j, &i) in picked.iter().enumerate() {
            prop_assert_eq!(&shapes[i], &once[j]);
        }
    }

    #[test]
    fn mutate_keeps_rectangles_and_length(shapes in prop::collection::vec(arb_shape(), 0..60)) {
        let out = mutate(&shapes);
        prop_assert_eq!(out.len(), shapes.len());
        prop_assert!(out.iter().all(|s| s.kind() == ShapeKind::Rectangle));
        for (before, after) in shapes.iter().zip(&out) {
            match before {
                Shape::Rectangle(_) => prop_assert_eq!(before, after),
                Shape::Circle(c) => prop_assert_eq!(after.color(), c.color.as_str()),
            }
        }
        prop_assert_eq!(mutate(&out), out);
    }

    #[test]
    fn mutate_then_occupation_matches_occupation(
        shapes in prop::collection::vec(arb_grid_shape(), 0..40),
    ) {
        let direct = occupation(&shapes);
        let via_rects = occupation(&mutate(&shapes));
        prop_assert_eq!(direct, via_rects);
    }

    #[test]
    fn thread_count_never_changes_results(
        shapes in prop::collection::vec(arb_shape(), 0..40),
        kind in arb_kind(),
    ) {
        check_parallel_invariance::<FlatShape>(&shapes, kind);
        check_parallel_invariance::<ComposedShape>(&shapes, kind);
        check_parallel_invariance::<GenericShape>(&shapes, kind);
    }

    #[test]
    fn layouts_give_decode_equal_results(
        shapes in prop::collection::vec(arb_shape(), 0..40),
        kind in arb_kind(),
        threads in prop::sample::select(THREADS.to_vec()),
    ) {
        let cfg = ExecCfg::parallel(threads);
        let flat: Vec<FlatShape> = encode_all(&shapes);
        let composed: Vec<ComposedShape> = encode_all(&shapes);
        let generic: Vec<GenericShape> = encode_all(&shapes);

        let f = decode_all(&api::flat_filter(&flat, kind, cfg).unwrap().filtered).unwrap();
        prop_assert_eq!(&f, &filter(&shapes, kind));
        prop_assert_eq!(&decode_all(&api::composed_filter(&composed, kind, cfg).unwrap().filtered).unwrap(), &f);
        prop_assert_eq!(&decode_all(&api::generic_filter(&generic, kind, cfg).unwrap().filtered).unwrap(), &f);

        let m = decode_all(&api::flat_mutation(&flat, cfg).unwrap().values).unwrap();
        prop_assert_eq!(&m, &mutate(&shapes));
        prop_assert_eq!(&decode_all(&api::composed_mutation(&composed, cfg).unwrap().values).unwrap(), &m);
        prop_assert_eq!(&decode_all(&api::generic_mutation(&generic, cfg).unwrap().values).unwrap(), &m);

        let o = api::flat_occupation(&flat, cfg).unwrap();
        prop_assert_eq!(o.occupation, occupation(&shapes).area());
        prop_assert_eq!(api::composed_occupation(&composed, cfg).unwrap().colors, o.colors.clone());
        prop_assert_eq!(api::generic_occupation(&generic, cfg).unwrap().occupation, o.occupation);
    }
}

#[test]
fn documented_examples() {
    let m = mutate(&[Circle::new(10.0, 10.0, "#fff", 5.0).into()]);
    assert_eq!(m, vec![Shape::from(Rectangle::new(5.0, 5.0, "#fff", 10.0, 10.0))]);

    assert_eq!(occupation(&[]).area(), 0.0);
    assert_eq!(
        occupation(&[Rectangle::new(0.0, 0.0, "a", 20.0, 10.0).into()]).area(),
        200.0
    );
    let two: Vec<FlatShape> = encode_all(&[
        Rectangle::new(0.0, 0.0, "a", 10.0, 10.0).into(),
        Rectangle::new(20.0, 20.0, "b", 10.0, 10.0).into(),
    ]);
    for threads in THREADS {
        let r = api::flat_occupation(&two, ExecCfg::parallel(threads)).unwrap();
        assert_eq!(r.occupation, 900.0);
    }
}
