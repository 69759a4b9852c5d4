use super::*;
use nalgebra::vector;

#[test]
fn circle_and_rectangle_bounds() {
    let c = Shape::from(Circle::new(10.0, 10.0, "#fff", 5.0));
    let b = c.bounds();
    assert_eq!(b.min, vector![5.0, 5.0]);
    assert_eq!(b.max, vector![15.0, 15.0]);

    let r = Shape::from(Rectangle::new(0.0, 0.0, "#000", 20.0, 10.0));
    assert_eq!(r.bounds().area(), 200.0);
}

#[test]
fn envelope_union_is_componentwise() {
    let a = Envelope::new(vector![0.0, 5.0], vector![10.0, 10.0]);
    let b = Envelope::new(vector![-3.0, 7.0], vector![4.0, 30.0]);
    let u = a.union(&b);
    assert_eq!(u.min, vector![-3.0, 5.0]);
    assert_eq!(u.max, vector![10.0, 30.0]);
    assert_eq!(u, b.union(&a));
    assert_eq!(u.area(), 13.0 * 25.0);
}

#[test]
fn validate_rejects_non_positive_sizes() {
    let err = Shape::from(Circle::new(0.0, 0.0, "c", 0.0))
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::InvalidShapeField {
            field: "radius",
            index: None,
            ..
        }
    ));

    let err = Shape::from(Rectangle::new(0.0, 0.0, "c", 3.0, -1.0))
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::InvalidShapeField {
            field: "height",
            ..
        }
    ));

    let err = Shape::from(Rectangle::new(f64::NAN, 0.0, "c", 3.0, 1.0))
        .validate()
        .unwrap_err();
    assert!(matches!(err, ShapeError::InvalidShapeField { field: "x", .. }));

    assert!(Shape::from(Rectangle::new(-4.0, -4.0, "c", 1.0, 1.0))
        .validate()
        .is_ok());
}

#[test]
fn error_index_is_attached_and_displayed() {
    let err = ShapeError::unrecognized("Triangle").at(7);
    assert_eq!(err.index(), Some(7));
    assert_eq!(err.to_string(), "shape #7: unrecognized variant `Triangle`");
    let bare = ShapeError::invalid("radius", "must be > 0, got 0");
    assert_eq!(bare.to_string(), "invalid field `radius`: must be > 0, got 0");
}

#[test]
fn kind_parsing_is_case_insensitive() {
    assert_eq!("circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
    assert_eq!(" Rectangle ".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
    assert_eq!(
        "triangle".parse::<ShapeKind>().unwrap_err().input,
        "triangle"
    );
    // Wire tags stay exact.
    assert_eq!(ShapeKind::from_tag("Circle"), Some(ShapeKind::Circle));
    assert_eq!(ShapeKind::from_tag("circle"), None);
    assert_eq!(ShapeKind::Rectangle.to_string(), "rectangle");
}
