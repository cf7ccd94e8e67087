//! ensure serde is working as expected

use super::*;
use kurbo::Point;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct MyTypes {
        kind: ElementKind,
        elements: Vec<PathElement>,
        packed: PackedPath,
    }

    let elements = vec![
        PathElement::MoveTo(Point::new(0.0, 0.0)),
        PathElement::CurveTo(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ),
        PathElement::ClosePath,
    ];
    let my_instance = MyTypes {
        kind: ElementKind::QuadTo,
        packed: elements.iter().copied().collect(),
        elements,
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
