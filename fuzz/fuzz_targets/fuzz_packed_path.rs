#![no_main]
//! Checks that traversal of arbitrary verb and point buffers never panics,
//! and that well formed buffers survive being repacked.

use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use vandra::{
    element_count, elements, for_each_element, kurbo::Point, visit_path, PackedPath, PathElement,
    Track,
};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    verbs: Vec<u8>,
    coords: Vec<(f32, f32)>,
}

fuzz_target!(|input: FuzzInput| {
    let points = input
        .coords
        .iter()
        .map(|(x, y)| Point::new(*x as f64, *y as f64))
        .collect();
    let path = PackedPath::from_raw_parts(input.verbs, points);

    let mut visited = vec![];
    let result = for_each_element(&path, |el: PathElement| visited.push(el));
    let lazy = elements(&path).collect::<Vec<_>>();

    match result {
        Ok(()) => {
            assert_eq!(element_count(&path).ok(), Some(visited.len()));
            assert_eq!(lazy.len(), visited.len());
            for el in &visited {
                assert_eq!(el.points().len(), el.kind().point_count());
            }
            let repacked = visited.iter().copied().collect::<PackedPath>();
            assert_eq!(repacked.verbs(), path.verbs());
            let mut again: Vec<PathElement> = vec![];
            visit_path(&repacked, &mut again).unwrap();
            assert_eq!(again.len(), visited.len());
            // end points only: dashing arbitrary coordinates can yield
            // an unbounded number of samples
            if let Ok(track) = Track::from_end_points(&path, 0.1) {
                for point in track.points() {
                    track.nearest(0, *point);
                }
            }
        }
        Err(e) => {
            // all or nothing
            assert!(visited.is_empty());
            assert_eq!(lazy.len(), e.index() + 1);
            assert_eq!(lazy.last(), Some(&Err(e)));
        }
    }
});
