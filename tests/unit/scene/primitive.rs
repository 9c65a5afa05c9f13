use super::*;

#[test]
fn clip_drops_rects_fully_outside_grid() {
    assert_eq!(CellRect::new(18, 0, 2, 2).clip_to_grid(18), None);
    assert_eq!(CellRect::new(-3, 4, 3, 1).clip_to_grid(18), None);
}

#[test]
fn clip_trims_rects_straddling_the_edge() {
    assert_eq!(
        CellRect::new(16, -1, 4, 3).clip_to_grid(18),
        Some(CellRect::new(16, 0, 2, 2))
    );
}

#[test]
fn translate_moves_cells_by_whole_units() {
    let p = Primitive::FillRect(CellRect::new(3, 9, 10, 4)).translate(Vec2::new(0.0, -1.0));
    assert_eq!(p, Primitive::FillRect(CellRect::new(3, 8, 10, 4)));

    let p = Primitive::Cells(vec![(1, 1), (2, 5)]).translate(Vec2::new(2.0, 0.0));
    assert_eq!(p, Primitive::Cells(vec![(3, 1), (4, 5)]));
}

#[test]
fn translate_moves_vector_geometry() {
    let p = Primitive::ellipse([4.5, 6.0, 17.5, 14.5], Paint::Outline(1.0))
        .translate(Vec2::new(1.5, 0.5));
    assert_eq!(
        p,
        Primitive::ellipse([6.0, 6.5, 19.0, 15.0], Paint::Outline(1.0))
    );

    let p = Primitive::segment((4.0, 17.0), (4.0, 14.0), 1.0).translate(Vec2::new(-1.5, 0.0));
    assert_eq!(p, Primitive::segment((2.5, 17.0), (2.5, 14.0), 1.0));
}

#[test]
fn zero_translate_is_identity() {
    let p = Primitive::arc([16.5, 14.0, 21.5, 19.0], 270.0, 360.0, 1.0);
    assert_eq!(p.clone().translate(Vec2::ZERO), p);
}

#[test]
fn pose_parts_exclude_overlays_and_legs() {
    assert!(Part::Head.is_pose());
    assert!(Part::Tail.is_pose());
    assert!(!Part::Leg.is_pose());
    assert!(!Part::Fur.is_pose());
    assert!(!Part::Sparkle.is_pose());
    assert!(!Part::Zzz.is_pose());
}
