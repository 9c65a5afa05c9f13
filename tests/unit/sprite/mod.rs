use super::*;
use crate::foundation::core::{Color, Vec2};
use crate::render::cpu::CpuRasterizer;
use crate::scene::primitive::{Paint, Part, Primitive, Stamp};

fn pose(frame: &FrameSpec) -> Vec<Stamp> {
    frame
        .stamps()
        .filter(|s| s.part.is_pose())
        .cloned()
        .collect()
}

fn parts(frame: &FrameSpec, part: Part) -> Vec<Primitive> {
    frame
        .stamps()
        .filter(|s| s.part == part)
        .map(|s| s.primitive.clone())
        .collect()
}

#[test]
fn every_frame_is_deterministic_and_non_empty() {
    for style in Style::ALL {
        for (anim, phase) in style.frames() {
            let a = compute_frame(style, anim.state, phase);
            let b = compute_frame(style, anim.state, phase);
            assert_eq!(a, b, "{style} {} phase {phase}", anim.name);
            assert!(!a.is_empty(), "{style} {} phase {phase}", anim.name);
        }
    }
}

#[test]
fn phase_counts_match_the_app() {
    let pixel: Vec<_> = Style::Pixel
        .animations()
        .iter()
        .map(|a| (a.name, a.phases))
        .collect();
    assert_eq!(
        pixel,
        [
            ("idle", 4),
            ("wakeup", 3),
            ("typing", 4),
            ("running", 6),
            ("scared", 3),
            ("celebrate", 4),
            ("wave", 4),
            ("thinking", 4),
        ]
    );
    assert_eq!(Style::Pixel.frame_count(), 32);
    assert_eq!(Style::LineArt.frame_count(), 21);
}

#[test]
fn file_names_use_the_animation_prefix() {
    let working = Style::Pixel.animation(AnimationState::Working).unwrap();
    assert_eq!(working.file_name(5), "running-5.png");
    let error = Style::LineArt.animation(AnimationState::Error).unwrap();
    assert_eq!(error.file_name(0), "scared-0.png");
    assert_eq!(
        Style::LineArt
            .animation(AnimationState::Complete)
            .unwrap()
            .name,
        "celebrate"
    );
}

#[test]
fn every_state_has_a_unique_prefix_within_a_style() {
    for style in Style::ALL {
        let mut names: Vec<_> = style.animations().iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), style.animations().len(), "{style}");
    }
}

#[test]
fn line_art_skips_states_it_does_not_draw() {
    assert!(Style::LineArt.animation(AnimationState::Starting).is_none());
    assert!(Style::Pixel.animation(AnimationState::Waiting).is_none());
    assert_eq!(
        Style::LineArt
            .animation(AnimationState::Working)
            .unwrap()
            .phases,
        6
    );
}

#[test]
fn parse_states_and_styles() {
    assert_eq!(
        "compacting".parse::<AnimationState>().unwrap(),
        AnimationState::Compacting
    );
    assert!("Running".parse::<AnimationState>().is_err());
    assert_eq!("line-art".parse::<Style>().unwrap(), Style::LineArt);
    assert_eq!("line_art".parse::<Style>().unwrap(), Style::LineArt);
    assert_eq!("pixel".parse::<Style>().unwrap(), Style::Pixel);
    assert!("vector".parse::<Style>().is_err());
    assert_eq!(Style::default(), Style::Pixel);
}

#[test]
#[should_panic(expected = "out of range")]
fn phase_past_the_loop_panics() {
    compute_frame(Style::Pixel, AnimationState::Error, 3);
}

#[test]
#[should_panic(expected = "has no 'starting' animation")]
fn unsupported_state_panics() {
    compute_frame(Style::LineArt, AnimationState::Starting, 0);
}

#[test]
fn running_leaps_one_cell_up_on_phases_two_and_five() {
    let contact = pose(&compute_frame(Style::Pixel, AnimationState::Working, 0));
    let up = Vec2::new(0.0, -1.0);
    for phase in 1..6 {
        let frame = compute_frame(Style::Pixel, AnimationState::Working, phase);
        let expected: Vec<Stamp> = if phase == 2 || phase == 5 {
            contact.iter().cloned().map(|s| s.translate(up)).collect()
        } else {
            contact.clone()
        };
        assert_eq!(pose(&frame), expected, "phase {phase}");
        assert!(frame.has_part(Part::Leg));
    }
}

#[test]
fn running_legs_change_every_phase_but_repeat_on_leaps() {
    let legs = |phase| -> Vec<Stamp> {
        compute_frame(Style::Pixel, AnimationState::Working, phase)
            .part(Part::Leg)
            .cloned()
            .collect()
    };
    for phase in 0..5 {
        assert_ne!(legs(phase), legs(phase + 1), "phase {phase}");
    }
    assert_eq!(legs(2), legs(5));
}

#[test]
fn scared_fur_spikes_only_after_the_first_frame() {
    let fur = |phase| compute_frame(Style::Pixel, AnimationState::Error, phase).has_part(Part::Fur);
    assert!(!fur(0));
    assert!(fur(1));
    assert!(fur(2));
}

#[test]
fn idle_zzz_piles_up_in_the_overlay() {
    let marks = |phase| {
        let f = compute_frame(Style::Pixel, AnimationState::Idle, phase);
        assert!(f.base.iter().all(|s| s.part != Part::Zzz));
        f.overlay.iter().filter(|s| s.part == Part::Zzz).count()
    };
    assert_eq!([marks(0), marks(1), marks(2), marks(3)], [1, 2, 3, 3]);
}

#[test]
fn celebrate_wags_the_tail_and_moves_sparkles() {
    for style in Style::ALL {
        let tails: Vec<_> = (0..4)
            .map(|p| {
                compute_frame(style, AnimationState::Complete, p)
                    .part(Part::Tail)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_ne!(tails[0], tails[1], "{style}");
        assert_eq!(tails[1], tails[3], "{style}");

        for p in 0..4 {
            let f = compute_frame(style, AnimationState::Complete, p);
            assert!(!f.overlay.is_empty(), "{style} phase {p}");
            assert!(f.overlay.iter().all(|s| s.part == Part::Sparkle));
        }
    }
}

#[test]
fn line_art_tilt_moves_head_not_body() {
    let straight = compute_frame(Style::LineArt, AnimationState::Idle, 0);
    let tilted = compute_frame(Style::LineArt, AnimationState::Idle, 1);
    let parts = |f: &FrameSpec, p| f.part(p).cloned().collect::<Vec<_>>();

    assert_ne!(parts(&straight, Part::Head), parts(&tilted, Part::Head));
    assert_eq!(parts(&straight, Part::Body), parts(&tilted, Part::Body));
    assert_eq!(
        parts(&tilted, Part::Head),
        parts(&straight, Part::Head)
            .into_iter()
            .map(|s| s.translate(Vec2::new(1.5, 0.5)))
            .collect::<Vec<_>>()
    );
}

#[test]
fn cell_stamps_stay_inside_the_pixel_grid() {
    let grid = Style::Pixel.grid();
    for (anim, phase) in Style::Pixel.frames() {
        for s in compute_frame(Style::Pixel, anim.state, phase).stamps() {
            let inside = match &s.primitive {
                Primitive::FillRect(r) => r.clip_to_grid(grid.cells) == Some(*r),
                Primitive::Cells(cells) => cells.iter().all(|&(x, y)| grid.contains_cell(x, y)),
                _ => true,
            };
            assert!(inside, "{} phase {phase}: {:?}", anim.name, s.primitive);
        }
    }
}

#[test]
fn every_frame_rasterizes_to_a_visible_sprite() {
    for style in Style::ALL {
        let mut r = CpuRasterizer::new(style.grid()).unwrap();
        for (anim, phase) in style.frames() {
            let canvas = r
                .render_frame(&compute_frame(style, anim.state, phase))
                .unwrap();
            let px = style.grid().pixel_size();
            assert_eq!((canvas.width(), canvas.height()), (px, px));
            assert!(canvas.coverage() > 40, "{style} {} phase {phase}", anim.name);
        }
    }
}

#[test]
fn line_art_ball_follows_its_bob_table() {
    let balls: Vec<_> = (0..6)
        .map(|p| parts(&compute_frame(Style::LineArt, AnimationState::Working, p), Part::Prop))
        .collect();
    assert_eq!(
        balls[2],
        [Primitive::ellipse([18.0, 0.0, 21.0, 3.0], Paint::Fill)]
    );
    assert_eq!(
        balls[0],
        [Primitive::ellipse([18.0, 1.5, 21.0, 4.5], Paint::Fill)]
    );
    assert_eq!(
        balls[5],
        [Primitive::ellipse([17.5, 1.0, 20.5, 4.0], Paint::Fill)]
    );
}

#[test]
fn line_art_scared_pupils_look_right() {
    let eyes = parts(
        &compute_frame(Style::LineArt, AnimationState::Error, 1),
        Part::Eye,
    );
    assert!(eyes.contains(&Primitive::ellipse([9.0, 9.5, 11.0, 11.5], Paint::Fill)));
    assert!(eyes.contains(&Primitive::ellipse([14.0, 9.5, 16.0, 11.5], Paint::Fill)));

    let calm = parts(
        &compute_frame(Style::LineArt, AnimationState::Error, 0),
        Part::Eye,
    );
    assert!(calm.contains(&Primitive::ellipse([8.5, 9.5, 10.5, 11.5], Paint::Fill)));
}

#[test]
fn line_art_sparkles_are_plus_signs_at_table_points() {
    let frame = compute_frame(Style::LineArt, AnimationState::Complete, 0);
    let sparkles: Vec<_> = frame.overlay.iter().map(|s| s.primitive.clone()).collect();
    assert_eq!(
        sparkles,
        [
            Primitive::segment((1.0, 4.0), (4.0, 4.0), 0.5),
            Primitive::segment((2.5, 2.5), (2.5, 5.5), 0.5),
            Primitive::segment((18.0, 5.0), (21.0, 5.0), 0.5),
            Primitive::segment((19.5, 3.5), (19.5, 6.5), 0.5),
        ]
    );
    assert!(frame.overlay.iter().all(|s| s.color == Color::rgba(80, 200, 120, 140)));
}

#[test]
fn line_art_tail_wags_through_its_arcs() {
    let tail = |p| {
        parts(
            &compute_frame(Style::LineArt, AnimationState::Complete, p),
            Part::Tail,
        )
    };
    assert_eq!(
        tail(0),
        [Primitive::arc([16.0, 11.0, 22.0, 17.0], 270.0, 350.0, 1.0)]
    );
    assert_eq!(
        tail(2),
        [Primitive::arc([16.0, 9.0, 22.0, 15.0], 250.0, 330.0, 1.0)]
    );
}

#[test]
fn line_art_whiskers_fan_out_from_the_cheeks() {
    let whiskers = parts(
        &compute_frame(Style::LineArt, AnimationState::Working, 0),
        Part::Whisker,
    );
    assert_eq!(
        whiskers,
        [
            Primitive::segment((6.5, 12.5), (1.5, 11.0), 0.5),
            Primitive::segment((6.5, 12.5), (1.5, 13.0), 0.5),
            Primitive::segment((6.5, 12.5), (2.0, 14.5), 0.5),
            Primitive::segment((15.5, 12.5), (20.5, 11.0), 0.5),
            Primitive::segment((15.5, 12.5), (20.5, 13.0), 0.5),
            Primitive::segment((15.5, 12.5), (20.0, 14.5), 0.5),
        ]
    );
}
