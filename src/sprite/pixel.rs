//! Filled-cell cat on an 18x18 grid.
//!
//! Every coordinate is a whole cell. Sitting states share one front-facing pose; running
//! and scared use side views of their own.

use crate::foundation::core::{Color, GridSpec, Vec2};
use crate::scene::frame::FrameSpec;
use crate::scene::primitive::{CellRect, Part, Primitive, Stamp};
use crate::sprite::{Animation, AnimationState};

pub(crate) const GRID: GridSpec = GridSpec {
    cells: 18,
    scale: 2,
};

pub(crate) const ANIMATIONS: &[Animation] = &[
    Animation {
        state: AnimationState::Idle,
        name: "idle",
        phases: 4,
        interval_ms: 1000,
    },
    Animation {
        state: AnimationState::Starting,
        name: "wakeup",
        phases: 3,
        interval_ms: 300,
    },
    Animation {
        state: AnimationState::Thinking,
        name: "typing",
        phases: 4,
        interval_ms: 400,
    },
    Animation {
        state: AnimationState::Working,
        name: "running",
        phases: 6,
        interval_ms: 150,
    },
    Animation {
        state: AnimationState::Error,
        name: "scared",
        phases: 3,
        interval_ms: 200,
    },
    Animation {
        state: AnimationState::Complete,
        name: "celebrate",
        phases: 4,
        interval_ms: 300,
    },
    Animation {
        state: AnimationState::Ending,
        name: "wave",
        phases: 4,
        interval_ms: 400,
    },
    Animation {
        state: AnimationState::Compacting,
        name: "thinking",
        phases: 4,
        interval_ms: 500,
    },
];

/// Eyes, nose and mouth.
const FEATURE: Color = Color::rgb(34, 30, 38);

#[derive(Clone, Copy)]
struct Palette {
    body: Color,
    /// Lighter secondary color for whiskers, props and floating marks.
    accent: Color,
}

fn palette(state: AnimationState) -> Palette {
    let (body, accent) = match state {
        AnimationState::Idle => ((170, 170, 178), (225, 225, 232)),
        AnimationState::Starting => ((230, 200, 70), (255, 236, 150)),
        AnimationState::Thinking => ((90, 150, 230), (170, 205, 255)),
        AnimationState::Working => ((80, 200, 120), (170, 235, 190)),
        AnimationState::Error => ((220, 80, 80), (255, 170, 170)),
        AnimationState::Complete => ((230, 180, 50), (255, 230, 140)),
        AnimationState::Ending => ((170, 110, 220), (220, 190, 250)),
        AnimationState::Compacting | AnimationState::Waiting => ((70, 190, 190), (160, 235, 235)),
    };
    Palette {
        body: Color::rgb(body.0, body.1, body.2),
        accent: Color::rgb(accent.0, accent.1, accent.2),
    }
}

type Cells = &'static [(i32, i32)];

// Curled sleep.
const TAIL_SWAY: [Cells; 4] = [
    &[(15, 14), (16, 13), (16, 12)],
    &[(15, 14), (16, 14), (17, 13)],
    &[(15, 14), (16, 13), (16, 12)],
    &[(15, 15), (16, 15), (17, 15)],
];
const ZZZ: [Cells; 3] = [
    &[(7, 8), (6, 9)],
    &[(9, 4), (10, 4), (11, 4), (10, 5), (9, 6), (10, 6), (11, 6)],
    &[
        (13, 0),
        (14, 0),
        (15, 0),
        (16, 0),
        (15, 1),
        (14, 2),
        (13, 3),
        (14, 3),
        (15, 3),
        (16, 3),
    ],
];
/// Marks visible per idle phase; they pile up, then hold.
const ZZZ_COUNT: [usize; 4] = [1, 2, 3, 3];

/// `(eyes, head drop, yawning)` per wakeup phase.
const WAKEUP: [(Eyes, i32, bool); 3] = [
    (Eyes::Closed, 1, true),
    (Eyes::Closed, 0, false),
    (Eyes::Open, 0, false),
];

/// `(left, right)` paw lifted off the keyboard.
const KEYS: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (false, false)];

const WAVE_ARM: [Cells; 4] = [
    &[(13, 10), (14, 9), (15, 8)],
    &[(13, 10), (14, 9), (14, 8)],
    &[(13, 10), (14, 9), (15, 8)],
    &[(13, 10), (14, 9), (16, 9)],
];

const TILTS: [i32; 4] = [0, 1, 0, -1];
const THOUGHT_DOTS: [(i32, i32); 3] = [(15, 4), (16, 2), (17, 0)];
const THOUGHT_COUNT: [usize; 4] = [1, 2, 3, 0];

/// Vertical offset of the running pose; phases 2 and 5 are airborne.
const BOB: [i32; 6] = [0, 0, -1, 0, 0, -1];
/// `(front, back)` leg cells per running phase.
const GAIT: [(Cells, Cells); 6] = [
    (
        &[(11, 13), (11, 14), (12, 15), (12, 16)],
        &[(4, 13), (4, 14), (3, 15), (3, 16)],
    ),
    (
        &[(10, 13), (10, 14), (10, 15), (10, 16)],
        &[(5, 13), (5, 14), (5, 15), (5, 16)],
    ),
    (&[(12, 12), (13, 13), (14, 13)], &[(3, 12), (2, 13), (1, 13)]),
    (&[(10, 13), (9, 14)], &[(5, 13), (6, 14)]),
    (
        &[(11, 13), (11, 14), (10, 15), (10, 16)],
        &[(4, 13), (4, 14), (5, 15), (5, 16)],
    ),
    (&[(12, 12), (13, 13), (14, 13)], &[(3, 12), (2, 13), (1, 13)]),
];

const FUR_LEVEL: [u8; 3] = [0, 1, 1];
const FUR: Cells = &[(5, 5), (7, 5), (9, 5), (11, 6), (0, 4), (0, 6), (3, 4)];
/// Pupil shift to the right per scared phase.
const LOOK: [i32; 3] = [0, 1, 0];

/// `(start, end)` degrees of the tail arc per celebrate phase.
const TAIL_WAG: [(f64, f64); 4] = [(180.0, 270.0), (170.0, 260.0), (160.0, 250.0), (170.0, 260.0)];
const SPARKLES: [[(i32, i32); 2]; 4] = [
    [(2, 2), (15, 2)],
    [(1, 4), (16, 1)],
    [(2, 1), (15, 4)],
    [(1, 3), (16, 3)],
];

pub(crate) fn compose(state: AnimationState, phase: u8) -> FrameSpec {
    let pal = palette(state);
    let i = usize::from(phase);
    match state {
        AnimationState::Idle => sleeping(pal, i),
        AnimationState::Starting => waking(pal, i),
        AnimationState::Thinking => typing(pal, i),
        AnimationState::Working => running(pal, i),
        AnimationState::Error => scared(pal, i),
        AnimationState::Complete => celebrating(pal, i),
        AnimationState::Ending => waving(pal, i),
        AnimationState::Compacting => pondering(pal, i),
        other => unreachable!("pixel style has no '{other}' animation"),
    }
}

fn block(part: Part, x: i32, y: i32, w: u32, h: u32, color: Color) -> Stamp {
    Stamp::new(part, Primitive::FillRect(CellRect::new(x, y, w, h)), color)
}

fn cells(part: Part, cells: &[(i32, i32)], color: Color) -> Stamp {
    Stamp::new(part, Primitive::Cells(cells.to_vec()), color)
}

fn shift(dx: i32, dy: i32) -> Vec2 {
    Vec2::new(f64::from(dx), f64::from(dy))
}

#[derive(Clone, Copy)]
enum Eyes {
    Open,
    Closed,
    /// Upturned `^ ^`.
    Happy,
}

impl Eyes {
    fn stamps(self) -> [Stamp; 2] {
        match self {
            Eyes::Open => [
                block(Part::Eye, 6, 5, 1, 2, FEATURE),
                block(Part::Eye, 11, 5, 1, 2, FEATURE),
            ],
            Eyes::Closed => [
                block(Part::Eye, 5, 6, 2, 1, FEATURE),
                block(Part::Eye, 11, 6, 2, 1, FEATURE),
            ],
            Eyes::Happy => [
                cells(Part::Eye, &[(5, 6), (6, 5), (7, 6)], FEATURE),
                cells(Part::Eye, &[(10, 6), (11, 5), (12, 6)], FEATURE),
            ],
        }
    }
}

/// Front-facing head, moved as one piece by `offset`.
fn front_head(out: &mut Vec<Stamp>, pal: Palette, eyes: Eyes, offset: Vec2) {
    let head = [
        cells(
            Part::Ear,
            &[(5, 2), (5, 3), (6, 3), (12, 2), (11, 3), (12, 3)],
            pal.body,
        ),
        block(Part::Head, 4, 4, 10, 5, pal.body),
        block(Part::Head, 5, 9, 8, 1, pal.body),
        block(Part::Whisker, 2, 7, 2, 1, pal.accent),
        block(Part::Whisker, 14, 7, 2, 1, pal.accent),
    ];
    out.extend(
        head.into_iter()
            .chain(eyes.stamps())
            .chain([block(Part::Nose, 8, 7, 2, 1, FEATURE)])
            .map(|s| s.translate(offset)),
    );
}

fn seated_body(out: &mut Vec<Stamp>, pal: Palette) {
    out.push(block(Part::Body, 5, 10, 8, 5, pal.body));
}

fn ground_paws(out: &mut Vec<Stamp>, pal: Palette) {
    out.push(block(Part::Paw, 5, 15, 2, 1, pal.body));
    out.push(block(Part::Paw, 11, 15, 2, 1, pal.body));
}

fn resting_tail(out: &mut Vec<Stamp>, pal: Palette) {
    out.push(cells(
        Part::Tail,
        &[(13, 13), (14, 13), (15, 12), (15, 11)],
        pal.body,
    ));
}

/// Plain sitting cat with the given eyes and head offset.
fn sitting(pal: Palette, eyes: Eyes, head: Vec2) -> FrameSpec {
    let mut frame = FrameSpec::default();
    seated_body(&mut frame.base, pal);
    ground_paws(&mut frame.base, pal);
    resting_tail(&mut frame.base, pal);
    front_head(&mut frame.base, pal, eyes, head);
    frame
}

fn sleeping(pal: Palette, phase: usize) -> FrameSpec {
    let mut frame = FrameSpec::default();
    frame.base.extend([
        block(Part::Body, 6, 10, 8, 1, pal.body),
        block(Part::Body, 5, 11, 10, 5, pal.body),
        block(Part::Body, 6, 16, 8, 1, pal.body),
        cells(Part::Tail, TAIL_SWAY[phase], pal.body),
        block(Part::Head, 2, 11, 5, 4, pal.body),
        cells(Part::Ear, &[(2, 10), (5, 10)], pal.body),
        block(Part::Eye, 3, 12, 2, 1, FEATURE),
    ]);
    frame.overlay.extend(
        ZZZ[..ZZZ_COUNT[phase]]
            .iter()
            .map(|mark| cells(Part::Zzz, mark, pal.accent)),
    );
    frame
}

fn waking(pal: Palette, phase: usize) -> FrameSpec {
    let (eyes, drop, yawn) = WAKEUP[phase];
    let head = shift(0, drop);
    let mut frame = sitting(pal, eyes, head);
    if yawn {
        frame
            .base
            .push(block(Part::Mouth, 8, 8, 2, 1, FEATURE).translate(head));
    }
    frame
}

fn typing(pal: Palette, phase: usize) -> FrameSpec {
    let (left_up, right_up) = KEYS[phase];
    let row = |up: bool| if up { 14 } else { 15 };

    let mut frame = FrameSpec::default();
    seated_body(&mut frame.base, pal);
    front_head(&mut frame.base, pal, Eyes::Open, Vec2::ZERO);
    frame.base.extend([
        block(Part::Prop, 3, 16, 12, 1, pal.accent),
        block(Part::Paw, 3, row(left_up), 2, 1, pal.body),
        block(Part::Paw, 13, row(right_up), 2, 1, pal.body),
    ]);
    frame
}

fn waving(pal: Palette, phase: usize) -> FrameSpec {
    let mut frame = FrameSpec::default();
    seated_body(&mut frame.base, pal);
    resting_tail(&mut frame.base, pal);
    front_head(&mut frame.base, pal, Eyes::Happy, Vec2::ZERO);
    frame.base.extend([
        block(Part::Paw, 5, 15, 2, 1, pal.body),
        cells(Part::Paw, WAVE_ARM[phase], pal.body),
    ]);
    frame
}

fn pondering(pal: Palette, phase: usize) -> FrameSpec {
    let mut frame = sitting(pal, Eyes::Open, shift(TILTS[phase], 0));
    frame.overlay.extend(
        THOUGHT_DOTS[..THOUGHT_COUNT[phase]]
            .iter()
            .map(|&dot| cells(Part::ThoughtDot, &[dot], pal.accent)),
    );
    frame
}

fn running(pal: Palette, phase: usize) -> FrameSpec {
    let bob = shift(0, BOB[phase]);
    let (front, back) = GAIT[phase];
    let pose = [
        cells(Part::Tail, &[(2, 9), (1, 8), (0, 7)], pal.body),
        block(Part::Body, 3, 9, 9, 4, pal.body),
        block(Part::Head, 11, 5, 5, 5, pal.body),
        block(Part::Head, 16, 7, 1, 2, pal.body),
        cells(Part::Ear, &[(12, 4), (15, 4)], pal.body),
        cells(Part::Eye, &[(14, 6)], FEATURE),
        cells(Part::Nose, &[(16, 7)], FEATURE),
    ];

    let mut frame = FrameSpec::default();
    frame.base.extend(pose.into_iter().map(|s| s.translate(bob)));
    frame.base.push(cells(Part::Leg, back, pal.body));
    frame.base.push(cells(Part::Leg, front, pal.body));
    frame
}

fn scared(pal: Palette, phase: usize) -> FrameSpec {
    let mut frame = FrameSpec::default();
    frame.base.extend([
        block(Part::Tail, 1, 3, 2, 5, pal.body),
        cells(Part::Tail, &[(3, 7)], pal.body),
        block(Part::Body, 5, 6, 6, 1, pal.body),
        block(Part::Body, 4, 7, 8, 4, pal.body),
    ]);
    frame
        .base
        .extend([4, 6, 9, 11].map(|x| block(Part::Leg, x, 11, 1, 5, pal.body)));
    frame.base.extend([
        block(Part::Head, 12, 4, 5, 5, pal.body),
        cells(Part::Ear, &[(12, 3), (16, 3)], pal.body),
        block(Part::Eye, 13, 5, 2, 2, pal.accent),
        cells(Part::Eye, &[(13 + LOOK[phase], 6)], FEATURE),
        block(Part::Mouth, 15, 7, 2, 1, FEATURE),
    ]);
    if FUR_LEVEL[phase] > 0 {
        frame.base.push(cells(Part::Fur, FUR, pal.body));
    }
    frame
}

fn celebrating(pal: Palette, phase: usize) -> FrameSpec {
    let mut frame = FrameSpec::default();
    seated_body(&mut frame.base, pal);
    ground_paws(&mut frame.base, pal);
    let (start, end) = TAIL_WAG[phase];
    frame.base.push(Stamp::new(
        Part::Tail,
        Primitive::arc([13.0, 8.0, 18.0, 14.0], start, end, 1.0),
        pal.body,
    ));
    front_head(&mut frame.base, pal, Eyes::Happy, Vec2::ZERO);
    frame.base.push(cells(
        Part::Mouth,
        &[(7, 8), (8, 9), (9, 9), (10, 8)],
        FEATURE,
    ));

    frame.overlay.extend(SPARKLES[phase].iter().map(|&(x, y)| {
        cells(
            Part::Sparkle,
            &[(x, y - 1), (x - 1, y), (x, y), (x + 1, y), (x, y + 1)],
            pal.accent,
        )
    }));
    frame
}
