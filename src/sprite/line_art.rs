//! Outline cat on a 22x22 grid, authored at half-cell precision.
//!
//! Stroke widths: `LINE` is the main 2 px outline, `HAIR` the 1 px detail line.

use crate::foundation::core::{Color, GridSpec, Vec2};
use crate::scene::frame::FrameSpec;
use crate::scene::primitive::{Paint, Part, Primitive, Stamp};
use crate::sprite::{Animation, AnimationState};

pub(crate) const GRID: GridSpec = GridSpec {
    cells: 22,
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
        state: AnimationState::Waiting,
        name: "waiting",
        phases: 4,
        interval_ms: 1000,
    },
    Animation {
        state: AnimationState::Working,
        name: "running",
        phases: 6,
        interval_ms: 150,
    },
    Animation {
        state: AnimationState::Complete,
        name: "celebrate",
        phases: 4,
        interval_ms: 300,
    },
    Animation {
        state: AnimationState::Error,
        name: "scared",
        phases: 3,
        interval_ms: 200,
    },
];

const LINE: f64 = 1.0;
const HAIR: f64 = 0.5;

const WHITE: Color = Color::rgb(255, 255, 255);
const YELLOW: Color = Color::rgb(220, 190, 60);
const GREEN: Color = Color::rgb(80, 200, 120);
const SPARKLE: Color = GREEN.with_alpha(140);
const RED: Color = Color::rgb(220, 80, 80);

const TILTS: [i8; 4] = [0, 1, 0, -1];

const BALL: [(f64, f64); 6] = [
    (19.5, 3.0),
    (19.0, 2.0),
    (19.5, 1.5),
    (20.0, 2.0),
    (19.5, 3.0),
    (19.0, 2.5),
];

/// `(bounds, start, end)` per wag phase.
const TAIL_WAG: [([f64; 4], f64, f64); 4] = [
    ([16.0, 11.0, 22.0, 17.0], 270.0, 350.0),
    ([17.0, 10.0, 22.0, 16.0], 260.0, 340.0),
    ([16.0, 9.0, 22.0, 15.0], 250.0, 330.0),
    ([17.0, 10.0, 22.0, 16.0], 260.0, 340.0),
];

const SPARKLES: [[(f64, f64); 2]; 4] = [
    [(2.5, 4.0), (19.5, 5.0)],
    [(1.5, 6.0), (20.5, 3.0)],
    [(3.0, 3.0), (19.0, 7.0)],
    [(2.0, 5.0), (20.0, 4.0)],
];

/// Pupil shift to the right per phase.
const LOOK: [f64; 3] = [0.5, 1.0, 0.5];

pub(crate) fn compose(state: AnimationState, phase: u8) -> FrameSpec {
    let i = usize::from(phase);
    match state {
        AnimationState::Idle => tilting_cat(TILTS[i], WHITE),
        AnimationState::Waiting => tilting_cat(TILTS[i], YELLOW),
        AnimationState::Working => working_cat(i),
        AnimationState::Complete => happy_cat(i),
        AnimationState::Error => error_cat(LOOK[i]),
        other => unreachable!("line-art style has no '{other}' animation"),
    }
}

struct Pen<'a> {
    out: &'a mut Vec<Stamp>,
    color: Color,
    offset: Vec2,
}

impl Pen<'_> {
    fn put(&mut self, part: Part, primitive: Primitive) {
        self.out
            .push(Stamp::new(part, primitive.translate(self.offset), self.color));
    }

    fn ears(&mut self, left: [(f64, f64); 3], right: [(f64, f64); 3]) {
        self.put(Part::Ear, Primitive::line(&left, LINE));
        self.put(Part::Ear, Primitive::line(&right, LINE));
    }

    fn dot(&mut self, part: Part, (x, y): (f64, f64), r: f64) {
        self.put(
            part,
            Primitive::ellipse([x - r, y - r, x + r, y + r], Paint::Fill),
        );
    }

    fn closed_eye(&mut self, (x, y): (f64, f64)) {
        self.put(
            Part::Eye,
            Primitive::arc([x - 1.5, y - 1.5, x + 1.5, y + 1.5], 0.0, 180.0, LINE),
        );
    }

    fn whiskers(&mut self, (x, y): (f64, f64), flip: bool) {
        let d = if flip { -1.0 } else { 1.0 };
        for (dx, dy) in [(5.0, -1.5), (5.0, 0.5), (4.5, 2.0)] {
            self.put(
                Part::Whisker,
                Primitive::segment((x, y), (x + d * dx, y + dy), HAIR),
            );
        }
    }

    fn nose(&mut self, (x, y): (f64, f64)) {
        self.put(
            Part::Nose,
            Primitive::polygon(
                &[(x, y - 0.5), (x - 1.0, y + 1.0), (x + 1.0, y + 1.0)],
                Paint::Outline(HAIR),
            ),
        );
    }

    fn w_mouth(&mut self, y: f64) {
        self.put(Part::Mouth, Primitive::arc([9.0, y, 11.0, y + 1.5], 0.0, 180.0, HAIR));
        self.put(Part::Mouth, Primitive::arc([11.0, y, 13.0, y + 1.5], 0.0, 180.0, HAIR));
    }

    /// Body arc over `top..bottom` plus side lines from `side` up to `side_top`.
    fn body(&mut self, top: f64, bottom: f64, side: f64, side_top: f64) {
        self.put(
            Part::Body,
            Primitive::arc([4.0, top, 18.0, bottom], 0.0, 180.0, LINE),
        );
        self.put(Part::Body, Primitive::segment((4.0, side), (4.0, side_top), LINE));
        self.put(Part::Body, Primitive::segment((18.0, side), (18.0, side_top), LINE));
    }

    /// Two L-shaped paws standing on `floor`, feet ending at `toe_left` / `toe_right`.
    fn paws(&mut self, top: f64, floor: f64, toe_left: f64, toe_right: f64) {
        self.put(Part::Paw, Primitive::segment((7.5, top), (7.5, floor), LINE));
        self.put(Part::Paw, Primitive::segment((7.5, floor), (toe_left, floor), LINE));
        self.put(Part::Paw, Primitive::segment((14.5, top), (14.5, floor), LINE));
        self.put(Part::Paw, Primitive::segment((14.5, floor), (toe_right, floor), LINE));
    }

    fn resting_tail(&mut self) {
        self.put(
            Part::Tail,
            Primitive::arc([16.5, 14.0, 21.5, 19.0], 270.0, 360.0, LINE),
        );
    }
}

/// Front-facing cat; `tilt` in {-1, 0, 1} swings the head sideways and a little down.
fn tilting_cat(tilt: i8, color: Color) -> FrameSpec {
    let t = f64::from(tilt);
    let mut frame = FrameSpec::default();

    let mut head = Pen {
        out: &mut frame.base,
        color,
        offset: Vec2::new(1.5 * t, 0.5 * t.abs()),
    };
    head.ears(
        [(4.0, 8.0), (6.0, 2.5), (8.5, 7.0)],
        [(13.5, 7.0), (16.0, 2.5), (18.0, 8.0)],
    );
    head.put(
        Part::Head,
        Primitive::ellipse([4.5, 6.0, 17.5, 14.5], Paint::Outline(LINE)),
    );
    head.dot(Part::Eye, (8.5, 10.0), 1.0);
    head.dot(Part::Eye, (13.5, 10.0), 1.0);
    head.nose((11.0, 11.5));
    head.w_mouth(12.0);
    head.whiskers((6.5, 11.5), true);
    head.whiskers((15.5, 11.5), false);

    let mut body = Pen {
        out: &mut frame.base,
        color,
        offset: Vec2::ZERO,
    };
    body.body(13.0, 21.0, 17.0, 14.0);
    body.paws(18.5, 21.0, 9.0, 13.0);
    body.resting_tail();
    frame
}

/// Shared head and body of the working and error cats.
fn sitting_frame(pen: &mut Pen<'_>) {
    pen.ears(
        [(4.0, 9.0), (6.0, 4.0), (8.5, 8.0)],
        [(13.5, 8.0), (16.0, 4.0), (18.0, 9.0)],
    );
    pen.put(
        Part::Head,
        Primitive::ellipse([4.5, 7.0, 17.5, 15.0], Paint::Outline(LINE)),
    );
}

fn sitting_body(pen: &mut Pen<'_>) {
    pen.body(14.0, 21.5, 18.0, 15.0);
    pen.paws(18.5, 21.0, 6.5, 15.5);
    pen.resting_tail();
}

fn working_cat(phase: usize) -> FrameSpec {
    let mut frame = FrameSpec::default();
    let mut pen = Pen {
        out: &mut frame.base,
        color: GREEN,
        offset: Vec2::ZERO,
    };
    sitting_frame(&mut pen);
    pen.dot(Part::Eye, (8.5, 11.0), 1.0);
    pen.dot(Part::Eye, (13.5, 11.0), 1.0);
    pen.nose((11.0, 12.5));
    pen.w_mouth(13.0);
    pen.whiskers((6.5, 12.5), true);
    pen.whiskers((15.5, 12.5), false);
    sitting_body(&mut pen);
    pen.dot(Part::Prop, BALL[phase], 1.5);
    frame
}

fn happy_cat(phase: usize) -> FrameSpec {
    let mut frame = FrameSpec::default();
    let mut pen = Pen {
        out: &mut frame.base,
        color: GREEN,
        offset: Vec2::ZERO,
    };
    pen.ears(
        [(5.0, 8.0), (7.0, 3.0), (9.0, 7.0)],
        [(13.0, 7.0), (15.0, 3.0), (17.0, 8.0)],
    );
    pen.put(
        Part::Head,
        Primitive::ellipse([5.0, 6.0, 17.0, 14.0], Paint::Outline(LINE)),
    );
    pen.closed_eye((8.5, 10.0));
    pen.closed_eye((13.5, 10.0));
    pen.put(Part::Mouth, Primitive::arc([8.0, 11.0, 14.0, 14.0], 0.0, 180.0, LINE));
    pen.whiskers((7.0, 11.5), true);
    pen.whiskers((15.0, 11.5), false);
    pen.body(12.0, 21.0, 16.5, 14.0);
    pen.paws(18.0, 20.5, 9.0, 16.0);

    let (bounds, start, end) = TAIL_WAG[phase];
    pen.put(Part::Tail, Primitive::arc(bounds, start, end, LINE));

    let mut sparkle = Pen {
        out: &mut frame.overlay,
        color: SPARKLE,
        offset: Vec2::ZERO,
    };
    for (x, y) in SPARKLES[phase] {
        sparkle.put(
            Part::Sparkle,
            Primitive::segment((x - 1.5, y), (x + 1.5, y), HAIR),
        );
        sparkle.put(
            Part::Sparkle,
            Primitive::segment((x, y - 1.5), (x, y + 1.5), HAIR),
        );
    }
    frame
}

/// Big O_O eyes, pupils pushed right by `look`.
fn error_cat(look: f64) -> FrameSpec {
    let mut frame = FrameSpec::default();
    let mut pen = Pen {
        out: &mut frame.base,
        color: RED,
        offset: Vec2::ZERO,
    };
    sitting_frame(&mut pen);
    pen.put(
        Part::Eye,
        Primitive::ellipse([6.5, 8.5, 10.5, 12.5], Paint::Outline(LINE)),
    );
    pen.dot(Part::Eye, (9.0 + look, 10.5), 1.0);
    pen.put(
        Part::Eye,
        Primitive::ellipse([11.5, 8.5, 15.5, 12.5], Paint::Outline(LINE)),
    );
    pen.dot(Part::Eye, (14.0 + look, 10.5), 1.0);
    pen.nose((11.0, 13.0));
    pen.put(
        Part::Mouth,
        Primitive::ellipse([10.0, 13.5, 12.0, 15.0], Paint::Outline(HAIR)),
    );
    sitting_body(&mut pen);
    frame
}
