use super::*;
use crate::encode::png::decode_png;
use crate::encode::sink::InMemorySink;

#[test]
fn defaults_target_the_app_bundle() {
    let opts = GenerateOpts::default();
    assert_eq!(opts.out_dir, PathBuf::from("app/MeowBar/Resources/Frames"));
    assert_eq!(opts.style, Style::Pixel);
    assert!(opts.parallel);
    assert!(opts.manifest);

    let opts = opts
        .with_out_dir("x")
        .with_style(Style::LineArt)
        .with_parallel(false)
        .with_threads(Some(2))
        .with_manifest(false);
    assert_eq!(opts.out_dir, PathBuf::from("x"));
    assert_eq!(opts.style, Style::LineArt);
    assert!(!opts.parallel);
    assert_eq!(opts.threads, Some(2));
    assert!(!opts.manifest);
}

#[test]
fn serial_and_parallel_rendering_agree() {
    for style in Style::ALL {
        let serial = render_frames(style, false, None).unwrap();
        let parallel = render_frames(style, true, Some(3)).unwrap();
        assert_eq!(serial, parallel, "{style}");
        assert_eq!(serial.len(), style.frame_count());
    }
}

#[test]
fn zero_threads_is_rejected() {
    let err = render_frames(Style::Pixel, true, Some(0)).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn render_into_streams_frames_in_table_order() {
    let mut sink = InMemorySink::new();
    let opts = GenerateOpts::default().with_parallel(false);
    let n = render_into(&opts, &mut sink).unwrap();

    assert_eq!(n, 32);
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frames), (36, 36, 32));

    let names: Vec<_> = sink.frames().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        &names[..5],
        ["idle-0.png", "idle-1.png", "idle-2.png", "idle-3.png", "wakeup-0.png"]
    );
    let running: Vec<_> = names.iter().filter(|n| n.starts_with("running-")).collect();
    assert_eq!(running.len(), 6);
    assert_eq!(*running[5], "running-5.png");
}

#[test]
fn encoded_frames_decode_to_the_rendered_canvas() {
    let frames = render_frames(Style::LineArt, false, None).unwrap();
    let scared = frames
        .iter()
        .find(|f| f.file_name == "scared-1.png")
        .unwrap();
    let canvas = render_single(Style::LineArt, AnimationState::Error, 1).unwrap();
    assert_eq!(decode_png(&scared.png).unwrap(), canvas);
}

#[test]
fn render_single_validates_instead_of_panicking() {
    assert!(render_single(Style::Pixel, AnimationState::Working, 6).is_err());
    assert!(render_single(Style::Pixel, AnimationState::Waiting, 0).is_err());
    let c = render_single(Style::Pixel, AnimationState::Working, 5).unwrap();
    assert_eq!(c.width(), 36);
}

#[test]
fn manifest_lists_every_file_with_intervals() {
    let m = Manifest::for_style(Style::Pixel);
    assert_eq!(m.size, 36);
    let running = m
        .animations
        .iter()
        .find(|a| a.state == AnimationState::Working)
        .unwrap();
    assert_eq!(running.name, "running");
    assert_eq!(running.interval_ms, 150);
    assert_eq!(running.files.len(), 6);
    assert_eq!(running.files[0], "running-0.png");

    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["style"], "pixel");
    assert_eq!(json["animations"][0]["state"], "idle");
    assert_eq!(json["animations"][0]["interval_ms"], 1000);
}
