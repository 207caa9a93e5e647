mod common;

use common::{build_rgb_ser, build_ser_header, solid_frame, write_test_ser, COLOR_ID_BGR};
use vigil_core::error::VigilError;
use vigil_core::frame::ColorMode;
use vigil_core::io::ser::SerVideo;

#[test]
fn test_open_rejects_bad_magic() {
    let mut data = build_rgb_ser(2, 2, &[solid_frame(2, 2, [1, 2, 3])]);
    data[0..5].copy_from_slice(b"WRONG");
    let file = write_test_ser(&data);
    let err = SerVideo::open(file.path()).unwrap_err();
    assert!(matches!(err, VigilError::InvalidSer(_)), "got {err:?}");
}

#[test]
fn test_open_rejects_truncated_file() {
    let frames = vec![solid_frame(4, 4, [9, 9, 9]); 3];
    let mut data = build_rgb_ser(4, 4, &frames);
    data.truncate(data.len() - 10);
    let file = write_test_ser(&data);
    let err = SerVideo::open(file.path()).unwrap_err();
    assert!(matches!(err, VigilError::InvalidSer(_)), "got {err:?}");
}

#[test]
fn test_open_rejects_mono_source() {
    // ColorID 0 = MONO; the detector needs 3-channel color input.
    let data = build_ser_header(4, 4, 8, 0, 0);
    let file = write_test_ser(&data);
    let err = SerVideo::open(file.path()).unwrap_err();
    assert!(matches!(err, VigilError::UnsupportedFormat(_)), "got {err:?}");
}

#[test]
fn test_open_rejects_16bit_source() {
    let data = build_ser_header(4, 4, 16, 0, common::COLOR_ID_RGB);
    let file = write_test_ser(&data);
    let err = SerVideo::open(file.path()).unwrap_err();
    assert!(matches!(err, VigilError::UnsupportedFormat(_)), "got {err:?}");
}

#[test]
fn test_open_rejects_zero_dimensions() {
    let data = build_ser_header(0, 4, 8, 0, common::COLOR_ID_RGB);
    let file = write_test_ser(&data);
    let err = SerVideo::open(file.path()).unwrap_err();
    assert!(
        matches!(err, VigilError::InvalidDimensions { width: 0, height: 4 }),
        "got {err:?}"
    );
}

#[test]
fn test_header_fields() {
    let frames = vec![solid_frame(6, 4, [10, 20, 30]); 5];
    let data = build_rgb_ser(6, 4, &frames);
    let file = write_test_ser(&data);
    let video = SerVideo::open(file.path()).unwrap();

    assert_eq!(video.frame_count(), 5);
    assert_eq!(video.width(), 6);
    assert_eq!(video.height(), 4);
    assert_eq!(video.header.color_mode(), ColorMode::Rgb);

    let info = video.info(file.path());
    assert_eq!(info.total_frames, 5);
    assert_eq!(info.bit_depth, 8);
    assert!(info.observer.is_none());
}

#[test]
fn test_read_next_yields_frames_then_permanent_eos() {
    let frames: Vec<Vec<u8>> = (0..3).map(|i| solid_frame(2, 2, [i, i, i])).collect();
    let data = build_rgb_ser(2, 2, &frames);
    let file = write_test_ser(&data);
    let mut video = SerVideo::open(file.path()).unwrap();

    for i in 0..3u8 {
        let frame = video.read_next().unwrap().expect("frame available");
        assert_eq!(frame.pixel(0, 0), [i, i, i]);
        assert_eq!(frame.pixel(1, 1), [i, i, i]);
    }
    assert!(video.read_next().unwrap().is_none());
    // Exhaustion is permanent.
    assert!(video.read_next().unwrap().is_none());
}

#[test]
fn test_bgr_source_is_swapped_to_rgb() {
    // On-disk order B, G, R; decoded pixels must come back as R, G, B.
    let mut data = build_ser_header(2, 1, 8, 1, COLOR_ID_BGR);
    data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
    let file = write_test_ser(&data);
    let mut video = SerVideo::open(file.path()).unwrap();

    let frame = video.read_next().unwrap().unwrap();
    assert_eq!(frame.pixel(0, 0), [3, 2, 1]);
    assert_eq!(frame.pixel(0, 1), [6, 5, 4]);
}

#[test]
fn test_read_frame_out_of_range() {
    let data = build_rgb_ser(2, 2, &[solid_frame(2, 2, [0, 0, 0])]);
    let file = write_test_ser(&data);
    let video = SerVideo::open(file.path()).unwrap();
    let err = video.read_frame(5).unwrap_err();
    assert!(
        matches!(err, VigilError::FrameIndexOutOfRange { index: 5, total: 1 }),
        "got {err:?}"
    );
}
