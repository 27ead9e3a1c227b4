use super::*;

#[test]
fn transform_style_identity() {
    assert_eq!(transform_style(Transform::IDENTITY), "transform: scale(1) translate(0px, 0px); transform-origin: center center;");
}

#[test]
fn transform_style_zoomed_and_panned() {
    let t = Transform { scale: 3.0, offset_x: 12.5, offset_y: -40.0 };
    assert_eq!(transform_style(t), "transform: scale(3) translate(12.5px, -40px); transform-origin: center center;");
}

#[test]
fn backdrop_hidden_while_closed() {
    assert!(backdrop_style(false).starts_with("display: none;"));
    assert!(backdrop_style(true).starts_with("display: flex;"));
}

#[test]
fn backdrop_disables_browser_touch_gestures() {
    assert!(backdrop_style(true).contains("touch-action: none;"));
    assert!(backdrop_style(false).contains("touch-action: none;"));
}
