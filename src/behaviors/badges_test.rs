use super::*;
use crate::consts::PULSE_KEYFRAMES;

#[test]
fn urgent_badges_pulse_every_two_seconds() {
    assert_eq!(badge_animation(true), "pulse 2s infinite");
}

#[test]
fn other_priority_badges_are_still() {
    assert_eq!(badge_animation(false), "none");
}

#[test]
fn keyframes_define_the_animation_the_badges_reference() {
    let name = URGENT_ANIMATION.split_whitespace().next().unwrap_or_default();
    assert!(PULSE_KEYFRAMES.contains(&format!("@keyframes {name}")));
    assert!(PULSE_KEYFRAMES.contains("box-shadow"));
    assert!(PULSE_KEYFRAMES.contains("opacity"));
}
