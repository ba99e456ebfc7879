// Native tests for control command parsing.

use scope_core::Command;

#[test]
fn numeric_input_becomes_a_command() {
    assert_eq!(
        Command::parse_visible_frames("12"),
        Some(Command::SetVisibleFrames(12))
    );
    assert_eq!(
        Command::parse_visible_frames("  3 "),
        Some(Command::SetVisibleFrames(3))
    );
    // out-of-range values still parse; clamping happens at dispatch
    assert_eq!(
        Command::parse_visible_frames("0"),
        Some(Command::SetVisibleFrames(0))
    );
}

#[test]
fn non_numeric_input_produces_no_command() {
    for raw in ["", "abc", "-3", "2.5", "1e3", "+"] {
        assert_eq!(Command::parse_visible_frames(raw), None, "raw={raw:?}");
    }
}
